mod data_stores;
mod error;
mod group;
mod group_id;
mod member;
mod member_id;
mod reassign;
mod roster;
mod schedule;

pub use data_stores::*;
pub use error::*;
pub use group::*;
pub use group_id::*;
pub use member::*;
pub use member_id::*;
pub use reassign::*;
pub use roster::*;
pub use schedule::*;
