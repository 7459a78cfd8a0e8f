mod add_member;
mod delete_group;
mod delete_member;
mod list_groups;
mod move_member;
mod new_group;
mod update_group;
mod update_member;

pub use add_member::*;
pub use delete_group::*;
pub use delete_member::*;
pub use list_groups::*;
pub use move_member::*;
pub use new_group::*;
pub use update_group::*;
pub use update_member::*;
