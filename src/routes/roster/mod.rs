mod export;
mod import;
mod load;
mod save;

pub use export::*;
pub use import::*;
pub use load::*;
pub use save::*;
