mod file_session_store;
mod hashmap_session_store;
mod in_memory_roster_store;

pub use file_session_store::*;
pub use hashmap_session_store::*;
pub use in_memory_roster_store::*;
