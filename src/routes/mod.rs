pub mod groups;
pub mod roster;
pub mod schedule;
