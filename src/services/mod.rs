pub mod data_stores;
pub mod persistence;
