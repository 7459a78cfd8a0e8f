use std::sync::Arc;
use tokio::sync::RwLock;

use crate::domain::{RosterStore, SessionStore};

pub type RosterStoreType = Arc<RwLock<dyn RosterStore + Send + Sync>>;
pub type SessionStoreType = Arc<RwLock<dyn SessionStore + Send + Sync>>;

#[derive(Clone)]
pub struct AppState {
    pub roster_store: RosterStoreType,
    pub session_store: SessionStoreType,
}

impl AppState {
    pub fn new(
        roster_store: RosterStoreType,
        session_store: SessionStoreType,
    ) -> Self {
        Self {
            roster_store,
            session_store,
        }
    }
}
