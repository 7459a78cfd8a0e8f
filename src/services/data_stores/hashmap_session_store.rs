use std::collections::HashMap;

use crate::domain::{Roster, SessionStore, SessionStoreError};
use crate::services::persistence::{deserialize_roster, serialize_roster};
use crate::utils::constants::SESSION_STORE_KEY;

/// In-memory key-value mirror of the saved roster, the direct analogue of
/// the browser's localStorage entry.
#[derive(Default)]
pub struct HashmapSessionStore {
    entries: HashMap<String, String>,
}

#[async_trait::async_trait]
impl SessionStore for HashmapSessionStore {
    #[tracing::instrument(name = "Saving roster to session store", skip_all)]
    async fn persist(
        &mut self,
        roster: &Roster,
    ) -> Result<(), SessionStoreError> {
        let encoded = serialize_roster(roster)?;
        self.entries.insert(SESSION_STORE_KEY.to_owned(), encoded);
        Ok(())
    }

    #[tracing::instrument(
        name = "Restoring roster from session store",
        skip_all
    )]
    async fn restore(&self) -> Result<Roster, SessionStoreError> {
        let encoded = self
            .entries
            .get(SESSION_STORE_KEY)
            .ok_or(SessionStoreError::NoSavedRoster)?;
        Ok(deserialize_roster(encoded.as_bytes())?)
    }
}
