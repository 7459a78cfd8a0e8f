use std::io::ErrorKind;
use std::path::PathBuf;

use color_eyre::eyre::{Report, WrapErr};

use crate::domain::{Roster, SessionStore, SessionStoreError};
use crate::services::persistence::{deserialize_roster, serialize_roster};
use crate::utils::constants::SESSION_STORE_KEY;

/// Session store backed by a JSON file in the configured data directory, so
/// a saved roster survives a process restart.
pub struct FileSessionStore {
    path: PathBuf,
}

impl FileSessionStore {
    pub fn new(data_dir: PathBuf) -> Self {
        Self {
            path: data_dir.join(format!("{SESSION_STORE_KEY}.json")),
        }
    }
}

#[async_trait::async_trait]
impl SessionStore for FileSessionStore {
    #[tracing::instrument(name = "Saving roster to file store", skip_all)]
    async fn persist(
        &mut self,
        roster: &Roster,
    ) -> Result<(), SessionStoreError> {
        let encoded = serialize_roster(roster)?;
        if let Some(parent) = self.path.parent() {
            tokio::fs::create_dir_all(parent)
                .await
                .wrap_err("failed to create data directory")
                .map_err(SessionStoreError::UnexpectedError)?;
        }
        tokio::fs::write(&self.path, encoded)
            .await
            .wrap_err("failed to write saved roster")
            .map_err(SessionStoreError::UnexpectedError)?;
        Ok(())
    }

    #[tracing::instrument(name = "Restoring roster from file store", skip_all)]
    async fn restore(&self) -> Result<Roster, SessionStoreError> {
        let bytes = match tokio::fs::read(&self.path).await {
            Ok(bytes) => bytes,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                return Err(SessionStoreError::NoSavedRoster)
            }
            Err(e) => {
                return Err(SessionStoreError::UnexpectedError(
                    Report::new(e).wrap_err("failed to read saved roster"),
                ))
            }
        };
        Ok(deserialize_roster(&bytes)?)
    }
}
