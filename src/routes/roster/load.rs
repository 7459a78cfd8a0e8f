use axum::{extract::State, http::StatusCode, Json};
use color_eyre::eyre::eyre;

use crate::{
    domain::{Roster, RosterAPIError, SessionStoreError},
    AppState,
};

/// Restores the last saved snapshot and replaces the live roster with it.
/// On any failure the live roster is left exactly as it was.
#[tracing::instrument(name = "Load roster route handler", skip_all)]
pub async fn load_roster(
    State(state): State<AppState>,
) -> Result<(StatusCode, Json<Roster>), RosterAPIError> {
    let saved = state
        .session_store
        .read()
        .await
        .restore()
        .await
        .map_err(|e| match e {
            SessionStoreError::NoSavedRoster => RosterAPIError::NoSavedRoster,
            SessionStoreError::ParseError(e) => {
                RosterAPIError::MalformedRoster(e)
            }
            e => RosterAPIError::UnexpectedError(eyre!(e)),
        })?;

    let roster = state
        .roster_store
        .write()
        .await
        .replace(saved)
        .await
        .map_err(|e| RosterAPIError::UnexpectedError(eyre!(e)))?;

    Ok((StatusCode::OK, Json(roster)))
}
