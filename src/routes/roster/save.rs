use axum::{extract::State, http::StatusCode, Json};
use color_eyre::eyre::eyre;

use crate::{
    domain::{Roster, RosterAPIError, SessionStoreError},
    AppState,
};

/// Mirrors the current snapshot into the session store. Saving is explicit;
/// nothing persists on ordinary mutations.
#[tracing::instrument(name = "Save roster route handler", skip_all)]
pub async fn save_roster(
    State(state): State<AppState>,
) -> Result<(StatusCode, Json<Roster>), RosterAPIError> {
    let roster = state.roster_store.read().await.snapshot().await;

    state
        .session_store
        .write()
        .await
        .persist(&roster)
        .await
        .map_err(|e| match e {
            SessionStoreError::ParseError(e) => {
                RosterAPIError::MalformedRoster(e)
            }
            e => RosterAPIError::UnexpectedError(eyre!(e)),
        })?;

    Ok((StatusCode::OK, Json(roster)))
}
