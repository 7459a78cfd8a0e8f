use axum::{extract::State, http::StatusCode, Json};
use color_eyre::eyre::eyre;

use crate::{
    domain::{Roster, RosterAPIError},
    services::persistence::deserialize_roster,
    AppState,
};

/// Replaces the live roster with the contents of an uploaded file. The
/// parse happens before the store is touched, so a corrupt file leaves the
/// current roster intact.
#[tracing::instrument(name = "Import roster route handler", skip_all)]
pub async fn import_roster(
    State(state): State<AppState>,
    body: String,
) -> Result<(StatusCode, Json<Roster>), RosterAPIError> {
    let imported = deserialize_roster(body.as_bytes())?;

    let roster = state
        .roster_store
        .write()
        .await
        .replace(imported)
        .await
        .map_err(|e| RosterAPIError::UnexpectedError(eyre!(e)))?;

    Ok((StatusCode::OK, Json(roster)))
}
