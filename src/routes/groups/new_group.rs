use axum::{extract::State, http::StatusCode, Json};
use color_eyre::eyre::eyre;

use crate::{
    domain::{Roster, RosterAPIError},
    AppState,
};

#[tracing::instrument(name = "New group route handler", skip_all)]
pub async fn new_group(
    State(state): State<AppState>,
) -> Result<(StatusCode, Json<Roster>), RosterAPIError> {
    let roster = state
        .roster_store
        .write()
        .await
        .add_group()
        .await
        .map_err(|e| RosterAPIError::UnexpectedError(eyre!(e)))?;

    Ok((StatusCode::CREATED, Json(roster)))
}
