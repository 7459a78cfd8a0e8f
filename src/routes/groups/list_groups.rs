use axum::{extract::State, http::StatusCode, Json};

use crate::{
    domain::{Roster, RosterAPIError},
    AppState,
};

#[tracing::instrument(name = "List groups route handler", skip_all)]
pub async fn list_groups(
    State(state): State<AppState>,
) -> Result<(StatusCode, Json<Roster>), RosterAPIError> {
    let roster = state.roster_store.read().await.snapshot().await;
    Ok((StatusCode::OK, Json(roster)))
}
