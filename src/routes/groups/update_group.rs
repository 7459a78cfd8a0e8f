use axum::{extract::State, http::StatusCode, Json};
use color_eyre::eyre::eyre;

use crate::{
    domain::{Group, Roster, RosterAPIError},
    AppState,
};

/// Wholesale group replacement (rename, member edits). An unknown group id
/// is a silent no-op; the unchanged roster comes back.
#[tracing::instrument(name = "Update group route handler", skip_all)]
pub async fn update_group(
    State(state): State<AppState>,
    Json(mut group): Json<Group>,
) -> Result<(StatusCode, Json<Roster>), RosterAPIError> {
    for member in &mut group.members {
        member.normalize_days();
    }

    let roster = state
        .roster_store
        .write()
        .await
        .update_group(group)
        .await
        .map_err(|e| RosterAPIError::UnexpectedError(eyre!(e)))?;

    Ok((StatusCode::OK, Json(roster)))
}
