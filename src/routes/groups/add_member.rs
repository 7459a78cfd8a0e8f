use axum::{extract::State, http::StatusCode, Json};
use color_eyre::eyre::eyre;
use serde::Deserialize;

use crate::{
    domain::{GroupId, Roster, RosterAPIError},
    AppState,
};

#[tracing::instrument(name = "Add member route handler", skip_all)]
pub async fn add_member(
    State(state): State<AppState>,
    Json(request): Json<AddMemberRequest>,
) -> Result<(StatusCode, Json<Roster>), RosterAPIError> {
    let group_id = GroupId::new(request.group_id);

    let roster = state
        .roster_store
        .write()
        .await
        .add_member(&group_id)
        .await
        .map_err(|e| RosterAPIError::UnexpectedError(eyre!(e)))?;

    Ok((StatusCode::CREATED, Json(roster)))
}

#[derive(Debug, PartialEq, Deserialize)]
pub struct AddMemberRequest {
    #[serde(rename = "groupId")]
    pub group_id: uuid::Uuid,
}
