use axum::{
    extract::{Query, State},
    http::StatusCode,
    Json,
};
use color_eyre::eyre::eyre;
use serde::Deserialize;

use crate::{
    domain::{GroupId, MemberId, Roster, RosterAPIError},
    AppState,
};

#[derive(Deserialize)]
pub struct DeleteMemberQueryParams {
    #[serde(rename = "groupId")]
    group_id: uuid::Uuid,
    #[serde(rename = "memberId")]
    member_id: uuid::Uuid,
}

#[tracing::instrument(name = "Delete member route handler", skip_all)]
pub async fn delete_member(
    State(state): State<AppState>,
    query_params: Query<DeleteMemberQueryParams>,
) -> Result<(StatusCode, Json<Roster>), RosterAPIError> {
    let group_id = GroupId::new(query_params.group_id);
    let member_id = MemberId::new(query_params.member_id);

    let roster = state
        .roster_store
        .write()
        .await
        .delete_member(&group_id, &member_id)
        .await
        .map_err(|e| RosterAPIError::UnexpectedError(eyre!(e)))?;

    Ok((StatusCode::OK, Json(roster)))
}
