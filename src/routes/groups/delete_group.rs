use axum::{
    extract::{Query, State},
    http::StatusCode,
    Json,
};
use color_eyre::eyre::eyre;
use serde::Deserialize;

use crate::{
    domain::{GroupId, Roster, RosterAPIError},
    AppState,
};

#[derive(Deserialize)]
pub struct DeleteGroupQueryParams {
    #[serde(rename = "groupId")]
    group_id: uuid::Uuid,
}

#[tracing::instrument(name = "Delete group route handler", skip_all)]
pub async fn delete_group(
    State(state): State<AppState>,
    query_params: Query<DeleteGroupQueryParams>,
) -> Result<(StatusCode, Json<Roster>), RosterAPIError> {
    let group_id = GroupId::new(query_params.group_id);

    let roster = state
        .roster_store
        .write()
        .await
        .delete_group(&group_id)
        .await
        .map_err(|e| RosterAPIError::UnexpectedError(eyre!(e)))?;

    Ok((StatusCode::OK, Json(roster)))
}
