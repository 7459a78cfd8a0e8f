use axum::{extract::State, http::StatusCode, Json};
use color_eyre::eyre::eyre;
use serde::Deserialize;

use crate::{
    domain::{
        GroupId, MemberId, MoveGesture, MoveTarget, Roster, RosterAPIError,
    },
    AppState,
};

/// Applies the outcome of one drag gesture. A null destination (cancelled
/// drag, or dropped outside every list) and any stale id both come back as
/// the unchanged roster; this handler never fails on gesture content.
#[tracing::instrument(name = "Move member route handler", skip_all)]
pub async fn move_member(
    State(state): State<AppState>,
    Json(request): Json<MoveMemberRequest>,
) -> Result<(StatusCode, Json<Roster>), RosterAPIError> {
    let destination = match (
        request.destination_container_id,
        request.destination_index,
    ) {
        (Some(group_id), Some(index)) => Some(MoveTarget {
            group_id: GroupId::new(group_id),
            index,
        }),
        _ => None,
    };
    let gesture = MoveGesture {
        source_group_id: GroupId::new(request.source_container_id),
        source_index: request.source_index,
        destination,
        member_id: MemberId::new(request.entity_id),
    };

    let roster = state
        .roster_store
        .write()
        .await
        .move_member(&gesture)
        .await
        .map_err(|e| RosterAPIError::UnexpectedError(eyre!(e)))?;

    Ok((StatusCode::OK, Json(roster)))
}

/// Wire shape of a drag gesture as the presentation layer reports it.
#[derive(Debug, PartialEq, Deserialize)]
pub struct MoveMemberRequest {
    #[serde(rename = "sourceContainerId")]
    pub source_container_id: uuid::Uuid,
    #[serde(rename = "sourceIndex")]
    pub source_index: usize,
    #[serde(rename = "destinationContainerId", default)]
    pub destination_container_id: Option<uuid::Uuid>,
    #[serde(rename = "destinationIndex", default)]
    pub destination_index: Option<usize>,
    #[serde(rename = "entityId")]
    pub entity_id: uuid::Uuid,
}
