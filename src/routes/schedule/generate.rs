use axum::{extract::State, http::StatusCode, Json};
use serde::{Deserialize, Serialize};

use crate::{
    domain::{RosterAPIError, Schedule, ShiftStats},
    AppState,
};

/// The assignment engine is an external collaborator that does not exist
/// yet. This handler pins down its request/response contract and answers
/// 501 until an engine is plugged in.
#[tracing::instrument(name = "Generate schedule route handler", skip_all)]
pub async fn generate_schedule(
    State(state): State<AppState>,
) -> Result<(StatusCode, Json<GenerateScheduleResponse>), RosterAPIError> {
    let roster = state.roster_store.read().await.snapshot().await;
    tracing::info!(
        groups = roster.groups().len(),
        "schedule generation requested"
    );

    Err(RosterAPIError::NotImplemented)
}

#[derive(Debug, PartialEq, Serialize, Deserialize)]
pub struct GenerateScheduleResponse {
    pub schedule: Vec<Schedule>,
    pub stats: Vec<ShiftStats>,
}
