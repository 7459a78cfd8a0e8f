use axum::{
    extract::{Query, State},
    http::StatusCode,
    Json,
};
use chrono::NaiveDate;
use color_eyre::eyre::eyre;
use serde::Deserialize;

use crate::{
    domain::{GroupId, Member, MemberId, Roster, RosterAPIError},
    utils::{constants::STRICT_VALIDATION, dates::format_date_list},
    AppState,
};

#[derive(Deserialize)]
pub struct UpdateMemberQueryParams {
    #[serde(rename = "groupId")]
    group_id: uuid::Uuid,
    #[serde(rename = "memberId")]
    member_id: uuid::Uuid,
}

/// Wholesale member replacement. The id comes from the query string, not
/// the body, so a payload can never reassign a member's identity.
#[tracing::instrument(name = "Update member route handler", skip_all)]
pub async fn update_member(
    State(state): State<AppState>,
    query_params: Query<UpdateMemberQueryParams>,
    Json(request): Json<UpdateMemberRequest>,
) -> Result<(StatusCode, Json<Roster>), RosterAPIError> {
    let group_id = GroupId::new(query_params.group_id);
    let member_id = MemberId::new(query_params.member_id);

    let mut member = Member {
        id: member_id,
        name: request.name,
        working_days: request.working_days,
        non_working_days: request.non_working_days,
        max_shifts: request.max_shifts,
        min_shifts: request.min_shifts,
        holiday_shifts: request.holiday_shifts,
    };
    member.normalize_days();
    tracing::debug!(
        working = %format_date_list(&member.working_days),
        non_working = %format_date_list(&member.non_working_days),
        "updating member constraints"
    );

    if *STRICT_VALIDATION {
        member.validate()?;
    }

    let roster = state
        .roster_store
        .write()
        .await
        .update_member(&group_id, &member_id, member)
        .await
        .map_err(|e| RosterAPIError::UnexpectedError(eyre!(e)))?;

    Ok((StatusCode::OK, Json(roster)))
}

#[derive(Debug, PartialEq, Deserialize)]
pub struct UpdateMemberRequest {
    pub name: String,
    #[serde(rename = "workingDays", default)]
    pub working_days: Vec<NaiveDate>,
    #[serde(rename = "nonWorkingDays", default)]
    pub non_working_days: Vec<NaiveDate>,
    #[serde(rename = "maxShifts")]
    pub max_shifts: u32,
    #[serde(rename = "minShifts")]
    pub min_shifts: u32,
    #[serde(rename = "holidayShifts")]
    pub holiday_shifts: u32,
}
