use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::{GroupId, MemberId};

/// One assigned shift in a generated schedule. The assignment engine that
/// produces these does not exist yet; the types pin down the contract its
/// output must honor.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Schedule {
    pub date: NaiveDate,
    #[serde(rename = "memberId")]
    pub member_id: MemberId,
    #[serde(rename = "groupId")]
    pub group_id: GroupId,
}

/// Per-member shift totals reported alongside a generated schedule.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShiftStats {
    #[serde(rename = "memberId")]
    pub member_id: MemberId,
    #[serde(rename = "totalShifts")]
    pub total_shifts: u32,
    #[serde(rename = "weekdayShifts")]
    pub weekday_shifts: u32,
    #[serde(rename = "weekendShifts")]
    pub weekend_shifts: u32,
}
