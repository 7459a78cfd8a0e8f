use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::{MemberId, ValidationError};

pub const DEFAULT_MAX_SHIFTS: u32 = 8;
pub const DEFAULT_MIN_SHIFTS: u32 = 6;
pub const DEFAULT_HOLIDAY_SHIFTS: u32 = 0;

/// One person on the roster, together with the constraints the scheduling
/// engine will consume. The `id` is assigned at creation and never changes;
/// moving a member between groups carries the whole value unchanged.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Member {
    pub id: MemberId,
    pub name: String,
    #[serde(rename = "workingDays")]
    pub working_days: Vec<NaiveDate>,
    #[serde(rename = "nonWorkingDays")]
    pub non_working_days: Vec<NaiveDate>,
    #[serde(rename = "maxShifts")]
    pub max_shifts: u32,
    #[serde(rename = "minShifts")]
    pub min_shifts: u32,
    #[serde(rename = "holidayShifts")]
    pub holiday_shifts: u32,
}

impl Member {
    pub fn new(name: String) -> Self {
        Self {
            id: MemberId::default(),
            name,
            working_days: Vec::new(),
            non_working_days: Vec::new(),
            max_shifts: DEFAULT_MAX_SHIFTS,
            min_shifts: DEFAULT_MIN_SHIFTS,
            holiday_shifts: DEFAULT_HOLIDAY_SHIFTS,
        }
    }

    /// Both day lists are kept sorted ascending with no duplicates.
    /// Callers that accept day lists from outside (wire, file) must pass
    /// them through here before storing.
    pub fn normalize_days(&mut self) {
        self.working_days.sort_unstable();
        self.working_days.dedup();
        self.non_working_days.sort_unstable();
        self.non_working_days.dedup();
    }

    pub fn add_working_day(&mut self, date: NaiveDate) {
        if !self.working_days.contains(&date) {
            self.working_days.push(date);
            self.working_days.sort_unstable();
        }
    }

    pub fn remove_working_day(&mut self, date: &NaiveDate) {
        self.working_days.retain(|d| d != date);
    }

    pub fn add_non_working_day(&mut self, date: NaiveDate) {
        if !self.non_working_days.contains(&date) {
            self.non_working_days.push(date);
            self.non_working_days.sort_unstable();
        }
    }

    pub fn remove_non_working_day(&mut self, date: &NaiveDate) {
        self.non_working_days.retain(|d| d != date);
    }

    /// Optional strictness, off by default (`STRICT_VALIDATION`): the
    /// relaxed contract allows overlapping day lists and inverted shift
    /// bounds, so this is only called where the caller opts in.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.min_shifts > self.max_shifts {
            return Err(ValidationError::new(format!(
                "Minimum shifts ({}) cannot exceed maximum shifts ({})",
                self.min_shifts, self.max_shifts
            )));
        }
        if let Some(date) = self
            .working_days
            .iter()
            .find(|d| self.non_working_days.contains(d))
        {
            return Err(ValidationError::new(format!(
                "{date} is listed as both working and non-working"
            )));
        }
        Ok(())
    }
}
