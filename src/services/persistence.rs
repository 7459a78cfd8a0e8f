use crate::domain::{ParseError, Roster};

/// Encodes the roster as pretty-printed JSON (2-space indent), the format
/// the exported `schedule-groups.json` artifact carries.
pub fn serialize_roster(roster: &Roster) -> Result<String, ParseError> {
    Ok(serde_json::to_string_pretty(roster)?)
}

/// Inverse of [`serialize_roster`]. Day lists are re-normalized so a
/// hand-edited file cannot smuggle unsorted or duplicate dates past the
/// store. Fails without side effects; the caller decides whether to apply
/// the result.
pub fn deserialize_roster(bytes: &[u8]) -> Result<Roster, ParseError> {
    let roster: Roster = serde_json::from_slice(bytes)?;
    Ok(roster.normalize_days())
}
