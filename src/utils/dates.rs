use chrono::NaiveDate;

/// Compact display form of a day list: the dates themselves while short,
/// a count once it stops fitting on a badge.
pub fn format_date_list(dates: &[NaiveDate]) -> String {
    match dates.len() {
        0 => String::new(),
        1..=2 => dates
            .iter()
            .map(|d| d.to_string())
            .collect::<Vec<_>>()
            .join(", "),
        n => format!("{n} days selected"),
    }
}
