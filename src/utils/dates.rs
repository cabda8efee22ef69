use chrono::{DateTime, Utc};
use chrono_tz::America::New_York;

/// Check that a date is in YYYYMMDD form (8 ASCII digits).
///
/// The calendar itself is not checked, so "20241332" is accepted.
pub fn is_valid_date(date: &str) -> bool {
    date.len() == 8 && date.bytes().all(|b| b.is_ascii_digit())
}

/// Format YYYYMMDD as MM/DD/YYYY for display
pub fn format_date(date: &str) -> String {
    if date.is_empty() {
        return String::new();
    }

    let year = clamped_slice(date, 0, 4);
    let month = clamped_slice(date, 4, 6);
    let day = clamped_slice(date, 6, 8);

    format!("{}/{}/{}", month, day, year)
}

/// Today's date in YYYYMMDD, using the US Eastern calendar day
pub fn today_date() -> String {
    today_date_at(Utc::now())
}

/// Calendar date in US Eastern time for the given instant
pub fn today_date_at(now: DateTime<Utc>) -> String {
    now.with_timezone(&New_York).format("%Y%m%d").to_string()
}

/// Basketball-Reference season year for a YYYYMMDD date.
///
/// Seasons are named for the year they end in, so October 2024 belongs to 2025.
pub fn season_for_date(date: &str) -> Option<i32> {
    if !is_valid_date(date) {
        return None;
    }
    let year: i32 = date[0..4].parse().ok()?;
    let month: u32 = date[4..6].parse().ok()?;
    Some(if month >= 8 { year + 1 } else { year })
}

// Short input yields short pieces instead of a panic
fn clamped_slice(s: &str, start: usize, end: usize) -> &str {
    let end = end.min(s.len());
    let start = start.min(end);
    s.get(start..end).unwrap_or("")
}
