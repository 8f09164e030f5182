use chrono::{Local, NaiveDate};

/// Canonical day-stamp format, e.g. `"Sat Aug 29 2026"`.
///
/// This matches the strings already stored in habit `completed_dates`
/// columns, so membership checks stay consistent with persisted data.
/// The day of month is always zero-padded to two digits.
pub const DAY_STAMP_FORMAT: &str = "%a %b %d %Y";

/// Converts a calendar date to its canonical day-stamp.
///
/// This is the single source of truth for deriving a membership key from
/// a date. Use this whenever a habit completion is recorded or checked.
pub fn day_stamp(date: NaiveDate) -> String {
    date.format(DAY_STAMP_FORMAT).to_string()
}

/// Day-stamp for "today" on the local device clock.
pub fn today_stamp() -> String {
    day_stamp(Local::now().date_naive())
}
