//! Time utilities: parsing HH:MM and splitting/recombining composite
//! date-time values for the two-input datetime field.

use crate::utils::date::parse_datetime;
use chrono::NaiveTime;

pub fn parse_time(t: &str) -> Option<NaiveTime> {
    NaiveTime::parse_from_str(t, "%H:%M").ok()
}

/// Decompose a stored combined value into its ("YYYY-MM-DD", "HH:MM") halves.
/// An absent or unparsable value yields two empty strings.
pub fn split_datetime(raw: &str) -> (String, String) {
    match parse_datetime(raw) {
        Some(dt) => (
            dt.date().format("%Y-%m-%d").to_string(),
            dt.time().format("%H:%M").to_string(),
        ),
        None => (String::new(), String::new()),
    }
}

/// Recombine the two halves into one stored value. If either half is empty
/// the result is empty: a half-complete stamp is never stored.
pub fn combine_datetime(date: &str, time: &str) -> String {
    if !date.is_empty() && !time.is_empty() {
        format!("{}T{}", date, time)
    } else {
        String::new()
    }
}
