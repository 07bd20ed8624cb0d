//! Date utilities: parsing YYYY-MM-DD and normalizing stored stamps to the
//! calendar-date form shown in date inputs.

use chrono::{DateTime, NaiveDate, NaiveDateTime};

pub fn parse_date(s: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").ok()
}

/// Formats a stored value as "YYYY-MM-DD" for a date input, accepting either
/// a plain date or a full date-time stamp. Unparsable input renders empty.
pub fn normalize_date(raw: &str) -> String {
    if raw.is_empty() {
        return String::new();
    }

    if let Some(d) = parse_date(raw) {
        return d.format("%Y-%m-%d").to_string();
    }

    if let Some(dt) = parse_datetime(raw) {
        return dt.date().format("%Y-%m-%d").to_string();
    }

    String::new()
}

/// Parse a combined date-time stamp in the formats the API and the form
/// layer produce ("YYYY-MM-DDTHH:MM", with optional seconds/fraction, or a
/// full RFC 3339 stamp).
pub fn parse_datetime(raw: &str) -> Option<NaiveDateTime> {
    const FORMATS: [&str; 3] = ["%Y-%m-%dT%H:%M", "%Y-%m-%dT%H:%M:%S", "%Y-%m-%dT%H:%M:%S%.f"];

    for fmt in FORMATS {
        if let Ok(dt) = NaiveDateTime::parse_from_str(raw, fmt) {
            return Some(dt);
        }
    }

    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.naive_local());
    }

    None
}
