//! Date/time normalization and formatting helpers.

use volmgr::utils::date::{normalize_date, parse_datetime};
use volmgr::utils::formatting::{describe_status, truncate};
use volmgr::utils::time::{combine_datetime, split_datetime};

#[test]
fn test_normalize_date_accepts_date_and_datetime_stamps() {
    assert_eq!(normalize_date("2024-03-05"), "2024-03-05");
    assert_eq!(normalize_date("2024-03-05T14:30"), "2024-03-05");
    assert_eq!(normalize_date("2024-03-05T14:30:15"), "2024-03-05");
    assert_eq!(normalize_date("2024-03-05T14:30:15.250"), "2024-03-05");
    assert_eq!(normalize_date("2024-03-05T14:30:00+10:00"), "2024-03-05");
    assert_eq!(normalize_date(""), "");
    assert_eq!(normalize_date("05/03/2024"), "");
}

#[test]
fn test_parse_datetime_formats() {
    assert!(parse_datetime("2024-03-05T14:30").is_some());
    assert!(parse_datetime("2024-03-05T14:30:15").is_some());
    assert!(parse_datetime("2024-03-05").is_none());
    assert!(parse_datetime("14:30").is_none());
}

#[test]
fn test_split_datetime_zero_pads_time() {
    assert_eq!(
        split_datetime("2024-03-05T09:05"),
        ("2024-03-05".to_string(), "09:05".to_string())
    );
    assert_eq!(split_datetime("nonsense"), (String::new(), String::new()));
}

#[test]
fn test_combine_datetime_requires_both_halves() {
    assert_eq!(combine_datetime("2024-03-05", "14:30"), "2024-03-05T14:30");
    assert_eq!(combine_datetime("2024-03-05", ""), "");
    assert_eq!(combine_datetime("", "14:30"), "");
    assert_eq!(combine_datetime("", ""), "");
}

#[test]
fn test_truncate_keeps_short_values() {
    assert_eq!(truncate("short", 10), "short");
    assert_eq!(truncate("a rather long title", 10), "a rather …");
}

#[test]
fn test_describe_status_labels() {
    assert_eq!(describe_status("pending").0, "Pending");
    assert_eq!(describe_status("in_progress").0, "In Progress");
    assert_eq!(describe_status("weird").0, "weird");
}
