//! Extraction of human-readable messages from API error bodies.

use volmgr::api::extract_detail;

#[test]
fn test_plain_string_detail() {
    let body = r#"{"detail": "Incorrect username or password"}"#;
    assert_eq!(extract_detail(body), "Incorrect username or password");
}

#[test]
fn test_validation_list_detail_names_the_field() {
    let body = r#"{"detail": [
        {"loc": ["body", "email"], "msg": "value is not a valid email address", "type": "value_error"},
        {"loc": ["body", "password"], "msg": "too short", "type": "value_error"}
    ]}"#;
    assert_eq!(
        extract_detail(body),
        "Email: value is not a valid email address"
    );
}

#[test]
fn test_validation_list_without_loc_still_reports() {
    let body = r#"{"detail": [{"msg": "invalid payload"}]}"#;
    assert_eq!(extract_detail(body), "Input: invalid payload");
}

#[test]
fn test_non_json_body_falls_back_to_raw_text() {
    assert_eq!(extract_detail("Bad Gateway"), "Bad Gateway");
}

#[test]
fn test_empty_body_falls_back_to_generic_message() {
    assert_eq!(extract_detail(""), "request failed");
    assert_eq!(extract_detail("   "), "request failed");
}

#[test]
fn test_unexpected_detail_shape_falls_back() {
    let body = r#"{"detail": {"weird": true}}"#;
    assert_eq!(extract_detail(body), body);
}
