//! Parsing of `--field` declarations for template creation.

use volmgr::cli::commands::template::parse_field_spec;
use volmgr::models::template::FieldKind;

#[test]
fn test_minimal_text_field() {
    let f = parse_field_spec("notes:Notes:text").unwrap();
    assert_eq!(f.name, "notes");
    assert_eq!(f.label, "Notes");
    assert_eq!(f.kind, FieldKind::Text);
    assert!(!f.required);
    assert!(f.options.is_none());
}

#[test]
fn test_required_datetime_field() {
    let f = parse_field_spec("starts:Start time:datetime:required").unwrap();
    assert_eq!(f.kind, FieldKind::DateTime);
    assert!(f.required);
}

#[test]
fn test_select_field_with_options() {
    let f = parse_field_spec("team:Team:select:required:Alpha|Bravo|Charlie").unwrap();
    assert_eq!(f.kind, FieldKind::Select);
    assert!(f.required);
    assert_eq!(
        f.options.unwrap(),
        vec!["Alpha".to_string(), "Bravo".to_string(), "Charlie".to_string()]
    );
}

#[test]
fn test_select_without_options_is_rejected() {
    assert!(parse_field_spec("team:Team:select").is_err());
    assert!(parse_field_spec("team:Team:select:required").is_err());
}

#[test]
fn test_unknown_type_is_rejected() {
    assert!(parse_field_spec("level:Level:slider").is_err());
}

#[test]
fn test_options_on_non_select_are_dropped() {
    let f = parse_field_spec("notes:Notes:text:A|B").unwrap();
    assert!(f.options.is_none());
}

#[test]
fn test_malformed_specs_are_rejected() {
    assert!(parse_field_spec("justaname").is_err());
    assert!(parse_field_spec("name:label").is_err());
    assert!(parse_field_spec(":Label:text").is_err());
}
