//! Schema-driven form behavior: per-kind widgets, change handlers, the
//! composite datetime field, and validation.

use serde_json::json;
use volmgr::forms::{FieldWidget, FormState};
use volmgr::models::template::{FieldKind, FieldSchema, Template};

fn field(name: &str, kind: FieldKind, required: bool) -> FieldSchema {
    FieldSchema {
        name: name.to_string(),
        label: name.to_uppercase(),
        kind,
        required,
        options: None,
    }
}

fn select_field(name: &str, options: &[&str], required: bool) -> FieldSchema {
    FieldSchema {
        options: Some(options.iter().map(|s| s.to_string()).collect()),
        ..field(name, FieldKind::Select, required)
    }
}

fn template(fields: Vec<FieldSchema>) -> Template {
    Template {
        id: 1,
        name: "Shift".to_string(),
        description: None,
        fields_schema: fields,
    }
}

#[test]
fn test_datetime_widget_splits_stored_value() {
    let tpl = template(vec![field("starts", FieldKind::DateTime, false)]);
    let form = FormState::from_wire(&tpl, Some(&json!({ "starts": "2024-03-05T14:30" })));

    let widget = form.widget(&tpl.fields_schema[0]);
    assert_eq!(
        widget,
        FieldWidget::DateTime {
            date: "2024-03-05".to_string(),
            time: "14:30".to_string(),
            required: false,
        }
    );
}

#[test]
fn test_datetime_edit_time_keeps_displayed_date() {
    let tpl = template(vec![field("starts", FieldKind::DateTime, false)]);
    let mut form = FormState::from_wire(&tpl, Some(&json!({ "starts": "2024-03-05T14:30" })));

    form.set_datetime_time("starts", "09:00").unwrap();

    assert_eq!(
        form.to_custom_data(),
        json!({ "starts": "2024-03-05T09:00" })
    );
}

#[test]
fn test_datetime_edit_date_keeps_displayed_time() {
    let tpl = template(vec![field("starts", FieldKind::DateTime, false)]);
    let mut form = FormState::from_wire(&tpl, Some(&json!({ "starts": "2024-03-05T14:30" })));

    form.set_datetime_date("starts", "2025-01-01").unwrap();

    assert_eq!(
        form.to_custom_data(),
        json!({ "starts": "2025-01-01T14:30" })
    );
}

#[test]
fn test_datetime_half_edit_from_empty_stores_empty() {
    let tpl = template(vec![field("starts", FieldKind::DateTime, false)]);
    let mut form = FormState::new(tpl.fields_schema.clone());

    // date set, time still empty: no partial stamp may be stored
    form.set_datetime_date("starts", "2024-03-05").unwrap();
    assert_eq!(form.to_custom_data(), json!({ "starts": "" }));

    // clearing the time of a complete value empties it too
    let mut form = FormState::from_wire(&tpl, Some(&json!({ "starts": "2024-03-05T14:30" })));
    form.set_datetime_time("starts", "").unwrap();
    assert_eq!(form.to_custom_data(), json!({ "starts": "" }));
}

#[test]
fn test_datetime_populates_from_empty_half_by_half() {
    let tpl = template(vec![field("starts", FieldKind::DateTime, true)]);
    let mut form = FormState::new(tpl.fields_schema.clone());

    form.set_datetime_date("starts", "2024-03-05").unwrap();
    form.set_datetime_time("starts", "14:30").unwrap();
    assert_eq!(
        form.to_custom_data(),
        json!({ "starts": "2024-03-05T14:30" })
    );
    form.validate().unwrap();

    // time first works the same way
    let mut form = FormState::new(tpl.fields_schema.clone());
    form.set_datetime_time("starts", "14:30").unwrap();
    form.set_datetime_date("starts", "2024-03-05").unwrap();
    assert_eq!(
        form.to_custom_data(),
        json!({ "starts": "2024-03-05T14:30" })
    );
}

#[test]
fn test_datetime_widget_keeps_pending_half() {
    let tpl = template(vec![field("starts", FieldKind::DateTime, false)]);
    let mut form = FormState::new(tpl.fields_schema.clone());

    form.set_datetime_date("starts", "2024-03-05").unwrap();

    // the stored value is still "", but the entered date stays visible
    assert_eq!(form.to_custom_data(), json!({ "starts": "" }));
    assert_eq!(
        form.widget(&tpl.fields_schema[0]),
        FieldWidget::DateTime {
            date: "2024-03-05".to_string(),
            time: String::new(),
            required: false,
        }
    );
}

#[test]
fn test_datetime_rejected_half_edit_preserves_entered_halves() {
    let tpl = template(vec![field("starts", FieldKind::DateTime, false)]);
    let mut form = FormState::new(tpl.fields_schema.clone());

    form.set_datetime_date("starts", "2024-03-05").unwrap();
    assert!(form.set_datetime_time("starts", "half past two").is_err());

    form.set_datetime_time("starts", "14:30").unwrap();
    assert_eq!(
        form.to_custom_data(),
        json!({ "starts": "2024-03-05T14:30" })
    );
}

#[test]
fn test_datetime_unparsable_value_renders_both_halves_empty() {
    let tpl = template(vec![field("starts", FieldKind::DateTime, false)]);
    let form = FormState::from_wire(&tpl, Some(&json!({ "starts": "yesterday-ish" })));

    assert_eq!(
        form.widget(&tpl.fields_schema[0]),
        FieldWidget::DateTime {
            date: String::new(),
            time: String::new(),
            required: false,
        }
    );
}

#[test]
fn test_date_widget_truncates_datetime_stamp() {
    let tpl = template(vec![field("due", FieldKind::Date, false)]);
    let form = FormState::from_wire(&tpl, Some(&json!({ "due": "2024-03-05T14:30:00" })));

    assert_eq!(
        form.widget(&tpl.fields_schema[0]),
        FieldWidget::Date {
            value: "2024-03-05".to_string(),
            required: false,
        }
    );
}

#[test]
fn test_date_change_stores_date_only_string_verbatim() {
    let tpl = template(vec![field("due", FieldKind::Date, false)]);
    let mut form = FormState::new(tpl.fields_schema.clone());

    form.set_date("due", "2024-06-01").unwrap();
    assert_eq!(form.to_custom_data(), json!({ "due": "2024-06-01" }));

    assert!(form.set_date("due", "06/01/2024").is_err());
}

#[test]
fn test_select_offers_options_and_rejects_unlisted_value() {
    let tpl = template(vec![select_field("team", &["A", "B"], false)]);
    let form = FormState::new(tpl.fields_schema.clone());

    // nothing selected by default, declared options offered as-is
    assert_eq!(
        form.widget(&tpl.fields_schema[0]),
        FieldWidget::Select {
            value: String::new(),
            options: vec!["A".to_string(), "B".to_string()],
            required: false,
        }
    );

    let mut form = form;
    assert!(form.set_text("team", "C").is_err());
    form.set_text("team", "B").unwrap();
    assert_eq!(form.to_custom_data(), json!({ "team": "B" }));

    // empty means unselected and is always accepted
    form.set_text("team", "").unwrap();
    assert_eq!(form.to_custom_data(), json!({ "team": "" }));
}

#[test]
fn test_checkbox_absent_displays_unchecked_and_stores_bool() {
    let tpl = template(vec![field("confirmed", FieldKind::Checkbox, false)]);
    let mut form = FormState::new(tpl.fields_schema.clone());

    assert_eq!(
        form.widget(&tpl.fields_schema[0]),
        FieldWidget::Checkbox { checked: false }
    );

    form.set_checked("confirmed", true).unwrap();
    assert_eq!(form.to_custom_data(), json!({ "confirmed": true }));
    assert_eq!(
        form.widget(&tpl.fields_schema[0]),
        FieldWidget::Checkbox { checked: true }
    );
}

#[test]
fn test_text_change_fully_replaces_value() {
    let tpl = template(vec![field("notes", FieldKind::Text, false)]);
    let mut form = FormState::new(tpl.fields_schema.clone());

    form.set_text("notes", "first").unwrap();
    form.set_text("notes", "second").unwrap();
    assert_eq!(form.to_custom_data(), json!({ "notes": "second" }));
}

#[test]
fn test_number_field_parses_and_rejects_non_numeric() {
    let tpl = template(vec![field("hours", FieldKind::Number, false)]);
    let mut form = FormState::new(tpl.fields_schema.clone());

    form.set_text("hours", "7.5").unwrap();
    assert_eq!(form.to_custom_data(), json!({ "hours": 7.5 }));

    assert!(form.set_text("hours", "lots").is_err());
    // the previous value survives a rejected edit
    assert_eq!(form.to_custom_data(), json!({ "hours": 7.5 }));
}

#[test]
fn test_unknown_kind_renders_hidden_and_never_stores() {
    let tpl = template(vec![
        field("level", FieldKind::Other("slider".to_string()), true),
        field("notes", FieldKind::Text, false),
    ]);
    let mut form = FormState::new(tpl.fields_schema.clone());

    assert_eq!(form.widget(&tpl.fields_schema[0]), FieldWidget::Hidden);

    // assignments to an unknown kind are silently ignored
    form.apply_assignment("level=5").unwrap();
    form.apply_assignment("notes=hello").unwrap();
    assert_eq!(form.to_custom_data(), json!({ "notes": "hello" }));

    // and its required flag never blocks submission
    form.validate().unwrap();
}

#[test]
fn test_validate_reports_missing_required_fields() {
    let tpl = template(vec![
        field("notes", FieldKind::Text, true),
        select_field("team", &["A", "B"], true),
    ]);
    let mut form = FormState::new(tpl.fields_schema.clone());

    let err = form.validate().unwrap_err();
    assert!(err.to_string().contains("NOTES"));
    assert!(err.to_string().contains("TEAM"));

    form.set_text("notes", "done").unwrap();
    form.set_text("team", "A").unwrap();
    form.validate().unwrap();
}

#[test]
fn test_apply_assignment_addresses_datetime_halves() {
    let tpl = template(vec![field("starts", FieldKind::DateTime, false)]);
    let mut form = FormState::new(tpl.fields_schema.clone());

    form.apply_assignment("starts.date=2024-03-05").unwrap();
    form.apply_assignment("starts.time=14:30").unwrap();
    assert_eq!(
        form.to_custom_data(),
        json!({ "starts": "2024-03-05T14:30" })
    );

    assert!(form.apply_assignment("starts=2024-03-05T14:30").is_err());
    assert!(form.apply_assignment("no-equals-sign").is_err());
    assert!(form.apply_assignment("ghost=1").is_err());
}

#[test]
fn test_orphaned_values_round_trip_untouched() {
    // a value left behind after its field was removed from the template
    let tpl = template(vec![field("notes", FieldKind::Text, false)]);
    let mut form = FormState::from_wire(
        &tpl,
        Some(&json!({ "notes": "keep", "legacy": "still here" })),
    );

    form.set_text("notes", "edited").unwrap();
    assert_eq!(
        form.to_custom_data(),
        json!({ "notes": "edited", "legacy": "still here" })
    );
}
