//! Schema-driven form state for template custom fields.
//!
//! A `FormState` pairs a template's field descriptors with the task's
//! `custom_data` map and provides, per field, the typed editable
//! representation of the current value plus change handlers that write back
//! under the descriptor's name. The composite `datetime` kind is exposed as
//! two independent sub-inputs (date and time); editing either half
//! recombines it with the other currently displayed half, and a missing half
//! empties the combined value rather than storing a partial stamp.
//!
//! Unrecognized field kinds render nothing and are never written to, so a
//! template defined by a newer server version degrades quietly instead of
//! failing the whole form. Values whose key has no descriptor (left behind
//! by a template edit) are kept and round-tripped but never rendered.

use crate::errors::{AppError, AppResult};
use crate::models::template::{FieldKind, FieldSchema, Template};
use crate::models::value::{map_from_json, map_to_json, FieldValue};
use crate::utils::date::{normalize_date, parse_date};
use crate::utils::time::{combine_datetime, parse_time, split_datetime};
use serde_json::Value;
use std::collections::BTreeMap;

/// The editable representation of one field's current value
#[derive(Debug, Clone, PartialEq)]
pub enum FieldWidget {
    Text { value: String, required: bool },
    Textarea { value: String, required: bool },
    Number { value: String, required: bool },
    Checkbox { checked: bool },
    /// `options` is the declared list; the empty value is always accepted
    /// as "unselected" in addition to it
    Select {
        value: String,
        options: Vec<String>,
        required: bool,
    },
    /// Value normalized to "YYYY-MM-DD"
    Date { value: String, required: bool },
    /// Two independent sub-inputs; both empty when the stored value is
    /// absent or unparsable
    DateTime {
        date: String,
        time: String,
        required: bool,
    },
    /// Unrecognized kind: nothing to render
    Hidden,
}

#[derive(Debug, Clone)]
pub struct FormState {
    fields: Vec<FieldSchema>,
    data: BTreeMap<String, FieldValue>,
    /// Most-recent date/time sub-input strings per datetime field. The
    /// stored value only ever holds a complete stamp or "", so the pending
    /// half of a partially filled field lives here, the way it would live
    /// in the input itself.
    halves: BTreeMap<String, (String, String)>,
}

impl FormState {
    pub fn new(fields: Vec<FieldSchema>) -> Self {
        Self {
            fields,
            data: BTreeMap::new(),
            halves: BTreeMap::new(),
        }
    }

    /// Build the form for a template, seeded with an existing wire
    /// `custom_data` object (when editing a task)
    pub fn from_wire(template: &Template, custom_data: Option<&Value>) -> Self {
        Self {
            fields: template.fields_schema.clone(),
            data: custom_data.map(map_from_json).unwrap_or_default(),
            halves: BTreeMap::new(),
        }
    }

    pub fn fields(&self) -> &[FieldSchema] {
        &self.fields
    }

    fn field(&self, name: &str) -> AppResult<&FieldSchema> {
        self.fields
            .iter()
            .find(|f| f.name == name)
            .ok_or_else(|| AppError::UnknownField(name.to_string()))
    }

    /// Raw display string of the stored value ("" when absent)
    fn raw(&self, name: &str) -> String {
        self.data.get(name).map(|v| v.display()).unwrap_or_default()
    }

    /// The two sub-input strings of a datetime field: the most recently
    /// entered values if either half has been edited, otherwise the stored
    /// value split apart
    fn current_halves(&self, name: &str) -> (String, String) {
        self.halves
            .get(name)
            .cloned()
            .unwrap_or_else(|| split_datetime(&self.raw(name)))
    }

    /// Derive the editable representation of one field from the current data
    pub fn widget(&self, field: &FieldSchema) -> FieldWidget {
        let required = field.required;
        match &field.kind {
            FieldKind::Text => FieldWidget::Text {
                value: self.raw(&field.name),
                required,
            },
            FieldKind::Textarea => FieldWidget::Textarea {
                value: self.raw(&field.name),
                required,
            },
            FieldKind::Number => FieldWidget::Number {
                value: self.raw(&field.name),
                required,
            },
            FieldKind::Checkbox => FieldWidget::Checkbox {
                checked: self
                    .data
                    .get(&field.name)
                    .map(|v| v.as_bool())
                    .unwrap_or(false),
            },
            FieldKind::Select => FieldWidget::Select {
                value: self.raw(&field.name),
                options: field.options.clone().unwrap_or_default(),
                required,
            },
            FieldKind::Date => FieldWidget::Date {
                value: normalize_date(&self.raw(&field.name)),
                required,
            },
            FieldKind::DateTime => {
                let (date, time) = self.current_halves(&field.name);
                FieldWidget::DateTime {
                    date,
                    time,
                    required,
                }
            }
            FieldKind::Other(_) => FieldWidget::Hidden,
        }
    }

    /// Change handler for text-like inputs (text, textarea, number, select).
    /// The new value fully replaces the stored one.
    pub fn set_text(&mut self, name: &str, input: &str) -> AppResult<()> {
        let field = self.field(name)?.clone();
        match &field.kind {
            FieldKind::Text | FieldKind::Textarea => {
                self.data
                    .insert(name.to_string(), FieldValue::Text(input.to_string()));
                Ok(())
            }
            FieldKind::Number => {
                if input.is_empty() {
                    self.data.remove(name);
                    return Ok(());
                }
                let n: f64 = input.parse().map_err(|_| {
                    AppError::InvalidFieldAssignment(format!(
                        "'{}' expects a number, got '{}'",
                        name, input
                    ))
                })?;
                self.data.insert(name.to_string(), FieldValue::Number(n));
                Ok(())
            }
            FieldKind::Select => {
                let options = field.options.as_deref().unwrap_or_default();
                if !input.is_empty() && !options.iter().any(|o| o == input) {
                    return Err(AppError::InvalidFieldAssignment(format!(
                        "'{}' must be one of: {}",
                        name,
                        options.join(", ")
                    )));
                }
                self.data
                    .insert(name.to_string(), FieldValue::Text(input.to_string()));
                Ok(())
            }
            FieldKind::Date => self.set_date(name, input),
            FieldKind::Checkbox => self.set_checked(name, parse_bool(name, input)?),
            // unknown kinds store nothing
            FieldKind::DateTime => Err(AppError::InvalidFieldAssignment(format!(
                "'{0}' is a datetime field; set '{0}.date' and '{0}.time'",
                name
            ))),
            FieldKind::Other(_) => Ok(()),
        }
    }

    /// Change handler for checkbox inputs: stores the checked state directly
    pub fn set_checked(&mut self, name: &str, checked: bool) -> AppResult<()> {
        let field = self.field(name)?;
        match &field.kind {
            FieldKind::Checkbox => {
                self.data.insert(name.to_string(), FieldValue::Bool(checked));
                Ok(())
            }
            FieldKind::Other(_) => Ok(()),
            _ => Err(AppError::InvalidFieldAssignment(format!(
                "'{}' is not a checkbox field",
                name
            ))),
        }
    }

    /// Change handler for date inputs: the date-only string is stored
    /// verbatim, with no time component added
    pub fn set_date(&mut self, name: &str, input: &str) -> AppResult<()> {
        let field = self.field(name)?;
        match &field.kind {
            FieldKind::Date => {
                if !input.is_empty() && parse_date(input).is_none() {
                    return Err(AppError::InvalidDate(input.to_string()));
                }
                self.data
                    .insert(name.to_string(), FieldValue::DateTime(input.to_string()));
                Ok(())
            }
            FieldKind::Other(_) => Ok(()),
            _ => Err(AppError::InvalidFieldAssignment(format!(
                "'{}' is not a date field",
                name
            ))),
        }
    }

    /// Change handler for the date half of a composite datetime field.
    /// Recombines with the currently displayed time half.
    pub fn set_datetime_date(&mut self, name: &str, date: &str) -> AppResult<()> {
        match &self.field(name)?.kind {
            FieldKind::DateTime => {}
            FieldKind::Other(_) => return Ok(()),
            _ => {
                return Err(AppError::InvalidFieldAssignment(format!(
                    "'{}' is not a datetime field",
                    name
                )))
            }
        }
        if !date.is_empty() && parse_date(date).is_none() {
            return Err(AppError::InvalidDate(date.to_string()));
        }
        let (_, time) = self.current_halves(name);
        self.data.insert(
            name.to_string(),
            FieldValue::DateTime(combine_datetime(date, &time)),
        );
        self.halves.insert(name.to_string(), (date.to_string(), time));
        Ok(())
    }

    /// Change handler for the time half of a composite datetime field.
    /// Recombines with the currently displayed date half.
    pub fn set_datetime_time(&mut self, name: &str, time: &str) -> AppResult<()> {
        match &self.field(name)?.kind {
            FieldKind::DateTime => {}
            FieldKind::Other(_) => return Ok(()),
            _ => {
                return Err(AppError::InvalidFieldAssignment(format!(
                    "'{}' is not a datetime field",
                    name
                )))
            }
        }
        if !time.is_empty() && parse_time(time).is_none() {
            return Err(AppError::InvalidTime(time.to_string()));
        }
        let (date, _) = self.current_halves(name);
        self.data.insert(
            name.to_string(),
            FieldValue::DateTime(combine_datetime(&date, time)),
        );
        self.halves.insert(name.to_string(), (date, time.to_string()));
        Ok(())
    }

    /// CLI entry point: apply one `NAME=VALUE` assignment. `NAME.date=` and
    /// `NAME.time=` address the two halves of a datetime field.
    pub fn apply_assignment(&mut self, spec: &str) -> AppResult<()> {
        let (name, value) = spec
            .split_once('=')
            .ok_or_else(|| AppError::InvalidFieldAssignment(spec.to_string()))?;

        if let Some(base) = name.strip_suffix(".date") {
            self.set_datetime_date(base, value)
        } else if let Some(base) = name.strip_suffix(".time") {
            self.set_datetime_time(base, value)
        } else {
            self.set_text(name, value)
        }
    }

    /// Required-field check, run before submission. Fields of unrecognized
    /// kind are never validated.
    pub fn validate(&self) -> AppResult<()> {
        let missing: Vec<&str> = self
            .fields
            .iter()
            .filter(|f| f.required && f.kind.is_known() && !matches!(f.kind, FieldKind::Checkbox))
            .filter(|f| self.data.get(&f.name).map(|v| v.is_empty()).unwrap_or(true))
            .map(|f| f.label.as_str())
            .collect();

        if missing.is_empty() {
            Ok(())
        } else {
            Err(AppError::Validation(format!(
                "missing required field(s): {}",
                missing.join(", ")
            )))
        }
    }

    /// Serialize the current data as the wire `custom_data` object
    pub fn to_custom_data(&self) -> Value {
        map_to_json(&self.data)
    }
}

fn parse_bool(name: &str, input: &str) -> AppResult<bool> {
    match input.to_lowercase().as_str() {
        "true" | "yes" | "on" | "1" => Ok(true),
        "false" | "no" | "off" | "0" | "" => Ok(false),
        other => Err(AppError::InvalidFieldAssignment(format!(
            "'{}' expects true/false, got '{}'",
            name, other
        ))),
    }
}
