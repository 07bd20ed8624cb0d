//! Task templates and their field descriptors.
//!
//! A template declares a list of typed field descriptors; tasks created from
//! a template carry a `custom_data` map keyed by descriptor name. Field kinds
//! the client does not recognize are preserved verbatim so that newer
//! template definitions never break older clients.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum FieldKind {
    Text,
    Textarea,
    Number,
    Date,
    DateTime,
    Checkbox,
    Select,
    /// Unrecognized kind, kept as-is for round-tripping
    Other(String),
}

impl FieldKind {
    pub fn as_str(&self) -> &str {
        match self {
            FieldKind::Text => "text",
            FieldKind::Textarea => "textarea",
            FieldKind::Number => "number",
            FieldKind::Date => "date",
            FieldKind::DateTime => "datetime",
            FieldKind::Checkbox => "checkbox",
            FieldKind::Select => "select",
            FieldKind::Other(s) => s,
        }
    }

    pub fn from_code(s: &str) -> Self {
        match s {
            "text" => FieldKind::Text,
            "textarea" => FieldKind::Textarea,
            "number" => FieldKind::Number,
            "date" => FieldKind::Date,
            "datetime" => FieldKind::DateTime,
            "checkbox" => FieldKind::Checkbox,
            "select" => FieldKind::Select,
            other => FieldKind::Other(other.to_string()),
        }
    }

    /// Kinds the client knows how to render and edit
    pub fn is_known(&self) -> bool {
        !matches!(self, FieldKind::Other(_))
    }
}

impl From<String> for FieldKind {
    fn from(s: String) -> Self {
        FieldKind::from_code(&s)
    }
}

impl From<FieldKind> for String {
    fn from(k: FieldKind) -> Self {
        k.as_str().to_string()
    }
}

/// One custom field declaration inside a template (name, label, kind,
/// required flag, and the option list for select fields).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FieldSchema {
    pub name: String,
    pub label: String,
    #[serde(rename = "type")]
    pub kind: FieldKind,
    #[serde(default)]
    pub required: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub options: Option<Vec<String>>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Template {
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub fields_schema: Vec<FieldSchema>,
}

/// Payload for template creation/update
#[derive(Debug, Clone, Serialize)]
pub struct TemplatePayload {
    pub name: String,
    pub description: Option<String>,
    pub fields_schema: Vec<FieldSchema>,
}
