//! Field kinds for filter and form inputs

use chrono::{NaiveDate, NaiveDateTime};
use serde_json::Value;

/// Option of a dropdown field
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DropdownOption {
    pub value: &'static str,
    pub label: &'static str,
}

/// Closed set of input kinds, each with its own constraints
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FieldKind {
    Text {
        max_length: Option<usize>,
    },
    Number {
        min: Option<f64>,
        max: Option<f64>,
        integer: bool,
    },
    Boolean,
    Dropdown {
        options: &'static [DropdownOption],
    },
    Calendar {
        with_time: bool,
    },
}

impl FieldKind {
    pub const TEXT: FieldKind = FieldKind::Text { max_length: None };
    pub const INTEGER: FieldKind = FieldKind::Number {
        min: None,
        max: None,
        integer: true,
    };
    pub const DATE: FieldKind = FieldKind::Calendar { with_time: false };

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Text { .. } => "text",
            Self::Number { .. } => "number",
            Self::Boolean => "boolean",
            Self::Dropdown { .. } => "dropdown",
            Self::Calendar { .. } => "calendar",
        }
    }
}

/// Typed value produced from raw user input
#[derive(Debug, Clone, PartialEq)]
pub enum FieldValue {
    Text(String),
    Number(f64),
    Boolean(bool),
    Date(NaiveDate),
    DateTime(NaiveDateTime),
}

impl FieldValue {
    /// JSON shape expected by the GraphQL filter inputs
    pub fn to_json(&self) -> Value {
        match self {
            Self::Text(s) => Value::String(s.clone()),
            Self::Number(n) => {
                if n.fract() == 0.0 && n.abs() < i64::MAX as f64 {
                    Value::from(*n as i64)
                } else {
                    Value::from(*n)
                }
            }
            Self::Boolean(b) => Value::Bool(*b),
            Self::Date(d) => Value::String(d.format("%Y-%m-%d").to_string()),
            Self::DateTime(dt) => Value::String(dt.format("%Y-%m-%dT%H:%M:%S").to_string()),
        }
    }
}
