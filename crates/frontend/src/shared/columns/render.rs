//! Default cell rendering

use leptos::prelude::*;
use serde_json::Value;

use crate::shared::date_utils::{format_date, format_datetime, parse_iso, IsoValue};
use crate::shared::locale::Locale;
use crate::shared::number_format::{format_number, format_numeric_str, looks_numeric};

/// Display form of one cell
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum CellText {
    Empty,
    Check(bool),
    Number(String),
    Date(String),
    Text(String),
}

impl std::fmt::Display for CellText {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CellText::Empty => Ok(()),
            CellText::Check(true) => f.write_str("✓"),
            CellText::Check(false) => f.write_str("✗"),
            CellText::Number(s) | CellText::Date(s) | CellText::Text(s) => f.write_str(s),
        }
    }
}

/// Follow `data_index` through a result row. One-to-many relations yield an
/// array of the values found under each element.
pub fn cell_value(row: &Value, data_index: &[String]) -> Value {
    let Some((head, rest)) = data_index.split_first() else {
        return row.clone();
    };
    match row {
        Value::Array(items) => Value::Array(
            items
                .iter()
                .map(|item| cell_value(item, data_index))
                .filter(|v| !v.is_null())
                .collect(),
        ),
        Value::Object(map) => match map.get(head) {
            Some(next) => cell_value(next, rest),
            None => Value::Null,
        },
        _ => Value::Null,
    }
}

pub fn render_cell(value: &Value, locale: Locale) -> CellText {
    match value {
        Value::Null => CellText::Empty,
        Value::Bool(b) => CellText::Check(*b),
        Value::Number(n) => CellText::Number(format_number(n, locale)),
        Value::String(s) if s.is_empty() => CellText::Empty,
        Value::String(s) if looks_numeric(s) => CellText::Number(format_numeric_str(s, locale)),
        Value::String(s) => match parse_iso(s) {
            Some(IsoValue::Date(_)) => CellText::Date(format_date(s, locale)),
            Some(IsoValue::DateTime(_)) => CellText::Date(format_datetime(s, locale)),
            None => CellText::Text(s.clone()),
        },
        Value::Array(items) => {
            let parts: Vec<String> = items
                .iter()
                .map(|item| render_cell(item, locale))
                .filter(|cell| *cell != CellText::Empty)
                .map(|cell| cell.to_string())
                .collect();
            if parts.is_empty() {
                CellText::Empty
            } else {
                CellText::Text(parts.join(", "))
            }
        }
        Value::Object(_) => CellText::Text(value.to_string()),
    }
}

#[component]
pub fn CellView(cell: CellText) -> impl IntoView {
    match cell {
        CellText::Check(true) => view! { <span class="cell-check cell-check--yes">"✓"</span> }.into_any(),
        CellText::Check(false) => view! { <span class="cell-check cell-check--no">"✗"</span> }.into_any(),
        CellText::Number(s) => view! { <span class="cell-number">{s}</span> }.into_any(),
        CellText::Date(s) => view! { <span class="cell-date">{s}</span> }.into_any(),
        CellText::Text(s) => view! { <span>{s}</span> }.into_any(),
        CellText::Empty => view! { <span></span> }.into_any(),
    }
}
