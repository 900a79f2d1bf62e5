use chrono::NaiveDate;
use serde_json::{json, Value};

use crate::shared::location_range::LocationRange;
use crate::shared::metadata::{
    DefaultSort, Endpoints, FieldInputError, FieldKind, FieldValue, FilterField, ModelDescriptor,
};

pub const DESCRIPTOR: ModelDescriptor = ModelDescriptor {
    entity_name: "cycleCount",
    table_name: "cycle_count",
    resolver_name: "cycleCounts",
    page_path: "/cycle-counts",
    endpoints: Endpoints {
        list: "cycleCounts",
        detail: "cycleCount",
        create: "executeFunction",
        update: "updateCycleCount",
        delete: "deleteCycleCount",
        export: Some("exportCycleCounts"),
    },
    list_fields: &[
        "id",
        "name",
        "model",
        "type",
        "status",
        "stockOwner{name}",
        "priority",
        "cycleCountDate",
        "reason",
        "created",
        "createdBy",
    ],
    detail_fields: &[
        "id",
        "name",
        "model",
        "type",
        "status",
        "stockOwner{name}",
        "priority",
        "cycleCountDate",
        "reason",
        "comment",
        "created",
        "createdBy",
        "modified",
        "modifiedBy",
    ],
    sortable_fields: &["name", "status", "priority", "cycleCountDate", "created"],
    excluded_list_fields: &["id"],
    excluded_detail_fields: &[],
    hidden_list_fields: &["model", "reason", "createdBy"],
    displayed_labels: &[
        ("stockOwner{name}", "d:stockOwner"),
        ("cycleCountDate", "d:cycleCountDate"),
    ],
    detail_groups: &[],
    default_sort: DefaultSort::CREATED_DESC,
    structural_filters: &[],
    filter_fields: &[
        FilterField::new("name", "d:name", FieldKind::TEXT),
        FilterField::new(
            "priority",
            "d:priority",
            FieldKind::Number {
                min: Some(0.0),
                max: Some(9.0),
                integer: true,
            },
        ),
        FilterField::new("cycleCountDate", "d:cycleCountDate", FieldKind::DATE),
    ],
};

/// Server function creating a cycle count over a location range
pub const CREATE_FUNCTION: &str = "create_cycle_count";

pub const DATE_FIELD: FilterField =
    FilterField::new("cycleCountDate", "d:cycleCountDate", FieldKind::DATE);

/// Parse the date input of the form; blank means "no date"
pub fn parse_cycle_count_date(raw: &str) -> Result<Option<NaiveDate>, FieldInputError> {
    Ok(match DATE_FIELD.parse_input(raw)? {
        Some(FieldValue::Date(date)) => Some(date),
        _ => None,
    })
}

/// Input of the cycle-count form
#[derive(Debug, Clone, PartialEq, Default)]
pub struct CycleCountInput {
    pub name: String,
    pub cycle_count_date: Option<NaiveDate>,
    pub range: LocationRange,
}

impl CycleCountInput {
    /// Event passed to [`CREATE_FUNCTION`]
    pub fn to_event(&self) -> Result<Value, FieldInputError> {
        let name = self.name.trim();
        if name.is_empty() {
            return Err(FieldInputError::Required { field: "name" });
        }
        if self.range.block_id.is_none() {
            return Err(FieldInputError::Required { field: "blockId" });
        }
        let mut input = self.range.to_filters();
        input.insert("name".to_string(), Value::String(name.to_string()));
        if let Some(date) = self.cycle_count_date {
            input.insert(
                "cycleCountDate".to_string(),
                Value::String(date.format("%Y-%m-%d").to_string()),
            );
        }
        Ok(json!({ "input": input }))
    }
}
