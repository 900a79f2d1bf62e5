//! Stock movements between location ranges

use serde_json::{json, Value};

use crate::shared::location_range::LocationRange;
use crate::shared::metadata::{
    DefaultSort, DetailGroup, Endpoints, FieldInputError, FieldKind, FilterField, ModelDescriptor,
};

pub const DESCRIPTOR: ModelDescriptor = ModelDescriptor {
    entity_name: "movement",
    table_name: "movement",
    resolver_name: "movements",
    page_path: "/movements",
    endpoints: Endpoints {
        list: "movements",
        detail: "movement",
        create: "executeFunction",
        update: "updateMovement",
        delete: "deleteMovement",
        export: None,
    },
    list_fields: &[
        "id",
        "number",
        "type",
        "status",
        "priority",
        "stockOwner{name}",
        "originalLocation{name}",
        "finalLocation{name}",
        "articleName",
        "quantity",
        "created",
        "createdBy",
    ],
    detail_fields: &[
        "id",
        "number",
        "type",
        "model",
        "status",
        "priority",
        "stockOwner{name}",
        "originalLocation{name}",
        "originalContent{quantity}",
        "finalLocation{name}",
        "finalContent{quantity}",
        "articleName",
        "quantity",
        "created",
        "createdBy",
        "modified",
        "modifiedBy",
    ],
    sortable_fields: &["number", "status", "priority", "quantity", "created"],
    excluded_list_fields: &["id"],
    excluded_detail_fields: &[],
    hidden_list_fields: &["priority", "createdBy"],
    displayed_labels: &[
        ("stockOwner{name}", "d:stockOwner"),
        ("originalLocation{name}", "d:originLocation"),
        ("finalLocation{name}", "d:finalLocation"),
    ],
    detail_groups: &[
        DetailGroup {
            title: "d:origin",
            fields: &["originalLocation{name}", "originalContent{quantity}"],
        },
        DetailGroup {
            title: "d:destination",
            fields: &["finalLocation{name}", "finalContent{quantity}"],
        },
    ],
    default_sort: DefaultSort::CREATED_DESC,
    structural_filters: &[],
    filter_fields: &[
        FilterField::new("number", "d:number", FieldKind::TEXT),
        FilterField::new("created", "d:created", FieldKind::Calendar { with_time: true }),
    ],
};

/// Server function moving the content of a location range to one location
pub const CREATE_FUNCTION: &str = "create_movements_from_range";

pub const PRIORITY_FIELD: FilterField = FilterField::new(
    "priority",
    "d:priority",
    FieldKind::Number {
        min: Some(1.0),
        max: Some(5.0),
        integer: true,
    },
);

/// Input of the bulk movement form
#[derive(Debug, Clone, PartialEq, Default)]
pub struct MovementInput {
    pub range: LocationRange,
    /// Barcode of the destination location
    pub final_location: String,
    /// Raw priority input, 1 (highest) to 5
    pub priority: String,
}

impl MovementInput {
    /// Event passed to [`CREATE_FUNCTION`]
    pub fn to_event(&self) -> Result<Value, FieldInputError> {
        if self.range.block_id.is_none() {
            return Err(FieldInputError::Required { field: "blockId" });
        }
        let final_location = self.final_location.trim();
        if final_location.is_empty() {
            return Err(FieldInputError::Required {
                field: "finalLocation",
            });
        }
        let mut input = self.range.to_filters();
        input.insert(
            "finalLocationBarcode".to_string(),
            Value::String(final_location.to_string()),
        );
        if let Some(priority) = PRIORITY_FIELD.parse_input(&self.priority)? {
            input.insert("priority".to_string(), priority.to_json());
        }
        Ok(json!({ "input": input }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::location_range::{AxisSelection, WILDCARD};

    fn range() -> LocationRange {
        LocationRange {
            block_id: Some("b2".into()),
            origin: AxisSelection {
                aisle: Some("03".into()),
                column: Some(WILDCARD.into()),
                ..Default::default()
            },
            destination: AxisSelection {
                aisle: Some("05".into()),
                column: Some(WILDCARD.into()),
                ..Default::default()
            },
        }
    }

    #[test]
    fn test_movement_event() {
        let input = MovementInput {
            range: range(),
            final_location: "LOC-9".into(),
            priority: "2".into(),
        };
        assert_eq!(
            input.to_event().unwrap(),
            json!({ "input": {
                "blockId": "b2",
                "originAisle": "03",
                "destinationAisle": "05",
                "finalLocationBarcode": "LOC-9",
                "priority": 2
            } })
        );
    }

    #[test]
    fn test_movement_rejects_bad_priority() {
        let input = MovementInput {
            range: range(),
            final_location: "LOC-9".into(),
            priority: "9".into(),
        };
        assert_eq!(
            input.to_event(),
            Err(FieldInputError::AboveMax {
                field: "priority",
                max: 5.0
            })
        );
    }
}
