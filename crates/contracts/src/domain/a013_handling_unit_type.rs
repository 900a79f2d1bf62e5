//! Handling-unit types: `parameters` rows with scope `handling_unit_type`

use crate::shared::metadata::{DefaultSort, Endpoints, ModelDescriptor, StaticValue};

pub const DESCRIPTOR: ModelDescriptor = ModelDescriptor {
    entity_name: "handlingUnitType",
    table_name: "parameter",
    resolver_name: "parameters",
    page_path: "/parameters/handling-unit-types",
    endpoints: Endpoints {
        list: "parameters",
        detail: "parameter",
        create: "createParameter",
        update: "updateParameter",
        delete: "deleteParameter",
        export: None,
    },
    list_fields: &["id", "scope", "code", "value", "system"],
    detail_fields: &["id", "scope", "code", "value", "system", "created", "modified"],
    sortable_fields: &["code", "value"],
    excluded_list_fields: &["id", "scope"],
    excluded_detail_fields: &["scope"],
    hidden_list_fields: &[],
    displayed_labels: &[],
    detail_groups: &[],
    default_sort: DefaultSort {
        field: "code",
        ascending: true,
    },
    structural_filters: &[
        ("scope", StaticValue::Str("handling_unit_type")),
        ("system", StaticValue::Bool(false)),
    ],
    filter_fields: &[],
};
