//! Stock statuses: rows of the generic `parameters` table with scope `stock_statuses`

use crate::shared::metadata::{DefaultSort, Endpoints, FieldKind, FilterField, ModelDescriptor, StaticValue};

pub const DESCRIPTOR: ModelDescriptor = ModelDescriptor {
    entity_name: "stockStatus",
    table_name: "parameter",
    resolver_name: "parameters",
    page_path: "/parameters/stock-statuses",
    endpoints: Endpoints {
        list: "parameters",
        detail: "parameter",
        create: "createParameter",
        update: "updateParameter",
        delete: "deleteParameter",
        export: Some("exportParameters"),
    },
    list_fields: &["id", "scope", "code", "value", "translation", "system", "created"],
    detail_fields: &["id", "scope", "code", "value", "translation", "system", "created", "modified"],
    sortable_fields: &["code", "value", "created"],
    excluded_list_fields: &["id", "scope"],
    excluded_detail_fields: &["scope"],
    hidden_list_fields: &["translation"],
    displayed_labels: &[],
    detail_groups: &[],
    default_sort: DefaultSort {
        field: "code",
        ascending: true,
    },
    structural_filters: &[("scope", StaticValue::Str("stock_statuses"))],
    filter_fields: &[
        FilterField::new("code", "d:code", FieldKind::INTEGER),
        FilterField::new("value", "d:value", FieldKind::TEXT),
    ],
};
