//! Storage locations addressed by block/aisle/column/level/position

use crate::shared::metadata::{DefaultSort, DetailGroup, Endpoints, FieldKind, FilterField, ModelDescriptor};

pub const DESCRIPTOR: ModelDescriptor = ModelDescriptor {
    entity_name: "location",
    table_name: "location",
    resolver_name: "locations",
    page_path: "/locations",
    endpoints: Endpoints {
        list: "locations",
        detail: "location",
        create: "createLocation",
        update: "updateLocation",
        delete: "deleteLocation",
        export: Some("exportLocations"),
    },
    list_fields: &[
        "id",
        "block{name}",
        "name",
        "barcode",
        "aisle",
        "column",
        "level",
        "position",
        "replenish",
        "category",
        "created",
    ],
    detail_fields: &[
        "id",
        "block{name}",
        "name",
        "barcode",
        "aisle",
        "column",
        "level",
        "position",
        "replenish",
        "replenishType",
        "allowCycleCountStockMin",
        "category",
        "created",
        "createdBy",
        "modified",
        "modifiedBy",
    ],
    sortable_fields: &["barcode", "aisle", "column", "level", "position", "name", "created"],
    excluded_list_fields: &["id"],
    excluded_detail_fields: &["allowCycleCountStockMin"],
    hidden_list_fields: &["category", "created"],
    displayed_labels: &[("block{name}", "d:block")],
    detail_groups: &[DetailGroup {
        title: "d:address",
        fields: &["block{name}", "aisle", "column", "level", "position"],
    }],
    // warehouse staff read locations in physical order
    default_sort: DefaultSort {
        field: "barcode",
        ascending: true,
    },
    structural_filters: &[],
    filter_fields: &[
        FilterField::new("barcode", "d:barcode", FieldKind::TEXT),
        FilterField::new("aisle", "d:aisle", FieldKind::TEXT),
        FilterField::new("column", "d:column", FieldKind::TEXT),
        FilterField::new("level", "d:level", FieldKind::TEXT),
        FilterField::new("position", "d:position", FieldKind::TEXT),
        FilterField::new("replenish", "d:replenish", FieldKind::Boolean),
    ],
};
