//! Blocks: the coarsest unit of the location hierarchy

use crate::shared::metadata::{DefaultSort, Endpoints, FieldKind, FilterField, ModelDescriptor};

pub const DESCRIPTOR: ModelDescriptor = ModelDescriptor {
    entity_name: "block",
    table_name: "block",
    resolver_name: "blocks",
    page_path: "/blocks",
    endpoints: Endpoints {
        list: "blocks",
        detail: "block",
        create: "createBlock",
        update: "updateBlock",
        delete: "deleteBlock",
        export: Some("exportBlocks"),
    },
    list_fields: &[
        "id",
        "building{name}",
        "name",
        "level",
        "comment",
        "moveable",
        "bulk",
        "created",
        "modified",
    ],
    detail_fields: &[
        "id",
        "building{name}",
        "name",
        "level",
        "comment",
        "moveable",
        "bulk",
        "created",
        "createdBy",
        "modified",
        "modifiedBy",
    ],
    sortable_fields: &["name", "level", "moveable", "bulk", "created"],
    excluded_list_fields: &["id"],
    excluded_detail_fields: &[],
    hidden_list_fields: &["comment", "modified"],
    displayed_labels: &[("building{name}", "d:building")],
    detail_groups: &[],
    // blocks are browsed alphabetically
    default_sort: DefaultSort {
        field: "name",
        ascending: true,
    },
    structural_filters: &[],
    filter_fields: &[
        FilterField::new("name", "d:name", FieldKind::TEXT),
        FilterField::new("level", "d:level", FieldKind::INTEGER),
        FilterField::new("moveable", "d:moveable", FieldKind::Boolean),
    ],
};
