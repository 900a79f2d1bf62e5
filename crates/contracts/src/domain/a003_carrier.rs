use crate::shared::metadata::{DefaultSort, Endpoints, FieldKind, FilterField, ModelDescriptor};

pub const DESCRIPTOR: ModelDescriptor = ModelDescriptor {
    entity_name: "carrier",
    table_name: "carrier",
    resolver_name: "carriers",
    page_path: "/carriers",
    endpoints: Endpoints {
        list: "carriers",
        detail: "carrier",
        create: "createCarrier",
        update: "updateCarrier",
        delete: "deleteCarrier",
        export: Some("exportCarriers"),
    },
    list_fields: &["id", "name", "code", "available", "toBeLoaded", "toBePalletized", "created"],
    detail_fields: &[
        "id",
        "name",
        "code",
        "available",
        "toBeLoaded",
        "toBePalletized",
        "useReceiptNumber",
        "created",
        "createdBy",
        "modified",
        "modifiedBy",
    ],
    sortable_fields: &["name", "code", "available", "created"],
    excluded_list_fields: &["id"],
    excluded_detail_fields: &[],
    hidden_list_fields: &["toBePalletized"],
    displayed_labels: &[
        ("toBeLoaded", "d:toBeLoaded"),
        ("toBePalletized", "d:toBePalletized"),
    ],
    detail_groups: &[],
    default_sort: DefaultSort::CREATED_DESC,
    structural_filters: &[],
    filter_fields: &[
        FilterField::new("name", "d:name", FieldKind::TEXT),
        FilterField::new("available", "d:available", FieldKind::Boolean),
    ],
};
