use crate::shared::metadata::{DefaultSort, Endpoints, FieldKind, FilterField, ModelDescriptor};

pub const DESCRIPTOR: ModelDescriptor = ModelDescriptor {
    entity_name: "stockOwner",
    table_name: "stock_owner",
    resolver_name: "stockOwners",
    page_path: "/stock-owners",
    endpoints: Endpoints {
        list: "stockOwners",
        detail: "stockOwner",
        create: "createStockOwner",
        update: "updateStockOwner",
        delete: "deleteStockOwner",
        export: Some("exportStockOwners"),
    },
    list_fields: &[
        "id",
        "name",
        "contact",
        "city",
        "country",
        "email",
        "mobile",
        "status",
        "created",
    ],
    detail_fields: &[
        "id",
        "name",
        "contact",
        "address1",
        "address2",
        "postCode",
        "city",
        "country",
        "email",
        "mobile",
        "phone",
        "status",
        "created",
        "modified",
    ],
    sortable_fields: &["name", "city", "country", "status", "created"],
    excluded_list_fields: &["id"],
    excluded_detail_fields: &[],
    hidden_list_fields: &["mobile", "email"],
    displayed_labels: &[],
    detail_groups: &[],
    default_sort: DefaultSort::CREATED_DESC,
    structural_filters: &[],
    filter_fields: &[
        FilterField::new("name", "d:name", FieldKind::TEXT),
        FilterField::new("city", "d:city", FieldKind::TEXT),
    ],
};
