use crate::shared::metadata::{DefaultSort, Endpoints, FieldKind, FilterField, ModelDescriptor};

pub const DESCRIPTOR: ModelDescriptor = ModelDescriptor {
    entity_name: "delivery",
    table_name: "delivery",
    resolver_name: "deliveries",
    page_path: "/deliveries",
    endpoints: Endpoints {
        list: "deliveries",
        detail: "delivery",
        create: "createDelivery",
        update: "updateDelivery",
        delete: "deleteDelivery",
        export: Some("exportDeliveries"),
    },
    list_fields: &[
        "id",
        "name",
        "status",
        "stockOwner{name}",
        "carrier{name}",
        "deliveryType",
        "priority",
        "anticipatedDeliveryDate",
        "created",
    ],
    detail_fields: &[
        "id",
        "name",
        "status",
        "stockOwner{name}",
        "carrier{name}",
        "deliveryType",
        "priority",
        "anticipatedDeliveryDate",
        "deliveryAddress{city}",
        "comment",
        "created",
        "createdBy",
        "modified",
        "modifiedBy",
    ],
    sortable_fields: &["name", "status", "priority", "anticipatedDeliveryDate", "created"],
    excluded_list_fields: &["id"],
    excluded_detail_fields: &[],
    hidden_list_fields: &["deliveryType"],
    displayed_labels: &[
        ("stockOwner{name}", "d:stockOwner"),
        ("carrier{name}", "d:carrier"),
        ("anticipatedDeliveryDate", "d:anticipatedDeliveryDate"),
    ],
    detail_groups: &[],
    default_sort: DefaultSort::CREATED_DESC,
    structural_filters: &[],
    filter_fields: &[
        FilterField::new("name", "d:name", FieldKind::TEXT),
        FilterField::new("anticipatedDeliveryDate", "d:anticipatedDeliveryDate", FieldKind::DATE),
    ],
};
