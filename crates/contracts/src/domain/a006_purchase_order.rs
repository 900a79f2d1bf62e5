use crate::shared::metadata::{
    DefaultSort, DetailGroup, DropdownOption, Endpoints, FieldKind, FilterField, ModelDescriptor,
};

const STATUS_OPTIONS: &[DropdownOption] = &[
    DropdownOption { value: "10", label: "d:created" },
    DropdownOption { value: "300", label: "d:inProgress" },
    DropdownOption { value: "1000", label: "d:closed" },
];

pub const DESCRIPTOR: ModelDescriptor = ModelDescriptor {
    entity_name: "purchaseOrder",
    table_name: "purchase_order",
    resolver_name: "purchaseOrders",
    page_path: "/purchase-orders",
    endpoints: Endpoints {
        list: "purchaseOrders",
        detail: "purchaseOrder",
        create: "createPurchaseOrder",
        update: "updatePurchaseOrder",
        delete: "deletePurchaseOrder",
        export: Some("exportPurchaseOrders"),
    },
    list_fields: &[
        "id",
        "name",
        "stockOwner{name}",
        "supplier",
        "type",
        "status",
        "orderDate",
        "expectedDeliveryDate",
        "created",
        "createdBy",
    ],
    detail_fields: &[
        "id",
        "name",
        "stockOwner{name}",
        "supplier",
        "type",
        "status",
        "orderDate",
        "expectedDeliveryDate",
        "comment",
        "created",
        "createdBy",
        "modified",
        "modifiedBy",
    ],
    sortable_fields: &["name", "status", "orderDate", "expectedDeliveryDate", "created"],
    excluded_list_fields: &["id"],
    excluded_detail_fields: &[],
    hidden_list_fields: &["createdBy", "type"],
    displayed_labels: &[
        ("stockOwner{name}", "d:stockOwner"),
        ("expectedDeliveryDate", "d:expectedDeliveryDate"),
    ],
    detail_groups: &[
        DetailGroup {
            title: "common:information",
            fields: &["name", "stockOwner{name}", "supplier", "type", "status"],
        },
        DetailGroup {
            title: "d:dates",
            fields: &["orderDate", "expectedDeliveryDate"],
        },
    ],
    default_sort: DefaultSort::CREATED_DESC,
    structural_filters: &[],
    filter_fields: &[
        FilterField::new("name", "d:name", FieldKind::TEXT),
        FilterField::new("status", "d:status", FieldKind::Dropdown { options: STATUS_OPTIONS }),
        FilterField::new("orderDate", "d:orderDate", FieldKind::DATE),
    ],
};
