use crate::shared::metadata::{DefaultSort, Endpoints, FieldKind, FilterField, ModelDescriptor};

pub const DESCRIPTOR: ModelDescriptor = ModelDescriptor {
    entity_name: "handlingUnit",
    table_name: "handling_unit",
    resolver_name: "handlingUnits",
    page_path: "/handling-units",
    endpoints: Endpoints {
        list: "handlingUnits",
        detail: "handlingUnit",
        create: "createHandlingUnit",
        update: "updateHandlingUnit",
        delete: "deleteHandlingUnit",
        export: Some("exportHandlingUnits"),
    },
    list_fields: &[
        "id",
        "name",
        "barcode",
        "type",
        "category",
        "location{name}",
        "stockOwner{name}",
        "parentHandlingUnit{name}",
        "weight",
        "created",
    ],
    detail_fields: &[
        "id",
        "name",
        "barcode",
        "code",
        "type",
        "category",
        "location{name}",
        "stockOwner{name}",
        "parentHandlingUnit{name}",
        "weight",
        "reservation",
        "created",
        "createdBy",
        "modified",
        "modifiedBy",
    ],
    sortable_fields: &["name", "barcode", "type", "weight", "created"],
    excluded_list_fields: &["id"],
    excluded_detail_fields: &["reservation"],
    hidden_list_fields: &["parentHandlingUnit", "category"],
    displayed_labels: &[
        ("location{name}", "d:location"),
        ("stockOwner{name}", "d:stockOwner"),
        ("parentHandlingUnit{name}", "d:parentHandlingUnit"),
    ],
    detail_groups: &[],
    default_sort: DefaultSort::CREATED_DESC,
    structural_filters: &[],
    filter_fields: &[
        FilterField::new("barcode", "d:barcode", FieldKind::TEXT),
        FilterField::new(
            "weight",
            "d:weight",
            FieldKind::Number {
                min: Some(0.0),
                max: None,
                integer: false,
            },
        ),
    ],
};
