use crate::shared::metadata::{DefaultSort, Endpoints, FieldKind, FilterField, ModelDescriptor};

pub const DESCRIPTOR: ModelDescriptor = ModelDescriptor {
    entity_name: "barcode",
    table_name: "barcode",
    resolver_name: "barcodes",
    page_path: "/barcodes",
    endpoints: Endpoints {
        list: "barcodes",
        detail: "barcode",
        create: "createBarcode",
        update: "updateBarcode",
        delete: "deleteBarcode",
        export: Some("exportBarcodes"),
    },
    list_fields: &[
        "id",
        "article{name}",
        "name",
        "supplierName",
        "quantity",
        "blacklisted",
        "preparationMode",
        "created",
    ],
    detail_fields: &[
        "id",
        "article{name}",
        "name",
        "supplierName",
        "supplierArticleCode",
        "quantity",
        "blacklisted",
        "preparationMode",
        "rotation",
        "created",
        "createdBy",
        "modified",
        "modifiedBy",
    ],
    sortable_fields: &["name", "supplierName", "quantity", "blacklisted", "created"],
    excluded_list_fields: &["id"],
    excluded_detail_fields: &[],
    hidden_list_fields: &["preparationMode"],
    displayed_labels: &[("article{name}", "d:article")],
    detail_groups: &[],
    default_sort: DefaultSort::CREATED_DESC,
    structural_filters: &[],
    filter_fields: &[
        FilterField::new("name", "d:name", FieldKind::TEXT),
        FilterField::new("blacklisted", "d:blacklisted", FieldKind::Boolean),
    ],
};
