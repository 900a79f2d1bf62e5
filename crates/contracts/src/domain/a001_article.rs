//! Articles (stock keeping items)

use crate::shared::metadata::{
    DefaultSort, DetailGroup, DropdownOption, Endpoints, FieldKind, FilterField, ModelDescriptor,
};

const STATUS_OPTIONS: &[DropdownOption] = &[
    DropdownOption { value: "1005", label: "d:created" },
    DropdownOption { value: "1100", label: "d:available" },
    DropdownOption { value: "1400", label: "d:blocked" },
    DropdownOption { value: "2000", label: "d:closed" },
];

pub const DESCRIPTOR: ModelDescriptor = ModelDescriptor {
    entity_name: "article",
    table_name: "article",
    resolver_name: "articles",
    page_path: "/articles",
    endpoints: Endpoints {
        list: "articles",
        detail: "article",
        create: "createArticle",
        update: "updateArticle",
        delete: "deleteArticle",
        export: Some("exportArticles"),
    },
    list_fields: &[
        "id",
        "stockOwner{name}",
        "name",
        "code",
        "description",
        "status",
        "baseUnitPrice",
        "boxQuantity",
        "permanentProduct",
        "created",
        "createdBy",
        "modified",
        "modifiedBy",
    ],
    detail_fields: &[
        "id",
        "stockOwner{name}",
        "name",
        "code",
        "description",
        "status",
        "length",
        "width",
        "height",
        "baseUnitWeight",
        "baseUnitPrice",
        "boxQuantity",
        "permanentProduct",
        "extras",
        "created",
        "createdBy",
        "modified",
        "modifiedBy",
    ],
    sortable_fields: &["name", "code", "status", "baseUnitPrice", "created", "modified"],
    excluded_list_fields: &["id", "modifiedBy"],
    excluded_detail_fields: &["extras"],
    hidden_list_fields: &["description", "createdBy", "modified"],
    displayed_labels: &[
        ("stockOwner{name}", "d:stockOwner"),
        ("baseUnitPrice", "d:baseUnitPrice"),
        ("boxQuantity", "d:boxQuantity"),
        ("permanentProduct", "d:permanentProduct"),
    ],
    detail_groups: &[
        DetailGroup {
            title: "common:information",
            fields: &["stockOwner{name}", "name", "code", "description", "status"],
        },
        DetailGroup {
            title: "d:dimensions",
            fields: &["length", "width", "height", "baseUnitWeight"],
        },
    ],
    default_sort: DefaultSort::CREATED_DESC,
    structural_filters: &[],
    filter_fields: &[
        FilterField::new("name", "d:name", FieldKind::TEXT),
        FilterField::new("code", "d:code", FieldKind::Text { max_length: Some(30) }),
        FilterField::new("status", "d:status", FieldKind::Dropdown { options: STATUS_OPTIONS }),
        FilterField::new("permanentProduct", "d:permanentProduct", FieldKind::Boolean),
    ],
};
