//! Entity data-fetch hooks
//!
//! Variables for every paginated list query, and the Leptos hook that keeps
//! a list screen's data in sync with its query.

use contracts::shared::graphql::{list_query, GraphQlRequest, ListPage, ListVariables, OrderByItem};
use contracts::shared::metadata::ModelDescriptor;
use leptos::prelude::*;
use leptos::task::spawn_local;
use serde_json::{Map, Value};

use super::graphql::{fetch_field, ApiError, GraphQlTransport};
use crate::layout::global_context::use_app_state;
use crate::shared::toast::use_toasts;

pub const DEFAULT_PAGE_SIZE: u32 = 100;

/// What a list screen asks for
#[derive(Clone, Debug, PartialEq)]
pub struct ListQuery {
    pub filters: Map<String, Value>,
    /// 1-based
    pub page: u32,
    pub items_per_page: u32,
    /// `None` falls back to the entity's default ordering
    pub sort: Option<Vec<OrderByItem>>,
}

impl Default for ListQuery {
    fn default() -> Self {
        Self {
            filters: Map::new(),
            page: 1,
            items_per_page: DEFAULT_PAGE_SIZE,
            sort: None,
        }
    }
}

impl ListQuery {
    /// Caller sort is forwarded unchanged; structural filters are merged last
    /// so the caller cannot override them.
    pub fn variables(&self, descriptor: &ModelDescriptor) -> ListVariables {
        let mut filters = self.filters.clone();
        for (key, value) in descriptor.structural_filters {
            filters.insert((*key).to_string(), value.to_json());
        }

        let order_by = match &self.sort {
            Some(sort) => sort.clone(),
            None => vec![descriptor.default_sort.to_order_by()],
        };

        ListVariables {
            filters,
            order_by,
            page: self.page.max(1),
            items_per_page: self.items_per_page,
        }
    }

    pub fn request(&self, descriptor: &ModelDescriptor, selection: &[String]) -> GraphQlRequest {
        let variables = serde_json::to_value(self.variables(descriptor)).unwrap_or(Value::Null);
        GraphQlRequest::new(
            list_query(descriptor.endpoints.list, &filter_type(descriptor), selection),
            variables,
        )
    }
}

/// GraphQL input type of an entity's list filters: `article` -> `ArticleSearchFilters`
pub fn filter_type(descriptor: &ModelDescriptor) -> String {
    let mut chars = descriptor.entity_name.chars();
    let head: String = chars.next().map(|c| c.to_uppercase().collect()).unwrap_or_default();
    format!("{}{}SearchFilters", head, chars.as_str())
}

pub async fn fetch_list(
    transport: &dyn GraphQlTransport,
    descriptor: &ModelDescriptor,
    query: &ListQuery,
    selection: &[String],
) -> Result<ListPage<Value>, ApiError> {
    let request = query.request(descriptor, selection);
    fetch_field(transport, &request.query, request.variables, descriptor.endpoints.list).await
}

/// Reactive list state returned by [`use_entity_list`]
#[derive(Clone, Copy)]
pub struct EntityList {
    pub data: RwSignal<Option<ListPage<Value>>>,
    pub is_loading: RwSignal<bool>,
    pub error: RwSignal<Option<String>>,
    pub refetch: Callback<()>,
}

/// Load `descriptor`'s list whenever `query` or `selection` change.
///
/// Only the latest load writes its result; an older response that arrives
/// late is discarded.
pub fn use_entity_list(
    descriptor: &'static ModelDescriptor,
    query: Signal<ListQuery>,
    selection: Signal<Vec<String>>,
) -> EntityList {
    let app_state = use_app_state();
    let toasts = use_toasts();
    let data = RwSignal::new(None);
    let is_loading = RwSignal::new(false);
    let error = RwSignal::new(None);
    let latest = StoredValue::new(0u64);

    let load = move || {
        let query = query.get_untracked();
        let selection = selection.get_untracked();
        let seq = latest.get_value() + 1;
        latest.set_value(seq);
        is_loading.set(true);
        error.set(None);

        spawn_local(async move {
            let transport = app_state.transport();
            let result = fetch_list(transport.as_ref(), descriptor, &query, &selection).await;
            if latest.get_value() != seq {
                return;
            }
            is_loading.set(false);
            match result {
                Ok(page) => data.set(Some(page)),
                Err(e) => {
                    error.set(Some(e.to_string()));
                    app_state.report_error(&toasts, &e);
                }
            }
        });
    };

    Effect::new(move |_| {
        query.track();
        selection.track();
        load();
    });

    EntityList {
        data,
        is_loading,
        error,
        refetch: Callback::new(move |_: ()| load()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::graphql::testing::ScriptedTransport;
    use contracts::domain::{a004_location, a009_stock_status, a013_handling_unit_type, registry};
    use futures::executor::block_on;
    use serde_json::json;

    #[test]
    fn test_default_sort_when_none() {
        for descriptor in registry::ALL {
            let vars = ListQuery::default().variables(descriptor);
            assert_eq!(
                vars.order_by,
                vec![descriptor.default_sort.to_order_by()],
                "{}",
                descriptor.entity_name
            );
        }
        assert_eq!(
            ListQuery::default().variables(&a004_location::DESCRIPTOR).order_by,
            vec![OrderByItem {
                field: "barcode".into(),
                ascending: true
            }]
        );
    }

    #[test]
    fn test_caller_sort_forwarded_unchanged() {
        let sort = vec![
            OrderByItem {
                field: "status".into(),
                ascending: true,
            },
            OrderByItem {
                field: "created".into(),
                ascending: false,
            },
        ];
        for descriptor in registry::ALL {
            let query = ListQuery {
                sort: Some(sort.clone()),
                ..Default::default()
            };
            assert_eq!(query.variables(descriptor).order_by, sort);
        }
    }

    #[test]
    fn test_structural_filters_cannot_be_overridden() {
        let mut filters = Map::new();
        filters.insert("scope".into(), json!("handling_unit_type"));
        filters.insert("code".into(), json!("AVL"));
        let query = ListQuery {
            filters,
            ..Default::default()
        };
        let vars = query.variables(&a009_stock_status::DESCRIPTOR);
        assert_eq!(vars.filters["scope"], json!("stock_statuses"));
        assert_eq!(vars.filters["code"], json!("AVL"));

        let vars = ListQuery::default().variables(&a013_handling_unit_type::DESCRIPTOR);
        assert_eq!(vars.filters["scope"], json!("handling_unit_type"));
        assert_eq!(vars.filters["system"], json!(false));
    }

    #[test]
    fn test_page_is_one_based() {
        let query = ListQuery {
            page: 0,
            ..Default::default()
        };
        assert_eq!(query.variables(&a004_location::DESCRIPTOR).page, 1);
    }

    #[test]
    fn test_fetch_list() {
        let transport = ScriptedTransport::default();
        transport.reply(Ok(json!({ "locations": {
            "count": 1, "itemsPerPage": 100, "totalPages": 1, "page": 1,
            "results": [{ "id": "l1", "barcode": "A-01-01" }]
        } })));
        let page = block_on(fetch_list(
            &transport,
            &a004_location::DESCRIPTOR,
            &ListQuery::default(),
            &["barcode".to_string()],
        ))
        .unwrap();
        assert_eq!(page.count, 1);
        assert_eq!(page.results[0]["barcode"], json!("A-01-01"));

        let requests = transport.requests.borrow();
        assert!(requests[0].query.contains("LocationSearchFilters"));
        assert_eq!(requests[0].variables["orderBy"][0]["field"], json!("barcode"));
    }

    #[test]
    fn test_filter_type() {
        assert_eq!(filter_type(&a004_location::DESCRIPTOR), "LocationSearchFilters");
    }
}
