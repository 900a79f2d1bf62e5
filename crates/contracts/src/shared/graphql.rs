//! GraphQL request/response envelopes and list query variables

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct GraphQlRequest {
    pub query: String,
    #[serde(default, skip_serializing_if = "Value::is_null")]
    pub variables: Value,
}

impl GraphQlRequest {
    pub fn new(query: impl Into<String>, variables: Value) -> Self {
        Self {
            query: query.into(),
            variables,
        }
    }
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(bound(deserialize = "T: Deserialize<'de>"))]
pub struct GraphQlResponse<T> {
    #[serde(default)]
    pub data: Option<T>,
    #[serde(default)]
    pub errors: Vec<GraphQlError>,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct GraphQlError {
    pub message: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub extensions: Option<GraphQlErrorExtensions>,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Default)]
pub struct GraphQlErrorExtensions {
    #[serde(default)]
    pub code: Option<String>,
}

impl GraphQlError {
    pub const UNAUTHENTICATED: &'static str = "UNAUTHENTICATED";

    /// The API rejected the access token
    pub fn is_session_expired(&self) -> bool {
        let code_says_so = self
            .extensions
            .as_ref()
            .and_then(|e| e.code.as_deref())
            .map_or(false, |code| code == Self::UNAUTHENTICATED);
        code_says_so || self.message.to_ascii_lowercase().contains("jwt expired")
    }
}

/// One `orderBy` entry; list order is the multi-sort priority
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct OrderByItem {
    pub field: String,
    pub ascending: bool,
}

/// Variables shared by every paginated list query
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ListVariables {
    pub filters: Map<String, Value>,
    pub order_by: Vec<OrderByItem>,
    pub page: u32,
    pub items_per_page: u32,
}

/// Page of a list query result
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ListPage<T> {
    pub count: u64,
    #[serde(default)]
    pub items_per_page: u32,
    #[serde(default)]
    pub total_pages: u32,
    #[serde(default)]
    pub page: u32,
    pub results: Vec<T>,
}

impl<T> Default for ListPage<T> {
    fn default() -> Self {
        Self {
            count: 0,
            items_per_page: 0,
            total_pages: 0,
            page: 0,
            results: Vec::new(),
        }
    }
}

/// Server-side functions back the bulk operations (movements, cycle counts)
pub const EXECUTE_FUNCTION_MUTATION: &str = "mutation executeFunction($functionName: String!, $event: JSON!) { \
     executeFunction(functionName: $functionName, event: $event) { status output } }";

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct ExecuteFunctionResult {
    pub status: String,
    #[serde(default)]
    pub output: Value,
}

impl ExecuteFunctionResult {
    pub fn is_ok(&self) -> bool {
        self.status.eq_ignore_ascii_case("ok")
    }

    /// Failure detail reported by the function, if any
    pub fn message(&self) -> Option<&str> {
        self.output.get("message").and_then(Value::as_str)
    }
}

/// Query text for a paginated list: `resolver(filters, orderBy, page, itemsPerPage) { count ... results { fields } }`
pub fn list_query(resolver: &str, filter_type: &str, selection: &[String]) -> String {
    format!(
        "query {resolver}($filters: {filter_type}, $orderBy: [{resolver}OrderByCriterion!], $page: Int!, $itemsPerPage: Int!) {{ \
         {resolver}(filters: $filters, orderBy: $orderBy, page: $page, itemsPerPage: $itemsPerPage) {{ \
         count itemsPerPage totalPages page results {{ id {fields} }} }} }}",
        resolver = resolver,
        filter_type = filter_type,
        fields = selection.join(" "),
    )
}
