//! GraphQL client
//!
//! Every screen goes through [`GraphQlTransport`] so stores and hooks can be
//! exercised with in-memory fakes.

use async_trait::async_trait;
use contracts::shared::graphql::{
    ExecuteFunctionResult, GraphQlRequest, GraphQlResponse, EXECUTE_FUNCTION_MUTATION,
};
use gloo_net::http::Request;
use serde::de::DeserializeOwned;
use serde_json::{json, Value};
use thiserror::Error;

use super::api_utils::graphql_url;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    #[error("network error: {0}")]
    Network(String),

    #[error("server responded with status {0}")]
    Http(u16),

    #[error("{}", .0.join("; "))]
    GraphQl(Vec<String>),

    #[error("session expired, please sign in again")]
    SessionExpired,

    #[error("unexpected response: {0}")]
    Decode(String),

    #[error("storage unavailable: {0}")]
    Storage(String),
}

impl ApiError {
    pub fn is_session_expired(&self) -> bool {
        matches!(self, ApiError::SessionExpired)
    }
}

#[async_trait(?Send)]
pub trait GraphQlTransport {
    /// Execute one operation and return its `data` payload.
    async fn execute(&self, request: GraphQlRequest) -> Result<Value, ApiError>;
}

/// Check the error list of a response envelope and extract `data`.
pub fn into_data(response: GraphQlResponse<Value>) -> Result<Value, ApiError> {
    if response.errors.iter().any(|e| e.is_session_expired()) {
        return Err(ApiError::SessionExpired);
    }
    if !response.errors.is_empty() {
        return Err(ApiError::GraphQl(
            response.errors.into_iter().map(|e| e.message).collect(),
        ));
    }
    response
        .data
        .ok_or_else(|| ApiError::Decode("response has neither data nor errors".to_string()))
}

/// Run `query` and deserialize the field `root` of its data.
pub async fn fetch_field<T: DeserializeOwned>(
    transport: &dyn GraphQlTransport,
    query: &str,
    variables: Value,
    root: &str,
) -> Result<T, ApiError> {
    let mut data = transport
        .execute(GraphQlRequest::new(query, variables))
        .await?;
    let field = data
        .get_mut(root)
        .map(Value::take)
        .ok_or_else(|| ApiError::Decode(format!("missing field `{}`", root)))?;
    serde_json::from_value(field).map_err(|e| ApiError::Decode(e.to_string()))
}

/// Run a server function; a non-OK status becomes a GraphQL error.
pub async fn execute_function(
    transport: &dyn GraphQlTransport,
    function_name: &str,
    event: Value,
) -> Result<ExecuteFunctionResult, ApiError> {
    let result: ExecuteFunctionResult = fetch_field(
        transport,
        EXECUTE_FUNCTION_MUTATION,
        json!({ "functionName": function_name, "event": event }),
        "executeFunction",
    )
    .await?;
    if !result.is_ok() {
        let message = result
            .message()
            .map(str::to_string)
            .unwrap_or_else(|| format!("{} failed with status {}", function_name, result.status));
        return Err(ApiError::GraphQl(vec![message]));
    }
    Ok(result)
}

/// Browser transport: POST to the GraphQL endpoint with the session token.
#[derive(Clone, Debug)]
pub struct HttpTransport {
    endpoint: String,
    access_token: Option<String>,
}

impl HttpTransport {
    pub fn new(endpoint: impl Into<String>, access_token: Option<String>) -> Self {
        Self {
            endpoint: endpoint.into(),
            access_token,
        }
    }

    /// Transport for the console origin
    pub fn for_session(access_token: Option<String>) -> Self {
        Self::new(graphql_url(), access_token)
    }
}

#[async_trait(?Send)]
impl GraphQlTransport for HttpTransport {
    async fn execute(&self, request: GraphQlRequest) -> Result<Value, ApiError> {
        let mut builder = Request::post(&self.endpoint);
        if let Some(token) = &self.access_token {
            builder = builder.header("Authorization", &format!("Bearer {}", token));
        }

        let response = builder
            .json(&request)
            .map_err(|e| ApiError::Network(format!("failed to serialize request: {}", e)))?
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;

        if response.status() == 401 {
            return Err(ApiError::SessionExpired);
        }
        if !response.ok() {
            return Err(ApiError::Http(response.status()));
        }

        let envelope = response
            .json::<GraphQlResponse<Value>>()
            .await
            .map_err(|e| ApiError::Decode(e.to_string()))?;
        into_data(envelope)
    }
}
