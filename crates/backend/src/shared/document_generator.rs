//! Client of the upstream `generateDocument` mutation

use async_trait::async_trait;
use contracts::shared::document::{DocumentResult, GenerateDocumentData, GENERATE_DOCUMENT_MUTATION};
use contracts::shared::graphql::{GraphQlRequest, GraphQlResponse};
use serde_json::Value;
use thiserror::Error;

use super::config::GraphQlConfig;

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum GeneratorError {
    #[error("access token rejected by the document service")]
    Unauthenticated,

    #[error("document service unreachable: {0}")]
    Network(String),

    #[error("document service responded with status {0}")]
    Http(u16),

    #[error("{}", .0.join("; "))]
    GraphQl(Vec<String>),

    #[error("unexpected document service response: {0}")]
    Decode(String),
}

#[async_trait]
pub trait DocumentGenerator: Send + Sync {
    /// Run `generateDocument` on behalf of the caller's access token
    async fn generate(&self, access_token: &str, variables: Value) -> Result<DocumentResult, GeneratorError>;
}

pub struct GraphQlDocumentGenerator {
    client: reqwest::Client,
    url: String,
}

impl GraphQlDocumentGenerator {
    pub fn new(config: &GraphQlConfig) -> anyhow::Result<Self> {
        let client = reqwest::Client::builder().timeout(config.timeout()).build()?;
        Ok(Self {
            client,
            url: config.url.clone(),
        })
    }
}

/// Unwrap the GraphQL envelope of a `generateDocument` response
pub fn into_document(response: GraphQlResponse<GenerateDocumentData>) -> Result<DocumentResult, GeneratorError> {
    if response.errors.iter().any(|e| e.is_session_expired()) {
        return Err(GeneratorError::Unauthenticated);
    }
    if !response.errors.is_empty() {
        return Err(GeneratorError::GraphQl(
            response.errors.into_iter().map(|e| e.message).collect(),
        ));
    }
    response
        .data
        .map(|d| d.generate_document)
        .ok_or_else(|| GeneratorError::Decode("response has neither data nor errors".to_string()))
}

#[async_trait]
impl DocumentGenerator for GraphQlDocumentGenerator {
    async fn generate(&self, access_token: &str, variables: Value) -> Result<DocumentResult, GeneratorError> {
        let request = GraphQlRequest::new(GENERATE_DOCUMENT_MUTATION, variables);
        let response = self
            .client
            .post(&self.url)
            .bearer_auth(access_token)
            .json(&request)
            .send()
            .await
            .map_err(|e| GeneratorError::Network(e.to_string()))?;

        let status = response.status();
        if status == reqwest::StatusCode::UNAUTHORIZED {
            return Err(GeneratorError::Unauthenticated);
        }
        if !status.is_success() {
            return Err(GeneratorError::Http(status.as_u16()));
        }

        let body: GraphQlResponse<GenerateDocumentData> = response
            .json()
            .await
            .map_err(|e| GeneratorError::Decode(e.to_string()))?;
        into_document(body)
    }
}
