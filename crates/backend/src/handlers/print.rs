//! Local print endpoints
//!
//! Each endpoint turns `{id, copies}` into a `generateDocument` call and
//! answers `{url}` with the rendered document, or an error status with
//! `{message}`.

use std::sync::Arc;

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use contracts::shared::document::{DocumentResult, PrintRequest, PrintResponse, PrintTarget};
use thiserror::Error;

use crate::shared::document_generator::{DocumentGenerator, GeneratorError};
use crate::system::auth::BearerToken;

#[derive(Clone)]
pub struct PrintState {
    pub generator: Arc<dyn DocumentGenerator>,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum PrintError {
    #[error("missing or malformed bearer token")]
    Unauthorized,

    #[error("{0}")]
    InvalidRequest(String),

    #[error("template not found: {0}")]
    TemplateDoesNotExist(String),

    #[error("template error: {0}")]
    TemplateError(String),

    #[error("missing template context: {0}")]
    MissingContext(String),

    #[error("{0}")]
    Upstream(String),
}

impl PrintError {
    pub fn status(&self) -> StatusCode {
        match self {
            PrintError::Unauthorized => StatusCode::UNAUTHORIZED,
            PrintError::InvalidRequest(_) => StatusCode::BAD_REQUEST,
            PrintError::TemplateDoesNotExist(_) => StatusCode::NOT_FOUND,
            PrintError::TemplateError(_) | PrintError::MissingContext(_) => {
                StatusCode::UNPROCESSABLE_ENTITY
            }
            PrintError::Upstream(_) => StatusCode::BAD_GATEWAY,
        }
    }
}

impl From<GeneratorError> for PrintError {
    fn from(err: GeneratorError) -> Self {
        match err {
            GeneratorError::Unauthenticated => PrintError::Unauthorized,
            other => PrintError::Upstream(other.to_string()),
        }
    }
}

impl IntoResponse for PrintError {
    fn into_response(self) -> Response {
        let status = self.status();
        let body = PrintResponse {
            url: None,
            message: Some(self.to_string()),
        };
        (status, Json(body)).into_response()
    }
}

fn validate(request: &PrintRequest) -> Result<(), PrintError> {
    if request.id.trim().is_empty() {
        return Err(PrintError::InvalidRequest("id must not be empty".to_string()));
    }
    if request.copies == 0 {
        return Err(PrintError::InvalidRequest("copies must be at least 1".to_string()));
    }
    Ok(())
}

pub async fn print_document(
    target: PrintTarget,
    State(state): State<PrintState>,
    BearerToken(token): BearerToken,
    Json(request): Json<PrintRequest>,
) -> Result<Json<PrintResponse>, PrintError> {
    validate(&request)?;

    let result = state
        .generator
        .generate(&token, target.variables(&request))
        .await
        .map_err(|e| {
            tracing::error!("{:?} for {}: {}", target, request.id, e);
            PrintError::from(e)
        })?;

    match result {
        DocumentResult::RenderedDocument { url } => {
            tracing::info!("{:?} for {} rendered", target, request.id);
            Ok(Json(PrintResponse {
                url: Some(url),
                message: None,
            }))
        }
        DocumentResult::TemplateDoesNotExist { message } => {
            Err(PrintError::TemplateDoesNotExist(message))
        }
        DocumentResult::TemplateError { message } => Err(PrintError::TemplateError(message)),
        DocumentResult::MissingContext { message } => Err(PrintError::MissingContext(message)),
    }
}
