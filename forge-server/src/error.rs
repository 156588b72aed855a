//! Unified server error type.
//!
//! Every handler returns `Result<T, ServerError>`, which implements
//! [`axum::response::IntoResponse`] so errors are automatically converted
//! to a `{"message": ...}` JSON body with an appropriate status code.

use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use forge_types::{CoercionError, MessageResponse};
use thiserror::Error;
use tracing::error;

use crate::store::StoreError;

/// All errors that can occur in the forge-server request lifecycle.
#[derive(Debug, Error)]
pub enum ServerError {
    /// A required field or path segment was missing or had the wrong type.
    #[error(transparent)]
    Coercion(#[from] CoercionError),

    /// The request body was not valid JSON for the endpoint.
    #[error("invalid request body: {0}")]
    BadRequest(String),

    /// No route matches the request.
    #[error("not found: {0}")]
    NotFound(String),

    /// Propagated from the workout store.
    #[error("store error: {0}")]
    Store(#[from] StoreError),

    /// An unclassified internal server error.
    #[error("internal error: {0}")]
    Internal(String),
}

impl ServerError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            ServerError::Coercion(_) | ServerError::BadRequest(_) => StatusCode::BAD_REQUEST,
            ServerError::Store(StoreError::EmptyName) => StatusCode::BAD_REQUEST,
            ServerError::NotFound(_) => StatusCode::NOT_FOUND,
            ServerError::Store(StoreError::Poisoned | StoreError::IdsExhausted)
            | ServerError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ServerError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        if status.is_server_error() {
            error!(error = %self, "request failed");
        }
        (status, Json(MessageResponse::new(self.to_string()))).into_response()
    }
}

impl From<JsonRejection> for ServerError {
    fn from(rejection: JsonRejection) -> Self {
        ServerError::BadRequest(rejection.body_text())
    }
}
