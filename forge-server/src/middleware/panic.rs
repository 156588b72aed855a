use std::any::Any;

use axum::response::{IntoResponse, Response};
use tracing::error;

use crate::error::ServerError;

/// Turn a handler panic into `500 {"message": ...}` so the server keeps serving.
///
/// Used with [`tower_http::catch_panic::CatchPanicLayer::custom`].
pub fn handle_panic(err: Box<dyn Any + Send + 'static>) -> Response {
    let detail = if let Some(s) = err.downcast_ref::<String>() {
        s.clone()
    } else if let Some(s) = err.downcast_ref::<&str>() {
        (*s).to_owned()
    } else {
        "unknown panic".to_owned()
    };
    error!(panic = %detail, "handler panicked");
    ServerError::Internal(detail).into_response()
}
