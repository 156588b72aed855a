//! Axum router construction.
//!
//! [`build`] assembles the complete application router, including:
//! - Middleware layers (panic boundary, CORS, per-request trace-ID injection)
//! - Optional OpenAPI document endpoint (disable with `FORGE_ENABLE_DOCS=false`)
//! - Health / heartbeat route
//! - Workout routes under the configured prefix (default `/api`)
//! - A JSON 404 fallback

pub mod doc;
mod health;
pub mod workouts;

use std::sync::Arc;

use axum::extract::OriginalUri;
use axum::{middleware, routing::get, Json, Router};
use tower::ServiceBuilder;
use tower_http::catch_panic::CatchPanicLayer;

use crate::error::ServerError;
use crate::middleware::{cors, panic, trace};
use crate::state::AppState;

/// Build the complete Axum [`Router`] for the application.
pub fn build(state: Arc<AppState>) -> Router {
    let prefix = state.config.api_prefix.as_str();

    let mut app = Router::new().merge(health::router());

    // axum refuses to nest at the root, so an empty prefix merges instead.
    app = if prefix.is_empty() {
        app.merge(workouts::router())
    } else {
        app.nest(prefix, workouts::router())
    };

    if state.config.enable_docs {
        app = app.route(
            "/api-docs/openapi.json",
            get(|| async { Json(doc::get_docs()) }),
        );
    }

    app.fallback(fallback)
        // Outermost layers execute first on the way in.
        .layer(
            ServiceBuilder::new()
                .layer(middleware::from_fn(trace::trace_middleware))
                .layer(cors::cors_layer(state.clone()))
                .layer(CatchPanicLayer::custom(panic::handle_panic)),
        )
        .with_state(state)
}

async fn fallback(OriginalUri(uri): OriginalUri) -> ServerError {
    ServerError::NotFound(format!("no route for {}", uri.path()))
}
