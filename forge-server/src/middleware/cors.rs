use std::sync::Arc;

use axum::http::HeaderValue;
use tower_http::cors::{Any, CorsLayer};

use crate::state::AppState;

pub fn cors_layer(state: Arc<AppState>) -> CorsLayer {
    let origins: Vec<HeaderValue> = state
        .config
        .cors_allowed_origins
        .as_deref()
        .map(|list| {
            list.split(',')
                .map(str::trim)
                .filter(|s| !s.is_empty())
                .filter_map(|s| s.parse().ok())
                .collect()
        })
        .unwrap_or_default();

    // Wildcard when nothing usable is configured; set FORGE_CORS_ORIGINS in production.
    let layer = CorsLayer::new().allow_headers(Any).allow_methods(Any);
    if origins.is_empty() {
        layer.allow_origin(Any)
    } else {
        layer.allow_origin(origins)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use crate::routes;
    use axum::body::Body;
    use axum::http::{header, Request, StatusCode};
    use axum::response::Response;
    use tower::ServiceExt;

    async fn get_with_origin(config: Config, origin: &str) -> Response {
        let app = routes::build(Arc::new(AppState::new(config)));
        app.oneshot(
            Request::get("/api/workouts")
                .header(header::ORIGIN, origin)
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap()
    }

    fn allow_origin(response: &Response) -> Option<&str> {
        response
            .headers()
            .get(header::ACCESS_CONTROL_ALLOW_ORIGIN)
            .and_then(|v| v.to_str().ok())
    }

    #[tokio::test]
    async fn any_origin_is_allowed_by_default() {
        let response = get_with_origin(Config::default(), "http://example.test").await;
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(allow_origin(&response), Some("*"));
    }

    #[tokio::test]
    async fn configured_origins_restrict_access() {
        let config = Config {
            cors_allowed_origins: Some("http://localhost:5173, http://app.test".into()),
            ..Config::default()
        };

        let listed = get_with_origin(config.clone(), "http://app.test").await;
        assert_eq!(allow_origin(&listed), Some("http://app.test"));

        let unlisted = get_with_origin(config, "http://evil.test").await;
        assert_eq!(allow_origin(&unlisted), None);
    }

    #[tokio::test]
    async fn blank_entries_fall_back_to_wildcard() {
        let config = Config {
            cors_allowed_origins: Some(" , ".into()),
            ..Config::default()
        };
        let response = get_with_origin(config, "http://example.test").await;
        assert_eq!(allow_origin(&response), Some("*"));
    }
}
