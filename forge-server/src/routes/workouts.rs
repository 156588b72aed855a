use std::sync::Arc;

use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::routing::{delete, get};
use axum::{Json, Router};
use forge_types::{
    parse_integer, CreateWorkoutRequest, DurationInput, MessageResponse, WorkoutRecord,
    ALL_WORKOUTS_CLEARED, WORKOUT_ENDED,
};
use tracing::info;
use utoipa::OpenApi;

use crate::error::ServerError;
use crate::state::AppState;
use crate::store::WorkoutStore;

#[derive(OpenApi)]
#[openapi(
    paths(list_workouts, create_workout, end_workout, clear_workouts),
    components(schemas(WorkoutRecord, CreateWorkoutRequest, DurationInput, MessageResponse))
)]
pub struct WorkoutApi;

/// Register workout routes.
pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route(
            "/workouts",
            get(list_workouts).post(create_workout).delete(clear_workouts),
        )
        .route("/workouts/{id}", delete(end_workout))
}

// ── Workout handlers ──────────────────────────────────────────────────────────

#[utoipa::path(
    get,
    path = "/api/workouts",
    tag = "workouts",
    responses(
        (status = 200, description = "All workouts, newest first", body = Vec<WorkoutRecord>),
        (status = 500, description = "Store error", body = MessageResponse),
    )
)]
pub async fn list_workouts(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Vec<WorkoutRecord>>, ServerError> {
    Ok(Json(state.store.list_all()?))
}

#[utoipa::path(
    post,
    path = "/api/workouts",
    tag = "workouts",
    request_body = CreateWorkoutRequest,
    responses(
        (status = 201, description = "Workout logged", body = WorkoutRecord),
        (status = 400, description = "Missing or non-coercible field", body = MessageResponse),
        (status = 500, description = "Store error", body = MessageResponse),
    )
)]
pub async fn create_workout(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<CreateWorkoutRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<WorkoutRecord>), ServerError> {
    let Json(req) = payload?;
    let new = req.validate()?;
    let record = state.store.add(new.name, new.duration)?;
    info!(
        id = record.id,
        name = %record.name,
        duration = record.duration,
        "workout logged"
    );
    Ok((StatusCode::CREATED, Json(record)))
}

#[utoipa::path(
    delete,
    path = "/api/workouts/{id}",
    tag = "workouts",
    params(("id" = i64, Path, description = "Workout id")),
    responses(
        (status = 200, description = "Workout ended (also when no such id exists)", body = MessageResponse),
        (status = 400, description = "Id is not an integer", body = MessageResponse),
        (status = 500, description = "Store error", body = MessageResponse),
    )
)]
pub async fn end_workout(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<Json<MessageResponse>, ServerError> {
    let id = parse_integer("id", &id)?;
    let existed = state.store.remove_by_id(id)?;
    info!(id, existed, "workout ended");
    Ok(Json(MessageResponse::new(WORKOUT_ENDED)))
}

#[utoipa::path(
    delete,
    path = "/api/workouts",
    tag = "workouts",
    responses(
        (status = 200, description = "All workouts cleared", body = MessageResponse),
        (status = 500, description = "Store error", body = MessageResponse),
    )
)]
pub async fn clear_workouts(
    State(state): State<Arc<AppState>>,
) -> Result<Json<MessageResponse>, ServerError> {
    state.store.clear()?;
    info!("all workouts cleared");
    Ok(Json(MessageResponse::new(ALL_WORKOUTS_CLEARED)))
}

// ── Tests ──────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use crate::routes::build;
    use axum::body::Body;
    use axum::http::{header, Method, Request};
    use axum::response::Response;
    use http_body_util::BodyExt;
    use serde::de::DeserializeOwned;
    use serde_json::{json, Value};
    use tower::ServiceExt;
    use tracing_test::traced_test;

    fn app() -> (Router, Arc<AppState>) {
        let state = Arc::new(AppState::new(Config {
            seed_sample: false,
            ..Config::default()
        }));
        (build(state.clone()), state)
    }

    async fn send(app: &Router, method: Method, uri: &str, body: Option<Value>) -> Response {
        let builder = Request::builder().method(method).uri(uri);
        let request = match body {
            Some(json) => builder
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(json.to_string()))
                .unwrap(),
            None => builder.body(Body::empty()).unwrap(),
        };
        app.clone().oneshot(request).await.unwrap()
    }

    async fn json_body<T: DeserializeOwned>(response: Response) -> T {
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        serde_json::from_slice(&bytes).unwrap()
    }

    async fn create(app: &Router, name: &str, duration: Value) -> WorkoutRecord {
        let response = send(
            app,
            Method::POST,
            "/api/workouts",
            Some(json!({ "name": name, "duration": duration })),
        )
        .await;
        assert_eq!(response.status(), StatusCode::CREATED);
        json_body(response).await
    }

    #[tokio::test]
    async fn post_then_get_returns_created_record_first() {
        let (app, _) = app();
        let created = create(&app, "Pushups", json!("10")).await;
        assert_eq!(created.name, "Pushups");
        assert_eq!(created.duration, 10);

        let response = send(&app, Method::GET, "/api/workouts", None).await;
        assert_eq!(response.status(), StatusCode::OK);
        let listed: Vec<WorkoutRecord> = json_body(response).await;
        assert_eq!(listed.first(), Some(&created));
    }

    #[tokio::test]
    async fn two_immediate_posts_get_distinct_ids_newest_first() {
        let (app, _) = app();
        let first = create(&app, "Squats", json!(20)).await;
        let second = create(&app, "Lunges", json!(15)).await;
        assert_ne!(first.id, second.id);

        let listed: Vec<WorkoutRecord> =
            json_body(send(&app, Method::GET, "/api/workouts", None).await).await;
        assert_eq!(listed, vec![second, first]);
    }

    #[tokio::test]
    async fn deleting_unknown_id_is_a_successful_noop() {
        let (app, state) = app();
        create(&app, "Row", json!(30)).await;

        let response = send(&app, Method::DELETE, "/api/workouts/999999", None).await;
        assert_eq!(response.status(), StatusCode::OK);
        let body: MessageResponse = json_body(response).await;
        assert_eq!(body.message, "Workout ended");
        assert_eq!(state.store.len().unwrap(), 1);
    }

    #[tokio::test]
    async fn delete_twice_is_idempotent() {
        let (app, state) = app();
        let keep = create(&app, "Bike", json!(40)).await;
        let gone = create(&app, "Swim", json!(25)).await;
        let uri = format!("/api/workouts/{}", gone.id);

        let first = send(&app, Method::DELETE, &uri, None).await;
        assert_eq!(first.status(), StatusCode::OK);
        let after_first = state.store.list_all().unwrap();

        let second = send(&app, Method::DELETE, &uri, None).await;
        assert_eq!(second.status(), StatusCode::OK);
        assert_eq!(state.store.list_all().unwrap(), after_first);
        assert_eq!(after_first, vec![keep]);
    }

    #[tokio::test]
    async fn clear_all_empties_the_list() {
        let (app, _) = app();
        create(&app, "Plank", json!(3)).await;
        create(&app, "Burpees", json!(8)).await;

        let response = send(&app, Method::DELETE, "/api/workouts", None).await;
        assert_eq!(response.status(), StatusCode::OK);
        let body: MessageResponse = json_body(response).await;
        assert_eq!(body.message, "All workouts cleared");

        let listed: Vec<WorkoutRecord> =
            json_body(send(&app, Method::GET, "/api/workouts", None).await).await;
        assert!(listed.is_empty());
    }

    #[tokio::test]
    async fn non_numeric_duration_is_rejected_before_the_store() {
        let (app, state) = app();
        let response = send(
            &app,
            Method::POST,
            "/api/workouts",
            Some(json!({ "name": "Run", "duration": "ten" })),
        )
        .await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let body: MessageResponse = json_body(response).await;
        assert!(body.message.contains("duration"));
        assert!(state.store.is_empty().unwrap());
    }

    #[tokio::test]
    async fn missing_name_is_rejected() {
        let (app, state) = app();
        let response = send(
            &app,
            Method::POST,
            "/api/workouts",
            Some(json!({ "duration": 5 })),
        )
        .await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let body: MessageResponse = json_body(response).await;
        assert_eq!(body.message, "missing required field `name`");
        assert!(state.store.is_empty().unwrap());
    }

    #[tokio::test]
    async fn malformed_json_gets_a_json_error_body() {
        let (app, _) = app();
        let request = Request::post("/api/workouts")
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from("{not json"))
            .unwrap();
        let response = app.clone().oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let body: MessageResponse = json_body(response).await;
        assert!(body.message.starts_with("invalid request body"));
    }

    #[tokio::test]
    async fn non_numeric_id_is_rejected() {
        let (app, state) = app();
        create(&app, "Yoga", json!(60)).await;

        let response = send(&app, Method::DELETE, "/api/workouts/abc", None).await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let body: MessageResponse = json_body(response).await;
        assert!(body.message.contains("`id`"));
        assert_eq!(state.store.len().unwrap(), 1);
    }

    #[tokio::test]
    async fn unknown_route_is_json_404() {
        let (app, _) = app();
        let response = send(&app, Method::GET, "/api/nope", None).await;
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        let body: MessageResponse = json_body(response).await;
        assert_eq!(body.message, "not found: no route for /api/nope");
    }

    #[tokio::test]
    async fn prefix_is_configurable() {
        let state = Arc::new(AppState::new(Config {
            api_prefix: String::new(),
            seed_sample: false,
            ..Config::default()
        }));
        let app = build(state);
        let response = send(&app, Method::GET, "/workouts", None).await;
        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn seeded_server_lists_sample_record() {
        let app = build(Arc::new(AppState::new(Config::default())));
        let listed: Vec<WorkoutRecord> =
            json_body(send(&app, Method::GET, "/api/workouts", None).await).await;
        assert_eq!(
            listed,
            vec![WorkoutRecord {
                id: 1,
                name: "Pushups".into(),
                duration: 10
            }]
        );
    }

    #[tokio::test]
    async fn openapi_document_lists_workout_paths() {
        let (app, _) = app();
        let response = send(&app, Method::GET, "/api-docs/openapi.json", None).await;
        assert_eq!(response.status(), StatusCode::OK);
        let doc: Value = json_body(response).await;
        assert!(doc["paths"]["/api/workouts"].is_object());
        assert!(doc["paths"]["/api/workouts/{id}"].is_object());
    }

    #[tokio::test]
    #[traced_test]
    async fn creation_is_logged_with_the_new_id() {
        let (app, _) = app();
        let created = create(&app, "Deadlift", json!(45)).await;
        assert!(logs_contain("workout logged"));
        assert!(logs_contain(&format!("id={}", created.id)));
    }
}
