use utoipa::OpenApi;

use crate::routes::health;
use crate::routes::workouts::WorkoutApi;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "forge-server",
        description = "In-memory workout log API. Paths assume the default `/api` prefix."
    ),
    paths(health::get_health)
)]
pub struct ApiDoc;

pub fn get_docs() -> utoipa::openapi::OpenApi {
    let mut root = ApiDoc::openapi();
    root.merge(WorkoutApi::openapi());
    root
}
