use axum::Router;
use utoipa::OpenApi;
use utoipa_axum::{router::OpenApiRouter, routes};
use utoipa_swagger_ui::SwaggerUi;

use crate::server::{controller::exercise, state::AppState};

#[derive(OpenApi)]
#[openapi(
    info(title = "Exercise Tracker API", description = "Log exercises by name, reps, weight, unit and date"),
    tags((name = "exercise", description = "Exercise log entries"))
)]
struct ApiDoc;

pub fn router() -> Router<AppState> {
    let (router, api) = OpenApiRouter::with_openapi(ApiDoc::openapi())
        .routes(routes!(exercise::create_exercise, exercise::get_exercises))
        .routes(routes!(
            exercise::get_exercise_by_id,
            exercise::update_exercise_by_id,
            exercise::delete_exercise_by_id
        ))
        .split_for_parts();

    router.merge(SwaggerUi::new("/api/docs").url("/api/docs/openapi.json", api))
}
