use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use serde_json::{Map, Value};

use crate::{
    model::{
        api::ErrorDto,
        exercise::{ExerciseDto, ExercisePayloadDto},
    },
    server::{
        error::{exercise::ExerciseError, AppError},
        model::exercise::CreateExerciseParams,
        service::exercise::ExerciseService,
        state::AppState,
    },
};

/// Tag for grouping exercise endpoints in OpenAPI documentation
pub static EXERCISE_TAG: &str = "exercise";

/// Create a new exercise.
///
/// Validates all five fields of the request body before persisting.
///
/// # Arguments
/// - `state` - Application state containing the database connection
/// - `body` - Exercise fields as a JSON object, or the rejection if the body is not one
///
/// # Returns
/// - `201 Created` - The created exercise including its assigned id
/// - `400 Bad Request` - Body missing, malformed, or a field failed validation
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    post,
    path = "/exercises",
    tag = EXERCISE_TAG,
    request_body = ExercisePayloadDto,
    responses(
        (status = 201, description = "Successfully created exercise", body = ExerciseDto),
        (status = 400, description = "Invalid exercise data", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_exercise(
    State(state): State<AppState>,
    body: Result<Json<Map<String, Value>>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let Json(body) = body?;
    let params = CreateExerciseParams::from_dto(ExercisePayloadDto::from(body))?;

    let exercise = ExerciseService::new(&state.db).create(params).await?;

    Ok((StatusCode::CREATED, Json(exercise.into_dto())))
}

/// Get all exercises.
///
/// # Returns
/// - `200 OK` - Every stored exercise, possibly none
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/exercises",
    tag = EXERCISE_TAG,
    responses(
        (status = 200, description = "Successfully retrieved exercises", body = Vec<ExerciseDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_exercises(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let exercises = ExerciseService::new(&state.db).get_all().await?;

    let dto: Vec<ExerciseDto> = exercises.into_iter().map(|e| e.into_dto()).collect();

    Ok((StatusCode::OK, Json(dto)))
}

/// Get a specific exercise by ID.
///
/// # Returns
/// - `200 OK` - The exercise
/// - `404 Not Found` - No exercise with that id, or the id is malformed
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/exercises/{id}",
    tag = EXERCISE_TAG,
    params(
        ("id" = String, Path, description = "Exercise ID")
    ),
    responses(
        (status = 200, description = "Successfully retrieved exercise", body = ExerciseDto),
        (status = 404, description = "Exercise not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_exercise_by_id(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let exercise = ExerciseService::new(&state.db).get_by_id(&id).await?;

    match exercise {
        Some(exercise) => Ok((StatusCode::OK, Json(exercise.into_dto()))),
        None => Err(ExerciseError::NotFound(id).into()),
    }
}

/// Update an exercise.
///
/// The body is validated first. The update is then applied by id and the exercise is
/// read back; a missing exercise is only detected by that read.
///
/// # Returns
/// - `200 OK` - The exercise after the update
/// - `400 Bad Request` - Body missing, malformed, or a field failed validation
/// - `404 Not Found` - No exercise with that id, or the id is malformed
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    put,
    path = "/exercises/{id}",
    tag = EXERCISE_TAG,
    params(
        ("id" = String, Path, description = "Exercise ID")
    ),
    request_body = ExercisePayloadDto,
    responses(
        (status = 200, description = "Successfully updated exercise", body = ExerciseDto),
        (status = 400, description = "Invalid exercise data", body = ErrorDto),
        (status = 404, description = "Exercise not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_exercise_by_id(
    State(state): State<AppState>,
    Path(id): Path<String>,
    body: Result<Json<Map<String, Value>>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let Json(body) = body?;
    let params = CreateExerciseParams::from_dto(ExercisePayloadDto::from(body))?;

    let exercise = ExerciseService::new(&state.db)
        .update_by_id(&id, params.into())
        .await?;

    match exercise {
        Some(exercise) => Ok((StatusCode::OK, Json(exercise.into_dto()))),
        None => Err(ExerciseError::NotFound(id).into()),
    }
}

/// Delete an exercise.
///
/// # Returns
/// - `204 No Content` - Exercise deleted
/// - `404 Not Found` - No exercise with that id, or the id is malformed
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    delete,
    path = "/exercises/{id}",
    tag = EXERCISE_TAG,
    params(
        ("id" = String, Path, description = "Exercise ID")
    ),
    responses(
        (status = 204, description = "Successfully deleted exercise"),
        (status = 404, description = "Exercise not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_exercise_by_id(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let deleted = ExerciseService::new(&state.db).delete_by_id(&id).await?;

    if deleted == 0 {
        return Err(ExerciseError::NotFound(id).into());
    }

    Ok(StatusCode::NO_CONTENT)
}
