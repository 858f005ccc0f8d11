use axum::{
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::model::api::ErrorDto;

/// Message returned for missing records and malformed ids.
pub const NOT_FOUND_MESSAGE: &str = "Not found";

/// Message returned for any request body that fails validation.
pub const INVALID_REQUEST_MESSAGE: &str = "Invalid request";

/// Field that failed exercise validation.
///
/// Only the first failing field is reported.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationError {
    #[error("name must be a non-empty string")]
    Name,
    #[error("reps must be a number greater than 0")]
    Reps,
    #[error("weight must be a number greater than 0")]
    Weight,
    #[error("unit must be either \"kgs\" or \"lbs\"")]
    Unit,
    #[error("date must be in the format MM-DD-YY")]
    Date,
}

/// Errors raised while handling exercise requests.
///
/// Every variant maps to one of the two fixed client messages; the variant itself is
/// only visible in server logs.
#[derive(Error, Debug)]
pub enum ExerciseError {
    /// Request body parsed but one of its fields is invalid.
    ///
    /// Results in 400 Bad Request.
    #[error("Invalid exercise: {0}")]
    Invalid(#[from] ValidationError),

    /// Request body could not be read as a JSON object.
    ///
    /// Results in 400 Bad Request.
    #[error("Invalid exercise body: {0}")]
    InvalidBody(#[from] JsonRejection),

    /// No exercise exists with the given id.
    ///
    /// Results in 404 Not Found.
    #[error("Exercise with id {0} not found")]
    NotFound(String),

    /// The id in the path is not a valid exercise id.
    ///
    /// Results in 404 Not Found, the same as a missing record.
    #[error("Failed to parse exercise id from '{value}': {reason}")]
    MalformedId {
        /// The path segment that failed to parse
        value: String,
        /// Why the segment was rejected
        reason: String,
    },
}

/// Converts exercise errors into HTTP responses.
///
/// - `Invalid` / `InvalidBody` → 400 Bad Request with "Invalid request"
/// - `NotFound` / `MalformedId` → 404 Not Found with "Not found"
impl IntoResponse for ExerciseError {
    fn into_response(self) -> Response {
        tracing::debug!("{}", self);

        let (status, message) = match self {
            Self::Invalid(_) | Self::InvalidBody(_) => {
                (StatusCode::BAD_REQUEST, INVALID_REQUEST_MESSAGE)
            }
            Self::NotFound(_) | Self::MalformedId { .. } => {
                (StatusCode::NOT_FOUND, NOT_FOUND_MESSAGE)
            }
        };

        (
            status,
            Json(ErrorDto {
                error: message.to_string(),
            }),
        )
            .into_response()
    }
}
