use crate::server::error::exercise::ExerciseError;

/// Parses an exercise id from a path segment
///
/// Only the canonical decimal form is accepted, so spellings such as `+1` or `01`
/// don't alias an existing id.
///
/// # Arguments
/// - `value` - The path segment to parse
///
/// # Returns
/// - `Ok(i32)` - Successfully parsed id
/// - `Err(ExerciseError::MalformedId)` - The segment is not a valid id
pub fn parse_exercise_id(value: &str) -> Result<i32, ExerciseError> {
    let id = value
        .parse::<i32>()
        .map_err(|source| ExerciseError::MalformedId {
            value: value.to_string(),
            reason: source.to_string(),
        })?;

    if id.to_string() != value {
        return Err(ExerciseError::MalformedId {
            value: value.to_string(),
            reason: "not in canonical form".to_string(),
        });
    }

    Ok(id)
}
