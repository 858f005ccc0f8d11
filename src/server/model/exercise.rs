//! Domain models for exercise data operations.
//!
//! Defines the exercise domain model, the parameter types used to create and update
//! exercises, and the validation rules every persisted exercise satisfies.

use entity::sea_orm_active_enums::WeightUnit;
use regex::Regex;
use sea_orm::ActiveEnum;
use serde_json::Value;
use std::sync::LazyLock;

use crate::{
    model::exercise::{ExerciseDto, ExercisePayloadDto},
    server::error::exercise::ValidationError,
};

/// Two digits, dash, two digits, dash, two digits. Calendar values are not checked.
static DATE_FORMAT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[0-9]{2}-[0-9]{2}-[0-9]{2}$").expect("valid date regex"));

/// A single exercise log entry.
#[derive(Debug, Clone, PartialEq)]
pub struct Exercise {
    /// Identifier assigned by the database on creation.
    pub id: i32,
    pub name: String,
    pub reps: f64,
    pub weight: f64,
    pub unit: WeightUnit,
    /// Date in `MM-DD-YY` form.
    pub date: String,
}

impl Exercise {
    /// Converts an entity model to an exercise domain model at the repository boundary.
    pub fn from_entity(entity: entity::exercise::Model) -> Self {
        Self {
            id: entity.id,
            name: entity.name,
            reps: entity.reps,
            weight: entity.weight,
            unit: entity.unit,
            date: entity.date,
        }
    }

    /// Converts the exercise domain model to a DTO at the controller boundary.
    pub fn into_dto(self) -> ExerciseDto {
        ExerciseDto {
            id: self.id,
            name: self.name,
            reps: self.reps,
            weight: self.weight,
            unit: self.unit.to_value(),
            date: self.date,
        }
    }
}

/// Validated fields for creating an exercise.
#[derive(Debug, Clone, PartialEq)]
pub struct CreateExerciseParams {
    pub name: String,
    pub reps: f64,
    pub weight: f64,
    pub unit: WeightUnit,
    pub date: String,
}

impl CreateExerciseParams {
    /// Validates a request payload into typed parameters.
    ///
    /// # Returns
    /// - `Ok(CreateExerciseParams)` - All five fields are valid
    /// - `Err(ValidationError)` - The first field that failed validation
    pub fn from_dto(dto: ExercisePayloadDto) -> Result<Self, ValidationError> {
        validate_properties(&dto.name, &dto.reps, &dto.weight, &dto.unit, &dto.date)
    }
}

/// Fields to overwrite on an existing exercise.
///
/// Only fields set to `Some` are written; the rest keep their stored values.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct UpdateExerciseParams {
    pub name: Option<String>,
    pub reps: Option<f64>,
    pub weight: Option<f64>,
    pub unit: Option<WeightUnit>,
    pub date: Option<String>,
}

impl From<CreateExerciseParams> for UpdateExerciseParams {
    fn from(params: CreateExerciseParams) -> Self {
        Self {
            name: Some(params.name),
            reps: Some(params.reps),
            weight: Some(params.weight),
            unit: Some(params.unit),
            date: Some(params.date),
        }
    }
}

/// Returns true if the five exercise properties may be persisted.
///
/// - `name` must be a string containing a non-whitespace character
/// - `reps` and `weight` must be numbers greater than 0
/// - `unit` must be the string `"kgs"` or `"lbs"`
/// - `date` must be a string in the format `MM-DD-YY`, where each part is two digits
///
/// Handlers use `validate_properties` to get typed parameters; this is the boolean form.
#[cfg_attr(not(test), allow(dead_code))]
pub fn are_properties_valid(
    name: &Value,
    reps: &Value,
    weight: &Value,
    unit: &Value,
    date: &Value,
) -> bool {
    validate_properties(name, reps, weight, unit, date).is_ok()
}

/// Checks the five exercise properties in order, returning typed parameters when all pass.
pub fn validate_properties(
    name: &Value,
    reps: &Value,
    weight: &Value,
    unit: &Value,
    date: &Value,
) -> Result<CreateExerciseParams, ValidationError> {
    let name = match name.as_str() {
        Some(name) if !name.trim().is_empty() => name.to_string(),
        _ => return Err(ValidationError::Name),
    };

    let reps = positive_number(reps).ok_or(ValidationError::Reps)?;
    let weight = positive_number(weight).ok_or(ValidationError::Weight)?;

    let unit = unit
        .as_str()
        .and_then(|unit| WeightUnit::try_from_value(&unit.to_string()).ok())
        .ok_or(ValidationError::Unit)?;

    let date = match date.as_str() {
        Some(date) if DATE_FORMAT.is_match(date) => date.to_string(),
        _ => return Err(ValidationError::Date),
    };

    Ok(CreateExerciseParams {
        name,
        reps,
        weight,
        unit,
        date,
    })
}

fn positive_number(value: &Value) -> Option<f64> {
    value.as_f64().filter(|n| *n > 0.0)
}
