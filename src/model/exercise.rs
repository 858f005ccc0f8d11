use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use utoipa::ToSchema;

/// Request body for creating or replacing an exercise.
///
/// Fields are kept as raw JSON values so that a value of the wrong type is reported
/// as an invalid request by validation rather than rejected during extraction.
/// Missing fields deserialize as `null`. Handlers extract the body as a JSON object and
/// convert it with `From<Map<String, Value>>`, so array bodies never reach this type.
#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, Default, ToSchema)]
pub struct ExercisePayloadDto {
    #[serde(default)]
    #[schema(value_type = String, example = "Squat")]
    pub name: Value,
    #[serde(default)]
    #[schema(value_type = f64, example = 5)]
    pub reps: Value,
    #[serde(default)]
    #[schema(value_type = f64, example = 100)]
    pub weight: Value,
    #[serde(default)]
    #[schema(value_type = String, example = "lbs")]
    pub unit: Value,
    #[serde(default)]
    #[schema(value_type = String, example = "04-12-23")]
    pub date: Value,
}

impl From<Map<String, Value>> for ExercisePayloadDto {
    fn from(mut body: Map<String, Value>) -> Self {
        let mut take = |key: &str| body.remove(key).unwrap_or(Value::Null);

        Self {
            name: take("name"),
            reps: take("reps"),
            weight: take("weight"),
            unit: take("unit"),
            date: take("date"),
        }
    }
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct ExerciseDto {
    pub id: i32,
    pub name: String,
    #[serde(serialize_with = "serialize_number")]
    pub reps: f64,
    #[serde(serialize_with = "serialize_number")]
    pub weight: f64,
    #[schema(example = "lbs")]
    pub unit: String,
    #[schema(example = "04-12-23")]
    pub date: String,
}

/// Writes whole numbers as JSON integers so `10` reads back as `10` rather than `10.0`.
fn serialize_number<S>(value: &f64, serializer: S) -> Result<S::Ok, S::Error>
where
    S: serde::Serializer,
{
    if value.fract() == 0.0 && value.abs() < i64::MAX as f64 {
        serializer.serialize_i64(*value as i64)
    } else {
        serializer.serialize_f64(*value)
    }
}
