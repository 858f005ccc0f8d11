use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Error body returned for every failed request, serialized as `{"Error": "..."}`.
#[derive(Serialize, Deserialize, ToSchema, Debug, PartialEq)]
pub struct ErrorDto {
    #[serde(rename = "Error")]
    pub error: String,
}
