use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

/// Error body carrying a single human readable message.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ErrorDto {
    pub detail: String,
}

/// Error body for rejected request input, one `"field: reason"` entry per problem.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ValidationErrorDto {
    pub message: Vec<String>,
}

/// Compact reference to a related record, embedded in parent responses.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct ReferenceDto {
    pub id: Uuid,
    pub name: String,
}
