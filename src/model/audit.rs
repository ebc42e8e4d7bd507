use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

/// User who performed an audited action.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct ActorDto {
    pub id: Uuid,
    pub username: String,
}

/// Ownership audit trail flattened into every entity response.
///
/// `updated_*` and `deleted_*` are always both null or both present.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct AuditDto {
    pub created_at: DateTime<Utc>,
    pub created_by: ActorDto,
    pub updated_at: Option<DateTime<Utc>>,
    pub updated_by: Option<ActorDto>,
    pub deleted_at: Option<DateTime<Utc>>,
    pub deleted_by: Option<ActorDto>,
}
