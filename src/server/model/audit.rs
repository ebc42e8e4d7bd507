//! Audit trail and visibility types shared by every entity.

use chrono::{DateTime, Utc};
use sea_orm::DbErr;
use std::collections::HashMap;
use uuid::Uuid;

use crate::model::audit::{ActorDto, AuditDto};

/// User recorded in an audit stamp.
#[derive(Debug, Clone, PartialEq)]
pub struct Actor {
    pub id: Uuid,
    pub username: String,
}

impl Actor {
    pub fn into_dto(self) -> ActorDto {
        ActorDto {
            id: self.id,
            username: self.username,
        }
    }
}

/// When an action happened and who performed it.
#[derive(Debug, Clone, PartialEq)]
pub struct AuditStamp {
    pub at: DateTime<Utc>,
    pub by: Actor,
}

/// Raw audit columns as stored on a row, before actors are resolved.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AuditColumns {
    pub created_at: DateTime<Utc>,
    pub created_by: Uuid,
    pub updated_at: Option<DateTime<Utc>>,
    pub updated_by: Option<Uuid>,
    pub deleted_at: Option<DateTime<Utc>>,
    pub deleted_by: Option<Uuid>,
}

impl AuditColumns {
    /// Every user id referenced by these columns.
    pub fn actor_ids(&self) -> impl Iterator<Item = Uuid> {
        std::iter::once(self.created_by)
            .chain(self.updated_by)
            .chain(self.deleted_by)
    }
}

/// Ownership audit trail of a record.
///
/// Constructed only through [`AuditTrail::from_columns`], which rejects rows where a
/// timestamp is set without its actor or the other way round.
#[derive(Debug, Clone, PartialEq)]
pub struct AuditTrail {
    pub created: AuditStamp,
    pub updated: Option<AuditStamp>,
    pub deleted: Option<AuditStamp>,
}

impl AuditTrail {
    /// Resolves stored audit columns against a map of loaded actors.
    ///
    /// # Arguments
    /// - `columns` - Audit columns read from the row
    /// - `actors` - Users referenced by the columns, keyed by id
    ///
    /// # Returns
    /// - `Ok(AuditTrail)` - Columns satisfy the pairing invariant and every actor is known
    /// - `Err(DbErr::Custom)` - Half-set stamp pair or an actor missing from `actors`
    pub fn from_columns(
        columns: AuditColumns,
        actors: &HashMap<Uuid, Actor>,
    ) -> Result<Self, DbErr> {
        Ok(Self {
            created: stamp("created", Some(columns.created_at), Some(columns.created_by), actors)?
                .ok_or_else(|| DbErr::Custom("created stamp missing".to_string()))?,
            updated: stamp("updated", columns.updated_at, columns.updated_by, actors)?,
            deleted: stamp("deleted", columns.deleted_at, columns.deleted_by, actors)?,
        })
    }

    pub fn is_deleted(&self) -> bool {
        self.deleted.is_some()
    }

    pub fn into_dto(self) -> AuditDto {
        let (updated_at, updated_by) = split(self.updated);
        let (deleted_at, deleted_by) = split(self.deleted);

        AuditDto {
            created_at: self.created.at,
            created_by: self.created.by.into_dto(),
            updated_at,
            updated_by,
            deleted_at,
            deleted_by,
        }
    }
}

fn stamp(
    action: &str,
    at: Option<DateTime<Utc>>,
    by: Option<Uuid>,
    actors: &HashMap<Uuid, Actor>,
) -> Result<Option<AuditStamp>, DbErr> {
    match (at, by) {
        (None, None) => Ok(None),
        (Some(at), Some(by)) => {
            let actor = actors.get(&by).cloned().ok_or_else(|| {
                DbErr::Custom(format!("{} actor {} not found", action, by))
            })?;
            Ok(Some(AuditStamp { at, by: actor }))
        }
        _ => Err(DbErr::Custom(format!(
            "{}_at and {}_by must be set together",
            action, action
        ))),
    }
}

fn split(stamp: Option<AuditStamp>) -> (Option<DateTime<Utc>>, Option<ActorDto>) {
    match stamp {
        Some(stamp) => (Some(stamp.at), Some(stamp.by.into_dto())),
        None => (None, None),
    }
}

/// Which records a query may return.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Visibility {
    /// Only records that have not been soft-deleted.
    #[default]
    Active,
    /// Every record, deleted or not.
    All,
}

impl Visibility {
    pub fn from_show_deleted(show_deleted: bool) -> Self {
        if show_deleted {
            Self::All
        } else {
            Self::Active
        }
    }
}

/// Rules applied to mutations of soft-deleted records.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AuditPolicy {
    /// Permit PATCH on a record that has already been soft-deleted.
    pub allow_update_after_delete: bool,
}

impl AuditPolicy {
    /// Visibility used to resolve the target of an update.
    pub fn update_visibility(&self) -> Visibility {
        Visibility::from_show_deleted(self.allow_update_after_delete)
    }

    /// Visibility used to resolve the target of a delete. Deletion is terminal.
    pub fn delete_visibility(&self) -> Visibility {
        Visibility::Active
    }
}
