//! Social network factory.

use crate::factory::helpers::next_id;
use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};
use uuid::Uuid;

/// Factory for creating test social networks.
pub struct SocialFactory<'a> {
    db: &'a DatabaseConnection,
    name: String,
    created_by: Uuid,
    deleted_by: Option<Uuid>,
}

impl<'a> SocialFactory<'a> {
    /// Creates a new SocialFactory named `"Social {id}"`.
    pub fn new(db: &'a DatabaseConnection, created_by: Uuid) -> Self {
        Self {
            db,
            name: format!("Social {}", next_id()),
            created_by,
            deleted_by: None,
        }
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn deleted_by(mut self, actor: Uuid) -> Self {
        self.deleted_by = Some(actor);
        self
    }

    pub async fn build(self) -> Result<entity::social::Model, DbErr> {
        let now = Utc::now();
        entity::social::ActiveModel {
            id: ActiveValue::Set(Uuid::new_v4()),
            name: ActiveValue::Set(self.name),
            created_at: ActiveValue::Set(now),
            created_by: ActiveValue::Set(self.created_by),
            updated_at: ActiveValue::Set(None),
            updated_by: ActiveValue::Set(None),
            deleted_at: ActiveValue::Set(self.deleted_by.map(|_| now)),
            deleted_by: ActiveValue::Set(self.deleted_by),
        }
        .insert(self.db)
        .await
    }
}

/// Creates a social network with default values.
pub async fn create_social(
    db: &DatabaseConnection,
    created_by: Uuid,
) -> Result<entity::social::Model, DbErr> {
    SocialFactory::new(db, created_by).build().await
}
