//! Category factory for creating test category entities.

use crate::factory::helpers::next_id;
use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};
use uuid::Uuid;

/// Factory for creating test categories.
pub struct CategoryFactory<'a> {
    db: &'a DatabaseConnection,
    name: String,
    created_by: Uuid,
    deleted_by: Option<Uuid>,
}

impl<'a> CategoryFactory<'a> {
    /// Creates a new CategoryFactory with default values.
    ///
    /// Defaults:
    /// - name: `"Category {id}"`
    ///
    /// # Arguments
    /// - `db` - Database connection for inserting the entity
    /// - `created_by` - User recorded as creator
    pub fn new(db: &'a DatabaseConnection, created_by: Uuid) -> Self {
        Self {
            db,
            name: format!("Category {}", next_id()),
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

    /// Builds and inserts the category entity into the database.
    ///
    /// # Returns
    /// - `Ok(entity::category::Model)` - Created category entity
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::category::Model, DbErr> {
        let now = Utc::now();
        entity::category::ActiveModel {
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

/// Creates a category with default values.
pub async fn create_category(
    db: &DatabaseConnection,
    created_by: Uuid,
) -> Result<entity::category::Model, DbErr> {
    CategoryFactory::new(db, created_by).build().await
}
