//! Brand factory for creating test brand entities.

use crate::factory::helpers::next_id;
use chrono::Utc;
use entity::sea_orm_active_enums::AveragePrice;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};
use uuid::Uuid;

/// Factory for creating test brands.
///
/// # Example
///
/// ```rust,ignore
/// let brand = BrandFactory::new(&db, category.id, user.id)
///     .name("Acme")
///     .website("acme.example")
///     .build()
///     .await?;
/// ```
pub struct BrandFactory<'a> {
    db: &'a DatabaseConnection,
    name: String,
    website: Option<String>,
    category_id: Uuid,
    average_price: Option<AveragePrice>,
    created_by: Uuid,
    deleted_by: Option<Uuid>,
}

impl<'a> BrandFactory<'a> {
    /// Creates a new BrandFactory with default values.
    ///
    /// Defaults:
    /// - name: `"Brand {id}"`
    /// - website: `None`
    /// - average_price: `None`
    ///
    /// # Arguments
    /// - `db` - Database connection for inserting the entity
    /// - `category_id` - Category the brand belongs to
    /// - `created_by` - User recorded as creator
    pub fn new(db: &'a DatabaseConnection, category_id: Uuid, created_by: Uuid) -> Self {
        Self {
            db,
            name: format!("Brand {}", next_id()),
            website: None,
            category_id,
            average_price: None,
            created_by,
            deleted_by: None,
        }
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn website(mut self, website: impl Into<String>) -> Self {
        self.website = Some(website.into());
        self
    }

    pub fn average_price(mut self, average_price: AveragePrice) -> Self {
        self.average_price = Some(average_price);
        self
    }

    pub fn deleted_by(mut self, actor: Uuid) -> Self {
        self.deleted_by = Some(actor);
        self
    }

    /// Builds and inserts the brand entity into the database.
    ///
    /// # Returns
    /// - `Ok(entity::brand::Model)` - Created brand entity
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::brand::Model, DbErr> {
        let now = Utc::now();
        entity::brand::ActiveModel {
            id: ActiveValue::Set(Uuid::new_v4()),
            name: ActiveValue::Set(self.name),
            website: ActiveValue::Set(self.website),
            category_id: ActiveValue::Set(self.category_id),
            description: ActiveValue::Set(None),
            average_price: ActiveValue::Set(self.average_price),
            line_address_1: ActiveValue::Set(None),
            line_address_2: ActiveValue::Set(None),
            city: ActiveValue::Set(None),
            postal_code: ActiveValue::Set(None),
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

/// Creates a brand with default values in the given category.
pub async fn create_brand(
    db: &DatabaseConnection,
    category_id: Uuid,
    created_by: Uuid,
) -> Result<entity::brand::Model, DbErr> {
    BrandFactory::new(db, category_id, created_by).build().await
}
