//! Brand social factory linking a brand to a social network.

use crate::factory::helpers::next_id;
use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};
use uuid::Uuid;

/// Factory for creating brand social links.
pub struct BrandSocialFactory<'a> {
    db: &'a DatabaseConnection,
    brand_id: Uuid,
    social_id: Uuid,
    address: String,
    created_by: Uuid,
    deleted_by: Option<Uuid>,
}

impl<'a> BrandSocialFactory<'a> {
    /// Creates a new BrandSocialFactory with address `"https://social.example/{id}"`.
    pub fn new(db: &'a DatabaseConnection, brand_id: Uuid, social_id: Uuid, created_by: Uuid) -> Self {
        Self {
            db,
            brand_id,
            social_id,
            address: format!("https://social.example/{}", next_id()),
            created_by,
            deleted_by: None,
        }
    }

    pub fn address(mut self, address: impl Into<String>) -> Self {
        self.address = address.into();
        self
    }

    pub fn deleted_by(mut self, actor: Uuid) -> Self {
        self.deleted_by = Some(actor);
        self
    }

    pub async fn build(self) -> Result<entity::brand_social::Model, DbErr> {
        let now = Utc::now();
        entity::brand_social::ActiveModel {
            id: ActiveValue::Set(Uuid::new_v4()),
            brand_id: ActiveValue::Set(self.brand_id),
            social_id: ActiveValue::Set(self.social_id),
            address: ActiveValue::Set(self.address),
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

/// Creates a brand social link with default values.
pub async fn create_brand_social(
    db: &DatabaseConnection,
    brand_id: Uuid,
    social_id: Uuid,
    created_by: Uuid,
) -> Result<entity::brand_social::Model, DbErr> {
    BrandSocialFactory::new(db, brand_id, social_id, created_by)
        .build()
        .await
}
