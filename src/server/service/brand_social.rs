use sea_orm::{DatabaseConnection, DatabaseTransaction, TransactionTrait};
use uuid::Uuid;

use crate::{
    model::query::BrandSocialOrderBy,
    server::{
        data::{
            brand::BrandRepository, brand_social::BrandSocialRepository,
            social::SocialRepository,
        },
        error::AppError,
        model::{
            audit::{AuditPolicy, Visibility},
            brand_social::{BrandSocial, CreateBrandSocialParams, UpdateBrandSocialParams},
            lookup::{BrandLookup, BrandSocialLookup, SocialLookup},
            params::ListParams,
        },
    },
};

const ADDRESS_TAKEN: &str = "Brand social with this address already exists";
const BRAND_NOT_FOUND: &str = "Brand not found";
const LINK_NOT_FOUND: &str = "Social network not found";
const SOCIAL_MISSING: &str = "Social must exist";

/// Manages the social network links of a brand.
///
/// Every operation is scoped to a brand; a link that exists but belongs to another brand is
/// reported as not found.
pub struct BrandSocialService<'a> {
    db: &'a DatabaseConnection,
    policy: AuditPolicy,
}

impl<'a> BrandSocialService<'a> {
    pub fn new(db: &'a DatabaseConnection, policy: AuditPolicy) -> Self {
        Self { db, policy }
    }

    pub async fn create(
        &self,
        params: CreateBrandSocialParams,
        actor: Uuid,
    ) -> Result<BrandSocial, AppError> {
        let txn = self.db.begin().await?;

        ensure_brand(&txn, params.brand_id, Visibility::Active).await?;
        ensure_social(&txn, params.social_id).await?;
        ensure_address_free(&txn, None, &params.address).await?;

        let link = BrandSocialRepository::new(&txn)
            .create(params, actor)
            .await
            .map_err(|e| AppError::from_unique_violation(e, ADDRESS_TAKEN))?;

        txn.commit().await?;

        tracing::info!(
            "Social link {} added to brand {} by {}",
            link.id,
            link.brand.id,
            actor
        );

        Ok(link)
    }

    /// Lists the links of a brand; the brand itself must be visible under the same filter.
    pub async fn list(
        &self,
        brand_id: Uuid,
        params: &ListParams<BrandSocialOrderBy>,
    ) -> Result<Vec<BrandSocial>, AppError> {
        BrandRepository::new(self.db)
            .find_id(BrandLookup::ById(brand_id), params.visibility)
            .await?
            .ok_or_else(|| AppError::NotFound(BRAND_NOT_FOUND.to_string()))?;

        Ok(BrandSocialRepository::new(self.db)
            .list_by_brand(brand_id, params)
            .await?)
    }

    pub async fn get(
        &self,
        brand_id: Uuid,
        id: Uuid,
        visibility: Visibility,
    ) -> Result<BrandSocial, AppError> {
        BrandRepository::new(self.db)
            .find_id(BrandLookup::ById(brand_id), visibility)
            .await?
            .ok_or_else(|| AppError::NotFound(BRAND_NOT_FOUND.to_string()))?;

        BrandSocialRepository::new(self.db)
            .find(BrandSocialLookup::ById(id), visibility)
            .await?
            .filter(|link| link.brand.id == brand_id)
            .ok_or_else(|| AppError::NotFound(LINK_NOT_FOUND.to_string()))
    }

    /// Changes the address or the social network of a link.
    pub async fn update(
        &self,
        params: UpdateBrandSocialParams,
        actor: Uuid,
    ) -> Result<BrandSocial, AppError> {
        let txn = self.db.begin().await?;
        let visibility = self.policy.update_visibility();

        ensure_brand(&txn, params.brand_id, visibility).await?;
        ensure_link(&txn, params.brand_id, params.id, visibility).await?;
        if let Some(social_id) = params.social_id {
            ensure_social(&txn, social_id).await?;
        }
        if let Some(address) = &params.address {
            ensure_address_free(&txn, Some(params.id), address).await?;
        }

        let link = BrandSocialRepository::new(&txn)
            .update(params, actor)
            .await
            .map_err(|e| AppError::from_unique_violation(e, ADDRESS_TAKEN))?;

        txn.commit().await?;

        tracing::info!("Social link {} updated by {}", link.id, actor);

        Ok(link)
    }

    pub async fn delete(
        &self,
        brand_id: Uuid,
        id: Uuid,
        actor: Uuid,
    ) -> Result<BrandSocial, AppError> {
        let txn = self.db.begin().await?;
        let visibility = self.policy.delete_visibility();

        ensure_brand(&txn, brand_id, visibility).await?;
        ensure_link(&txn, brand_id, id, visibility).await?;

        let link = BrandSocialRepository::new(&txn)
            .soft_delete(id, actor)
            .await?;

        txn.commit().await?;

        tracing::info!("Social link {} deleted by {}", id, actor);

        Ok(link)
    }
}

async fn ensure_brand(
    txn: &DatabaseTransaction,
    brand_id: Uuid,
    visibility: Visibility,
) -> Result<(), AppError> {
    BrandRepository::new(txn)
        .find_id(BrandLookup::ById(brand_id), visibility)
        .await?
        .map(|_| ())
        .ok_or_else(|| AppError::NotFound(BRAND_NOT_FOUND.to_string()))
}

async fn ensure_link(
    txn: &DatabaseTransaction,
    brand_id: Uuid,
    id: Uuid,
    visibility: Visibility,
) -> Result<(), AppError> {
    BrandSocialRepository::new(txn)
        .find(BrandSocialLookup::ById(id), visibility)
        .await?
        .filter(|link| link.brand.id == brand_id)
        .map(|_| ())
        .ok_or_else(|| AppError::NotFound(LINK_NOT_FOUND.to_string()))
}

async fn ensure_social(txn: &DatabaseTransaction, social_id: Uuid) -> Result<(), AppError> {
    SocialRepository::new(txn)
        .find_id(SocialLookup::ById(social_id), Visibility::Active)
        .await?
        .map(|_| ())
        .ok_or_else(|| AppError::NotFound(SOCIAL_MISSING.to_string()))
}

async fn ensure_address_free(
    txn: &DatabaseTransaction,
    current: Option<Uuid>,
    address: &str,
) -> Result<(), AppError> {
    let holder = BrandSocialRepository::new(txn)
        .find_id(
            BrandSocialLookup::ByAddress(address.to_string()),
            Visibility::Active,
        )
        .await?;

    match holder {
        Some(id) if Some(id) != current => Err(AppError::Conflict(ADDRESS_TAKEN.to_string())),
        _ => Ok(()),
    }
}
