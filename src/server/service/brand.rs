use sea_orm::{DatabaseConnection, DatabaseTransaction, DbErr, SqlErr, TransactionTrait};
use uuid::Uuid;

use crate::server::{
    data::{brand::BrandRepository, category::CategoryRepository},
    error::AppError,
    model::{
        audit::{AuditPolicy, Visibility},
        brand::{Brand, CreateBrandParams, UpdateBrandParams},
        lookup::{BrandLookup, CategoryLookup},
        params::BrandListParams,
    },
};

const NAME_TAKEN: &str = "Brand with this name already exists";
const WEBSITE_TAKEN: &str = "Brand with this website already exists";
const NOT_FOUND: &str = "Brand not found";
const CATEGORY_MISSING: &str = "Category must exist";

pub struct BrandService<'a> {
    db: &'a DatabaseConnection,
    policy: AuditPolicy,
}

impl<'a> BrandService<'a> {
    pub fn new(db: &'a DatabaseConnection, policy: AuditPolicy) -> Self {
        Self { db, policy }
    }

    /// Creates a brand in an active category.
    ///
    /// # Returns
    /// - `Ok(Brand)` - Created brand with its category resolved
    /// - `Err(AppError::Conflict)` - Name or website held by an active brand
    /// - `Err(AppError::NotFound)` - Category missing or deleted
    pub async fn create(&self, params: CreateBrandParams, actor: Uuid) -> Result<Brand, AppError> {
        let txn = self.db.begin().await?;

        ensure_unique(&txn, None, Some(&params.name), params.website.as_deref()).await?;
        ensure_category(&txn, params.category_id).await?;

        let brand = BrandRepository::new(&txn)
            .create(params, actor)
            .await
            .map_err(unique_violation)?;

        txn.commit().await?;

        tracing::info!("Brand {} created by {}", brand.id, actor);

        Ok(brand)
    }

    pub async fn list(&self, params: &BrandListParams) -> Result<Vec<Brand>, AppError> {
        Ok(BrandRepository::new(self.db).list(params).await?)
    }

    pub async fn get(&self, id: Uuid, visibility: Visibility) -> Result<Brand, AppError> {
        BrandRepository::new(self.db)
            .find(BrandLookup::ById(id), visibility)
            .await?
            .ok_or_else(|| AppError::NotFound(NOT_FOUND.to_string()))
    }

    /// Applies a partial update to a brand.
    ///
    /// A new `category_id` is resolved again against active categories even if the brand's
    /// current category was valid when it was created.
    pub async fn update(&self, params: UpdateBrandParams, actor: Uuid) -> Result<Brand, AppError> {
        let txn = self.db.begin().await?;
        let repo = BrandRepository::new(&txn);

        repo.find_id(BrandLookup::ById(params.id), self.policy.update_visibility())
            .await?
            .ok_or_else(|| AppError::NotFound(NOT_FOUND.to_string()))?;

        ensure_unique(
            &txn,
            Some(params.id),
            params.name.as_deref(),
            params.website.as_deref(),
        )
        .await?;
        if let Some(category_id) = params.category_id {
            ensure_category(&txn, category_id).await?;
        }

        let brand = repo
            .update(params, actor)
            .await
            .map_err(unique_violation)?;

        txn.commit().await?;

        tracing::info!("Brand {} updated by {}", brand.id, actor);

        Ok(brand)
    }

    /// Soft-deletes an active brand. Its social links are left untouched.
    pub async fn delete(&self, id: Uuid, actor: Uuid) -> Result<Brand, AppError> {
        let txn = self.db.begin().await?;
        let repo = BrandRepository::new(&txn);

        repo.find_id(BrandLookup::ById(id), self.policy.delete_visibility())
            .await?
            .ok_or_else(|| AppError::NotFound(NOT_FOUND.to_string()))?;

        let brand = repo.soft_delete(id, actor).await?;

        txn.commit().await?;

        tracing::info!("Brand {} deleted by {}", id, actor);

        Ok(brand)
    }
}

/// Rejects a name or website already held by another active brand.
async fn ensure_unique(
    txn: &DatabaseTransaction,
    current: Option<Uuid>,
    name: Option<&str>,
    website: Option<&str>,
) -> Result<(), AppError> {
    let repo = BrandRepository::new(txn);
    let held_by_other = |holder: Option<Uuid>| holder.is_some_and(|id| Some(id) != current);

    if let Some(name) = name {
        let holder = repo
            .find_id(BrandLookup::ByName(name.to_string()), Visibility::Active)
            .await?;
        if held_by_other(holder) {
            return Err(AppError::Conflict(NAME_TAKEN.to_string()));
        }
    }

    if let Some(website) = website {
        let holder = repo
            .find_id(BrandLookup::ByWebsite(website.to_string()), Visibility::Active)
            .await?;
        if held_by_other(holder) {
            return Err(AppError::Conflict(WEBSITE_TAKEN.to_string()));
        }
    }

    Ok(())
}

async fn ensure_category(txn: &DatabaseTransaction, category_id: Uuid) -> Result<(), AppError> {
    CategoryRepository::new(txn)
        .find_id(CategoryLookup::ById(category_id), Visibility::Active)
        .await?
        .map(|_| ())
        .ok_or_else(|| AppError::NotFound(CATEGORY_MISSING.to_string()))
}

/// Picks the conflict message from the index the store reports.
pub(crate) fn unique_violation(err: DbErr) -> AppError {
    let message = match err.sql_err() {
        Some(SqlErr::UniqueConstraintViolation(detail)) if detail.contains("website") => {
            WEBSITE_TAKEN
        }
        _ => NAME_TAKEN,
    };

    AppError::from_unique_violation(err, message)
}
