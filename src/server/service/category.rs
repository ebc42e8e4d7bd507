use sea_orm::{DatabaseConnection, TransactionTrait};
use uuid::Uuid;

use crate::{
    model::query::NameOrderBy,
    server::{
        data::category::CategoryRepository,
        error::AppError,
        model::{
            audit::{AuditPolicy, Visibility},
            category::{Category, CreateCategoryParams, UpdateCategoryParams},
            lookup::CategoryLookup,
            params::ListParams,
        },
    },
};

const NAME_TAKEN: &str = "Category with this name already exists";
const NOT_FOUND: &str = "Category not found";

pub struct CategoryService<'a> {
    db: &'a DatabaseConnection,
    policy: AuditPolicy,
}

impl<'a> CategoryService<'a> {
    pub fn new(db: &'a DatabaseConnection, policy: AuditPolicy) -> Self {
        Self { db, policy }
    }

    /// Creates a category after checking that no active category holds its name.
    pub async fn create(
        &self,
        params: CreateCategoryParams,
        actor: Uuid,
    ) -> Result<Category, AppError> {
        let txn = self.db.begin().await?;
        let repo = CategoryRepository::new(&txn);

        if repo
            .find_id(CategoryLookup::ByName(params.name.clone()), Visibility::Active)
            .await?
            .is_some()
        {
            return Err(AppError::Conflict(NAME_TAKEN.to_string()));
        }

        let category = repo
            .create(params, actor)
            .await
            .map_err(|e| AppError::from_unique_violation(e, NAME_TAKEN))?;

        txn.commit().await?;

        tracing::info!("Category {} created by {}", category.id, actor);

        Ok(category)
    }

    pub async fn list(&self, params: &ListParams<NameOrderBy>) -> Result<Vec<Category>, AppError> {
        Ok(CategoryRepository::new(self.db).list(params).await?)
    }

    pub async fn get(&self, id: Uuid, visibility: Visibility) -> Result<Category, AppError> {
        CategoryRepository::new(self.db)
            .find(CategoryLookup::ById(id), visibility)
            .await?
            .ok_or_else(|| AppError::NotFound(NOT_FOUND.to_string()))
    }

    /// Renames a category.
    ///
    /// Whether a soft-deleted category can be updated depends on the audit policy.
    pub async fn update(
        &self,
        params: UpdateCategoryParams,
        actor: Uuid,
    ) -> Result<Category, AppError> {
        let txn = self.db.begin().await?;
        let repo = CategoryRepository::new(&txn);

        repo.find_id(
            CategoryLookup::ById(params.id),
            self.policy.update_visibility(),
        )
        .await?
        .ok_or_else(|| AppError::NotFound(NOT_FOUND.to_string()))?;

        if let Some(name) = &params.name {
            let holder = repo
                .find_id(CategoryLookup::ByName(name.clone()), Visibility::Active)
                .await?;
            if holder.is_some_and(|id| id != params.id) {
                return Err(AppError::Conflict(NAME_TAKEN.to_string()));
            }
        }

        let category = repo
            .update(params, actor)
            .await
            .map_err(|e| AppError::from_unique_violation(e, NAME_TAKEN))?;

        txn.commit().await?;

        tracing::info!("Category {} updated by {}", category.id, actor);

        Ok(category)
    }

    /// Soft-deletes an active category.
    pub async fn delete(&self, id: Uuid, actor: Uuid) -> Result<Category, AppError> {
        let txn = self.db.begin().await?;
        let repo = CategoryRepository::new(&txn);

        repo.find_id(CategoryLookup::ById(id), self.policy.delete_visibility())
            .await?
            .ok_or_else(|| AppError::NotFound(NOT_FOUND.to_string()))?;

        let category = repo.soft_delete(id, actor).await?;

        txn.commit().await?;

        tracing::info!("Category {} deleted by {}", id, actor);

        Ok(category)
    }
}
