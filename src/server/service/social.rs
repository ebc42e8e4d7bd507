use sea_orm::{DatabaseConnection, TransactionTrait};
use uuid::Uuid;

use crate::{
    model::query::NameOrderBy,
    server::{
        data::social::SocialRepository,
        error::AppError,
        model::{
            audit::{AuditPolicy, Visibility},
            lookup::SocialLookup,
            params::ListParams,
            social::{CreateSocialParams, Social, UpdateSocialParams},
        },
    },
};

const NAME_TAKEN: &str = "Social with this name already exists";
const NOT_FOUND: &str = "Social not found";

pub struct SocialService<'a> {
    db: &'a DatabaseConnection,
    policy: AuditPolicy,
}

impl<'a> SocialService<'a> {
    pub fn new(db: &'a DatabaseConnection, policy: AuditPolicy) -> Self {
        Self { db, policy }
    }

    /// Creates a social network after checking that no active social holds its name.
    pub async fn create(
        &self,
        params: CreateSocialParams,
        actor: Uuid,
    ) -> Result<Social, AppError> {
        let txn = self.db.begin().await?;
        let repo = SocialRepository::new(&txn);

        if repo
            .find_id(SocialLookup::ByName(params.name.clone()), Visibility::Active)
            .await?
            .is_some()
        {
            return Err(AppError::Conflict(NAME_TAKEN.to_string()));
        }

        let social = repo
            .create(params, actor)
            .await
            .map_err(|e| AppError::from_unique_violation(e, NAME_TAKEN))?;

        txn.commit().await?;

        tracing::info!("Social {} created by {}", social.id, actor);

        Ok(social)
    }

    pub async fn list(&self, params: &ListParams<NameOrderBy>) -> Result<Vec<Social>, AppError> {
        Ok(SocialRepository::new(self.db).list(params).await?)
    }

    pub async fn get(&self, id: Uuid, visibility: Visibility) -> Result<Social, AppError> {
        SocialRepository::new(self.db)
            .find(SocialLookup::ById(id), visibility)
            .await?
            .ok_or_else(|| AppError::NotFound(NOT_FOUND.to_string()))
    }

    /// Renames a social network.
    ///
    /// Whether a soft-deleted social can be updated depends on the audit policy.
    pub async fn update(
        &self,
        params: UpdateSocialParams,
        actor: Uuid,
    ) -> Result<Social, AppError> {
        let txn = self.db.begin().await?;
        let repo = SocialRepository::new(&txn);

        repo.find_id(
            SocialLookup::ById(params.id),
            self.policy.update_visibility(),
        )
        .await?
        .ok_or_else(|| AppError::NotFound(NOT_FOUND.to_string()))?;

        if let Some(name) = &params.name {
            let holder = repo
                .find_id(SocialLookup::ByName(name.clone()), Visibility::Active)
                .await?;
            if holder.is_some_and(|id| id != params.id) {
                return Err(AppError::Conflict(NAME_TAKEN.to_string()));
            }
        }

        let social = repo
            .update(params, actor)
            .await
            .map_err(|e| AppError::from_unique_violation(e, NAME_TAKEN))?;

        txn.commit().await?;

        tracing::info!("Social {} updated by {}", social.id, actor);

        Ok(social)
    }

    /// Soft-deletes an active social network.
    pub async fn delete(&self, id: Uuid, actor: Uuid) -> Result<Social, AppError> {
        let txn = self.db.begin().await?;
        let repo = SocialRepository::new(&txn);

        repo.find_id(SocialLookup::ById(id), self.policy.delete_visibility())
            .await?
            .ok_or_else(|| AppError::NotFound(NOT_FOUND.to_string()))?;

        let social = repo.soft_delete(id, actor).await?;

        txn.commit().await?;

        tracing::info!("Social {} deleted by {}", id, actor);

        Ok(social)
    }
}
