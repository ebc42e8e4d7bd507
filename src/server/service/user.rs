use sea_orm::{DatabaseConnection, DbErr, SqlErr, TransactionTrait};
use uuid::Uuid;

use crate::{
    model::query::UserOrderBy,
    server::{
        data::user::UserRepository,
        error::AppError,
        model::{
            audit::{AuditPolicy, Visibility},
            lookup::UserLookup,
            params::ListParams,
            user::{ChangeUserParams, UpdateUserParams, User},
        },
        service::auth::password,
    },
};

pub(crate) const USERNAME_TAKEN: &str = "User with this username already exists";
pub(crate) const EMAIL_TAKEN: &str = "User with this email already exists";
const NOT_FOUND: &str = "User not found";

pub struct UserService<'a> {
    db: &'a DatabaseConnection,
    policy: AuditPolicy,
}

impl<'a> UserService<'a> {
    pub fn new(db: &'a DatabaseConnection, policy: AuditPolicy) -> Self {
        Self { db, policy }
    }

    pub async fn list(&self, params: &ListParams<UserOrderBy>) -> Result<Vec<User>, AppError> {
        Ok(UserRepository::new(self.db).list(params).await?)
    }

    pub async fn get(&self, id: Uuid, visibility: Visibility) -> Result<User, AppError> {
        UserRepository::new(self.db)
            .find(UserLookup::ById(id), visibility)
            .await?
            .ok_or_else(|| AppError::NotFound(NOT_FOUND.to_string()))
    }

    /// Changes a user's email and/or password.
    ///
    /// A new password is hashed before it reaches the repository.
    pub async fn update(&self, params: ChangeUserParams, actor: Uuid) -> Result<User, AppError> {
        let password_digest = params.password.as_deref().map(password::hash).transpose()?;

        let txn = self.db.begin().await?;
        let repo = UserRepository::new(&txn);

        repo.find_id(UserLookup::ById(params.id), self.policy.update_visibility())
            .await?
            .ok_or_else(|| AppError::NotFound(NOT_FOUND.to_string()))?;

        if let Some(email) = &params.email {
            let holder = repo
                .find_id(UserLookup::ByEmail(email.clone()), Visibility::Active)
                .await?;
            if holder.is_some_and(|id| id != params.id) {
                return Err(AppError::Conflict(EMAIL_TAKEN.to_string()));
            }
        }

        let user = repo
            .update(
                UpdateUserParams {
                    id: params.id,
                    email: params.email,
                    password_digest,
                },
                actor,
            )
            .await
            .map_err(unique_violation)?;

        txn.commit().await?;

        tracing::info!("User {} updated by {}", user.id, actor);

        Ok(user)
    }

    /// Soft-deletes a user. The user can no longer log in or authenticate.
    pub async fn delete(&self, id: Uuid, actor: Uuid) -> Result<User, AppError> {
        let txn = self.db.begin().await?;
        let repo = UserRepository::new(&txn);

        repo.find_id(UserLookup::ById(id), self.policy.delete_visibility())
            .await?
            .ok_or_else(|| AppError::NotFound(NOT_FOUND.to_string()))?;

        let user = repo.soft_delete(id, actor).await?;

        txn.commit().await?;

        tracing::info!("User {} deleted by {}", id, actor);

        Ok(user)
    }
}

/// Picks the conflict message from the index the store reports.
pub(crate) fn unique_violation(err: DbErr) -> AppError {
    let message = match err.sql_err() {
        Some(SqlErr::UniqueConstraintViolation(detail)) if detail.contains("email") => EMAIL_TAKEN,
        _ => USERNAME_TAKEN,
    };

    AppError::from_unique_violation(err, message)
}
