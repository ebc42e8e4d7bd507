//! User factory for creating test user entities.
//!
//! Users created here reference themselves in `created_by`, exactly like users created
//! through signup.

use crate::factory::helpers::next_id;
use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};
use uuid::Uuid;

/// Factory for creating test users with customizable fields.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::factory::user::UserFactory;
///
/// let user = UserFactory::new(&db)
///     .username("someone")
///     .email("someone@example.com")
///     .build()
///     .await?;
/// ```
pub struct UserFactory<'a> {
    db: &'a DatabaseConnection,
    username: String,
    email: Option<String>,
    password: String,
    deleted_by: Option<Uuid>,
}

impl<'a> UserFactory<'a> {
    /// Creates a new UserFactory with default values.
    ///
    /// Defaults:
    /// - username: `"user{id}"` where id is auto-incremented
    /// - email: `None`
    /// - password: a placeholder that is not a valid digest
    ///
    /// # Arguments
    /// - `db` - Database connection for inserting the entity
    ///
    /// # Returns
    /// - `UserFactory` - New factory instance with defaults
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();
        Self {
            db,
            username: format!("user{}", id),
            email: None,
            password: "not-a-password-digest".to_string(),
            deleted_by: None,
        }
    }

    /// Sets the username.
    pub fn username(mut self, username: impl Into<String>) -> Self {
        self.username = username.into();
        self
    }

    /// Sets the email.
    pub fn email(mut self, email: impl Into<String>) -> Self {
        self.email = Some(email.into());
        self
    }

    /// Sets the stored password digest.
    ///
    /// # Arguments
    /// - `digest` - Already hashed password in PHC format
    ///
    /// # Returns
    /// - `Self` - Factory instance for method chaining
    pub fn password_digest(mut self, digest: impl Into<String>) -> Self {
        self.password = digest.into();
        self
    }

    /// Marks the user as soft-deleted by `actor`.
    pub fn deleted_by(mut self, actor: Uuid) -> Self {
        self.deleted_by = Some(actor);
        self
    }

    /// Builds and inserts the user entity into the database.
    ///
    /// # Returns
    /// - `Ok(entity::user::Model)` - Created user entity
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::user::Model, DbErr> {
        let id = Uuid::new_v4();
        let now = Utc::now();
        entity::user::ActiveModel {
            id: ActiveValue::Set(id),
            username: ActiveValue::Set(self.username),
            email: ActiveValue::Set(self.email),
            password: ActiveValue::Set(self.password),
            created_at: ActiveValue::Set(now),
            created_by: ActiveValue::Set(id),
            updated_at: ActiveValue::Set(None),
            updated_by: ActiveValue::Set(None),
            deleted_at: ActiveValue::Set(self.deleted_by.map(|_| now)),
            deleted_by: ActiveValue::Set(self.deleted_by),
        }
        .insert(self.db)
        .await
    }
}

/// Creates a user with default values.
///
/// Shorthand for `UserFactory::new(db).build().await`.
///
/// # Example
///
/// ```rust,ignore
/// let user = create_user(&db).await?;
/// ```
pub async fn create_user(db: &DatabaseConnection) -> Result<entity::user::Model, DbErr> {
    UserFactory::new(db).build().await
}
