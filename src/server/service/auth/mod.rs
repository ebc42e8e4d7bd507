//! Signup, password login and token refresh.

use sea_orm::{DatabaseConnection, TransactionTrait};

use crate::server::{
    data::user::UserRepository,
    error::{auth::AuthError, AppError},
    model::{
        audit::Visibility,
        lookup::UserLookup,
        user::{CreateUserParams, SignupParams, User},
    },
    service::{
        auth::token::{TokenKind, TokenPair, TokenService},
        user::{unique_violation, EMAIL_TAKEN, USERNAME_TAKEN},
    },
};

pub mod password;
pub mod token;

pub struct AuthService<'a> {
    db: &'a DatabaseConnection,
    tokens: &'a TokenService,
}

impl<'a> AuthService<'a> {
    pub fn new(db: &'a DatabaseConnection, tokens: &'a TokenService) -> Self {
        Self { db, tokens }
    }

    /// Registers a new user.
    ///
    /// The password is hashed before the transaction starts.
    ///
    /// # Returns
    /// - `Ok(User)` - Created user, recorded as its own creator
    /// - `Err(AppError::Conflict)` - Username or email held by an active user
    pub async fn signup(&self, params: SignupParams) -> Result<User, AppError> {
        let password_digest = password::hash(&params.password)?;

        let txn = self.db.begin().await?;
        let repo = UserRepository::new(&txn);

        if repo
            .find_id(
                UserLookup::ByUsername(params.username.clone()),
                Visibility::Active,
            )
            .await?
            .is_some()
        {
            return Err(AppError::Conflict(USERNAME_TAKEN.to_string()));
        }

        if let Some(email) = &params.email {
            if repo
                .find_id(UserLookup::ByEmail(email.clone()), Visibility::Active)
                .await?
                .is_some()
            {
                return Err(AppError::Conflict(EMAIL_TAKEN.to_string()));
            }
        }

        let user = repo
            .create(CreateUserParams {
                username: params.username,
                email: params.email,
                password_digest,
            })
            .await
            .map_err(unique_violation)?;

        txn.commit().await?;

        tracing::info!("User {} signed up as {}", user.id, user.username);

        Ok(user)
    }

    /// Exchanges a username and password for a token pair.
    ///
    /// Unknown usernames, soft-deleted users and wrong passwords all fail the same way.
    pub async fn login(&self, username: &str, password: &str) -> Result<TokenPair, AppError> {
        let credentials = UserRepository::new(self.db)
            .find_credentials(username)
            .await?
            .ok_or(AuthError::IncorrectCredentials)?;

        if !password::verify(password, &credentials.password_digest)? {
            return Err(AuthError::IncorrectCredentials.into());
        }

        tracing::debug!("User {} logged in", credentials.id);

        Ok(self.tokens.issue_pair(credentials.id)?)
    }

    /// Issues a new token pair from a valid refresh token of an active user.
    pub async fn refresh(&self, refresh_token: &str) -> Result<TokenPair, AppError> {
        let claims = self.tokens.verify(TokenKind::Refresh, refresh_token)?;
        let user_id = claims.user_id()?;

        UserRepository::new(self.db)
            .find_id(UserLookup::ById(user_id), Visibility::Active)
            .await?
            .ok_or(AuthError::UserNotFound(claims.sub))?;

        Ok(self.tokens.issue_pair(user_id)?)
    }
}
