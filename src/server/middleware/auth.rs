use axum::{
    extract::FromRequestParts,
    http::{header::AUTHORIZATION, request::Parts, HeaderMap},
};
use sea_orm::DatabaseConnection;

use crate::server::{
    data::user::UserRepository,
    error::{auth::AuthError, AppError},
    model::{audit::Visibility, lookup::UserLookup, user::User},
    service::auth::token::{TokenKind, TokenService},
    state::AppState,
};

/// Resolves the bearer token of a request to an active user.
pub struct AuthGuard<'a> {
    db: &'a DatabaseConnection,
    tokens: &'a TokenService,
    headers: &'a HeaderMap,
}

impl<'a> AuthGuard<'a> {
    pub fn new(
        db: &'a DatabaseConnection,
        tokens: &'a TokenService,
        headers: &'a HeaderMap,
    ) -> Self {
        Self {
            db,
            tokens,
            headers,
        }
    }

    /// Requires a valid access token naming an active user.
    ///
    /// # Returns
    /// - `Ok(User)` - The authenticated user
    /// - `Err(AuthError::MissingToken)` - No `Authorization: Bearer` header
    /// - `Err(AuthError::TokenExpired)` - Token signature valid but expired
    /// - `Err(AuthError::InvalidToken)` - Token could not be verified
    /// - `Err(AuthError::UserNotFound)` - Subject is unknown or soft-deleted
    pub async fn require(&self) -> Result<User, AppError> {
        let token = bearer_token(self.headers).ok_or(AuthError::MissingToken)?;
        let claims = self.tokens.verify(TokenKind::Access, token)?;
        let user_id = claims.user_id()?;

        let Some(user) = UserRepository::new(self.db)
            .find(UserLookup::ById(user_id), Visibility::Active)
            .await?
        else {
            return Err(AuthError::UserNotFound(claims.sub).into());
        };

        Ok(user)
    }
}

/// Authenticated caller of a protected handler.
///
/// Runs on the request head, so it must come before any body extractor in a handler's
/// arguments: an unauthenticated request is refused with 401 before its body is parsed.
pub struct AuthUser(pub User);

impl FromRequestParts<AppState> for AuthUser {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        AuthGuard::new(&state.db, &state.tokens, &parts.headers)
            .require()
            .await
            .map(AuthUser)
    }
}

fn bearer_token(headers: &HeaderMap) -> Option<&str> {
    let value = headers.get(AUTHORIZATION)?.to_str().ok()?;
    let (scheme, token) = value.split_once(' ')?;
    let token = token.trim();

    (scheme.eq_ignore_ascii_case("bearer") && !token.is_empty()).then_some(token)
}
