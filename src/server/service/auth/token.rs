//! JWT access and refresh tokens.
//!
//! Access and refresh tokens carry the same claims but are signed with distinct secrets,
//! so a refresh token is never accepted where an access token is expected and vice versa.

use chrono::{Duration, Utc};
use jsonwebtoken::{
    decode, encode, errors::ErrorKind, Algorithm, DecodingKey, EncodingKey, Header, Validation,
};
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use uuid::Uuid;

use crate::{
    model::auth::TokenDto,
    server::{
        config::Config,
        error::{auth::AuthError, config::ConfigError},
    },
};

/// Which of the two token families an operation refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenKind {
    Access,
    Refresh,
}

/// Claims carried by both token kinds.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Claims {
    /// Id of the authenticated user. Usernames are reused once their holder is deleted,
    /// ids never are.
    pub sub: String,
    /// Expiry as seconds since the Unix epoch.
    pub exp: i64,
}

impl Claims {
    /// Parses the subject back into a user id.
    pub fn user_id(&self) -> Result<Uuid, AuthError> {
        Uuid::parse_str(&self.sub)
            .map_err(|e| AuthError::InvalidToken(format!("subject is not a user id: {}", e)))
    }
}

/// A freshly issued access/refresh pair.
#[derive(Debug, Clone)]
pub struct TokenPair {
    pub access_token: String,
    pub refresh_token: String,
}

impl TokenPair {
    pub fn into_dto(self) -> TokenDto {
        TokenDto {
            access_token: self.access_token,
            refresh_token: self.refresh_token,
            token_type: "bearer".to_string(),
        }
    }
}

struct TokenKeys {
    encoding: EncodingKey,
    decoding: DecodingKey,
    ttl: Duration,
}

impl TokenKeys {
    fn from_secret(secret: &str, ttl: Duration) -> Self {
        Self {
            encoding: EncodingKey::from_secret(secret.as_bytes()),
            decoding: DecodingKey::from_secret(secret.as_bytes()),
            ttl,
        }
    }
}

/// Signs and verifies tokens with HMAC secrets.
pub struct TokenService {
    algorithm: Algorithm,
    access: TokenKeys,
    refresh: TokenKeys,
}

impl TokenService {
    /// Creates a token service from explicit secrets and lifetimes.
    ///
    /// A negative lifetime issues tokens that are already expired.
    pub fn new(
        algorithm: Algorithm,
        access_secret: &str,
        refresh_secret: &str,
        access_ttl: Duration,
        refresh_ttl: Duration,
    ) -> Self {
        Self {
            algorithm,
            access: TokenKeys::from_secret(access_secret, access_ttl),
            refresh: TokenKeys::from_secret(refresh_secret, refresh_ttl),
        }
    }

    /// Creates a token service from application configuration.
    ///
    /// # Returns
    /// - `Ok(TokenService)` - Service using the configured secrets and lifetimes
    /// - `Err(ConfigError::InvalidEnvVar)` - `ALGORITHM` is unknown or not an HMAC algorithm,
    ///   or a lifetime is out of range
    pub fn from_config(config: &Config) -> Result<Self, ConfigError> {
        let algorithm = parse_hmac_algorithm(&config.algorithm)?;

        Ok(Self::new(
            algorithm,
            &config.jwt_secret_key,
            &config.jwt_refresh_secret_key,
            token_lifetime(
                "ACCESS_TOKEN_EXPIRE_MINUTES",
                config.access_token_expire_minutes,
            )?,
            token_lifetime(
                "REFRESH_TOKEN_EXPIRE_MINUTES",
                config.refresh_token_expire_minutes,
            )?,
        ))
    }

    /// Issues a signed token of `kind` for the user `user_id`.
    pub fn issue(&self, kind: TokenKind, user_id: Uuid) -> Result<String, AuthError> {
        let keys = self.keys(kind);
        let expires_at = Utc::now()
            .checked_add_signed(keys.ttl)
            .ok_or_else(|| AuthError::Crypto("token expiry out of range".to_string()))?;
        let claims = Claims {
            sub: user_id.to_string(),
            exp: expires_at.timestamp(),
        };

        encode(&Header::new(self.algorithm), &claims, &keys.encoding)
            .map_err(|e| AuthError::Crypto(format!("Failed to encode JWT: {}", e)))
    }

    /// Issues an access token and a refresh token for the user `user_id`.
    pub fn issue_pair(&self, user_id: Uuid) -> Result<TokenPair, AuthError> {
        Ok(TokenPair {
            access_token: self.issue(TokenKind::Access, user_id)?,
            refresh_token: self.issue(TokenKind::Refresh, user_id)?,
        })
    }

    /// Verifies a token of `kind` and returns its claims.
    ///
    /// # Returns
    /// - `Ok(Claims)` - Signature valid and not expired
    /// - `Err(AuthError::TokenExpired)` - Signature valid but `exp` has passed
    /// - `Err(AuthError::InvalidToken)` - Any other decoding or verification failure
    pub fn verify(&self, kind: TokenKind, token: &str) -> Result<Claims, AuthError> {
        let mut validation = Validation::new(self.algorithm);
        validation.leeway = 0;
        validation.set_required_spec_claims(&["exp", "sub"]);

        decode::<Claims>(token, &self.keys(kind).decoding, &validation)
            .map(|data| data.claims)
            .map_err(|e| match e.kind() {
                ErrorKind::ExpiredSignature => AuthError::TokenExpired,
                _ => AuthError::InvalidToken(e.to_string()),
            })
    }

    fn keys(&self, kind: TokenKind) -> &TokenKeys {
        match kind {
            TokenKind::Access => &self.access,
            TokenKind::Refresh => &self.refresh,
        }
    }
}

/// Converts a configured lifetime in minutes, rejecting values no timestamp can hold.
fn token_lifetime(name: &str, minutes: i64) -> Result<Duration, ConfigError> {
    Duration::try_minutes(minutes)
        .filter(|ttl| Utc::now().checked_add_signed(*ttl).is_some())
        .ok_or_else(|| ConfigError::InvalidEnvVar {
            name: name.to_string(),
            reason: format!("{} minutes is out of range", minutes),
        })
}

fn parse_hmac_algorithm(value: &str) -> Result<Algorithm, ConfigError> {
    let invalid = |reason: String| ConfigError::InvalidEnvVar {
        name: "ALGORITHM".to_string(),
        reason,
    };

    match Algorithm::from_str(value).map_err(|e| invalid(e.to_string()))? {
        algorithm @ (Algorithm::HS256 | Algorithm::HS384 | Algorithm::HS512) => Ok(algorithm),
        other => Err(invalid(format!(
            "{:?} needs a key pair; only HMAC algorithms are supported",
            other
        ))),
    }
}
