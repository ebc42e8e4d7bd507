use std::str::FromStr;

use crate::server::error::{config::ConfigError, AppError};

const DEFAULT_ALGORITHM: &str = "HS256";
const DEFAULT_ACCESS_TOKEN_EXPIRE_MINUTES: i64 = 30;
const DEFAULT_REFRESH_TOKEN_EXPIRE_MINUTES: i64 = 60 * 24 * 7;
const DEFAULT_BIND_ADDRESS: &str = "0.0.0.0:8000";

pub struct Config {
    pub database_url: String,
    pub bind_address: String,

    pub jwt_secret_key: String,
    pub jwt_refresh_secret_key: String,
    pub algorithm: String,
    pub access_token_expire_minutes: i64,
    pub refresh_token_expire_minutes: i64,

    pub allow_update_after_delete: bool,
}

impl Config {
    pub fn from_env() -> Result<Self, AppError> {
        Ok(Self {
            database_url: required("DATABASE_URL")?,
            bind_address: optional("BIND_ADDRESS", DEFAULT_BIND_ADDRESS.to_string())?,
            jwt_secret_key: required("JWT_SECRET_KEY")?,
            jwt_refresh_secret_key: required("JWT_REFRESH_SECRET_KEY")?,
            algorithm: optional("ALGORITHM", DEFAULT_ALGORITHM.to_string())?,
            access_token_expire_minutes: optional(
                "ACCESS_TOKEN_EXPIRE_MINUTES",
                DEFAULT_ACCESS_TOKEN_EXPIRE_MINUTES,
            )?,
            refresh_token_expire_minutes: optional(
                "REFRESH_TOKEN_EXPIRE_MINUTES",
                DEFAULT_REFRESH_TOKEN_EXPIRE_MINUTES,
            )?,
            allow_update_after_delete: optional("ALLOW_UPDATE_AFTER_DELETE", false)?,
        })
    }
}

fn required(name: &str) -> Result<String, ConfigError> {
    std::env::var(name).map_err(|_| ConfigError::MissingEnvVar(name.to_string()))
}

fn optional<T>(name: &str, default: T) -> Result<T, ConfigError>
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    match std::env::var(name) {
        Ok(value) => value.parse().map_err(|e: T::Err| ConfigError::InvalidEnvVar {
            name: name.to_string(),
            reason: e.to_string(),
        }),
        Err(_) => Ok(default),
    }
}
