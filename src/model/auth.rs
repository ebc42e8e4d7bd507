use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::model::validation::Validate;

/// Form submitted to `/login`.
#[derive(Debug, Deserialize, ToSchema)]
pub struct LoginDto {
    pub username: String,
    pub password: String,
}

/// Body submitted to `/refresh`.
#[derive(Debug, Deserialize, ToSchema)]
pub struct RefreshDto {
    pub refresh_token: String,
}

impl Validate for RefreshDto {
    const FIELDS: &'static [&'static str] = &["refresh_token"];
    const REQUIRED: &'static [&'static str] = &["refresh_token"];
}

/// Bearer token pair issued on login and refresh.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct TokenDto {
    pub access_token: String,
    pub refresh_token: String,
    /// Always `"bearer"`.
    pub token_type: String,
}
