use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::model::{
    audit::AuditDto,
    validation::{FieldErrors, Validate},
};

/// A user as seen through the API. The password digest is never part of it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct UserDto {
    pub id: Uuid,
    pub username: String,
    /// Only projected for the private view. `Some(None)` serializes as `"email": null`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[schema(value_type = Option<String>)]
    pub email: Option<Option<String>>,
    #[serde(flatten)]
    pub audit: AuditDto,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct UserListDto {
    pub users: Vec<UserDto>,
}

#[derive(Debug, Clone, Deserialize, ToSchema)]
#[schema(example = json!({
    "username": "newUser",
    "email": "newemail@example.com",
    "password": "NewPassword1"
}))]
pub struct SignupDto {
    pub username: String,
    pub email: Option<String>,
    pub password: String,
}

impl Validate for SignupDto {
    const FIELDS: &'static [&'static str] = &["username", "email", "password"];
    const REQUIRED: &'static [&'static str] = &["username", "password"];

    fn validate(&self) -> Vec<String> {
        let mut errors = FieldErrors::new();
        errors.length("username", &self.username, 5, Some(16));
        errors.password("password", &self.password);
        errors.into_messages()
    }
}

#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct UpdateUserDto {
    pub email: Option<String>,
    pub password: Option<String>,
}

impl Validate for UpdateUserDto {
    const FIELDS: &'static [&'static str] = &["email", "password"];

    fn validate(&self) -> Vec<String> {
        let mut errors = FieldErrors::new();
        if let Some(password) = &self.password {
            errors.password("password", password);
        }
        errors.into_messages()
    }

    fn is_empty(&self) -> bool {
        self.email.is_none() && self.password.is_none()
    }
}
