//! User domain model, parameters and field projection.

use uuid::Uuid;

use crate::{
    model::user::{SignupDto, UpdateUserDto, UserDto},
    server::model::audit::AuditTrail,
};

/// Which user fields a caller may see.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UserFieldVisibility {
    /// Identity and audit trail only.
    Public,
    /// Also exposes `email`. Used for signup, updates and a user reading their own record.
    Private,
}

/// A user without credentials.
#[derive(Debug, Clone, PartialEq)]
pub struct User {
    pub id: Uuid,
    pub username: String,
    pub email: Option<String>,
    pub audit: AuditTrail,
}

impl User {
    /// Converts the entity model to a domain model, dropping the password digest.
    pub fn from_entity(entity: entity::user::Model, audit: AuditTrail) -> Self {
        Self {
            id: entity.id,
            username: entity.username,
            email: entity.email,
            audit,
        }
    }

    /// Projects the user onto a DTO for the given visibility.
    pub fn into_dto(self, visibility: UserFieldVisibility) -> UserDto {
        let email = match visibility {
            UserFieldVisibility::Public => None,
            UserFieldVisibility::Private => Some(self.email),
        };

        UserDto {
            id: self.id,
            username: self.username,
            email,
            audit: self.audit.into_dto(),
        }
    }
}

/// Stored credentials of an active user, used only to verify a login.
#[derive(Debug, Clone)]
pub struct Credentials {
    pub id: Uuid,
    pub password_digest: String,
}

#[derive(Debug, Clone)]
pub struct CreateUserParams {
    pub username: String,
    pub email: Option<String>,
    pub password_digest: String,
}

#[derive(Debug, Clone)]
pub struct UpdateUserParams {
    pub id: Uuid,
    pub email: Option<String>,
    pub password_digest: Option<String>,
}

/// Signup request with the password still in plain text.
#[derive(Debug, Clone)]
pub struct SignupParams {
    pub username: String,
    pub email: Option<String>,
    pub password: String,
}

impl SignupParams {
    pub fn from_dto(dto: SignupDto) -> Self {
        Self {
            username: dto.username,
            email: dto.email,
            password: dto.password,
        }
    }
}

/// User change request with the new password, if any, still in plain text.
#[derive(Debug, Clone)]
pub struct ChangeUserParams {
    pub id: Uuid,
    pub email: Option<String>,
    pub password: Option<String>,
}

impl ChangeUserParams {
    pub fn from_dto(id: Uuid, dto: UpdateUserDto) -> Self {
        Self {
            id,
            email: dto.email,
            password: dto.password,
        }
    }
}
