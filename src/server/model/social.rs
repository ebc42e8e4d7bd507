//! Social network domain model and parameters.

use uuid::Uuid;

use crate::{
    model::social::{CreateSocialDto, SocialDto, UpdateSocialDto},
    server::model::audit::AuditTrail,
};

#[derive(Debug, Clone, PartialEq)]
pub struct Social {
    pub id: Uuid,
    pub name: String,
    pub audit: AuditTrail,
}

impl Social {
    pub fn from_entity(entity: entity::social::Model, audit: AuditTrail) -> Self {
        Self {
            id: entity.id,
            name: entity.name,
            audit,
        }
    }

    pub fn into_dto(self) -> SocialDto {
        SocialDto {
            id: self.id,
            name: self.name,
            audit: self.audit.into_dto(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct CreateSocialParams {
    pub name: String,
}

impl CreateSocialParams {
    pub fn from_dto(dto: CreateSocialDto) -> Self {
        Self { name: dto.name }
    }
}

#[derive(Debug, Clone)]
pub struct UpdateSocialParams {
    pub id: Uuid,
    pub name: Option<String>,
}

impl UpdateSocialParams {
    pub fn from_dto(id: Uuid, dto: UpdateSocialDto) -> Self {
        Self { id, name: dto.name }
    }
}
