//! Category domain model and parameters.

use uuid::Uuid;

use crate::{
    model::{
        api::ReferenceDto,
        category::{CategoryDto, CreateCategoryDto, UpdateCategoryDto},
    },
    server::model::audit::AuditTrail,
};

/// Category a brand belongs to.
#[derive(Debug, Clone, PartialEq)]
pub struct Category {
    pub id: Uuid,
    pub name: String,
    pub audit: AuditTrail,
}

impl Category {
    /// Converts the entity model to a domain model at the repository boundary.
    pub fn from_entity(entity: entity::category::Model, audit: AuditTrail) -> Self {
        Self {
            id: entity.id,
            name: entity.name,
            audit,
        }
    }

    pub fn into_dto(self) -> CategoryDto {
        CategoryDto {
            id: self.id,
            name: self.name,
            audit: self.audit.into_dto(),
        }
    }
}

/// Id and name of a related record, as embedded in parent responses.
#[derive(Debug, Clone, PartialEq)]
pub struct Reference {
    pub id: Uuid,
    pub name: String,
}

impl Reference {
    pub fn into_dto(self) -> ReferenceDto {
        ReferenceDto {
            id: self.id,
            name: self.name,
        }
    }
}

#[derive(Debug, Clone)]
pub struct CreateCategoryParams {
    pub name: String,
}

impl CreateCategoryParams {
    pub fn from_dto(dto: CreateCategoryDto) -> Self {
        Self { name: dto.name }
    }
}

#[derive(Debug, Clone)]
pub struct UpdateCategoryParams {
    pub id: Uuid,
    pub name: Option<String>,
}

impl UpdateCategoryParams {
    pub fn from_dto(id: Uuid, dto: UpdateCategoryDto) -> Self {
        Self { id, name: dto.name }
    }
}
