//! Brand social link domain model and parameters.

use uuid::Uuid;

use crate::{
    model::brand_social::{BrandSocialDto, CreateBrandSocialDto, UpdateBrandSocialDto},
    server::model::{audit::AuditTrail, category::Reference},
};

/// A brand's address on one social network.
#[derive(Debug, Clone, PartialEq)]
pub struct BrandSocial {
    pub id: Uuid,
    pub brand: Reference,
    pub social: Reference,
    pub address: String,
    pub audit: AuditTrail,
}

impl BrandSocial {
    pub fn from_entity(
        entity: entity::brand_social::Model,
        brand: Reference,
        social: Reference,
        audit: AuditTrail,
    ) -> Self {
        Self {
            id: entity.id,
            brand,
            social,
            address: entity.address,
            audit,
        }
    }

    pub fn into_dto(self) -> BrandSocialDto {
        BrandSocialDto {
            id: self.id,
            brand: self.brand.into_dto(),
            social: self.social.into_dto(),
            address: self.address,
            audit: self.audit.into_dto(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct CreateBrandSocialParams {
    pub brand_id: Uuid,
    pub social_id: Uuid,
    pub address: String,
}

impl CreateBrandSocialParams {
    pub fn from_dto(brand_id: Uuid, dto: CreateBrandSocialDto) -> Self {
        Self {
            brand_id,
            social_id: dto.social_id,
            address: dto.address,
        }
    }
}

#[derive(Debug, Clone)]
pub struct UpdateBrandSocialParams {
    pub brand_id: Uuid,
    pub id: Uuid,
    pub social_id: Option<Uuid>,
    pub address: Option<String>,
}

impl UpdateBrandSocialParams {
    pub fn from_dto(brand_id: Uuid, id: Uuid, dto: UpdateBrandSocialDto) -> Self {
        Self {
            brand_id,
            id,
            social_id: dto.social_id,
            address: dto.address,
        }
    }
}
