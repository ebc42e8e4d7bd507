//! Brand domain model and parameters.
//!
//! `average_price` travels as an integer over the API and as [`AveragePrice`] everywhere
//! else; the conversion happens here, after the request body has already been validated.

use entity::sea_orm_active_enums::AveragePrice;
use uuid::Uuid;

use crate::{
    model::brand::{BrandDto, CreateBrandDto, UpdateBrandDto},
    server::model::{audit::AuditTrail, category::Reference},
};

/// Brand with its category resolved.
#[derive(Debug, Clone, PartialEq)]
pub struct Brand {
    pub id: Uuid,
    pub name: String,
    pub website: Option<String>,
    pub category: Reference,
    pub description: Option<String>,
    pub average_price: Option<AveragePrice>,
    pub line_address_1: Option<String>,
    pub line_address_2: Option<String>,
    pub city: Option<String>,
    pub postal_code: Option<String>,
    pub audit: AuditTrail,
}

impl Brand {
    /// Converts entity models to a domain model at the repository boundary.
    ///
    /// # Arguments
    /// - `entity` - The brand row
    /// - `category` - The brand's category, looked up regardless of its deletion state
    /// - `audit` - Resolved audit trail of the brand row
    pub fn from_entity(
        entity: entity::brand::Model,
        category: Reference,
        audit: AuditTrail,
    ) -> Self {
        Self {
            id: entity.id,
            name: entity.name,
            website: entity.website,
            category,
            description: entity.description,
            average_price: entity.average_price,
            line_address_1: entity.line_address_1,
            line_address_2: entity.line_address_2,
            city: entity.city,
            postal_code: entity.postal_code,
            audit,
        }
    }

    pub fn into_dto(self) -> BrandDto {
        BrandDto {
            id: self.id,
            name: self.name,
            website: self.website,
            category: self.category.into_dto(),
            description: self.description,
            average_price: self.average_price.map(price_to_i32),
            line_address_1: self.line_address_1,
            line_address_2: self.line_address_2,
            city: self.city,
            postal_code: self.postal_code,
            audit: self.audit.into_dto(),
        }
    }
}

/// Maps a validated API price level onto the stored enumeration.
///
/// Returns `None` for values outside 1..=3, which request validation has already rejected.
pub fn price_from_i32(value: i32) -> Option<AveragePrice> {
    match value {
        1 => Some(AveragePrice::Low),
        2 => Some(AveragePrice::Medium),
        3 => Some(AveragePrice::High),
        _ => None,
    }
}

pub fn price_to_i32(price: AveragePrice) -> i32 {
    match price {
        AveragePrice::Low => 1,
        AveragePrice::Medium => 2,
        AveragePrice::High => 3,
    }
}

#[derive(Debug, Clone)]
pub struct CreateBrandParams {
    pub name: String,
    pub website: Option<String>,
    pub category_id: Uuid,
    pub description: Option<String>,
    pub average_price: Option<AveragePrice>,
    pub line_address_1: Option<String>,
    pub line_address_2: Option<String>,
    pub city: Option<String>,
    pub postal_code: Option<String>,
}

impl CreateBrandParams {
    pub fn from_dto(dto: CreateBrandDto) -> Self {
        Self {
            name: dto.name,
            website: dto.website,
            category_id: dto.category_id,
            description: dto.description,
            average_price: dto.average_price.and_then(price_from_i32),
            line_address_1: dto.line_address_1,
            line_address_2: dto.line_address_2,
            city: dto.city,
            postal_code: dto.postal_code,
        }
    }
}

/// Partial brand update; `None` leaves a field untouched.
#[derive(Debug, Clone, Default)]
pub struct UpdateBrandParams {
    pub id: Uuid,
    pub name: Option<String>,
    pub website: Option<String>,
    pub category_id: Option<Uuid>,
    pub description: Option<String>,
    pub average_price: Option<AveragePrice>,
    pub line_address_1: Option<String>,
    pub line_address_2: Option<String>,
    pub city: Option<String>,
    pub postal_code: Option<String>,
}

impl UpdateBrandParams {
    pub fn from_dto(id: Uuid, dto: UpdateBrandDto) -> Self {
        Self {
            id,
            name: dto.name,
            website: dto.website,
            category_id: dto.category_id,
            description: dto.description,
            average_price: dto.average_price.and_then(price_from_i32),
            line_address_1: dto.line_address_1,
            line_address_2: dto.line_address_2,
            city: dto.city,
            postal_code: dto.postal_code,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn price_levels_round_trip() {
        for value in 1..=3 {
            let price = price_from_i32(value).unwrap();
            assert_eq!(price_to_i32(price), value);
        }
        assert!(price_from_i32(4).is_none());
    }
}
