use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::model::{
    api::ReferenceDto,
    audit::AuditDto,
    validation::{FieldErrors, Validate},
};

/// Values accepted for `average_price`: 1 low, 2 medium, 3 high.
pub const AVERAGE_PRICES: &[i32] = &[1, 2, 3];

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct BrandDto {
    pub id: Uuid,
    pub name: String,
    pub website: Option<String>,
    pub category: ReferenceDto,
    pub description: Option<String>,
    pub average_price: Option<i32>,
    pub line_address_1: Option<String>,
    pub line_address_2: Option<String>,
    pub city: Option<String>,
    pub postal_code: Option<String>,
    #[serde(flatten)]
    pub audit: AuditDto,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct BrandListDto {
    pub brands: Vec<BrandDto>,
}

#[derive(Debug, Clone, Deserialize, ToSchema)]
#[schema(example = json!({
    "name": "New Brand",
    "website": "www.newbrand.com",
    "category_id": "95ae9f54-7d51-4ab5-a636-87b2d12921ef",
    "description": "This is an example of a new brand",
    "average_price": 2,
    "line_address_1": "22 Street",
    "line_address_2": "More street info",
    "city": "Porto",
    "postal_code": "4400-300"
}))]
pub struct CreateBrandDto {
    pub name: String,
    pub website: Option<String>,
    pub category_id: Uuid,
    pub description: Option<String>,
    pub average_price: Option<i32>,
    pub line_address_1: Option<String>,
    pub line_address_2: Option<String>,
    pub city: Option<String>,
    pub postal_code: Option<String>,
}

impl Validate for CreateBrandDto {
    const FIELDS: &'static [&'static str] = &[
        "name",
        "website",
        "category_id",
        "description",
        "average_price",
        "line_address_1",
        "line_address_2",
        "city",
        "postal_code",
    ];
    const REQUIRED: &'static [&'static str] = &["name", "category_id"];

    fn validate(&self) -> Vec<String> {
        let mut errors = FieldErrors::new();
        errors.length("name", &self.name, 1, None);
        if let Some(website) = &self.website {
            errors.length("website", website, 1, None);
        }
        if let Some(average_price) = self.average_price {
            errors.one_of("average_price", average_price, AVERAGE_PRICES);
        }
        if let Some(postal_code) = &self.postal_code {
            errors.postal_code("postal_code", postal_code);
        }
        errors.into_messages()
    }
}

#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct UpdateBrandDto {
    pub name: Option<String>,
    pub website: Option<String>,
    pub category_id: Option<Uuid>,
    pub description: Option<String>,
    pub average_price: Option<i32>,
    pub line_address_1: Option<String>,
    pub line_address_2: Option<String>,
    pub city: Option<String>,
    pub postal_code: Option<String>,
}

impl Validate for UpdateBrandDto {
    const FIELDS: &'static [&'static str] = CreateBrandDto::FIELDS;

    fn validate(&self) -> Vec<String> {
        let mut errors = FieldErrors::new();
        if let Some(name) = &self.name {
            errors.length("name", name, 1, None);
        }
        if let Some(website) = &self.website {
            errors.length("website", website, 1, None);
        }
        if let Some(average_price) = self.average_price {
            errors.one_of("average_price", average_price, AVERAGE_PRICES);
        }
        if let Some(postal_code) = &self.postal_code {
            errors.postal_code("postal_code", postal_code);
        }
        errors.into_messages()
    }

    fn is_empty(&self) -> bool {
        self.name.is_none()
            && self.website.is_none()
            && self.category_id.is_none()
            && self.description.is_none()
            && self.average_price.is_none()
            && self.line_address_1.is_none()
            && self.line_address_2.is_none()
            && self.city.is_none()
            && self.postal_code.is_none()
    }
}
