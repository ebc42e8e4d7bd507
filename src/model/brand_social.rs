use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::model::{
    api::ReferenceDto,
    audit::AuditDto,
    validation::{FieldErrors, Validate},
};

/// A brand's address on a social network.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct BrandSocialDto {
    pub id: Uuid,
    pub brand: ReferenceDto,
    pub social: ReferenceDto,
    pub address: String,
    #[serde(flatten)]
    pub audit: AuditDto,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct BrandSocialListDto {
    pub socials: Vec<BrandSocialDto>,
}

#[derive(Debug, Clone, Deserialize, ToSchema)]
#[schema(example = json!({
    "social_id": "dd57c7fd-a92f-42f1-891d-988803e4a878",
    "address": "www.website.com"
}))]
pub struct CreateBrandSocialDto {
    pub social_id: Uuid,
    pub address: String,
}

impl Validate for CreateBrandSocialDto {
    const FIELDS: &'static [&'static str] = &["social_id", "address"];
    const REQUIRED: &'static [&'static str] = &["social_id", "address"];

    fn validate(&self) -> Vec<String> {
        let mut errors = FieldErrors::new();
        errors.length("address", &self.address, 1, None);
        errors.into_messages()
    }
}

#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct UpdateBrandSocialDto {
    pub social_id: Option<Uuid>,
    pub address: Option<String>,
}

impl Validate for UpdateBrandSocialDto {
    const FIELDS: &'static [&'static str] = &["social_id", "address"];

    fn validate(&self) -> Vec<String> {
        let mut errors = FieldErrors::new();
        if let Some(address) = &self.address {
            errors.length("address", address, 1, None);
        }
        errors.into_messages()
    }

    fn is_empty(&self) -> bool {
        self.social_id.is_none() && self.address.is_none()
    }
}
