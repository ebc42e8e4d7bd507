use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::model::{
    audit::AuditDto,
    validation::{FieldErrors, Validate},
};

/// A social network a brand can have a presence on.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct SocialDto {
    pub id: Uuid,
    pub name: String,
    #[serde(flatten)]
    pub audit: AuditDto,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct SocialListDto {
    pub socials: Vec<SocialDto>,
}

#[derive(Debug, Clone, Deserialize, ToSchema)]
#[schema(example = json!({"name": "Website"}))]
pub struct CreateSocialDto {
    pub name: String,
}

impl Validate for CreateSocialDto {
    const FIELDS: &'static [&'static str] = &["name"];
    const REQUIRED: &'static [&'static str] = &["name"];

    fn validate(&self) -> Vec<String> {
        let mut errors = FieldErrors::new();
        errors.length("name", &self.name, 1, None);
        errors.into_messages()
    }
}

#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct UpdateSocialDto {
    pub name: Option<String>,
}

impl Validate for UpdateSocialDto {
    const FIELDS: &'static [&'static str] = &["name"];

    fn validate(&self) -> Vec<String> {
        let mut errors = FieldErrors::new();
        if let Some(name) = &self.name {
            errors.length("name", name, 1, None);
        }
        errors.into_messages()
    }

    fn is_empty(&self) -> bool {
        self.name.is_none()
    }
}
