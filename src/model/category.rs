use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::model::{
    audit::AuditDto,
    validation::{FieldErrors, Validate},
};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct CategoryDto {
    pub id: Uuid,
    pub name: String,
    #[serde(flatten)]
    pub audit: AuditDto,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct CategoryListDto {
    pub categories: Vec<CategoryDto>,
}

#[derive(Debug, Clone, Deserialize, ToSchema)]
#[schema(example = json!({"name": "New Category"}))]
pub struct CreateCategoryDto {
    pub name: String,
}

impl Validate for CreateCategoryDto {
    const FIELDS: &'static [&'static str] = &["name"];
    const REQUIRED: &'static [&'static str] = &["name"];

    fn validate(&self) -> Vec<String> {
        let mut errors = FieldErrors::new();
        errors.length("name", &self.name, 1, None);
        errors.into_messages()
    }
}

#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct UpdateCategoryDto {
    pub name: Option<String>,
}

impl Validate for UpdateCategoryDto {
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
