//! Query string parameters accepted by list and detail endpoints.

use serde::Deserialize;
use utoipa::ToSchema;
use uuid::Uuid;

fn default_limit() -> u32 {
    100
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum SortDirection {
    #[default]
    Asc,
    Desc,
}

/// Sort columns for `/users`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum UserOrderBy {
    Username,
    Email,
    #[default]
    CreatedAt,
    UpdatedAt,
}

/// Sort columns for entities identified by a name (`/categories`, `/socials`).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum NameOrderBy {
    Name,
    #[default]
    CreatedAt,
    UpdatedAt,
}

/// Sort columns for `/brands`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum BrandOrderBy {
    Name,
    AveragePrice,
    #[default]
    CreatedAt,
    UpdatedAt,
}

/// Sort columns for `/brands/{brand_id}/socials`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum BrandSocialOrderBy {
    Address,
    #[default]
    CreatedAt,
    UpdatedAt,
}

/// Pagination, ordering and visibility for list endpoints.
#[derive(Debug, Deserialize)]
#[serde(bound(deserialize = "O: Deserialize<'de> + Default"))]
pub struct ListQuery<O> {
    #[serde(default)]
    pub skip: u32,
    #[serde(default = "default_limit")]
    pub limit: u32,
    #[serde(default)]
    pub show_deleted: bool,
    #[serde(default)]
    pub order_by: O,
    #[serde(default)]
    pub direction: SortDirection,
}

/// `/brands` list parameters, which can also narrow results to one category.
#[derive(Debug, Deserialize)]
pub struct BrandListQuery {
    #[serde(default)]
    pub skip: u32,
    #[serde(default = "default_limit")]
    pub limit: u32,
    #[serde(default)]
    pub show_deleted: bool,
    #[serde(default)]
    pub order_by: BrandOrderBy,
    #[serde(default)]
    pub direction: SortDirection,
    pub category_id: Option<Uuid>,
}

/// Visibility flag accepted by single-record GETs.
#[derive(Debug, Default, Deserialize)]
pub struct ShowDeletedQuery {
    #[serde(default)]
    pub show_deleted: bool,
}
