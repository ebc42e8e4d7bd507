//! Data transfer objects shared by the HTTP surface.
//!
//! Everything in here is serialized to or deserialized from request and response bodies and
//! carries a `utoipa::ToSchema` derive so it shows up in the generated OpenAPI document.
//! Request bodies additionally implement [`validation::Validate`], which the `ApiJson`
//! extractor runs before a handler sees the payload.

pub mod api;
pub mod audit;
pub mod auth;
pub mod brand;
pub mod brand_social;
pub mod category;
pub mod query;
pub mod social;
pub mod user;
pub mod validation;
