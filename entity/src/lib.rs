//! SeaORM entities for the brands API.
//!
//! Every table carries the same audit columns (`created_at`, `created_by`, `updated_at`,
//! `updated_by`, `deleted_at`, `deleted_by`). Actor columns hold user ids but are not modelled
//! as relations; actors are resolved in bulk by the server's data layer.

pub mod prelude;

pub mod brand;
pub mod brand_social;
pub mod category;
pub mod sea_orm_active_enums;
pub mod social;
pub mod user;
