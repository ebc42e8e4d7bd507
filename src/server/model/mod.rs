//! Domain models and operation parameters.
//!
//! Repositories convert SeaORM entity models into the types defined here at the data layer
//! boundary, so services and controllers never handle raw rows. Each domain model knows how
//! to turn itself into the matching response DTO via `into_dto`.

pub mod audit;
pub mod brand;
pub mod brand_social;
pub mod category;
pub mod lookup;
pub mod params;
pub mod social;
pub mod user;
