//! Database repository layer for all domain entities.
//!
//! This module contains repository structs that handle database operations for each domain
//! in the application. Repositories are generic over SeaORM's `ConnectionTrait`, so the same
//! code runs against the connection pool for reads and inside a service's transaction for
//! writes. Rows are converted to domain models before they leave this layer, with audit
//! actors and related names resolved in bulk.
//!
//! Nothing here ever removes a row: deletion is a soft-delete stamp written by
//! [`audit::stamp_deleted`].

pub mod audit;
pub mod brand;
pub mod brand_social;
pub mod category;
pub mod social;
pub mod user;

#[cfg(test)]
mod test;
