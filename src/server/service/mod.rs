//! Service layer for business logic and orchestration.
//!
//! This module contains the service layer of the application, which sits between the
//! controller (API) layer and the data (repository) layer. Services are responsible for:
//!
//! - **Pre-checks**: Natural key uniqueness and foreign key existence before each write
//! - **Transactions**: Every mutation runs its checks and writes in one transaction
//! - **Domain Models**: Working with domain models rather than DTOs or entity models

pub mod auth;
pub mod brand;
pub mod brand_social;
pub mod category;
pub mod social;
pub mod user;

#[cfg(test)]
mod test;
