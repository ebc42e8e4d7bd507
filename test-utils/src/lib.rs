//! Brands API Test Utils
//!
//! Provides shared testing utilities for building integration and unit tests for the brands
//! API. This crate offers a builder pattern for creating test contexts with in-memory SQLite
//! databases and factories for inserting audited records.
//!
//! # Overview
//!
//! The test utilities consist of four main components:
//! - **TestBuilder**: Fluent builder for configuring test environments
//! - **TestContext**: Test environment containing the database connection
//! - **TestError**: Error types that can occur during test setup
//! - **factory**: Builders inserting users, categories, brands, socials and brand socials
//!
//! # Usage
//!
//! ```rust,ignore
//! use test_utils::{builder::TestBuilder, factory};
//!
//! #[tokio::test]
//! async fn test_brand_operations() -> Result<(), TestError> {
//!     let test = TestBuilder::new().with_all_tables().build().await?;
//!     let db = test.db.as_ref().unwrap();
//!
//!     let (user, category, brand) = factory::helpers::create_brand_with_dependencies(db).await?;
//!
//!     Ok(())
//! }
//! ```

pub mod builder;
pub mod context;
pub mod error;
pub mod factory;
