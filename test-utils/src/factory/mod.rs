//! Factory methods for creating test data.
//!
//! This module provides factory methods for creating test entities with sensible defaults,
//! reducing boilerplate in tests. Every factory fills the audit trail the way the API
//! would: `created_at`/`created_by` are always set, and `deleted_by()` stamps a soft-delete.
//!
//! # Basic Usage
//!
//! ```rust,ignore
//! use test_utils::factory;
//!
//! // Create with defaults
//! let user = factory::user::create_user(&db).await?;
//! let category = factory::category::create_category(&db, user.id).await?;
//!
//! // Create with all dependencies
//! let (user, category, brand) = factory::helpers::create_brand_with_dependencies(&db).await?;
//! ```
//!
//! # Customization
//!
//! ```rust,ignore
//! let brand = factory::brand::BrandFactory::new(&db, category.id, user.id)
//!     .name("Acme")
//!     .deleted_by(user.id)
//!     .build()
//!     .await?;
//! ```

pub mod brand;
pub mod brand_social;
pub mod category;
pub mod helpers;
pub mod social;
pub mod user;

pub use brand::create_brand;
pub use brand_social::create_brand_social;
pub use category::create_category;
pub use social::create_social;
pub use user::create_user;
