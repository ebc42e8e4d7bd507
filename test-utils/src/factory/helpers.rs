//! Shared helper utilities for factory methods.
//!
//! This module provides common utilities used across all factory modules,
//! including ID generation and convenience methods for creating entities
//! with their dependencies.

use sea_orm::{DatabaseConnection, DbErr};

use crate::factory;

/// Counter for generating unique natural keys in tests.
static COUNTER: std::sync::atomic::AtomicU64 = std::sync::atomic::AtomicU64::new(1);

/// Gets the next unique counter value for test data.
///
/// # Returns
/// - `u64` - Next unique counter value
pub fn next_id() -> u64 {
    COUNTER.fetch_add(1, std::sync::atomic::Ordering::SeqCst)
}

/// Creates a user, a category owned by that user, and a brand in that category.
///
/// # Arguments
/// - `db` - Database connection
///
/// # Returns
/// - `Ok((user, category, brand))` - Created entities
/// - `Err(DbErr)` - Database error during insert
pub async fn create_brand_with_dependencies(
    db: &DatabaseConnection,
) -> Result<
    (
        entity::user::Model,
        entity::category::Model,
        entity::brand::Model,
    ),
    DbErr,
> {
    let user = factory::user::create_user(db).await?;
    let category = factory::category::create_category(db, user.id).await?;
    let brand = factory::brand::create_brand(db, category.id, user.id).await?;

    Ok((user, category, brand))
}

/// Creates a brand with its dependencies, a social network, and a link between them.
///
/// # Returns
/// - `Ok((user, brand, social, brand_social))` - Created entities
/// - `Err(DbErr)` - Database error during insert
pub async fn create_brand_social_with_dependencies(
    db: &DatabaseConnection,
) -> Result<
    (
        entity::user::Model,
        entity::brand::Model,
        entity::social::Model,
        entity::brand_social::Model,
    ),
    DbErr,
> {
    let (user, _category, brand) = create_brand_with_dependencies(db).await?;
    let social = factory::social::create_social(db, user.id).await?;
    let brand_social =
        factory::brand_social::create_brand_social(db, brand.id, social.id, user.id).await?;

    Ok((user, brand, social, brand_social))
}
