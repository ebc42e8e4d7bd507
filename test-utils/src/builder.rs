use entity::prelude::*;
use sea_orm::{sea_query::TableCreateStatement, EntityTrait, Schema};

use crate::{context::TestContext, error::TestError};

/// Builder for creating test contexts with customizable database schemas.
///
/// Provides a fluent interface for configuring test environments with in-memory SQLite
/// databases. Use the builder pattern to add entity tables, then call `build()` to
/// create the configured test context.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::builder::TestBuilder;
/// use entity::prelude::{User, Category};
///
/// let test = TestBuilder::new()
///     .with_table(User)
///     .with_table(Category)
///     .build()
///     .await?;
/// ```
pub struct TestBuilder {
    /// CREATE TABLE statements generated from entities, executed in insertion order.
    tables: Vec<TableCreateStatement>,

    /// Raw statements executed after every table exists.
    statements: Vec<String>,
}

impl TestBuilder {
    /// Creates a new test builder with no tables configured.
    ///
    /// # Returns
    /// - New `TestBuilder` instance with empty table configuration
    pub fn new() -> Self {
        Self {
            tables: Vec::new(),
            statements: Vec::new(),
        }
    }

    /// Adds an entity table to the test database schema.
    ///
    /// Generates a CREATE TABLE statement from the provided SeaORM entity using SQLite
    /// backend syntax. Tables should be added in dependency order (tables with foreign keys
    /// after the tables they reference).
    ///
    /// # Arguments
    /// - `entity` - SeaORM entity model implementing `EntityTrait` to create table for
    ///
    /// # Returns
    /// - `Self` - Builder instance for method chaining
    pub fn with_table<E: EntityTrait>(mut self, entity: E) -> Self {
        let schema = Schema::new(sea_orm::DbBackend::Sqlite);
        self.tables.push(schema.create_table_from_entity(entity));
        self
    }

    /// Adds a unique index over `column` that only covers rows where `deleted_at` is null.
    ///
    /// Mirrors the partial indexes created by the migrations so uniqueness tests exercise
    /// the same store-level guarantee as production.
    ///
    /// # Arguments
    /// - `table` - Table name
    /// - `column` - Natural key column
    ///
    /// # Returns
    /// - `Self` - Builder instance for method chaining
    pub fn with_active_unique_index(mut self, table: &str, column: &str) -> Self {
        self.statements.push(format!(
            "CREATE UNIQUE INDEX IF NOT EXISTS uq_{table}_{column}_active \
             ON {table} ({column}) WHERE deleted_at IS NULL"
        ));
        self
    }

    /// Adds the users table and its natural key indexes.
    pub fn with_user_tables(self) -> Self {
        self.with_table(User)
            .with_active_unique_index("users", "username")
            .with_active_unique_index("users", "email")
    }

    /// Adds users and categories.
    pub fn with_category_tables(self) -> Self {
        self.with_user_tables()
            .with_table(Category)
            .with_active_unique_index("categories", "name")
    }

    /// Adds users, categories and brands.
    pub fn with_brand_tables(self) -> Self {
        self.with_category_tables()
            .with_table(Brand)
            .with_active_unique_index("brands", "name")
            .with_active_unique_index("brands", "website")
    }

    /// Adds users and socials.
    pub fn with_social_tables(self) -> Self {
        self.with_user_tables()
            .with_table(Social)
            .with_active_unique_index("socials", "name")
    }

    /// Adds every table of the schema in dependency order.
    ///
    /// # Example
    ///
    /// ```rust,ignore
    /// let test = TestBuilder::new()
    ///     .with_all_tables()
    ///     .build()
    ///     .await?;
    /// ```
    pub fn with_all_tables(self) -> Self {
        self.with_brand_tables()
            .with_table(Social)
            .with_active_unique_index("socials", "name")
            .with_table(BrandSocial)
            .with_active_unique_index("brand_socials", "address")
    }

    /// Builds and initializes the test context with configured tables.
    ///
    /// Creates an in-memory SQLite database connection, executes all CREATE TABLE
    /// statements, then the raw index statements.
    ///
    /// # Returns
    /// - `Ok(TestContext)` - Fully initialized test context with database and tables ready
    /// - `Err(TestError::Database)`- Failed to connect to database or create tables
    pub async fn build(self) -> Result<TestContext, TestError> {
        let mut setup = TestContext::new();

        setup.with_tables(self.tables).await?;
        setup.with_statements(self.statements).await?;

        Ok(setup)
    }
}

impl Default for TestBuilder {
    fn default() -> Self {
        Self::new()
    }
}
