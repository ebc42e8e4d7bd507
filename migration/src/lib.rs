pub use sea_orm_migration::prelude::*;

mod active_unique_index;
mod audit_columns;
mod m20260105_000001_create_user_table;
mod m20260105_000002_create_category_table;
mod m20260105_000003_create_brand_table;
mod m20260112_000004_create_social_table;
mod m20260112_000005_create_brand_social_table;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20260105_000001_create_user_table::Migration),
            Box::new(m20260105_000002_create_category_table::Migration),
            Box::new(m20260105_000003_create_brand_table::Migration),
            Box::new(m20260112_000004_create_social_table::Migration),
            Box::new(m20260112_000005_create_brand_social_table::Migration),
        ]
    }
}
