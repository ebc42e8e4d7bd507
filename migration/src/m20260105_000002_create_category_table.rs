use sea_orm_migration::{prelude::*, schema::*};

use super::{active_unique_index, audit_columns};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        let mut table = Table::create();
        table
            .table(Categories::Table)
            .if_not_exists()
            .col(pk_uuid(Categories::Id))
            .col(string(Categories::Name));
        audit_columns::add_to(&mut table, "categories");

        manager.create_table(table).await?;

        active_unique_index::create(manager, "categories", "name").await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Categories::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Categories {
    Table,
    Id,
    Name,
}
