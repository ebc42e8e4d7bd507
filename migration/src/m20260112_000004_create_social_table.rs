use sea_orm_migration::{prelude::*, schema::*};

use super::{active_unique_index, audit_columns};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        let mut table = Table::create();
        table
            .table(Socials::Table)
            .if_not_exists()
            .col(pk_uuid(Socials::Id))
            .col(string(Socials::Name));
        audit_columns::add_to(&mut table, "socials");

        manager.create_table(table).await?;

        active_unique_index::create(manager, "socials", "name").await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Socials::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Socials {
    Table,
    Id,
    Name,
}
