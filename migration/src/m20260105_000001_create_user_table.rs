use sea_orm_migration::{prelude::*, schema::*};

use super::{active_unique_index, audit_columns};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        let mut table = Table::create();
        table
            .table(Users::Table)
            .if_not_exists()
            .col(pk_uuid(Users::Id))
            .col(string(Users::Username))
            .col(string_null(Users::Email))
            .col(string(Users::Password));
        audit_columns::add_to(&mut table, "users");

        manager.create_table(table).await?;

        active_unique_index::create(manager, "users", "username").await?;
        active_unique_index::create(manager, "users", "email").await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Users::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Users {
    Table,
    Id,
    Username,
    Email,
    Password,
}
