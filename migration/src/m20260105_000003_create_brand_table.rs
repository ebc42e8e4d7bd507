use sea_orm_migration::{prelude::*, schema::*};

use super::{
    active_unique_index, audit_columns, m20260105_000002_create_category_table::Categories,
};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        let mut table = Table::create();
        table
            .table(Brands::Table)
            .if_not_exists()
            .col(pk_uuid(Brands::Id))
            .col(string(Brands::Name))
            .col(string_null(Brands::Website))
            .col(uuid(Brands::CategoryId))
            .col(text_null(Brands::Description))
            .col(integer_null(Brands::AveragePrice))
            .col(string_null(Brands::LineAddress1))
            .col(string_null(Brands::LineAddress2))
            .col(string_null(Brands::City))
            .col(string_null(Brands::PostalCode))
            .foreign_key(
                ForeignKey::create()
                    .name("fk_brands_category_id")
                    .from(Brands::Table, Brands::CategoryId)
                    .to(Categories::Table, Categories::Id)
                    .on_delete(ForeignKeyAction::Restrict)
                    .on_update(ForeignKeyAction::Cascade),
            );
        audit_columns::add_to(&mut table, "brands");

        manager.create_table(table).await?;

        active_unique_index::create(manager, "brands", "name").await?;
        active_unique_index::create(manager, "brands", "website").await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Brands::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Brands {
    Table,
    Id,
    Name,
    Website,
    CategoryId,
    Description,
    AveragePrice,
    #[sea_orm(iden = "line_address_1")]
    LineAddress1,
    #[sea_orm(iden = "line_address_2")]
    LineAddress2,
    City,
    PostalCode,
}
