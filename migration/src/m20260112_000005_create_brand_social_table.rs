use sea_orm_migration::{prelude::*, schema::*};

use super::{
    active_unique_index, audit_columns, m20260105_000003_create_brand_table::Brands,
    m20260112_000004_create_social_table::Socials,
};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        let mut table = Table::create();
        table
            .table(BrandSocials::Table)
            .if_not_exists()
            .col(pk_uuid(BrandSocials::Id))
            .col(uuid(BrandSocials::BrandId))
            .col(uuid(BrandSocials::SocialId))
            .col(string(BrandSocials::Address))
            .foreign_key(
                ForeignKey::create()
                    .name("fk_brand_socials_brand_id")
                    .from(BrandSocials::Table, BrandSocials::BrandId)
                    .to(Brands::Table, Brands::Id)
                    .on_delete(ForeignKeyAction::Restrict)
                    .on_update(ForeignKeyAction::Cascade),
            )
            .foreign_key(
                ForeignKey::create()
                    .name("fk_brand_socials_social_id")
                    .from(BrandSocials::Table, BrandSocials::SocialId)
                    .to(Socials::Table, Socials::Id)
                    .on_delete(ForeignKeyAction::Restrict)
                    .on_update(ForeignKeyAction::Cascade),
            );
        audit_columns::add_to(&mut table, "brand_socials");

        manager.create_table(table).await?;

        active_unique_index::create(manager, "brand_socials", "address").await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(BrandSocials::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum BrandSocials {
    Table,
    Id,
    BrandId,
    SocialId,
    Address,
}
