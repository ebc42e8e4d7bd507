use sea_orm::entity::prelude::*;

use super::sea_orm_active_enums::AveragePrice;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "brands")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub name: String,
    pub website: Option<String>,
    pub category_id: Uuid,
    pub description: Option<String>,
    pub average_price: Option<AveragePrice>,
    pub line_address_1: Option<String>,
    pub line_address_2: Option<String>,
    pub city: Option<String>,
    pub postal_code: Option<String>,
    pub created_at: DateTimeUtc,
    pub created_by: Uuid,
    pub updated_at: Option<DateTimeUtc>,
    pub updated_by: Option<Uuid>,
    pub deleted_at: Option<DateTimeUtc>,
    pub deleted_by: Option<Uuid>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::category::Entity",
        from = "Column::CategoryId",
        to = "super::category::Column::Id"
    )]
    Category,
    #[sea_orm(has_many = "super::brand_social::Entity")]
    BrandSocial,
}

impl Related<super::category::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Category.def()
    }
}

impl Related<super::brand_social::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::BrandSocial.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
