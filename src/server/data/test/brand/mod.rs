use crate::{
    model::query::BrandOrderBy,
    server::{
        data::brand::BrandRepository,
        model::{
            audit::Visibility,
            brand::{CreateBrandParams, UpdateBrandParams},
            lookup::BrandLookup,
            params::{BrandListParams, ListParams},
        },
    },
};
use entity::sea_orm_active_enums::AveragePrice;
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};
use uuid::Uuid;

mod create;
mod find;
mod list;
mod update;

fn create_params(name: &str, category_id: Uuid) -> CreateBrandParams {
    CreateBrandParams {
        name: name.to_string(),
        website: None,
        category_id,
        description: None,
        average_price: None,
        line_address_1: None,
        line_address_2: None,
        city: None,
        postal_code: None,
    }
}
