use crate::{
    model::query::BrandSocialOrderBy,
    server::{
        data::brand_social::BrandSocialRepository,
        model::{
            audit::Visibility,
            brand_social::{CreateBrandSocialParams, UpdateBrandSocialParams},
            lookup::BrandSocialLookup,
            params::ListParams,
        },
    },
};
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod create;
mod list_by_brand;
mod update;
