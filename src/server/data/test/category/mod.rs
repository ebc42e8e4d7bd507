use crate::{
    model::query::{NameOrderBy, SortDirection},
    server::{
        data::category::CategoryRepository,
        model::{
            audit::Visibility,
            category::{CreateCategoryParams, UpdateCategoryParams},
            lookup::CategoryLookup,
            params::ListParams,
        },
    },
};
use sea_orm::{DbErr, EntityTrait};
use test_utils::{builder::TestBuilder, factory};

mod create;
mod find;
mod list;
mod soft_delete;
mod update;
