use crate::server::{
    data::{audit, category::CategoryRepository},
    model::{audit::Visibility, category::CreateCategoryParams, params::ListParams},
};
use chrono::Utc;
use sea_orm::{ActiveModelTrait, DbErr, EntityTrait};
use test_utils::{builder::TestBuilder, factory};

mod stamp;
mod visibility;
