use crate::{
    model::query::UserOrderBy,
    server::{
        data::user::UserRepository,
        model::{
            audit::Visibility,
            lookup::UserLookup,
            params::ListParams,
            user::{CreateUserParams, UpdateUserParams},
        },
    },
};
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod create;
mod find_credentials;
mod update;
