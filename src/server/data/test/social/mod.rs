use crate::server::{
    data::social::SocialRepository,
    model::{
        audit::Visibility,
        lookup::SocialLookup,
        params::ListParams,
        social::{CreateSocialParams, UpdateSocialParams},
    },
};
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod create;
mod update;
