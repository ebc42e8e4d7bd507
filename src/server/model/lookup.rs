//! Closed sets of ways to look up a single record.
//!
//! Every variant maps to exactly one column; repositories dispatch on them with `match`.

use uuid::Uuid;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UserLookup {
    ById(Uuid),
    ByUsername(String),
    ByEmail(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CategoryLookup {
    ById(Uuid),
    ByName(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BrandLookup {
    ById(Uuid),
    ByName(String),
    ByWebsite(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SocialLookup {
    ById(Uuid),
    ByName(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BrandSocialLookup {
    ById(Uuid),
    ByAddress(String),
}
