//! Parameters shared by list operations.

use uuid::Uuid;

use crate::{
    model::query::{BrandListQuery, BrandOrderBy, ListQuery, SortDirection},
    server::model::audit::Visibility,
};

const DEFAULT_LIMIT: u64 = 100;

/// Pagination, ordering and visibility for a list query.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ListParams<O> {
    pub skip: u64,
    pub limit: u64,
    pub visibility: Visibility,
    pub order_by: O,
    pub direction: SortDirection,
}

impl<O> ListParams<O> {
    pub fn from_query(query: ListQuery<O>) -> Self {
        Self {
            skip: u64::from(query.skip),
            limit: u64::from(query.limit),
            visibility: Visibility::from_show_deleted(query.show_deleted),
            order_by: query.order_by,
            direction: query.direction,
        }
    }
}

impl<O: Default> Default for ListParams<O> {
    fn default() -> Self {
        Self {
            skip: 0,
            limit: DEFAULT_LIMIT,
            visibility: Visibility::Active,
            order_by: O::default(),
            direction: SortDirection::Asc,
        }
    }
}

/// Brand listing, optionally narrowed to one category.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct BrandListParams {
    pub list: ListParams<BrandOrderBy>,
    pub category_id: Option<Uuid>,
}

impl BrandListParams {
    pub fn from_query(query: BrandListQuery) -> Self {
        Self {
            list: ListParams {
                skip: u64::from(query.skip),
                limit: u64::from(query.limit),
                visibility: Visibility::from_show_deleted(query.show_deleted),
                order_by: query.order_by,
                direction: query.direction,
            },
            category_id: query.category_id,
        }
    }
}
