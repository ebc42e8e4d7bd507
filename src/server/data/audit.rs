//! Audit stamping, the visibility predicate and actor resolution.
//!
//! Every audited entity implements [`Audited`], which names its audit columns. The
//! functions below only talk to those columns, so the stamping rules are written once for
//! all tables.

use chrono::{DateTime, Utc};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, ConnectionTrait, DbErr, EntityTrait, Order, QueryFilter,
    QueryOrder, QuerySelect, Select,
};
use std::collections::{HashMap, HashSet};
use uuid::Uuid;

use crate::{
    model::query::SortDirection,
    server::model::{
        audit::{Actor, AuditColumns, AuditTrail, Visibility},
        params::ListParams,
    },
};

/// Entity carrying the `created_*`, `updated_*` and `deleted_*` audit columns.
pub trait Audited: EntityTrait {
    const ID: Self::Column;
    const CREATED_AT: Self::Column;
    const CREATED_BY: Self::Column;
    const UPDATED_AT: Self::Column;
    const UPDATED_BY: Self::Column;
    const DELETED_AT: Self::Column;
    const DELETED_BY: Self::Column;

    /// Reads the audit columns of a loaded row.
    fn audit_columns(model: &Self::Model) -> AuditColumns;
}

macro_rules! impl_audited {
    ($($module:ident),+ $(,)?) => {
        $(
            impl Audited for entity::$module::Entity {
                const ID: Self::Column = entity::$module::Column::Id;
                const CREATED_AT: Self::Column = entity::$module::Column::CreatedAt;
                const CREATED_BY: Self::Column = entity::$module::Column::CreatedBy;
                const UPDATED_AT: Self::Column = entity::$module::Column::UpdatedAt;
                const UPDATED_BY: Self::Column = entity::$module::Column::UpdatedBy;
                const DELETED_AT: Self::Column = entity::$module::Column::DeletedAt;
                const DELETED_BY: Self::Column = entity::$module::Column::DeletedBy;

                fn audit_columns(model: &entity::$module::Model) -> AuditColumns {
                    AuditColumns {
                        created_at: model.created_at,
                        created_by: model.created_by,
                        updated_at: model.updated_at,
                        updated_by: model.updated_by,
                        deleted_at: model.deleted_at,
                        deleted_by: model.deleted_by,
                    }
                }
            }
        )+
    };
}

impl_audited!(user, category, brand, social, brand_social);

/// Stamps a new record: `created_at`/`created_by` set, every other audit column null.
pub fn stamp_created<A>(model: &mut A, actor: Uuid, now: DateTime<Utc>)
where
    A: ActiveModelTrait,
    A::Entity: Audited,
{
    model.set(<A::Entity as Audited>::CREATED_AT, now.into());
    model.set(<A::Entity as Audited>::CREATED_BY, actor.into());
    model.set(<A::Entity as Audited>::UPDATED_AT, Option::<DateTime<Utc>>::None.into());
    model.set(<A::Entity as Audited>::UPDATED_BY, Option::<Uuid>::None.into());
    model.set(<A::Entity as Audited>::DELETED_AT, Option::<DateTime<Utc>>::None.into());
    model.set(<A::Entity as Audited>::DELETED_BY, Option::<Uuid>::None.into());
}

/// Stamps an update. `created_*` and `deleted_*` are left untouched.
pub fn stamp_updated<A>(model: &mut A, actor: Uuid, now: DateTime<Utc>)
where
    A: ActiveModelTrait,
    A::Entity: Audited,
{
    model.set(<A::Entity as Audited>::UPDATED_AT, Some(now).into());
    model.set(<A::Entity as Audited>::UPDATED_BY, Some(actor).into());
}

/// Stamps a soft-delete. No other column is touched.
pub fn stamp_deleted<A>(model: &mut A, actor: Uuid, now: DateTime<Utc>)
where
    A: ActiveModelTrait,
    A::Entity: Audited,
{
    model.set(<A::Entity as Audited>::DELETED_AT, Some(now).into());
    model.set(<A::Entity as Audited>::DELETED_BY, Some(actor).into());
}

/// Applies the visibility predicate to a query.
///
/// `Active` keeps rows whose `deleted_at` is null; `All` adds no condition at all.
pub fn visible<E: Audited>(select: Select<E>, visibility: Visibility) -> Select<E> {
    match visibility {
        Visibility::Active => select.filter(E::DELETED_AT.is_null()),
        Visibility::All => select,
    }
}

/// Applies visibility, ordering and pagination from list parameters.
///
/// Rows are sorted by `column` then by id in the same direction, so pages taken with
/// successive `skip` values never overlap.
pub fn paginate<E: Audited, O>(
    select: Select<E>,
    params: &ListParams<O>,
    column: E::Column,
) -> Select<E> {
    let order = match params.direction {
        SortDirection::Asc => Order::Asc,
        SortDirection::Desc => Order::Desc,
    };

    visible(select, params.visibility)
        .order_by(column, order.clone())
        .order_by(E::ID, order)
        .offset(params.skip)
        .limit(params.limit)
}

/// Loads every user referenced by the given audit columns, deleted or not.
///
/// # Arguments
/// - `db` - Connection or transaction
/// - `columns` - Audit columns of the rows being converted
///
/// # Returns
/// - `Ok(HashMap)` - Actors keyed by user id
/// - `Err(DbErr)` - Database error
pub async fn load_actors<C: ConnectionTrait>(
    db: &C,
    columns: &[AuditColumns],
) -> Result<HashMap<Uuid, Actor>, DbErr> {
    let ids: HashSet<Uuid> = columns.iter().flat_map(AuditColumns::actor_ids).collect();

    if ids.is_empty() {
        return Ok(HashMap::new());
    }

    Ok(entity::prelude::User::find()
        .filter(entity::user::Column::Id.is_in(ids))
        .all(db)
        .await?
        .into_iter()
        .map(|user| {
            (
                user.id,
                Actor {
                    id: user.id,
                    username: user.username,
                },
            )
        })
        .collect())
}

/// Resolves the audit trail of every row, loading all actors with a single query.
pub async fn trails<C: ConnectionTrait, E: Audited>(
    db: &C,
    models: &[E::Model],
) -> Result<Vec<AuditTrail>, DbErr> {
    let columns: Vec<AuditColumns> = models.iter().map(E::audit_columns).collect();
    let actors = load_actors(db, &columns).await?;

    columns
        .into_iter()
        .map(|c| AuditTrail::from_columns(c, &actors))
        .collect()
}
