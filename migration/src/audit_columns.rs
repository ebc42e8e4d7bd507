use sea_orm_migration::{prelude::*, schema::*};

use super::m20260105_000001_create_user_table::Users;

#[derive(DeriveIden)]
pub enum Audit {
    CreatedAt,
    CreatedBy,
    UpdatedAt,
    UpdatedBy,
    DeletedAt,
    DeletedBy,
}

/// Appends the audit trail columns and their foreign keys to `users` onto a table definition.
///
/// `created_*` is mandatory; the `updated_*` and `deleted_*` pairs start out null.
pub(crate) fn add_to(table: &mut TableCreateStatement, name: &str) {
    table
        .col(timestamp_with_time_zone(Audit::CreatedAt))
        .col(uuid(Audit::CreatedBy))
        .col(timestamp_with_time_zone_null(Audit::UpdatedAt))
        .col(uuid_null(Audit::UpdatedBy))
        .col(timestamp_with_time_zone_null(Audit::DeletedAt))
        .col(uuid_null(Audit::DeletedBy));

    for (column, suffix) in [
        (Audit::CreatedBy, "created_by"),
        (Audit::UpdatedBy, "updated_by"),
        (Audit::DeletedBy, "deleted_by"),
    ] {
        table.foreign_key(
            ForeignKey::create()
                .name(format!("fk_{name}_{suffix}"))
                .from_col(column)
                .to(Users::Table, Users::Id)
                .on_delete(ForeignKeyAction::Restrict)
                .on_update(ForeignKeyAction::Cascade),
        );
    }
}
