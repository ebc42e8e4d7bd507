use sea_orm_migration::prelude::*;

/// Creates a unique index over `column` restricted to rows that are not soft-deleted.
///
/// Natural keys only have to be unique among live rows, so a name held by a deleted record
/// can be reused. Both Postgres and SQLite support partial indexes with this syntax.
pub(crate) async fn create(
    manager: &SchemaManager<'_>,
    table: &str,
    column: &str,
) -> Result<(), DbErr> {
    manager
        .get_connection()
        .execute_unprepared(&format!(
            "CREATE UNIQUE INDEX IF NOT EXISTS uq_{table}_{column}_active \
             ON {table} ({column}) WHERE deleted_at IS NULL"
        ))
        .await?;

    Ok(())
}
