use super::*;

/// Tests soft-deleting a category.
///
/// Expected: Ok with deleted pair set and the row still stored
#[tokio::test]
async fn stamps_deletion_without_removing_row() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_category_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let creator = factory::user::create_user(db).await?;
    let deleter = factory::user::create_user(db).await?;
    let category = factory::category::create_category(db, creator.id).await?;

    let repo = CategoryRepository::new(db);
    let deleted = repo.soft_delete(category.id, deleter.id).await?;

    assert_eq!(deleted.audit.deleted.as_ref().map(|s| s.by.id), Some(deleter.id));
    assert!(deleted.audit.updated.is_none());

    let stored = entity::prelude::Category::find_by_id(category.id)
        .one(db)
        .await?
        .unwrap();
    assert!(stored.deleted_at.is_some());
    assert_eq!(stored.deleted_by, Some(deleter.id));

    Ok(())
}
