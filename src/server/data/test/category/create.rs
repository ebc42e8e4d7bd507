use super::*;

/// Tests creating a category.
///
/// Verifies that the repository stores the category with the creating user resolved in
/// its audit trail and nothing else stamped.
///
/// Expected: Ok with category created
#[tokio::test]
async fn creates_category() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_category_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::user::create_user(db).await?;

    let repo = CategoryRepository::new(db);
    let category = repo
        .create(
            CreateCategoryParams {
                name: "Electronics".to_string(),
            },
            user.id,
        )
        .await?;

    assert_eq!(category.name, "Electronics");
    assert_eq!(category.audit.created.by.id, user.id);
    assert_eq!(category.audit.created.by.username, user.username);
    assert!(category.audit.updated.is_none());
    assert!(category.audit.deleted.is_none());

    let stored = entity::prelude::Category::find_by_id(category.id)
        .one(db)
        .await?;
    assert!(stored.is_some());

    Ok(())
}

/// Tests that the partial unique index rejects a duplicate active name.
///
/// Expected: Err with a unique constraint violation
#[tokio::test]
async fn rejects_duplicate_active_name() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_category_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::user::create_user(db).await?;
    factory::category::CategoryFactory::new(db, user.id)
        .name("Electronics")
        .build()
        .await?;

    let repo = CategoryRepository::new(db);
    let result = repo
        .create(
            CreateCategoryParams {
                name: "Electronics".to_string(),
            },
            user.id,
        )
        .await;

    assert!(matches!(
        result.map_err(|e| e.sql_err()),
        Err(Some(sea_orm::SqlErr::UniqueConstraintViolation(_)))
    ));

    Ok(())
}

/// Tests that a name held only by a soft-deleted category can be reused.
///
/// Expected: Ok with new category created
#[tokio::test]
async fn reuses_name_of_deleted_category() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_category_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::user::create_user(db).await?;
    factory::category::CategoryFactory::new(db, user.id)
        .name("Electronics")
        .deleted_by(user.id)
        .build()
        .await?;

    let repo = CategoryRepository::new(db);
    let result = repo
        .create(
            CreateCategoryParams {
                name: "Electronics".to_string(),
            },
            user.id,
        )
        .await;

    assert!(result.is_ok());

    Ok(())
}
