use super::*;

/// Tests finding a category by id and by name.
///
/// Expected: Ok(Some) for both lookups
#[tokio::test]
async fn finds_by_id_and_name() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_category_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::user::create_user(db).await?;
    let category = factory::category::CategoryFactory::new(db, user.id)
        .name("Books")
        .build()
        .await?;

    let repo = CategoryRepository::new(db);

    let by_id = repo
        .find(CategoryLookup::ById(category.id), Visibility::Active)
        .await?;
    let by_name = repo
        .find(CategoryLookup::ByName("Books".to_string()), Visibility::Active)
        .await?;

    assert_eq!(by_id.map(|c| c.id), Some(category.id));
    assert_eq!(by_name.map(|c| c.id), Some(category.id));

    Ok(())
}

/// Tests that a soft-deleted category is only found with `Visibility::All`.
///
/// Expected: Ok(None) under Active and Ok(Some) under All
#[tokio::test]
async fn deleted_category_requires_all_visibility() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_category_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::user::create_user(db).await?;
    let category = factory::category::CategoryFactory::new(db, user.id)
        .deleted_by(user.id)
        .build()
        .await?;

    let repo = CategoryRepository::new(db);

    assert!(repo
        .find(CategoryLookup::ById(category.id), Visibility::Active)
        .await?
        .is_none());

    let found = repo
        .find(CategoryLookup::ById(category.id), Visibility::All)
        .await?
        .unwrap();
    assert_eq!(found.audit.deleted.map(|s| s.by.id), Some(user.id));

    Ok(())
}

/// Tests that find_id returns None for an unknown name.
///
/// Expected: Ok(None)
#[tokio::test]
async fn find_id_returns_none_for_unknown_name() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_category_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = CategoryRepository::new(db);
    let result = repo
        .find_id(CategoryLookup::ByName("Nothing".to_string()), Visibility::All)
        .await?;

    assert!(result.is_none());

    Ok(())
}
