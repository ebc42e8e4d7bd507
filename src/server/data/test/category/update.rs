use super::*;

/// Tests updating a category's name.
///
/// Expected: Ok with new name and updated pair stamped by the editor
#[tokio::test]
async fn updates_name_and_stamps_editor() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_category_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let creator = factory::user::create_user(db).await?;
    let editor = factory::user::create_user(db).await?;
    let category = factory::category::create_category(db, creator.id).await?;

    let repo = CategoryRepository::new(db);
    let updated = repo
        .update(
            UpdateCategoryParams {
                id: category.id,
                name: Some("Renamed".to_string()),
            },
            editor.id,
        )
        .await?;

    assert_eq!(updated.name, "Renamed");
    assert_eq!(updated.audit.created.by.id, creator.id);
    assert_eq!(updated.audit.updated.map(|s| s.by.id), Some(editor.id));
    assert!(updated.audit.deleted.is_none());

    Ok(())
}

/// Tests that an update without a name only stamps the record.
///
/// Expected: Ok with name unchanged
#[tokio::test]
async fn update_without_name_keeps_name() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_category_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::user::create_user(db).await?;
    let category = factory::category::create_category(db, user.id).await?;

    let repo = CategoryRepository::new(db);
    let updated = repo
        .update(
            UpdateCategoryParams {
                id: category.id,
                name: None,
            },
            user.id,
        )
        .await?;

    assert_eq!(updated.name, category.name);
    assert!(updated.audit.updated.is_some());

    Ok(())
}

/// Tests updating a category that does not exist.
///
/// Expected: Err(DbErr::RecordNotFound)
#[tokio::test]
async fn fails_for_missing_category() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_category_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::user::create_user(db).await?;

    let repo = CategoryRepository::new(db);
    let result = repo
        .update(
            UpdateCategoryParams {
                id: uuid::Uuid::new_v4(),
                name: Some("Ghost".to_string()),
            },
            user.id,
        )
        .await;

    assert!(matches!(result, Err(DbErr::RecordNotFound(_))));

    Ok(())
}
