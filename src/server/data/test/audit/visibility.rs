use super::*;

/// Tests that the active predicate hides soft-deleted rows and `All` shows them.
///
/// Expected: Ok with 1 row under Active and 2 rows under All
#[tokio::test]
async fn active_hides_deleted_rows() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_category_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::user::create_user(db).await?;
    factory::category::create_category(db, user.id).await?;
    factory::category::CategoryFactory::new(db, user.id)
        .deleted_by(user.id)
        .build()
        .await?;

    let active = audit::visible(entity::prelude::Category::find(), Visibility::Active)
        .all(db)
        .await?;
    let all = audit::visible(entity::prelude::Category::find(), Visibility::All)
        .all(db)
        .await?;

    assert_eq!(active.len(), 1);
    assert_eq!(all.len(), 2);

    Ok(())
}

/// Tests that a freshly created record disappears from the default listing once deleted.
///
/// Expected: Ok with record listed before deletion, hidden after, and visible with All
#[tokio::test]
async fn deleted_record_moves_to_show_deleted_listing() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_category_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::user::create_user(db).await?;
    let repo = CategoryRepository::new(db);

    let created = repo
        .create(
            CreateCategoryParams {
                name: "Electronics".to_string(),
            },
            user.id,
        )
        .await?;
    assert_eq!(repo.list(&ListParams::default()).await?.len(), 1);

    repo.soft_delete(created.id, user.id).await?;

    assert!(repo.list(&ListParams::default()).await?.is_empty());

    let all = repo
        .list(&ListParams {
            visibility: Visibility::All,
            ..ListParams::default()
        })
        .await?;
    assert_eq!(all.len(), 1);
    let deleted = all[0].audit.deleted.as_ref().unwrap();
    assert_eq!(deleted.by.id, user.id);

    Ok(())
}
