use super::*;

/// Tests that stamping a creation fills only the created pair.
///
/// Expected: Ok with created_at/created_by set and every other audit column null
#[tokio::test]
async fn stamp_created_sets_only_created_pair() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_category_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::user::create_user(db).await?;
    let now = Utc::now();

    let mut category = entity::category::ActiveModel {
        id: sea_orm::ActiveValue::Set(uuid::Uuid::new_v4()),
        name: sea_orm::ActiveValue::Set("Stamped".to_string()),
        ..Default::default()
    };
    audit::stamp_created(&mut category, user.id, now);
    let model = category.insert(db).await?;

    assert_eq!(model.created_by, user.id);
    assert!(model.updated_at.is_none() && model.updated_by.is_none());
    assert!(model.deleted_at.is_none() && model.deleted_by.is_none());

    Ok(())
}

/// Tests that an update stamp never touches the created or deleted pairs.
///
/// Expected: Ok with created pair unchanged and updated pair set together
#[tokio::test]
async fn stamp_updated_preserves_created_pair() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_category_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let creator = factory::user::create_user(db).await?;
    let editor = factory::user::create_user(db).await?;
    let category = factory::category::create_category(db, creator.id).await?;

    let mut active: entity::category::ActiveModel = category.clone().into();
    audit::stamp_updated(&mut active, editor.id, Utc::now());
    let model = active.update(db).await?;

    assert_eq!(model.created_at, category.created_at);
    assert_eq!(model.created_by, creator.id);
    assert!(model.updated_at.is_some());
    assert_eq!(model.updated_by, Some(editor.id));
    assert!(model.deleted_at.is_none() && model.deleted_by.is_none());

    Ok(())
}

/// Tests that a delete stamp leaves the row in place with the deleted pair set.
///
/// Expected: Ok with row still present and deleted pair populated
#[tokio::test]
async fn stamp_deleted_keeps_row() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_category_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::user::create_user(db).await?;
    let category = factory::category::create_category(db, user.id).await?;

    let mut active: entity::category::ActiveModel = category.clone().into();
    audit::stamp_deleted(&mut active, user.id, Utc::now());
    active.update(db).await?;

    let stored = entity::prelude::Category::find_by_id(category.id)
        .one(db)
        .await?
        .unwrap();
    assert!(stored.deleted_at.is_some());
    assert_eq!(stored.deleted_by, Some(user.id));
    assert_eq!(stored.name, category.name);
    assert!(stored.updated_at.is_none());

    Ok(())
}
