use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

use super::{lenient, strict};
use crate::server::{
    error::AppError,
    model::{
        audit::Visibility,
        category::{CreateCategoryParams, UpdateCategoryParams},
    },
    service::category::CategoryService,
};

/// Tests that a duplicate active name is rejected before reaching the store.
///
/// Expected: Err(AppError::Conflict)
#[tokio::test]
async fn create_rejects_active_duplicate() -> Result<(), DbErr> {
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

    let service = CategoryService::new(db, strict());
    let result = service
        .create(
            CreateCategoryParams {
                name: "Electronics".to_string(),
            },
            user.id,
        )
        .await;

    match result {
        Err(AppError::Conflict(msg)) => {
            assert_eq!(msg, "Category with this name already exists")
        }
        other => panic!("expected conflict, got {:?}", other),
    }

    Ok(())
}

/// Tests that renaming a category to its current name is not a conflict.
///
/// Expected: Ok
#[tokio::test]
async fn update_to_own_name_is_allowed() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_category_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::user::create_user(db).await?;
    let category = factory::category::create_category(db, user.id).await?;

    let service = CategoryService::new(db, strict());
    let result = service
        .update(
            UpdateCategoryParams {
                id: category.id,
                name: Some(category.name.clone()),
            },
            user.id,
        )
        .await;

    assert!(result.is_ok());

    Ok(())
}

/// Tests the update-after-delete policy.
///
/// Expected: NotFound under the strict policy and Ok under the lenient one
#[tokio::test]
async fn update_of_deleted_category_follows_policy() -> Result<(), DbErr> {
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
    let params = UpdateCategoryParams {
        id: category.id,
        name: Some("Revived".to_string()),
    };

    let strict_result = CategoryService::new(db, strict())
        .update(params.clone(), user.id)
        .await;
    assert!(matches!(strict_result, Err(AppError::NotFound(_))));

    let updated = CategoryService::new(db, lenient())
        .update(params, user.id)
        .await
        .unwrap();
    assert_eq!(updated.name, "Revived");
    assert!(updated.audit.is_deleted());

    Ok(())
}

/// Tests that deleting twice reports the second attempt as not found.
///
/// Expected: Ok then Err(AppError::NotFound)
#[tokio::test]
async fn delete_is_terminal() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_category_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::user::create_user(db).await?;
    let category = factory::category::create_category(db, user.id).await?;

    let service = CategoryService::new(db, lenient());
    assert!(service.delete(category.id, user.id).await.is_ok());
    assert!(matches!(
        service.delete(category.id, user.id).await,
        Err(AppError::NotFound(_))
    ));

    let found = service.get(category.id, Visibility::All).await.unwrap();
    assert!(found.audit.is_deleted());

    Ok(())
}
