use super::*;

/// Tests creating a brand with every optional field set.
///
/// Expected: Ok with category reference and price level resolved
#[tokio::test]
async fn creates_brand_with_category_reference() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_brand_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::user::create_user(db).await?;
    let category = factory::category::CategoryFactory::new(db, user.id)
        .name("Electronics")
        .build()
        .await?;

    let repo = BrandRepository::new(db);
    let brand = repo
        .create(
            CreateBrandParams {
                website: Some("acme.example".to_string()),
                description: Some("Gadgets".to_string()),
                average_price: Some(AveragePrice::Medium),
                city: Some("Lisbon".to_string()),
                postal_code: Some("1000-001".to_string()),
                ..create_params("Acme", category.id)
            },
            user.id,
        )
        .await?;

    assert_eq!(brand.name, "Acme");
    assert_eq!(brand.category.id, category.id);
    assert_eq!(brand.category.name, "Electronics");
    assert_eq!(brand.average_price, Some(AveragePrice::Medium));
    assert_eq!(brand.postal_code.as_deref(), Some("1000-001"));
    assert_eq!(brand.audit.created.by.id, user.id);

    Ok(())
}

/// Tests that two active brands cannot share a website.
///
/// Expected: Err with a unique constraint violation
#[tokio::test]
async fn rejects_duplicate_active_website() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_brand_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::user::create_user(db).await?;
    let category = factory::category::create_category(db, user.id).await?;
    factory::brand::BrandFactory::new(db, category.id, user.id)
        .website("acme.example")
        .build()
        .await?;

    let repo = BrandRepository::new(db);
    let result = repo
        .create(
            CreateBrandParams {
                website: Some("acme.example".to_string()),
                ..create_params("Other", category.id)
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

/// Tests that brands without a website do not collide with each other.
///
/// Expected: Ok for both brands
#[tokio::test]
async fn allows_many_brands_without_website() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_brand_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::user::create_user(db).await?;
    let category = factory::category::create_category(db, user.id).await?;

    let repo = BrandRepository::new(db);
    repo.create(create_params("First", category.id), user.id)
        .await?;
    repo.create(create_params("Second", category.id), user.id)
        .await?;

    Ok(())
}
