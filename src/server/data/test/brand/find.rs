use super::*;

/// Tests finding a brand by website.
///
/// Expected: Ok(Some) with matching id
#[tokio::test]
async fn finds_by_website() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_brand_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::user::create_user(db).await?;
    let category = factory::category::create_category(db, user.id).await?;
    let brand = factory::brand::BrandFactory::new(db, category.id, user.id)
        .website("acme.example")
        .build()
        .await?;

    let repo = BrandRepository::new(db);
    let found = repo
        .find_id(
            BrandLookup::ByWebsite("acme.example".to_string()),
            Visibility::Active,
        )
        .await?;

    assert_eq!(found, Some(brand.id));

    Ok(())
}

/// Tests that a brand keeps resolving its category after the category is deleted.
///
/// Expected: Ok(Some) with the deleted category's name
#[tokio::test]
async fn resolves_deleted_category() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_brand_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::user::create_user(db).await?;
    let category = factory::category::CategoryFactory::new(db, user.id)
        .name("Retired")
        .deleted_by(user.id)
        .build()
        .await?;
    let brand = factory::brand::create_brand(db, category.id, user.id).await?;

    let repo = BrandRepository::new(db);
    let found = repo
        .find(BrandLookup::ById(brand.id), Visibility::Active)
        .await?
        .unwrap();

    assert_eq!(found.category.name, "Retired");

    Ok(())
}
