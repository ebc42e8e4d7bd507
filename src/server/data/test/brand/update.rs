use super::*;

/// Tests that a partial update only touches the given fields.
///
/// Expected: Ok with new name, moved category and untouched website
#[tokio::test]
async fn updates_only_given_fields() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_brand_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::user::create_user(db).await?;
    let old_category = factory::category::create_category(db, user.id).await?;
    let new_category = factory::category::create_category(db, user.id).await?;
    let brand = factory::brand::BrandFactory::new(db, old_category.id, user.id)
        .website("acme.example")
        .build()
        .await?;

    let repo = BrandRepository::new(db);
    let updated = repo
        .update(
            UpdateBrandParams {
                id: brand.id,
                name: Some("Acme Corp".to_string()),
                category_id: Some(new_category.id),
                ..UpdateBrandParams::default()
            },
            user.id,
        )
        .await?;

    assert_eq!(updated.name, "Acme Corp");
    assert_eq!(updated.category.id, new_category.id);
    assert_eq!(updated.website.as_deref(), Some("acme.example"));
    assert!(updated.audit.updated.is_some());

    Ok(())
}

/// Tests soft-deleting a brand.
///
/// Expected: Ok with the brand hidden from active lookups
#[tokio::test]
async fn soft_delete_hides_brand() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_brand_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (user, _category, brand) = factory::helpers::create_brand_with_dependencies(db).await?;

    let repo = BrandRepository::new(db);
    let deleted = repo.soft_delete(brand.id, user.id).await?;

    assert!(deleted.audit.is_deleted());
    assert!(repo
        .find(BrandLookup::ById(brand.id), Visibility::Active)
        .await?
        .is_none());

    Ok(())
}
