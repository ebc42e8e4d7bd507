use super::*;

/// Tests moving a link to another social network and changing its address.
///
/// Expected: Ok with the new social and address
#[tokio::test]
async fn moves_link_to_other_social() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (user, brand, _social, link) =
        factory::helpers::create_brand_social_with_dependencies(db).await?;
    let other = factory::social::create_social(db, user.id).await?;

    let repo = BrandSocialRepository::new(db);
    let updated = repo
        .update(
            UpdateBrandSocialParams {
                brand_id: brand.id,
                id: link.id,
                social_id: Some(other.id),
                address: Some("@moved".to_string()),
            },
            user.id,
        )
        .await?;

    assert_eq!(updated.social.id, other.id);
    assert_eq!(updated.address, "@moved");
    assert_eq!(updated.brand.id, brand.id);

    Ok(())
}

/// Tests that a soft-deleted link's address can be used again.
///
/// Expected: Ok for the second link
#[tokio::test]
async fn reuses_address_of_deleted_link() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (user, brand, social, link) =
        factory::helpers::create_brand_social_with_dependencies(db).await?;

    let repo = BrandSocialRepository::new(db);
    repo.soft_delete(link.id, user.id).await?;

    let result = repo
        .create(
            CreateBrandSocialParams {
                brand_id: brand.id,
                social_id: social.id,
                address: link.address.clone(),
            },
            user.id,
        )
        .await;

    assert!(result.is_ok());

    Ok(())
}
