use super::*;

/// Tests linking a brand to a social network.
///
/// Expected: Ok with brand and social references resolved
#[tokio::test]
async fn links_brand_to_social() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (user, _category, brand) = factory::helpers::create_brand_with_dependencies(db).await?;
    let social = factory::social::SocialFactory::new(db, user.id)
        .name("Instagram")
        .build()
        .await?;

    let repo = BrandSocialRepository::new(db);
    let link = repo
        .create(
            CreateBrandSocialParams {
                brand_id: brand.id,
                social_id: social.id,
                address: "@acme".to_string(),
            },
            user.id,
        )
        .await?;

    assert_eq!(link.brand.id, brand.id);
    assert_eq!(link.brand.name, brand.name);
    assert_eq!(link.social.name, "Instagram");
    assert_eq!(link.address, "@acme");

    let found = repo
        .find(
            BrandSocialLookup::ByAddress("@acme".to_string()),
            Visibility::Active,
        )
        .await?;
    assert_eq!(found.map(|l| l.id), Some(link.id));

    Ok(())
}
