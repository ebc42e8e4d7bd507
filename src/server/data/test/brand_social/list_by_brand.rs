use super::*;

/// Tests that listing only returns the links of the requested brand.
///
/// Expected: Ok with the brand's two links ordered by address
#[tokio::test]
async fn lists_links_of_one_brand() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (user, category, brand) = factory::helpers::create_brand_with_dependencies(db).await?;
    let other = factory::brand::create_brand(db, category.id, user.id).await?;
    let social = factory::social::create_social(db, user.id).await?;

    for address in ["@zeta", "@alpha"] {
        factory::brand_social::BrandSocialFactory::new(db, brand.id, social.id, user.id)
            .address(address)
            .build()
            .await?;
    }
    factory::brand_social::create_brand_social(db, other.id, social.id, user.id).await?;

    let repo = BrandSocialRepository::new(db);
    let result = repo
        .list_by_brand(
            brand.id,
            &ListParams {
                order_by: BrandSocialOrderBy::Address,
                ..ListParams::default()
            },
        )
        .await?;

    let addresses: Vec<_> = result.into_iter().map(|l| l.address).collect();
    assert_eq!(addresses, vec!["@alpha", "@zeta"]);

    Ok(())
}
