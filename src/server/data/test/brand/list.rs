use super::*;

/// Tests narrowing the brand listing to one category.
///
/// Expected: Ok with only the brands of the requested category
#[tokio::test]
async fn filters_by_category() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_brand_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::user::create_user(db).await?;
    let electronics = factory::category::create_category(db, user.id).await?;
    let books = factory::category::create_category(db, user.id).await?;
    let phone = factory::brand::create_brand(db, electronics.id, user.id).await?;
    factory::brand::create_brand(db, books.id, user.id).await?;

    let repo = BrandRepository::new(db);
    let result = repo
        .list(&BrandListParams {
            category_id: Some(electronics.id),
            ..BrandListParams::default()
        })
        .await?;

    assert_eq!(result.len(), 1);
    assert_eq!(result[0].id, phone.id);

    Ok(())
}

/// Tests ordering brands by price level.
///
/// Expected: Ok with Low before Medium before High
#[tokio::test]
async fn orders_by_average_price() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_brand_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::user::create_user(db).await?;
    let category = factory::category::create_category(db, user.id).await?;
    for price in [AveragePrice::High, AveragePrice::Low, AveragePrice::Medium] {
        factory::brand::BrandFactory::new(db, category.id, user.id)
            .average_price(price)
            .build()
            .await?;
    }

    let repo = BrandRepository::new(db);
    let result = repo
        .list(&BrandListParams {
            list: ListParams {
                order_by: BrandOrderBy::AveragePrice,
                ..ListParams::default()
            },
            category_id: None,
        })
        .await?;

    let prices: Vec<_> = result.into_iter().map(|b| b.average_price).collect();
    assert_eq!(
        prices,
        vec![
            Some(AveragePrice::Low),
            Some(AveragePrice::Medium),
            Some(AveragePrice::High)
        ]
    );

    Ok(())
}
