use super::*;

/// Tests that two consecutive pages are disjoint and follow the requested order.
///
/// Expected: Ok with pages [A, B] and [C, D] when ordering by name ascending
#[tokio::test]
async fn pages_are_disjoint_and_ordered() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_category_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::user::create_user(db).await?;
    for name in ["D", "B", "A", "C", "E"] {
        factory::category::CategoryFactory::new(db, user.id)
            .name(name)
            .build()
            .await?;
    }

    let repo = CategoryRepository::new(db);
    let params = ListParams {
        limit: 2,
        order_by: NameOrderBy::Name,
        ..ListParams::default()
    };

    let first = repo.list(&params).await?;
    let second = repo
        .list(&ListParams {
            skip: 2,
            ..params
        })
        .await?;

    let first: Vec<_> = first.into_iter().map(|c| c.name).collect();
    let second: Vec<_> = second.into_iter().map(|c| c.name).collect();
    assert_eq!(first, vec!["A", "B"]);
    assert_eq!(second, vec!["C", "D"]);

    Ok(())
}

/// Tests descending order.
///
/// Expected: Ok with names in reverse alphabetical order
#[tokio::test]
async fn orders_descending() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_category_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::user::create_user(db).await?;
    for name in ["A", "C", "B"] {
        factory::category::CategoryFactory::new(db, user.id)
            .name(name)
            .build()
            .await?;
    }

    let repo = CategoryRepository::new(db);
    let result = repo
        .list(&ListParams {
            order_by: NameOrderBy::Name,
            direction: SortDirection::Desc,
            ..ListParams::default()
        })
        .await?;

    let names: Vec<_> = result.into_iter().map(|c| c.name).collect();
    assert_eq!(names, vec!["C", "B", "A"]);

    Ok(())
}

/// Tests that deleted categories are only listed with `Visibility::All`.
///
/// Expected: Ok with 1 active and 2 total
#[tokio::test]
async fn excludes_deleted_by_default() -> Result<(), DbErr> {
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

    let repo = CategoryRepository::new(db);

    let active = repo.list(&ListParams::default()).await?;
    let all = repo
        .list(&ListParams {
            visibility: Visibility::All,
            ..ListParams::default()
        })
        .await?;

    assert_eq!(active.len(), 1);
    assert_eq!(all.len(), 2);

    Ok(())
}
