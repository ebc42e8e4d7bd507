use super::*;

/// Tests creating a social network and finding it by name.
///
/// Expected: Ok with the created social found
#[tokio::test]
async fn creates_and_finds_social() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_social_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::user::create_user(db).await?;

    let repo = SocialRepository::new(db);
    let social = repo
        .create(
            CreateSocialParams {
                name: "Instagram".to_string(),
            },
            user.id,
        )
        .await?;

    let found = repo
        .find(
            SocialLookup::ByName("Instagram".to_string()),
            Visibility::Active,
        )
        .await?;

    assert_eq!(found.map(|s| s.id), Some(social.id));

    Ok(())
}

/// Tests that a duplicate active social name is rejected by the store.
///
/// Expected: Err with a unique constraint violation
#[tokio::test]
async fn rejects_duplicate_active_name() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_social_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::user::create_user(db).await?;
    factory::social::SocialFactory::new(db, user.id)
        .name("Instagram")
        .build()
        .await?;

    let repo = SocialRepository::new(db);
    let result = repo
        .create(
            CreateSocialParams {
                name: "Instagram".to_string(),
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

/// Tests listing socials.
///
/// Expected: Ok with both active socials
#[tokio::test]
async fn lists_active_socials() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_social_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::user::create_user(db).await?;
    factory::social::create_social(db, user.id).await?;
    factory::social::create_social(db, user.id).await?;
    factory::social::SocialFactory::new(db, user.id)
        .deleted_by(user.id)
        .build()
        .await?;

    let repo = SocialRepository::new(db);
    let result = repo.list(&ListParams::default()).await?;

    assert_eq!(result.len(), 2);

    Ok(())
}
