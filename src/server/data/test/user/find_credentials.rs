use super::*;

/// Tests reading the stored digest of an active user.
///
/// Expected: Ok(Some) with the stored digest
#[tokio::test]
async fn returns_digest_of_active_user() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_user_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::user::UserFactory::new(db)
        .username("someone")
        .password_digest("stored-digest")
        .build()
        .await?;

    let repo = UserRepository::new(db);
    let credentials = repo.find_credentials("someone").await?.unwrap();

    assert_eq!(credentials.id, user.id);
    assert_eq!(credentials.password_digest, "stored-digest");

    Ok(())
}

/// Tests that a soft-deleted user has no credentials.
///
/// Expected: Ok(None)
#[tokio::test]
async fn deleted_user_has_no_credentials() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_user_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let admin = factory::user::create_user(db).await?;
    factory::user::UserFactory::new(db)
        .username("gone")
        .deleted_by(admin.id)
        .build()
        .await?;

    let repo = UserRepository::new(db);

    assert!(repo.find_credentials("gone").await?.is_none());
    assert!(repo
        .find_id(UserLookup::ByUsername("gone".to_string()), Visibility::All)
        .await?
        .is_some());

    Ok(())
}
