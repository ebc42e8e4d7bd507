use super::*;

/// Tests changing a user's email.
///
/// Expected: Ok with new email and updated pair set
#[tokio::test]
async fn updates_email() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_user_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::user::create_user(db).await?;

    let repo = UserRepository::new(db);
    let updated = repo
        .update(
            UpdateUserParams {
                id: user.id,
                email: Some("changed@example.com".to_string()),
                password_digest: None,
            },
            user.id,
        )
        .await?;

    assert_eq!(updated.email.as_deref(), Some("changed@example.com"));
    assert_eq!(updated.audit.updated.map(|s| s.by.id), Some(user.id));

    Ok(())
}

/// Tests that a soft-deleted user still resolves as an actor on other records.
///
/// Expected: Ok with the deleted user's username in the audit trail
#[tokio::test]
async fn deleted_user_still_resolves_as_actor() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_user_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let admin = factory::user::UserFactory::new(db)
        .username("admin")
        .build()
        .await?;
    let target = factory::user::create_user(db).await?;

    let repo = UserRepository::new(db);
    repo.soft_delete(admin.id, admin.id).await?;

    let updated = repo
        .update(
            UpdateUserParams {
                id: target.id,
                email: None,
                password_digest: None,
            },
            admin.id,
        )
        .await?;

    assert_eq!(
        updated.audit.updated.map(|s| s.by.username),
        Some("admin".to_string())
    );

    Ok(())
}
