use super::*;

/// Tests renaming and then soft-deleting a social network.
///
/// Expected: Ok with the full audit trail filled in
#[tokio::test]
async fn rename_then_delete_fills_trail() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_social_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::user::create_user(db).await?;
    let social = factory::social::create_social(db, user.id).await?;

    let repo = SocialRepository::new(db);
    repo.update(
        UpdateSocialParams {
            id: social.id,
            name: Some("Threads".to_string()),
        },
        user.id,
    )
    .await?;
    let deleted = repo.soft_delete(social.id, user.id).await?;

    assert_eq!(deleted.name, "Threads");
    assert!(deleted.audit.updated.is_some());
    assert!(deleted.audit.deleted.is_some());

    Ok(())
}
