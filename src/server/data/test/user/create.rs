use super::*;

/// Tests signing up a user.
///
/// Expected: Ok with the user recorded as its own creator
#[tokio::test]
async fn created_user_is_its_own_creator() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_user_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = UserRepository::new(db);
    let user = repo
        .create(CreateUserParams {
            username: "newcomer".to_string(),
            email: Some("newcomer@example.com".to_string()),
            password_digest: "digest".to_string(),
        })
        .await?;

    assert_eq!(user.audit.created.by.id, user.id);
    assert_eq!(user.audit.created.by.username, "newcomer");
    assert_eq!(user.email.as_deref(), Some("newcomer@example.com"));

    Ok(())
}

/// Tests that an active username cannot be taken twice.
///
/// Expected: Err with a unique constraint violation
#[tokio::test]
async fn rejects_duplicate_active_username() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_user_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    factory::user::UserFactory::new(db)
        .username("taken")
        .build()
        .await?;

    let repo = UserRepository::new(db);
    let result = repo
        .create(CreateUserParams {
            username: "taken".to_string(),
            email: None,
            password_digest: "digest".to_string(),
        })
        .await;

    assert!(matches!(
        result.map_err(|e| e.sql_err()),
        Err(Some(sea_orm::SqlErr::UniqueConstraintViolation(_)))
    ));

    Ok(())
}

/// Tests ordering users by username.
///
/// Expected: Ok with usernames in ascending order
#[tokio::test]
async fn lists_users_by_username() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_user_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    for username in ["charlie", "alice", "bobby"] {
        factory::user::UserFactory::new(db)
            .username(username)
            .build()
            .await?;
    }

    let repo = UserRepository::new(db);
    let result = repo
        .list(&ListParams {
            order_by: UserOrderBy::Username,
            ..ListParams::default()
        })
        .await?;

    let usernames: Vec<_> = result.into_iter().map(|u| u.username).collect();
    assert_eq!(usernames, vec!["alice", "bobby", "charlie"]);

    Ok(())
}
