use super::*;

/// Tests that a valid access token resolves to its user.
///
/// Expected: Ok(User) with matching id
#[tokio::test]
async fn resolves_active_user() -> Result<(), AppError> {
    let test = TestBuilder::new().with_user_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let tokens = tokens(Duration::minutes(5));

    let user = factory::user::create_user(db).await?;
    let token = tokens.issue(TokenKind::Access, user.id)?;
    let headers = bearer(&token);

    let result = AuthGuard::new(db, &tokens, &headers).require().await?;

    assert_eq!(result.id, user.id);

    Ok(())
}

/// Tests a request without an Authorization header.
///
/// Expected: Err(AuthError::MissingToken)
#[tokio::test]
async fn rejects_missing_header() -> Result<(), AppError> {
    let test = TestBuilder::new().with_user_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let tokens = tokens(Duration::minutes(5));
    let headers = HeaderMap::new();

    let result = AuthGuard::new(db, &tokens, &headers).require().await;

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::MissingToken))
    ));

    Ok(())
}

/// Tests a non-bearer Authorization scheme.
///
/// Expected: Err(AuthError::MissingToken)
#[tokio::test]
async fn rejects_basic_scheme() -> Result<(), AppError> {
    let test = TestBuilder::new().with_user_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let tokens = tokens(Duration::minutes(5));
    let mut headers = HeaderMap::new();
    headers.insert(AUTHORIZATION, HeaderValue::from_static("Basic dXNlcjpwYXNz"));

    let result = AuthGuard::new(db, &tokens, &headers).require().await;

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::MissingToken))
    ));

    Ok(())
}

/// Tests an expired access token.
///
/// Expected: Err(AuthError::TokenExpired)
#[tokio::test]
async fn rejects_expired_token() -> Result<(), AppError> {
    let test = TestBuilder::new().with_user_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let tokens = tokens(Duration::minutes(-5));

    let user = factory::user::create_user(db).await?;
    let token = tokens.issue(TokenKind::Access, user.id)?;
    let headers = bearer(&token);

    let result = AuthGuard::new(db, &tokens, &headers).require().await;

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::TokenExpired))
    ));

    Ok(())
}

/// Tests a token whose subject was soft-deleted after it was issued.
///
/// Expected: Err(AuthError::UserNotFound)
#[tokio::test]
async fn rejects_deleted_user() -> Result<(), AppError> {
    let test = TestBuilder::new().with_user_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let tokens = tokens(Duration::minutes(5));

    let admin = factory::user::create_user(db).await?;
    let user = factory::user::UserFactory::new(db)
        .deleted_by(admin.id)
        .build()
        .await?;
    let token = tokens.issue(TokenKind::Access, user.id)?;
    let headers = bearer(&token);

    let result = AuthGuard::new(db, &tokens, &headers).require().await;

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::UserNotFound(_)))
    ));

    Ok(())
}

/// Tests a token issued before its user was soft-deleted and the username taken again.
///
/// Expected: Err(AuthError::UserNotFound), the new holder of the name is not resolved
#[tokio::test]
async fn rejects_token_after_username_reuse() -> Result<(), AppError> {
    let test = TestBuilder::new().with_user_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let tokens = tokens(Duration::minutes(5));

    let admin = factory::user::create_user(db).await?;
    let original = factory::user::UserFactory::new(db)
        .username("alice1")
        .deleted_by(admin.id)
        .build()
        .await?;
    let token = tokens.issue(TokenKind::Access, original.id)?;
    factory::user::UserFactory::new(db)
        .username("alice1")
        .build()
        .await?;
    let headers = bearer(&token);

    let result = AuthGuard::new(db, &tokens, &headers).require().await;

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::UserNotFound(_)))
    ));

    Ok(())
}
