use axum::http::{header::AUTHORIZATION, HeaderMap, HeaderValue};
use chrono::Duration;
use jsonwebtoken::Algorithm;

use crate::server::{
    error::{auth::AuthError, AppError},
    middleware::auth::AuthGuard,
    service::auth::token::{TokenKind, TokenService},
};
use test_utils::{builder::TestBuilder, factory};

mod require;

fn tokens(access_ttl: Duration) -> TokenService {
    TokenService::new(
        Algorithm::HS256,
        "access-secret",
        "refresh-secret",
        access_ttl,
        Duration::minutes(60),
    )
}

fn bearer(token: &str) -> HeaderMap {
    let mut headers = HeaderMap::new();
    headers.insert(
        AUTHORIZATION,
        HeaderValue::from_str(&format!("Bearer {}", token)).unwrap(),
    );
    headers
}
