use axum::{
    body::{to_bytes, Body},
    http::{header, Method, Request, StatusCode},
    Router,
};
use chrono::Duration;
use jsonwebtoken::Algorithm;
use serde_json::{json, Value};
use test_utils::{builder::TestBuilder, context::TestContext};
use tower::ServiceExt;

use crate::server::{
    model::audit::AuditPolicy, router::router, service::auth::token::TokenService,
    state::AppState,
};

mod routing;

/// Router over a fresh in-memory database with every table.
///
/// The context is returned so the database outlives the test body.
async fn app(access_ttl: Duration) -> (TestContext, Router) {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.clone().unwrap();

    let tokens = TokenService::new(
        Algorithm::HS256,
        "access-secret",
        "refresh-secret",
        access_ttl,
        Duration::minutes(60),
    );
    let state = AppState::new(
        db,
        tokens,
        AuditPolicy {
            allow_update_after_delete: false,
        },
    );

    (test, router(state))
}

async fn send(app: &Router, request: Request<Body>) -> (StatusCode, Value) {
    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let body = serde_json::from_slice(&bytes).unwrap_or(Value::Null);

    (status, body)
}

fn json_request(method: Method, uri: &str, token: Option<&str>, body: Value) -> Request<Body> {
    let mut builder = Request::builder()
        .method(method)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json");
    if let Some(token) = token {
        builder = builder.header(header::AUTHORIZATION, format!("Bearer {}", token));
    }
    builder.body(Body::from(body.to_string())).unwrap()
}

fn get_request(uri: &str, token: Option<&str>) -> Request<Body> {
    let mut builder = Request::builder().method(Method::GET).uri(uri);
    if let Some(token) = token {
        builder = builder.header(header::AUTHORIZATION, format!("Bearer {}", token));
    }
    builder.body(Body::empty()).unwrap()
}

/// Signs up `username` through the API and returns a fresh access token.
async fn login(app: &Router, username: &str) -> String {
    let (status, _) = send(
        app,
        json_request(
            Method::POST,
            "/signup",
            None,
            json!({"username": username, "password": "Secret123"}),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);

    let form = Request::builder()
        .method(Method::POST)
        .uri("/login")
        .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
        .body(Body::from(format!(
            "username={}&password=Secret123",
            username
        )))
        .unwrap();
    let (status, body) = send(app, form).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["token_type"], "bearer");

    body["access_token"].as_str().unwrap().to_string()
}
