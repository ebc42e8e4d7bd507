use axum::http::{Method, StatusCode};
use chrono::Duration;
use serde_json::json;

use super::{app, get_request, json_request, send};

/// Tests a method the `/users` route does not serve.
///
/// Expected: 405 with a `detail` body
#[tokio::test]
async fn post_to_users_is_not_allowed() {
    let (_test, app) = app(Duration::minutes(30)).await;

    let (status, body) = send(
        &app,
        json_request(Method::POST, "/users", None, json!({"username": "nobody"})),
    )
    .await;

    assert_eq!(status, StatusCode::METHOD_NOT_ALLOWED);
    assert_eq!(body["detail"], "Method Not Allowed");
}

/// Tests a path no route matches.
///
/// Expected: 404 with a `detail` body
#[tokio::test]
async fn unknown_path_is_not_found() {
    let (_test, app) = app(Duration::minutes(30)).await;

    let (status, body) = send(&app, get_request("/nowhere", None)).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["detail"], "Not Found");
}

/// Tests a path segment that is not a uuid.
///
/// Expected: 422
#[tokio::test]
async fn malformed_id_is_rejected() {
    let (_test, app) = app(Duration::minutes(30)).await;

    let (status, body) = send(&app, get_request("/categories/not-a-uuid", None)).await;

    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert!(body["message"][0].as_str().unwrap().starts_with("path: "));
}

/// Tests that the OpenAPI document is served and declares the bearer scheme.
///
/// Expected: 200 with `components.securitySchemes.bearer`
#[tokio::test]
async fn serves_openapi_document() {
    let (_test, app) = app(Duration::minutes(30)).await;

    let (status, body) = send(&app, get_request("/api-docs/openapi.json", None)).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["info"]["title"], "Brands API");
    assert!(body["components"]["securitySchemes"]["bearer"].is_object());
    assert!(body["paths"]["/brands/{id}/socials/{social_link_id}"].is_object());
}

/// Tests a page size beyond what the store can bind.
///
/// Expected: 422 reported against the query string
#[tokio::test]
async fn oversized_limit_is_rejected() {
    let (_test, app) = app(Duration::minutes(30)).await;

    let (status, body) = send(
        &app,
        get_request("/categories?limit=18446744073709551615", None),
    )
    .await;

    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert!(body["message"][0].as_str().unwrap().starts_with("query: "));
}
