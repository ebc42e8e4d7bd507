use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};

use crate::{
    model::{
        api::{ErrorDto, ValidationErrorDto},
        auth::{LoginDto, RefreshDto, TokenDto},
        user::{SignupDto, UserListDto},
    },
    server::{
        error::AppError,
        model::user::{SignupParams, UserFieldVisibility},
        service::auth::AuthService,
        state::AppState,
        util::extract::{ApiForm, ApiJson},
    },
};

/// Tag for grouping authentication endpoints in OpenAPI documentation
pub static AUTH_TAG: &str = "auth";

/// Register a new user.
///
/// The new user is recorded as its own creator. The response includes the email since
/// the caller is the user being created.
///
/// # Returns
/// - `201 Created` - The created user
/// - `400 Bad Request` - Username or email already taken
/// - `422 Unprocessable Entity` - Invalid or unknown fields
#[utoipa::path(
    post,
    path = "/signup",
    tag = AUTH_TAG,
    request_body = SignupDto,
    responses(
        (status = 201, description = "Successfully created user", body = UserListDto),
        (status = 400, description = "Username or email already taken", body = ErrorDto),
        (status = 422, description = "Invalid request body", body = ValidationErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn signup(
    State(state): State<AppState>,
    ApiJson(payload): ApiJson<SignupDto>,
) -> Result<impl IntoResponse, AppError> {
    let service = AuthService::new(&state.db, &state.tokens);

    let user = service.signup(SignupParams::from_dto(payload)).await?;

    Ok((
        StatusCode::CREATED,
        Json(UserListDto {
            users: vec![user.into_dto(UserFieldVisibility::Private)],
        }),
    ))
}

/// Exchange a username and password for a bearer token pair.
///
/// Takes an `application/x-www-form-urlencoded` body.
#[utoipa::path(
    post,
    path = "/login",
    tag = AUTH_TAG,
    request_body(content = LoginDto, content_type = "application/x-www-form-urlencoded"),
    responses(
        (status = 200, description = "Token pair issued", body = TokenDto),
        (status = 400, description = "Incorrect username or password", body = ErrorDto),
        (status = 422, description = "Missing form fields", body = ValidationErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn login(
    State(state): State<AppState>,
    ApiForm(payload): ApiForm<LoginDto>,
) -> Result<impl IntoResponse, AppError> {
    let service = AuthService::new(&state.db, &state.tokens);

    let pair = service.login(&payload.username, &payload.password).await?;

    Ok((StatusCode::OK, Json(pair.into_dto())))
}

/// Exchange a refresh token for a new token pair.
#[utoipa::path(
    post,
    path = "/refresh",
    tag = AUTH_TAG,
    request_body = RefreshDto,
    responses(
        (status = 200, description = "Token pair issued", body = TokenDto),
        (status = 401, description = "Refresh token expired or user not found", body = ErrorDto),
        (status = 403, description = "Refresh token invalid", body = ErrorDto),
        (status = 422, description = "Invalid request body", body = ValidationErrorDto)
    ),
)]
pub async fn refresh(
    State(state): State<AppState>,
    ApiJson(payload): ApiJson<RefreshDto>,
) -> Result<impl IntoResponse, AppError> {
    let service = AuthService::new(&state.db, &state.tokens);

    let pair = service.refresh(&payload.refresh_token).await?;

    Ok((StatusCode::OK, Json(pair.into_dto())))
}
