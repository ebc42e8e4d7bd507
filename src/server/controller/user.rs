use axum::{
    extract::State,
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use uuid::Uuid;

use crate::{
    model::{
        api::{ErrorDto, ValidationErrorDto},
        query::{ListQuery, ShowDeletedQuery, SortDirection, UserOrderBy},
        user::{UpdateUserDto, UserListDto},
    },
    server::{
        error::AppError,
        middleware::auth::AuthUser,
        model::{
            audit::Visibility,
            params::ListParams,
            user::{ChangeUserParams, User, UserFieldVisibility},
        },
        service::user::UserService,
        state::AppState,
        util::extract::{ApiJson, ApiPath, ApiQuery},
    },
};

/// Tag for grouping user endpoints in OpenAPI documentation
pub static USER_TAG: &str = "user";

/// Projects users for `viewer`: their own record is private, everyone else is public.
fn list_dto(viewer: Uuid, users: Vec<User>) -> Json<UserListDto> {
    Json(UserListDto {
        users: users
            .into_iter()
            .map(|user| {
                let visibility = if user.id == viewer {
                    UserFieldVisibility::Private
                } else {
                    UserFieldVisibility::Public
                };
                user.into_dto(visibility)
            })
            .collect(),
    })
}

/// List users.
///
/// Emails are only included for the caller's own record.
#[utoipa::path(
    get,
    path = "/users",
    tag = USER_TAG,
    params(
        ("skip" = Option<u32>, Query, description = "Rows to skip (default: 0)"),
        ("limit" = Option<u32>, Query, description = "Maximum rows (default: 100)"),
        ("show_deleted" = Option<bool>, Query, description = "Include soft-deleted users"),
        ("order_by" = Option<UserOrderBy>, Query, description = "Sort column (default: created_at)"),
        ("direction" = Option<SortDirection>, Query, description = "asc or desc")
    ),
    security(("bearer" = [])),
    responses(
        (status = 200, description = "Page of users", body = UserListDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 422, description = "Invalid query", body = ValidationErrorDto)
    ),
)]
pub async fn get_users(
    State(state): State<AppState>,
    AuthUser(me): AuthUser,
    ApiQuery(query): ApiQuery<ListQuery<UserOrderBy>>,
) -> Result<impl IntoResponse, AppError> {
    let service = UserService::new(&state.db, state.audit_policy);

    let users = service.list(&ListParams::from_query(query)).await?;

    Ok((StatusCode::OK, list_dto(me.id, users)))
}

/// Get a user by id.
#[utoipa::path(
    get,
    path = "/users/{id}",
    tag = USER_TAG,
    params(
        ("id" = Uuid, Path, description = "User id"),
        ("show_deleted" = Option<bool>, Query, description = "Also find a soft-deleted user")
    ),
    security(("bearer" = [])),
    responses(
        (status = 200, description = "The user", body = UserListDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 404, description = "User not found", body = ErrorDto)
    ),
)]
pub async fn get_user(
    State(state): State<AppState>,
    AuthUser(me): AuthUser,
    ApiPath(id): ApiPath<Uuid>,
    ApiQuery(query): ApiQuery<ShowDeletedQuery>,
) -> Result<impl IntoResponse, AppError> {
    let service = UserService::new(&state.db, state.audit_policy);

    let user = service
        .get(id, Visibility::from_show_deleted(query.show_deleted))
        .await?;

    Ok((StatusCode::OK, list_dto(me.id, vec![user])))
}

/// Change a user's email or password.
#[utoipa::path(
    patch,
    path = "/users/{id}",
    tag = USER_TAG,
    params(("id" = Uuid, Path, description = "User id")),
    request_body = UpdateUserDto,
    security(("bearer" = [])),
    responses(
        (status = 200, description = "The updated user", body = UserListDto),
        (status = 400, description = "Email already taken", body = ErrorDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 404, description = "User not found", body = ErrorDto),
        (status = 422, description = "Empty or invalid request body", body = ValidationErrorDto)
    ),
)]
pub async fn update_user(
    State(state): State<AppState>,
    AuthUser(me): AuthUser,
    ApiPath(id): ApiPath<Uuid>,
    ApiJson(payload): ApiJson<UpdateUserDto>,
) -> Result<impl IntoResponse, AppError> {
    let service = UserService::new(&state.db, state.audit_policy);

    let user = service
        .update(ChangeUserParams::from_dto(id, payload), me.id)
        .await?;

    Ok((
        StatusCode::OK,
        Json(UserListDto {
            users: vec![user.into_dto(UserFieldVisibility::Private)],
        }),
    ))
}

/// Soft-delete a user.
#[utoipa::path(
    delete,
    path = "/users/{id}",
    tag = USER_TAG,
    params(("id" = Uuid, Path, description = "User id")),
    security(("bearer" = [])),
    responses(
        (status = 200, description = "The deleted user", body = UserListDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 404, description = "User not found", body = ErrorDto)
    ),
)]
pub async fn delete_user(
    State(state): State<AppState>,
    AuthUser(me): AuthUser,
    ApiPath(id): ApiPath<Uuid>,
) -> Result<impl IntoResponse, AppError> {
    let service = UserService::new(&state.db, state.audit_policy);

    let user = service.delete(id, me.id).await?;

    Ok((StatusCode::OK, list_dto(me.id, vec![user])))
}
