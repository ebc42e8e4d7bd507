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
        query::{ListQuery, NameOrderBy, ShowDeletedQuery, SortDirection},
        social::{CreateSocialDto, SocialListDto, UpdateSocialDto},
    },
    server::{
        error::AppError,
        middleware::auth::AuthUser,
        model::{
            audit::Visibility,
            params::ListParams,
            social::{CreateSocialParams, Social, UpdateSocialParams},
        },
        service::social::SocialService,
        state::AppState,
        util::extract::{ApiJson, ApiPath, ApiQuery},
    },
};

/// Tag for grouping social network endpoints in OpenAPI documentation
pub static SOCIAL_TAG: &str = "social";

fn list_dto(socials: Vec<Social>) -> Json<SocialListDto> {
    Json(SocialListDto {
        socials: socials.into_iter().map(Social::into_dto).collect(),
    })
}

/// Create a new social network.
///
/// # Returns
/// - `201 Created` - The created social network
/// - `400 Bad Request` - An active social network already has this name
/// - `401 Unauthorized` - Missing or expired token
/// - `422 Unprocessable Entity` - Invalid or unknown fields
#[utoipa::path(
    post,
    path = "/socials",
    tag = SOCIAL_TAG,
    request_body = CreateSocialDto,
    security(("bearer" = [])),
    responses(
        (status = 201, description = "Successfully created social network", body = SocialListDto),
        (status = 400, description = "Social name already taken", body = ErrorDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 422, description = "Invalid request body", body = ValidationErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_social(
    State(state): State<AppState>,
    AuthUser(user): AuthUser,
    ApiJson(payload): ApiJson<CreateSocialDto>,
) -> Result<impl IntoResponse, AppError> {
    let service = SocialService::new(&state.db, state.audit_policy);

    let social = service
        .create(CreateSocialParams::from_dto(payload), user.id)
        .await?;

    Ok((StatusCode::CREATED, list_dto(vec![social])))
}

/// List social networks.
#[utoipa::path(
    get,
    path = "/socials",
    tag = SOCIAL_TAG,
    params(
        ("skip" = Option<u32>, Query, description = "Rows to skip (default: 0)"),
        ("limit" = Option<u32>, Query, description = "Maximum rows (default: 100)"),
        ("show_deleted" = Option<bool>, Query, description = "Include soft-deleted social networks"),
        ("order_by" = Option<NameOrderBy>, Query, description = "Sort column (default: created_at)"),
        ("direction" = Option<SortDirection>, Query, description = "asc or desc")
    ),
    security(("bearer" = [])),
    responses(
        (status = 200, description = "Page of social networks", body = SocialListDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 422, description = "Invalid query", body = ValidationErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_socials(
    State(state): State<AppState>,
    AuthUser(_user): AuthUser,
    ApiQuery(query): ApiQuery<ListQuery<NameOrderBy>>,
) -> Result<impl IntoResponse, AppError> {
    let service = SocialService::new(&state.db, state.audit_policy);

    let socials = service.list(&ListParams::from_query(query)).await?;

    Ok((StatusCode::OK, list_dto(socials)))
}

/// Get a social network by id.
#[utoipa::path(
    get,
    path = "/socials/{id}",
    tag = SOCIAL_TAG,
    params(
        ("id" = Uuid, Path, description = "Social id"),
        ("show_deleted" = Option<bool>, Query, description = "Also find a soft-deleted social network")
    ),
    security(("bearer" = [])),
    responses(
        (status = 200, description = "The social network", body = SocialListDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 404, description = "Social not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_social(
    State(state): State<AppState>,
    AuthUser(_user): AuthUser,
    ApiPath(id): ApiPath<Uuid>,
    ApiQuery(query): ApiQuery<ShowDeletedQuery>,
) -> Result<impl IntoResponse, AppError> {
    let service = SocialService::new(&state.db, state.audit_policy);

    let social = service
        .get(id, Visibility::from_show_deleted(query.show_deleted))
        .await?;

    Ok((StatusCode::OK, list_dto(vec![social])))
}

/// Rename a social network.
#[utoipa::path(
    patch,
    path = "/socials/{id}",
    tag = SOCIAL_TAG,
    params(("id" = Uuid, Path, description = "Social id")),
    request_body = UpdateSocialDto,
    security(("bearer" = [])),
    responses(
        (status = 200, description = "The updated social network", body = SocialListDto),
        (status = 400, description = "Social name already taken", body = ErrorDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 404, description = "Social not found", body = ErrorDto),
        (status = 422, description = "Empty or invalid request body", body = ValidationErrorDto)
    ),
)]
pub async fn update_social(
    State(state): State<AppState>,
    AuthUser(user): AuthUser,
    ApiPath(id): ApiPath<Uuid>,
    ApiJson(payload): ApiJson<UpdateSocialDto>,
) -> Result<impl IntoResponse, AppError> {
    let service = SocialService::new(&state.db, state.audit_policy);

    let social = service
        .update(UpdateSocialParams::from_dto(id, payload), user.id)
        .await?;

    Ok((StatusCode::OK, list_dto(vec![social])))
}

/// Soft-delete a social network.
#[utoipa::path(
    delete,
    path = "/socials/{id}",
    tag = SOCIAL_TAG,
    params(("id" = Uuid, Path, description = "Social id")),
    security(("bearer" = [])),
    responses(
        (status = 200, description = "The deleted social network", body = SocialListDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 404, description = "Social not found", body = ErrorDto)
    ),
)]
pub async fn delete_social(
    State(state): State<AppState>,
    AuthUser(user): AuthUser,
    ApiPath(id): ApiPath<Uuid>,
) -> Result<impl IntoResponse, AppError> {
    let service = SocialService::new(&state.db, state.audit_policy);

    let social = service.delete(id, user.id).await?;

    Ok((StatusCode::OK, list_dto(vec![social])))
}
