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
        category::{CategoryListDto, CreateCategoryDto, UpdateCategoryDto},
        query::{ListQuery, NameOrderBy, ShowDeletedQuery, SortDirection},
    },
    server::{
        error::AppError,
        middleware::auth::AuthUser,
        model::{
            audit::Visibility,
            category::{Category, CreateCategoryParams, UpdateCategoryParams},
            params::ListParams,
        },
        service::category::CategoryService,
        state::AppState,
        util::extract::{ApiJson, ApiPath, ApiQuery},
    },
};

/// Tag for grouping category endpoints in OpenAPI documentation
pub static CATEGORY_TAG: &str = "category";

fn list_dto(categories: Vec<Category>) -> Json<CategoryListDto> {
    Json(CategoryListDto {
        categories: categories.into_iter().map(Category::into_dto).collect(),
    })
}

/// Create a new category.
///
/// # Returns
/// - `201 Created` - The created category
/// - `400 Bad Request` - An active category already has this name
/// - `401 Unauthorized` - Missing or expired token
/// - `422 Unprocessable Entity` - Invalid or unknown fields
#[utoipa::path(
    post,
    path = "/categories",
    tag = CATEGORY_TAG,
    request_body = CreateCategoryDto,
    security(("bearer" = [])),
    responses(
        (status = 201, description = "Successfully created category", body = CategoryListDto),
        (status = 400, description = "Category name already taken", body = ErrorDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 422, description = "Invalid request body", body = ValidationErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_category(
    State(state): State<AppState>,
    AuthUser(user): AuthUser,
    ApiJson(payload): ApiJson<CreateCategoryDto>,
) -> Result<impl IntoResponse, AppError> {
    let service = CategoryService::new(&state.db, state.audit_policy);

    let category = service
        .create(CreateCategoryParams::from_dto(payload), user.id)
        .await?;

    Ok((StatusCode::CREATED, list_dto(vec![category])))
}

/// List categories.
#[utoipa::path(
    get,
    path = "/categories",
    tag = CATEGORY_TAG,
    params(
        ("skip" = Option<u32>, Query, description = "Rows to skip (default: 0)"),
        ("limit" = Option<u32>, Query, description = "Maximum rows (default: 100)"),
        ("show_deleted" = Option<bool>, Query, description = "Include soft-deleted categories"),
        ("order_by" = Option<NameOrderBy>, Query, description = "Sort column (default: created_at)"),
        ("direction" = Option<SortDirection>, Query, description = "asc or desc")
    ),
    responses(
        (status = 200, description = "Page of categories", body = CategoryListDto),
        (status = 422, description = "Invalid query", body = ValidationErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_categories(
    State(state): State<AppState>,
    ApiQuery(query): ApiQuery<ListQuery<NameOrderBy>>,
) -> Result<impl IntoResponse, AppError> {
    let service = CategoryService::new(&state.db, state.audit_policy);

    let categories = service.list(&ListParams::from_query(query)).await?;

    Ok((StatusCode::OK, list_dto(categories)))
}

/// Get a category by id.
#[utoipa::path(
    get,
    path = "/categories/{id}",
    tag = CATEGORY_TAG,
    params(
        ("id" = Uuid, Path, description = "Category id"),
        ("show_deleted" = Option<bool>, Query, description = "Also find a soft-deleted category")
    ),
    responses(
        (status = 200, description = "The category", body = CategoryListDto),
        (status = 404, description = "Category not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_category(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<Uuid>,
    ApiQuery(query): ApiQuery<ShowDeletedQuery>,
) -> Result<impl IntoResponse, AppError> {
    let service = CategoryService::new(&state.db, state.audit_policy);

    let category = service
        .get(id, Visibility::from_show_deleted(query.show_deleted))
        .await?;

    Ok((StatusCode::OK, list_dto(vec![category])))
}

/// Rename a category.
#[utoipa::path(
    patch,
    path = "/categories/{id}",
    tag = CATEGORY_TAG,
    params(("id" = Uuid, Path, description = "Category id")),
    request_body = UpdateCategoryDto,
    security(("bearer" = [])),
    responses(
        (status = 200, description = "The updated category", body = CategoryListDto),
        (status = 400, description = "Category name already taken", body = ErrorDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 404, description = "Category not found", body = ErrorDto),
        (status = 422, description = "Empty or invalid request body", body = ValidationErrorDto)
    ),
)]
pub async fn update_category(
    State(state): State<AppState>,
    AuthUser(user): AuthUser,
    ApiPath(id): ApiPath<Uuid>,
    ApiJson(payload): ApiJson<UpdateCategoryDto>,
) -> Result<impl IntoResponse, AppError> {
    let service = CategoryService::new(&state.db, state.audit_policy);

    let category = service
        .update(UpdateCategoryParams::from_dto(id, payload), user.id)
        .await?;

    Ok((StatusCode::OK, list_dto(vec![category])))
}

/// Soft-delete a category.
#[utoipa::path(
    delete,
    path = "/categories/{id}",
    tag = CATEGORY_TAG,
    params(("id" = Uuid, Path, description = "Category id")),
    security(("bearer" = [])),
    responses(
        (status = 200, description = "The deleted category", body = CategoryListDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 404, description = "Category not found", body = ErrorDto)
    ),
)]
pub async fn delete_category(
    State(state): State<AppState>,
    AuthUser(user): AuthUser,
    ApiPath(id): ApiPath<Uuid>,
) -> Result<impl IntoResponse, AppError> {
    let service = CategoryService::new(&state.db, state.audit_policy);

    let category = service.delete(id, user.id).await?;

    Ok((StatusCode::OK, list_dto(vec![category])))
}
