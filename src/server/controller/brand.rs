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
        brand::{BrandListDto, CreateBrandDto, UpdateBrandDto},
        query::{BrandListQuery, BrandOrderBy, ShowDeletedQuery, SortDirection},
    },
    server::{
        error::AppError,
        middleware::auth::AuthUser,
        model::{
            audit::Visibility,
            brand::{Brand, CreateBrandParams, UpdateBrandParams},
            params::BrandListParams,
        },
        service::brand::BrandService,
        state::AppState,
        util::extract::{ApiJson, ApiPath, ApiQuery},
    },
};

/// Tag for grouping brand endpoints in OpenAPI documentation
pub static BRAND_TAG: &str = "brand";

fn list_dto(brands: Vec<Brand>) -> Json<BrandListDto> {
    Json(BrandListDto {
        brands: brands.into_iter().map(Brand::into_dto).collect(),
    })
}

/// Create a new brand.
///
/// The referenced category must exist and not be deleted.
///
/// # Returns
/// - `201 Created` - The created brand with its category
/// - `400 Bad Request` - Name or website already taken by an active brand
/// - `401 Unauthorized` - Missing or expired token
/// - `404 Not Found` - Category missing or deleted
/// - `422 Unprocessable Entity` - Invalid or unknown fields
#[utoipa::path(
    post,
    path = "/brands",
    tag = BRAND_TAG,
    request_body = CreateBrandDto,
    security(("bearer" = [])),
    responses(
        (status = 201, description = "Successfully created brand", body = BrandListDto),
        (status = 400, description = "Name or website already taken", body = ErrorDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 404, description = "Category must exist", body = ErrorDto),
        (status = 422, description = "Invalid request body", body = ValidationErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_brand(
    State(state): State<AppState>,
    AuthUser(user): AuthUser,
    ApiJson(payload): ApiJson<CreateBrandDto>,
) -> Result<impl IntoResponse, AppError> {
    let service = BrandService::new(&state.db, state.audit_policy);

    let brand = service
        .create(CreateBrandParams::from_dto(payload), user.id)
        .await?;

    Ok((StatusCode::CREATED, list_dto(vec![brand])))
}

/// List brands, optionally within one category.
#[utoipa::path(
    get,
    path = "/brands",
    tag = BRAND_TAG,
    params(
        ("skip" = Option<u32>, Query, description = "Rows to skip (default: 0)"),
        ("limit" = Option<u32>, Query, description = "Maximum rows (default: 100)"),
        ("show_deleted" = Option<bool>, Query, description = "Include soft-deleted brands"),
        ("order_by" = Option<BrandOrderBy>, Query, description = "Sort column (default: created_at)"),
        ("direction" = Option<SortDirection>, Query, description = "asc or desc"),
        ("category_id" = Option<Uuid>, Query, description = "Only brands of this category")
    ),
    responses(
        (status = 200, description = "Page of brands", body = BrandListDto),
        (status = 422, description = "Invalid query", body = ValidationErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_brands(
    State(state): State<AppState>,
    ApiQuery(query): ApiQuery<BrandListQuery>,
) -> Result<impl IntoResponse, AppError> {
    let service = BrandService::new(&state.db, state.audit_policy);

    let brands = service.list(&BrandListParams::from_query(query)).await?;

    Ok((StatusCode::OK, list_dto(brands)))
}

/// Get a brand by id.
#[utoipa::path(
    get,
    path = "/brands/{id}",
    tag = BRAND_TAG,
    params(
        ("id" = Uuid, Path, description = "Brand id"),
        ("show_deleted" = Option<bool>, Query, description = "Also find a soft-deleted brand")
    ),
    responses(
        (status = 200, description = "The brand", body = BrandListDto),
        (status = 404, description = "Brand not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_brand(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<Uuid>,
    ApiQuery(query): ApiQuery<ShowDeletedQuery>,
) -> Result<impl IntoResponse, AppError> {
    let service = BrandService::new(&state.db, state.audit_policy);

    let brand = service
        .get(id, Visibility::from_show_deleted(query.show_deleted))
        .await?;

    Ok((StatusCode::OK, list_dto(vec![brand])))
}

/// Partially update a brand.
///
/// A new `category_id` must name an active category.
#[utoipa::path(
    patch,
    path = "/brands/{id}",
    tag = BRAND_TAG,
    params(("id" = Uuid, Path, description = "Brand id")),
    request_body = UpdateBrandDto,
    security(("bearer" = [])),
    responses(
        (status = 200, description = "The updated brand", body = BrandListDto),
        (status = 400, description = "Name or website already taken", body = ErrorDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 404, description = "Brand or category not found", body = ErrorDto),
        (status = 422, description = "Empty or invalid request body", body = ValidationErrorDto)
    ),
)]
pub async fn update_brand(
    State(state): State<AppState>,
    AuthUser(user): AuthUser,
    ApiPath(id): ApiPath<Uuid>,
    ApiJson(payload): ApiJson<UpdateBrandDto>,
) -> Result<impl IntoResponse, AppError> {
    let service = BrandService::new(&state.db, state.audit_policy);

    let brand = service
        .update(UpdateBrandParams::from_dto(id, payload), user.id)
        .await?;

    Ok((StatusCode::OK, list_dto(vec![brand])))
}

/// Soft-delete a brand.
#[utoipa::path(
    delete,
    path = "/brands/{id}",
    tag = BRAND_TAG,
    params(("id" = Uuid, Path, description = "Brand id")),
    security(("bearer" = [])),
    responses(
        (status = 200, description = "The deleted brand", body = BrandListDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 404, description = "Brand not found", body = ErrorDto)
    ),
)]
pub async fn delete_brand(
    State(state): State<AppState>,
    AuthUser(user): AuthUser,
    ApiPath(id): ApiPath<Uuid>,
) -> Result<impl IntoResponse, AppError> {
    let service = BrandService::new(&state.db, state.audit_policy);

    let brand = service.delete(id, user.id).await?;

    Ok((StatusCode::OK, list_dto(vec![brand])))
}
