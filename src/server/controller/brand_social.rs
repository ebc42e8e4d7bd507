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
        brand_social::{BrandSocialListDto, CreateBrandSocialDto, UpdateBrandSocialDto},
        query::{BrandSocialOrderBy, ListQuery, ShowDeletedQuery, SortDirection},
    },
    server::{
        error::AppError,
        middleware::auth::AuthUser,
        model::{
            audit::Visibility,
            brand_social::{BrandSocial, CreateBrandSocialParams, UpdateBrandSocialParams},
            params::ListParams,
        },
        service::brand_social::BrandSocialService,
        state::AppState,
        util::extract::{ApiJson, ApiPath, ApiQuery},
    },
};

/// Tag for grouping brand social link endpoints in OpenAPI documentation
pub static BRAND_SOCIAL_TAG: &str = "brand_social";

fn list_dto(links: Vec<BrandSocial>) -> Json<BrandSocialListDto> {
    Json(BrandSocialListDto {
        socials: links.into_iter().map(BrandSocial::into_dto).collect(),
    })
}

/// Link a brand to a social network.
///
/// # Returns
/// - `201 Created` - The created link
/// - `400 Bad Request` - Address already used by an active link
/// - `401 Unauthorized` - Missing or expired token
/// - `404 Not Found` - Brand not found, or social network missing or deleted
/// - `422 Unprocessable Entity` - Invalid or unknown fields
#[utoipa::path(
    post,
    path = "/brands/{id}/socials",
    tag = BRAND_SOCIAL_TAG,
    params(("id" = Uuid, Path, description = "Brand id")),
    request_body = CreateBrandSocialDto,
    security(("bearer" = [])),
    responses(
        (status = 201, description = "Successfully linked social network", body = BrandSocialListDto),
        (status = 400, description = "Address already taken", body = ErrorDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 404, description = "Brand or social network not found", body = ErrorDto),
        (status = 422, description = "Invalid request body", body = ValidationErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_brand_social(
    State(state): State<AppState>,
    AuthUser(user): AuthUser,
    ApiPath(brand_id): ApiPath<Uuid>,
    ApiJson(payload): ApiJson<CreateBrandSocialDto>,
) -> Result<impl IntoResponse, AppError> {
    let service = BrandSocialService::new(&state.db, state.audit_policy);

    let link = service
        .create(CreateBrandSocialParams::from_dto(brand_id, payload), user.id)
        .await?;

    Ok((StatusCode::CREATED, list_dto(vec![link])))
}

/// List the social network links of a brand.
#[utoipa::path(
    get,
    path = "/brands/{id}/socials",
    tag = BRAND_SOCIAL_TAG,
    params(
        ("id" = Uuid, Path, description = "Brand id"),
        ("skip" = Option<u32>, Query, description = "Rows to skip (default: 0)"),
        ("limit" = Option<u32>, Query, description = "Maximum rows (default: 100)"),
        ("show_deleted" = Option<bool>, Query, description = "Include soft-deleted links"),
        ("order_by" = Option<BrandSocialOrderBy>, Query, description = "Sort column (default: created_at)"),
        ("direction" = Option<SortDirection>, Query, description = "asc or desc")
    ),
    responses(
        (status = 200, description = "Page of links", body = BrandSocialListDto),
        (status = 404, description = "Brand not found", body = ErrorDto),
        (status = 422, description = "Invalid query", body = ValidationErrorDto)
    ),
)]
pub async fn get_brand_socials(
    State(state): State<AppState>,
    ApiPath(brand_id): ApiPath<Uuid>,
    ApiQuery(query): ApiQuery<ListQuery<BrandSocialOrderBy>>,
) -> Result<impl IntoResponse, AppError> {
    let service = BrandSocialService::new(&state.db, state.audit_policy);

    let links = service
        .list(brand_id, &ListParams::from_query(query))
        .await?;

    Ok((StatusCode::OK, list_dto(links)))
}

/// Get one social network link of a brand.
#[utoipa::path(
    get,
    path = "/brands/{id}/socials/{social_link_id}",
    tag = BRAND_SOCIAL_TAG,
    params(
        ("id" = Uuid, Path, description = "Brand id"),
        ("social_link_id" = Uuid, Path, description = "Link id"),
        ("show_deleted" = Option<bool>, Query, description = "Also find soft-deleted records")
    ),
    responses(
        (status = 200, description = "The link", body = BrandSocialListDto),
        (status = 404, description = "Brand or link not found", body = ErrorDto)
    ),
)]
pub async fn get_brand_social(
    State(state): State<AppState>,
    ApiPath((brand_id, id)): ApiPath<(Uuid, Uuid)>,
    ApiQuery(query): ApiQuery<ShowDeletedQuery>,
) -> Result<impl IntoResponse, AppError> {
    let service = BrandSocialService::new(&state.db, state.audit_policy);

    let link = service
        .get(
            brand_id,
            id,
            Visibility::from_show_deleted(query.show_deleted),
        )
        .await?;

    Ok((StatusCode::OK, list_dto(vec![link])))
}

/// Change the address or social network of a link.
#[utoipa::path(
    patch,
    path = "/brands/{id}/socials/{social_link_id}",
    tag = BRAND_SOCIAL_TAG,
    params(
        ("id" = Uuid, Path, description = "Brand id"),
        ("social_link_id" = Uuid, Path, description = "Link id")
    ),
    request_body = UpdateBrandSocialDto,
    security(("bearer" = [])),
    responses(
        (status = 200, description = "The updated link", body = BrandSocialListDto),
        (status = 400, description = "Address already taken", body = ErrorDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 404, description = "Brand, link or social network not found", body = ErrorDto),
        (status = 422, description = "Empty or invalid request body", body = ValidationErrorDto)
    ),
)]
pub async fn update_brand_social(
    State(state): State<AppState>,
    AuthUser(user): AuthUser,
    ApiPath((brand_id, id)): ApiPath<(Uuid, Uuid)>,
    ApiJson(payload): ApiJson<UpdateBrandSocialDto>,
) -> Result<impl IntoResponse, AppError> {
    let service = BrandSocialService::new(&state.db, state.audit_policy);

    let link = service
        .update(
            UpdateBrandSocialParams::from_dto(brand_id, id, payload),
            user.id,
        )
        .await?;

    Ok((StatusCode::OK, list_dto(vec![link])))
}

/// Soft-delete a link.
#[utoipa::path(
    delete,
    path = "/brands/{id}/socials/{social_link_id}",
    tag = BRAND_SOCIAL_TAG,
    params(
        ("id" = Uuid, Path, description = "Brand id"),
        ("social_link_id" = Uuid, Path, description = "Link id")
    ),
    security(("bearer" = [])),
    responses(
        (status = 200, description = "The deleted link", body = BrandSocialListDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 404, description = "Brand or link not found", body = ErrorDto)
    ),
)]
pub async fn delete_brand_social(
    State(state): State<AppState>,
    AuthUser(user): AuthUser,
    ApiPath((brand_id, id)): ApiPath<(Uuid, Uuid)>,
) -> Result<impl IntoResponse, AppError> {
    let service = BrandSocialService::new(&state.db, state.audit_policy);

    let link = service.delete(brand_id, id, user.id).await?;

    Ok((StatusCode::OK, list_dto(vec![link])))
}
