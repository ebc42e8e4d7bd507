//! HTTP route table and OpenAPI document.

use axum::{
    routing::{get, post},
    Router,
};
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use utoipa::{
    openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme},
    Modify, OpenApi,
};
use utoipa_swagger_ui::SwaggerUi;

use crate::{
    model::{
        api::{ErrorDto, ReferenceDto, ValidationErrorDto},
        audit::{ActorDto, AuditDto},
        auth::{LoginDto, RefreshDto, TokenDto},
        brand::{BrandDto, BrandListDto, CreateBrandDto, UpdateBrandDto},
        brand_social::{
            BrandSocialDto, BrandSocialListDto, CreateBrandSocialDto, UpdateBrandSocialDto,
        },
        category::{CategoryDto, CategoryListDto, CreateCategoryDto, UpdateCategoryDto},
        query::{BrandOrderBy, BrandSocialOrderBy, NameOrderBy, SortDirection, UserOrderBy},
        social::{CreateSocialDto, SocialDto, SocialListDto, UpdateSocialDto},
        user::{SignupDto, UpdateUserDto, UserDto, UserListDto},
    },
    server::{
        controller::{auth, brand, brand_social, category, social, user},
        error::AppError,
        state::AppState,
    },
};

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Brands API",
        description = "Catalogue of brands, their categories and social network presence"
    ),
    tags(
        (name = "auth", description = "Signup, login and token refresh"),
        (name = "user", description = "User accounts"),
        (name = "category", description = "Brand categories"),
        (name = "brand", description = "Brands"),
        (name = "social", description = "Social networks"),
        (name = "brand_social", description = "Links between brands and social networks")
    ),
    paths(
        auth::signup,
        auth::login,
        auth::refresh,
        user::get_users,
        user::get_user,
        user::update_user,
        user::delete_user,
        category::create_category,
        category::get_categories,
        category::get_category,
        category::update_category,
        category::delete_category,
        brand::create_brand,
        brand::get_brands,
        brand::get_brand,
        brand::update_brand,
        brand::delete_brand,
        social::create_social,
        social::get_socials,
        social::get_social,
        social::update_social,
        social::delete_social,
        brand_social::create_brand_social,
        brand_social::get_brand_socials,
        brand_social::get_brand_social,
        brand_social::update_brand_social,
        brand_social::delete_brand_social,
    ),
    components(schemas(
        ErrorDto,
        ValidationErrorDto,
        ReferenceDto,
        ActorDto,
        AuditDto,
        LoginDto,
        RefreshDto,
        TokenDto,
        SignupDto,
        UpdateUserDto,
        UserDto,
        UserListDto,
        CategoryDto,
        CategoryListDto,
        CreateCategoryDto,
        UpdateCategoryDto,
        BrandDto,
        BrandListDto,
        CreateBrandDto,
        UpdateBrandDto,
        SocialDto,
        SocialListDto,
        CreateSocialDto,
        UpdateSocialDto,
        BrandSocialDto,
        BrandSocialListDto,
        CreateBrandSocialDto,
        UpdateBrandSocialDto,
        SortDirection,
        UserOrderBy,
        NameOrderBy,
        BrandOrderBy,
        BrandSocialOrderBy,
    )),
    modifiers(&SecurityAddon)
)]
struct ApiDoc;

/// Registers the `bearer` scheme referenced by protected operations.
struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "bearer",
                SecurityScheme::Http(
                    HttpBuilder::new()
                        .scheme(HttpAuthScheme::Bearer)
                        .bearer_format("JWT")
                        .build(),
                ),
            );
        }
    }
}

/// Builds the application router with all routes, documentation and layers.
///
/// Unknown paths answer 404 and known paths with an unsupported method answer 405, both
/// with the same `{"detail": ...}` body as every other error.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/signup", post(auth::signup))
        .route("/login", post(auth::login))
        .route("/refresh", post(auth::refresh))
        .route("/users", get(user::get_users))
        .route(
            "/users/{id}",
            get(user::get_user)
                .patch(user::update_user)
                .delete(user::delete_user),
        )
        .route(
            "/categories",
            get(category::get_categories).post(category::create_category),
        )
        .route(
            "/categories/{id}",
            get(category::get_category)
                .patch(category::update_category)
                .delete(category::delete_category),
        )
        .route("/brands", get(brand::get_brands).post(brand::create_brand))
        .route(
            "/brands/{id}",
            get(brand::get_brand)
                .patch(brand::update_brand)
                .delete(brand::delete_brand),
        )
        .route(
            "/brands/{id}/socials",
            get(brand_social::get_brand_socials).post(brand_social::create_brand_social),
        )
        .route(
            "/brands/{id}/socials/{social_link_id}",
            get(brand_social::get_brand_social)
                .patch(brand_social::update_brand_social)
                .delete(brand_social::delete_brand_social),
        )
        .route("/socials", get(social::get_socials).post(social::create_social))
        .route(
            "/socials/{id}",
            get(social::get_social)
                .patch(social::update_social)
                .delete(social::delete_social),
        )
        .merge(SwaggerUi::new("/docs").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .method_not_allowed_fallback(method_not_allowed)
        .fallback(not_found)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}

async fn method_not_allowed() -> AppError {
    AppError::MethodNotAllowed
}

async fn not_found() -> AppError {
    AppError::NotFound("Not Found".to_string())
}
