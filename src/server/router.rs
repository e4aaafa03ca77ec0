//! Route configuration and generated API documentation.
//!
//! Routes are registered through `utoipa-axum`, so the OpenAPI document is assembled
//! from the same `#[utoipa::path]` annotations that declare each handler's contract.

use axum::Router;
use utoipa::OpenApi;
use utoipa_axum::{router::OpenApiRouter, routes};
use utoipa_swagger_ui::SwaggerUi;

use crate::server::{controller::user, state::AppState};

/// Prefix for every versioned API route.
pub const API_PREFIX: &str = "/api/v1";

/// Path serving the Swagger UI.
pub const DOCS_PATH: &str = "/api-docs";

/// Path serving the generated OpenAPI document as JSON.
pub const OPENAPI_PATH: &str = "/openapi.json";

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Admin App API",
        version = "1.0.0",
        description = "API documentation for the Admin App"
    ),
    tags(
        (name = "user", description = "User account management")
    )
)]
pub struct ApiDoc;

/// Builds the API router and the OpenAPI document describing it.
pub fn api_router() -> (Router<AppState>, utoipa::openapi::OpenApi) {
    OpenApiRouter::with_openapi(ApiDoc::openapi())
        .nest(API_PREFIX, user_routes())
        .split_for_parts()
}

/// Builds the full application router: the versioned API plus its documentation.
pub fn router() -> Router<AppState> {
    let (router, api) = api_router();

    router.merge(SwaggerUi::new(DOCS_PATH).url(OPENAPI_PATH, api))
}

fn user_routes() -> OpenApiRouter<AppState> {
    OpenApiRouter::new()
        .routes(routes!(user::create_user, user::get_all_users))
        .routes(routes!(
            user::get_user_by_id,
            user::update_user,
            user::delete_user
        ))
}
