use axum::{
    http::StatusCode,
    response::{Html, IntoResponse},
    routing::get,
    Json, Router,
};
use tower_http::{normalize_path::NormalizePath, trace::TraceLayer};
use utoipa::OpenApi;
use utoipa_axum::{router::OpenApiRouter, routes};
use utoipa_swagger_ui::SwaggerUi;

use crate::{
    model::api::ErrorDto,
    server::{
        controller::{character, favourite, sitemap, user},
        state::AppState,
    },
};

#[derive(OpenApi)]
#[openapi(
    info(title = "Favourites API", description = "Users, characters and their favourites"),
    tags(
        (name = "user", description = "User management"),
        (name = "character", description = "Character management"),
        (name = "favourite", description = "Favourite characters of users"),
    )
)]
struct ApiDoc;

/// Builds the API router and the OpenAPI document generated from its handlers.
pub fn router() -> (Router<AppState>, utoipa::openapi::OpenApi) {
    OpenApiRouter::with_openapi(ApiDoc::openapi())
        .routes(routes!(user::get_users, user::create_user))
        .routes(routes!(user::get_user, user::update_user, user::delete_user))
        .routes(routes!(character::get_characters, character::create_character))
        .routes(routes!(character::get_character, character::delete_character))
        .routes(routes!(favourite::get_favourites))
        .routes(routes!(favourite::create_favourite, favourite::delete_favourite))
        .split_for_parts()
}

/// Assembles the full application.
///
/// Swagger UI is served at `/docs` with the document at `/api-docs/openapi.json`.
/// Every other request has its trailing slash trimmed before reaching the API router,
/// which also serves the sitemap at `/`.
pub fn app(state: AppState) -> Router {
    let (api_router, api) = router();

    let sitemap = Html(sitemap::render(&api));

    let api_router = api_router
        .route("/", get(move || std::future::ready(sitemap.clone())))
        .fallback(not_found)
        .with_state(state);

    Router::new()
        .merge(SwaggerUi::new("/docs").url("/api-docs/openapi.json", api))
        .fallback_service(NormalizePath::trim_trailing_slash(api_router))
        .layer(TraceLayer::new_for_http())
}

async fn not_found() -> impl IntoResponse {
    (
        StatusCode::NOT_FOUND,
        Json(ErrorDto {
            error: "Not found".to_string(),
        }),
    )
}
