pub mod auth;
pub mod forms;
pub mod middleware;
pub mod pages;
pub mod rest;
pub mod state;
pub mod views;

use crate::web::{
    auth::auth_handler,
    middleware::log_requests,
    pages::{add_course_handler, blog_handler, landing_handler},
    rest::{create_course_handler, list_courses_handler, list_posts_handler, ApiDoc},
    state::AppState,
};
use axum::{
    http::{
        header::{ACCEPT, CONTENT_TYPE},
        Method,
    },
    middleware as axum_middleware,
    routing::{get, post},
    Router,
};
use std::sync::Arc;
use tower_http::cors::CorsLayer;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

/// Builds the full application: pages, form posts, JSON API and Swagger UI.
///
/// Paths outside these routes fall through to axum's default 404.
pub fn build_router(app_state: Arc<AppState>) -> Router {
    // Pages and the forms their modals post to
    let page_routes = Router::new()
        .route("/", get(landing_handler))
        .route("/blog", get(blog_handler))
        .route("/courses", post(add_course_handler))
        .route("/auth", post(auth_handler));

    let mut api_routes = Router::new()
        .route(
            "/api/courses",
            get(list_courses_handler).post(create_course_handler),
        )
        .route("/api/blog", get(list_posts_handler));

    if let Some(origin) = app_state.config.cors_origin.clone() {
        let cors = CorsLayer::new()
            .allow_origin(origin)
            .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
            .allow_headers([CONTENT_TYPE, ACCEPT]);
        api_routes = api_routes.layer(cors);
    }

    Router::new()
        .merge(page_routes)
        .merge(api_routes)
        .with_state(app_state)
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .layer(axum_middleware::from_fn(log_requests))
}
