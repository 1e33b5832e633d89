// src/presentation/http/routes.rs
use crate::presentation::http::state::HttpState;
use crate::presentation::http::{
    controllers::{api, articles, comments, topics, users},
    error::HttpError,
    openapi::{self, StatusResponse},
};
use axum::{
    Extension, Router,
    http::Method,
    routing::{get, patch},
};
use std::time::Duration;
use tower::Layer;
use tower_http::{
    cors::CorsLayer,
    normalize_path::{NormalizePath, NormalizePathLayer},
    trace::TraceLayer,
};

const ROUTE_NOT_FOUND: &str = "Route not found";

pub fn build_router(state: HttpState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(tower_http::cors::Any)
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PATCH,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allow_headers(tower_http::cors::Any)
        .max_age(Duration::from_secs(3600));

    Router::new()
        .route("/health", get(health))
        .route("/api", get(api::describe_endpoints))
        .route("/api/openapi.json", get(openapi::serve_openapi))
        .route("/api/topics", get(topics::list_topics))
        .route("/api/articles", get(articles::list_articles))
        .route(
            "/api/articles/{article_id}",
            get(articles::get_article).patch(articles::update_article_votes),
        )
        .route(
            "/api/articles/{article_id}/comments",
            get(articles::list_article_comments).post(articles::create_comment),
        )
        .route(
            "/api/comments/{comment_id}",
            patch(comments::update_comment_votes).delete(comments::delete_comment),
        )
        .route("/api/users", get(users::list_users))
        .route("/api/users/{username}", get(users::get_user))
        .fallback(route_not_found)
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .layer(Extension(state))
}

/// Router wrapped so that `/api/articles/1/` and `/api/articles/1` hit the
/// same handler. Path normalisation has to run before routing, so it wraps
/// the router instead of being added as a router layer.
pub fn build_app(state: HttpState) -> NormalizePath<Router> {
    NormalizePathLayer::trim_trailing_slash().layer(build_router(state))
}

async fn route_not_found() -> HttpError {
    HttpError::not_found(ROUTE_NOT_FOUND)
}

#[utoipa::path(
    get,
    path = "/health",
    responses(
        (status = 200, description = "Service health check.", body = crate::presentation::http::openapi::StatusResponse)
    ),
    tag = "System"
)]
pub async fn health() -> axum::Json<StatusResponse> {
    axum::Json(StatusResponse {
        status: "ok".into(),
    })
}
