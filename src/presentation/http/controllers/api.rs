// src/presentation/http/controllers/api.rs
use axum::{http::header, response::IntoResponse};

const ENDPOINTS: &str = include_str!("../endpoints.json");

#[utoipa::path(
    get,
    path = "/api",
    responses(
        (status = 200, description = "Description of every available endpoint.")
    ),
    tag = "System"
)]
pub async fn describe_endpoints() -> impl IntoResponse {
    ([(header::CONTENT_TYPE, "application/json")], ENDPOINTS)
}
