// src/presentation/http/controllers/topics.rs
use crate::application::dto::TopicDto;
use crate::presentation::http::error::{ErrorResponse, HttpResult, IntoHttpResult};
use crate::presentation::http::state::HttpState;
use axum::{Extension, Json};

#[utoipa::path(
    get,
    path = "/api/topics",
    responses(
        (status = 200, description = "All topics.", body = [TopicDto]),
        (status = 500, description = "Unexpected server error.", body = ErrorResponse)
    ),
    tag = "Topics"
)]
pub async fn list_topics(Extension(state): Extension<HttpState>) -> HttpResult<Json<Vec<TopicDto>>> {
    state
        .services
        .topic_queries
        .list_topics()
        .await
        .into_http()
        .map(Json)
}
