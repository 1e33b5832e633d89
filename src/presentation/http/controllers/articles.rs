// src/presentation/http/controllers/articles.rs
use crate::application::{
    commands::{UpdateVotesCommand, comments::CreateCommentCommand},
    dto::{ArticleDetailDto, ArticleDto, ArticleSummaryDto, CommentDto},
    queries::articles::{GetArticleByIdQuery, ListArticleCommentsQuery, ListArticlesQuery},
};
use crate::presentation::http::error::{ErrorResponse, HttpResult, IntoHttpResult};
use crate::presentation::http::extractors::{IdPath, JsonBody, QueryParams};
use crate::presentation::http::state::HttpState;
use axum::{Extension, Json, http::StatusCode};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Default, Deserialize, utoipa::IntoParams, ToSchema)]
#[into_params(parameter_in = Query)]
pub struct ArticleListParams {
    /// Topic slug to filter by.
    pub topic: Option<String>,
    /// One of `title`, `author`, `created_at`, `votes`.
    pub sort_by: Option<String>,
    /// `asc` or `desc`.
    pub order_by: Option<String>,
}

/// Relative vote change. The delta must be a JSON integer.
#[derive(Debug, Deserialize, ToSchema)]
pub struct VotesRequest {
    pub inc_votes: i32,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct NewCommentRequest {
    pub username: Option<String>,
    pub body: Option<String>,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ArticleEnvelope {
    pub article: ArticleDto,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct CommentEnvelope {
    pub comment: CommentDto,
}

#[utoipa::path(
    get,
    path = "/api/articles",
    params(ArticleListParams),
    responses(
        (status = 200, description = "Articles matching the filter, sorted.", body = [ArticleSummaryDto]),
        (status = 400, description = "Invalid sort or order query.", body = ErrorResponse),
        (status = 404, description = "Topic doesn't exist.", body = ErrorResponse),
        (status = 500, description = "Unexpected server error.", body = ErrorResponse)
    ),
    tag = "Articles"
)]
pub async fn list_articles(
    Extension(state): Extension<HttpState>,
    QueryParams(params): QueryParams<ArticleListParams>,
) -> HttpResult<Json<Vec<ArticleSummaryDto>>> {
    let query = ListArticlesQuery {
        topic: params.topic,
        sort_by: params.sort_by,
        order_by: params.order_by,
    };

    state
        .services
        .article_queries
        .list_articles(query)
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    get,
    path = "/api/articles/{article_id}",
    params(("article_id" = i32, Path, description = "Article id")),
    responses(
        (status = 200, description = "Article with its comment count.", body = ArticleDetailDto),
        (status = 400, description = "Malformed id.", body = ErrorResponse),
        (status = 404, description = "Article doesn't exist.", body = ErrorResponse),
        (status = 500, description = "Unexpected server error.", body = ErrorResponse)
    ),
    tag = "Articles"
)]
pub async fn get_article(
    Extension(state): Extension<HttpState>,
    IdPath(id): IdPath,
) -> HttpResult<Json<ArticleDetailDto>> {
    state
        .services
        .article_queries
        .get_article_by_id(GetArticleByIdQuery { id })
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    patch,
    path = "/api/articles/{article_id}",
    params(("article_id" = i32, Path, description = "Article id")),
    request_body = VotesRequest,
    responses(
        (status = 200, description = "Article after the vote change.", body = ArticleEnvelope),
        (status = 400, description = "Malformed id or vote delta.", body = ErrorResponse),
        (status = 404, description = "Article doesn't exist.", body = ErrorResponse),
        (status = 500, description = "Unexpected server error.", body = ErrorResponse)
    ),
    tag = "Articles"
)]
pub async fn update_article_votes(
    Extension(state): Extension<HttpState>,
    IdPath(id): IdPath,
    JsonBody(payload): JsonBody<VotesRequest>,
) -> HttpResult<Json<ArticleEnvelope>> {
    let article = state
        .services
        .article_commands
        .update_votes(UpdateVotesCommand {
            id,
            inc_votes: payload.inc_votes,
        })
        .await
        .into_http()?;
    Ok(Json(ArticleEnvelope { article }))
}

#[utoipa::path(
    get,
    path = "/api/articles/{article_id}/comments",
    params(("article_id" = i32, Path, description = "Article id")),
    responses(
        (status = 200, description = "Comments on the article, newest first.", body = [CommentDto]),
        (status = 400, description = "Malformed id.", body = ErrorResponse),
        (status = 404, description = "Article doesn't exist.", body = ErrorResponse),
        (status = 500, description = "Unexpected server error.", body = ErrorResponse)
    ),
    tag = "Comments"
)]
pub async fn list_article_comments(
    Extension(state): Extension<HttpState>,
    IdPath(article_id): IdPath,
) -> HttpResult<Json<Vec<CommentDto>>> {
    state
        .services
        .article_queries
        .list_comments(ListArticleCommentsQuery { article_id })
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    post,
    path = "/api/articles/{article_id}/comments",
    params(("article_id" = i32, Path, description = "Article id")),
    request_body = NewCommentRequest,
    responses(
        (status = 201, description = "Comment created.", body = CommentEnvelope),
        (status = 400, description = "Malformed id, empty field or invalid username.", body = ErrorResponse),
        (status = 404, description = "Article doesn't exist.", body = ErrorResponse),
        (status = 500, description = "Unexpected server error.", body = ErrorResponse)
    ),
    tag = "Comments"
)]
pub async fn create_comment(
    Extension(state): Extension<HttpState>,
    IdPath(article_id): IdPath,
    JsonBody(payload): JsonBody<NewCommentRequest>,
) -> HttpResult<(StatusCode, Json<CommentEnvelope>)> {
    let command = CreateCommentCommand {
        article_id,
        username: payload.username,
        body: payload.body,
    };

    let comment = state
        .services
        .comment_commands
        .create_comment(command)
        .await
        .into_http()?;
    Ok((StatusCode::CREATED, Json(CommentEnvelope { comment })))
}
