// src/presentation/http/controllers/comments.rs
use crate::application::{
    commands::{UpdateVotesCommand, comments::DeleteCommentCommand},
    dto::CommentDto,
};
use crate::presentation::http::controllers::articles::VotesRequest;
use crate::presentation::http::error::{ErrorResponse, HttpResult, IntoHttpResult};
use crate::presentation::http::extractors::{IdPath, JsonBody};
use crate::presentation::http::state::HttpState;
use axum::{Extension, Json, http::StatusCode};

#[utoipa::path(
    patch,
    path = "/api/comments/{comment_id}",
    params(("comment_id" = i32, Path, description = "Comment id")),
    request_body = VotesRequest,
    responses(
        (status = 200, description = "Comment after the vote change.", body = CommentDto),
        (status = 400, description = "Malformed id or vote delta.", body = ErrorResponse),
        (status = 404, description = "Comment doesn't exist.", body = ErrorResponse),
        (status = 500, description = "Unexpected server error.", body = ErrorResponse)
    ),
    tag = "Comments"
)]
pub async fn update_comment_votes(
    Extension(state): Extension<HttpState>,
    IdPath(id): IdPath,
    JsonBody(payload): JsonBody<VotesRequest>,
) -> HttpResult<Json<CommentDto>> {
    state
        .services
        .comment_commands
        .update_votes(UpdateVotesCommand {
            id,
            inc_votes: payload.inc_votes,
        })
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    delete,
    path = "/api/comments/{comment_id}",
    params(("comment_id" = i32, Path, description = "Comment id")),
    responses(
        (status = 204, description = "Comment removed."),
        (status = 400, description = "Malformed id.", body = ErrorResponse),
        (status = 404, description = "Comment doesn't exist.", body = ErrorResponse),
        (status = 500, description = "Unexpected server error.", body = ErrorResponse)
    ),
    tag = "Comments"
)]
pub async fn delete_comment(
    Extension(state): Extension<HttpState>,
    IdPath(id): IdPath,
) -> HttpResult<StatusCode> {
    state
        .services
        .comment_commands
        .delete_comment(DeleteCommentCommand { id })
        .await
        .into_http()?;
    Ok(StatusCode::NO_CONTENT)
}
