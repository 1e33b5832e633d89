// src/presentation/http/openapi.rs
use serde::{Deserialize, Serialize};
use std::{fs::File, io::BufWriter, path::Path};
use utoipa::{OpenApi, ToSchema};

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct StatusResponse {
    pub status: String,
}

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::presentation::http::controllers::api::describe_endpoints,
        crate::presentation::http::controllers::topics::list_topics,
        crate::presentation::http::controllers::articles::list_articles,
        crate::presentation::http::controllers::articles::get_article,
        crate::presentation::http::controllers::articles::update_article_votes,
        crate::presentation::http::controllers::articles::list_article_comments,
        crate::presentation::http::controllers::articles::create_comment,
        crate::presentation::http::controllers::comments::update_comment_votes,
        crate::presentation::http::controllers::comments::delete_comment,
        crate::presentation::http::controllers::users::list_users,
        crate::presentation::http::controllers::users::get_user,
        super::routes::health
    ),
    components(
        schemas(
            StatusResponse,
            crate::presentation::http::error::ErrorResponse,
            crate::presentation::http::controllers::articles::ArticleListParams,
            crate::presentation::http::controllers::articles::VotesRequest,
            crate::presentation::http::controllers::articles::NewCommentRequest,
            crate::presentation::http::controllers::articles::ArticleEnvelope,
            crate::presentation::http::controllers::articles::CommentEnvelope,
            crate::application::dto::TopicDto,
            crate::application::dto::UserDto,
            crate::application::dto::ArticleDto,
            crate::application::dto::ArticleDetailDto,
            crate::application::dto::ArticleSummaryDto,
            crate::application::dto::CommentDto
        )
    ),
    tags(
        (name = "Topics", description = "Topic endpoints"),
        (name = "Articles", description = "Article listing, lookup and voting"),
        (name = "Comments", description = "Comment endpoints"),
        (name = "Users", description = "User endpoints"),
        (name = "System", description = "System level endpoints")
    ),
    info(
        title = "Newsroom API",
        description = "News aggregator over topics, articles, comments and users",
        version = "0.1.0"
    )
)]
pub struct ApiDoc;

pub async fn serve_openapi() -> axum::Json<utoipa::openapi::OpenApi> {
    axum::Json(ApiDoc::openapi())
}

pub fn write_openapi_snapshot(output_path: &Path) -> std::io::Result<()> {
    let spec = ApiDoc::openapi();
    if let Some(parent) = output_path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    let file = File::create(output_path)?;
    let writer = BufWriter::new(file);
    serde_json::to_writer_pretty(writer, &spec)?;
    Ok(())
}
