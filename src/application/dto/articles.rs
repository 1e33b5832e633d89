use crate::domain::article::{Article, ArticleDetail, ArticleSummary};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::serde_time;

/// Stored article row, as returned after a vote update.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ArticleDto {
    pub article_id: i32,
    pub title: String,
    pub topic: String,
    pub author: String,
    pub body: String,
    #[serde(with = "serde_time")]
    pub created_at: DateTime<Utc>,
    pub votes: i32,
    pub article_img_url: String,
}

impl From<Article> for ArticleDto {
    fn from(article: Article) -> Self {
        Self {
            article_id: article.id.into(),
            title: article.title,
            topic: article.topic.into_inner(),
            author: article.author.into_inner(),
            body: article.body,
            created_at: article.created_at,
            votes: article.votes,
            article_img_url: article.article_img_url,
        }
    }
}

/// Single article view including its live comment count.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ArticleDetailDto {
    pub article_id: i32,
    pub title: String,
    pub topic: String,
    pub author: String,
    pub body: String,
    #[serde(with = "serde_time")]
    pub created_at: DateTime<Utc>,
    pub votes: i32,
    pub article_img_url: String,
    pub comment_count: i64,
}

impl From<ArticleDetail> for ArticleDetailDto {
    fn from(detail: ArticleDetail) -> Self {
        let ArticleDto {
            article_id,
            title,
            topic,
            author,
            body,
            created_at,
            votes,
            article_img_url,
        } = detail.article.into();
        Self {
            article_id,
            title,
            topic,
            author,
            body,
            created_at,
            votes,
            article_img_url,
            comment_count: detail.comment_count,
        }
    }
}

/// Listing entry; the body is left out.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ArticleSummaryDto {
    pub article_id: i32,
    pub title: String,
    pub topic: String,
    pub author: String,
    #[serde(with = "serde_time")]
    pub created_at: DateTime<Utc>,
    pub votes: i32,
    pub article_img_url: String,
    pub comment_count: i64,
}

impl From<ArticleSummary> for ArticleSummaryDto {
    fn from(summary: ArticleSummary) -> Self {
        Self {
            article_id: summary.id.into(),
            title: summary.title,
            topic: summary.topic.into_inner(),
            author: summary.author.into_inner(),
            created_at: summary.created_at,
            votes: summary.votes,
            article_img_url: summary.article_img_url,
            comment_count: summary.comment_count,
        }
    }
}
