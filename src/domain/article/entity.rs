// src/domain/article/entity.rs
use crate::domain::article::value_objects::ArticleId;
use crate::domain::topic::TopicSlug;
use crate::domain::user::Username;
use chrono::{DateTime, Utc};

/// A stored article row, as returned by writes.
#[derive(Debug, Clone)]
pub struct Article {
    pub id: ArticleId,
    pub title: String,
    pub topic: TopicSlug,
    pub author: Username,
    pub body: String,
    pub created_at: DateTime<Utc>,
    pub votes: i32,
    pub article_img_url: String,
}

/// Listing projection: no body, plus the live comment count.
#[derive(Debug, Clone)]
pub struct ArticleSummary {
    pub id: ArticleId,
    pub title: String,
    pub topic: TopicSlug,
    pub author: Username,
    pub created_at: DateTime<Utc>,
    pub votes: i32,
    pub article_img_url: String,
    pub comment_count: i64,
}

#[derive(Debug, Clone)]
pub struct ArticleDetail {
    pub article: Article,
    pub comment_count: i64,
}

impl ArticleDetail {
    pub fn new(article: Article, comment_count: i64) -> Self {
        Self {
            article,
            comment_count,
        }
    }
}

impl From<ArticleDetail> for ArticleSummary {
    fn from(detail: ArticleDetail) -> Self {
        let ArticleDetail {
            article,
            comment_count,
        } = detail;
        Self {
            id: article.id,
            title: article.title,
            topic: article.topic,
            author: article.author,
            created_at: article.created_at,
            votes: article.votes,
            article_img_url: article.article_img_url,
            comment_count,
        }
    }
}
