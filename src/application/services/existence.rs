// src/application/services/existence.rs
use std::sync::Arc;

use crate::{
    application::error::{ApplicationError, ApplicationResult},
    domain::{
        article::{ArticleId, ArticleReadRepository},
        comment::{CommentId, CommentRepository},
        errors::{ARTICLE_NOT_FOUND, COMMENT_NOT_FOUND, TOPIC_NOT_FOUND, USER_NOT_FOUND},
        topic::{TopicRepository, TopicSlug},
        user::{UserRepository, Username},
    },
};

/// Precondition gate for compound operations. Every check is a single
/// read-only lookup; nothing here mutates state.
pub struct ExistenceValidator {
    articles: Arc<dyn ArticleReadRepository>,
    comments: Arc<dyn CommentRepository>,
    topics: Arc<dyn TopicRepository>,
    users: Arc<dyn UserRepository>,
}

impl ExistenceValidator {
    pub fn new(
        articles: Arc<dyn ArticleReadRepository>,
        comments: Arc<dyn CommentRepository>,
        topics: Arc<dyn TopicRepository>,
        users: Arc<dyn UserRepository>,
    ) -> Self {
        Self {
            articles,
            comments,
            topics,
            users,
        }
    }

    pub async fn assert_article_exists(&self, id: ArticleId) -> ApplicationResult<()> {
        require(self.articles.exists(id).await?, ARTICLE_NOT_FOUND)
    }

    pub async fn assert_comment_exists(&self, id: CommentId) -> ApplicationResult<()> {
        require(self.comments.exists(id).await?, COMMENT_NOT_FOUND)
    }

    pub async fn assert_topic_exists(&self, slug: &TopicSlug) -> ApplicationResult<()> {
        require(self.topics.exists(slug).await?, TOPIC_NOT_FOUND)
    }

    pub async fn assert_user_exists(&self, username: &Username) -> ApplicationResult<()> {
        require(self.users.exists(username).await?, USER_NOT_FOUND)
    }
}

fn require(found: bool, missing: &'static str) -> ApplicationResult<()> {
    if found {
        Ok(())
    } else {
        tracing::debug!(reason = missing, "existence check failed");
        Err(ApplicationError::not_found(missing))
    }
}
