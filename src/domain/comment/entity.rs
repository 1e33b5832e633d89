// src/domain/comment/entity.rs
use crate::domain::article::ArticleId;
use crate::domain::comment::value_objects::{CommentBody, CommentId};
use crate::domain::user::Username;
use chrono::{DateTime, Utc};

#[derive(Debug, Clone)]
pub struct Comment {
    pub id: CommentId,
    pub article_id: ArticleId,
    pub author: Username,
    pub body: String,
    pub votes: i32,
    pub created_at: DateTime<Utc>,
}

/// Insert payload. `comment_id` and `votes` are assigned by storage.
#[derive(Debug, Clone)]
pub struct NewComment {
    pub article_id: ArticleId,
    pub author: Username,
    pub body: CommentBody,
    pub created_at: DateTime<Utc>,
}
