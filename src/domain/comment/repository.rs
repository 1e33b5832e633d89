use crate::domain::article::ArticleId;
use crate::domain::comment::entity::{Comment, NewComment};
use crate::domain::comment::value_objects::CommentId;
use crate::domain::errors::DomainResult;
use crate::domain::votes::VoteDelta;
use async_trait::async_trait;

#[async_trait]
pub trait CommentRepository: Send + Sync {
    async fn exists(&self, id: CommentId) -> DomainResult<bool>;

    /// Newest first. Does not check that the article exists.
    async fn list_by_article(&self, article_id: ArticleId) -> DomainResult<Vec<Comment>>;

    async fn insert(&self, comment: NewComment) -> DomainResult<Comment>;

    async fn increment_votes(
        &self,
        id: CommentId,
        delta: VoteDelta,
    ) -> DomainResult<Option<Comment>>;

    /// Removes exactly one row; `NotFound` when nothing was deleted.
    async fn delete(&self, id: CommentId) -> DomainResult<()>;
}
