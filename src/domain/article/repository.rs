use crate::domain::article::entity::{Article, ArticleDetail, ArticleSummary};
use crate::domain::article::listing::ArticleListing;
use crate::domain::article::value_objects::ArticleId;
use crate::domain::errors::DomainResult;
use crate::domain::votes::VoteDelta;
use async_trait::async_trait;

#[async_trait]
pub trait ArticleWriteRepository: Send + Sync {
    /// Applies `votes = votes + delta` in one statement. `None` when no row matched.
    async fn increment_votes(
        &self,
        id: ArticleId,
        delta: VoteDelta,
    ) -> DomainResult<Option<Article>>;
}

#[async_trait]
pub trait ArticleReadRepository: Send + Sync {
    async fn exists(&self, id: ArticleId) -> DomainResult<bool>;
    async fn find_detail(&self, id: ArticleId) -> DomainResult<Option<ArticleDetail>>;
    async fn list(&self, listing: &ArticleListing) -> DomainResult<Vec<ArticleSummary>>;
}
