use super::ArticleQueryService;
use crate::{
    application::{dto::CommentDto, error::ApplicationResult},
    domain::article::ArticleId,
};

pub struct ListArticleCommentsQuery {
    pub article_id: i32,
}

impl ArticleQueryService {
    /// The existence check and the listing have no data dependency, so both
    /// are issued together. A missing article wins over whatever the listing
    /// returned.
    pub async fn list_comments(
        &self,
        query: ListArticleCommentsQuery,
    ) -> ApplicationResult<Vec<CommentDto>> {
        let article_id = ArticleId::from(query.article_id);

        let (exists, comments) = tokio::join!(
            self.validator.assert_article_exists(article_id),
            self.comment_repo.list_by_article(article_id),
        );
        exists?;

        Ok(comments?.into_iter().map(Into::into).collect())
    }
}
