use super::ArticleQueryService;
use crate::{
    application::{
        dto::ArticleDetailDto,
        error::{ApplicationError, ApplicationResult},
    },
    domain::{article::ArticleId, errors::ARTICLE_NOT_FOUND},
};

pub struct GetArticleByIdQuery {
    pub id: i32,
}

impl ArticleQueryService {
    pub async fn get_article_by_id(
        &self,
        query: GetArticleByIdQuery,
    ) -> ApplicationResult<ArticleDetailDto> {
        let id = ArticleId::from(query.id);
        self.validator.assert_article_exists(id).await?;

        // The row can vanish between the check and the read.
        let article = self
            .read_repo
            .find_detail(id)
            .await?
            .ok_or_else(|| ApplicationError::not_found(ARTICLE_NOT_FOUND))?;
        Ok(article.into())
    }
}
