use super::ArticleQueryService;
use crate::{
    application::{dto::ArticleSummaryDto, error::ApplicationResult},
    domain::article::ArticleListing,
};

#[derive(Debug, Default)]
pub struct ListArticlesQuery {
    pub topic: Option<String>,
    pub sort_by: Option<String>,
    pub order_by: Option<String>,
}

impl ArticleQueryService {
    pub async fn list_articles(
        &self,
        query: ListArticlesQuery,
    ) -> ApplicationResult<Vec<ArticleSummaryDto>> {
        // Sort and order are checked before anything touches storage.
        let listing = ArticleListing::parse(
            query.topic,
            query.sort_by.as_deref(),
            query.order_by.as_deref(),
        )?;

        let topic_check = async {
            match listing.topic.as_ref() {
                Some(slug) => self.validator.assert_topic_exists(slug).await,
                None => Ok(()),
            }
        };

        let (topic_check, records) = tokio::join!(topic_check, self.read_repo.list(&listing));
        topic_check?;

        let records = records?;
        tracing::debug!(
            count = records.len(),
            sort_by = listing.sort_by.as_str(),
            order = listing.order.as_sql(),
            "listed articles"
        );
        Ok(records.into_iter().map(Into::into).collect())
    }
}
