// src/infrastructure/repositories/postgres_article.rs
use super::map_sqlx;
use crate::domain::article::{
    Article, ArticleDetail, ArticleId, ArticleListing, ArticleReadRepository, ArticleSummary,
    ArticleWriteRepository,
};
use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::topic::TopicSlug;
use crate::domain::user::Username;
use crate::domain::votes::VoteDelta;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{FromRow, PgPool, Postgres, QueryBuilder};

const ARTICLE_COLUMNS: &str = "articles.article_id, articles.title, articles.topic, articles.author, \
     articles.body, articles.created_at, articles.votes, articles.article_img_url";

const SUMMARY_COLUMNS: &str = "articles.article_id, articles.title, articles.topic, articles.author, \
     articles.created_at, articles.votes, articles.article_img_url, \
     COUNT(comments.comment_id) AS comment_count";

#[derive(Clone)]
pub struct PostgresArticleWriteRepository {
    pool: PgPool,
}

impl PostgresArticleWriteRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Clone)]
pub struct PostgresArticleReadRepository {
    pool: PgPool,
}

impl PostgresArticleReadRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Debug, FromRow)]
struct ArticleRow {
    article_id: i32,
    title: String,
    topic: String,
    author: String,
    body: String,
    created_at: DateTime<Utc>,
    votes: i32,
    article_img_url: String,
}

#[derive(Debug, FromRow)]
struct ArticleDetailRow {
    #[sqlx(flatten)]
    article: ArticleRow,
    comment_count: i64,
}

#[derive(Debug, FromRow)]
struct ArticleSummaryRow {
    article_id: i32,
    title: String,
    topic: String,
    author: String,
    created_at: DateTime<Utc>,
    votes: i32,
    article_img_url: String,
    comment_count: i64,
}

impl TryFrom<ArticleRow> for Article {
    type Error = DomainError;

    fn try_from(row: ArticleRow) -> Result<Self, Self::Error> {
        Ok(Article {
            id: ArticleId::from(row.article_id),
            title: row.title,
            topic: TopicSlug::new(row.topic),
            author: Username::new(row.author)?,
            body: row.body,
            created_at: row.created_at,
            votes: row.votes,
            article_img_url: row.article_img_url,
        })
    }
}

impl TryFrom<ArticleDetailRow> for ArticleDetail {
    type Error = DomainError;

    fn try_from(row: ArticleDetailRow) -> Result<Self, Self::Error> {
        Ok(ArticleDetail::new(
            Article::try_from(row.article)?,
            row.comment_count,
        ))
    }
}

impl TryFrom<ArticleSummaryRow> for ArticleSummary {
    type Error = DomainError;

    fn try_from(row: ArticleSummaryRow) -> Result<Self, Self::Error> {
        Ok(ArticleSummary {
            id: ArticleId::from(row.article_id),
            title: row.title,
            topic: TopicSlug::new(row.topic),
            author: Username::new(row.author)?,
            created_at: row.created_at,
            votes: row.votes,
            article_img_url: row.article_img_url,
            comment_count: row.comment_count,
        })
    }
}

#[async_trait]
impl ArticleWriteRepository for PostgresArticleWriteRepository {
    async fn increment_votes(
        &self,
        id: ArticleId,
        delta: VoteDelta,
    ) -> DomainResult<Option<Article>> {
        let row = sqlx::query_as::<_, ArticleRow>(&format!(
            "UPDATE articles SET votes = votes + $1 WHERE article_id = $2 RETURNING {ARTICLE_COLUMNS}"
        ))
        .bind(i32::from(delta))
        .bind(i32::from(id))
        .fetch_optional(&self.pool)
        .await
        .map_err(map_sqlx)?;

        row.map(Article::try_from).transpose()
    }
}

impl PostgresArticleReadRepository {
    /// Builds the listing query. Only the topic is bound as a parameter; the
    /// sort column and direction come from the allow-list enums.
    fn listing_query(listing: &ArticleListing) -> QueryBuilder<'static, Postgres> {
        let mut builder: QueryBuilder<Postgres> = QueryBuilder::new("SELECT ");
        builder.push(SUMMARY_COLUMNS);
        builder.push(
            " FROM articles LEFT JOIN comments ON comments.article_id = articles.article_id",
        );

        if let Some(topic) = &listing.topic {
            builder.push(" WHERE articles.topic = ");
            builder.push_bind(topic.as_str().to_owned());
        }

        builder.push(" GROUP BY articles.article_id ORDER BY ");
        builder.push(listing.sort_by.column());
        builder.push(" ");
        builder.push(listing.order.as_sql());
        builder
    }
}

#[async_trait]
impl ArticleReadRepository for PostgresArticleReadRepository {
    async fn exists(&self, id: ArticleId) -> DomainResult<bool> {
        sqlx::query_scalar::<_, bool>("SELECT EXISTS(SELECT 1 FROM articles WHERE article_id = $1)")
            .bind(i32::from(id))
            .fetch_one(&self.pool)
            .await
            .map_err(map_sqlx)
    }

    async fn find_detail(&self, id: ArticleId) -> DomainResult<Option<ArticleDetail>> {
        let row = sqlx::query_as::<_, ArticleDetailRow>(&format!(
            "SELECT {ARTICLE_COLUMNS}, COUNT(comments.comment_id) AS comment_count
             FROM articles
             LEFT JOIN comments ON comments.article_id = articles.article_id
             WHERE articles.article_id = $1
             GROUP BY articles.article_id"
        ))
        .bind(i32::from(id))
        .fetch_optional(&self.pool)
        .await
        .map_err(map_sqlx)?;

        row.map(ArticleDetail::try_from).transpose()
    }

    async fn list(&self, listing: &ArticleListing) -> DomainResult<Vec<ArticleSummary>> {
        let mut builder = Self::listing_query(listing);
        let rows = builder
            .build_query_as::<ArticleSummaryRow>()
            .fetch_all(&self.pool)
            .await
            .map_err(map_sqlx)?;

        rows.into_iter().map(ArticleSummary::try_from).collect()
    }
}
