// tests/support/mocks/store.rs
use std::cmp::Ordering;
use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering as AtomicOrdering};

use async_trait::async_trait;

use newsroom_core::domain::article::{
    Article, ArticleDetail, ArticleId, ArticleListing, ArticleReadRepository, ArticleSortField,
    ArticleSummary, ArticleWriteRepository, SortOrder,
};
use newsroom_core::domain::comment::{Comment, CommentId, CommentRepository, NewComment};
use newsroom_core::domain::errors::{DomainError, DomainResult, VALUE_OUT_OF_RANGE};
use newsroom_core::domain::topic::{Topic, TopicRepository, TopicSlug};
use newsroom_core::domain::user::{User, UserRepository, Username};
use newsroom_core::domain::votes::VoteDelta;

use crate::support::builders;

#[derive(Default)]
struct Tables {
    topics: Vec<Topic>,
    users: Vec<User>,
    articles: Vec<Article>,
    comments: Vec<Comment>,
    next_comment_id: i32,
}

/// In-memory stand-in for every repository, seeded with a small fixed
/// dataset. Write calls are counted so tests can check that rejected requests
/// never reach storage.
pub struct MemoryStore {
    tables: Mutex<Tables>,
    writes: AtomicUsize,
}

impl MemoryStore {
    pub fn empty() -> Self {
        Self {
            tables: Mutex::new(Tables {
                next_comment_id: 1,
                ..Tables::default()
            }),
            writes: AtomicUsize::new(0),
        }
    }

    /// Topics `mitch`, `cats` and `paper` (no articles); users including
    /// `lurker` (no content); article 1 by `butter_bridge` with 100 votes and
    /// four comments; article 7 with no comments.
    pub fn seeded() -> Self {
        let store = Self::empty();
        {
            let mut tables = store.tables.lock().unwrap();
            tables.topics = builders::seed_topics();
            tables.users = builders::seed_users();
            tables.articles = builders::seed_articles();
            tables.comments = builders::seed_comments();
            tables.next_comment_id = tables.comments.iter().map(|c| c.id.0).max().unwrap_or(0) + 1;
        }
        store
    }

    pub fn write_count(&self) -> usize {
        self.writes.load(AtomicOrdering::SeqCst)
    }

    pub fn comment_count(&self) -> usize {
        self.tables.lock().unwrap().comments.len()
    }

    pub fn article_votes(&self, id: i32) -> Option<i32> {
        let tables = self.tables.lock().unwrap();
        tables
            .articles
            .iter()
            .find(|a| a.id.0 == id)
            .map(|a| a.votes)
    }

    fn record_write(&self) {
        self.writes.fetch_add(1, AtomicOrdering::SeqCst);
    }
}

/// Same outcome as a Postgres `INTEGER` overflow once it has been mapped.
fn apply_or_reject(delta: VoteDelta, current: i32) -> DomainResult<i32> {
    delta
        .apply(current)
        .ok_or_else(|| DomainError::Validation(VALUE_OUT_OF_RANGE.into()))
}

fn compare(a: &ArticleSummary, b: &ArticleSummary, field: ArticleSortField) -> Ordering {
    match field {
        ArticleSortField::Title => a.title.cmp(&b.title),
        ArticleSortField::Author => a.author.as_str().cmp(b.author.as_str()),
        ArticleSortField::CreatedAt => a.created_at.cmp(&b.created_at),
        ArticleSortField::Votes => a.votes.cmp(&b.votes),
    }
}

#[async_trait]
impl TopicRepository for MemoryStore {
    async fn list(&self) -> DomainResult<Vec<Topic>> {
        Ok(self.tables.lock().unwrap().topics.clone())
    }

    async fn exists(&self, slug: &TopicSlug) -> DomainResult<bool> {
        let tables = self.tables.lock().unwrap();
        Ok(tables.topics.iter().any(|t| &t.slug == slug))
    }
}

#[async_trait]
impl UserRepository for MemoryStore {
    async fn list(&self) -> DomainResult<Vec<User>> {
        let mut users = self.tables.lock().unwrap().users.clone();
        users.sort_by(|a, b| a.username.as_str().cmp(b.username.as_str()));
        Ok(users)
    }

    async fn find_by_username(&self, username: &Username) -> DomainResult<Option<User>> {
        let tables = self.tables.lock().unwrap();
        Ok(tables.users.iter().find(|u| &u.username == username).cloned())
    }

    async fn exists(&self, username: &Username) -> DomainResult<bool> {
        let tables = self.tables.lock().unwrap();
        Ok(tables.users.iter().any(|u| &u.username == username))
    }
}

#[async_trait]
impl ArticleReadRepository for MemoryStore {
    async fn exists(&self, id: ArticleId) -> DomainResult<bool> {
        let tables = self.tables.lock().unwrap();
        Ok(tables.articles.iter().any(|a| a.id == id))
    }

    async fn find_detail(&self, id: ArticleId) -> DomainResult<Option<ArticleDetail>> {
        let tables = self.tables.lock().unwrap();
        let count = tables.comments.iter().filter(|c| c.article_id == id).count();
        Ok(tables
            .articles
            .iter()
            .find(|a| a.id == id)
            .cloned()
            .map(|article| ArticleDetail::new(article, count as i64)))
    }

    async fn list(&self, listing: &ArticleListing) -> DomainResult<Vec<ArticleSummary>> {
        let tables = self.tables.lock().unwrap();
        let mut summaries: Vec<ArticleSummary> = tables
            .articles
            .iter()
            .filter(|a| listing.topic.as_ref().is_none_or(|topic| &a.topic == topic))
            .map(|a| {
                let count = tables
                    .comments
                    .iter()
                    .filter(|c| c.article_id == a.id)
                    .count();
                ArticleDetail::new(a.clone(), count as i64).into()
            })
            .collect();

        summaries.sort_by(|a, b| {
            let ordering = compare(a, b, listing.sort_by);
            match listing.order {
                SortOrder::Asc => ordering,
                SortOrder::Desc => ordering.reverse(),
            }
        });
        Ok(summaries)
    }
}

#[async_trait]
impl ArticleWriteRepository for MemoryStore {
    async fn increment_votes(
        &self,
        id: ArticleId,
        delta: VoteDelta,
    ) -> DomainResult<Option<Article>> {
        self.record_write();
        let mut tables = self.tables.lock().unwrap();
        let Some(article) = tables.articles.iter_mut().find(|a| a.id == id) else {
            return Ok(None);
        };
        article.votes = apply_or_reject(delta, article.votes)?;
        Ok(Some(article.clone()))
    }
}

#[async_trait]
impl CommentRepository for MemoryStore {
    async fn exists(&self, id: CommentId) -> DomainResult<bool> {
        let tables = self.tables.lock().unwrap();
        Ok(tables.comments.iter().any(|c| c.id == id))
    }

    async fn list_by_article(&self, article_id: ArticleId) -> DomainResult<Vec<Comment>> {
        let tables = self.tables.lock().unwrap();
        let mut comments: Vec<Comment> = tables
            .comments
            .iter()
            .filter(|c| c.article_id == article_id)
            .cloned()
            .collect();
        comments.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(comments)
    }

    async fn insert(&self, comment: NewComment) -> DomainResult<Comment> {
        self.record_write();
        let mut tables = self.tables.lock().unwrap();
        let id = CommentId(tables.next_comment_id);
        tables.next_comment_id += 1;
        let stored = Comment {
            id,
            article_id: comment.article_id,
            author: comment.author,
            body: comment.body.into_inner(),
            votes: 0,
            created_at: comment.created_at,
        };
        tables.comments.push(stored.clone());
        Ok(stored)
    }

    async fn increment_votes(
        &self,
        id: CommentId,
        delta: VoteDelta,
    ) -> DomainResult<Option<Comment>> {
        self.record_write();
        let mut tables = self.tables.lock().unwrap();
        let Some(comment) = tables.comments.iter_mut().find(|c| c.id == id) else {
            return Ok(None);
        };
        comment.votes = apply_or_reject(delta, comment.votes)?;
        Ok(Some(comment.clone()))
    }

    async fn delete(&self, id: CommentId) -> DomainResult<()> {
        self.record_write();
        let mut tables = self.tables.lock().unwrap();
        let before = tables.comments.len();
        tables.comments.retain(|c| c.id != id);
        if tables.comments.len() == before {
            return Err(DomainError::NotFound(format!("comment {id}")));
        }
        Ok(())
    }
}

/// Every call fails the way an unreachable database would.
pub struct BrokenStore;

fn broken<T>() -> DomainResult<T> {
    Err(DomainError::Persistence(
        "pool timed out while waiting for an open connection".into(),
    ))
}

#[async_trait]
impl TopicRepository for BrokenStore {
    async fn list(&self) -> DomainResult<Vec<Topic>> {
        broken()
    }

    async fn exists(&self, _slug: &TopicSlug) -> DomainResult<bool> {
        broken()
    }
}

#[async_trait]
impl UserRepository for BrokenStore {
    async fn list(&self) -> DomainResult<Vec<User>> {
        broken()
    }

    async fn find_by_username(&self, _username: &Username) -> DomainResult<Option<User>> {
        broken()
    }

    async fn exists(&self, _username: &Username) -> DomainResult<bool> {
        broken()
    }
}

#[async_trait]
impl ArticleReadRepository for BrokenStore {
    async fn exists(&self, _id: ArticleId) -> DomainResult<bool> {
        broken()
    }

    async fn find_detail(&self, _id: ArticleId) -> DomainResult<Option<ArticleDetail>> {
        broken()
    }

    async fn list(&self, _listing: &ArticleListing) -> DomainResult<Vec<ArticleSummary>> {
        broken()
    }
}

#[async_trait]
impl ArticleWriteRepository for BrokenStore {
    async fn increment_votes(
        &self,
        _id: ArticleId,
        _delta: VoteDelta,
    ) -> DomainResult<Option<Article>> {
        broken()
    }
}

#[async_trait]
impl CommentRepository for BrokenStore {
    async fn exists(&self, _id: CommentId) -> DomainResult<bool> {
        broken()
    }

    async fn list_by_article(&self, _article_id: ArticleId) -> DomainResult<Vec<Comment>> {
        broken()
    }

    async fn insert(&self, _comment: NewComment) -> DomainResult<Comment> {
        broken()
    }

    async fn increment_votes(
        &self,
        _id: CommentId,
        _delta: VoteDelta,
    ) -> DomainResult<Option<Comment>> {
        broken()
    }

    async fn delete(&self, _id: CommentId) -> DomainResult<()> {
        broken()
    }
}
