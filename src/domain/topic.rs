// src/domain/topic.rs
use crate::domain::errors::{DomainError, DomainResult};
use async_trait::async_trait;
use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct TopicSlug(String);

impl TopicSlug {
    /// Slugs are matched verbatim, so an empty value is kept and simply
    /// never matches a stored topic.
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}

impl fmt::Display for TopicSlug {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Debug, Clone)]
pub struct Topic {
    pub slug: TopicSlug,
    pub description: String,
}

impl Topic {
    pub fn new(slug: impl Into<String>, description: impl Into<String>) -> DomainResult<Self> {
        let slug = slug.into();
        if slug.trim().is_empty() {
            return Err(DomainError::Validation("topic slug cannot be empty".into()));
        }
        Ok(Self {
            slug: TopicSlug::new(slug),
            description: description.into(),
        })
    }
}

#[async_trait]
pub trait TopicRepository: Send + Sync {
    async fn list(&self) -> DomainResult<Vec<Topic>>;
    async fn exists(&self, slug: &TopicSlug) -> DomainResult<bool>;
}
