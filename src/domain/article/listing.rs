// src/domain/article/listing.rs
use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::topic::TopicSlug;
use std::str::FromStr;

pub const INVALID_SORT: &str = "Invalid sort query";
pub const INVALID_ORDER: &str = "Invalid order query";

/// Columns an article listing may be ordered by.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ArticleSortField {
    Title,
    Author,
    #[default]
    CreatedAt,
    Votes,
}

impl ArticleSortField {
    pub const ALL: [Self; 4] = [Self::Title, Self::Author, Self::CreatedAt, Self::Votes];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Title => "title",
            Self::Author => "author",
            Self::CreatedAt => "created_at",
            Self::Votes => "votes",
        }
    }

    /// Fully qualified column reference for SQL `ORDER BY`.
    pub fn column(&self) -> &'static str {
        match self {
            Self::Title => "articles.title",
            Self::Author => "articles.author",
            Self::CreatedAt => "articles.created_at",
            Self::Votes => "articles.votes",
        }
    }
}

impl FromStr for ArticleSortField {
    type Err = DomainError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|field| field.as_str().eq_ignore_ascii_case(value))
            .ok_or_else(|| DomainError::Validation(INVALID_SORT.into()))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortOrder {
    Asc,
    #[default]
    Desc,
}

impl SortOrder {
    pub fn as_sql(&self) -> &'static str {
        match self {
            Self::Asc => "ASC",
            Self::Desc => "DESC",
        }
    }
}

impl FromStr for SortOrder {
    type Err = DomainError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        if value.eq_ignore_ascii_case("asc") {
            Ok(Self::Asc)
        } else if value.eq_ignore_ascii_case("desc") {
            Ok(Self::Desc)
        } else {
            Err(DomainError::Validation(INVALID_ORDER.into()))
        }
    }
}

/// Validated parameters for an article listing.
#[derive(Debug, Clone, Default)]
pub struct ArticleListing {
    pub topic: Option<TopicSlug>,
    pub sort_by: ArticleSortField,
    pub order: SortOrder,
}

impl ArticleListing {
    /// Absent parameters fall back to `created_at DESC`; present ones must be
    /// on the allow-list. The sort field is checked before the direction.
    pub fn parse(
        topic: Option<String>,
        sort_by: Option<&str>,
        order: Option<&str>,
    ) -> DomainResult<Self> {
        let sort_by = sort_by
            .map(str::parse::<ArticleSortField>)
            .transpose()?
            .unwrap_or_default();
        let order = order
            .map(str::parse::<SortOrder>)
            .transpose()?
            .unwrap_or_default();
        Ok(Self {
            topic: topic.map(TopicSlug::new),
            sort_by,
            order,
        })
    }
}
