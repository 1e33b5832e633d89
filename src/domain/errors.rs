// src/domain/errors.rs
use thiserror::Error;

pub type DomainResult<T> = Result<T, DomainError>;

#[derive(Debug, Error)]
pub enum DomainError {
    #[error("validation error: {0}")]
    Validation(String),
    #[error("not found: {0}")]
    NotFound(String),
    #[error("persistence error: {0}")]
    Persistence(String),
}

// Client-facing reasons, shared by every layer that can detect them.
pub const ARTICLE_NOT_FOUND: &str = "Article doesn't exist";
pub const COMMENT_NOT_FOUND: &str = "Comment doesn't exist";
pub const TOPIC_NOT_FOUND: &str = "Topic doesn't exist";
pub const USER_NOT_FOUND: &str = "User doesn't exist";
pub const INVALID_USERNAME: &str = "Invalid username";
pub const EMPTY_FIELD: &str = "Field cannot be empty!";
pub const VALUE_OUT_OF_RANGE: &str = "value out of range";
