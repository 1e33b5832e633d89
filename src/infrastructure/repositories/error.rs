use crate::domain::errors::{ARTICLE_NOT_FOUND, DomainError, INVALID_USERNAME, VALUE_OUT_OF_RANGE};

const CNT_COMMENT_ARTICLE: &str = "comments_article_id_fkey";
const CNT_COMMENT_AUTHOR: &str = "comments_author_fkey";

// SQLSTATE codes with a client-facing meaning.
const FOREIGN_KEY_VIOLATION: &str = "23503";
const NUMERIC_VALUE_OUT_OF_RANGE: &str = "22003";
const INVALID_TEXT_REPRESENTATION: &str = "22P02";

/// Named comment constraints first, then SQLSTATE codes, then any other
/// named constraint. Everything left over is a persistence failure.
pub fn map_sqlx(err: sqlx::Error) -> DomainError {
    let sqlx::Error::Database(db_err) = &err else {
        return DomainError::Persistence(err.to_string());
    };

    match db_err.constraint() {
        Some(CNT_COMMENT_ARTICLE) => return DomainError::NotFound(ARTICLE_NOT_FOUND.into()),
        Some(CNT_COMMENT_AUTHOR) => return DomainError::Validation(INVALID_USERNAME.into()),
        _ => {}
    }

    if let Some(code) = db_err.code() {
        match code.as_ref() {
            FOREIGN_KEY_VIOLATION => {
                return DomainError::NotFound("referenced record not found".into());
            }
            NUMERIC_VALUE_OUT_OF_RANGE => {
                return DomainError::Validation(VALUE_OUT_OF_RANGE.into());
            }
            INVALID_TEXT_REPRESENTATION => {
                return DomainError::Validation("Bad request".into());
            }
            _ => {}
        }
    }

    match db_err.constraint() {
        Some(other) => DomainError::Persistence(format!("database constraint violation: {other}")),
        None => DomainError::Persistence(db_err.message().to_string()),
    }
}
