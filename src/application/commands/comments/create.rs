// src/application/commands/comments/create.rs
use super::CommentCommandService;
use crate::{
    application::{
        dto::CommentDto,
        error::{ApplicationError, ApplicationResult},
    },
    domain::{
        article::ArticleId,
        comment::{CommentBody, NewComment},
        errors::{EMPTY_FIELD, INVALID_USERNAME},
        user::Username,
    },
};

/// Raw comment submission. Both fields are optional here so that a missing
/// field and a blank one are reported the same way.
#[derive(Debug, Clone, Default)]
pub struct CreateCommentCommand {
    pub article_id: i32,
    pub username: Option<String>,
    pub body: Option<String>,
}

impl CreateCommentCommand {
    fn into_parts(self) -> ApplicationResult<(ArticleId, Username, CommentBody)> {
        let author = self
            .username
            .map(Username::new)
            .and_then(Result::ok)
            .ok_or_else(|| ApplicationError::validation(EMPTY_FIELD))?;
        let body = self
            .body
            .map(CommentBody::new)
            .and_then(Result::ok)
            .ok_or_else(|| ApplicationError::validation(EMPTY_FIELD))?;
        Ok((ArticleId::from(self.article_id), author, body))
    }
}

impl CommentCommandService {
    /// Field, author and article checks must all pass before the insert is
    /// attempted. The two lookups run together but are reported in a fixed
    /// order: an unknown author first, then a missing article.
    pub async fn create_comment(
        &self,
        command: CreateCommentCommand,
    ) -> ApplicationResult<CommentDto> {
        let (article_id, author, body) = command.into_parts()?;

        let (author_check, article_check) = tokio::join!(
            self.validator.assert_user_exists(&author),
            self.validator.assert_article_exists(article_id),
        );
        author_check.map_err(|err| {
            if err.is_not_found() {
                ApplicationError::validation(INVALID_USERNAME)
            } else {
                err
            }
        })?;
        article_check?;

        let created = self
            .comment_repo
            .insert(NewComment {
                article_id,
                author,
                body,
                created_at: self.clock.now(),
            })
            .await?;

        tracing::info!(
            comment_id = %created.id,
            article_id = %created.article_id,
            author = %created.author,
            "comment created"
        );
        Ok(created.into())
    }
}
