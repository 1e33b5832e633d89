use super::CommentCommandService;
use crate::{
    application::error::{ApplicationError, ApplicationResult},
    domain::{comment::CommentId, errors::COMMENT_NOT_FOUND},
};

pub struct DeleteCommentCommand {
    pub id: i32,
}

impl CommentCommandService {
    pub async fn delete_comment(&self, command: DeleteCommentCommand) -> ApplicationResult<()> {
        let id = CommentId::from(command.id);
        self.validator.assert_comment_exists(id).await?;

        // A concurrent delete may win the race after the check.
        self.comment_repo.delete(id).await.map_err(|err| {
            let err = ApplicationError::from(err);
            if err.is_not_found() {
                ApplicationError::not_found(COMMENT_NOT_FOUND)
            } else {
                err
            }
        })?;

        tracing::info!(comment_id = %id, "comment deleted");
        Ok(())
    }
}
