use super::CommentCommandService;
use crate::{
    application::{
        commands::UpdateVotesCommand,
        dto::CommentDto,
        error::{ApplicationError, ApplicationResult},
    },
    domain::{comment::CommentId, errors::COMMENT_NOT_FOUND, votes::VoteDelta},
};

impl CommentCommandService {
    pub async fn update_votes(&self, command: UpdateVotesCommand) -> ApplicationResult<CommentDto> {
        let id = CommentId::from(command.id);
        let delta = VoteDelta::from(command.inc_votes);

        self.validator.assert_comment_exists(id).await?;

        let updated = self
            .comment_repo
            .increment_votes(id, delta)
            .await?
            .ok_or_else(|| ApplicationError::not_found(COMMENT_NOT_FOUND))?;

        tracing::info!(comment_id = %id, %delta, votes = updated.votes, "comment votes updated");
        Ok(updated.into())
    }
}
