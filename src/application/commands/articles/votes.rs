use super::ArticleCommandService;
use crate::{
    application::{
        commands::UpdateVotesCommand,
        dto::ArticleDto,
        error::{ApplicationError, ApplicationResult},
    },
    domain::{article::ArticleId, errors::ARTICLE_NOT_FOUND, votes::VoteDelta},
};

impl ArticleCommandService {
    pub async fn update_votes(&self, command: UpdateVotesCommand) -> ApplicationResult<ArticleDto> {
        let id = ArticleId::from(command.id);
        let delta = VoteDelta::from(command.inc_votes);

        self.validator.assert_article_exists(id).await?;

        let updated = self
            .write_repo
            .increment_votes(id, delta)
            .await?
            .ok_or_else(|| ApplicationError::not_found(ARTICLE_NOT_FOUND))?;

        tracing::info!(article_id = %id, %delta, votes = updated.votes, "article votes updated");
        Ok(updated.into())
    }
}
