pub mod articles;
pub mod comments;

/// Relative vote change requested for an article or comment.
#[derive(Debug, Clone, Copy)]
pub struct UpdateVotesCommand {
    pub id: i32,
    pub inc_votes: i32,
}
