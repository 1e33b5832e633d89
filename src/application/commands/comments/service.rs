// src/application/commands/comments/service.rs
use std::sync::Arc;

use crate::{
    application::{ports::ClockPort, services::ExistenceValidator},
    domain::comment::CommentRepository,
};

pub struct CommentCommandService {
    pub(super) comment_repo: Arc<dyn CommentRepository>,
    pub(super) validator: Arc<ExistenceValidator>,
    pub(super) clock: Arc<ClockPort>,
}

impl CommentCommandService {
    pub fn new(
        comment_repo: Arc<dyn CommentRepository>,
        validator: Arc<ExistenceValidator>,
        clock: Arc<ClockPort>,
    ) -> Self {
        Self {
            comment_repo,
            validator,
            clock,
        }
    }
}
