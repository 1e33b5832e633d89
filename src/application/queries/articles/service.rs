use std::sync::Arc;

use crate::{
    application::services::ExistenceValidator,
    domain::{article::ArticleReadRepository, comment::CommentRepository},
};

pub struct ArticleQueryService {
    pub(super) read_repo: Arc<dyn ArticleReadRepository>,
    pub(super) comment_repo: Arc<dyn CommentRepository>,
    pub(super) validator: Arc<ExistenceValidator>,
}

impl ArticleQueryService {
    pub fn new(
        read_repo: Arc<dyn ArticleReadRepository>,
        comment_repo: Arc<dyn CommentRepository>,
        validator: Arc<ExistenceValidator>,
    ) -> Self {
        Self {
            read_repo,
            comment_repo,
            validator,
        }
    }
}
