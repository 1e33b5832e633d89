// src/application/commands/articles/service.rs
use std::sync::Arc;

use crate::{
    application::services::ExistenceValidator, domain::article::ArticleWriteRepository,
};

pub struct ArticleCommandService {
    pub(super) write_repo: Arc<dyn ArticleWriteRepository>,
    pub(super) validator: Arc<ExistenceValidator>,
}

impl ArticleCommandService {
    pub fn new(
        write_repo: Arc<dyn ArticleWriteRepository>,
        validator: Arc<ExistenceValidator>,
    ) -> Self {
        Self {
            write_repo,
            validator,
        }
    }
}
