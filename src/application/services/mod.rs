// src/application/services/mod.rs
pub mod existence;

use std::sync::Arc;

use crate::{
    application::{
        commands::{articles::ArticleCommandService, comments::CommentCommandService},
        ports::ClockPort,
        queries::{
            articles::ArticleQueryService, topics::TopicQueryService, users::UserQueryService,
        },
    },
    domain::{
        article::{ArticleReadRepository, ArticleWriteRepository},
        comment::CommentRepository,
        topic::TopicRepository,
        user::UserRepository,
    },
};

pub use existence::ExistenceValidator;

pub struct ApplicationServices {
    pub article_commands: Arc<ArticleCommandService>,
    pub article_queries: Arc<ArticleQueryService>,
    pub comment_commands: Arc<CommentCommandService>,
    pub topic_queries: Arc<TopicQueryService>,
    pub user_queries: Arc<UserQueryService>,
}

impl ApplicationServices {
    pub fn new(
        topic_repo: Arc<dyn TopicRepository>,
        article_read_repo: Arc<dyn ArticleReadRepository>,
        article_write_repo: Arc<dyn ArticleWriteRepository>,
        comment_repo: Arc<dyn CommentRepository>,
        user_repo: Arc<dyn UserRepository>,
        clock: Arc<ClockPort>,
    ) -> Self {
        let validator = Arc::new(ExistenceValidator::new(
            Arc::clone(&article_read_repo),
            Arc::clone(&comment_repo),
            Arc::clone(&topic_repo),
            Arc::clone(&user_repo),
        ));

        let article_queries = Arc::new(ArticleQueryService::new(
            Arc::clone(&article_read_repo),
            Arc::clone(&comment_repo),
            Arc::clone(&validator),
        ));

        let article_commands = Arc::new(ArticleCommandService::new(
            Arc::clone(&article_write_repo),
            Arc::clone(&validator),
        ));

        let comment_commands = Arc::new(CommentCommandService::new(
            Arc::clone(&comment_repo),
            Arc::clone(&validator),
            Arc::clone(&clock),
        ));

        let topic_queries = Arc::new(TopicQueryService::new(Arc::clone(&topic_repo)));
        let user_queries = Arc::new(UserQueryService::new(Arc::clone(&user_repo)));

        Self {
            article_commands,
            article_queries,
            comment_commands,
            topic_queries,
            user_queries,
        }
    }
}
