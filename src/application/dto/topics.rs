use crate::domain::topic::Topic;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct TopicDto {
    pub slug: String,
    pub description: String,
}

impl From<Topic> for TopicDto {
    fn from(topic: Topic) -> Self {
        Self {
            slug: topic.slug.into_inner(),
            description: topic.description,
        }
    }
}
