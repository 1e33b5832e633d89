pub mod articles;
pub mod comments;
pub mod serde_time;
pub mod topics;
pub mod users;

pub use articles::{ArticleDetailDto, ArticleDto, ArticleSummaryDto};
pub use comments::CommentDto;
pub use topics::TopicDto;
pub use users::UserDto;
