pub mod entity;
pub mod listing;
pub mod repository;
pub mod value_objects;

pub use entity::{Article, ArticleDetail, ArticleSummary};
pub use listing::{ArticleListing, ArticleSortField, SortOrder};
pub use repository::{ArticleReadRepository, ArticleWriteRepository};
pub use value_objects::ArticleId;
