pub mod article;
pub mod comment;
pub mod errors;
pub mod topic;
pub mod user;
pub mod votes;
