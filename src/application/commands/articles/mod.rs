// src/application/commands/articles/mod.rs
mod service;
mod votes;

pub use service::ArticleCommandService;
