//! Application layer - Use cases and orchestration

pub mod check;
pub mod init;
pub mod list_articles;
pub mod load;
pub mod show_article;

pub use check::{CheckCorpusService, CheckReport};
pub use init::InitService;
pub use list_articles::ListArticlesService;
pub use show_article::show_article;
