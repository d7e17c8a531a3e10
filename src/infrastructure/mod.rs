//! Infrastructure layer - External I/O and persistence

pub mod config;
pub mod logging;
pub mod repository;

pub use config::Config;
pub use repository::{CorpusRepository, FileSystemRepository};
