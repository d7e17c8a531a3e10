//! tipcheck - front-matter validator for Tips of the Week articles
//!
//! Parses the `---`-delimited front matter of markdown articles into a fixed
//! record, checks required fields and value types, and enforces corpus-wide
//! uniqueness of `permalink` and `order`.

pub mod application;
pub mod cli;
pub mod domain;
pub mod error;
pub mod infrastructure;

pub use domain::{Article, Corpus, OrderKey};
pub use error::TipcheckError;
