//! Domain layer - Article model and front-matter contract

pub mod article;
pub mod body;
pub mod corpus;
pub mod front_matter;
pub mod order;

pub use article::Article;
pub use corpus::{Corpus, CorpusEntry};
pub use order::OrderKey;
