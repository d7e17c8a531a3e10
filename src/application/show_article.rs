//! Show article use case

use crate::domain::Article;
use crate::error::{Result, TipcheckError};
use std::fs;
use std::path::Path;

/// Parse a single article file
pub fn show_article(path: &Path) -> Result<Article> {
    let text = fs::read_to_string(path).map_err(|e| TipcheckError::Io(e).in_file(path))?;
    Article::parse(&text).map_err(|e| e.in_file(path))
}
