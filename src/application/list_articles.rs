//! List articles use case

use crate::application::load::load_corpus;
use crate::domain::CorpusEntry;
use crate::error::Result;
use crate::infrastructure::{CorpusRepository, FileSystemRepository};

/// Service for listing articles in order
pub struct ListArticlesService {
    repository: FileSystemRepository,
}

impl ListArticlesService {
    /// Create a new list service
    pub fn new(repository: FileSystemRepository) -> Self {
        ListArticlesService { repository }
    }

    /// Articles sorted by order key. Unpublished ones are left out unless
    /// `include_unpublished` is set.
    ///
    /// # Errors
    ///
    /// Fails with the first per-file problem: a listing of a corpus that does
    /// not parse would silently drop articles.
    pub fn execute(&self, include_unpublished: bool) -> Result<Vec<CorpusEntry>> {
        let config = self.repository.load_config()?;
        let loaded = load_corpus(&self.repository, &config)?;

        if let Some(problem) = loaded.problems.into_iter().next() {
            return Err(problem);
        }

        Ok(loaded
            .corpus
            .listing(include_unpublished)
            .into_iter()
            .cloned()
            .collect())
    }
}
