//! Shared corpus loading for the corpus-wide use cases

use crate::domain::{Article, Corpus};
use crate::error::{Result, TipcheckError};
use crate::infrastructure::{Config, CorpusRepository, FileSystemRepository};
use log::{debug, warn};

/// A loaded corpus plus the per-file problems found while loading
#[derive(Debug, Default)]
pub struct LoadedCorpus {
    /// Articles that parsed, keyed by path relative to the root
    pub corpus: Corpus,
    /// Per-file errors, already attributed to their file
    pub problems: Vec<TipcheckError>,
    /// Number of article files read
    pub files: usize,
}

/// Read and parse every article file of the repository.
///
/// Only configuration and discovery failures are returned as `Err`; a file
/// that does not parse is recorded in `problems` and loading continues.
pub fn load_corpus(repository: &FileSystemRepository, config: &Config) -> Result<LoadedCorpus> {
    let mut loaded = LoadedCorpus::default();

    for path in repository.list_articles(config)? {
        let relative = repository.relative(&path);
        loaded.files += 1;

        let text = match repository.read_article(&path) {
            Ok(text) => text,
            Err(e) => {
                loaded.problems.push(e.in_file(&relative));
                continue;
            }
        };

        match Article::parse(&text) {
            Ok(article) => {
                debug!(
                    "parsed {} (order {}, permalink {})",
                    relative.display(),
                    article.order,
                    article.permalink
                );
                for key in article.extra.keys() {
                    warn!("{}: unrecognized front-matter key '{}'", relative.display(), key);
                }
                if let Err(e) = config.check_layout(&article.layout) {
                    loaded.problems.push(e.in_file(&relative));
                }
                loaded.corpus.push(relative, article);
            }
            Err(e) => loaded.problems.push(e.in_file(&relative)),
        }
    }

    Ok(loaded)
}
