//! Check corpus use case

use crate::application::load::load_corpus;
use crate::error::{Result, TipcheckError};
use crate::infrastructure::{CorpusRepository, FileSystemRepository};
use log::{info, warn};

/// Outcome of a corpus check
#[derive(Debug, Default)]
pub struct CheckReport {
    /// Number of article files examined
    pub checked: usize,
    /// Parse, layout and duplicate-key errors, in discovery order
    pub problems: Vec<TipcheckError>,
    /// Missing ranges in the order sequence (warnings only)
    pub order_gaps: Vec<(i64, i64)>,
}

impl CheckReport {
    pub fn is_clean(&self) -> bool {
        self.problems.is_empty()
    }

    /// Exit code of the first problem, or 0
    pub fn exit_code(&self) -> i32 {
        self.problems.first().map_or(0, TipcheckError::exit_code)
    }
}

/// Service for validating every article of a corpus
pub struct CheckCorpusService {
    repository: FileSystemRepository,
}

impl CheckCorpusService {
    /// Create a new check service
    pub fn new(repository: FileSystemRepository) -> Self {
        CheckCorpusService { repository }
    }

    /// Parse every article, then validate corpus-wide uniqueness.
    ///
    /// Document problems are collected in the report rather than returned as
    /// errors; `Err` means the corpus itself could not be read.
    pub fn execute(&self) -> Result<CheckReport> {
        let config = self.repository.load_config()?;
        let loaded = load_corpus(&self.repository, &config)?;

        let mut problems = loaded.problems;
        problems.extend(loaded.corpus.duplicates());

        let order_gaps = loaded.corpus.order_gaps();
        for (from, to) in &order_gaps {
            if from == to {
                warn!("order {} is not used by any article", from);
            } else {
                warn!("orders {}-{} are not used by any article", from, to);
            }
        }

        info!(
            "checked {} files under {}: {} problems",
            loaded.files,
            self.repository.root().display(),
            problems.len()
        );

        Ok(CheckReport {
            checked: loaded.files,
            problems,
            order_gaps,
        })
    }
}
