//! Initialize corpus config use case

use crate::error::{Result, TipcheckError};
use crate::infrastructure::config::CONFIG_FILE;
use crate::infrastructure::{Config, CorpusRepository, FileSystemRepository};
use log::info;
use std::path::{Path, PathBuf};

/// Service for writing a default .tipcheck.toml
pub struct InitService;

impl InitService {
    /// Write the default config into `path`. Fails if one already exists.
    pub fn execute(path: &Path) -> Result<PathBuf> {
        if !path.is_dir() {
            return Err(TipcheckError::Config(format!(
                "Not a directory: {}",
                path.display()
            )));
        }

        let repo = FileSystemRepository::new(path.to_path_buf());
        if repo.is_initialized() {
            return Err(TipcheckError::Config(format!(
                "{} already exists in {}",
                CONFIG_FILE,
                path.display()
            )));
        }

        repo.save_config(&Config::default())?;
        info!("wrote {}", path.join(CONFIG_FILE).display());

        Ok(path.join(CONFIG_FILE))
    }
}
