//! File system repository

use crate::error::{Result, TipcheckError};
use crate::infrastructure::config::{Config, CONFIG_FILE};
use log::{debug, info, warn};
use std::fs;
use std::path::{Path, PathBuf};
use walkdir::{DirEntry, WalkDir};

/// Environment variable that pins the corpus root
pub const ROOT_ENV: &str = "TIPCHECK_ROOT";

/// Abstract repository for corpus operations
pub trait CorpusRepository {
    /// Get the root directory of this repository
    fn root(&self) -> &Path;

    /// Load configuration from .tipcheck.toml (defaults if absent)
    fn load_config(&self) -> Result<Config>;

    /// Save configuration to .tipcheck.toml
    fn save_config(&self, config: &Config) -> Result<()>;

    /// Check if .tipcheck.toml exists
    fn is_initialized(&self) -> bool;

    /// Paths of all article files, sorted
    fn list_articles(&self, config: &Config) -> Result<Vec<PathBuf>>;

    /// Read one article file
    fn read_article(&self, path: &Path) -> Result<String>;
}

/// File system implementation of CorpusRepository
#[derive(Debug, Clone)]
pub struct FileSystemRepository {
    pub root: PathBuf,
}

impl FileSystemRepository {
    /// Create a new repository with the given root directory
    pub fn new(root: PathBuf) -> Self {
        FileSystemRepository { root }
    }

    /// Discover the corpus root.
    /// First checks TIPCHECK_ROOT, then walks up from the current directory.
    pub fn discover() -> Result<Self> {
        if let Ok(root_path) = std::env::var(ROOT_ENV) {
            let path = PathBuf::from(root_path);
            if path.is_dir() {
                info!("corpus root from {}: {}", ROOT_ENV, path.display());
                return Ok(FileSystemRepository::new(path));
            } else {
                return Err(TipcheckError::Config(format!(
                    "{} is set to '{}' but that is not a directory",
                    ROOT_ENV,
                    path.display()
                )));
            }
        }

        let current_dir = std::env::current_dir()?;
        Self::discover_from(&current_dir)
    }

    /// Walk up from `start` to the nearest directory holding .tipcheck.toml.
    /// Without one, `start` itself is the root.
    pub fn discover_from(start: &Path) -> Result<Self> {
        if !start.is_dir() {
            return Err(TipcheckError::Config(format!(
                "Not a directory: {}",
                start.display()
            )));
        }

        let mut current = Some(start);
        while let Some(dir) = current {
            if Self::has_config(dir) {
                info!("corpus root: {}", dir.display());
                return Ok(FileSystemRepository::new(dir.to_path_buf()));
            }
            current = dir.parent();
        }

        info!("no {} found, using {}", CONFIG_FILE, start.display());
        Ok(FileSystemRepository::new(start.to_path_buf()))
    }

    fn has_config(path: &Path) -> bool {
        path.join(CONFIG_FILE).is_file()
    }

    /// Path relative to the root, for messages
    pub fn relative(&self, path: &Path) -> PathBuf {
        path.strip_prefix(&self.root)
            .map(Path::to_path_buf)
            .unwrap_or_else(|_| path.to_path_buf())
    }
}

fn is_hidden(entry: &DirEntry) -> bool {
    entry.depth() > 0
        && entry
            .file_name()
            .to_str()
            .map(|s| s.starts_with('.'))
            .unwrap_or(false)
}

impl CorpusRepository for FileSystemRepository {
    fn root(&self) -> &Path {
        &self.root
    }

    fn load_config(&self) -> Result<Config> {
        Config::load_from_dir(&self.root)
    }

    fn save_config(&self, config: &Config) -> Result<()> {
        config.save_to_dir(&self.root)
    }

    fn is_initialized(&self) -> bool {
        Self::has_config(&self.root)
    }

    fn list_articles(&self, config: &Config) -> Result<Vec<PathBuf>> {
        let content_dir = self.root.join(&config.content_dir);
        if !content_dir.is_dir() {
            return Err(TipcheckError::Config(format!(
                "Content directory not found: {}",
                content_dir.display()
            )));
        }

        let mut articles = Vec::new();
        // Symlinked articles and directories count as part of the corpus
        let walker = WalkDir::new(&content_dir)
            .follow_links(true)
            .sort_by_file_name()
            .into_iter()
            .filter_entry(|e| !is_hidden(e));

        for entry in walker {
            if let Err(err) = &entry {
                if let Some(ancestor) = err.loop_ancestor() {
                    warn!(
                        "skipping symlink loop at {} (points back to {})",
                        err.path().map(|p| p.display().to_string()).unwrap_or_default(),
                        ancestor.display()
                    );
                    continue;
                }
            }
            let entry = entry.map_err(|e| {
                TipcheckError::Io(
                    e.into_io_error()
                        .unwrap_or_else(|| std::io::Error::other("directory walk failed")),
                )
            })?;

            if !entry.file_type().is_file() {
                if !entry.file_type().is_dir() {
                    debug!("skipping {}: not a regular file", entry.path().display());
                }
                continue;
            }

            let path = entry.path();
            let matches_ext = path
                .extension()
                .and_then(|e| e.to_str())
                .map(|e| e == config.extension)
                .unwrap_or(false);
            let excluded = entry
                .file_name()
                .to_str()
                .map(|n| config.is_excluded(n))
                .unwrap_or(false);

            if matches_ext && !excluded {
                articles.push(path.to_path_buf());
            }
        }

        debug!("found {} article files", articles.len());
        Ok(articles)
    }

    fn read_article(&self, path: &Path) -> Result<String> {
        fs::read_to_string(path).map_err(TipcheckError::Io)
    }
}
