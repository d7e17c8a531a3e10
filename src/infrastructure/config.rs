//! Configuration management

use crate::error::{Result, TipcheckError};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Name of the config file at the corpus root
pub const CONFIG_FILE: &str = ".tipcheck.toml";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Directory holding the articles, relative to the corpus root
    pub content_dir: PathBuf,
    /// Article file extension, without the dot
    pub extension: String,
    /// File names that are never treated as articles
    pub exclude: Vec<String>,
    /// Allowed `layout` values; empty allows any
    pub layouts: Vec<String>,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            content_dir: PathBuf::from("."),
            extension: "md".to_string(),
            exclude: vec!["README.md".to_string()],
            layouts: Vec::new(),
        }
    }
}

impl Config {
    /// Load config from .tipcheck.toml in the given directory.
    ///
    /// A missing file yields the defaults.
    pub fn load_from_dir(path: &Path) -> Result<Self> {
        let config_path = path.join(CONFIG_FILE);

        let contents = match fs::read_to_string(&config_path) {
            Ok(contents) => contents,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(Config::default()),
            Err(e) => return Err(TipcheckError::Io(e)),
        };

        let config: Config = toml::from_str(&contents).map_err(|e| {
            TipcheckError::Config(format!("Failed to parse {}: {}", CONFIG_FILE, e))
        })?;
        config.check()?;
        Ok(config)
    }

    /// Save config to .tipcheck.toml in the given directory
    pub fn save_to_dir(&self, path: &Path) -> Result<()> {
        let contents = toml::to_string_pretty(self)?;

        fs::write(path.join(CONFIG_FILE), contents)?;

        Ok(())
    }

    fn check(&self) -> Result<()> {
        if self.extension.is_empty() || self.extension.starts_with('.') {
            return Err(TipcheckError::Config(format!(
                "Invalid extension '{}': use the bare extension, e.g. \"md\"",
                self.extension
            )));
        }
        if self.content_dir.is_absolute() {
            return Err(TipcheckError::Config(format!(
                "content_dir must be relative to the corpus root: {}",
                self.content_dir.display()
            )));
        }
        Ok(())
    }

    /// Check a layout against the allowed list
    pub fn check_layout(&self, layout: &str) -> Result<()> {
        if self.layouts.is_empty() || self.layouts.iter().any(|l| l == layout) {
            Ok(())
        } else {
            Err(TipcheckError::mismatch(
                "layout",
                layout,
                &format!("one of: {}", self.layouts.join(", ")),
            ))
        }
    }

    /// Whether a file name is on the exclude list
    pub fn is_excluded(&self, file_name: &str) -> bool {
        self.exclude.iter().any(|e| e == file_name)
    }
}
