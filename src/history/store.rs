//! Persistence backends for the history log
//!
//! Stores deal in entries ordered oldest first, which is also the on-disk order
//! of [`TextFileStore`]: one entry per line, no header, no escaping.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Errors raised while reading or writing persisted history
#[derive(Debug, Error)]
pub enum HistoryError {
    #[error("failed to read history from {}: {source}", path.display())]
    Read { path: PathBuf, source: io::Error },

    #[error("failed to write history to {}: {source}", path.display())]
    Write { path: PathBuf, source: io::Error },
}

/// Somewhere an ordered list of history entries can be kept
pub trait HistoryStore {
    /// Load entries, oldest first
    fn load(&self) -> Result<Vec<String>, HistoryError>;

    /// Replace the stored entries with `oldest_first`
    fn save(&self, oldest_first: &[String]) -> Result<(), HistoryError>;
}

/// Plain text file, one entry per line
#[derive(Debug, Clone)]
pub struct TextFileStore {
    path: PathBuf,
}

impl TextFileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        TextFileStore { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl HistoryStore for TextFileStore {
    fn load(&self) -> Result<Vec<String>, HistoryError> {
        let content = fs::read_to_string(&self.path).map_err(|source| HistoryError::Read {
            path: self.path.clone(),
            source,
        })?;

        Ok(content
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .map(str::to_string)
            .collect())
    }

    fn save(&self, oldest_first: &[String]) -> Result<(), HistoryError> {
        let write_err = |source| HistoryError::Write {
            path: self.path.clone(),
            source,
        };

        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent).map_err(write_err)?;
            }
        }

        let mut content = String::new();
        for entry in oldest_first {
            content.push_str(entry);
            content.push('\n');
        }
        fs::write(&self.path, content).map_err(write_err)
    }
}
