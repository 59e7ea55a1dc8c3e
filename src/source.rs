//! Reading the tree listing from disk.
//!
//! A missing file is an expected condition (the listing is usually captured
//! from a previous command's log), so it is reported as [`TreeInput::Missing`]
//! rather than an error. Any other I/O failure is fatal.

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum SourceError {
    #[error("Failed to read tree listing {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Outcome of reading the tree listing, checked once at the pipeline entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TreeInput {
    /// Non-empty listing, surrounding whitespace trimmed.
    Proceed(String),
    /// The file does not exist.
    Missing(PathBuf),
    /// The file exists but holds only whitespace.
    Empty,
}

impl TreeInput {
    /// The listing text, or `None` for either early-exit case.
    pub fn text(&self) -> Option<&str> {
        match self {
            TreeInput::Proceed(text) => Some(text),
            TreeInput::Missing(_) | TreeInput::Empty => None,
        }
    }
}

pub fn read_tree(path: &Path) -> Result<TreeInput, SourceError> {
    match fs::read_to_string(path) {
        Ok(content) => {
            let trimmed = content.trim();
            if trimmed.is_empty() {
                Ok(TreeInput::Empty)
            } else {
                Ok(TreeInput::Proceed(trimmed.to_string()))
            }
        }
        Err(e) if e.kind() == ErrorKind::NotFound => Ok(TreeInput::Missing(path.to_path_buf())),
        Err(e) => Err(SourceError::Read {
            path: path.to_path_buf(),
            source: e,
        }),
    }
}
