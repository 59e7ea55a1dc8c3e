//! Shared test utilities for the treebook test suite.
//!
//! ```rust
//! use crate::test_helpers::*;
//!
//! let ws = Workspace::with_input(SAMPLE_TREE);
//! build(&ws.config).unwrap();
//! assert_eq!(list_files(&ws.config.content_dir), vec!["main.md", "src.md", "utils.md"]);
//! ```

use std::fs;
use std::path::Path;
use tempfile::TempDir;

use crate::config::{Config, DEFAULT_CONTENT_DIR, DEFAULT_SUMMARY_PATH};

/// The three-node listing used throughout the docs.
pub const SAMPLE_TREE: &str = "├── src\n│   ├── main\n│   └── utils";

// =========================================================================
// Fixture setup
// =========================================================================

/// A temp directory with a config pointing every path inside it.
///
/// The input file is `output.log`, stubs go to `your-content/`, and the
/// summary to `SUMMARY.md`, all under the temp root.
pub struct Workspace {
    pub dir: TempDir,
    pub config: Config,
}

impl Workspace {
    /// Workspace whose input file does not exist.
    pub fn without_input() -> Self {
        let dir = TempDir::new().unwrap();
        let config = Config {
            input: dir.path().join("output.log"),
            content_dir: dir.path().join(DEFAULT_CONTENT_DIR),
            summary_path: dir.path().join(DEFAULT_SUMMARY_PATH),
            ..Config::default()
        };
        Self { dir, config }
    }

    /// Workspace with `tree` written to the input file.
    pub fn with_input(tree: &str) -> Self {
        let ws = Self::without_input();
        fs::write(&ws.config.input, tree).unwrap();
        ws
    }
}

// =========================================================================
// Filesystem helpers
// =========================================================================

/// Sorted file names directly inside `dir`. Panics if `dir` can't be read.
pub fn list_files(dir: &Path) -> Vec<String> {
    let mut names: Vec<String> = fs::read_dir(dir)
        .unwrap_or_else(|e| panic!("cannot read {}: {e}", dir.display()))
        .filter_map(|e| e.ok())
        .filter(|e| e.path().is_file())
        .map(|e| e.file_name().to_string_lossy().into_owned())
        .collect();
    names.sort();
    names
}
