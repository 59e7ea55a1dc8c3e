//! Stub page generation.
//!
//! Takes the rendered heading lines from [`crate::outline`] and writes one
//! markdown file per line into the content directory:
//!
//! ```text
//! ## main   →   your-content/main.md
//!
//!               ## main
//!
//!               *Add content here*
//! ```
//!
//! All files land flat in the content directory; hierarchy lives only in the
//! heading level and in `SUMMARY.md`. Titles that slugify to the same name
//! overwrite each other on disk but still produce separate entries.

use crate::naming::stub_filename;
use crate::outline::HEADING_MARKER;
use crate::types::StubEntry;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum StubError {
    #[error("Failed to create directory {path}: {source}")]
    CreateDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("Failed to write stub {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Split a rendered line back into `(depth, title)`.
///
/// Depth counts every `#` on the line, including any inside the title, so
/// `# C# notes` has depth 2. The title drops only the leading `#` run.
pub fn parse_rendered(line: &str) -> (usize, String) {
    let depth = line.matches(HEADING_MARKER).count();
    let title = line.trim_start_matches(HEADING_MARKER).trim().to_string();
    (depth, title)
}

/// Compute the entries for a set of rendered lines without touching disk.
pub fn plan_entries<S: AsRef<str>>(lines: &[S]) -> Vec<StubEntry> {
    lines
        .iter()
        .map(|line| {
            let (depth, title) = parse_rendered(line.as_ref());
            StubEntry {
                depth,
                filename: stub_filename(&title),
                title,
            }
        })
        .collect()
}

/// File body for a stub: heading, blank line, placeholder. No trailing newline.
pub fn stub_content(entry: &StubEntry, placeholder: &str) -> String {
    format!(
        "{} {}\n\n{}",
        HEADING_MARKER.to_string().repeat(entry.depth),
        entry.title,
        placeholder
    )
}

/// Write one stub file per rendered line under `base_dir`.
///
/// Returns the entries in input order. `base_dir` is created if needed.
pub fn create_stub_files<S: AsRef<str>>(
    lines: &[S],
    base_dir: &Path,
    placeholder: &str,
) -> Result<Vec<StubEntry>, StubError> {
    let entries = plan_entries(lines);

    for entry in &entries {
        let path = base_dir.join(&entry.filename);
        let parent = path.parent().unwrap_or(base_dir);
        fs::create_dir_all(parent).map_err(|source| StubError::CreateDir {
            path: parent.to_path_buf(),
            source,
        })?;
        fs::write(&path, stub_content(entry, placeholder))
            .map_err(|source| StubError::Write { path, source })?;
    }

    Ok(entries)
}
