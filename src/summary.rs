//! `SUMMARY.md` generation.
//!
//! The summary is the table of contents GitBook and mdBook read to build the
//! sidebar. It lists every stub as a link, indented two spaces per level
//! below the first:
//!
//! ```text
//! # Summary
//!
//! - [src](your-content/src.md)
//!   - [main](your-content/main.md)
//!   - [utils](your-content/utils.md)
//! ```
//!
//! Entries appear in creation order. Depth 0 and depth 1 are both rendered
//! flush left.

use crate::types::StubEntry;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum SummaryError {
    #[error("Failed to write summary {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Link target for an entry: `link_base/filename`.
///
/// `link_base` is used verbatim apart from trailing slashes; an empty base
/// gives a bare filename.
pub fn link_target(link_base: &str, filename: &str) -> String {
    let base = link_base.trim_end_matches(['/', '\\']);
    if base.is_empty() {
        filename.to_string()
    } else {
        format!("{base}/{filename}")
    }
}

/// One list line for an entry.
pub fn summary_line(entry: &StubEntry, link_base: &str) -> String {
    let indent = "  ".repeat(entry.depth.saturating_sub(1));
    format!(
        "{}- [{}]({})",
        indent,
        entry.title,
        link_target(link_base, &entry.filename)
    )
}

/// Full summary document. Lines are joined with `\n`, no trailing newline.
pub fn render_summary(entries: &[StubEntry], link_base: &str, title: &str) -> String {
    let mut lines = Vec::with_capacity(entries.len() + 1);
    lines.push(format!("# {title}\n"));
    lines.extend(entries.iter().map(|e| summary_line(e, link_base)));
    lines.join("\n")
}

pub fn write_summary(
    entries: &[StubEntry],
    link_base: &str,
    summary_path: &Path,
    title: &str,
) -> Result<(), SummaryError> {
    fs::write(summary_path, render_summary(entries, link_base, title)).map_err(|source| {
        SummaryError::Write {
            path: summary_path.to_path_buf(),
            source,
        }
    })
}
