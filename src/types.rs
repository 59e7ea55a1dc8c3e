//! Shared types passed between pipeline stages.

use serde::Serialize;

/// One stub page produced from one line of the tree listing.
///
/// Entries are created in source order and never modified afterwards. Two
/// entries may share a `filename` when their titles slugify identically; in
/// that case only the later one's file survives on disk.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StubEntry {
    /// Heading level: number of `#` markers in the rendered line.
    pub depth: usize,
    /// File name inside the content directory, e.g. `getting-started.md`.
    pub filename: String,
    /// Display title, as written in the tree listing.
    pub title: String,
}
