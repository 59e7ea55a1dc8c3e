//! # treebook
//!
//! Turns a plain-text directory listing, as printed by `tree`, into a set of
//! markdown stub pages plus a `SUMMARY.md` table of contents that GitBook and
//! mdBook understand. Useful for bootstrapping documentation that mirrors a
//! project layout.
//!
//! # Architecture: Four-Stage Pipeline
//!
//! ```text
//! 1. Source    output.log  →  trimmed text        (missing / blank → early exit)
//! 2. Outline   text        →  "## main" lines      (depth from drawing chars)
//! 3. Stubs     lines       →  your-content/*.md    (one file per line)
//! 4. Summary   entries     →  SUMMARY.md           (nested link list)
//! ```
//!
//! Each stage takes its paths as explicit parameters, so every stage can be
//! exercised against a temporary directory. Only [`pipeline`] knows how the
//! stages connect.
//!
//! # Module Map
//!
//! | Module | Role |
//! |--------|------|
//! | [`source`] | Stage 1: reads the listing, reports missing/blank input as a [`source::TreeInput`] variant |
//! | [`outline`] | Stage 2: pure depth inference and heading rendering per line |
//! | [`stubs`] | Stage 3: slugs titles, writes stub pages, returns [`types::StubEntry`] records |
//! | [`summary`] | Stage 4: renders and writes `SUMMARY.md` |
//! | [`pipeline`] | Runs the stages in order, with a single input check |
//! | [`naming`] | Title → slug → filename rules |
//! | [`config`] | Stock defaults, optional `treebook.toml`, CLI overrides |
//! | [`types`] | Types shared between stages |
//! | [`output`] | CLI output formatting |
//!
//! # Known Quirks
//!
//! Depth is inferred per line, never validated against neighbours: a child
//! that jumps several levels, or a line with no drawing characters (depth 0),
//! goes through as is. In the summary, depth 0 lines are indented like depth 1
//! lines. Titles that slugify to the same filename overwrite each other's stub
//! but both still appear in the summary.

pub mod config;
pub mod naming;
pub mod outline;
pub mod output;
pub mod pipeline;
pub mod source;
pub mod stubs;
pub mod summary;
pub mod types;

#[cfg(test)]
pub(crate) mod test_helpers;
