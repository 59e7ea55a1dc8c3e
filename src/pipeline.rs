//! End-to-end pipeline: read → outline → stubs → summary.
//!
//! The input check happens once, here. A missing or blank listing short
//! circuits into [`Outcome::MissingInput`] / [`Outcome::EmptyInput`] before
//! anything touches the output paths.

use crate::config::Config;
use crate::outline::process_tree;
use crate::source::{self, SourceError, TreeInput};
use crate::stubs::{self, StubError};
use crate::summary::{self, SummaryError};
use crate::types::StubEntry;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum PipelineError {
    #[error(transparent)]
    Source(#[from] SourceError),
    #[error(transparent)]
    Stub(#[from] StubError),
    #[error(transparent)]
    Summary(#[from] SummaryError),
}

/// Result of a pipeline run that got past (or stopped at) the input check.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome<T> {
    Done(T),
    MissingInput(PathBuf),
    EmptyInput,
}

/// What a full build wrote.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BuildReport {
    pub entries: Vec<StubEntry>,
    pub content_dir: PathBuf,
    pub summary_path: PathBuf,
}

fn read_lines(config: &Config) -> Result<Outcome<Vec<String>>, PipelineError> {
    Ok(match source::read_tree(&config.input)? {
        TreeInput::Proceed(text) => Outcome::Done(process_tree(&text)),
        TreeInput::Missing(path) => Outcome::MissingInput(path),
        TreeInput::Empty => Outcome::EmptyInput,
    })
}

/// Read and outline the listing and compute the entries, writing nothing.
pub fn plan(config: &Config) -> Result<Outcome<Vec<StubEntry>>, PipelineError> {
    Ok(match read_lines(config)? {
        Outcome::Done(lines) => Outcome::Done(stubs::plan_entries(&lines)),
        Outcome::MissingInput(path) => Outcome::MissingInput(path),
        Outcome::EmptyInput => Outcome::EmptyInput,
    })
}

/// Run the full pipeline, writing stub pages and the summary.
pub fn build(config: &Config) -> Result<Outcome<BuildReport>, PipelineError> {
    let lines = match read_lines(config)? {
        Outcome::Done(lines) => lines,
        Outcome::MissingInput(path) => return Ok(Outcome::MissingInput(path)),
        Outcome::EmptyInput => return Ok(Outcome::EmptyInput),
    };

    let entries = stubs::create_stub_files(&lines, &config.content_dir, &config.placeholder)?;
    summary::write_summary(
        &entries,
        &config.link_base(),
        &config.summary_path,
        &config.summary_title,
    )?;

    Ok(Outcome::Done(BuildReport {
        entries,
        content_dir: config.content_dir.clone(),
        summary_path: config.summary_path.clone(),
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_helpers::{SAMPLE_TREE, Workspace, list_files};
    use std::fs;

    #[test]
    fn build_sample_tree() {
        let ws = Workspace::with_input(SAMPLE_TREE);

        let Outcome::Done(report) = build(&ws.config).unwrap() else {
            panic!("expected a completed build");
        };

        let depths: Vec<(usize, &str)> = report
            .entries
            .iter()
            .map(|e| (e.depth, e.filename.as_str()))
            .collect();
        assert_eq!(depths, vec![(1, "src.md"), (2, "main.md"), (2, "utils.md")]);
        assert_eq!(
            list_files(&ws.config.content_dir),
            vec!["main.md", "src.md", "utils.md"]
        );

        let summary = fs::read_to_string(&ws.config.summary_path).unwrap();
        let content_dir = ws.config.link_base();
        assert_eq!(
            summary,
            format!(
                "# Summary\n\n- [src]({content_dir}/src.md)\n  - [main]({content_dir}/main.md)\n  - [utils]({content_dir}/utils.md)"
            )
        );
    }

    #[test]
    fn missing_input_writes_nothing() {
        let ws = Workspace::without_input();

        let outcome = build(&ws.config).unwrap();
        assert_eq!(outcome, Outcome::MissingInput(ws.config.input.clone()));
        assert!(list_files(ws.dir.path()).is_empty());
        assert!(!ws.config.content_dir.exists());
    }

    #[test]
    fn blank_input_writes_nothing() {
        let ws = Workspace::with_input("   \n\n\t ");

        assert_eq!(build(&ws.config).unwrap(), Outcome::EmptyInput);
        assert!(!ws.config.content_dir.exists());
        assert!(!ws.config.summary_path.exists());
    }

    #[test]
    fn plan_writes_nothing() {
        let ws = Workspace::with_input(SAMPLE_TREE);

        let Outcome::Done(entries) = plan(&ws.config).unwrap() else {
            panic!("expected planned entries");
        };
        assert_eq!(entries.len(), 3);
        assert!(!ws.config.content_dir.exists());
        assert!(!ws.config.summary_path.exists());
    }

    #[test]
    fn rebuild_is_byte_identical() {
        let ws = Workspace::with_input(SAMPLE_TREE);

        build(&ws.config).unwrap();
        let first_summary = fs::read(&ws.config.summary_path).unwrap();
        let first_stub = fs::read(ws.config.content_dir.join("utils.md")).unwrap();

        build(&ws.config).unwrap();
        assert_eq!(fs::read(&ws.config.summary_path).unwrap(), first_summary);
        assert_eq!(
            fs::read(ws.config.content_dir.join("utils.md")).unwrap(),
            first_stub
        );
    }

    #[test]
    fn unwritable_content_dir_is_fatal() {
        let ws = Workspace::with_input(SAMPLE_TREE);
        fs::write(&ws.config.content_dir, "blocking file").unwrap();

        assert!(matches!(build(&ws.config), Err(PipelineError::Stub(_))));
    }
}
