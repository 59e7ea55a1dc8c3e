//! CLI output formatting for all commands.
//!
//! Each command has a `format_*` function (returns `Vec<String>`) for
//! testability and a `print_*` wrapper that writes to stdout. Format
//! functions are pure: no I/O, no side effects.
//!
//! # Output Format
//!
//! ## Build
//!
//! ```text
//! 001 src → your-content/src.md
//!     002 main → your-content/main.md
//!     003 utils → your-content/utils.md
//!
//! Generated 3 stub pages in your-content
//! SUMMARY.md generated successfully!
//! ```
//!
//! ## Check
//!
//! Same outline, without the trailing summary lines, followed by the number
//! of pages that would be written.
//!
//! ## Early exit
//!
//! ```text
//! Error: Log file not found.
//!     Input: /home/ubuntu/output.log
//! No tree data found. Exiting.
//! ```

use crate::pipeline::BuildReport;
use crate::summary::link_target;
use crate::types::StubEntry;
use std::collections::HashMap;
use std::path::Path;

// ============================================================================
// Shared helpers
// ============================================================================

/// Format a 1-based positional index as 3-digit zero-padded.
fn format_index(pos: usize) -> String {
    format!("{:0>3}", pos)
}

/// Return indentation string: 4 spaces per level below the top.
fn indent(depth: usize) -> String {
    "    ".repeat(depth.saturating_sub(1))
}

/// One outline line per entry, indented by depth, with the target file.
///
/// Entries that share a filename with a later entry are flagged, since only
/// the last one's file survives.
fn outline_lines(entries: &[StubEntry], link_base: &str) -> Vec<String> {
    let mut last_writer: HashMap<&str, usize> = HashMap::new();
    for (i, entry) in entries.iter().enumerate() {
        last_writer.insert(entry.filename.as_str(), i);
    }

    entries
        .iter()
        .enumerate()
        .map(|(i, entry)| {
            let overwritten = last_writer[entry.filename.as_str()] != i;
            format!(
                "{}{} {} \u{2192} {}{}",
                indent(entry.depth),
                format_index(i + 1),
                entry.title,
                link_target(link_base, &entry.filename),
                if overwritten { " (overwritten)" } else { "" }
            )
        })
        .collect()
}

// ============================================================================
// Early exit
// ============================================================================

pub fn format_missing_input(input: &Path) -> Vec<String> {
    vec![
        "Error: Log file not found.".to_string(),
        format!("    Input: {}", input.display()),
        "No tree data found. Exiting.".to_string(),
    ]
}

pub fn format_empty_input() -> Vec<String> {
    vec!["No tree data found. Exiting.".to_string()]
}

pub fn print_missing_input(input: &Path) {
    for line in format_missing_input(input) {
        println!("{}", line);
    }
}

pub fn print_empty_input() {
    for line in format_empty_input() {
        println!("{}", line);
    }
}

// ============================================================================
// Check
// ============================================================================

/// Format the planned outline without writing anything.
pub fn format_check_output(entries: &[StubEntry], link_base: &str) -> Vec<String> {
    let mut lines = outline_lines(entries, link_base);
    lines.push(String::new());
    lines.push(format!("{} stub pages would be written", entries.len()));
    lines
}

pub fn print_check_output(entries: &[StubEntry], link_base: &str) {
    for line in format_check_output(entries, link_base) {
        println!("{}", line);
    }
}

// ============================================================================
// Build
// ============================================================================

/// Format the result of a completed build.
pub fn format_build_output(report: &BuildReport, link_base: &str) -> Vec<String> {
    let mut lines = outline_lines(&report.entries, link_base);
    lines.push(String::new());
    lines.push(format!(
        "Generated {} stub pages in {}",
        report.entries.len(),
        report.content_dir.display()
    ));
    lines.push(format!(
        "{} generated successfully!",
        report.summary_path.display()
    ));
    lines
}

pub fn print_build_output(report: &BuildReport, link_base: &str) {
    for line in format_build_output(report, link_base) {
        println!("{}", line);
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn entry(depth: usize, filename: &str, title: &str) -> StubEntry {
        StubEntry {
            depth,
            filename: filename.to_string(),
            title: title.to_string(),
        }
    }

    fn sample_entries() -> Vec<StubEntry> {
        vec![
            entry(1, "src.md", "src"),
            entry(2, "main.md", "main"),
            entry(2, "utils.md", "utils"),
        ]
    }

    #[test]
    fn format_index_pads() {
        assert_eq!(format_index(1), "001");
        assert_eq!(format_index(100), "100");
    }

    #[test]
    fn indent_depth_zero_and_one_flush() {
        assert_eq!(indent(0), "");
        assert_eq!(indent(1), "");
        assert_eq!(indent(3), "        ");
    }

    #[test]
    fn outline_indents_children() {
        let lines = outline_lines(&sample_entries(), "your-content");
        assert_eq!(
            lines,
            vec![
                "001 src \u{2192} your-content/src.md",
                "    002 main \u{2192} your-content/main.md",
                "    003 utils \u{2192} your-content/utils.md",
            ]
        );
    }

    #[test]
    fn outline_flags_overwritten_entries() {
        let entries = vec![entry(1, "my-node.md", "My Node"), entry(2, "my-node.md", "my-node")];
        let lines = outline_lines(&entries, "c");
        assert!(lines[0].ends_with("(overwritten)"));
        assert!(!lines[1].ends_with("(overwritten)"));
    }

    #[test]
    fn missing_input_message() {
        let lines = format_missing_input(Path::new("/home/ubuntu/output.log"));
        assert_eq!(lines[0], "Error: Log file not found.");
        assert_eq!(lines[1], "    Input: /home/ubuntu/output.log");
        assert_eq!(lines[2], "No tree data found. Exiting.");
    }

    #[test]
    fn empty_input_message() {
        assert_eq!(format_empty_input(), vec!["No tree data found. Exiting."]);
    }

    #[test]
    fn check_output_counts_pages() {
        let lines = format_check_output(&sample_entries(), "c");
        assert_eq!(lines.len(), 5);
        assert_eq!(lines[4], "3 stub pages would be written");
    }

    #[test]
    fn build_output_ends_with_success_message() {
        let report = BuildReport {
            entries: sample_entries(),
            content_dir: PathBuf::from("your-content"),
            summary_path: PathBuf::from("SUMMARY.md"),
        };
        let lines = format_build_output(&report, "your-content");
        assert_eq!(lines[4], "Generated 3 stub pages in your-content");
        assert_eq!(lines[5], "SUMMARY.md generated successfully!");
    }
}
