//! Tree listing → heading outline.
//!
//! Converts each line of a `tree`-style listing into a markdown heading line
//! whose level is inferred from the drawing characters on that line:
//!
//! ```text
//! ├── src            →  # src
//! │   ├── main       →  ## main
//! │   └── utils      →  ## utils
//! ```
//!
//! Depth is the number of vertical bars (`|` or `│`) plus the number of
//! branch markers (`├──` or `└──`) anywhere in the line. Each line is judged
//! on its own; a child that jumps two levels, or a line with no markers at
//! all (depth 0), is passed through as is.

/// Vertical continuation bars, ASCII and box-drawing.
const BAR_MARKERS: &[char] = &['|', '│'];

/// Three-character branch connectors.
const BRANCH_MARKERS: &[&str] = &["├──", "└──"];

/// Characters stripped from the start of a line to expose the node name.
const DRAWING_CHARS: &[char] = &['|', '│', '├', '└', '─', '-'];

/// Heading marker used in rendered lines.
pub const HEADING_MARKER: char = '#';

/// A tree line reduced to its heading level and text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnnotatedLine {
    pub depth: usize,
    pub heading: String,
}

impl AnnotatedLine {
    /// Render as `"#" * depth + " " + heading`.
    ///
    /// Depth 0 renders with no markers, leaving a leading space.
    pub fn render(&self) -> String {
        let mut line = String::with_capacity(self.depth + 1 + self.heading.len());
        line.extend(std::iter::repeat_n(HEADING_MARKER, self.depth));
        line.push(' ');
        line.push_str(&self.heading);
        line
    }
}

/// Count the nesting markers on a raw tree line.
pub fn line_depth(raw: &str) -> usize {
    let bars = raw.chars().filter(|c| BAR_MARKERS.contains(c)).count();
    let branches: usize = BRANCH_MARKERS
        .iter()
        .map(|marker| raw.matches(marker).count())
        .sum();
    bars + branches
}

/// Strip leading drawing characters and whitespace from a raw tree line.
pub fn heading_text(raw: &str) -> &str {
    raw.trim_start_matches(|c: char| DRAWING_CHARS.contains(&c) || c.is_whitespace())
        .trim()
}

pub fn annotate_line(raw: &str) -> AnnotatedLine {
    AnnotatedLine {
        depth: line_depth(raw),
        heading: heading_text(raw).to_string(),
    }
}

/// Convert a whole tree listing into rendered heading lines, in source order.
///
/// Blank lines are skipped; every other line yields exactly one output line.
pub fn process_tree(tree: &str) -> Vec<String> {
    tree.lines()
        .filter(|line| !line.trim().is_empty())
        .map(|line| annotate_line(line).render())
        .collect()
}
