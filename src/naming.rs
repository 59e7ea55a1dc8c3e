//! Slug and filename rules for stub pages.
//!
//! Every stub page is named after its title: the title is lowercased, every
//! run of characters outside `[a-z0-9]` collapses to a single dash, and
//! leading/trailing dashes are dropped.
//!
//! - `Getting Started` → `getting-started.md`
//! - `src/utils.rs` → `src-utils-rs.md`
//! - `My Node` and `my-node` → `my-node.md` (same slug, second write wins)

/// Extension appended to every stub filename.
pub const STUB_EXTENSION: &str = "md";

/// Build a slug from a title.
///
/// Only ASCII letters and digits survive; anything else (punctuation,
/// whitespace, non-ASCII letters) acts as a separator.
pub fn slugify(title: &str) -> String {
    let mut slug = String::with_capacity(title.len());
    let mut pending_dash = false;
    for c in title.chars().flat_map(char::to_lowercase) {
        if c.is_ascii_alphanumeric() {
            if pending_dash && !slug.is_empty() {
                slug.push('-');
            }
            pending_dash = false;
            slug.push(c);
        } else {
            pending_dash = true;
        }
    }
    slug
}

/// Stub filename for a title: `slugify(title)` plus the markdown extension.
///
/// A title with no alphanumeric characters yields `.md`.
pub fn stub_filename(title: &str) -> String {
    format!("{}.{}", slugify(title), STUB_EXTENSION)
}
