//! Shared types used across all pipeline stages.
//!
//! These types are serialized to JSON between stages (scan → render →
//! generate) and must be identical across all three modules.

use serde::{Deserialize, Serialize};

/// A page discovered from a markdown file in the content root.
///
/// Pages follow the `NNN-name` numbering convention:
/// - Numbered files (`NNN-name.md`) appear in navigation, sorted by number
/// - Unnumbered files are generated but hidden from navigation
/// - `index.md` becomes the landing page at the site root
///
/// If the file content is just a URL, the page becomes an external nav link.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Page {
    /// Title from first `# heading` in markdown, or link_title as fallback
    pub title: String,
    /// Display label in nav (filename with number stripped and dashes → spaces)
    pub link_title: String,
    /// URL slug (filename stem with number prefix stripped)
    pub slug: String,
    /// Source filename in the content root (e.g. `010-getting-started.md`)
    pub source: String,
    /// Raw markdown content (or URL for link pages)
    pub body: String,
    /// Whether this page appears in navigation (has number prefix)
    pub in_nav: bool,
    /// Sort key from number prefix (for ordering)
    pub sort_key: u32,
    /// If true, body is a URL and this page is an external link
    pub is_link: bool,
}

/// Navigation bar item (numbered pages and external links).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NavItem {
    pub title: String,
    pub href: String,
    #[serde(default)]
    pub external: bool,
}

/// One heading in a page's table-of-contents outline.
///
/// Entries are recorded in document order, which defines the total order
/// the scroll-spy relies on. Only levels 2–4 participate in the outline;
/// `id` is unique within the page (the renderer de-duplicates slugs).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OutlineEntry {
    /// Stable fragment identifier assigned by the renderer.
    pub id: String,
    /// Heading level (2, 3, or 4).
    pub level: u8,
    /// Plain heading text (markup stripped).
    pub text: String,
}
