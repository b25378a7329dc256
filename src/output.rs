//! CLI output formatting for all pipeline stages.
//!
//! # Information-First Display
//!
//! Output is **information-centric, not file-centric**. The primary display
//! for every page is its semantic identity — positional index and title —
//! with filesystem paths shown as secondary context via indented `Source:`
//! lines. This makes the output readable as a content inventory while still
//! letting users trace data back to specific files.
//!
//! # Output Format
//!
//! ## Scan
//!
//! ```text
//! Pages
//!     001 Getting Started
//!         Source: 010-getting-started.md
//!     002 GitHub (link)
//!     Landing
//!         Source: index.md
//!
//! Assets
//!     assets/favicon.svg
//! ```
//!
//! ## Render
//!
//! ```text
//! 001 Getting Started (4 sections)
//! 002 The Guide (12 sections)
//! ```
//!
//! ## Generate
//!
//! ```text
//! Home → index.html
//! 001 Getting Started → getting-started.html
//! Contact → contact.html
//!
//! Generated 3 pages, 1 asset
//! ```
//!
//! # Architecture
//!
//! Each stage has a `format_*` function (returns `Vec<String>`) for
//! testability and a `print_*` wrapper that writes to stdout. Format
//! functions are pure — no I/O, no side effects.

use crate::render;
use crate::scan;

// ============================================================================
// Shared entity display helpers
// ============================================================================

/// Format a 1-based positional index as 3-digit zero-padded.
fn format_index(pos: usize) -> String {
    format!("{:0>3}", pos)
}

/// Format a page header: positional index + title, with optional detail.
///
/// ```text
/// 001 Getting Started (4 sections)
/// 001 Getting Started
/// ```
fn entity_header(index: usize, title: &str, sections: Option<usize>) -> String {
    match sections {
        Some(n) => format!("{} {} ({} sections)", format_index(index), title, n),
        None => format!("{} {}", format_index(index), title),
    }
}

// ============================================================================
// Stage 1: Scan output
// ============================================================================

/// Format scan stage output showing the discovered content inventory.
pub fn format_scan_output(manifest: &scan::Manifest) -> Vec<String> {
    let mut lines = Vec::new();

    lines.push("Pages".to_string());
    let mut position = 0;
    for page in manifest.pages.iter().filter(|p| p.in_nav) {
        position += 1;
        let link_marker = if page.is_link { " (link)" } else { "" };
        lines.push(format!(
            "    {}{}",
            entity_header(position, &page.title, None),
            link_marker
        ));
        if !page.is_link {
            lines.push(format!("        Source: {}", page.source));
        }
    }
    for page in manifest.pages.iter().filter(|p| !p.in_nav) {
        let label = if page.slug == "index" {
            "Landing"
        } else {
            &page.title
        };
        lines.push(format!("    {} (hidden)", label));
        lines.push(format!("        Source: {}", page.source));
    }

    if !manifest.assets.is_empty() {
        lines.push(String::new());
        lines.push("Assets".to_string());
        for asset in &manifest.assets {
            lines.push(format!("    {}", asset));
        }
    }

    lines.push(String::new());
    lines.push("Config".to_string());
    lines.push(format!("    title: {}", manifest.config.site.title));
    let contact = if manifest.config.contact.is_enabled() {
        "enabled"
    } else {
        "disabled"
    };
    lines.push(format!("    contact form: {}", contact));

    lines
}

pub fn print_scan_output(manifest: &scan::Manifest) {
    for line in format_scan_output(manifest) {
        println!("{}", line);
    }
}

// ============================================================================
// Stage 2: Render output
// ============================================================================

/// Format render stage output: one line per rendered page with its section
/// count. External-link pages have nothing to render and are skipped.
pub fn format_render_output(manifest: &render::Manifest) -> Vec<String> {
    let mut lines = Vec::new();
    let mut position = 0;
    for rendered in manifest.pages.iter().filter(|p| !p.page.is_link) {
        position += 1;
        lines.push(entity_header(
            position,
            &rendered.page.title,
            Some(rendered.outline.len()),
        ));
    }
    lines
}

pub fn print_render_output(manifest: &render::Manifest) {
    for line in format_render_output(manifest) {
        println!("{}", line);
    }
}

// ============================================================================
// Stage 3: Generate output
// ============================================================================

/// Format generate stage output: page → file mapping plus a summary.
pub fn format_generate_output(manifest: &render::Manifest) -> Vec<String> {
    let mut lines = Vec::new();
    let mut page_count = 0;
    let mut position = 0;

    for rendered in manifest.pages.iter().filter(|p| !p.page.is_link) {
        page_count += 1;
        if rendered.page.slug == "index" {
            lines.push("Home → index.html".to_string());
        } else {
            position += 1;
            lines.push(format!(
                "{} → {}.html",
                entity_header(position, &rendered.page.title, None),
                rendered.page.slug
            ));
        }
    }

    if manifest.config.contact.is_enabled() {
        page_count += 1;
        lines.push("Contact → contact.html".to_string());
    }

    lines.push(String::new());
    let asset_noun = if manifest.assets.len() == 1 {
        "asset"
    } else {
        "assets"
    };
    lines.push(format!(
        "Generated {} pages, {} {}",
        page_count,
        manifest.assets.len(),
        asset_noun
    ));

    lines
}

pub fn print_generate_output(manifest: &render::Manifest) {
    for line in format_generate_output(manifest) {
        println!("{}", line);
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::SiteConfig;
    use crate::render::RenderedPage;
    use crate::types::{NavItem, OutlineEntry, Page};

    fn page(source: &str, slug: &str, title: &str, in_nav: bool, is_link: bool) -> Page {
        Page {
            title: title.to_string(),
            link_title: title.to_lowercase(),
            slug: slug.to_string(),
            source: source.to_string(),
            body: String::new(),
            in_nav,
            sort_key: 10,
            is_link,
        }
    }

    fn scan_manifest() -> scan::Manifest {
        scan::Manifest {
            navigation: vec![NavItem {
                title: "getting started".to_string(),
                href: "/getting-started.html".to_string(),
                external: false,
            }],
            pages: vec![
                page("010-getting-started.md", "getting-started", "Getting Started", true, false),
                page("050-github.md", "github", "GitHub", true, true),
                page("index.md", "index", "Welcome", false, false),
            ],
            assets: vec!["assets/favicon.svg".to_string()],
            config: SiteConfig::default(),
        }
    }

    fn render_manifest() -> render::Manifest {
        render::Manifest {
            navigation: vec![],
            pages: vec![
                RenderedPage {
                    page: page("index.md", "index", "Welcome", false, false),
                    html: "<p>hi</p>".to_string(),
                    outline: vec![],
                },
                RenderedPage {
                    page: page("010-getting-started.md", "getting-started", "Getting Started", true, false),
                    html: String::new(),
                    outline: vec![
                        OutlineEntry {
                            id: "install".to_string(),
                            level: 2,
                            text: "Install".to_string(),
                        },
                        OutlineEntry {
                            id: "usage".to_string(),
                            level: 2,
                            text: "Usage".to_string(),
                        },
                    ],
                },
                RenderedPage {
                    page: page("050-github.md", "github", "GitHub", true, true),
                    html: String::new(),
                    outline: vec![],
                },
            ],
            assets: vec!["assets/favicon.svg".to_string()],
            config: SiteConfig::default(),
        }
    }

    #[test]
    fn index_is_three_digit_padded() {
        assert_eq!(format_index(1), "001");
        assert_eq!(format_index(42), "042");
        assert_eq!(format_index(1234), "1234");
    }

    #[test]
    fn scan_output_lists_nav_pages_first() {
        let lines = format_scan_output(&scan_manifest());
        assert_eq!(lines[0], "Pages");
        assert_eq!(lines[1], "    001 Getting Started");
        assert_eq!(lines[2], "        Source: 010-getting-started.md");
    }

    #[test]
    fn scan_output_marks_links_and_hidden_pages() {
        let lines = format_scan_output(&scan_manifest());
        let text = lines.join("\n");
        assert!(text.contains("002 GitHub (link)"));
        assert!(text.contains("Landing (hidden)"));
        assert!(text.contains("Source: index.md"));
    }

    #[test]
    fn scan_output_lists_assets_and_config() {
        let lines = format_scan_output(&scan_manifest());
        let text = lines.join("\n");
        assert!(text.contains("Assets"));
        assert!(text.contains("    assets/favicon.svg"));
        assert!(text.contains("title: Guidepost"));
        assert!(text.contains("contact form: disabled"));
    }

    #[test]
    fn render_output_shows_section_counts() {
        let lines = format_render_output(&render_manifest());
        assert_eq!(lines[0], "001 Welcome (0 sections)");
        assert_eq!(lines[1], "002 Getting Started (2 sections)");
        // Link pages render nothing
        assert_eq!(lines.len(), 2);
    }

    #[test]
    fn generate_output_maps_pages_to_files() {
        let lines = format_generate_output(&render_manifest());
        assert_eq!(lines[0], "Home → index.html");
        assert_eq!(lines[1], "001 Getting Started → getting-started.html");
    }

    #[test]
    fn generate_output_summarizes_counts() {
        let lines = format_generate_output(&render_manifest());
        assert_eq!(lines.last().unwrap(), "Generated 2 pages, 1 asset");
    }

    #[test]
    fn generate_output_includes_contact_when_enabled() {
        let mut manifest = render_manifest();
        manifest.config.contact.to = "info@ts.dev".to_string();
        manifest.config.contact.endpoint = "https://mail.example.test/write".to_string();
        let lines = format_generate_output(&manifest);
        let text = lines.join("\n");
        assert!(text.contains("Contact → contact.html"));
        assert!(text.contains("Generated 3 pages"));
    }
}
