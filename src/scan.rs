//! Filesystem scanning and manifest generation.
//!
//! Stage 1 of the guidepost build pipeline. Scans the content root to
//! discover pages and passthrough assets, producing a structured manifest
//! that subsequent stages consume.
//!
//! ## Directory Structure
//!
//! Guidepost expects a flat content layout:
//!
//! ```text
//! content/                         # Content root
//! ├── config.toml                  # Site configuration (optional)
//! ├── index.md                     # Landing page
//! ├── 010-getting-started.md       # Page (numbered = appears in nav)
//! ├── 020-guide.md                 # Page with many sections
//! ├── 050-github.md                # External link page (URL-only content)
//! ├── wip-notes.md                 # Unnumbered = built but hidden from nav
//! └── assets/                      # Copied to the output root as-is
//!     └── favicon.svg
//! ```
//!
//! ## Naming Conventions
//!
//! - **Numbered files** (`NNN-name.md`): Appear in navigation, sorted by number
//! - **Unnumbered files**: Built but hidden from navigation
//! - **`index.md`**: The landing page, reachable via the site title
//! - **URL-only files**: A page whose entire content is one URL becomes an
//!   external navigation link
//!
//! ## Validation
//!
//! The scanner enforces these rules:
//! - Two files must not resolve to the same slug (`010-intro.md` + `intro.md`)
//! - The content root must contain at least one markdown file

use crate::config::{self, SiteConfig};
use crate::naming;
use crate::types::{NavItem, Page};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;
use walkdir::WalkDir;

#[derive(Error, Debug)]
pub enum ScanError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Config error: {0}")]
    Config(#[from] config::ConfigError),
    #[error("Two pages resolve to the same slug '{0}'")]
    DuplicateSlug(String),
    #[error("No markdown pages found in: {0}")]
    EmptyContent(PathBuf),
}

/// Manifest output from the scan stage.
#[derive(Debug, Serialize, Deserialize)]
pub struct Manifest {
    pub navigation: Vec<NavItem>,
    pub pages: Vec<Page>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub assets: Vec<String>,
    pub config: SiteConfig,
}

pub fn scan(root: &Path) -> Result<Manifest, ScanError> {
    // Load site config (uses defaults if config.toml doesn't exist)
    let config = config::load_config(root)?;

    let pages = parse_pages(root)?;
    if pages.is_empty() {
        return Err(ScanError::EmptyContent(root.to_path_buf()));
    }

    let mut seen = std::collections::BTreeSet::new();
    for page in &pages {
        if !seen.insert(page.slug.clone()) {
            return Err(ScanError::DuplicateSlug(page.slug.clone()));
        }
    }

    let assets = collect_assets(root)?;
    let navigation = build_navigation(&pages);

    Ok(Manifest {
        navigation,
        pages,
        assets,
        config,
    })
}

/// Parse all markdown files in the root directory into pages.
///
/// Each `.md` file becomes a page. Numbered files (`NNN-name.md`) appear in
/// navigation sorted by number; unnumbered files are generated but hidden.
/// If a file's only content is a URL, it becomes an external link in the nav.
fn parse_pages(root: &Path) -> Result<Vec<Page>, ScanError> {
    let mut md_files: Vec<PathBuf> = fs::read_dir(root)?
        .filter_map(|e| e.ok())
        .map(|e| e.path())
        .filter(|p| {
            p.is_file()
                && p.extension()
                    .map(|e| e.eq_ignore_ascii_case("md"))
                    .unwrap_or(false)
        })
        .collect();

    md_files.sort();

    let mut pages = Vec::new();
    for md_path in &md_files {
        let stem = md_path
            .file_stem()
            .map(|s| s.to_string_lossy().to_string())
            .unwrap_or_default();

        let parsed = naming::parse_entry_name(&stem);
        let (in_nav, sort_key, name) = match parsed.number {
            Some(num) if !parsed.name.is_empty() => (true, num, parsed.name),
            // Number-only stems keep their order but have no usable slug
            Some(num) => (false, num, stem.clone()),
            None => (false, u32::MAX, stem.clone()),
        };

        let link_title = name.replace('-', " ");
        let slug = name;
        let source = md_path
            .file_name()
            .map(|s| s.to_string_lossy().to_string())
            .unwrap_or_default();

        let content = fs::read_to_string(md_path)?;
        let trimmed = content.trim();

        // A page whose only content is a URL becomes an external link
        let is_link = !trimmed.contains('\n')
            && (trimmed.starts_with("http://") || trimmed.starts_with("https://"));

        let title = if is_link {
            link_title.clone()
        } else {
            content
                .lines()
                .find(|line| line.starts_with("# "))
                .map(|line| line.trim_start_matches("# ").trim().to_string())
                .unwrap_or_else(|| link_title.clone())
        };

        pages.push(Page {
            title,
            link_title,
            slug,
            source,
            body: content,
            in_nav,
            sort_key,
            is_link,
        });
    }

    pages.sort_by_key(|p| p.sort_key);
    Ok(pages)
}

/// List passthrough files under `assets/`, relative to the content root.
///
/// Assets are copied verbatim into the output root by the generate stage;
/// the scan stage only records them so the manifest stays the single
/// source of truth for what the build touches.
fn collect_assets(root: &Path) -> Result<Vec<String>, ScanError> {
    let assets_dir = root.join("assets");
    if !assets_dir.is_dir() {
        return Ok(Vec::new());
    }
    let mut assets = Vec::new();
    for entry in WalkDir::new(&assets_dir) {
        let entry = entry.map_err(|e| ScanError::Io(std::io::Error::other(e)))?;
        if !entry.file_type().is_file() {
            continue;
        }
        if let Ok(rel) = entry.path().strip_prefix(root) {
            assets.push(rel.to_string_lossy().replace('\\', "/"));
        }
    }
    assets.sort();
    Ok(assets)
}

/// Build the navigation bar: numbered pages in number order, with URL-only
/// pages as external links.
fn build_navigation(pages: &[Page]) -> Vec<NavItem> {
    pages
        .iter()
        .filter(|p| p.in_nav)
        .map(|p| NavItem {
            title: p.link_title.clone(),
            href: if p.is_link {
                p.body.trim().to_string()
            } else {
                format!("/{}.html", p.slug)
            },
            external: p.is_link,
        })
        .collect()
}
