//! Shared test utilities for the guidepost test suite.
//!
//! Provides fixture setup and lookup helpers that work with pipeline
//! manifests (`scan::Manifest`, `render::Manifest`).
//!
//! # Usage
//!
//! ```rust
//! use crate::test_helpers::*;
//!
//! let tmp = setup_fixtures();
//! let manifest = scan(tmp.path()).unwrap();
//!
//! let page = find_page(&manifest, "getting-started");
//! assert!(page.in_nav);
//!
//! assert_nav_titles(&manifest, &["getting started", "language tour", "github"]);
//! ```

use std::path::Path;
use tempfile::TempDir;

use crate::render;
use crate::scan::Manifest;
use crate::types::Page;

// =========================================================================
// Fixture setup
// =========================================================================

/// Copy `fixtures/content/` to a temp directory and return it.
///
/// Tests get an isolated copy they can mutate without affecting other tests
/// or the source fixtures.
pub fn setup_fixtures() -> TempDir {
    let tmp = TempDir::new().unwrap();
    let fixtures = Path::new(env!("CARGO_MANIFEST_DIR")).join("fixtures/content");
    copy_dir_recursive(&fixtures, tmp.path()).unwrap();
    tmp
}

fn copy_dir_recursive(src: &Path, dst: &Path) -> std::io::Result<()> {
    for entry in std::fs::read_dir(src)? {
        let entry = entry?;
        let src_path = entry.path();
        let dst_path = dst.join(entry.file_name());

        if src_path.is_dir() {
            std::fs::create_dir_all(&dst_path)?;
            copy_dir_recursive(&src_path, &dst_path)?;
        } else {
            std::fs::copy(&src_path, &dst_path)?;
        }
    }
    Ok(())
}

// =========================================================================
// Manifest lookups — panics with a clear message on miss
// =========================================================================

/// Find a page by slug. Panics if not found.
pub fn find_page<'a>(manifest: &'a Manifest, slug: &str) -> &'a Page {
    manifest
        .pages
        .iter()
        .find(|p| p.slug == slug)
        .unwrap_or_else(|| {
            let slugs: Vec<&str> = manifest.pages.iter().map(|p| p.slug.as_str()).collect();
            panic!("page '{slug}' not found. Available: {slugs:?}")
        })
}

/// Find a rendered page by slug. Panics if not found.
pub fn find_rendered<'a>(manifest: &'a render::Manifest, slug: &str) -> &'a render::RenderedPage {
    manifest
        .pages
        .iter()
        .find(|p| p.page.slug == slug)
        .unwrap_or_else(|| {
            let slugs: Vec<&str> = manifest.pages.iter().map(|p| p.page.slug.as_str()).collect();
            panic!("rendered page '{slug}' not found. Available: {slugs:?}")
        })
}

// =========================================================================
// Navigation helpers
// =========================================================================

/// Navigation titles in order.
pub fn nav_titles(manifest: &Manifest) -> Vec<&str> {
    manifest
        .navigation
        .iter()
        .map(|n| n.title.as_str())
        .collect()
}

/// Assert that the navigation bar matches an expected title sequence.
pub fn assert_nav_titles(manifest: &Manifest, expected: &[&str]) {
    assert_eq!(nav_titles(manifest), expected, "nav titles mismatch");
}
