//! Markdown rendering and outline extraction.
//!
//! Stage 2 of the guidepost build pipeline. Takes the manifest from the scan
//! stage and renders every page body to an HTML fragment, assigning each
//! heading a stable `id` and extracting the page outline the guide panel
//! and the scroll-spy consume.
//!
//! ## Heading Identifiers
//!
//! Heading text is slugified (lowercased, non-alphanumerics collapsed to
//! dashes); collisions within a page get a numeric suffix (`usage`,
//! `usage-1`, `usage-2`). Ids are assigned in document order and never
//! change for unchanged content, which is what makes deep links and the
//! scroll-spy's fragment lookups stable.
//!
//! ## Outline
//!
//! Only heading levels inside the configured `[toc]` range (2–4 by default)
//! enter the outline; everything else still gets an id for deep-linking.
//!
//! ## Parallel Rendering
//!
//! Pages are independent, so they render in parallel using
//! [rayon](https://docs.rs/rayon). External-link pages have no body to
//! render and pass through untouched.

use crate::config::{SiteConfig, TocConfig};
use crate::scan;
use crate::types::{NavItem, OutlineEntry, Page};
use pulldown_cmark::{CowStr, Event, Options, Parser, Tag, TagEnd, html};
use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fs;
use std::path::Path;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum RenderError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Manifest output from the render stage.
#[derive(Debug, Serialize, Deserialize)]
pub struct Manifest {
    pub navigation: Vec<NavItem>,
    pub pages: Vec<RenderedPage>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub assets: Vec<String>,
    pub config: SiteConfig,
}

/// A page with its rendered body and outline.
#[derive(Debug, Serialize, Deserialize)]
pub struct RenderedPage {
    pub page: Page,
    /// Rendered HTML fragment (empty for external-link pages).
    pub html: String,
    /// TOC outline in document order (empty for external-link pages).
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub outline: Vec<OutlineEntry>,
}

/// Render all pages from a scan manifest.
pub fn render(scan_manifest_path: &Path) -> Result<Manifest, RenderError> {
    let manifest_content = fs::read_to_string(scan_manifest_path)?;
    let manifest: scan::Manifest = serde_json::from_str(&manifest_content)?;

    let toc = manifest.config.toc.clone();
    let pages: Vec<RenderedPage> = manifest
        .pages
        .par_iter()
        .map(|page| render_page(page, &toc))
        .collect();

    Ok(Manifest {
        navigation: manifest.navigation,
        pages,
        assets: manifest.assets,
        config: manifest.config,
    })
}

fn render_page(page: &Page, toc: &TocConfig) -> RenderedPage {
    if page.is_link {
        return RenderedPage {
            page: page.clone(),
            html: String::new(),
            outline: Vec::new(),
        };
    }
    let body = render_markdown(&page.body, toc);
    RenderedPage {
        page: page.clone(),
        html: body.html,
        outline: body.outline,
    }
}

/// A rendered markdown body.
#[derive(Debug)]
pub struct RenderedBody {
    pub html: String,
    pub outline: Vec<OutlineEntry>,
}

/// Render one markdown document to HTML with heading ids and an outline.
pub fn render_markdown(markdown: &str, toc: &TocConfig) -> RenderedBody {
    let options = Options::ENABLE_TABLES
        | Options::ENABLE_FOOTNOTES
        | Options::ENABLE_STRIKETHROUGH
        | Options::ENABLE_TASKLISTS;
    let events: Vec<Event> = Parser::new_ext(markdown, options).collect();

    // Pass 1: slug per heading occurrence, in document order.
    let mut slugs = SlugSet::default();
    let mut ids: Vec<String> = Vec::new();
    let mut outline = Vec::new();
    let mut iter = events.iter();
    while let Some(event) = iter.next() {
        let Event::Start(Tag::Heading { level, .. }) = event else {
            continue;
        };
        let level = *level as u8;
        let mut text = String::new();
        for inner in iter.by_ref() {
            match inner {
                Event::End(TagEnd::Heading(_)) => break,
                Event::Text(t) => text.push_str(t),
                Event::Code(t) => text.push_str(t),
                _ => {}
            }
        }
        let id = slugs.assign(&text);
        if (toc.min_level..=toc.max_level).contains(&level) {
            outline.push(OutlineEntry {
                id: id.clone(),
                level,
                text: text.trim().to_string(),
            });
        }
        ids.push(id);
    }

    // Pass 2: re-emit events with the assigned ids injected.
    let mut next_id = ids.into_iter();
    let events = events.into_iter().map(|event| match event {
        Event::Start(Tag::Heading {
            level,
            id: _,
            classes,
            attrs,
        }) => Event::Start(Tag::Heading {
            level,
            id: next_id.next().map(CowStr::from),
            classes,
            attrs,
        }),
        other => other,
    });

    let mut html_out = String::new();
    html::push_html(&mut html_out, events);

    RenderedBody {
        html: html_out,
        outline,
    }
}

/// Tracks assigned slugs within one page and de-duplicates collisions.
#[derive(Default)]
struct SlugSet {
    taken: HashMap<String, u32>,
}

impl SlugSet {
    fn assign(&mut self, text: &str) -> String {
        let base = slugify(text);
        if !self.taken.contains_key(&base) {
            self.taken.insert(base.clone(), 0);
            return base;
        }
        let mut count = self.taken[&base] + 1;
        let mut candidate = format!("{base}-{count}");
        // An earlier natural slug may already occupy the suffixed form.
        while self.taken.contains_key(&candidate) {
            count += 1;
            candidate = format!("{base}-{count}");
        }
        self.taken.insert(base, count);
        self.taken.insert(candidate.clone(), 0);
        candidate
    }
}

/// Slugify heading text into a URL fragment.
///
/// Lowercases, maps every non-alphanumeric run to a single dash, and trims
/// leading/trailing dashes. Text with no alphanumerics falls back to
/// `"section"` so every heading stays linkable.
pub fn slugify(text: &str) -> String {
    let slug = text
        .to_lowercase()
        .chars()
        .map(|c| if c.is_alphanumeric() { c } else { '-' })
        .collect::<String>()
        .split('-')
        .filter(|s| !s.is_empty())
        .collect::<Vec<_>>()
        .join("-");
    if slug.is_empty() {
        "section".to_string()
    } else {
        slug
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn default_toc() -> TocConfig {
        TocConfig::default()
    }

    #[test]
    fn slugify_basic() {
        assert_eq!(slugify("Getting Started"), "getting-started");
        assert_eq!(slugify("Why TS.DEV?"), "why-ts-dev");
        assert_eq!(slugify("  spaced   out  "), "spaced-out");
    }

    #[test]
    fn slugify_preserves_unicode_letters() {
        assert_eq!(slugify("Généricité"), "généricité");
    }

    #[test]
    fn slugify_falls_back_for_symbol_only_text() {
        assert_eq!(slugify("???"), "section");
    }

    #[test]
    fn headings_get_ids_in_document_order() {
        let body = render_markdown(
            "## Install\n\ntext\n\n### Via npm\n\n## Usage\n",
            &default_toc(),
        );
        assert!(body.html.contains(r#"<h2 id="install">Install</h2>"#));
        assert!(body.html.contains(r#"<h3 id="via-npm">Via npm</h3>"#));
        assert!(body.html.contains(r#"<h2 id="usage">Usage</h2>"#));
    }

    #[test]
    fn duplicate_headings_get_numeric_suffixes() {
        let body = render_markdown("## Usage\n\n## Usage\n\n## Usage\n", &default_toc());
        let ids: Vec<&str> = body.outline.iter().map(|e| e.id.as_str()).collect();
        assert_eq!(ids, ["usage", "usage-1", "usage-2"]);
        assert!(body.html.contains(r#"id="usage-2""#));
    }

    #[test]
    fn suffixed_slug_does_not_collide_with_natural_one() {
        let body = render_markdown("## Usage 1\n\n## Usage\n\n## Usage\n", &default_toc());
        let ids: Vec<&str> = body.outline.iter().map(|e| e.id.as_str()).collect();
        assert_eq!(ids[0], "usage-1");
        assert_eq!(ids[1], "usage");
        // The duplicate must skip the already-taken "usage-1".
        assert_eq!(ids[2], "usage-2");
    }

    #[test]
    fn outline_covers_configured_levels_only() {
        let body = render_markdown(
            "# Title\n\n## Section\n\n### Sub\n\n#### Deep\n\n##### Too deep\n",
            &default_toc(),
        );
        let levels: Vec<u8> = body.outline.iter().map(|e| e.level).collect();
        assert_eq!(levels, [2, 3, 4]);
        // Out-of-range headings still get ids for deep links.
        assert!(body.html.contains(r#"<h1 id="title">"#));
        assert!(body.html.contains(r#"<h5 id="too-deep">"#));
    }

    #[test]
    fn outline_respects_custom_level_range() {
        let toc = TocConfig {
            min_level: 2,
            max_level: 2,
        };
        let body = render_markdown("## Keep\n\n### Drop\n", &toc);
        assert_eq!(body.outline.len(), 1);
        assert_eq!(body.outline[0].id, "keep");
    }

    #[test]
    fn outline_entries_are_in_document_order() {
        let body = render_markdown("## B\n\n## A\n\n## C\n", &default_toc());
        let ids: Vec<&str> = body.outline.iter().map(|e| e.id.as_str()).collect();
        assert_eq!(ids, ["b", "a", "c"]);
    }

    #[test]
    fn inline_code_counts_toward_heading_text() {
        let body = render_markdown("## The `Result` type\n", &default_toc());
        assert_eq!(body.outline[0].id, "the-result-type");
        assert_eq!(body.outline[0].text, "The Result type");
    }

    #[test]
    fn zero_headings_produce_empty_outline() {
        let body = render_markdown("Just a paragraph.\n\nAnother one.\n", &default_toc());
        assert!(body.outline.is_empty());
        assert!(body.html.contains("<p>Just a paragraph.</p>"));
    }

    #[test]
    fn code_fences_keep_language_class() {
        let body = render_markdown("```ts\nconst x = 1;\n```\n", &default_toc());
        assert!(body.html.contains(r#"<code class="language-ts">"#));
    }

    #[test]
    fn tables_are_enabled() {
        let body = render_markdown("| a | b |\n|---|---|\n| 1 | 2 |\n", &default_toc());
        assert!(body.html.contains("<table>"));
    }

    #[test]
    fn link_pages_pass_through_unrendered() {
        let page = Page {
            title: "GitHub".into(),
            link_title: "GitHub".into(),
            slug: "github".into(),
            source: "050-github.md".into(),
            body: "https://github.com/arthur-debert/guidepost".into(),
            in_nav: true,
            sort_key: 50,
            is_link: true,
        };
        let rendered = render_page(&page, &default_toc());
        assert!(rendered.html.is_empty());
        assert!(rendered.outline.is_empty());
    }

    #[test]
    fn fixture_pipeline_renders_outlines() {
        let tmp = crate::test_helpers::setup_fixtures();
        let manifest = crate::scan::scan(tmp.path()).unwrap();
        let manifest_path = tmp.path().join("manifest.json");
        std::fs::write(&manifest_path, serde_json::to_string(&manifest).unwrap()).unwrap();

        let rendered = render(&manifest_path).unwrap();
        let tour = crate::test_helpers::find_rendered(&rendered, "language-tour");
        assert_eq!(tour.outline[0].id, "primitives");
        assert!(tour.outline.len() >= 10);
        assert!(tour.html.contains(r#"id="the-result-pattern""#));

        let github = crate::test_helpers::find_rendered(&rendered, "github");
        assert!(github.html.is_empty());
    }

    #[test]
    fn markdown_pages_render_html_and_outline() {
        let page = Page {
            title: "Guide".into(),
            link_title: "guide".into(),
            slug: "guide".into(),
            source: "010-guide.md".into(),
            body: "# Guide\n\n## First steps\n".into(),
            in_nav: true,
            sort_key: 10,
            is_link: false,
        };
        let rendered = render_page(&page, &default_toc());
        assert!(rendered.html.contains(r#"id="first-steps""#));
        assert_eq!(rendered.outline.len(), 1);
    }
}
