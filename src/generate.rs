//! HTML site generation.
//!
//! Stage 3 of the guidepost build pipeline. Takes the rendered manifest and
//! generates the final static site.
//!
//! ## Generated Pages
//!
//! - **Landing page** (`/index.html`): rendered from `index.md`
//! - **Guide pages** (`/{slug}.html`): article content beside a guide panel
//!   listing the page's own sections
//! - **Contact page** (`/contact.html`): name/email/message form, generated
//!   only when `[contact]` is configured
//!
//! ## The Guide Panel
//!
//! Pages with at least one outline entry get the guide layout: a TOC panel
//! with one anchor per section (`href="#{id}"`, one class per heading level)
//! and the scrollable reading container. The shipped script keeps the panel
//! synchronized with scrolling; its tunables — observer root margin and
//! threshold, toast lifetime — are written as `data-*` attributes on
//! `<body>` so the script itself stays static. Pages with no headings get
//! no panel, and the script finds nothing to wire up.
//!
//! ## CSS and JavaScript
//!
//! Static assets are embedded at compile time and inlined into every page:
//! - `static/style.css`: base styles (colors/layout injected from config)
//! - `static/guide.js`: copy-links, scroll-spy, side-nav toggle
//! - `static/form.js`: contact form submission (contact page only)
//!
//! ## HTML Generation
//!
//! Uses [maud](https://maud.lambda.xyz/) for compile-time HTML templating.
//! Templates are type-safe Rust code with automatic XSS escaping.

use crate::config::{self, SiteConfig};
use crate::interact::{self, decorate};
use crate::render::{Manifest, RenderedPage};
use crate::types::{NavItem, OutlineEntry};
use maud::{DOCTYPE, Markup, PreEscaped, html};
use std::fs;
use std::path::Path;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum GenerateError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

const CSS_STATIC: &str = include_str!("../static/style.css");
const GUIDE_JS: &str = include_str!("../static/guide.js");
const FORM_JS: &str = include_str!("../static/form.js");

pub fn generate(
    manifest_path: &Path,
    output_dir: &Path,
    source_dir: &Path,
) -> Result<(), GenerateError> {
    let manifest_content = fs::read_to_string(manifest_path)?;
    let manifest: Manifest = serde_json::from_str(&manifest_content)?;

    let css = site_css(&manifest.config);

    fs::create_dir_all(output_dir)?;

    for rendered in manifest.pages.iter().filter(|p| !p.page.is_link) {
        let page_html = render_guide_page(rendered, &manifest, &css);
        let filename = format!("{}.html", rendered.page.slug);
        fs::write(output_dir.join(&filename), page_html.into_string())?;
    }

    if manifest.config.contact.is_enabled() {
        let contact_html = render_contact_page(&manifest, &css);
        fs::write(output_dir.join("contact.html"), contact_html.into_string())?;
    }

    copy_assets(source_dir, output_dir, &manifest.assets)?;

    Ok(())
}

/// Assemble the full stylesheet: config-driven custom properties first,
/// then the static base styles that consume them.
fn site_css(config: &SiteConfig) -> String {
    format!(
        "{}\n\n{}\n\n{}",
        config::generate_color_css(&config.colors),
        config::generate_theme_css(&config.theme),
        CSS_STATIC
    )
}

/// Copy passthrough assets into the output root, preserving paths.
fn copy_assets(
    source_dir: &Path,
    output_dir: &Path,
    assets: &[String],
) -> Result<(), GenerateError> {
    for rel in assets {
        let src = source_dir.join(rel);
        let dst = output_dir.join(rel);
        if let Some(parent) = dst.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::copy(&src, &dst)?;
    }
    Ok(())
}

// ============================================================================
// HTML Components
// ============================================================================

/// Renders the base HTML document structure.
///
/// Every page carries the scroll-spy and toast tunables as `data-*`
/// attributes on `<body>`; the shipped script reads them instead of
/// hard-coding constants.
fn base_document(title: &str, config: &SiteConfig, css: &str, content: Markup) -> Markup {
    html! {
        (DOCTYPE)
        html lang=(config.site.language) {
            head {
                meta charset="UTF-8";
                meta name="viewport" content="width=device-width, initial-scale=1.0";
                @if !config.site.description.is_empty() {
                    meta name="description" content=(config.site.description);
                }
                title { (title) }
                style { (PreEscaped(css)) }
            }
            body data-toast-ms=(decorate::TOAST_VISIBLE_MS)
                data-spy-margin=(config.scrollspy.root_margin())
                data-spy-threshold=(config.scrollspy.visibility)
            {
                (content)
                script { (PreEscaped(GUIDE_JS)) }
            }
        }
    }
}

/// Renders the site header: title linking home, plus the page navigation.
fn site_header(site_title: &str, nav: Markup) -> Markup {
    html! {
        header.site-header {
            a.site-title href="/" { (site_title) }
            (nav)
        }
    }
}

/// Renders the navigation bar.
///
/// Numbered pages in number order; external links open in a new tab; the
/// contact entry is appended when the form is configured. The entry for
/// `current_slug` carries the `current` class.
pub fn render_nav(items: &[NavItem], current_slug: &str, contact_enabled: bool) -> Markup {
    let current_href = format!("/{current_slug}.html");
    html! {
        nav.site-nav {
            ul {
                @for item in items {
                    @let is_current = !item.external && item.href == current_href;
                    li class=[is_current.then_some("current")] {
                        @if item.external {
                            a href=(item.href) target="_blank" rel="noopener" { (item.title) }
                        } @else {
                            a href=(item.href) { (item.title) }
                        }
                    }
                }
                @if contact_enabled {
                    @let is_current = current_slug == "contact";
                    li class=[is_current.then_some("current")] {
                        a href="/contact.html" { "Contact" }
                    }
                }
            }
        }
    }
}

/// Renders the guide TOC panel: one anchor per outline entry, in document
/// order, with a per-level class for indentation.
fn render_toc(outline: &[OutlineEntry]) -> Markup {
    html! {
        aside class=(interact::GUIDE_NAV_CLASS) {
            @for entry in outline {
                a class={ "toc-level-" (entry.level) } href={ "#" (entry.id) } { (entry.text) }
            }
        }
    }
}

// ============================================================================
// Page Renderers
// ============================================================================

/// Renders a content page. Pages with an outline get the guide layout
/// (toggle button + TOC panel + scrollable reading area); pages without
/// one get the reading area alone.
fn render_guide_page(rendered: &RenderedPage, manifest: &Manifest, css: &str) -> Markup {
    let config = &manifest.config;
    let nav = render_nav(
        &manifest.navigation,
        &rendered.page.slug,
        config.contact.is_enabled(),
    );

    let content = html! {
        (site_header(&config.site.title, nav))
        div.guide-layout {
            @if !rendered.outline.is_empty() {
                button id=(interact::NAV_BUTTON_ID) type="button" aria-label="Toggle contents" { "Contents" }
                (render_toc(&rendered.outline))
            }
            main class=(interact::CONTENT_CLASS) {
                article { (PreEscaped(&rendered.html)) }
            }
        }
    };

    let page_title = if rendered.page.slug == "index" {
        config.site.title.clone()
    } else {
        format!("{} - {}", rendered.page.title, config.site.title)
    };

    base_document(&page_title, config, css, content)
}

/// Renders the contact page: a form whose submission target and payload
/// fields ride along as `data-*` attributes for the form script.
fn render_contact_page(manifest: &Manifest, css: &str) -> Markup {
    let config = &manifest.config;
    let nav = render_nav(&manifest.navigation, "contact", true);

    let content = html! {
        (site_header(&config.site.title, nav))
        div.guide-layout {
            main class=(interact::CONTENT_CLASS) {
                h1 { "Contact" }
                form #contact-form.contact-form
                    data-to=(config.contact.to)
                    data-subject=(config.contact.subject)
                    data-endpoint=(config.contact.endpoint)
                {
                    label for="name" { "Name" }
                    input #name name="name" type="text" required;
                    label for="email" { "Email" }
                    input #email name="email" type="email" required;
                    label for="message" { "Message" }
                    textarea #message name="message" required {}
                    button type="submit" { "Send" }
                }
                script { (PreEscaped(FORM_JS)) }
            }
        }
    };

    let page_title = format!("Contact - {}", config.site.title);
    base_document(&page_title, config, css, content)
}

// ============================================================================
// Tests
// ============================================================================
