//! # Guidepost
//!
//! A minimal static site generator for documentation and guide sites.
//! Your filesystem is the data source: markdown files become pages, ordered
//! by numeric prefix, and every section heading becomes a deep-linkable
//! anchor tracked by a scroll-synchronized table of contents.
//!
//! # Architecture: Three-Stage Pipeline
//!
//! Guidepost processes content through three independent stages, each
//! producing a JSON manifest that the next stage consumes:
//!
//! ```text
//! 1. Scan      content/  →  manifest.json    (filesystem → structured data)
//! 2. Render    manifest  →  rendered.json    (markdown → HTML + outlines)
//! 3. Generate  manifest  →  dist/            (final HTML site)
//! ```
//!
//! This separation exists for three reasons:
//!
//! - **Debuggability**: each manifest is human-readable JSON you can inspect.
//! - **Incremental builds**: skip stages whose inputs haven't changed.
//! - **Testability**: each stage is a pure function from manifest to manifest,
//!   so unit tests can exercise pipeline logic without touching the filesystem.
//!
//! # Module Map
//!
//! | Module | Role |
//! |--------|------|
//! | [`scan`] | Stage 1 — walks the content root, discovers pages and assets, produces the scan manifest |
//! | [`render`] | Stage 2 — renders markdown to HTML, assigns heading ids, extracts outlines |
//! | [`generate`] | Stage 3 — renders the final HTML site from the rendered manifest using Maud |
//! | [`interact`] | The interactive layer's state machines: heading copy-links and the scroll-spy |
//! | [`config`] | `config.toml` loading, validation, merging, and CSS generation |
//! | [`types`] | Shared types serialized between stages (`Page`, `NavItem`, `OutlineEntry`) |
//! | [`naming`] | `NNN-name` filename convention parser |
//! | [`output`] | CLI output formatting — information-first display of pipeline results |
//!
//! # Design Decisions
//!
//! ## Behavior in Rust, Bindings in JavaScript
//!
//! The generated site ships under a hundred lines of vanilla JavaScript for
//! its interactive affordances: copy-to-clipboard heading anchors with a
//! transient "Copied" toast, and a guide panel whose single active entry
//! tracks the section being read (with the URL fragment following along,
//! without polluting the history stack). The *behavior* — state transitions,
//! ordering policy, failure modes — lives in the [`interact`] module as
//! plain Rust state machines with unit tests; the script is a thin DOM
//! binding that reads its tunables (observer geometry, toast lifetime) from
//! `data-*` attributes the generator writes from config. One source of
//! truth, testable without a browser.
//!
//! ## Maud Over Template Engines
//!
//! HTML is generated with [Maud](https://maud.lambda.xyz/), a compile-time
//! HTML macro system, rather than Handlebars or Tera. Advantages:
//!
//! - **Compile-time checking**: malformed HTML is a build error, not a runtime surprise.
//! - **Type-safe**: template variables are Rust expressions — no stringly-typed lookups.
//! - **XSS-safe by default**: all interpolation is auto-escaped.
//! - **Zero runtime files**: no template directory to ship or get out of sync.
//!
//! Maud also emits whitespace-free markup, which is why there is no separate
//! HTML minification pass.
//!
//! ## Stable Heading Identifiers
//!
//! The renderer slugifies every heading and de-duplicates collisions with
//! numeric suffixes, in document order. Stable ids are what make deep links
//! shareable and what lets the scroll-spy relate headings to TOC entries by
//! fragment lookup rather than object identity.
//!
//! ## NNN-Prefix Ordering
//!
//! Pages use a numeric prefix (`010-`, `020-`, etc.) for explicit ordering,
//! parsed by [`naming::parse_entry_name`]. Files without a prefix are built
//! but hidden from navigation — useful for work-in-progress content that
//! should remain accessible by direct URL. The filesystem is the source of
//! truth; no database, no front-matter, no separate ordering file.
//!
//! # The "Forever Stack"
//!
//! Guidepost is designed to be usable decades from now with minimal fuss.
//! The output is plain HTML, established CSS, and a small vanilla-JavaScript
//! layer. The binary has zero runtime dependencies. The generated site can
//! be dropped on any file server — no Node, no PHP, no database. If a
//! browser can render HTML, it can display your docs.

pub mod config;
pub mod generate;
pub mod interact;
pub mod naming;
pub mod output;
pub mod render;
pub mod scan;
pub mod types;

#[cfg(test)]
pub(crate) mod test_helpers;
