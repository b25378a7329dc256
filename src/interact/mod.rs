//! Interactive page affordances, modeled as plain state machines.
//!
//! Generated pages ship a small vanilla-JavaScript layer (`static/guide.js`)
//! for two behaviors: a copy-to-clipboard link on every section heading, and
//! a table-of-contents panel that tracks the section currently being read.
//! The behavior itself — what gets activated, cleared, copied, and when — is
//! specified here, in testable Rust, and the script is a thin DOM binding:
//!
//! - [`decorate`] — copy-link construction and the toast lifecycle, with the
//!   clipboard behind a capability trait so tests can fake both outcomes.
//! - [`spy`] — the scroll-spy state machine: explicit transition functions
//!   for intersection events and TOC clicks, plus the side-nav toggle.
//!
//! The generator injects the observer geometry and timings into the page as
//! `data-*` attributes (from [`crate::config::ScrollspyConfig`] and the
//! constants here), so the script carries no behavior constants of its own.
//! Class names are shared with the templates through this module for the
//! same reason.

pub mod decorate;
pub mod spy;

pub use decorate::{Clipboard, CopyLink, Toast, TOAST_TEXT, TOAST_VISIBLE_MS};
pub use spy::{NavToggle, ScrollSpy, Transition};

/// Class marking the active TOC entry and the open side-nav button.
pub const ACTIVE_CLASS: &str = "active";
/// Class on every heading copy-link anchor.
pub const COPY_LINK_CLASS: &str = "clipboard";
/// Class on the transient "Copied" toast.
pub const TOAST_CLASS: &str = "clipboard-confirm";
/// Class on the scrollable reading container the observer uses as its root.
pub const CONTENT_CLASS: &str = "guide-content";
/// Class on the TOC panel.
pub const GUIDE_NAV_CLASS: &str = "guide-nav";
/// Element id of the side-nav toggle button.
pub const NAV_BUTTON_ID: &str = "guide-nav-button";
