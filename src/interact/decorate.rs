//! Heading copy-link decoration.
//!
//! Every section heading (levels 2–4) gets a trailing
//! anchor that copies a deep link to that section. Clicking it never
//! navigates; the only feedback is a transient "Copied" toast appended to
//! the link once the clipboard write completes.
//!
//! Construction is a pure function from heading id to [`CopyLink`]
//! descriptor; the click path takes the clipboard as a capability trait so
//! tests can exercise both the success and the denied-permission path. A
//! failed write is silent: no toast, no error surfaced — the visible URL
//! remains copyable by hand.

use crate::types::OutlineEntry;

/// Toast label shown after a successful clipboard write.
pub const TOAST_TEXT: &str = "Copied";

/// How long the toast stays attached before it removes itself.
pub const TOAST_VISIBLE_MS: u64 = 1000;

/// Visible content of the copy-link anchor.
pub const COPY_GLYPH: &str = "📋";

/// Descriptor for one heading's copy-link anchor.
///
/// Owned by its heading and appended as the heading's last child by the
/// DOM adapter. Created once per page load; never removed.
#[derive(Debug, Clone, PartialEq)]
pub struct CopyLink {
    /// Id of the owning heading.
    pub heading_id: String,
    /// Fragment href, `"#" + heading_id`.
    pub href: String,
}

/// Build the copy-link descriptor for a heading.
pub fn copy_link(heading_id: &str) -> CopyLink {
    CopyLink {
        heading_id: heading_id.to_string(),
        href: format!("#{heading_id}"),
    }
}

/// Build copy-links for a whole outline, in document order.
pub fn copy_links(outline: &[OutlineEntry]) -> Vec<CopyLink> {
    outline.iter().map(|entry| copy_link(&entry.id)).collect()
}

/// The fully-qualified URL written to the clipboard: the page URL with its
/// fragment replaced by the heading id.
pub fn clipboard_text(page_url: &str, heading_id: &str) -> String {
    let base = page_url.split('#').next().unwrap_or(page_url);
    format!("{base}#{heading_id}")
}

/// Clipboard write capability.
///
/// The browser adapter backs this with the async clipboard API; tests
/// substitute a fake that records writes or refuses them.
pub trait Clipboard {
    /// Write `text`, returning whether the write completed.
    ///
    /// `false` covers every failure mode the host can produce (permission
    /// denied, no secure context); callers do not distinguish.
    fn write_text(&mut self, text: &str) -> bool;
}

/// A transient confirmation attached to a copy-link.
///
/// Self-destructs [`TOAST_VISIBLE_MS`] after creation. Rapid double-clicks
/// can briefly produce two toasts on one link; that race is accepted, not
/// guarded.
#[derive(Debug, Clone, PartialEq)]
pub struct Toast {
    /// Label text (always [`TOAST_TEXT`]).
    pub text: &'static str,
    /// Absolute time at which the adapter removes the toast.
    pub expires_at_ms: u64,
}

/// Handle a click on a copy-link.
///
/// The adapter has already suppressed the default navigation; this writes
/// the deep link to the clipboard and, on success, returns the toast to
/// attach. A failed write returns `None` and the click has no visible
/// effect.
pub fn on_copy_click<C: Clipboard>(
    link: &CopyLink,
    page_url: &str,
    clipboard: &mut C,
    now_ms: u64,
) -> Option<Toast> {
    let text = clipboard_text(page_url, &link.heading_id);
    if clipboard.write_text(&text) {
        Some(Toast {
            text: TOAST_TEXT,
            expires_at_ms: now_ms + TOAST_VISIBLE_MS,
        })
    } else {
        None
    }
}
