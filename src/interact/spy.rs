//! Scroll-spy: keeps exactly one TOC entry marked active.
//!
//! The guide panel mirrors the reader's position: whichever heading most
//! recently crossed into the top band of the reading area owns the single
//! `active` marker, and the browser URL fragment follows it without growing
//! the history stack.
//!
//! The controller is a state machine with one state per heading id plus an
//! implicit "none active" start state. The DOM adapter feeds it two kinds of
//! events and applies the returned [`Transition`]s:
//!
//! - **Intersection** (scroll-driven): [`ScrollSpy::on_intersect`]. Unknown
//!   fragments — a heading with no matching TOC entry — are ignored
//!   entirely; the previous marker stays put. Known fragments clear the old
//!   marker and set the new one atomically, and the transition also asks the
//!   adapter to center the TOC entry in its panel and to replace the history
//!   entry's fragment.
//! - **TOC click**: [`ScrollSpy::on_toc_click`]. Marks the clicked entry and
//!   clears every other; navigation proceeds natively via the anchor.
//!
//! Observers deliver intersections in batches. Entries are processed in
//! report order, each one clear-then-set, so the last entry reported wins.
//! That policy is deliberate and preserved as-is.
//!
//! There is no terminal state; the controller lives as long as the page.

/// A change of the active TOC entry.
///
/// Produced by the transition functions and applied by the DOM adapter:
/// remove the marker class from `cleared`, add it to `activated`. For
/// scroll-driven transitions the adapter additionally centers the entry in
/// the panel (smooth) and calls the history API's non-navigating replace
/// with [`Transition::fragment`].
#[derive(Debug, Clone, PartialEq)]
pub struct Transition {
    /// Entry that held the marker before, if any.
    pub cleared: Option<String>,
    /// Entry that holds the marker now.
    pub activated: String,
}

impl Transition {
    /// URL fragment for the history replacement, `"#" + id`.
    pub fn fragment(&self) -> String {
        format!("#{}", self.activated)
    }
}

/// The scroll-spy controller for one page.
///
/// Constructed once per page load from the page outline's fragment set; all
/// other state is rebuilt from scratch on the next load.
#[derive(Debug, Default)]
pub struct ScrollSpy {
    /// Fragments that have a TOC entry, i.e. the valid states.
    fragments: Vec<String>,
    /// Currently active heading id. `None` until the first event.
    active: Option<String>,
}

impl ScrollSpy {
    /// Build a controller for the given TOC fragments (document order).
    pub fn new<I, S>(fragments: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            fragments: fragments.into_iter().map(Into::into).collect(),
            active: None,
        }
    }

    /// The currently active heading id, if any event has landed yet.
    pub fn active(&self) -> Option<&str> {
        self.active.as_deref()
    }

    /// Whether a heading id has a matching TOC entry.
    pub fn knows(&self, heading_id: &str) -> bool {
        self.fragments.iter().any(|f| f == heading_id)
    }

    /// Scroll-driven transition: a heading crossed into the observed band.
    ///
    /// Returns `None` — and leaves all state untouched — when the heading
    /// has no matching TOC entry. Re-intersection of the already-active
    /// heading yields a self-transition; the adapter's clear-then-set is
    /// idempotent, so applying it is harmless.
    pub fn on_intersect(&mut self, heading_id: &str) -> Option<Transition> {
        if !self.knows(heading_id) {
            return None;
        }
        let cleared = self.active.replace(heading_id.to_string());
        Some(Transition {
            cleared,
            activated: heading_id.to_string(),
        })
    }

    /// Process one observer batch in report order.
    ///
    /// Each intersecting entry clears-then-sets, so the last reported entry
    /// ends up active (last-writer-wins). The returned transitions are in
    /// application order; unknown fragments contribute nothing.
    pub fn on_intersect_batch<'a, I>(&mut self, heading_ids: I) -> Vec<Transition>
    where
        I: IntoIterator<Item = &'a str>,
    {
        heading_ids
            .into_iter()
            .filter_map(|id| self.on_intersect(id))
            .collect()
    }

    /// Click-driven transition: the reader clicked a TOC entry.
    ///
    /// The clicked entry becomes active regardless of scroll state; the
    /// adapter clears the marker from every other entry. Navigation is not
    /// suppressed — the anchor's own href performs the jump.
    pub fn on_toc_click(&mut self, heading_id: &str) -> Transition {
        let cleared = self.active.replace(heading_id.to_string());
        Transition {
            cleared,
            activated: heading_id.to_string(),
        }
    }
}

/// The side-navigation toggle button.
///
/// A two-state toggle with no coupling to the scroll-spy: the button flips
/// its own open marker, and closing the panel (e.g. after picking a TOC
/// entry on a small screen) force-clears it.
#[derive(Debug, Default)]
pub struct NavToggle {
    open: bool,
}

impl NavToggle {
    /// Flip the open marker; returns the new state.
    pub fn toggle(&mut self) -> bool {
        self.open = !self.open;
        self.open
    }

    /// Force-close. Returns whether the panel was open.
    pub fn close(&mut self) -> bool {
        std::mem::take(&mut self.open)
    }

    pub fn is_open(&self) -> bool {
        self.open
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn spy() -> ScrollSpy {
        ScrollSpy::new(["section-1", "section-2", "section-3"])
    }

    #[test]
    fn starts_with_nothing_active() {
        assert_eq!(spy().active(), None);
    }

    #[test]
    fn first_intersection_activates_without_clearing() {
        let mut spy = spy();
        let t = spy.on_intersect("section-1").unwrap();
        assert_eq!(t.cleared, None);
        assert_eq!(t.activated, "section-1");
        assert_eq!(t.fragment(), "#section-1");
        assert_eq!(spy.active(), Some("section-1"));
    }

    #[test]
    fn intersection_clears_previous_and_sets_new() {
        let mut spy = spy();
        spy.on_intersect("section-1");
        let t = spy.on_intersect("section-2").unwrap();
        assert_eq!(t.cleared.as_deref(), Some("section-1"));
        assert_eq!(t.activated, "section-2");
        assert_eq!(t.fragment(), "#section-2");
        // Single-active invariant: the machine tracks exactly one id.
        assert_eq!(spy.active(), Some("section-2"));
    }

    #[test]
    fn unknown_fragment_is_ignored_entirely() {
        let mut spy = spy();
        spy.on_intersect("section-1");
        assert_eq!(spy.on_intersect("not-in-toc"), None);
        // Previous marker survives a failed lookup.
        assert_eq!(spy.active(), Some("section-1"));
    }

    #[test]
    fn reintersecting_active_heading_is_a_self_transition() {
        let mut spy = spy();
        spy.on_intersect("section-1");
        let t = spy.on_intersect("section-1").unwrap();
        assert_eq!(t.cleared.as_deref(), Some("section-1"));
        assert_eq!(t.activated, "section-1");
        assert_eq!(spy.active(), Some("section-1"));
    }

    #[test]
    fn batch_is_last_writer_wins() {
        let mut spy = spy();
        let transitions = spy.on_intersect_batch(["section-1", "section-2", "section-3"]);
        assert_eq!(transitions.len(), 3);
        assert_eq!(transitions[1].cleared.as_deref(), Some("section-1"));
        assert_eq!(transitions[2].cleared.as_deref(), Some("section-2"));
        assert_eq!(spy.active(), Some("section-3"));
    }

    #[test]
    fn batch_skips_unknown_fragments() {
        let mut spy = spy();
        let transitions = spy.on_intersect_batch(["section-1", "footnote", "section-2"]);
        assert_eq!(transitions.len(), 2);
        assert_eq!(spy.active(), Some("section-2"));
    }

    #[test]
    fn toc_click_overrides_scroll_state() {
        let mut spy = spy();
        spy.on_intersect("section-1");
        let t = spy.on_toc_click("section-3");
        assert_eq!(t.cleared.as_deref(), Some("section-1"));
        assert_eq!(t.activated, "section-3");
        assert_eq!(spy.active(), Some("section-3"));
    }

    #[test]
    fn empty_outline_never_activates() {
        let mut spy = ScrollSpy::new(Vec::<String>::new());
        assert_eq!(spy.on_intersect("anything"), None);
        assert!(spy.on_intersect_batch(["a", "b"]).is_empty());
        assert_eq!(spy.active(), None);
    }

    #[test]
    fn nav_toggle_flips_and_closes() {
        let mut toggle = NavToggle::default();
        assert!(!toggle.is_open());
        assert!(toggle.toggle());
        assert!(toggle.is_open());
        assert!(!toggle.toggle());
        assert!(!toggle.is_open());
    }

    #[test]
    fn nav_close_reports_prior_state() {
        let mut toggle = NavToggle::default();
        assert!(!toggle.close());
        toggle.toggle();
        assert!(toggle.close());
        assert!(!toggle.is_open());
    }
}
