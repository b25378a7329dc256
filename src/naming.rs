//! Filename parsing for the NNN-name page convention.
//!
//! Every page file follows the same naming pattern: an optional numeric
//! prefix (`NNN-`) followed by a name. The prefix controls navigation order;
//! pages without one are built but stay out of the navigation bar.
//!
//! ## Display Titles
//!
//! Dashes in the name portion are converted to spaces for display:
//! - `010-getting-started.md` → "getting started" (nav label)
//! - `040-why-static.md` → "why static"
//! - `wip-notes.md` → "wip notes" (no prefix, hidden from nav)

/// Result of parsing a numbered page name like `010-getting-started`.
#[derive(Debug, Clone, PartialEq)]
pub struct ParsedName {
    /// Number prefix if present (e.g., `10` from `010-getting-started`)
    pub number: Option<u32>,
    /// Raw name part after `NNN-`, dashes preserved. Empty if number-only.
    /// For unnumbered entries, this is the full input.
    pub name: String,
    /// Display title: name with dashes converted to spaces.
    pub display_title: String,
}

/// Parse a page file stem following the `NNN-name` convention.
///
/// Handles these patterns:
/// - `"010-getting-started"` → number=Some(10), name="getting-started", display_title="getting started"
/// - `"020-Guide"` → number=Some(20), name="Guide", display_title="Guide"
/// - `"001"` → number=Some(1), name="", display_title=""
/// - `"001-"` → number=Some(1), name="", display_title=""
/// - `"index"` → number=None, name="index", display_title="index"
/// - `"wip-notes"` → number=None, name="wip-notes", display_title="wip notes"
pub fn parse_entry_name(name: &str) -> ParsedName {
    // Try splitting on first dash
    if let Some(dash_pos) = name.find('-') {
        let prefix = &name[..dash_pos];
        if let Ok(num) = prefix.parse::<u32>() {
            let raw = &name[dash_pos + 1..];
            return ParsedName {
                number: Some(num),
                name: raw.to_string(),
                display_title: raw.replace('-', " "),
            };
        }
    }
    // Check if the entire string is a pure number (no dash)
    if let Ok(num) = name.parse::<u32>() {
        return ParsedName {
            number: Some(num),
            name: String::new(),
            display_title: String::new(),
        };
    }
    // No number prefix
    ParsedName {
        number: None,
        name: name.to_string(),
        display_title: name.replace('-', " "),
    }
}
