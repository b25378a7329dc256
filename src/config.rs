//! Site configuration module.
//!
//! Handles loading and validating `config.toml` from the content root.
//! Stock defaults cover everything; user config files are sparse overrides
//! merged on top of the defaults.
//!
//! ## Configuration Options
//!
//! ```toml
//! # All options are optional - defaults shown below
//!
//! [site]
//! title = "Guidepost"       # Site name, shown in the header and <title>
//! description = ""          # Meta description
//! language = "en"           # <html lang> attribute
//!
//! [colors.light]
//! background = "#ffffff"
//! surface = "#f5f5f5"       # Guide panel, code blocks
//! text = "#1b1b1b"
//! text_muted = "#666666"    # Nav, captions
//! border = "#e0e0e0"
//! link = "#2b81ba"
//! link_hover = "#174f75"
//! accent = "#fde726"        # Active TOC entry, copy-link feedback
//!
//! [colors.dark]
//! background = "#1b1b1b"
//! surface = "#2b2b2b"
//! text = "#eeeeee"
//! text_muted = "#999999"
//! border = "#333333"
//! link = "#65c1ff"
//! link_hover = "#9cd6ff"
//! accent = "#fde726"
//!
//! [theme]
//! guide_width = "20rem"          # TOC panel width
//! guide_width_wide = "28.125rem" # TOC panel width on wide screens
//! content_max_width = "73.125rem"
//! font_family = "Kanit, sans-serif"
//!
//! [toc]
//! min_level = 2             # Shallowest heading level in the outline
//! max_level = 4             # Deepest heading level in the outline
//!
//! [scrollspy]
//! top_band = 10             # Percent of the reading area, from the top,
//!                           # in which a heading counts as "in view"
//! visibility = 0.5          # Fraction of the heading that must be visible
//!
//! [contact]
//! to = ""                   # Recipient address; the contact page is
//! subject = ""              # generated only when endpoint and to are set
//! endpoint = ""             # Document-store write endpoint URL
//!
//! [processing]
//! max_processes = 4         # Max parallel render workers (omit for auto)
//! ```
//!
//! ## Partial Configuration
//!
//! Config files are sparse — override just the values you want:
//!
//! ```toml
//! # Only override the dark mode accent
//! [colors.dark]
//! accent = "#65c1ff"
//! ```
//!
//! Unknown keys are rejected to catch typos early.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),
    #[error("Config validation error: {0}")]
    Validation(String),
}

/// Site configuration loaded from `config.toml`.
///
/// All fields have sensible defaults. User config files need only specify
/// the values they want to override. Unknown keys are rejected.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SiteConfig {
    /// Site identity (title, description, language).
    pub site: SiteSection,
    /// Color schemes for light and dark modes.
    pub colors: ColorConfig,
    /// Theme/layout settings (panel widths, content width, font).
    pub theme: ThemeConfig,
    /// Table-of-contents outline settings.
    pub toc: TocConfig,
    /// Scroll-spy viewport region settings.
    pub scrollspy: ScrollspyConfig,
    /// Contact form settings (the page is generated only when configured).
    pub contact: ContactConfig,
    /// Parallel rendering settings.
    pub processing: ProcessingConfig,
}

impl SiteConfig {
    /// Validate config values are within acceptable ranges.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.toc.min_level < 1 || self.toc.max_level > 6 {
            return Err(ConfigError::Validation(
                "toc levels must be between 1 and 6".into(),
            ));
        }
        if self.toc.min_level > self.toc.max_level {
            return Err(ConfigError::Validation(
                "toc.min_level must not exceed toc.max_level".into(),
            ));
        }
        if self.scrollspy.top_band == 0 || self.scrollspy.top_band > 100 {
            return Err(ConfigError::Validation(
                "scrollspy.top_band must be 1-100".into(),
            ));
        }
        if !(0.0..=1.0).contains(&self.scrollspy.visibility) {
            return Err(ConfigError::Validation(
                "scrollspy.visibility must be 0.0-1.0".into(),
            ));
        }
        if !self.contact.endpoint.is_empty() && self.contact.to.is_empty() {
            return Err(ConfigError::Validation(
                "contact.to is required when contact.endpoint is set".into(),
            ));
        }
        Ok(())
    }
}

/// Site identity settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SiteSection {
    /// Site name, shown in the header and page titles.
    pub title: String,
    /// Meta description for the landing page.
    pub description: String,
    /// Value of the `<html lang>` attribute.
    pub language: String,
}

impl Default for SiteSection {
    fn default() -> Self {
        Self {
            title: "Guidepost".to_string(),
            description: String::new(),
            language: "en".to_string(),
        }
    }
}

/// Color configuration for light and dark modes.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ColorConfig {
    /// Light mode color scheme.
    pub light: ColorScheme,
    /// Dark mode color scheme.
    pub dark: ColorScheme,
}

impl Default for ColorConfig {
    fn default() -> Self {
        Self {
            light: ColorScheme::default_light(),
            dark: ColorScheme::default_dark(),
        }
    }
}

/// Individual color scheme (light or dark).
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ColorScheme {
    /// Page background color.
    pub background: String,
    /// Raised-surface color (guide panel, code blocks).
    pub surface: String,
    /// Primary text color.
    pub text: String,
    /// Muted/secondary text color (nav, captions).
    pub text_muted: String,
    /// Border color.
    pub border: String,
    /// Link color.
    pub link: String,
    /// Link hover color.
    pub link_hover: String,
    /// Accent color (active TOC entry, copy-link feedback).
    pub accent: String,
}

impl ColorScheme {
    pub fn default_light() -> Self {
        Self {
            background: "#ffffff".to_string(),
            surface: "#f5f5f5".to_string(),
            text: "#1b1b1b".to_string(),
            text_muted: "#666666".to_string(),
            border: "#e0e0e0".to_string(),
            link: "#2b81ba".to_string(),
            link_hover: "#174f75".to_string(),
            accent: "#fde726".to_string(),
        }
    }

    pub fn default_dark() -> Self {
        Self {
            background: "#1b1b1b".to_string(),
            surface: "#2b2b2b".to_string(),
            text: "#eeeeee".to_string(),
            text_muted: "#999999".to_string(),
            border: "#333333".to_string(),
            link: "#65c1ff".to_string(),
            link_hover: "#9cd6ff".to_string(),
            accent: "#fde726".to_string(),
        }
    }
}

impl Default for ColorScheme {
    fn default() -> Self {
        Self::default_light()
    }
}

/// Theme/layout settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ThemeConfig {
    /// Width of the guide TOC panel.
    pub guide_width: String,
    /// Width of the guide TOC panel on wide screens.
    pub guide_width_wide: String,
    /// Maximum width of the page content column.
    pub content_max_width: String,
    /// Font stack for body text.
    pub font_family: String,
}

impl Default for ThemeConfig {
    fn default() -> Self {
        Self {
            guide_width: "20rem".to_string(),
            guide_width_wide: "28.125rem".to_string(),
            content_max_width: "73.125rem".to_string(),
            font_family: "Kanit, sans-serif".to_string(),
        }
    }
}

/// Table-of-contents outline settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct TocConfig {
    /// Shallowest heading level included in the outline.
    pub min_level: u8,
    /// Deepest heading level included in the outline.
    pub max_level: u8,
}

impl Default for TocConfig {
    fn default() -> Self {
        Self {
            min_level: 2,
            max_level: 4,
        }
    }
}

/// Scroll-spy viewport region settings.
///
/// A heading counts as "currently read" once it crosses into the top band
/// of the scrollable reading area with at least `visibility` of it showing.
/// The defaults bias activation toward the heading nearest the top of the
/// reading area rather than the first heading to appear at the bottom edge.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ScrollspyConfig {
    /// Percent of the reading area, measured from the top, in which a
    /// heading counts as in view.
    pub top_band: u8,
    /// Fraction of the heading that must be visible (observer threshold).
    pub visibility: f32,
}

impl Default for ScrollspyConfig {
    fn default() -> Self {
        Self {
            top_band: 10,
            visibility: 0.5,
        }
    }
}

impl ScrollspyConfig {
    /// Root margin for the intersection observer.
    ///
    /// `top_band = 10` → `"0px 0px -90% 0px"`: the bottom 90% of the
    /// container is excluded from the observed region.
    pub fn root_margin(&self) -> String {
        format!("0px 0px -{}% 0px", 100 - u32::from(self.top_band.min(100)))
    }
}

/// Contact form settings.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ContactConfig {
    /// Recipient address for form submissions.
    pub to: String,
    /// Subject line attached to submissions.
    pub subject: String,
    /// Document-store write endpoint the form posts to.
    pub endpoint: String,
}

impl ContactConfig {
    /// The contact page is generated only when an endpoint is configured.
    pub fn is_enabled(&self) -> bool {
        !self.endpoint.is_empty()
    }
}

/// Parallel rendering settings.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ProcessingConfig {
    /// Maximum number of parallel render workers.
    /// When absent or null, defaults to the number of CPU cores.
    /// Values larger than the core count are clamped down.
    pub max_processes: Option<usize>,
}

/// Resolve the effective thread count from config.
///
/// - `None` → use all available cores
/// - `Some(n)` → use `min(n, cores)` (user can constrain down, not up)
pub fn effective_threads(config: &ProcessingConfig) -> usize {
    let cores = std::thread::available_parallelism()
        .map(|n| n.get())
        .unwrap_or(1);
    config.max_processes.map(|n| n.min(cores)).unwrap_or(cores)
}

// =============================================================================
// Config loading, merging, and validation
// =============================================================================

/// Returns the stock default config as a `toml::Value::Table`.
///
/// This is the canonical representation of all default values, used as the
/// base layer for merging user overrides on top.
pub fn stock_defaults_value() -> toml::Value {
    toml::Value::try_from(SiteConfig::default()).expect("default config must serialize")
}

/// Recursively merge `overlay` on top of `base`.
///
/// - Tables are merged key-by-key (overlay keys override base keys).
/// - Non-table values in overlay replace base values entirely.
/// - Keys in base that are not in overlay are preserved.
pub fn merge_toml(base: toml::Value, overlay: toml::Value) -> toml::Value {
    match (base, overlay) {
        (toml::Value::Table(mut base_table), toml::Value::Table(overlay_table)) => {
            for (key, overlay_val) in overlay_table {
                let merged = match base_table.remove(&key) {
                    Some(base_val) => merge_toml(base_val, overlay_val),
                    None => overlay_val,
                };
                base_table.insert(key, merged);
            }
            toml::Value::Table(base_table)
        }
        (_, overlay) => overlay,
    }
}

/// Load a `config.toml` from a directory as a raw TOML value.
///
/// Returns `Ok(None)` if no `config.toml` exists in the directory.
/// Returns `Err` if the file exists but contains invalid TOML.
pub fn load_raw_config(path: &Path) -> Result<Option<toml::Value>, ConfigError> {
    let config_path = path.join("config.toml");
    if !config_path.exists() {
        return Ok(None);
    }
    let content = fs::read_to_string(&config_path)?;
    let value: toml::Value = toml::from_str(&content)?;
    Ok(Some(value))
}

/// Merge an optional overlay onto a base value, then deserialize and validate.
pub fn resolve_config(
    base: toml::Value,
    overlay: Option<toml::Value>,
) -> Result<SiteConfig, ConfigError> {
    let merged = match overlay {
        Some(ov) => merge_toml(base, ov),
        None => base,
    };
    let config: SiteConfig = merged.try_into()?;
    config.validate()?;
    Ok(config)
}

/// Load config from `config.toml` in the given directory.
///
/// Merges user values on top of stock defaults, rejects unknown keys,
/// and validates the result.
pub fn load_config(root: &Path) -> Result<SiteConfig, ConfigError> {
    let base = stock_defaults_value();
    let overlay = load_raw_config(root)?;
    resolve_config(base, overlay)
}

/// Returns a fully-commented stock `config.toml` with all keys and explanations.
///
/// Used by the `gen-config` CLI command.
pub fn stock_config_toml() -> &'static str {
    r##"# Guidepost Configuration
# =======================
# All settings are optional. Remove or comment out any you don't need.
# Values shown below are the defaults. Unknown keys will cause an error.

# ---------------------------------------------------------------------------
# Site identity
# ---------------------------------------------------------------------------
[site]
title = "Guidepost"
description = ""
language = "en"

# ---------------------------------------------------------------------------
# Theme / layout
# ---------------------------------------------------------------------------
[theme]
# Width of the guide TOC panel (CSS value).
guide_width = "20rem"

# Width of the guide TOC panel on wide screens (CSS value).
guide_width_wide = "28.125rem"

# Maximum width of the page content column (CSS value).
content_max_width = "73.125rem"

# Font stack for body text.
font_family = "Kanit, sans-serif"

# ---------------------------------------------------------------------------
# Table of contents
# ---------------------------------------------------------------------------
[toc]
# Heading levels included in the guide panel outline.
min_level = 2
max_level = 4

# ---------------------------------------------------------------------------
# Scroll-spy
# ---------------------------------------------------------------------------
[scrollspy]
# A heading becomes the active TOC entry once it crosses into the top
# `top_band` percent of the reading area with at least `visibility` of it
# visible.
top_band = 10
visibility = 0.5

# ---------------------------------------------------------------------------
# Contact form
# ---------------------------------------------------------------------------
[contact]
# The contact page is generated only when endpoint and to are both set.
to = ""
subject = ""
endpoint = ""

# ---------------------------------------------------------------------------
# Colors - Light mode (prefers-color-scheme: light)
# ---------------------------------------------------------------------------
[colors.light]
background = "#ffffff"
surface = "#f5f5f5"       # Guide panel, code blocks
text = "#1b1b1b"
text_muted = "#666666"    # Nav, captions
border = "#e0e0e0"
link = "#2b81ba"
link_hover = "#174f75"
accent = "#fde726"        # Active TOC entry, copy-link feedback

# ---------------------------------------------------------------------------
# Colors - Dark mode (prefers-color-scheme: dark)
# ---------------------------------------------------------------------------
[colors.dark]
background = "#1b1b1b"
surface = "#2b2b2b"
text = "#eeeeee"
text_muted = "#999999"
border = "#333333"
link = "#65c1ff"
link_hover = "#9cd6ff"
accent = "#fde726"

# ---------------------------------------------------------------------------
# Processing
# ---------------------------------------------------------------------------
[processing]
# Maximum parallel render workers.
# Omit or comment out to auto-detect (= number of CPU cores).
# max_processes = 4
"##
}

/// Generate CSS custom properties from color config.
pub fn generate_color_css(colors: &ColorConfig) -> String {
    format!(
        r#":root {{
    --color-bg: {light_bg};
    --color-surface: {light_surface};
    --color-text: {light_text};
    --color-text-muted: {light_text_muted};
    --color-border: {light_border};
    --color-link: {light_link};
    --color-link-hover: {light_link_hover};
    --color-accent: {light_accent};
}}

@media (prefers-color-scheme: dark) {{
    :root {{
        --color-bg: {dark_bg};
        --color-surface: {dark_surface};
        --color-text: {dark_text};
        --color-text-muted: {dark_text_muted};
        --color-border: {dark_border};
        --color-link: {dark_link};
        --color-link-hover: {dark_link_hover};
        --color-accent: {dark_accent};
    }}
}}"#,
        light_bg = colors.light.background,
        light_surface = colors.light.surface,
        light_text = colors.light.text,
        light_text_muted = colors.light.text_muted,
        light_border = colors.light.border,
        light_link = colors.light.link,
        light_link_hover = colors.light.link_hover,
        light_accent = colors.light.accent,
        dark_bg = colors.dark.background,
        dark_surface = colors.dark.surface,
        dark_text = colors.dark.text,
        dark_text_muted = colors.dark.text_muted,
        dark_border = colors.dark.border,
        dark_link = colors.dark.link,
        dark_link_hover = colors.dark.link_hover,
        dark_accent = colors.dark.accent,
    )
}

/// Generate CSS custom properties from theme config.
pub fn generate_theme_css(theme: &ThemeConfig) -> String {
    format!(
        r#":root {{
    --guide-width: {guide_width};
    --guide-width-wide: {guide_width_wide};
    --content-max-width: {content_max_width};
    --font-family: {font_family};
}}"#,
        guide_width = theme.guide_width,
        guide_width_wide = theme.guide_width_wide,
        content_max_width = theme.content_max_width,
        font_family = theme.font_family,
    )
}
