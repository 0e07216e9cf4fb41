//! Site configuration module.
//!
//! Handles loading, validating, and merging the optional `config.toml` that
//! sits next to the data document. Stock defaults are the base layer; the
//! user file only needs the keys it wants to change.
//!
//! ## Configuration Options
//!
//! ```toml
//! # All options are optional - defaults shown below
//!
//! data = "data.json"        # Data document, relative to the source directory
//!
//! [about]
//! markdown = "My research focuses on ..."
//!
//! [copy]
//! label = "Copied!"         # Shown on the email trigger after a copy
//! revert_ms = 2000          # How long the label stays before reverting
//! highlight_background = "var(--accent)"
//! highlight_color = "white"
//!
//! [nav]
//! sections = ["home", "projects", "publications", "about", "experience",
//!             "skills", "achievements", "certifications", "contact"]
//! root_margin_bottom = 70   # Percent of the viewport shaved off the bottom
//! threshold = 0.2           # Visible fraction that counts as "entered"
//!
//! [colors.light]
//! background = "#ffffff"
//! text = "#111111"
//! text_muted = "#666666"
//! border = "#e0e0e0"
//! accent = "#2563eb"
//!
//! [colors.dark]
//! background = "#0a0a0a"
//! text = "#eeeeee"
//! text_muted = "#999999"
//! border = "#333333"
//! accent = "#60a5fa"
//! ```
//!
//! Unknown keys are rejected to catch typos early.

use serde::{Deserialize, Serialize};
use std::collections::HashSet;
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
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SiteConfig {
    /// Path of the data document, relative to the source directory.
    pub data: String,
    /// The About paragraph.
    pub about: AboutConfig,
    /// Email copy feedback.
    pub copy: CopyConfig,
    /// Section list and scroll tracking parameters.
    pub nav: NavConfig,
    /// Color schemes for light and dark modes.
    pub colors: ColorConfig,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            data: "data.json".to_string(),
            about: AboutConfig::default(),
            copy: CopyConfig::default(),
            nav: NavConfig::default(),
            colors: ColorConfig::default(),
        }
    }
}

impl SiteConfig {
    /// Validate config values are within acceptable ranges.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(0.0..=1.0).contains(&self.nav.threshold) {
            return Err(ConfigError::Validation(
                "nav.threshold must be between 0 and 1".into(),
            ));
        }
        if self.nav.root_margin_bottom > 100 {
            return Err(ConfigError::Validation(
                "nav.root_margin_bottom must be 0-100".into(),
            ));
        }
        if self.nav.sections.is_empty() {
            return Err(ConfigError::Validation(
                "nav.sections must not be empty".into(),
            ));
        }
        let mut seen = HashSet::new();
        for id in &self.nav.sections {
            if id.is_empty() || id.contains(char::is_whitespace) {
                return Err(ConfigError::Validation(format!(
                    "nav.sections entry {id:?} is not a valid element id"
                )));
            }
            if !seen.insert(id.as_str()) {
                return Err(ConfigError::Validation(format!(
                    "nav.sections lists {id:?} twice"
                )));
            }
        }
        if self.copy.revert_ms == 0 {
            return Err(ConfigError::Validation(
                "copy.revert_ms must be greater than 0".into(),
            ));
        }
        Ok(())
    }
}

const DEFAULT_ABOUT: &str = "My research focuses on advancing **AI for sustainability and climate \
science**, with particular emphasis on high-resolution climate monitoring, geospatial foundation \
models, and computer vision applications for environmental understanding. I explore how machine \
learning can address critical climate challenges through innovative approaches in **climate \
informatics, geospatial modeling, and diffusion models** for large-scale environmental \
forecasting. My work investigates novel methods for downscaling climate data, detecting \
environmental changes, and creating intelligent systems that contribute to our understanding of \
Earth's changing climate patterns.";

/// The About paragraph, authored as Markdown.
///
/// This is the only trusted markup on the page: it comes from the site
/// owner's config, never from the data document.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct AboutConfig {
    pub markdown: String,
}

impl Default for AboutConfig {
    fn default() -> Self {
        Self {
            markdown: DEFAULT_ABOUT.to_string(),
        }
    }
}

/// Email copy feedback settings, shared by the hero and footer triggers.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CopyConfig {
    /// Text shown on the trigger after a successful copy.
    pub label: String,
    /// Milliseconds before the trigger reverts to its previous content.
    pub revert_ms: u64,
    /// Background of the hero trigger while showing the copied label.
    pub highlight_background: String,
    /// Text color of the hero trigger while showing the copied label.
    pub highlight_color: String,
}

impl Default for CopyConfig {
    fn default() -> Self {
        Self {
            label: "Copied!".to_string(),
            revert_ms: 2000,
            highlight_background: "var(--accent)".to_string(),
            highlight_color: "white".to_string(),
        }
    }
}

/// Page sections and scroll tracking.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct NavConfig {
    /// Section ids, in page order. Each gets a `<section id>` and a nav
    /// link with a matching `data-section`.
    pub sections: Vec<String>,
    /// Percentage of the viewport height removed from the bottom of the
    /// observation area.
    pub root_margin_bottom: u32,
    /// Fraction of a section that must be visible to count as entered.
    pub threshold: f64,
}

impl Default for NavConfig {
    fn default() -> Self {
        Self {
            sections: [
                "home",
                "projects",
                "publications",
                "about",
                "experience",
                "skills",
                "achievements",
                "certifications",
                "contact",
            ]
            .map(String::from)
            .to_vec(),
            root_margin_bottom: 70,
            threshold: 0.2,
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
    pub background: String,
    pub text: String,
    /// Secondary text (dates, summaries, footer).
    pub text_muted: String,
    pub border: String,
    /// Buttons, chips, the active nav link.
    pub accent: String,
}

impl ColorScheme {
    pub fn default_light() -> Self {
        Self {
            background: "#ffffff".to_string(),
            text: "#111111".to_string(),
            text_muted: "#666666".to_string(),
            border: "#e0e0e0".to_string(),
            accent: "#2563eb".to_string(),
        }
    }

    pub fn default_dark() -> Self {
        Self {
            background: "#0a0a0a".to_string(),
            text: "#eeeeee".to_string(),
            text_muted: "#999999".to_string(),
            border: "#333333".to_string(),
            accent: "#60a5fa".to_string(),
        }
    }
}

impl Default for ColorScheme {
    fn default() -> Self {
        Self::default_light()
    }
}

// =============================================================================
// Config loading, merging, and validation
// =============================================================================

/// Returns the stock default config as a `toml::Value::Table`.
pub fn stock_defaults_value() -> toml::Value {
    toml::Value::try_from(SiteConfig::default()).expect("default config must serialize")
}

/// Recursively merge `overlay` on top of `base`.
///
/// Tables merge key-by-key; any other overlay value replaces the base value.
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

/// Load `config.toml` from a directory as a raw TOML value.
///
/// Returns `Ok(None)` if the directory has no `config.toml`.
pub fn load_raw_config(dir: &Path) -> Result<Option<toml::Value>, ConfigError> {
    let config_path = dir.join("config.toml");
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
pub fn load_config(dir: &Path) -> Result<SiteConfig, ConfigError> {
    resolve_config(stock_defaults_value(), load_raw_config(dir)?)
}

/// Returns a fully-commented stock `config.toml`.
///
/// Used by the `gen-config` CLI command.
pub fn stock_config_toml() -> String {
    format!(
        r##"# folio configuration
# ===================
# All settings are optional. Remove or comment out any you don't need.
# Values shown below are the defaults. Unknown keys cause an error.

# Data document, relative to the directory holding this file.
data = "data.json"

# ---------------------------------------------------------------------------
# About section
# ---------------------------------------------------------------------------
[about]
# Markdown, rendered as the About paragraph. **bold** and links work.
markdown = """{about}"""

# ---------------------------------------------------------------------------
# Email copy feedback (hero button and footer link)
# ---------------------------------------------------------------------------
[copy]
label = "Copied!"
# Milliseconds before the trigger shows its previous content again.
revert_ms = 2000
highlight_background = "var(--accent)"
highlight_color = "white"

# ---------------------------------------------------------------------------
# Sections and scroll tracking
# ---------------------------------------------------------------------------
[nav]
# Page sections in order. Each gets a <section id> and a nav link.
sections = ["home", "projects", "publications", "about", "experience", "skills", "achievements", "certifications", "contact"]
# Percent of the viewport height ignored at the bottom when deciding which
# section is current.
root_margin_bottom = 70
# Fraction of a section that must be visible before it becomes current.
threshold = 0.2

# ---------------------------------------------------------------------------
# Colors - Light mode (prefers-color-scheme: light)
# ---------------------------------------------------------------------------
[colors.light]
background = "#ffffff"
text = "#111111"
text_muted = "#666666"
border = "#e0e0e0"
accent = "#2563eb"

# ---------------------------------------------------------------------------
# Colors - Dark mode (prefers-color-scheme: dark)
# ---------------------------------------------------------------------------
[colors.dark]
background = "#0a0a0a"
text = "#eeeeee"
text_muted = "#999999"
border = "#333333"
accent = "#60a5fa"
"##,
        about = DEFAULT_ABOUT
    )
}

/// Generate CSS custom properties from color config.
pub fn generate_color_css(colors: &ColorConfig) -> String {
    format!(
        r#":root {{
    --color-bg: {light_bg};
    --color-text: {light_text};
    --color-text-muted: {light_text_muted};
    --color-border: {light_border};
    --accent: {light_accent};
}}

@media (prefers-color-scheme: dark) {{
    :root {{
        --color-bg: {dark_bg};
        --color-text: {dark_text};
        --color-text-muted: {dark_text_muted};
        --color-border: {dark_border};
        --accent: {dark_accent};
    }}
}}"#,
        light_bg = colors.light.background,
        light_text = colors.light.text,
        light_text_muted = colors.light.text_muted,
        light_border = colors.light.border,
        light_accent = colors.light.accent,
        dark_bg = colors.dark.background,
        dark_text = colors.dark.text,
        dark_text_muted = colors.dark.text_muted,
        dark_border = colors.dark.border,
        dark_accent = colors.dark.accent,
    )
}
