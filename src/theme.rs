//! Preview themes
//!
//! A theme maps named color tokens and a default font stack onto the SVG
//! output, so the same design can be exported against different palettes
//! (print proof, dark share page, brand colors). Themes are TOML files; the
//! embedded default palette keeps rendering working with no file at all.

use std::collections::HashMap;
use std::path::Path;

use serde::Deserialize;
use thiserror::Error;

/// Errors that can occur when loading or parsing themes
#[derive(Error, Debug)]
pub enum ThemeError {
    #[error("failed to read theme file: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse theme TOML: {0}")]
    Parse(#[from] toml::de::Error),
}

/// A theme: named color tokens plus an optional font stack
#[derive(Debug, Clone)]
pub struct Theme {
    /// Optional display name
    pub name: Option<String>,
    /// Color mappings: token name -> CSS color
    pub colors: HashMap<String, String>,
    /// Font stack applied to the whole preview when set
    pub font_family: Option<String>,
}

#[derive(Deserialize)]
struct TomlTheme {
    metadata: Option<TomlMetadata>,
    #[serde(default)]
    colors: HashMap<String, String>,
    fonts: Option<TomlFonts>,
}

#[derive(Deserialize)]
struct TomlMetadata {
    name: Option<String>,
}

#[derive(Deserialize)]
struct TomlFonts {
    family: Option<String>,
}

/// Default palette: warm paper tones with a muted gold accent
const DEFAULT_PALETTE: &str = r##"
[colors]
canvas = "#fffdf8"
card-edge = "#e8e2d6"
ink = "#2b2b2b"
accent = "#b08d57"
selection = "#2196f3"
debug-outline = "#f44336"
"##;

impl Theme {
    /// Load a theme from a TOML file
    pub fn from_file(path: &Path) -> Result<Self, ThemeError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_toml(&content)
    }

    /// Parse a theme from a TOML string
    pub fn from_toml(content: &str) -> Result<Self, ThemeError> {
        let parsed: TomlTheme = toml::from_str(content)?;
        Ok(Theme {
            name: parsed.metadata.and_then(|m| m.name),
            colors: parsed.colors,
            font_family: parsed.fonts.and_then(|f| f.family),
        })
    }

    /// Resolve a color token against this theme, falling back to the default
    /// palette, then to the ink color for anything unknown.
    pub fn color(&self, token: &str) -> String {
        if let Some(color) = self.colors.get(token) {
            return color.clone();
        }
        if let Some(color) = Self::default().colors.get(token) {
            return color.clone();
        }
        "#2b2b2b".to_string()
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::from_toml(DEFAULT_PALETTE).expect("default palette should be valid TOML")
    }
}
