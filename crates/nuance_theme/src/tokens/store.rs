//! The token store: every design token a theme defines

use std::fmt;
use std::path::Path;

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use super::color::ColorEntry;
use crate::error::ThemeError;

/// Token categories, used for lookups and error reporting
#[derive(Clone, Copy, Debug, Hash, Eq, PartialEq)]
pub enum TokenCategory {
    Color,
    FontSize,
    LineHeight,
    LetterSpacing,
    FontWeight,
    Font,
}

impl TokenCategory {
    pub fn as_str(self) -> &'static str {
        match self {
            TokenCategory::Color => "color",
            TokenCategory::FontSize => "font size",
            TokenCategory::LineHeight => "line height",
            TokenCategory::LetterSpacing => "letter spacing",
            TokenCategory::FontWeight => "font weight",
            TokenCategory::Font => "font",
        }
    }
}

impl fmt::Display for TokenCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Complete set of design tokens for one color scheme
///
/// Line heights and letter spacings are em multipliers relative to the
/// resolved font size.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TokenStore {
    pub colors: FxHashMap<String, ColorEntry>,
    pub font_sizes: FxHashMap<String, f32>,
    pub line_heights: FxHashMap<String, f32>,
    pub letter_spacings: FxHashMap<String, f32>,
    pub font_weights: FxHashMap<String, String>,
    pub fonts: FxHashMap<String, String>,
    /// Multiplier applied to numeric margin/padding shorthands
    pub spacing_unit: f32,
}

impl Default for TokenStore {
    fn default() -> Self {
        Self {
            colors: FxHashMap::default(),
            font_sizes: FxHashMap::default(),
            line_heights: FxHashMap::default(),
            letter_spacings: FxHashMap::default(),
            font_weights: FxHashMap::default(),
            fonts: FxHashMap::default(),
            spacing_unit: 1.0,
        }
    }
}

impl TokenStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a token store from a TOML document
    pub fn from_toml_str(src: &str) -> Result<Self, ThemeError> {
        Ok(toml::from_str(src)?)
    }

    /// Load a token store from a TOML file
    pub fn load(path: &Path) -> Result<Self, ThemeError> {
        let src = std::fs::read_to_string(path).map_err(|source| ThemeError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&src)
    }

    pub fn color(&self, name: &str) -> Option<&ColorEntry> {
        self.colors.get(name)
    }

    pub fn font_size(&self, name: &str) -> Option<f32> {
        self.font_sizes.get(name).copied()
    }

    pub fn line_height(&self, name: &str) -> Option<f32> {
        self.line_heights.get(name).copied()
    }

    pub fn letter_spacing(&self, name: &str) -> Option<f32> {
        self.letter_spacings.get(name).copied()
    }

    pub fn font_weight(&self, name: &str) -> Option<&str> {
        self.font_weights.get(name).map(String::as_str)
    }

    pub fn font(&self, name: &str) -> Option<&str> {
        self.fonts.get(name).map(String::as_str)
    }

    /// Check whether a token name exists in a category
    pub fn contains(&self, category: TokenCategory, name: &str) -> bool {
        match category {
            TokenCategory::Color => self.colors.contains_key(name),
            TokenCategory::FontSize => self.font_sizes.contains_key(name),
            TokenCategory::LineHeight => self.line_heights.contains_key(name),
            TokenCategory::LetterSpacing => self.letter_spacings.contains_key(name),
            TokenCategory::FontWeight => self.font_weights.contains_key(name),
            TokenCategory::Font => self.fonts.contains_key(name),
        }
    }

    // Builder helpers used by presets

    pub fn with_color(mut self, name: &str, entry: impl Into<ColorEntry>) -> Self {
        self.colors.insert(name.to_string(), entry.into());
        self
    }

    pub fn with_font_size(mut self, name: &str, px: f32) -> Self {
        self.font_sizes.insert(name.to_string(), px);
        self
    }

    pub fn with_line_height(mut self, name: &str, em: f32) -> Self {
        self.line_heights.insert(name.to_string(), em);
        self
    }

    pub fn with_letter_spacing(mut self, name: &str, em: f32) -> Self {
        self.letter_spacings.insert(name.to_string(), em);
        self
    }

    pub fn with_font_weight(mut self, name: &str, weight: &str) -> Self {
        self.font_weights.insert(name.to_string(), weight.to_string());
        self
    }

    pub fn with_font(mut self, name: &str, family: &str) -> Self {
        self.fonts.insert(name.to_string(), family.to_string());
        self
    }

    pub fn with_spacing_unit(mut self, unit: f32) -> Self {
        self.spacing_unit = unit;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tokens::Color;
    use pretty_assertions::assert_eq;

    #[test]
    fn parses_solid_and_scale_colors_from_toml() {
        let store = TokenStore::from_toml_str(
            r##"
            spacing_unit = 4.0

            [colors]
            text = "#171717"
            red = { "500" = "#ef4444", "700" = "#b91c1c" }

            [font_sizes]
            md = 16
            "##,
        )
        .unwrap();

        assert_eq!(store.spacing_unit, 4.0);
        assert_eq!(
            store.color("text"),
            Some(&ColorEntry::Solid(Color::from_hex(0x171717)))
        );
        assert_eq!(
            store.color("red").and_then(|c| c.shade("700")),
            Some(Color::from_hex(0xB91C1C))
        );
        assert_eq!(store.font_size("md"), Some(16.0));
        assert!(store.line_heights.is_empty());
    }

    #[test]
    fn missing_spacing_unit_defaults_to_one() {
        let store = TokenStore::from_toml_str("").unwrap();
        assert_eq!(store.spacing_unit, 1.0);
    }

    #[test]
    fn rejects_invalid_color_literal() {
        let err = TokenStore::from_toml_str("[colors]\ntext = \"teal\"\n").unwrap_err();
        assert!(matches!(err, ThemeError::Parse(_)));
    }

    #[test]
    fn contains_checks_the_right_category() {
        let store = TokenStore::new().with_font_size("md", 16.0);
        assert!(store.contains(TokenCategory::FontSize, "md"));
        assert!(!store.contains(TokenCategory::LineHeight, "md"));
    }
}
