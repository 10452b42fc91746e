//! Color tokens for theming

use std::fmt;

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use crate::error::ThemeError;

/// RGBA color with u8 components
///
/// Formats (and serializes) as a lowercase `#rrggbb` string, or
/// `#rrggbbaa` when not fully opaque.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    pub const WHITE: Color = Color::rgb(0xFF, 0xFF, 0xFF);
    pub const BLACK: Color = Color::rgb(0x00, 0x00, 0x00);
    pub const TRANSPARENT: Color = Color::new(0x00, 0x00, 0x00, 0x00);

    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 0xFF }
    }

    /// Create from hex value (0xRRGGBB or 0xRRGGBBAA)
    pub const fn from_hex(hex: u32) -> Self {
        if hex > 0xFFFFFF {
            Self::new(
                ((hex >> 24) & 0xFF) as u8,
                ((hex >> 16) & 0xFF) as u8,
                ((hex >> 8) & 0xFF) as u8,
                (hex & 0xFF) as u8,
            )
        } else {
            Self::rgb(
                ((hex >> 16) & 0xFF) as u8,
                ((hex >> 8) & 0xFF) as u8,
                (hex & 0xFF) as u8,
            )
        }
    }

    /// Parse a `#RGB`, `#RRGGBB` or `#RRGGBBAA` literal.
    ///
    /// Anything else (including named CSS colors) returns `None`: only
    /// values that are provably concrete pass through the resolver.
    pub fn parse_hex(literal: &str) -> Option<Self> {
        let digits = literal.strip_prefix('#')?;
        if !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
            return None;
        }
        let value = u32::from_str_radix(digits, 16).ok()?;
        match digits.len() {
            3 => {
                let expand = |nibble: u32| ((nibble & 0xF) * 0x11) as u8;
                Some(Self::rgb(
                    expand(value >> 8),
                    expand(value >> 4),
                    expand(value),
                ))
            }
            6 => Some(Self::from_hex(value)),
            8 => Some(Self::new(
                (value >> 24) as u8,
                (value >> 16) as u8,
                (value >> 8) as u8,
                value as u8,
            )),
            _ => None,
        }
    }

    /// Set alpha and return new color
    pub fn with_alpha(self, alpha: u8) -> Self {
        Self { a: alpha, ..self }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)?;
        if self.a != 0xFF {
            write!(f, "{:02x}", self.a)?;
        }
        Ok(())
    }
}

impl TryFrom<String> for Color {
    type Error = ThemeError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Color::parse_hex(&value).ok_or(ThemeError::InvalidColor(value))
    }
}

impl From<Color> for String {
    fn from(color: Color) -> Self {
        color.to_string()
    }
}

/// Shade keys used by the built-in scales, lightest to darkest.
pub const SHADES: [&str; 10] = [
    "50", "100", "200", "300", "400", "500", "600", "700", "800", "900",
];

/// A named color in the token store: either one value or a shade scale
/// (`"red"` → `{"50": ..., "500": ..., "900": ...}`).
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ColorEntry {
    Solid(Color),
    Scale(FxHashMap<String, Color>),
}

impl ColorEntry {
    /// Build a scale from ten values matching [`SHADES`].
    pub fn scale(values: [u32; 10]) -> Self {
        ColorEntry::Scale(
            SHADES
                .iter()
                .zip(values)
                .map(|(shade, hex)| (shade.to_string(), Color::from_hex(hex)))
                .collect(),
        )
    }

    pub fn shade(&self, shade: &str) -> Option<Color> {
        match self {
            ColorEntry::Solid(_) => None,
            ColorEntry::Scale(shades) => shades.get(shade).copied(),
        }
    }
}

impl From<Color> for ColorEntry {
    fn from(color: Color) -> Self {
        ColorEntry::Solid(color)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_short_and_long_hex() {
        assert_eq!(Color::parse_hex("#fff"), Some(Color::WHITE));
        assert_eq!(Color::parse_hex("#3B82F6"), Some(Color::from_hex(0x3B82F6)));
        assert_eq!(
            Color::parse_hex("#00000000"),
            Some(Color::TRANSPARENT)
        );
    }

    #[test]
    fn rejects_non_hex_literals() {
        assert_eq!(Color::parse_hex("red"), None);
        assert_eq!(Color::parse_hex("#12"), None);
        assert_eq!(Color::parse_hex("#gggggg"), None);
        assert_eq!(Color::parse_hex("#+12345"), None);
    }

    #[test]
    fn displays_alpha_only_when_translucent() {
        assert_eq!(Color::from_hex(0x3B82F6).to_string(), "#3b82f6");
        assert_eq!(Color::WHITE.with_alpha(0x80).to_string(), "#ffffff80");
    }

    #[test]
    fn scale_maps_every_shade() {
        let entry = ColorEntry::scale([0, 1, 2, 3, 4, 5, 6, 7, 8, 9]);
        assert_eq!(entry.shade("500"), Some(Color::from_hex(5)));
        assert_eq!(entry.shade("950"), None);
        assert_eq!(ColorEntry::Solid(Color::BLACK).shade("500"), None);
    }
}
