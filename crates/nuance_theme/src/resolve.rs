//! Token resolution
//!
//! Pure lookups from a token name (or literal) plus a [`TokenStore`] to the
//! concrete value the renderer consumes. Unknown names are errors; the only
//! literal passthrough is a hex color.

use crate::error::ThemeError;
use crate::tokens::{Color, ColorEntry, TokenCategory, TokenStore};

/// Shade picked when a scale is referenced by its bare name (`"primary"`).
pub const DEFAULT_SHADE: &str = "500";

/// Resolve a color reference.
///
/// Accepted forms, checked in order:
/// 1. `"name.shade"` where `name` is a scale in the store
/// 2. `"name"` for a solid color, or a scale's [`DEFAULT_SHADE`]
/// 3. a hex literal (`#RGB`, `#RRGGBB`, `#RRGGBBAA`), passed through
pub fn resolve_color(value: &str, store: &TokenStore) -> Result<Color, ThemeError> {
    if let Some((name, shade)) = value.split_once('.') {
        if let Some(entry) = store.color(name) {
            return entry.shade(shade).ok_or_else(|| ThemeError::UnknownShade {
                name: name.to_string(),
                shade: shade.to_string(),
            });
        }
    } else if let Some(entry) = store.color(value) {
        return match entry {
            ColorEntry::Solid(color) => Ok(*color),
            ColorEntry::Scale(_) => entry
                .shade(DEFAULT_SHADE)
                .ok_or_else(|| ThemeError::NoDefaultShade(value.to_string())),
        };
    }

    Color::parse_hex(value).ok_or_else(|| ThemeError::UnknownColor(value.to_string()))
}

/// Convert a relative length (em multiplier) into pixels.
///
/// An unset base stays unset: callers treat `None` as "leave the property
/// alone", never as zero.
pub fn resolve_relative_length(multiplier: f32, base: Option<f32>) -> Option<f32> {
    base.map(|base| multiplier * base)
}

pub fn resolve_font_size(name: &str, store: &TokenStore) -> Result<f32, ThemeError> {
    store
        .font_size(name)
        .ok_or_else(|| ThemeError::unknown_token(TokenCategory::FontSize, name))
}

/// Resolve a line-height token against the (possibly unresolved) font size.
pub fn resolve_line_height(
    name: &str,
    font_size: Option<f32>,
    store: &TokenStore,
) -> Result<Option<f32>, ThemeError> {
    let em = store
        .line_height(name)
        .ok_or_else(|| ThemeError::unknown_token(TokenCategory::LineHeight, name))?;
    Ok(resolve_relative_length(em, font_size))
}

/// Resolve a letter-spacing token against the (possibly unresolved) font size.
pub fn resolve_letter_spacing(
    name: &str,
    font_size: Option<f32>,
    store: &TokenStore,
) -> Result<Option<f32>, ThemeError> {
    let em = store
        .letter_spacing(name)
        .ok_or_else(|| ThemeError::unknown_token(TokenCategory::LetterSpacing, name))?;
    Ok(resolve_relative_length(em, font_size))
}

pub fn resolve_font_weight<'a>(name: &str, store: &'a TokenStore) -> Result<&'a str, ThemeError> {
    store
        .font_weight(name)
        .ok_or_else(|| ThemeError::unknown_token(TokenCategory::FontWeight, name))
}

pub fn resolve_font_family<'a>(name: &str, store: &'a TokenStore) -> Result<&'a str, ThemeError> {
    store
        .font(name)
        .ok_or_else(|| ThemeError::unknown_token(TokenCategory::Font, name))
}
