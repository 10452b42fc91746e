//! Theme validation
//!
//! Every token named by a variant table must resolve in the theme that will
//! render it. These checks walk the tables up front so a dangling name shows
//! up at startup (or in `nuance check`) instead of on first render.

use nuance_theme::{
    resolve_color, resolve_font_family, resolve_font_size, ColorScheme, ThemeBundle, TokenStore,
};
use tracing::warn;

use crate::components::form_label::REQUIRED_COLOR;
use crate::components::text::DEFAULT_TEXT_COLOR;
use crate::error::StyleError;
use crate::variants::{ButtonVariant, FontSize, TextVariant};

/// Colors referenced by component pipelines outside the variant tables
const PIPELINE_COLORS: [&str; 4] = [DEFAULT_TEXT_COLOR, REQUIRED_COLOR, "black", "white"];

/// Resolve every token the variant tables reference against `tokens`
///
/// Returns one error per unresolvable reference, in table order.
pub fn validate_variants(tokens: &TokenStore) -> Vec<StyleError> {
    let mut errors = Vec::new();

    for variant in ButtonVariant::ALL {
        for (state, style) in variant.style().states() {
            for color in [style.background_color, style.border_color, style.color] {
                if let Err(source) = resolve_color(color, tokens) {
                    errors.push(StyleError::Variant {
                        variant: format!("button {variant} ({state})"),
                        source,
                    });
                }
            }
        }
    }

    for &variant in TextVariant::ALL {
        let style = variant.style();
        let size = match &style.font_size {
            FontSize::Token(token) => resolve_font_size(token, tokens).err(),
            FontSize::Px(_) => None,
        };
        let family = resolve_font_family(style.font_family, tokens).err();
        for source in family.into_iter().chain(size) {
            errors.push(StyleError::Variant {
                variant: format!("text {variant}"),
                source,
            });
        }
    }

    for color in PIPELINE_COLORS {
        if let Err(source) = resolve_color(color, tokens) {
            errors.push(StyleError::Theme(source));
        }
    }

    errors
}

/// Validate both schemes of a bundle, logging each problem
pub fn validate_bundle(bundle: &ThemeBundle) -> Vec<(ColorScheme, StyleError)> {
    let mut errors = Vec::new();
    for scheme in [ColorScheme::Light, ColorScheme::Dark] {
        for error in validate_variants(bundle.for_scheme(scheme)) {
            warn!(theme = bundle.name(), scheme = scheme.as_str(), "{error}");
            errors.push((scheme, error));
        }
    }
    errors
}

#[cfg(test)]
mod tests {
    use super::*;
    use nuance_theme::{presets, Color, ThemeError};

    #[test]
    fn default_theme_is_complete() {
        assert!(validate_variants(&presets::light_tokens()).is_empty());
        assert!(validate_bundle(&presets::default_bundle()).is_empty());
    }

    #[test]
    fn missing_scale_is_reported_per_state() {
        let tokens = presets::light_tokens().with_color("secondary", Color::BLACK);
        let errors = validate_variants(&tokens);

        // secondary.500 and secondary.700 are named by the secondary table only
        let labels: Vec<String> = errors.iter().map(ToString::to_string).collect();
        assert_eq!(errors.len(), 4, "{labels:?}");
        assert!(labels[..2]
            .iter()
            .all(|label| label.starts_with("button Secondary (pressed)")));
        assert!(labels[2..]
            .iter()
            .all(|label| label.starts_with("button Secondary (not pressed)")));
    }

    #[test]
    fn missing_font_tokens_are_reported() {
        let tokens = TokenStore::new()
            .with_color("text", Color::BLACK)
            .with_color("black", Color::BLACK)
            .with_color("white", Color::WHITE);
        let errors = validate_variants(&tokens);
        assert!(errors.iter().any(|error| matches!(
            error,
            StyleError::Variant { variant, source: ThemeError::UnknownToken { .. } }
                if variant == "text H1"
        )));
        assert!(errors
            .iter()
            .any(|error| matches!(error, StyleError::Theme(ThemeError::UnknownColor(name)) if name == "red.500")));
    }

    #[test]
    fn bundle_checks_both_schemes() {
        let light = presets::light_tokens();
        let dark = TokenStore::new();
        let errors = validate_bundle(&ThemeBundle::new("broken", light, dark));
        assert!(!errors.is_empty());
        assert!(errors.iter().all(|(scheme, _)| *scheme == ColorScheme::Dark));
    }
}
