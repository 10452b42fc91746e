//! Form label styles
//!
//! A row wrapper with an optional label and a red asterisk for required
//! fields. The label falls back to black on light schemes and white on dark
//! ones when the caller's label style carries no color.

use std::sync::Arc;

use nuance_style::prelude::*;
use nuance_theme::{resolve_color, ColorScheme, TokenStore};

use super::text::{text_style, TextProps};
use crate::error::StyleError;

/// Color reference for the required marker
pub const REQUIRED_COLOR: &str = "red.500";

#[derive(Clone, Debug, Default)]
pub struct FormLabelProps {
    pub label: Option<String>,
    pub is_required: bool,
    pub label_style: Option<Style>,
}

impl FormLabelProps {
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: Some(label.into()),
            ..Self::default()
        }
    }

    pub fn required(mut self) -> Self {
        self.is_required = true;
        self
    }

    pub fn label_style(mut self, style: Style) -> Self {
        self.label_style = Some(style);
        self
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct FormLabelStyles {
    pub wrapper: Style,
    /// `None` when there is no label to render
    pub label: Option<Arc<Style>>,
    /// `None` unless the label renders and the field is required
    pub asterisk: Option<Arc<Style>>,
}

fn wrapper_style(has_label: bool) -> Style {
    let wrapper = Style::new().flex_direction(FlexDirection::Row);
    if has_label {
        wrapper.margin_bottom(8.0).margin_top(4.0)
    } else {
        wrapper
    }
}

pub fn form_label_styles(
    props: &FormLabelProps,
    scheme: ColorScheme,
    theme: &Arc<TokenStore>,
) -> Result<FormLabelStyles, StyleError> {
    let has_label = props.label.as_deref().is_some_and(|label| !label.is_empty());
    let wrapper = wrapper_style(has_label);
    if !has_label {
        return Ok(FormLabelStyles {
            wrapper,
            label: None,
            asterisk: None,
        });
    }

    let caller = props.label_style.clone().unwrap_or_default();
    let label_color = match caller.color {
        Some(color) => color,
        None => {
            let fallback = match scheme {
                ColorScheme::Light => "black",
                ColorScheme::Dark => "white",
            };
            resolve_color(fallback, theme)?
        }
    };

    let label = text_style(
        &TextProps::new().style(caller.merge(&Style::new().color(label_color))),
        theme,
    )?;

    let asterisk = if props.is_required {
        let required = resolve_color(REQUIRED_COLOR, theme)?;
        Some(text_style(
            &TextProps::new().style(caller.merge(&Style::new().color(required))),
            theme,
        )?)
    } else {
        None
    };

    Ok(FormLabelStyles {
        wrapper,
        label: Some(label),
        asterisk,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use nuance_theme::{presets, Color};

    fn light() -> Arc<TokenStore> {
        Arc::new(presets::light_tokens())
    }

    #[test]
    fn no_label_leaves_bare_wrapper() {
        let styles = form_label_styles(&FormLabelProps::default(), ColorScheme::Light, &light())
            .unwrap();
        assert_eq!(styles.wrapper.flex_direction, Some(FlexDirection::Row));
        assert_eq!(styles.wrapper.margin_bottom, None);
        assert!(styles.label.is_none());
        assert!(styles.asterisk.is_none());
    }

    #[test]
    fn empty_label_renders_nothing() {
        let props = FormLabelProps::new("").required();
        let styles = form_label_styles(&props, ColorScheme::Light, &light()).unwrap();
        assert_eq!(styles.wrapper.margin_bottom, None);
        assert_eq!(styles.wrapper.margin_top, None);
        assert!(styles.label.is_none());
        assert!(styles.asterisk.is_none());
    }

    #[test]
    fn label_color_follows_scheme() {
        let props = FormLabelProps::new("Email");
        let light = form_label_styles(&props, ColorScheme::Light, &light()).unwrap();
        let dark = form_label_styles(
            &props,
            ColorScheme::Dark,
            &Arc::new(presets::dark_tokens()),
        )
        .unwrap();

        assert_eq!(light.wrapper.margin_bottom, Some(8.0));
        assert_eq!(light.wrapper.margin_top, Some(4.0));
        assert_eq!(light.label.unwrap().color, Some(Color::BLACK));
        assert_eq!(dark.label.unwrap().color, Some(Color::WHITE));
    }

    #[test]
    fn caller_color_wins_and_asterisk_is_red() {
        let blue = Color::from_hex(0x0000FF);
        let props = FormLabelProps::new("Password")
            .required()
            .label_style(Style::new().color(blue).font_size(13.0));
        let styles = form_label_styles(&props, ColorScheme::Light, &light()).unwrap();

        let label = styles.label.unwrap();
        let asterisk = styles.asterisk.unwrap();
        assert_eq!(label.color, Some(blue));
        assert_eq!(asterisk.color, Some(Color::from_hex(0xEF4444)));
        assert_eq!(asterisk.font_size, Some(13.0));
    }

    #[test]
    fn missing_fallback_color_is_reported() {
        let bare = Arc::new(TokenStore::new().with_color("text", Color::BLACK));
        let err = form_label_styles(&FormLabelProps::new("Name"), ColorScheme::Dark, &bare)
            .unwrap_err();
        assert!(matches!(err, StyleError::Theme(_)));
    }
}
