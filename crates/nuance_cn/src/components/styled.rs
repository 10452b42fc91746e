//! Styled wrapper - shorthand layout props for any component
//!
//! [`Styled`] wraps a component resolver and accepts the base component's
//! props plus a closed set of shorthand props ([`LayoutProps`]). Shorthands
//! become a style layer placed underneath the caller's explicit `style`;
//! nothing else about the base props is touched.

use std::ops::{Deref, DerefMut};
use std::sync::Arc;

use nuance_style::prelude::*;
use nuance_theme::{resolve_color, TokenStore};

use super::button::{ButtonProps, ButtonStyler, ButtonStyles};
use super::text::{TextProps, TextStyler};
use crate::error::StyleError;

/// A component whose style pipeline accepts an explicit style slot
pub trait StyledBase {
    type Props: Clone;
    type Output;

    /// The caller `style` slot in this component's props
    fn style_slot(props: &mut Self::Props) -> &mut Option<ExplicitStyle>;

    fn resolve(
        &mut self,
        props: &Self::Props,
        state: InteractionState,
        theme: &Arc<TokenStore>,
    ) -> Result<Self::Output, StyleError>;
}

impl StyledBase for ButtonStyler {
    type Props = ButtonProps;
    type Output = ButtonStyles;

    fn style_slot(props: &mut ButtonProps) -> &mut Option<ExplicitStyle> {
        &mut props.style
    }

    fn resolve(
        &mut self,
        props: &ButtonProps,
        state: InteractionState,
        theme: &Arc<TokenStore>,
    ) -> Result<ButtonStyles, StyleError> {
        self.compute(props, state, theme)
    }
}

impl StyledBase for TextStyler {
    type Props = TextProps;
    type Output = Arc<Style>;

    fn style_slot(props: &mut TextProps) -> &mut Option<ExplicitStyle> {
        &mut props.style
    }

    fn resolve(
        &mut self,
        props: &TextProps,
        _state: InteractionState,
        theme: &Arc<TokenStore>,
    ) -> Result<Arc<Style>, StyleError> {
        self.compute(props, theme)
    }
}

/// A shorthand value as written by a caller
#[derive(Clone, Debug, PartialEq)]
pub enum ShorthandValue {
    Number(f32),
    Token(String),
}

impl From<f32> for ShorthandValue {
    fn from(value: f32) -> Self {
        ShorthandValue::Number(value)
    }
}

impl From<&str> for ShorthandValue {
    fn from(value: &str) -> Self {
        ShorthandValue::Token(value.to_string())
    }
}

impl From<String> for ShorthandValue {
    fn from(value: String) -> Self {
        ShorthandValue::Token(value)
    }
}

/// Shorthand layout props
///
/// Margin and padding values are multiplied by the theme's spacing unit.
/// Per side, the most specific shorthand wins: `mt` over `my` over `m`.
/// `bg` is a color reference resolved like any other color token.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct LayoutProps {
    pub m: Option<f32>,
    pub mt: Option<f32>,
    pub mr: Option<f32>,
    pub mb: Option<f32>,
    pub ml: Option<f32>,
    pub mx: Option<f32>,
    pub my: Option<f32>,
    pub p: Option<f32>,
    pub pt: Option<f32>,
    pub pr: Option<f32>,
    pub pb: Option<f32>,
    pub pl: Option<f32>,
    pub px: Option<f32>,
    pub py: Option<f32>,
    pub flex: Option<f32>,
    pub bg: Option<String>,
}

macro_rules! spacing_setters {
    ($($key:ident),+ $(,)?) => {
        $(
            pub fn $key(mut self, value: f32) -> Self {
                self.$key = Some(value);
                self
            }
        )+
    };
}

impl LayoutProps {
    /// Every recognized shorthand key
    pub const KEYS: [&'static str; 16] = [
        "m", "mt", "mr", "mb", "ml", "mx", "my", "p", "pt", "pr", "pb", "pl", "px", "py", "flex",
        "bg",
    ];

    pub fn new() -> Self {
        Self::default()
    }

    spacing_setters!(m, mt, mr, mb, ml, mx, my, p, pt, pr, pb, pl, px, py, flex);

    pub fn bg(mut self, color: impl Into<String>) -> Self {
        self.bg = Some(color.into());
        self
    }

    /// Set a shorthand by key; unrecognized keys are rejected
    pub fn set(&mut self, key: &str, value: impl Into<ShorthandValue>) -> Result<(), StyleError> {
        let value = value.into();
        if key == "bg" {
            return match value {
                ShorthandValue::Token(color) => {
                    self.bg = Some(color);
                    Ok(())
                }
                ShorthandValue::Number(_) => Err(StyleError::InvalidShorthand {
                    key: key.to_string(),
                    expected: "a color reference",
                }),
            };
        }

        let slot = match key {
            "m" => &mut self.m,
            "mt" => &mut self.mt,
            "mr" => &mut self.mr,
            "mb" => &mut self.mb,
            "ml" => &mut self.ml,
            "mx" => &mut self.mx,
            "my" => &mut self.my,
            "p" => &mut self.p,
            "pt" => &mut self.pt,
            "pr" => &mut self.pr,
            "pb" => &mut self.pb,
            "pl" => &mut self.pl,
            "px" => &mut self.px,
            "py" => &mut self.py,
            "flex" => &mut self.flex,
            other => return Err(StyleError::UnknownShorthand(other.to_string())),
        };
        match value {
            ShorthandValue::Number(number) => {
                *slot = Some(number);
                Ok(())
            }
            ShorthandValue::Token(_) => Err(StyleError::InvalidShorthand {
                key: key.to_string(),
                expected: "a number",
            }),
        }
    }

    /// Build from `(key, value)` pairs, failing on the first bad key
    pub fn from_pairs<K, V>(pairs: impl IntoIterator<Item = (K, V)>) -> Result<Self, StyleError>
    where
        K: AsRef<str>,
        V: Into<ShorthandValue>,
    {
        let mut props = Self::new();
        for (key, value) in pairs {
            props.set(key.as_ref(), value)?;
        }
        Ok(props)
    }

    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    /// Translate shorthands into a style layer
    pub fn to_style(&self, tokens: &TokenStore) -> Result<Style, StyleError> {
        let unit = tokens.spacing_unit;
        let side = |specific: Option<f32>, axis: Option<f32>, all: Option<f32>| {
            specific.or(axis).or(all).map(|value| value * unit)
        };

        Ok(Style {
            margin_top: side(self.mt, self.my, self.m),
            margin_right: side(self.mr, self.mx, self.m),
            margin_bottom: side(self.mb, self.my, self.m),
            margin_left: side(self.ml, self.mx, self.m),
            padding_top: side(self.pt, self.py, self.p),
            padding_right: side(self.pr, self.px, self.p),
            padding_bottom: side(self.pb, self.py, self.p),
            padding_left: side(self.pl, self.px, self.p),
            flex: self.flex,
            background_color: self
                .bg
                .as_deref()
                .map(|color| resolve_color(color, tokens))
                .transpose()?,
            ..Style::default()
        })
    }
}

/// Base props plus shorthand layout props
#[derive(Clone, Debug, Default)]
pub struct StyledProps<P> {
    pub layout: LayoutProps,
    pub props: P,
}

impl<P> StyledProps<P> {
    pub fn new(props: P) -> Self {
        Self {
            layout: LayoutProps::default(),
            props,
        }
    }

    pub fn layout(mut self, layout: LayoutProps) -> Self {
        self.layout = layout;
        self
    }
}

impl<P> From<P> for StyledProps<P> {
    fn from(props: P) -> Self {
        Self::new(props)
    }
}

type ComposedKey = (ByPtr<Style>, Option<ExplicitStyle>);

/// A component resolver augmented with shorthand layout props
///
/// Derefs to the wrapped resolver, so anything the base component exposes
/// stays reachable unchanged.
#[derive(Debug)]
pub struct Styled<C> {
    base: C,
    shorthand: Memo<(LayoutProps, ByPtr<TokenStore>), Style>,
    composed: Memo<ComposedKey, Option<ExplicitStyle>>,
}

impl<C: StyledBase> Styled<C> {
    pub fn new(base: C) -> Self {
        Self {
            base,
            shorthand: Memo::new("styled.shorthand"),
            composed: Memo::new("styled.composed"),
        }
    }

    pub fn into_inner(self) -> C {
        self.base
    }

    /// Resolve the base component with shorthands layered under its style
    pub fn resolve(
        &mut self,
        props: &StyledProps<C::Props>,
        state: InteractionState,
        theme: &Arc<TokenStore>,
    ) -> Result<C::Output, StyleError> {
        let shorthand = self.shorthand.get_or_try_init(
            (props.layout.clone(), ByPtr::new(theme)),
            |(layout, tokens)| layout.to_style(tokens),
        )?;

        let mut inner = props.props.clone();
        let slot = C::style_slot(&mut inner);
        let composed = self
            .composed
            .get_or_init((ByPtr(shorthand), slot.clone()), |(shorthand, explicit)| {
                if shorthand.is_empty() {
                    return explicit.clone();
                }
                let layer = Arc::clone(&shorthand.0);
                Some(match explicit {
                    Some(explicit) => explicit.under(layer),
                    None => ExplicitStyle::Static(layer),
                })
            });
        *slot = Option::clone(&composed);

        self.base.resolve(&inner, state, theme)
    }
}

impl<C: StyledBase + Default> Default for Styled<C> {
    fn default() -> Self {
        Self::new(C::default())
    }
}

impl<C> Deref for Styled<C> {
    type Target = C;

    fn deref(&self) -> &C {
        &self.base
    }
}

impl<C> DerefMut for Styled<C> {
    fn deref_mut(&mut self) -> &mut C {
        &mut self.base
    }
}

/// Button with shorthand layout props
pub type Button = Styled<ButtonStyler>;

/// Text with shorthand layout props
pub type Text = Styled<TextStyler>;

pub fn button() -> Button {
    Styled::new(ButtonStyler::new())
}

pub fn text() -> Text {
    Styled::new(TextStyler::new())
}

#[cfg(test)]
mod tests {
    use super::*;
    use nuance_theme::{presets, Color};

    fn theme() -> Arc<TokenStore> {
        Arc::new(presets::light_tokens())
    }

    #[test]
    fn specific_side_beats_axis_and_all() {
        let layout = LayoutProps::new().m(4.0).my(8.0).mt(12.0);
        let style = layout.to_style(&presets::light_tokens()).unwrap();
        assert_eq!(style.margin_top, Some(12.0));
        assert_eq!(style.margin_bottom, Some(8.0));
        assert_eq!(style.margin_left, Some(4.0));
    }

    #[test]
    fn spacing_unit_scales_margin_and_padding() {
        let tokens = presets::light_tokens().with_spacing_unit(4.0);
        let style = LayoutProps::new().px(2.0).flex(1.0).to_style(&tokens).unwrap();
        assert_eq!(style.padding_left, Some(8.0));
        assert_eq!(style.padding_right, Some(8.0));
        assert_eq!(style.padding_top, None);
        assert_eq!(style.flex, Some(1.0));
    }

    #[test]
    fn bg_resolves_through_theme() {
        let style = LayoutProps::new()
            .bg("red.500")
            .to_style(&presets::light_tokens())
            .unwrap();
        assert_eq!(style.background_color, Some(Color::from_hex(0xEF4444)));
    }

    #[test]
    fn unknown_shorthand_keys_are_rejected() {
        assert!(matches!(
            LayoutProps::from_pairs([("margin", 4.0)]),
            Err(StyleError::UnknownShorthand(key)) if key == "margin"
        ));
        assert!(matches!(
            LayoutProps::new().set("bg", 3.0),
            Err(StyleError::InvalidShorthand { .. })
        ));
        assert!(matches!(
            LayoutProps::new().set("mt", "large"),
            Err(StyleError::InvalidShorthand { .. })
        ));
    }

    #[test]
    fn every_listed_key_is_accepted() {
        for key in LayoutProps::KEYS {
            let value = if key == "bg" {
                ShorthandValue::from("white")
            } else {
                ShorthandValue::from(1.0)
            };
            assert!(LayoutProps::new().set(key, value).is_ok(), "{key}");
        }
    }

    #[test]
    fn explicit_style_beats_shorthand() {
        let props = StyledProps::new(
            ButtonProps::primary().style(Style::new().margin_top(2.0)),
        )
        .layout(LayoutProps::new().mt(10.0).mb(6.0));

        let styles = button()
            .resolve(&props, InteractionState::IDLE, &theme())
            .unwrap();
        assert_eq!(styles.container.margin_top, Some(2.0));
        assert_eq!(styles.container.margin_bottom, Some(6.0));
    }

    #[test]
    fn shorthand_bg_beats_variant_background() {
        let props = StyledProps::new(ButtonProps::primary()).layout(LayoutProps::new().bg("black"));
        let styles = button()
            .resolve(&props, InteractionState::PRESSED, &theme())
            .unwrap();
        assert_eq!(styles.container.background_color, Some(Color::BLACK));
    }

    #[test]
    fn dynamic_style_still_sees_interaction_state() {
        let props = StyledProps::new(ButtonProps::primary().style_fn(|state| {
            Style::new().border_width(if state.pressed { 3.0 } else { 1.0 })
        }))
        .layout(LayoutProps::new().m(1.0));

        let mut button = button();
        let idle = button
            .resolve(&props, InteractionState::IDLE, &theme())
            .unwrap();
        let pressed = button
            .resolve(&props, InteractionState::PRESSED, &theme())
            .unwrap();
        assert_eq!(idle.container.border_width, Some(1.0));
        assert_eq!(pressed.container.border_width, Some(3.0));
        assert_eq!(pressed.container.margin_left, Some(1.0));
    }

    #[test]
    fn stable_props_keep_output_identity() {
        let tokens = theme();
        let props = StyledProps::new(TextProps::caption()).layout(LayoutProps::new().p(4.0));
        let mut text = text();
        let first = text.resolve(&props, InteractionState::IDLE, &tokens).unwrap();
        let second = text.resolve(&props, InteractionState::IDLE, &tokens).unwrap();
        assert!(Arc::ptr_eq(&first, &second));
        assert_eq!(first.padding_bottom, Some(4.0));
    }

    #[test]
    fn empty_layout_leaves_props_untouched() {
        let tokens = theme();
        let plain = text_style_direct(&tokens);
        let wrapped = text()
            .resolve(
                &StyledProps::new(TextProps::caption()),
                InteractionState::IDLE,
                &tokens,
            )
            .unwrap();
        assert_eq!(*plain, *wrapped);
    }

    fn text_style_direct(tokens: &Arc<TokenStore>) -> Arc<Style> {
        TextStyler::new().compute(&TextProps::caption(), tokens).unwrap()
    }
}
