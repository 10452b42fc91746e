//! Button component - pressable container and label style resolution
//!
//! Layers, lowest precedence first:
//! 1. base container style
//! 2. variant style for the interaction state (pressed / not pressed)
//! 3. size style
//! 4. disabled style, when disabled or loading
//! 5. caller style (static, or a function of the interaction state)
//!
//! The label runs through the text pipeline as `BodyBold`, with the
//! button's label layers as its explicit style.

use std::sync::{Arc, OnceLock};

use nuance_style::prelude::*;
use nuance_theme::{resolve_color, Color, TokenStore};

use super::text::{TextProps, TextStyler};
use crate::error::StyleError;
use crate::variants::{ButtonSize, ButtonVariant, StateStyle};

/// Loader size shown while a button is loading
pub const LOADER_SIZE: f32 = 24.0;

/// Gap between an icon and the button body
pub const ICON_GAP: f32 = 8.0;

/// Props accepted by the button pipeline
#[derive(Clone, Debug, Default)]
pub struct ButtonProps {
    pub variant: ButtonVariant,
    pub size: ButtonSize,
    pub loading: bool,
    pub disabled: bool,
    pub title: Option<String>,
    /// An icon is rendered before the body
    pub left_icon: bool,
    /// An icon is rendered after the body
    pub right_icon: bool,
    /// The caller supplies its own loading element
    pub custom_loader: bool,
    pub style: Option<ExplicitStyle>,
    pub text_style: Option<Arc<Style>>,
}

impl ButtonProps {
    pub fn new(variant: ButtonVariant) -> Self {
        Self {
            variant,
            ..Self::default()
        }
    }

    pub fn primary() -> Self {
        Self::new(ButtonVariant::Primary)
    }

    pub fn secondary() -> Self {
        Self::new(ButtonVariant::Secondary)
    }

    pub fn outline() -> Self {
        Self::new(ButtonVariant::Outline)
    }

    pub fn ghost() -> Self {
        Self::new(ButtonVariant::Ghost)
    }

    pub fn link() -> Self {
        Self::new(ButtonVariant::Link)
    }

    pub fn size(mut self, size: ButtonSize) -> Self {
        self.size = size;
        self
    }

    pub fn loading(mut self, loading: bool) -> Self {
        self.loading = loading;
        self
    }

    pub fn disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn left_icon(mut self) -> Self {
        self.left_icon = true;
        self
    }

    pub fn right_icon(mut self) -> Self {
        self.right_icon = true;
        self
    }

    pub fn custom_loader(mut self) -> Self {
        self.custom_loader = true;
        self
    }

    pub fn style(mut self, style: impl Into<ExplicitStyle>) -> Self {
        self.style = Some(style.into());
        self
    }

    pub fn style_fn(
        mut self,
        style: impl Fn(InteractionState) -> Style + Send + Sync + 'static,
    ) -> Self {
        self.style = Some(ExplicitStyle::dynamic(style));
        self
    }

    pub fn text_style(mut self, style: Style) -> Self {
        self.text_style = Some(Arc::new(style));
        self
    }

    pub fn when(self, condition: bool, transform: impl FnOnce(Self) -> Self) -> Self {
        if condition {
            transform(self)
        } else {
            self
        }
    }

    /// Whether the disabled layer applies
    pub fn is_blocked(&self) -> bool {
        self.disabled || self.loading
    }

    /// What the button renders inside its container
    pub fn content<'a>(&'a self, child_text: Option<&'a str>) -> ButtonContent<'a> {
        if self.loading && self.custom_loader {
            ButtonContent::CustomLoader
        } else if self.loading {
            ButtonContent::Loader
        } else if let Some(title) = self.title.as_deref() {
            ButtonContent::Label(title)
        } else if let Some(text) = child_text {
            ButtonContent::Label(text)
        } else {
            ButtonContent::Children
        }
    }
}

/// Button body selection
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ButtonContent<'a> {
    /// Loading indicator of [`LOADER_SIZE`]
    Loader,
    /// The caller's loading element
    CustomLoader,
    /// Text rendered with the resolved label style
    Label(&'a str),
    /// Caller children, rendered as-is
    Children,
}

/// Resolved styles for one render pass
#[derive(Clone, Debug)]
pub struct ButtonStyles {
    pub container: Arc<Style>,
    pub label: Arc<Style>,
    /// Wrapper for the leading icon, when there is one
    pub left_icon: Option<Arc<Style>>,
    /// Wrapper for the trailing icon, when there is one
    pub right_icon: Option<Arc<Style>>,
}

/// Variant layers for one interaction state
#[derive(Debug, PartialEq)]
struct StateLayers {
    container: Style,
    label: Style,
}

impl StateLayers {
    fn resolve(
        variant: ButtonVariant,
        state: &'static str,
        style: &StateStyle,
        tokens: &TokenStore,
    ) -> Result<Self, StyleError> {
        let color = |token: &str| -> Result<Color, StyleError> {
            resolve_color(token, tokens).map_err(|source| StyleError::Variant {
                variant: format!("button {variant} ({state})"),
                source,
            })
        };

        Ok(Self {
            container: Style::new()
                .background_color(color(style.background_color)?)
                .border_color(color(style.border_color)?)
                .border_width(style.border_width),
            label: Style::new().color(color(style.color)?),
        })
    }
}

fn base_container_style() -> &'static Style {
    static BASE: OnceLock<Style> = OnceLock::new();
    BASE.get_or_init(|| {
        Style::new()
            .align_items(AlignItems::Center)
            .border_radius(4.0)
            .flex_direction(FlexDirection::Row)
            .justify_content(JustifyContent::Center)
            .padding_x(16.0)
            .padding_y(8.0)
    })
}

fn base_label_style() -> &'static Style {
    static BASE: OnceLock<Style> = OnceLock::new();
    BASE.get_or_init(|| {
        Style::new()
            .color(Color::WHITE)
            .font_style(FontStyle::Normal)
            .font_weight("400")
            .letter_spacing(0.0)
            .line_height(21.0)
    })
}

fn left_icon_style() -> &'static Arc<Style> {
    static LEFT: OnceLock<Arc<Style>> = OnceLock::new();
    LEFT.get_or_init(|| Arc::new(Style::new().margin_right(ICON_GAP)))
}

fn right_icon_style() -> &'static Arc<Style> {
    static RIGHT: OnceLock<Arc<Style>> = OnceLock::new();
    RIGHT.get_or_init(|| Arc::new(Style::new().margin_left(ICON_GAP)))
}

type LayerKey = (ButtonVariant, ByPtr<TokenStore>);

#[derive(PartialEq)]
struct ContainerKey {
    interaction: ByPtr<StateLayers>,
    blocked: Option<ByPtr<StateLayers>>,
    size: ByPtr<Style>,
    explicit: Option<ExplicitStyle>,
    state: InteractionState,
}

#[derive(PartialEq)]
struct LabelKey {
    interaction: ByPtr<StateLayers>,
    blocked: Option<ByPtr<StateLayers>>,
    text_style: Option<ByPtr<Style>>,
}

/// Per-instance button style resolver
///
/// Each sub-style has its own memo cell: the variant layers depend only on
/// variant and theme, the size layer only on size. Resolved styles are the
/// same `Arc` across renders while nothing they depend on has changed.
#[derive(Debug)]
pub struct ButtonStyler {
    pressed: Memo<LayerKey, StateLayers>,
    not_pressed: Memo<LayerKey, StateLayers>,
    disabled: Memo<LayerKey, StateLayers>,
    size: Memo<ButtonSize, Style>,
    container: Memo<ContainerKey, Style>,
    label_layer: Memo<LabelKey, Style>,
    label: TextStyler,
}

impl Default for ButtonStyler {
    fn default() -> Self {
        Self::new()
    }
}

impl ButtonStyler {
    pub fn new() -> Self {
        Self {
            pressed: Memo::new("button.pressed"),
            not_pressed: Memo::new("button.not_pressed"),
            disabled: Memo::new("button.disabled"),
            size: Memo::new("button.size"),
            container: Memo::new("button.container"),
            label_layer: Memo::new("button.label_layer"),
            label: TextStyler::new(),
        }
    }

    /// Resolve container and label styles for one render pass
    pub fn compute(
        &mut self,
        props: &ButtonProps,
        state: InteractionState,
        theme: &Arc<TokenStore>,
    ) -> Result<ButtonStyles, StyleError> {
        let table = props.variant.style();
        let key: LayerKey = (props.variant, ByPtr::new(theme));

        let pressed = self
            .pressed
            .get_or_try_init(key.clone(), |(variant, tokens)| {
                StateLayers::resolve(*variant, "pressed", &table.pressed, tokens)
            })?;
        let not_pressed = self
            .not_pressed
            .get_or_try_init(key.clone(), |(variant, tokens)| {
                StateLayers::resolve(*variant, "not pressed", &table.not_pressed, tokens)
            })?;
        let disabled = self.disabled.get_or_try_init(key, |(variant, tokens)| {
            StateLayers::resolve(*variant, "disabled", &table.disabled, tokens)
        })?;
        let size = self.size.get_or_init(props.size, |size| {
            Style::new()
                .padding_x(size.padding_x())
                .min_width(size.min_width())
        });

        let interaction = if state.pressed { pressed } else { not_pressed };
        let blocked = props.is_blocked().then(|| ByPtr(disabled));

        let container = self.container.get_or_init(
            ContainerKey {
                interaction: ByPtr(Arc::clone(&interaction)),
                blocked: blocked.clone(),
                size: ByPtr(size),
                explicit: props.style.clone(),
                state,
            },
            |key| {
                let explicit = key.explicit.as_ref().map(|explicit| explicit.resolve(key.state));
                flatten([
                    Some(base_container_style()),
                    Some(&key.interaction.container),
                    Some(&*key.size),
                    key.blocked.as_ref().map(|layers| &layers.container),
                    explicit.as_ref(),
                ])
            },
        );

        let label_layer = self.label_layer.get_or_init(
            LabelKey {
                interaction: ByPtr(interaction),
                blocked,
                text_style: props.text_style.as_ref().map(ByPtr::new),
            },
            |key| {
                flatten([
                    Some(base_label_style()),
                    Some(&key.interaction.label),
                    key.blocked.as_ref().map(|layers| &layers.label),
                    key.text_style.as_deref(),
                ])
            },
        );

        let label = self.label.compute(
            &TextProps::body_bold()
                .text_align(TextAlign::Center)
                .style(label_layer),
            theme,
        )?;

        Ok(ButtonStyles {
            container,
            label,
            left_icon: props.left_icon.then(|| Arc::clone(left_icon_style())),
            right_icon: props.right_icon.then(|| Arc::clone(right_icon_style())),
        })
    }
}

/// One-shot button style resolution without memoization
pub fn button_style(
    props: &ButtonProps,
    state: InteractionState,
    theme: &Arc<TokenStore>,
) -> Result<ButtonStyles, StyleError> {
    ButtonStyler::new().compute(props, state, theme)
}
