//! Text component - typographic style resolution
//!
//! A text style is assembled from independently memoized layers (font
//! family, size, weight, color, alignment, transform, decoration, letter
//! spacing, line height). Each layer recomputes only when its own inputs
//! change; the final style is a fresh `Arc` only when some layer or the
//! explicit style changed.

use std::sync::{Arc, OnceLock};

use nuance_style::prelude::*;
use nuance_theme::{
    resolve_color, resolve_font_family, resolve_font_size, resolve_font_weight,
    resolve_letter_spacing, resolve_line_height, TokenStore,
};

use crate::error::StyleError;
use crate::variants::{FontSize, TextVariant};

/// Color token used when no color prop is given
pub const DEFAULT_TEXT_COLOR: &str = "text";

/// Props accepted by the text pipeline
///
/// Token-valued props (`font_family`, `font_weight`, `line_height`,
/// `letter_spacing`, `color`) name entries in the active theme.
#[derive(Clone, Debug, Default)]
pub struct TextProps {
    pub variant: Option<TextVariant>,
    pub font_size: Option<FontSize>,
    pub font_family: Option<String>,
    pub font_weight: Option<String>,
    pub letter_spacing: Option<String>,
    pub line_height: Option<String>,
    pub color: Option<String>,
    pub text_align: Option<TextAlign>,
    pub text_transform: Option<TextTransform>,
    pub text_decoration: Option<TextDecorationLine>,
    pub bold: bool,
    pub italic: bool,
    pub underline: bool,
    pub strike_through: bool,
    pub capitalize: bool,
    pub uppercase: bool,
    pub lowercase: bool,
    /// Line clamp, forwarded to the renderer untouched
    pub no_of_lines: Option<u32>,
    pub style: Option<ExplicitStyle>,
}

macro_rules! variant_constructors {
    ($($fn_name:ident => $variant:ident),+ $(,)?) => {
        impl TextProps {
            $(
                pub fn $fn_name() -> Self {
                    Self::for_variant(TextVariant::$variant)
                }
            )+
        }
    };
}

variant_constructors! {
    h1 => H1,
    h1_bold => H1Bold,
    h2 => H2,
    h2_bold => H2Bold,
    h3 => H3,
    h3_bold => H3Bold,
    h4 => H4,
    h4_bold => H4Bold,
    h5 => H5,
    h5_bold => H5Bold,
    h6 => H6,
    h6_bold => H6Bold,
    body => Body,
    body_bold => BodyBold,
    caption => Caption,
    caption_bold => CaptionBold,
    subtitle => Subtitle,
    subtitle_bold => SubtitleBold,
    nav_label => NavLabel,
    nav_label_bold => NavLabelBold,
}

impl TextProps {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn for_variant(variant: TextVariant) -> Self {
        Self {
            variant: Some(variant),
            ..Self::default()
        }
    }

    pub fn font_size(mut self, size: impl Into<FontSize>) -> Self {
        self.font_size = Some(size.into());
        self
    }

    pub fn font_family(mut self, token: impl Into<String>) -> Self {
        self.font_family = Some(token.into());
        self
    }

    pub fn font_weight(mut self, token: impl Into<String>) -> Self {
        self.font_weight = Some(token.into());
        self
    }

    pub fn letter_spacing(mut self, token: impl Into<String>) -> Self {
        self.letter_spacing = Some(token.into());
        self
    }

    pub fn line_height(mut self, token: impl Into<String>) -> Self {
        self.line_height = Some(token.into());
        self
    }

    pub fn color(mut self, color: impl Into<String>) -> Self {
        self.color = Some(color.into());
        self
    }

    pub fn text_align(mut self, align: TextAlign) -> Self {
        self.text_align = Some(align);
        self
    }

    pub fn text_transform(mut self, transform: TextTransform) -> Self {
        self.text_transform = Some(transform);
        self
    }

    pub fn text_decoration(mut self, decoration: TextDecorationLine) -> Self {
        self.text_decoration = Some(decoration);
        self
    }

    pub fn bold(mut self) -> Self {
        self.bold = true;
        self
    }

    pub fn italic(mut self) -> Self {
        self.italic = true;
        self
    }

    pub fn underline(mut self) -> Self {
        self.underline = true;
        self
    }

    pub fn strike_through(mut self) -> Self {
        self.strike_through = true;
        self
    }

    pub fn capitalize(mut self) -> Self {
        self.capitalize = true;
        self
    }

    pub fn uppercase(mut self) -> Self {
        self.uppercase = true;
        self
    }

    pub fn lowercase(mut self) -> Self {
        self.lowercase = true;
        self
    }

    pub fn no_of_lines(mut self, lines: u32) -> Self {
        self.no_of_lines = Some(lines);
        self
    }

    pub fn style(mut self, style: impl Into<ExplicitStyle>) -> Self {
        self.style = Some(style.into());
        self
    }

    pub fn when(self, condition: bool, transform: impl FnOnce(Self) -> Self) -> Self {
        if condition {
            transform(self)
        } else {
            self
        }
    }
}

/// Boolean shorthands win over the enum; capitalize, then lowercase, then
/// uppercase.
fn text_transform(
    capitalize: bool,
    lowercase: bool,
    uppercase: bool,
    explicit: Option<TextTransform>,
) -> TextTransform {
    if capitalize {
        TextTransform::Capitalize
    } else if lowercase {
        TextTransform::Lowercase
    } else if uppercase {
        TextTransform::Uppercase
    } else {
        explicit.unwrap_or(TextTransform::None)
    }
}

/// Boolean shorthands win over the enum; underline before strike-through.
fn text_decoration(
    underline: bool,
    strike_through: bool,
    explicit: Option<TextDecorationLine>,
) -> Option<TextDecorationLine> {
    if underline {
        Some(TextDecorationLine::Underline)
    } else if strike_through {
        Some(TextDecorationLine::LineThrough)
    } else {
        explicit
    }
}

fn bold_style() -> &'static Style {
    static BOLD: OnceLock<Style> = OnceLock::new();
    BOLD.get_or_init(|| Style::new().font_weight("bold"))
}

fn italic_style() -> &'static Style {
    static ITALIC: OnceLock<Style> = OnceLock::new();
    ITALIC.get_or_init(|| Style::new().font_style(FontStyle::Italic))
}

type Theme = ByPtr<TokenStore>;
type Layer = ByPtr<Style>;

#[derive(PartialEq)]
struct ResolvedKey {
    bold: bool,
    italic: bool,
    weight: Layer,
    family: Layer,
    size: Layer,
    align: Layer,
    color: Layer,
    decoration: Layer,
    letter_spacing: Layer,
    line_height: Layer,
    transform: Layer,
    explicit: Option<ExplicitStyle>,
}

/// Per-instance text style resolver
///
/// Keep one per mounted text element so memoized layers survive between
/// renders.
#[derive(Debug)]
pub struct TextStyler {
    family: Memo<(Option<String>, Theme), Style>,
    size: Memo<(Option<FontSize>, Theme), Style>,
    weight: Memo<(Option<String>, Theme), Style>,
    color: Memo<(String, Theme), Style>,
    align: Memo<Option<TextAlign>, Style>,
    transform: Memo<(bool, bool, bool, Option<TextTransform>), Style>,
    decoration: Memo<(bool, bool, Option<TextDecorationLine>), Style>,
    letter_spacing: Memo<(Option<String>, Option<f32>, Theme), Style>,
    line_height: Memo<(Option<String>, Option<f32>, Theme), Style>,
    resolved: Memo<ResolvedKey, Style>,
}

impl Default for TextStyler {
    fn default() -> Self {
        Self::new()
    }
}

impl TextStyler {
    pub fn new() -> Self {
        Self {
            family: Memo::new("text.family"),
            size: Memo::new("text.size"),
            weight: Memo::new("text.weight"),
            color: Memo::new("text.color"),
            align: Memo::new("text.align"),
            transform: Memo::new("text.transform"),
            decoration: Memo::new("text.decoration"),
            letter_spacing: Memo::new("text.letter_spacing"),
            line_height: Memo::new("text.line_height"),
            resolved: Memo::new("text.resolved"),
        }
    }

    /// Resolve the style for one render pass
    ///
    /// Explicit props override the variant's font family and size; an
    /// explicit `style` overrides everything it sets.
    pub fn compute(
        &mut self,
        props: &TextProps,
        theme: &Arc<TokenStore>,
    ) -> Result<Arc<Style>, StyleError> {
        let variant = props.variant.map(TextVariant::style);
        let theme_key = ByPtr::new(theme);

        let family_token = props
            .font_family
            .clone()
            .or_else(|| variant.map(|v| v.font_family.to_string()));
        let family = self.family.get_or_try_init(
            (family_token, theme_key.clone()),
            |(token, tokens)| -> Result<Style, StyleError> {
                Ok(Style {
                    font_family: token
                        .as_deref()
                        .map(|token| resolve_font_family(token, tokens))
                        .transpose()?
                        .map(str::to_string),
                    ..Style::default()
                })
            },
        )?;

        let size_ref = props
            .font_size
            .clone()
            .or_else(|| variant.map(|v| v.font_size.clone()));
        let size = self.size.get_or_try_init(
            (size_ref, theme_key.clone()),
            |(size, tokens)| -> Result<Style, StyleError> {
                let font_size = match size {
                    None => None,
                    Some(FontSize::Px(px)) => Some(*px),
                    Some(FontSize::Token(token)) => Some(resolve_font_size(token, tokens)?),
                };
                Ok(Style {
                    font_size,
                    ..Style::default()
                })
            },
        )?;
        let final_font_size = size.font_size;

        let weight = self.weight.get_or_try_init(
            (props.font_weight.clone(), theme_key.clone()),
            |(token, tokens)| -> Result<Style, StyleError> {
                Ok(Style {
                    font_weight: token
                        .as_deref()
                        .map(|token| resolve_font_weight(token, tokens))
                        .transpose()?
                        .map(str::to_string),
                    ..Style::default()
                })
            },
        )?;

        let color_token = props
            .color
            .clone()
            .unwrap_or_else(|| DEFAULT_TEXT_COLOR.to_string());
        let color = self.color.get_or_try_init(
            (color_token, theme_key.clone()),
            |(token, tokens)| -> Result<Style, StyleError> {
                Ok(Style::new().color(resolve_color(token, tokens)?))
            },
        )?;

        let align = self.align.get_or_init(props.text_align, |align| Style {
            text_align: *align,
            ..Style::default()
        });

        let transform = self.transform.get_or_init(
            (
                props.capitalize,
                props.lowercase,
                props.uppercase,
                props.text_transform,
            ),
            |(capitalize, lowercase, uppercase, explicit)| {
                Style::new().text_transform(text_transform(
                    *capitalize,
                    *lowercase,
                    *uppercase,
                    *explicit,
                ))
            },
        );

        let decoration = self.decoration.get_or_init(
            (props.underline, props.strike_through, props.text_decoration),
            |(underline, strike_through, explicit)| Style {
                text_decoration_line: text_decoration(*underline, *strike_through, *explicit),
                ..Style::default()
            },
        );

        let letter_spacing = self.letter_spacing.get_or_try_init(
            (
                props.letter_spacing.clone(),
                final_font_size,
                theme_key.clone(),
            ),
            |(token, font_size, tokens)| -> Result<Style, StyleError> {
                let letter_spacing = match token {
                    Some(token) => resolve_letter_spacing(token, *font_size, tokens)?,
                    None => None,
                };
                Ok(Style {
                    letter_spacing,
                    ..Style::default()
                })
            },
        )?;

        let line_height = self.line_height.get_or_try_init(
            (props.line_height.clone(), final_font_size, theme_key),
            |(token, font_size, tokens)| -> Result<Style, StyleError> {
                let line_height = match token {
                    Some(token) => resolve_line_height(token, *font_size, tokens)?,
                    None => None,
                };
                Ok(Style {
                    line_height,
                    ..Style::default()
                })
            },
        )?;

        let key = ResolvedKey {
            bold: props.bold,
            italic: props.italic,
            weight: ByPtr(weight),
            family: ByPtr(family),
            size: ByPtr(size),
            align: ByPtr(align),
            color: ByPtr(color),
            decoration: ByPtr(decoration),
            letter_spacing: ByPtr(letter_spacing),
            line_height: ByPtr(line_height),
            transform: ByPtr(transform),
            explicit: props.style.clone(),
        };

        Ok(self.resolved.get_or_init(key, |key| {
            let explicit = key
                .explicit
                .as_ref()
                .map(|explicit| explicit.resolve(InteractionState::IDLE));
            flatten([
                Some(&*key.weight),
                key.bold.then(bold_style),
                key.italic.then(italic_style),
                Some(&*key.family),
                Some(&*key.size),
                Some(&*key.align),
                Some(&*key.color),
                Some(&*key.decoration),
                Some(&*key.letter_spacing),
                Some(&*key.line_height),
                Some(&*key.transform),
                explicit.as_ref(),
            ])
        }))
    }
}

/// One-shot text style resolution without memoization
pub fn text_style(props: &TextProps, theme: &Arc<TokenStore>) -> Result<Arc<Style>, StyleError> {
    TextStyler::new().compute(props, theme)
}
