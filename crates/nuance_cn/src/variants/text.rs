//! Typographic variants

use std::borrow::Cow;
use std::fmt;
use std::str::FromStr;

use crate::error::StyleError;

/// A font size: a theme token name or a literal pixel value
#[derive(Clone, Debug, PartialEq)]
pub enum FontSize {
    Token(Cow<'static, str>),
    Px(f32),
}

impl From<f32> for FontSize {
    fn from(px: f32) -> Self {
        FontSize::Px(px)
    }
}

impl From<&'static str> for FontSize {
    fn from(token: &'static str) -> Self {
        FontSize::Token(Cow::Borrowed(token))
    }
}

impl From<String> for FontSize {
    fn from(token: String) -> Self {
        FontSize::Token(Cow::Owned(token))
    }
}

/// Font attributes for a text variant
#[derive(Clone, Debug, PartialEq)]
pub struct TextVariantStyle {
    pub font_family: &'static str,
    pub font_size: FontSize,
}

macro_rules! text_variants {
    ($($variant:ident => ($family:literal, $size:literal)),+ $(,)?) => {
        /// Text visual presets
        #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
        pub enum TextVariant {
            $($variant),+
        }

        impl TextVariant {
            pub const ALL: &'static [TextVariant] = &[$(TextVariant::$variant),+];

            pub fn name(self) -> &'static str {
                match self {
                    $(TextVariant::$variant => stringify!($variant)),+
                }
            }

            pub fn style(self) -> &'static TextVariantStyle {
                match self {
                    $(TextVariant::$variant => {
                        static STYLE: TextVariantStyle = TextVariantStyle {
                            font_family: $family,
                            font_size: FontSize::Token(Cow::Borrowed($size)),
                        };
                        &STYLE
                    }),+
                }
            }
        }
    };
}

text_variants! {
    H1 => ("regular", "5xl"),
    H1Bold => ("bold", "5xl"),
    H2 => ("regular", "4xl"),
    H2Bold => ("bold", "4xl"),
    H3 => ("regular", "3xl"),
    H3Bold => ("bold", "3xl"),
    H4 => ("regular", "2xl"),
    H4Bold => ("bold", "2xl"),
    H5 => ("regular", "xl"),
    H5Bold => ("bold", "xl"),
    H6 => ("regular", "lg"),
    H6Bold => ("bold", "lg"),
    Body => ("regular", "md"),
    BodyBold => ("bold", "md"),
    Caption => ("regular", "xs"),
    CaptionBold => ("bold", "xs"),
    Subtitle => ("regular", "sm"),
    SubtitleBold => ("bold", "sm"),
    NavLabel => ("regular", "2xs"),
    NavLabelBold => ("bold", "2xs"),
}

impl fmt::Display for TextVariant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for TextVariant {
    type Err = StyleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        TextVariant::ALL
            .iter()
            .copied()
            .find(|variant| variant.name() == s)
            .ok_or_else(|| StyleError::UnknownVariant {
                kind: "text",
                name: s.to_string(),
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn twenty_variants_with_unique_names() {
        let mut names: Vec<&str> = TextVariant::ALL.iter().map(|v| v.name()).collect();
        names.sort_unstable();
        names.dedup();
        assert_eq!(names.len(), 20);
    }

    #[test]
    fn bold_variants_share_size_with_regular() {
        assert_eq!(
            TextVariant::H3.style().font_size,
            TextVariant::H3Bold.style().font_size
        );
        assert_eq!(TextVariant::H3Bold.style().font_family, "bold");
    }

    #[test]
    fn parses_variant_names() {
        assert_eq!("BodyBold".parse::<TextVariant>().unwrap(), TextVariant::BodyBold);
        assert!(matches!(
            "Display".parse::<TextVariant>(),
            Err(StyleError::UnknownVariant { kind: "text", .. })
        ));
    }
}
