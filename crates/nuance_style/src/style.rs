//! Flat resolved style
//!
//! A [`Style`] holds concrete values only: token names are resolved before a
//! value lands here. All properties are optional so a style can act as a
//! sparse layer:
//!
//! ```ignore
//! use nuance_style::prelude::*;
//!
//! let base = Style::new().padding_x(16.0).border_radius(4.0);
//! let pressed = Style::new().background_color(Color::BLACK);
//!
//! // `pressed` wins where it sets a value, `base` fills the rest
//! let resolved = flatten([Some(&base), Some(&pressed)]);
//! ```

use std::collections::BTreeMap;

use nuance_theme::Color;
use serde::ser::{Serialize, SerializeMap, Serializer};

/// Keyword-valued style properties, spelled the way the renderer expects
macro_rules! keyword_enum {
    ($(#[$meta:meta])* $name:ident { $($variant:ident => $keyword:literal),+ $(,)? }) => {
        $(#[$meta])*
        #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
        pub enum $name {
            $($variant),+
        }

        impl $name {
            pub fn as_str(self) -> &'static str {
                match self {
                    $(Self::$variant => $keyword),+
                }
            }
        }

        impl std::str::FromStr for $name {
            type Err = String;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                match s {
                    $($keyword => Ok(Self::$variant),)+
                    other => Err(format!("unknown {} `{}`", stringify!($name), other)),
                }
            }
        }

        impl Serialize for $name {
            fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
                serializer.serialize_str(self.as_str())
            }
        }
    };
}

keyword_enum!(FlexDirection {
    Row => "row",
    RowReverse => "row-reverse",
    Column => "column",
    ColumnReverse => "column-reverse",
});

keyword_enum!(AlignItems {
    FlexStart => "flex-start",
    FlexEnd => "flex-end",
    Center => "center",
    Stretch => "stretch",
    Baseline => "baseline",
});

keyword_enum!(JustifyContent {
    FlexStart => "flex-start",
    FlexEnd => "flex-end",
    Center => "center",
    SpaceBetween => "space-between",
    SpaceAround => "space-around",
    SpaceEvenly => "space-evenly",
});

keyword_enum!(FontStyle {
    Normal => "normal",
    Italic => "italic",
});

keyword_enum!(TextAlign {
    Auto => "auto",
    Left => "left",
    Right => "right",
    Center => "center",
    Justify => "justify",
});

keyword_enum!(TextTransform {
    None => "none",
    Capitalize => "capitalize",
    Uppercase => "uppercase",
    Lowercase => "lowercase",
});

keyword_enum!(TextDecorationLine {
    None => "none",
    Underline => "underline",
    LineThrough => "line-through",
    UnderlineLineThrough => "underline line-through",
});

/// A concrete style value as handed to the renderer
#[derive(Clone, Debug, PartialEq)]
pub enum StyleValue {
    Number(f32),
    Color(Color),
    Keyword(&'static str),
    Text(String),
}

impl Serialize for StyleValue {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            StyleValue::Number(n) => serializer.serialize_f32(*n),
            StyleValue::Color(c) => serializer.collect_str(c),
            StyleValue::Keyword(k) => serializer.serialize_str(k),
            StyleValue::Text(t) => serializer.serialize_str(t),
        }
    }
}

/// Resolved style properties
///
/// When merging, only set properties override; unset properties never
/// erase a value from an earlier layer.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Style {
    // Flex layout
    pub flex: Option<f32>,
    pub flex_direction: Option<FlexDirection>,
    pub align_items: Option<AlignItems>,
    pub justify_content: Option<JustifyContent>,

    // Spacing
    pub margin_top: Option<f32>,
    pub margin_right: Option<f32>,
    pub margin_bottom: Option<f32>,
    pub margin_left: Option<f32>,
    pub padding_top: Option<f32>,
    pub padding_right: Option<f32>,
    pub padding_bottom: Option<f32>,
    pub padding_left: Option<f32>,
    pub min_width: Option<f32>,

    // Box
    pub border_radius: Option<f32>,
    pub border_width: Option<f32>,
    pub background_color: Option<Color>,
    pub border_color: Option<Color>,

    // Text
    pub color: Option<Color>,
    pub font_family: Option<String>,
    pub font_size: Option<f32>,
    pub font_weight: Option<String>,
    pub font_style: Option<FontStyle>,
    pub line_height: Option<f32>,
    pub letter_spacing: Option<f32>,
    pub text_align: Option<TextAlign>,
    pub text_transform: Option<TextTransform>,
    pub text_decoration_line: Option<TextDecorationLine>,
}

impl Style {
    /// Create a new empty style
    pub fn new() -> Self {
        Self::default()
    }

    // =========================================================================
    // Flex layout
    // =========================================================================

    pub fn flex(mut self, flex: f32) -> Self {
        self.flex = Some(flex);
        self
    }

    pub fn flex_direction(mut self, direction: FlexDirection) -> Self {
        self.flex_direction = Some(direction);
        self
    }

    pub fn align_items(mut self, align: AlignItems) -> Self {
        self.align_items = Some(align);
        self
    }

    pub fn justify_content(mut self, justify: JustifyContent) -> Self {
        self.justify_content = Some(justify);
        self
    }

    // =========================================================================
    // Spacing
    // =========================================================================

    /// Set margin on all sides
    pub fn margin(self, px: f32) -> Self {
        self.margin_x(px).margin_y(px)
    }

    /// Set left and right margin
    pub fn margin_x(mut self, px: f32) -> Self {
        self.margin_left = Some(px);
        self.margin_right = Some(px);
        self
    }

    /// Set top and bottom margin
    pub fn margin_y(mut self, px: f32) -> Self {
        self.margin_top = Some(px);
        self.margin_bottom = Some(px);
        self
    }

    pub fn margin_top(mut self, px: f32) -> Self {
        self.margin_top = Some(px);
        self
    }

    pub fn margin_right(mut self, px: f32) -> Self {
        self.margin_right = Some(px);
        self
    }

    pub fn margin_bottom(mut self, px: f32) -> Self {
        self.margin_bottom = Some(px);
        self
    }

    pub fn margin_left(mut self, px: f32) -> Self {
        self.margin_left = Some(px);
        self
    }

    /// Set padding on all sides
    pub fn padding(self, px: f32) -> Self {
        self.padding_x(px).padding_y(px)
    }

    /// Set left and right padding
    pub fn padding_x(mut self, px: f32) -> Self {
        self.padding_left = Some(px);
        self.padding_right = Some(px);
        self
    }

    /// Set top and bottom padding
    pub fn padding_y(mut self, px: f32) -> Self {
        self.padding_top = Some(px);
        self.padding_bottom = Some(px);
        self
    }

    pub fn padding_top(mut self, px: f32) -> Self {
        self.padding_top = Some(px);
        self
    }

    pub fn padding_right(mut self, px: f32) -> Self {
        self.padding_right = Some(px);
        self
    }

    pub fn padding_bottom(mut self, px: f32) -> Self {
        self.padding_bottom = Some(px);
        self
    }

    pub fn padding_left(mut self, px: f32) -> Self {
        self.padding_left = Some(px);
        self
    }

    pub fn min_width(mut self, px: f32) -> Self {
        self.min_width = Some(px);
        self
    }

    // =========================================================================
    // Box
    // =========================================================================

    pub fn border_radius(mut self, radius: f32) -> Self {
        self.border_radius = Some(radius);
        self
    }

    pub fn border_width(mut self, width: f32) -> Self {
        self.border_width = Some(width);
        self
    }

    pub fn background_color(mut self, color: Color) -> Self {
        self.background_color = Some(color);
        self
    }

    pub fn border_color(mut self, color: Color) -> Self {
        self.border_color = Some(color);
        self
    }

    // =========================================================================
    // Text
    // =========================================================================

    /// Set text color
    pub fn color(mut self, color: Color) -> Self {
        self.color = Some(color);
        self
    }

    pub fn font_family(mut self, family: impl Into<String>) -> Self {
        self.font_family = Some(family.into());
        self
    }

    pub fn font_size(mut self, px: f32) -> Self {
        self.font_size = Some(px);
        self
    }

    pub fn font_weight(mut self, weight: impl Into<String>) -> Self {
        self.font_weight = Some(weight.into());
        self
    }

    pub fn font_style(mut self, style: FontStyle) -> Self {
        self.font_style = Some(style);
        self
    }

    pub fn line_height(mut self, px: f32) -> Self {
        self.line_height = Some(px);
        self
    }

    pub fn letter_spacing(mut self, px: f32) -> Self {
        self.letter_spacing = Some(px);
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

    pub fn text_decoration_line(mut self, line: TextDecorationLine) -> Self {
        self.text_decoration_line = Some(line);
        self
    }

    // =========================================================================
    // Merging
    // =========================================================================

    /// Merge another style on top of this one
    ///
    /// Properties from `other` will override properties in `self` if they are set.
    /// Unset properties in `other` will not override.
    pub fn merge(&self, other: &Style) -> Style {
        Style {
            flex: other.flex.or(self.flex),
            flex_direction: other.flex_direction.or(self.flex_direction),
            align_items: other.align_items.or(self.align_items),
            justify_content: other.justify_content.or(self.justify_content),
            margin_top: other.margin_top.or(self.margin_top),
            margin_right: other.margin_right.or(self.margin_right),
            margin_bottom: other.margin_bottom.or(self.margin_bottom),
            margin_left: other.margin_left.or(self.margin_left),
            padding_top: other.padding_top.or(self.padding_top),
            padding_right: other.padding_right.or(self.padding_right),
            padding_bottom: other.padding_bottom.or(self.padding_bottom),
            padding_left: other.padding_left.or(self.padding_left),
            min_width: other.min_width.or(self.min_width),
            border_radius: other.border_radius.or(self.border_radius),
            border_width: other.border_width.or(self.border_width),
            background_color: other.background_color.or(self.background_color),
            border_color: other.border_color.or(self.border_color),
            color: other.color.or(self.color),
            font_family: other
                .font_family
                .clone()
                .or_else(|| self.font_family.clone()),
            font_size: other.font_size.or(self.font_size),
            font_weight: other
                .font_weight
                .clone()
                .or_else(|| self.font_weight.clone()),
            font_style: other.font_style.or(self.font_style),
            line_height: other.line_height.or(self.line_height),
            letter_spacing: other.letter_spacing.or(self.letter_spacing),
            text_align: other.text_align.or(self.text_align),
            text_transform: other.text_transform.or(self.text_transform),
            text_decoration_line: other.text_decoration_line.or(self.text_decoration_line),
        }
    }

    /// Check if any property is set
    pub fn is_empty(&self) -> bool {
        *self == Style::default()
    }

    /// Flat property-name → value mapping for the renderer's `style` slot
    pub fn to_map(&self) -> BTreeMap<&'static str, StyleValue> {
        let mut map = BTreeMap::new();

        macro_rules! put {
            ($key:literal, $field:expr, $wrap:expr) => {
                if let Some(value) = $field {
                    map.insert($key, $wrap(value));
                }
            };
        }

        put!("flex", self.flex, StyleValue::Number);
        put!("flexDirection", self.flex_direction, |v: FlexDirection| {
            StyleValue::Keyword(v.as_str())
        });
        put!("alignItems", self.align_items, |v: AlignItems| {
            StyleValue::Keyword(v.as_str())
        });
        put!("justifyContent", self.justify_content, |v: JustifyContent| {
            StyleValue::Keyword(v.as_str())
        });
        put!("marginTop", self.margin_top, StyleValue::Number);
        put!("marginRight", self.margin_right, StyleValue::Number);
        put!("marginBottom", self.margin_bottom, StyleValue::Number);
        put!("marginLeft", self.margin_left, StyleValue::Number);
        put!("paddingTop", self.padding_top, StyleValue::Number);
        put!("paddingRight", self.padding_right, StyleValue::Number);
        put!("paddingBottom", self.padding_bottom, StyleValue::Number);
        put!("paddingLeft", self.padding_left, StyleValue::Number);
        put!("minWidth", self.min_width, StyleValue::Number);
        put!("borderRadius", self.border_radius, StyleValue::Number);
        put!("borderWidth", self.border_width, StyleValue::Number);
        put!("backgroundColor", self.background_color, StyleValue::Color);
        put!("borderColor", self.border_color, StyleValue::Color);
        put!("color", self.color, StyleValue::Color);
        put!("fontFamily", self.font_family.clone(), StyleValue::Text);
        put!("fontSize", self.font_size, StyleValue::Number);
        put!("fontWeight", self.font_weight.clone(), StyleValue::Text);
        put!("fontStyle", self.font_style, |v: FontStyle| {
            StyleValue::Keyword(v.as_str())
        });
        put!("lineHeight", self.line_height, StyleValue::Number);
        put!("letterSpacing", self.letter_spacing, StyleValue::Number);
        put!("textAlign", self.text_align, |v: TextAlign| {
            StyleValue::Keyword(v.as_str())
        });
        put!("textTransform", self.text_transform, |v: TextTransform| {
            StyleValue::Keyword(v.as_str())
        });
        put!(
            "textDecorationLine",
            self.text_decoration_line,
            |v: TextDecorationLine| StyleValue::Keyword(v.as_str())
        );

        map
    }
}

impl Serialize for Style {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let entries = self.to_map();
        let mut map = serializer.serialize_map(Some(entries.len()))?;
        for (key, value) in &entries {
            map.serialize_entry(key, value)?;
        }
        map.end()
    }
}

/// Fold layers lowest-precedence first; `None` layers are skipped
pub fn flatten<'a>(layers: impl IntoIterator<Item = Option<&'a Style>>) -> Style {
    layers
        .into_iter()
        .flatten()
        .fold(Style::default(), |acc, layer| acc.merge(layer))
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn merge_overrides_only_set_properties() {
        let base = Style::new()
            .background_color(Color::BLACK)
            .border_width(1.0)
            .font_family("Inter");
        let top = Style::new().background_color(Color::WHITE);

        let merged = base.merge(&top);
        assert_eq!(merged.background_color, Some(Color::WHITE));
        assert_eq!(merged.border_width, Some(1.0));
        assert_eq!(merged.font_family.as_deref(), Some("Inter"));
    }

    #[test]
    fn unset_values_never_erase() {
        let base = Style::new().line_height(24.0);
        let top = Style {
            line_height: None,
            ..Style::new().color(Color::BLACK)
        };
        assert_eq!(base.merge(&top).line_height, Some(24.0));
    }

    #[test]
    fn flatten_skips_missing_layers_in_order() {
        let a = Style::new().padding_x(16.0).padding_y(8.0);
        let b = Style::new().padding_x(24.0);
        let resolved = flatten([Some(&a), None, Some(&b)]);

        assert_eq!(resolved, Style::new().padding_x(24.0).padding_y(8.0));
    }

    #[test]
    fn is_empty_on_new_style() {
        assert!(Style::new().is_empty());
        assert!(!Style::new().flex(1.0).is_empty());
    }

    #[test]
    fn to_map_uses_renderer_property_names() {
        let map = Style::new()
            .flex_direction(FlexDirection::Row)
            .background_color(Color::from_hex(0x3B82F6))
            .text_decoration_line(TextDecorationLine::LineThrough)
            .to_map();

        assert_eq!(map.len(), 3);
        assert_eq!(map["flexDirection"], StyleValue::Keyword("row"));
        assert_eq!(
            map["backgroundColor"],
            StyleValue::Color(Color::from_hex(0x3B82F6))
        );
        assert_eq!(map["textDecorationLine"], StyleValue::Keyword("line-through"));
    }

    #[test]
    fn serializes_as_flat_json_object() {
        let json = serde_json::to_value(
            Style::new()
                .color(Color::WHITE)
                .font_weight("700")
                .padding_top(8.0),
        )
        .unwrap();

        assert_eq!(
            json,
            serde_json::json!({
                "color": "#ffffff",
                "fontWeight": "700",
                "paddingTop": 8.0,
            })
        );
    }

    #[test]
    fn keywords_parse_from_renderer_spelling() {
        assert_eq!(
            "capitalize".parse::<TextTransform>(),
            Ok(TextTransform::Capitalize)
        );
        assert_eq!(
            "underline line-through".parse::<TextDecorationLine>(),
            Ok(TextDecorationLine::UnderlineLineThrough)
        );
        assert!("shout".parse::<TextTransform>().is_err());
    }
}
