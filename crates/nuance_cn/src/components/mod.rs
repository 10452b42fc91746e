//! Component style pipelines

pub mod button;
pub mod form_label;
pub mod styled;
pub mod text;

pub use button::{
    button_style, ButtonContent, ButtonProps, ButtonStyler, ButtonStyles, ICON_GAP, LOADER_SIZE,
};
pub use form_label::{form_label_styles, FormLabelProps, FormLabelStyles, REQUIRED_COLOR};
pub use styled::{
    button, text, Button, LayoutProps, ShorthandValue, Styled, StyledBase, StyledProps, Text,
};
pub use text::{text_style, TextProps, TextStyler, DEFAULT_TEXT_COLOR};
