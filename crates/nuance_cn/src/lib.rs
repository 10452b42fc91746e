//! Nuance Components
//!
//! Variant tables and style pipelines for the base components.
//!
//! # Overview
//!
//! - **Variants**: closed enums for button and text presets, each backed by
//!   a static table of token names
//! - **Pipelines**: per-instance resolvers ([`ButtonStyler`], [`TextStyler`])
//!   that layer variant, interaction and caller styles into a flat style and
//!   reuse the previous result while inputs are unchanged
//! - **Styled wrapper**: [`Styled`] adds shorthand layout props (`m`, `px`,
//!   `bg`, ...) to any pipeline
//! - **Validation**: check a theme against every table before rendering
//! - **Capabilities**: typed bag of injected app services
//!
//! # Quick Start
//!
//! ```rust,ignore
//! use nuance_cn::prelude::*;
//! use nuance_theme::{presets, ColorScheme, ThemeState};
//!
//! ThemeState::init(presets::default_bundle(), ColorScheme::Light);
//! let theme = ThemeState::get().tokens();
//!
//! let mut primary = ButtonStyler::new();
//! let styles = primary.compute(
//!     &ButtonProps::primary().size(ButtonSize::Lg),
//!     InteractionState::PRESSED,
//!     &theme,
//! )?;
//!
//! let heading = text_style(&TextProps::h1().uppercase(), &theme)?;
//! ```
//!
//! Every pressed/not-pressed/disabled state of every variant resolves in
//! the built-in theme; custom themes can be checked with
//! [`validate::validate_bundle`].

pub mod components;
pub mod context;
pub mod error;
pub mod validate;
pub mod variants;

pub use components::{
    button, button_style, form_label_styles, text, text_style, Button, ButtonContent, ButtonProps,
    ButtonStyler, ButtonStyles, FormLabelProps, FormLabelStyles, LayoutProps, ShorthandValue,
    Styled, StyledBase, StyledProps, Text, TextProps, TextStyler,
};
pub use context::{
    AuthService, Capabilities, Credentials, Notification, NotificationCenter, PermissionStatus,
};
pub use error::{ContextError, StyleError};
pub use validate::{validate_bundle, validate_variants};
pub use variants::{
    ButtonSize, ButtonVariant, ButtonVariantStyle, FontSize, StateStyle, TextVariant,
    TextVariantStyle,
};

/// Common imports for building styled components
pub mod prelude {
    pub use crate::components::{
        button, button_style, form_label_styles, text, text_style, Button, ButtonContent,
        ButtonProps, ButtonStyler, ButtonStyles, FormLabelProps, FormLabelStyles, LayoutProps,
        Styled, StyledProps, Text, TextProps, TextStyler,
    };
    pub use crate::error::StyleError;
    pub use crate::variants::{ButtonSize, ButtonVariant, FontSize, TextVariant};
    pub use nuance_style::prelude::*;
}
