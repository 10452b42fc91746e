//! Nuance Theme System
//!
//! Read-only design tokens and the resolver that turns token names into
//! concrete values for the style pipeline.
//!
//! # Overview
//!
//! - **Token store**: named colors (solid or shade scales), font sizes,
//!   line heights, letter spacings, font weights, font families and the
//!   spacing unit used by shorthand margin/padding props
//! - **Bundles**: a light/dark pair of token stores
//! - **Resolver**: pure functions from token name (or literal) to value
//! - **Theme state**: process-wide singleton, never mutated after init
//!
//! # Quick Start
//!
//! ```rust,ignore
//! use nuance_theme::{presets, resolve_color, ColorScheme, ThemeState};
//!
//! ThemeState::init(presets::default_bundle(), ColorScheme::Light);
//!
//! let tokens = ThemeState::get().tokens();
//! let red = resolve_color("red.500", &tokens)?;
//! let line_height = resolve_relative_length(1.5, Some(16.0)); // Some(24.0)
//! ```
//!
//! # Loading themes
//!
//! Bundles can be read from TOML:
//!
//! ```toml
//! name = "Brand"
//!
//! [light]
//! spacing_unit = 1.0
//!
//! [light.colors]
//! text = "#171717"
//! primary = { "500" = "#3b82f6", "700" = "#1d4ed8" }
//!
//! [light.font_sizes]
//! md = 16
//! ```

pub mod error;
pub mod presets;
pub mod resolve;
pub mod state;
pub mod theme;
pub mod tokens;

pub use error::ThemeError;
pub use resolve::{
    resolve_color, resolve_font_family, resolve_font_size, resolve_font_weight,
    resolve_letter_spacing, resolve_line_height, resolve_relative_length, DEFAULT_SHADE,
};
pub use state::{set_redraw_callback, ThemeState};
pub use theme::{ColorScheme, ThemeBundle};
pub use tokens::*;
