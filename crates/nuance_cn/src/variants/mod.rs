//! Static variant tables
//!
//! Each component kind has a closed enum of variants; the `match` inside
//! `style()` guarantees every variant has exactly one entry. Token names in
//! the tables are checked against a theme by [`crate::validate`].

pub mod button;
pub mod text;

pub use button::{ButtonSize, ButtonVariant, ButtonVariantStyle, StateStyle};
pub use text::{FontSize, TextVariant, TextVariantStyle};
