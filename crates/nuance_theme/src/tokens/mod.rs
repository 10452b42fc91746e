//! Design tokens for theming
//!
//! Tokens are the atomic values that make up a design system:
//! - Colors (solid values and numeric shade scales)
//! - Typography (families, sizes, weights, line heights, letter spacings)
//! - Spacing unit

mod color;
mod store;

pub use color::*;
pub use store::*;
