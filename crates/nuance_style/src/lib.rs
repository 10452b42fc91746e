//! Resolved styles for Nuance components
//!
//! - [`Style`]: flat, sparse set of concrete style properties; layers merge
//!   with later defined values winning
//! - [`ExplicitStyle`]: caller override, static or a function of the
//!   current [`InteractionState`]
//! - [`Memo`]: single-slot cache that hands back the same `Arc` while its
//!   key is unchanged, so downstream identity checks keep working

pub mod explicit;
pub mod memo;
pub mod style;

pub use explicit::{ExplicitStyle, InteractionState};
pub use memo::{ByPtr, Memo};
pub use style::{
    flatten, AlignItems, FlexDirection, FontStyle, JustifyContent, Style, StyleValue, TextAlign,
    TextDecorationLine, TextTransform,
};

pub mod prelude {
    pub use crate::explicit::{ExplicitStyle, InteractionState};
    pub use crate::memo::{ByPtr, Memo};
    pub use crate::style::*;
}
