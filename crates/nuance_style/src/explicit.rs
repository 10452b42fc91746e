//! Caller-supplied style overrides

use std::fmt;
use std::sync::Arc;

use crate::style::Style;

/// Transient interaction state owned by the host framework
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct InteractionState {
    pub pressed: bool,
}

impl InteractionState {
    pub const IDLE: InteractionState = InteractionState { pressed: false };
    pub const PRESSED: InteractionState = InteractionState { pressed: true };

    pub fn pressed(pressed: bool) -> Self {
        Self { pressed }
    }
}

/// Function form of an explicit override
pub type StyleFn = dyn Fn(InteractionState) -> Style + Send + Sync;

/// An explicit style override: a fixed style or a function of the
/// interaction state
///
/// Equality is identity: two overrides are equal only when they share the
/// same allocation. Rebuilding an override each render therefore
/// invalidates any memo keyed on it; keep the value around instead.
#[derive(Clone)]
pub enum ExplicitStyle {
    Static(Arc<Style>),
    Dynamic(Arc<StyleFn>),
}

impl ExplicitStyle {
    pub fn fixed(style: Style) -> Self {
        ExplicitStyle::Static(Arc::new(style))
    }

    pub fn dynamic(f: impl Fn(InteractionState) -> Style + Send + Sync + 'static) -> Self {
        ExplicitStyle::Dynamic(Arc::new(f))
    }

    /// Produce the flattened override for the current interaction state
    pub fn resolve(&self, state: InteractionState) -> Style {
        match self {
            ExplicitStyle::Static(style) => Style::clone(style),
            ExplicitStyle::Dynamic(f) => f(state),
        }
    }

    /// Layer `base` underneath this override, keeping the override's form
    pub fn under(&self, base: Arc<Style>) -> ExplicitStyle {
        match self {
            ExplicitStyle::Static(style) => ExplicitStyle::fixed(base.merge(style)),
            ExplicitStyle::Dynamic(f) => {
                let f = Arc::clone(f);
                ExplicitStyle::dynamic(move |state| base.merge(&f(state)))
            }
        }
    }
}

impl From<Style> for ExplicitStyle {
    fn from(style: Style) -> Self {
        ExplicitStyle::fixed(style)
    }
}

impl From<Arc<Style>> for ExplicitStyle {
    fn from(style: Arc<Style>) -> Self {
        ExplicitStyle::Static(style)
    }
}

impl PartialEq for ExplicitStyle {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (ExplicitStyle::Static(a), ExplicitStyle::Static(b)) => Arc::ptr_eq(a, b),
            (ExplicitStyle::Dynamic(a), ExplicitStyle::Dynamic(b)) => Arc::ptr_eq(a, b),
            _ => false,
        }
    }
}

impl fmt::Debug for ExplicitStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExplicitStyle::Static(style) => f.debug_tuple("Static").field(style).finish(),
            ExplicitStyle::Dynamic(_) => f.write_str("Dynamic(..)"),
        }
    }
}
