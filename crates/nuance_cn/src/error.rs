use nuance_theme::ThemeError;
use thiserror::Error;

/// Configuration errors raised by component style pipelines
///
/// All of these are developer mistakes (a misspelled variant, a token the
/// theme does not define); they surface at the point of resolution and are
/// never silently replaced with a default style.
#[derive(Debug, Error)]
pub enum StyleError {
    #[error("unknown {kind} variant `{name}`")]
    UnknownVariant { kind: &'static str, name: String },

    #[error("unknown button size `{0}` (expected sm, md or lg)")]
    UnknownSize(String),

    #[error("unknown shorthand prop `{0}`")]
    UnknownShorthand(String),

    #[error("shorthand prop `{key}` expects {expected}")]
    InvalidShorthand { key: String, expected: &'static str },

    #[error("{variant}: {source}")]
    Variant {
        variant: String,
        #[source]
        source: ThemeError,
    },

    #[error(transparent)]
    Theme(#[from] ThemeError),
}

/// Errors from the capability bag
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ContextError {
    #[error("no `{0}` capability was provided")]
    Missing(&'static str),
}
