use std::path::PathBuf;

use thiserror::Error;

use crate::tokens::TokenCategory;

/// Errors raised while loading or resolving theme tokens.
///
/// Every variant describes a developer-time misconfiguration; resolving the
/// same input again yields the same error.
#[derive(Debug, Error)]
pub enum ThemeError {
    #[error("unknown color `{0}` (not a theme color and not a hex literal)")]
    UnknownColor(String),

    #[error("color `{name}` has no shade `{shade}`")]
    UnknownShade { name: String, shade: String },

    #[error("color scale `{0}` has no default shade")]
    NoDefaultShade(String),

    #[error("unknown {category} token `{name}`")]
    UnknownToken {
        category: TokenCategory,
        name: String,
    },

    #[error("invalid color literal `{0}`")]
    InvalidColor(String),

    #[error("failed to parse theme: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("failed to read theme file {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl ThemeError {
    pub(crate) fn unknown_token(category: TokenCategory, name: &str) -> Self {
        Self::UnknownToken {
            category,
            name: name.to_string(),
        }
    }
}
