//! Theme file handling

use std::path::Path;
use std::sync::Arc;

use anyhow::{anyhow, Context, Result};
use nuance_theme::{presets, ColorScheme, ThemeBundle, TokenStore};
use tracing::debug;

/// Load a theme bundle, or the built-in one when no path is given
pub fn load_bundle(path: Option<&Path>) -> Result<ThemeBundle> {
    match path {
        Some(path) => {
            let bundle = ThemeBundle::load(path)
                .with_context(|| format!("Failed to load theme {}", path.display()))?;
            debug!(theme = bundle.name(), path = %path.display(), "loaded theme");
            Ok(bundle)
        }
        None => Ok(presets::default_bundle()),
    }
}

pub fn parse_scheme(scheme: &str) -> Result<ColorScheme> {
    scheme
        .parse::<ColorScheme>()
        .map_err(|err| anyhow!("Invalid --scheme: {err}"))
}

/// Tokens for one scheme of the selected theme
pub fn tokens(path: Option<&Path>, scheme: &str) -> Result<Arc<TokenStore>> {
    let scheme = parse_scheme(scheme)?;
    let bundle = load_bundle(path)?;
    Ok(Arc::clone(bundle.for_scheme(scheme)))
}
