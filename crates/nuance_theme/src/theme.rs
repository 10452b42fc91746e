//! Color schemes and light/dark theme bundles

use std::path::Path;
use std::sync::Arc;

use serde::Deserialize;
use tracing::debug;

use crate::error::ThemeError;
use crate::tokens::TokenStore;

/// Light or dark appearance
#[derive(Clone, Copy, Debug, Default, Hash, Eq, PartialEq)]
pub enum ColorScheme {
    #[default]
    Light,
    Dark,
}

impl ColorScheme {
    pub fn toggle(self) -> Self {
        match self {
            ColorScheme::Light => ColorScheme::Dark,
            ColorScheme::Dark => ColorScheme::Light,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            ColorScheme::Light => "light",
            ColorScheme::Dark => "dark",
        }
    }
}

impl std::str::FromStr for ColorScheme {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "light" => Ok(ColorScheme::Light),
            "dark" => Ok(ColorScheme::Dark),
            other => Err(format!("unknown color scheme `{other}` (expected light or dark)")),
        }
    }
}

/// A named pair of token stores, one per color scheme
///
/// Stores are shared behind `Arc` so resolved styles can use the store's
/// address as part of their memo key.
#[derive(Clone, Debug)]
pub struct ThemeBundle {
    name: String,
    light: Arc<TokenStore>,
    dark: Arc<TokenStore>,
}

#[derive(Deserialize)]
struct ThemeFile {
    #[serde(default = "default_name")]
    name: String,
    light: TokenStore,
    dark: Option<TokenStore>,
}

fn default_name() -> String {
    "custom".to_string()
}

impl ThemeBundle {
    pub fn new(name: impl Into<String>, light: TokenStore, dark: TokenStore) -> Self {
        Self {
            name: name.into(),
            light: Arc::new(light),
            dark: Arc::new(dark),
        }
    }

    /// Parse a bundle from TOML with `[light]` and optional `[dark]` tables.
    ///
    /// A file without `[dark]` uses the light tokens for both schemes.
    pub fn from_toml_str(src: &str) -> Result<Self, ThemeError> {
        let file: ThemeFile = toml::from_str(src)?;
        let light = Arc::new(file.light);
        let dark = match file.dark {
            Some(dark) => Arc::new(dark),
            None => Arc::clone(&light),
        };
        debug!(
            "ThemeBundle::from_toml_str - loaded `{}` ({} light colors, {} dark colors)",
            file.name,
            light.colors.len(),
            dark.colors.len()
        );
        Ok(Self {
            name: file.name,
            light,
            dark,
        })
    }

    /// Load a bundle from a TOML file
    pub fn load(path: &Path) -> Result<Self, ThemeError> {
        let src = std::fs::read_to_string(path).map_err(|source| ThemeError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&src)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Token store for a scheme
    pub fn for_scheme(&self, scheme: ColorScheme) -> &Arc<TokenStore> {
        match scheme {
            ColorScheme::Light => &self.light,
            ColorScheme::Dark => &self.dark,
        }
    }

    pub fn light(&self) -> &Arc<TokenStore> {
        &self.light
    }

    pub fn dark(&self) -> &Arc<TokenStore> {
        &self.dark
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toggle_flips_scheme() {
        assert_eq!(ColorScheme::Light.toggle(), ColorScheme::Dark);
        assert_eq!(ColorScheme::Dark.toggle(), ColorScheme::Light);
    }

    #[test]
    fn bundle_without_dark_shares_light_tokens() {
        let bundle = ThemeBundle::from_toml_str(
            r##"
            name = "Brand"
            [light.colors]
            text = "#171717"
            "##,
        )
        .unwrap();

        assert_eq!(bundle.name(), "Brand");
        assert!(Arc::ptr_eq(bundle.light(), bundle.dark()));
    }

    #[test]
    fn bundle_requires_light_table() {
        assert!(matches!(
            ThemeBundle::from_toml_str("name = \"Empty\"\n"),
            Err(ThemeError::Parse(_))
        ));
    }

    #[test]
    fn scheme_from_str() {
        assert_eq!("dark".parse::<ColorScheme>(), Ok(ColorScheme::Dark));
        assert!("sepia".parse::<ColorScheme>().is_err());
    }
}
