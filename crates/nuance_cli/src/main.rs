//! Nuance CLI
//!
//! ```bash
//! # Check that a theme defines every token the variant tables use
//! nuance check brand.toml
//!
//! # Print the resolved style of a pressed, large secondary button
//! nuance button --variant Secondary --size lg --pressed
//!
//! # Print a text style against a custom theme's dark scheme
//! nuance text --variant H1Bold --uppercase --theme brand.toml --scheme dark
//! ```

mod config;

use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use clap::{Args, Parser, Subcommand};
use nuance_cn::prelude::*;
use nuance_cn::validate_bundle;
use serde_json::json;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "nuance")]
#[command(version, about = "Validate Nuance themes and inspect resolved component styles")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

/// Theme selection shared by the style commands
#[derive(Args)]
struct ThemeArgs {
    /// Theme file (defaults to the built-in theme)
    #[arg(long)]
    theme: Option<PathBuf>,

    /// Color scheme: light or dark
    #[arg(long, default_value = "light")]
    scheme: String,
}

#[derive(Subcommand)]
enum Commands {
    /// Validate a theme file against every variant table
    Check {
        /// Path to the theme TOML file
        path: PathBuf,
    },

    /// Print resolved button styles as JSON
    Button {
        /// Button variant (Primary, Secondary, Outline, Ghost, Link)
        #[arg(long, default_value = "Primary")]
        variant: String,

        /// Button size (sm, md, lg)
        #[arg(long, default_value = "md")]
        size: String,

        #[arg(long)]
        pressed: bool,

        #[arg(long)]
        disabled: bool,

        #[arg(long)]
        loading: bool,

        #[command(flatten)]
        theme: ThemeArgs,
    },

    /// Print a resolved text style as JSON
    Text {
        /// Text variant (H1 through H6, Body, Caption, Subtitle, NavLabel, each with a Bold form)
        #[arg(long, default_value = "Body")]
        variant: String,

        /// Color reference, e.g. `primary` or `red.500`
        #[arg(long)]
        color: Option<String>,

        #[arg(long)]
        bold: bool,

        #[arg(long)]
        italic: bool,

        #[arg(long)]
        underline: bool,

        #[arg(long)]
        uppercase: bool,

        #[arg(long)]
        capitalize: bool,

        #[command(flatten)]
        theme: ThemeArgs,
    },
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Check { path } => cmd_check(path),
        Commands::Button {
            variant,
            size,
            pressed,
            disabled,
            loading,
            theme,
        } => {
            let props = ButtonProps::new(variant.parse()?)
                .size(size.parse()?)
                .disabled(disabled)
                .loading(loading);
            cmd_button(&props, InteractionState::pressed(pressed), &theme)
        }
        Commands::Text {
            variant,
            color,
            bold,
            italic,
            underline,
            uppercase,
            capitalize,
            theme,
        } => {
            let mut props = TextProps::for_variant(variant.parse()?)
                .when(bold, TextProps::bold)
                .when(italic, TextProps::italic)
                .when(underline, TextProps::underline)
                .when(uppercase, TextProps::uppercase)
                .when(capitalize, TextProps::capitalize);
            if let Some(color) = color {
                props = props.color(color);
            }
            cmd_text(&props, &theme)
        }
    }
}

fn cmd_check(path: PathBuf) -> Result<()> {
    let bundle = config::load_bundle(Some(&path))?;
    let errors = validate_bundle(&bundle);
    if errors.is_empty() {
        println!("{}: ok", bundle.name());
        return Ok(());
    }

    for (scheme, error) in &errors {
        eprintln!("[{}] {error}", scheme.as_str());
    }
    bail!("{} unresolved token reference(s) in {}", errors.len(), path.display());
}

fn cmd_button(props: &ButtonProps, state: InteractionState, theme: &ThemeArgs) -> Result<()> {
    let tokens = config::tokens(theme.theme.as_deref(), &theme.scheme)?;
    let styles = button_style(props, state, &tokens)
        .with_context(|| format!("Failed to resolve {} button", props.variant))?;

    let output = json!({
        "container": &*styles.container,
        "label": &*styles.label,
    });
    println!("{}", serde_json::to_string_pretty(&output)?);
    Ok(())
}

fn cmd_text(props: &TextProps, theme: &ThemeArgs) -> Result<()> {
    let tokens = config::tokens(theme.theme.as_deref(), &theme.scheme)?;
    let style = text_style(props, &tokens).context("Failed to resolve text style")?;
    println!("{}", serde_json::to_string_pretty(&*style)?);
    Ok(())
}
