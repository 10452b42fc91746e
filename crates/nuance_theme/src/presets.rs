//! Built-in default theme
//!
//! Scales follow the familiar 50-900 convention. `primary` and `secondary`
//! are brand aliases for the blue and violet scales.

use crate::theme::ThemeBundle;
use crate::tokens::{Color, ColorEntry, TokenStore};

const GRAY: [u32; 10] = [
    0xF9FAFB, 0xF3F4F6, 0xE5E7EB, 0xD1D5DB, 0x9CA3AF, 0x6B7280, 0x4B5563, 0x374151, 0x1F2937,
    0x111827,
];
const RED: [u32; 10] = [
    0xFEF2F2, 0xFEE2E2, 0xFECACA, 0xFCA5A5, 0xF87171, 0xEF4444, 0xDC2626, 0xB91C1C, 0x991B1B,
    0x7F1D1D,
];
const GREEN: [u32; 10] = [
    0xF0FDF4, 0xDCFCE7, 0xBBF7D0, 0x86EFAC, 0x4ADE80, 0x22C55E, 0x16A34A, 0x15803D, 0x166534,
    0x14532D,
];
const BLUE: [u32; 10] = [
    0xEFF6FF, 0xDBEAFE, 0xBFDBFE, 0x93C5FD, 0x60A5FA, 0x3B82F6, 0x2563EB, 0x1D4ED8, 0x1E40AF,
    0x1E3A8A,
];
const VIOLET: [u32; 10] = [
    0xF5F3FF, 0xEDE9FE, 0xDDD6FE, 0xC4B5FD, 0xA78BFA, 0x8B5CF6, 0x7C3AED, 0x6D28D9, 0x5B21B6,
    0x4C1D95,
];

/// Name of the built-in bundle
pub const DEFAULT_THEME_NAME: &str = "Nuance";

/// Light and dark default tokens
pub fn default_bundle() -> ThemeBundle {
    ThemeBundle::new(DEFAULT_THEME_NAME, light_tokens(), dark_tokens())
}

pub fn light_tokens() -> TokenStore {
    base_tokens()
        .with_color("text", Color::from_hex(0x171717))
        .with_color("background", Color::WHITE)
}

pub fn dark_tokens() -> TokenStore {
    base_tokens()
        .with_color("text", Color::from_hex(0xF9FAFB))
        .with_color("background", Color::from_hex(0x111827))
}

/// Tokens shared by both schemes
fn base_tokens() -> TokenStore {
    TokenStore::new()
        // Palette
        .with_color("white", Color::WHITE)
        .with_color("black", Color::BLACK)
        .with_color("transparent", Color::TRANSPARENT)
        .with_color("gray", ColorEntry::scale(GRAY))
        .with_color("red", ColorEntry::scale(RED))
        .with_color("green", ColorEntry::scale(GREEN))
        .with_color("blue", ColorEntry::scale(BLUE))
        .with_color("violet", ColorEntry::scale(VIOLET))
        .with_color("primary", ColorEntry::scale(BLUE))
        .with_color("secondary", ColorEntry::scale(VIOLET))
        // Font sizes (px)
        .with_font_size("2xs", 10.0)
        .with_font_size("xs", 12.0)
        .with_font_size("sm", 14.0)
        .with_font_size("md", 16.0)
        .with_font_size("lg", 18.0)
        .with_font_size("xl", 20.0)
        .with_font_size("2xl", 24.0)
        .with_font_size("3xl", 30.0)
        .with_font_size("4xl", 36.0)
        .with_font_size("5xl", 48.0)
        .with_font_size("6xl", 60.0)
        // Line heights (em)
        .with_line_height("none", 1.0)
        .with_line_height("shorter", 1.25)
        .with_line_height("short", 1.375)
        .with_line_height("base", 1.5)
        .with_line_height("tall", 1.625)
        .with_line_height("taller", 2.0)
        // Letter spacings (em)
        .with_letter_spacing("tighter", -0.05)
        .with_letter_spacing("tight", -0.025)
        .with_letter_spacing("normal", 0.0)
        .with_letter_spacing("wide", 0.025)
        .with_letter_spacing("wider", 0.05)
        .with_letter_spacing("widest", 0.1)
        // Font weights
        .with_font_weight("hairline", "100")
        .with_font_weight("thin", "200")
        .with_font_weight("light", "300")
        .with_font_weight("normal", "400")
        .with_font_weight("medium", "500")
        .with_font_weight("semibold", "600")
        .with_font_weight("bold", "700")
        .with_font_weight("extrabold", "800")
        .with_font_weight("black", "900")
        // Font families
        .with_font("regular", "Inter_400Regular")
        .with_font("medium", "Inter_500Medium")
        .with_font("semibold", "Inter_600SemiBold")
        .with_font("bold", "Inter_700Bold")
}
