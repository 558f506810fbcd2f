//! Accent color handling.
//!
//! The model hands back a `#rrggbb` string with each diagnostic. Only
//! strictly valid values are ever adopted as the theme; anything else
//! leaves the current accent untouched.

use ratatui::style::Color;

/// Terminal green, the accent before any diagnostic recolors it.
pub const DEFAULT_THEME: &str = "#33ff00";

/// Strict `#rrggbb` check: a leading `#` followed by exactly six hex
/// digits. No shorthand, no alpha, no named colors.
pub fn is_valid_hex(value: &str) -> bool {
    let Some(digits) = value.strip_prefix('#') else {
        return false;
    };
    digits.len() == 6 && digits.chars().all(|c| c.is_ascii_hexdigit())
}

/// Parses a strict `#rrggbb` string into a ratatui color.
pub fn parse_hex(value: &str) -> Option<Color> {
    if !is_valid_hex(value) {
        return None;
    }
    let r = u8::from_str_radix(&value[1..3], 16).ok()?;
    let g = u8::from_str_radix(&value[3..5], 16).ok()?;
    let b = u8::from_str_radix(&value[5..7], 16).ok()?;
    Some(Color::Rgb(r, g, b))
}

/// The accent color for the current theme string. State only holds
/// validated values, but a plain green keeps rendering total anyway.
pub fn accent_color(theme: &str) -> Color {
    parse_hex(theme).unwrap_or(Color::Green)
}
