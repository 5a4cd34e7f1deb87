//! ANSI color helper utilities for terminal output.

use ansi_term::Colour;

pub const RESET: &str = "\x1b[0m";
pub const GREY: &str = "\x1b[90m";

/// Parse `#RRGGBB` into its components.
pub fn hex_to_rgb(hex: &str) -> Option<(u8, u8, u8)> {
    let h = hex.trim().strip_prefix('#')?;
    if h.len() != 6 || !h.is_ascii() {
        return None;
    }
    let r = u8::from_str_radix(&h[0..2], 16).ok()?;
    let g = u8::from_str_radix(&h[2..4], 16).ok()?;
    let b = u8::from_str_radix(&h[4..6], 16).ok()?;
    Some((r, g, b))
}

/// Terminal colour for a `#RRGGBB` value (white when unparseable).
pub fn colour_for_hex(hex: &str) -> Colour {
    hex_to_rgb(hex)
        .map(|(r, g, b)| Colour::RGB(r, g, b))
        .unwrap_or(Colour::White)
}

/// Paint `text` with a hex color, or return it unchanged when colors are off.
pub fn paint_hex(hex: &str, text: &str) -> String {
    if !colors_enabled() {
        return text.to_string();
    }
    colour_for_hex(hex).paint(text).to_string()
}

/// A two-cell colored block used as a legend swatch.
pub fn swatch(hex: &str) -> String {
    paint_hex(hex, "■■")
}

/// Grey out empty or placeholder values.
pub fn colorize_optional(value: &str) -> String {
    if colors_enabled() && (value.trim().is_empty() || value.trim() == "--") {
        format!("{GREY}{value}{RESET}")
    } else {
        value.to_string()
    }
}

/// `NO_COLOR` (any value) disables ANSI sequences.
pub fn colors_enabled() -> bool {
    std::env::var_os("NO_COLOR").is_none()
}
