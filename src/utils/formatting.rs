//! Formatting utilities used for CLI and export outputs.

use regex::Regex;
use std::sync::LazyLock;
use unicode_width::UnicodeWidthStr;

static ANSI_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\x1B\[[0-9;]*[mK]").expect("static ANSI regex"));

pub fn bold(s: &str) -> String {
    if crate::utils::colors::colors_enabled() {
        format!("\x1b[1m{}\x1b[0m", s)
    } else {
        s.to_string()
    }
}

pub fn strip_ansi(s: &str) -> String {
    ANSI_RE.replace_all(s, "").into_owned()
}

/// Visible width on a terminal: ANSI sequences removed, wide glyphs counted twice.
pub fn display_width(s: &str) -> usize {
    UnicodeWidthStr::width(strip_ansi(s).as_str())
}

pub fn pad_right(s: &str, width: usize) -> String {
    let pad = width.saturating_sub(display_width(s));
    format!("{s}{}", " ".repeat(pad))
}

/// Cut `s` to at most `max` visible columns, ending with "..." when cut.
pub fn truncate(s: &str, max: usize) -> String {
    if display_width(s) <= max {
        return s.to_string();
    }
    let plain = strip_ansi(s);
    let mut out = String::new();
    for ch in plain.chars() {
        if UnicodeWidthStr::width(out.as_str()) + 4 > max {
            break;
        }
        out.push(ch);
    }
    out.push_str("...");
    out
}

/// Horizontal bar of `width` cells filled proportionally to `percent`.
pub fn progress_bar(percent: u8, width: usize) -> (String, String) {
    let pct = percent.min(100) as usize;
    let filled = (pct * width + 50) / 100;
    ("█".repeat(filled), "░".repeat(width - filled))
}

/// Entry title as shown on the calendar.
pub fn entry_title(owner: &str, description: &str) -> String {
    format!("[{owner}] {description}")
}
