//! Color utilities for request ID visualization.

use owo_colors::{AnsiColors, DynColors, OwoColorize, Style};

/// Palette request IDs are spread over
///
/// Only the standard and bright variants that stay readable on both light
/// and dark terminal backgrounds.
const PALETTE: [AnsiColors; 12] = [
    AnsiColors::Red,
    AnsiColors::Green,
    AnsiColors::Yellow,
    AnsiColors::Blue,
    AnsiColors::Magenta,
    AnsiColors::Cyan,
    AnsiColors::BrightRed,
    AnsiColors::BrightGreen,
    AnsiColors::BrightYellow,
    AnsiColors::BrightBlue,
    AnsiColors::BrightMagenta,
    AnsiColors::BrightCyan,
];

/// Deterministically maps a request ID to a palette color
///
/// The same ID always gets the same color, so the arrival and completion
/// lines of one request can be matched by eye.
pub fn color_for_request(id: &str) -> AnsiColors {
    let hash = id
        .bytes()
        .fold(0u32, |acc, b| acc.wrapping_mul(31).wrapping_add(u32::from(b)));
    PALETTE[hash as usize % PALETTE.len()]
}

/// Formats a request ID as `[id]` in its color
pub fn tag_request(id: &str) -> String {
    let style = Style::new().color(DynColors::Ansi(color_for_request(id)));
    format!("[{id}]").style(style).to_string()
}
