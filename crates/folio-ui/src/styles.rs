//! Ayu color theme and styling functions for folio CLI output.
//!
//! Uses the Ayu Dark color palette for consistent terminal styling.
//! Color source: <https://github.com/ayu-theme/ayu-colors>
//!
//! Design principles:
//! - Each timeline record keeps one color from a rotating palette, so
//!   its bar and legend entry match.
//! - Categories get a fixed accent each; everything else is standard
//!   text or muted gray.

use folio_core::enums::Category;
use owo_colors::OwoColorize;

use crate::terminal::supports_color;

// ---------------------------------------------------------------------------
// Ayu Dark color palette (RGB values)
// ---------------------------------------------------------------------------

// Core semantic colors
const ACCENT: (u8, u8, u8) = (0x59, 0xc2, 0xff); // #59c2ff - bright blue
const MUTED: (u8, u8, u8) = (0x6c, 0x76, 0x80); // #6c7680 - muted gray
const WARN: (u8, u8, u8) = (0xff, 0xb4, 0x54); // #ffb454 - bright yellow
const LINK: (u8, u8, u8) = (0x39, 0xba, 0xe6); // #39bae6 - cyan

// Rotating per-record palette for timeline bars and legend entries.
const RECORD_PALETTE: [(u8, u8, u8); 8] = [
    (0x59, 0xc2, 0xff), // #59c2ff - blue
    (0xc2, 0xd9, 0x4c), // #c2d94c - green
    (0xd2, 0xa6, 0xff), // #d2a6ff - purple
    (0xff, 0x8f, 0x40), // #ff8f40 - orange
    (0xf0, 0x71, 0x78), // #f07178 - pink
    (0x95, 0xe6, 0xcb), // #95e6cb - teal
    (0x39, 0xba, 0xe6), // #39bae6 - cyan
    (0xe6, 0xb4, 0x50), // #e6b450 - gold
];

// Category accents
const CATEGORY_FULL_TIME: (u8, u8, u8) = (0x59, 0xc2, 0xff); // #59c2ff - blue
const CATEGORY_PART_TIME: (u8, u8, u8) = (0xc2, 0xd9, 0x4c); // #c2d94c - green
const CATEGORY_FREELANCE: (u8, u8, u8) = (0xd2, 0xa6, 0xff); // #d2a6ff - purple
const CATEGORY_CONTRACT: (u8, u8, u8) = (0xff, 0x8f, 0x40); // #ff8f40 - orange

// ---------------------------------------------------------------------------
// Chart glyphs
// ---------------------------------------------------------------------------

/// Filled cell of a timeline bar.
pub const BAR: &str = "\u{2588}"; // █
/// Year gutter tick (a marker row).
pub const GUTTER_TICK: &str = "\u{2524}"; // ┤
/// Year gutter line (a plain row).
pub const GUTTER_LINE: &str = "\u{2502}"; // │

// ---------------------------------------------------------------------------
// Helper: apply truecolor only when color is supported
// ---------------------------------------------------------------------------

/// Applies truecolor foreground to a string, falling back to plain text
/// when color is not supported.
fn color_str(s: &str, rgb: (u8, u8, u8)) -> String {
    if supports_color() {
        s.truecolor(rgb.0, rgb.1, rgb.2).to_string()
    } else {
        s.to_string()
    }
}

/// Applies truecolor foreground + bold to a string.
fn color_bold_str(s: &str, rgb: (u8, u8, u8)) -> String {
    if supports_color() {
        s.truecolor(rgb.0, rgb.1, rgb.2).bold().to_string()
    } else {
        s.to_string()
    }
}

// ---------------------------------------------------------------------------
// Core semantic render helpers
// ---------------------------------------------------------------------------

/// Renders a page heading: bold with accent color.
pub fn render_heading(s: &str) -> String {
    color_bold_str(s, ACCENT)
}

/// Renders text with muted (gray) styling.
pub fn render_muted(s: &str) -> String {
    color_str(s, MUTED)
}

/// Renders text with warning (yellow) styling.
pub fn render_warn(s: &str) -> String {
    color_str(s, WARN)
}

/// Renders text in bold.
pub fn render_bold(s: &str) -> String {
    if supports_color() {
        s.bold().to_string()
    } else {
        s.to_string()
    }
}

/// Renders a URL.
pub fn render_link(s: &str) -> String {
    color_str(s, LINK)
}

// ---------------------------------------------------------------------------
// Record palette
// ---------------------------------------------------------------------------

/// Color for the record at the given display index.
///
/// The palette rotates, so index 8 wears the same color as index 0.
pub fn record_color(index: usize) -> (u8, u8, u8) {
    RECORD_PALETTE[index % RECORD_PALETTE.len()]
}

/// Renders text in the record's palette color.
pub fn render_record(s: &str, index: usize) -> String {
    color_str(s, record_color(index))
}

/// Renders text in the record's palette color, bold.
pub fn render_record_bold(s: &str, index: usize) -> String {
    color_bold_str(s, record_color(index))
}

// ---------------------------------------------------------------------------
// Category rendering
// ---------------------------------------------------------------------------

/// Fixed accent for a built-in category; catch-all values get none.
pub fn category_color(category: &Category) -> Option<(u8, u8, u8)> {
    match category {
        Category::FullTime => Some(CATEGORY_FULL_TIME),
        Category::PartTime => Some(CATEGORY_PART_TIME),
        Category::Freelance => Some(CATEGORY_FREELANCE),
        Category::Contract => Some(CATEGORY_CONTRACT),
        Category::Other(_) => None,
    }
}

/// Renders a category label in its accent color.
pub fn render_category(label: &str, category: &Category) -> String {
    match category_color(category) {
        Some(rgb) => color_str(label, rgb),
        None => label.to_string(),
    }
}
