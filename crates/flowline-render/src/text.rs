//! Title wrapping over estimated display widths.
//!
//! There is no DOM to measure against; widths are estimated as unicode display width times an
//! approximate glyph width from the theme. That keeps wrapping deterministic across platforms.

use unicode_width::UnicodeWidthStr;

pub fn display_width(text: &str) -> f64 {
    UnicodeWidthStr::width(text) as f64
}

/// Greedy word wrap of a node title into lines that fit `max_width` (minus inner padding).
///
/// A single word wider than the limit stays on its own line rather than being split mid-word.
/// Always returns at least one line.
pub fn wrap_title_lines(title: &str, max_width: f64, char_width: f64) -> Vec<String> {
    let budget = max_width - 20.0;
    let mut lines: Vec<String> = Vec::new();
    let mut current = String::new();

    for word in title.split_whitespace() {
        let candidate = if current.is_empty() {
            word.to_string()
        } else {
            format!("{current} {word}")
        };
        if display_width(&candidate) * char_width > budget && !current.is_empty() {
            lines.push(std::mem::take(&mut current));
            current = word.to_string();
        } else {
            current = candidate;
        }
    }
    if !current.is_empty() {
        lines.push(current);
    }

    if lines.is_empty() {
        vec![title.to_string()]
    } else {
        lines
    }
}
