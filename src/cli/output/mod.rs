//! Terminal rendering of the day. Everything here only reads [DailyState](crate::tracker::state::DailyState).

pub mod dashboard;
pub mod insights;
pub mod listing;

use ansi_term::Style;

/// Applies `style` only when colours are enabled, so output stays clean when piped.
fn paint(style: Style, text: &str, color: bool) -> String {
    if color {
        style.paint(text).to_string()
    } else {
        text.to_owned()
    }
}

/// Horizontal bar of `filled` marked cells out of `width`.
fn bar(filled: usize, width: usize, style: Style, color: bool) -> String {
    let filled = filled.min(width);
    format!(
        "{}{}",
        paint(style, &"#".repeat(filled), color),
        "-".repeat(width - filled)
    )
}
