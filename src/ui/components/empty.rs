//! Empty state component renderer.
//!
//! Shown in place of the table body while loading, after a failed first
//! load, when a table has no records, or when a search matches nothing. The
//! tabs and search box stay on screen around it.

use crate::ui::helpers::{pad, position_cursor};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::EmptyState;

/// Renders the message and subtitle centered, starting two rows below
/// `row`.
///
/// ```text
/// [blank]
/// [blank]
///            No requests yet
///    Press Tab for another table or r to reload
/// ```
pub fn render_empty_state(row: usize, empty: &EmptyState, theme: &Theme, cols: usize) -> usize {
    let message_row = row + 2;

    centered(message_row, &empty.message, &Theme::fg(&theme.colors.empty_state_fg), cols);

    let subtitle_style = format!("{}{}", Theme::dim(), Theme::fg(&theme.colors.text_dim));
    centered(message_row + 1, &empty.subtitle, &subtitle_style, cols);

    message_row + 2
}

fn centered(row: usize, text: &str, style: &str, cols: usize) {
    let text: String = text.chars().take(cols).collect();
    let len = text.chars().count();
    let padding = (cols.saturating_sub(len)) / 2;

    position_cursor(row, 1);
    print!("{style}");
    pad(padding);
    print!("{text}");
    pad(cols.saturating_sub(padding + len));
    print!("{}", Theme::reset());
}
