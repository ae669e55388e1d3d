//! Search bar component renderer.
//!
//! Renders the search input box with a bordered frame and query text display.

use crate::ui::helpers::{pad, position_cursor};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::SearchBarInfo;

/// Horizontal margin for the search box (spaces on left and right).
const SEARCH_BOX_MARGIN: usize = 5;

/// Renders the search input box at the specified row.
///
/// ```text
/// [margin] ┌──────────────┐ [margin]
/// [margin] │ Search: lab_ │ [margin]
/// [margin] └──────────────┘ [margin]
/// ```
///
/// While keystrokes go to the query a `_` caret follows it; once focus moves
/// to the results the frame is drawn in the border color instead of the
/// accent.
///
/// Returns the next available row position (the box uses 3 lines).
pub fn render_search_bar(row: usize, search: &SearchBarInfo, theme: &Theme, cols: usize) -> usize {
    let box_width = cols.saturating_sub(SEARCH_BOX_MARGIN * 2);
    let inner_width = box_width.saturating_sub(2);

    let frame = if search.is_typing {
        Theme::fg(&theme.colors.search_bar_border)
    } else {
        Theme::fg(&theme.colors.border)
    };

    position_cursor(row, 1);
    pad(SEARCH_BOX_MARGIN);
    print!("{frame}┌{}┐", "─".repeat(inner_width));
    print!("{}", Theme::reset());

    let caret = if search.is_typing { "_" } else { "" };
    let search_text: String = format!(" Search: {}{caret}", search.query)
        .chars()
        .take(inner_width)
        .collect();
    let padding = inner_width.saturating_sub(search_text.chars().count());

    position_cursor(row + 1, 1);
    pad(SEARCH_BOX_MARGIN);
    print!("{frame}│");
    print!("{}", Theme::fg(&theme.colors.text_normal));
    print!("{search_text}");
    pad(padding);
    print!("{frame}│");
    print!("{}", Theme::reset());

    position_cursor(row + 2, 1);
    pad(SEARCH_BOX_MARGIN);
    print!("{frame}└{}┘", "─".repeat(inner_width));
    print!("{}", Theme::reset());

    row + 3
}
