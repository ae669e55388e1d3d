//! Composable UI component renderers.
//!
//! Each component draws one part of the screen at a given row and returns
//! the next free row.
//!
//! # Components
//!
//! - [`header`]: Tab strip of the five tables
//! - [`search`]: Search input box
//! - [`table`]: Column headings and the rows of the current page
//! - [`empty`]: Message shown in place of the table body
//! - [`pagination`]: Range label, navigation controls, page-size selector
//! - [`footer`]: Keybinding hints and the status line
//!
//! # Layout
//!
//! ```text
//! [blank line]
//! [Tabs]
//! [Border]
//! [Search Bar - 3 lines, search mode only]
//! [Column headings]
//! [Rows | Empty state]
//! [blank padding]
//! [Pagination bar]        rows - 3
//! [Border]                rows - 2
//! [Footer]                rows - 1
//! [Status]                rows
//! ```

mod empty;
mod footer;
mod header;
mod pagination;
mod search;
mod table;

use crate::ui::helpers::position_cursor;
use crate::ui::theme::Theme;
use crate::ui::viewmodel::UIViewModel;

use empty::render_empty_state;
use footer::{render_footer, render_status};
use header::render_header;
use pagination::render_pagination;
use search::render_search_bar;
use table::{render_table_headers, render_table_rows};

/// Rows below the table body: pagination bar, border, footer, status.
const BOTTOM_ROWS: usize = 4;

/// Renders a horizontal border line at `row` and returns the next row.
fn render_border(row: usize, color: &str, cols: usize) -> usize {
    position_cursor(row, 1);
    print!("{}", Theme::fg(color));
    print!("{}", "─".repeat(cols));
    print!("{}", Theme::reset());
    row + 1
}

/// Draws the whole screen for `vm`.
///
/// Rows between the end of the body and the pagination bar are left as
/// they are; the plugin pane is cleared before every render.
pub fn render_layout(vm: &UIViewModel, theme: &Theme, cols: usize, rows: usize) {
    let mut current_row = 2;

    current_row = render_header(current_row, &vm.header, theme, cols);
    current_row = render_border(current_row, &theme.colors.border, cols);
    if let Some(search) = &vm.search_bar {
        current_row = render_search_bar(current_row, search, theme, cols);
    }

    let bottom_start = rows.saturating_sub(BOTTOM_ROWS - 1).max(current_row);

    if let Some(empty) = &vm.empty_state {
        render_empty_state(current_row, empty, theme, cols);
    } else {
        current_row = render_table_headers(current_row, &vm.columns, theme, cols);
        let available = bottom_start.saturating_sub(current_row);
        let visible = &vm.display_rows[..vm.display_rows.len().min(available)];
        render_table_rows(current_row, visible, &vm.columns, theme, cols);
    }

    let mut bottom_row = render_pagination(bottom_start, vm.pagination.as_ref(), theme, cols);
    bottom_row = render_border(bottom_row, &theme.colors.border, cols);
    bottom_row = render_footer(bottom_row, &vm.footer, theme, cols);
    render_status(bottom_row, vm.status.as_ref(), theme, cols);
}
