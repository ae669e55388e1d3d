//! Tab strip naming the five tables, with the one on screen highlighted.

use crate::ui::helpers::{pad, position_cursor};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::HeaderInfo;

/// Renders the tab strip at `row` and returns the next free row.
///
/// ```text
///  1 Items (42)   2 Requests (7)   3 Transfers (0)  ...
/// ```
///
/// Tabs that do not fit in `cols` are dropped from the right.
pub fn render_header(row: usize, header: &HeaderInfo, theme: &Theme, cols: usize) -> usize {
    position_cursor(row, 1);

    let mut used = 0;
    for tab in &header.tabs {
        let cell = format!(" {} ", tab.label);
        let width = cell.chars().count() + 1;
        if used + width > cols {
            break;
        }

        if tab.is_active {
            print!("{}", Theme::bold());
            print!("{}", Theme::fg(&theme.colors.active_tab_fg));
            print!("{}", Theme::bg(&theme.colors.active_tab_bg));
        } else {
            print!("{}", Theme::fg(&theme.colors.header_fg));
            if let Some(bg) = &theme.colors.header_bg {
                print!("{}", Theme::bg(bg));
            }
        }
        print!("{cell}");
        print!("{}", Theme::reset());
        print!(" ");
        used += width;
    }

    pad(cols.saturating_sub(used));
    row + 1
}
