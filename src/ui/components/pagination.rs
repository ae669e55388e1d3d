//! Pagination bar: item range, navigation controls, page-size selector.
//!
//! ```text
//! Showing 11-20 of 27    «  ‹  Page 2 of 3  ›  »    Rows: [10] 25 50 100
//! ```
//!
//! Controls that would not move are drawn in the disabled color. Segments
//! that do not fit are dropped from the right.

use crate::pagination::Navigation;
use crate::ui::helpers::{pad, position_cursor};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::PaginationInfo;

const GAP: &str = "    ";

/// Renders the pagination bar at `row`, or a blank line when there is no
/// pager to describe.
pub fn render_pagination(row: usize, info: Option<&PaginationInfo>, theme: &Theme, cols: usize) -> usize {
    position_cursor(row, 1);

    let Some(info) = info else {
        pad(cols);
        return row + 1;
    };

    let normal = Theme::fg(&theme.colors.text_normal);
    let dim = Theme::fg(&theme.colors.text_dim);
    let disabled = Theme::fg(&theme.colors.disabled_fg);
    let current = format!("{}{}", Theme::bold(), Theme::fg(&theme.colors.header_fg));

    let control = |navigation: Navigation, glyph: &str| {
        let style = if info.controls.is_enabled(navigation) {
            normal.clone()
        } else {
            disabled.clone()
        };
        (glyph.to_string(), style)
    };

    let mut segments = vec![
        (info.range_label.clone(), dim.clone()),
        (GAP.to_string(), normal.clone()),
        control(Navigation::First, "«  "),
        control(Navigation::Previous, "‹  "),
        (info.page_label.clone(), normal.clone()),
        control(Navigation::Next, "  ›"),
        control(Navigation::Last, "  »"),
        (GAP.to_string(), normal.clone()),
        ("Rows:".to_string(), dim),
    ];
    for option in &info.size_options {
        if option.is_current {
            segments.push((format!(" [{}]", option.size), current.clone()));
        } else {
            segments.push((format!(" {}", option.size), normal.clone()));
        }
    }

    let mut used = 0;
    for (text, style) in &segments {
        let width = text.chars().count();
        if used + width > cols {
            break;
        }
        print!("{}{style}{text}", Theme::reset());
        used += width;
    }
    print!("{}", Theme::reset());
    pad(cols.saturating_sub(used));

    row + 1
}
