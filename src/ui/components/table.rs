//! Table component renderer.
//!
//! Renders the column headings and the visible rows of the current page.
//! Column widths come resolved from the view model; cells arrive already
//! truncated, so this module only pads them.

use crate::ui::helpers::{self, pad, position_cursor};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::{ColumnHeader, DisplayCell, DisplayRow};

/// Renders the bold column headings and returns the next free row.
pub fn render_table_headers(row: usize, columns: &[ColumnHeader], theme: &Theme, cols: usize) -> usize {
    position_cursor(row, 1);
    print!("{}", Theme::bold());
    print!("{}", Theme::fg(&theme.colors.header_fg));

    let mut used = 0;
    for (index, column) in columns.iter().enumerate() {
        if index > 0 {
            print!(" ");
            used += 1;
        }
        let title: String = column.title.chars().take(column.width).collect();
        print!("{title}");
        pad(column.width.saturating_sub(title.chars().count()));
        used += column.width;
    }
    pad(cols.saturating_sub(used));

    print!("{}", Theme::reset());
    row + 1
}

/// Renders all rows starting at `row`, returning the row after the last one.
pub fn render_table_rows(
    row: usize,
    rows: &[DisplayRow],
    columns: &[ColumnHeader],
    theme: &Theme,
    cols: usize,
) -> usize {
    let mut current_row = row;
    for display_row in rows {
        current_row = render_table_row(current_row, display_row, columns, theme, cols);
    }
    current_row
}

/// Styling precedence: selection, then match highlights, then the cell's
/// tone, then normal text. The row is padded to full width so the selection
/// background spans the terminal.
fn render_table_row(
    row: usize,
    display_row: &DisplayRow,
    columns: &[ColumnHeader],
    theme: &Theme,
    cols: usize,
) -> usize {
    position_cursor(row, 1);

    let row_style = if display_row.is_selected {
        format!(
            "{}{}",
            Theme::fg(&theme.colors.selection_fg),
            Theme::bg(&theme.colors.selection_bg)
        )
    } else {
        Theme::fg(&theme.colors.text_normal)
    };
    print!("{row_style}");

    let mut used = 0;
    for (index, (cell, column)) in display_row.cells.iter().zip(columns).enumerate() {
        if index > 0 {
            print!(" ");
            used += 1;
        }
        render_cell(cell, &row_style, display_row.is_selected, theme);
        pad(column.width.saturating_sub(cell.text.chars().count()));
        used += column.width;
    }
    pad(cols.saturating_sub(used));

    print!("{}", Theme::reset());
    row + 1
}

fn render_cell(cell: &DisplayCell, row_style: &str, is_selected: bool, theme: &Theme) {
    let tone = if is_selected {
        None
    } else {
        theme.colors.tone(cell.tone)
    };

    let cell_style = tone.map_or_else(|| row_style.to_string(), Theme::fg);
    print!("{cell_style}");
    helpers::render_highlighted_text(&cell.text, &cell.highlight_ranges, theme, &cell_style);
    print!("{row_style}");
}
