//! Footer help bar and the status line beneath it.

use crate::ui::helpers::{pad, position_cursor};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::{FooterInfo, StatusLine};

/// Renders the keybinding hints centered at `row`.
///
/// Text wider than the terminal is cut so it never wraps onto the status
/// line.
pub fn render_footer(row: usize, footer: &FooterInfo, theme: &Theme, cols: usize) -> usize {
    let help_text: String = footer.keybindings.chars().take(cols).collect();
    let text_len = help_text.chars().count();
    let padding = (cols.saturating_sub(text_len)) / 2;

    position_cursor(row, 1);
    print!("{}", Theme::fg(&theme.colors.text_dim));
    pad(padding);
    print!("{help_text}");
    pad(cols.saturating_sub(padding + text_len));
    print!("{}", Theme::reset());
    row + 1
}

/// Renders the status line at `row`, or blanks it when there is nothing to
/// report.
pub fn render_status(row: usize, status: Option<&StatusLine>, theme: &Theme, cols: usize) -> usize {
    position_cursor(row, 1);

    let Some(status) = status else {
        pad(cols);
        return row + 1;
    };

    let message: String = status.message.chars().take(cols).collect();
    let color = theme
        .colors
        .tone(status.tone)
        .unwrap_or(theme.colors.text_normal.as_str());

    print!("{}", Theme::fg(color));
    print!("{message}");
    pad(cols.saturating_sub(message.chars().count()));
    print!("{}", Theme::reset());
    row + 1
}
