//! Shared rendering utilities.
//!
//! Cursor positioning, padded cells, and fuzzy match highlighting with proper
//! ANSI escape sequence management. Highlight ranges are character indices,
//! never byte offsets, so multi-byte names render safely.

use crate::ui::theme::Theme;

/// Positions the cursor at a specific 1-indexed row and column.
pub fn position_cursor(row: usize, col: usize) {
    print!("\u{1b}[{row};{col}H");
}

/// Prints `width` spaces.
pub fn pad(width: usize) {
    print!("{}", " ".repeat(width));
}

/// Renders text with highlighted character ranges for fuzzy matches.
///
/// After each highlighted run the `base_style` escape sequence is re-applied,
/// so highlights inside a selected or toned cell return to that cell's colors
/// rather than the terminal default.
pub fn render_highlighted_text(text: &str, ranges: &[(usize, usize)], theme: &Theme, base_style: &str) {
    if ranges.is_empty() {
        print!("{text}");
        return;
    }

    let chars: Vec<char> = text.chars().collect();
    let mut current_pos = 0;

    for &(start, end) in ranges {
        let start = start.min(chars.len());
        let end = end.min(chars.len());
        if start < current_pos || start >= end {
            continue;
        }

        if start > current_pos {
            let normal_section: String = chars[current_pos..start].iter().collect();
            print!("{normal_section}");
        }

        print!("{}", Theme::fg(&theme.colors.match_highlight_fg));
        print!("{}", Theme::bg(&theme.colors.match_highlight_bg));
        let highlighted_section: String = chars[start..end].iter().collect();
        print!("{highlighted_section}");
        print!("{}", Theme::reset());
        print!("{base_style}");

        current_pos = end;
    }

    if current_pos < chars.len() {
        let remaining: String = chars[current_pos..].iter().collect();
        print!("{remaining}");
    }
}
