//! View model types representing renderable UI state.
//!
//! View models are computed by `AppState::compute_viewmodel()` and consumed by
//! the renderer. They contain no business logic, only display-ready data:
//! truncated cell text, highlight ranges, resolved column widths, and the
//! labels of the pagination bar.
//!
//! # Example
//!
//! ```rust
//! use stockroom::ui::viewmodel::{FooterInfo, HeaderInfo, UIViewModel};
//!
//! let vm = UIViewModel {
//!     header: HeaderInfo { tabs: vec![] },
//!     columns: vec![],
//!     display_rows: vec![],
//!     pagination: None,
//!     footer: FooterInfo { keybindings: "q: quit".to_string() },
//!     status: None,
//!     empty_state: None,
//!     search_bar: None,
//! };
//! assert!(vm.display_rows.is_empty());
//! ```

use crate::app::rows::Tone;
use crate::pagination::NavControls;

/// Complete UI view model for rendering.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UIViewModel {
    /// Table tabs.
    pub header: HeaderInfo,

    /// Column headings with widths resolved for the terminal.
    pub columns: Vec<ColumnHeader>,

    /// Visible rows of the current page.
    pub display_rows: Vec<DisplayRow>,

    /// Pagination bar; absent while there is nothing to page through.
    pub pagination: Option<PaginationInfo>,

    /// Footer information (keybindings, help text).
    pub footer: FooterInfo,

    /// Last load failure, shown while older data stays on screen.
    pub status: Option<StatusLine>,

    /// Replaces the table body when there are no rows to show.
    pub empty_state: Option<EmptyState>,

    /// Optional search bar information (when in search mode).
    pub search_bar: Option<SearchBarInfo>,
}

/// The row of table tabs at the top of the UI.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeaderInfo {
    pub tabs: Vec<TabInfo>,
}

/// One tab, e.g. `1 Items (42)`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TabInfo {
    pub label: String,
    pub is_active: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColumnHeader {
    pub title: &'static str,
    pub width: usize,
}

/// One table row in the visible window.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DisplayRow {
    pub cells: Vec<DisplayCell>,
    pub is_selected: bool,
}

/// A cell, already truncated to its column width.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DisplayCell {
    pub text: String,
    pub tone: Tone,

    /// Character ranges to highlight (for fuzzy search matches).
    ///
    /// Each tuple is `(start_index, end_index)` in character indices of `text`.
    pub highlight_ranges: Vec<(usize, usize)>,
}

/// Everything the pagination bar shows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PaginationInfo {
    /// `"Showing 11-20 of 27"`.
    pub range_label: String,
    /// `"Page 2 of 3"`.
    pub page_label: String,
    /// Which of first/previous/next/last would move.
    pub controls: NavControls,
    pub size_options: Vec<PageSizeOption>,
}

/// An entry of the page-size selector.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageSizeOption {
    pub size: usize,
    pub is_current: bool,
}

/// Footer display information.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FooterInfo {
    /// Keybinding help text.
    pub keybindings: String,
}

/// A one-line status message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusLine {
    pub message: String,
    pub tone: Tone,
}

/// Empty state message display information.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmptyState {
    /// Primary message (e.g., "No requests yet").
    pub message: String,

    /// Secondary explanatory text.
    pub subtitle: String,
}

/// Search bar display information.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchBarInfo {
    /// Current search query text.
    pub query: String,

    /// Whether keystrokes currently go to the query.
    pub is_typing: bool,
}
