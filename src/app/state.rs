//! Application state management and view model computation.
//!
//! [`AppState`] is the single owner of all transient view state: the last good
//! dataset, the table on screen, the search query, the row cursor, and the
//! [`Pager`] of the mounted table. The pager is per view; switching tables
//! mounts a fresh one with the configured initial page size.
//!
//! # State Components
//!
//! - **Dataset**: last snapshot the worker delivered, kept across failed reloads
//! - **Rows**: the current table projected into display rows
//! - **Pager**: the rows matching the search query, split into pages
//! - **Cursor**: index of the selected row within the current page
//!
//! # Example
//!
//! ```rust
//! use stockroom::app::{AppState, TableKind};
//! use stockroom::ui::Theme;
//!
//! let state = AppState::new(Theme::default(), TableKind::Items, 25);
//! let viewmodel = state.compute_viewmodel(24, 80);
//! assert!(viewmodel.empty_state.is_some());
//! ```

use super::modes::{InputMode, SearchFocus, TableKind};
use super::rows::{self, Row, Tone};
use crate::domain::Dataset;
use crate::pagination::{
    page_label, NavControls, Navigation, PageRange, Pager, PAGE_SIZE_OPTIONS,
};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::{
    ColumnHeader, DisplayCell, DisplayRow, EmptyState, FooterInfo, HeaderInfo, PageSizeOption,
    PaginationInfo, SearchBarInfo, StatusLine, TabInfo, UIViewModel,
};
use chrono::{DateTime, Utc};
use fuzzy_matcher::skim::SkimMatcherV2;
use fuzzy_matcher::FuzzyMatcher;

/// Rows taken by everything but the table body in normal mode: blank line,
/// tabs, border, column headings, pagination bar, border, footer, status.
const NORMAL_CHROME_ROWS: usize = 8;

/// The search box adds three more.
const SEARCH_CHROME_ROWS: usize = NORMAL_CHROME_ROWS + 3;

/// Central application state container.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Last dataset successfully loaded; `None` until the first load.
    pub dataset: Option<Dataset>,

    /// Message of the most recent failed load, cleared by the next success.
    pub load_error: Option<String>,

    /// Table currently on screen.
    pub table: TableKind,

    /// Current input handling mode.
    pub input_mode: InputMode,

    /// Current search query string.
    pub search_query: String,

    /// Color scheme for UI rendering.
    pub theme: Theme,

    /// Every row of the current table, before search filtering.
    rows: Vec<Row>,

    /// Rows matching the query, paged.
    pager: Pager<Row>,

    /// Zero-based index of the selected row within the current page.
    cursor: usize,

    /// Page size each freshly mounted pager starts with.
    initial_page_size: usize,
}

impl AppState {
    /// Creates an empty state showing `table`.
    #[must_use]
    pub fn new(theme: Theme, table: TableKind, initial_page_size: usize) -> Self {
        Self {
            dataset: None,
            load_error: None,
            table,
            input_mode: InputMode::Normal,
            search_query: String::new(),
            theme,
            rows: Vec::new(),
            pager: Pager::new(Vec::new(), initial_page_size),
            cursor: 0,
            initial_page_size,
        }
    }

    /// The pager of the mounted table.
    #[must_use]
    pub const fn pager(&self) -> &Pager<Row> {
        &self.pager
    }

    /// Index of the selected row within the current page.
    #[must_use]
    pub const fn cursor(&self) -> usize {
        self.cursor
    }

    /// Row under the cursor, if the page has any rows.
    #[must_use]
    pub fn selected_row(&self) -> Option<&Row> {
        self.pager.paginated_data().get(self.cursor)
    }

    /// Installs a freshly loaded dataset.
    ///
    /// Returns `false` when nothing visible changed (same data, no error to
    /// clear). The current page is kept across reloads, clamped if the table
    /// shrank below it.
    pub fn set_dataset(&mut self, dataset: Dataset, now: DateTime<Utc>) -> bool {
        let error_cleared = self.load_error.take().is_some();

        if self.dataset.as_ref() == Some(&dataset) {
            tracing::debug!("dataset unchanged");
            return error_cleared;
        }

        self.dataset = Some(dataset);
        self.rebuild_rows(now);
        self.apply_search_filter();

        let current = self.pager.current_page();
        self.pager.set_page(i64::try_from(current).unwrap_or(i64::MAX));
        self.clamp_cursor();

        true
    }

    /// Records a failed load. The last good dataset stays on screen.
    pub fn set_load_error(&mut self, message: String) -> bool {
        if self.load_error.as_ref() == Some(&message) {
            return false;
        }
        self.load_error = Some(message);
        true
    }

    /// Shows another table with a fresh pager and no search.
    ///
    /// Returns `false` if `table` is already on screen.
    pub fn switch_table(&mut self, table: TableKind, now: DateTime<Utc>) -> bool {
        if self.table == table {
            return false;
        }

        tracing::debug!(from = ?self.table, to = ?table, "switching table");
        self.table = table;
        self.input_mode = InputMode::Normal;
        self.search_query.clear();
        self.rebuild_rows(now);
        self.pager = Pager::new(self.rows.clone(), self.initial_page_size);
        self.cursor = 0;
        true
    }

    /// Appends a character to the query and returns to page 1.
    pub fn push_search_char(&mut self, c: char) {
        self.search_query.push(c);
        self.on_query_changed();
    }

    /// Removes the last query character; `false` if the query was empty.
    pub fn pop_search_char(&mut self) -> bool {
        if self.search_query.pop().is_none() {
            return false;
        }
        self.on_query_changed();
        true
    }

    /// Leaves search mode and drops the query.
    pub fn exit_search(&mut self) -> bool {
        let was_searching = matches!(self.input_mode, InputMode::Search(_));
        self.input_mode = InputMode::Normal;

        if self.search_query.is_empty() {
            return was_searching;
        }
        self.search_query.clear();
        self.on_query_changed();
        true
    }

    /// Moves the cursor one row down, continuing onto the next page.
    ///
    /// Returns `false` at the very last row.
    pub fn move_cursor_down(&mut self) -> bool {
        let page_len = self.pager.paginated_data().len();
        if self.cursor + 1 < page_len {
            self.cursor += 1;
            return true;
        }

        if self.navigate(Navigation::Next) {
            self.cursor = 0;
            return true;
        }
        false
    }

    /// Moves the cursor one row up, continuing onto the previous page.
    ///
    /// Returns `false` at the very first row.
    pub fn move_cursor_up(&mut self) -> bool {
        if self.cursor > 0 {
            self.cursor -= 1;
            return true;
        }

        if self.navigate(Navigation::Previous) {
            self.cursor = self.pager.paginated_data().len().saturating_sub(1);
            return true;
        }
        false
    }

    /// Applies a navigation control if it is enabled; the cursor goes to
    /// the top of the new page.
    pub fn navigate(&mut self, navigation: Navigation) -> bool {
        let controls = NavControls::new(self.pager.current_page(), self.pager.total_pages());
        if !controls.is_enabled(navigation) {
            return false;
        }

        self.pager.navigate(navigation);
        self.cursor = 0;
        tracing::debug!(
            navigation = ?navigation,
            page = self.pager.current_page(),
            "page changed"
        );
        true
    }

    /// Switches to `size` rows per page, returning to page 1.
    ///
    /// Choosing the size already in effect is a no-op.
    pub fn change_page_size(&mut self, size: usize) -> bool {
        if size == self.pager.page_size() {
            return false;
        }

        self.pager.set_page_size(size);
        self.cursor = 0;
        tracing::debug!(page_size = self.pager.page_size(), "page size changed");
        true
    }

    fn on_query_changed(&mut self) {
        self.apply_search_filter();
        self.pager.set_page(1);
        self.cursor = 0;
    }

    fn rebuild_rows(&mut self, now: DateTime<Utc>) {
        self.rows = self
            .dataset
            .as_ref()
            .map(|dataset| rows::build_rows(self.table, dataset, now))
            .unwrap_or_default();
    }

    /// Feeds the rows matching every query token to the pager.
    ///
    /// The current page is left alone; callers that want page 1 ask for it.
    fn apply_search_filter(&mut self) {
        let _span = tracing::debug_span!("apply_search_filter",
            total_rows = self.rows.len(),
            query_len = self.search_query.len(),
            table = ?self.table
        )
        .entered();

        let tokens = self.search_tokens();
        let filtered: Vec<Row> = if tokens.is_empty() {
            self.rows.clone()
        } else {
            let matcher = SkimMatcherV2::default();
            self.rows
                .iter()
                .filter(|row| {
                    tokens
                        .iter()
                        .all(|token| matcher.fuzzy_match(row.search_text(), token).is_some())
                })
                .cloned()
                .collect()
        };

        tracing::debug!(filtered_count = filtered.len(), "search filter applied");
        self.pager.set_items(filtered);
    }

    fn search_tokens(&self) -> Vec<String> {
        self.search_query
            .split_whitespace()
            .map(str::to_lowercase)
            .collect()
    }

    fn clamp_cursor(&mut self) {
        let page_len = self.pager.paginated_data().len();
        self.cursor = self.cursor.min(page_len.saturating_sub(1));
    }

    fn table_len(&self, table: TableKind) -> Option<usize> {
        self.dataset.as_ref().map(|dataset| match table {
            TableKind::Items => dataset.items.len(),
            TableKind::Requests => dataset.requests.len(),
            TableKind::Transfers => dataset.transfers.len(),
            TableKind::Staff => dataset.profiles.len(),
            TableKind::AuditLog => dataset.audit_logs.len(),
        })
    }

    /// Computes a renderable UI view model from current state and terminal dimensions.
    ///
    /// Large pages are windowed: only as many rows as fit between the column
    /// headings and the pagination bar are emitted, positioned so the cursor
    /// stays visible.
    #[must_use]
    pub fn compute_viewmodel(&self, rows: usize, cols: usize) -> UIViewModel {
        self.compute_viewmodel_at(rows, cols, Utc::now())
    }

    /// [`compute_viewmodel`](Self::compute_viewmodel) with relative times
    /// rendered against `now`.
    #[must_use]
    pub fn compute_viewmodel_at(
        &self,
        rows: usize,
        cols: usize,
        now: DateTime<Utc>,
    ) -> UIViewModel {
        let empty_state = self.compute_empty_state();

        let display_rows = if empty_state.is_some() {
            vec![]
        } else {
            self.compute_display_rows(rows, cols, now)
        };

        UIViewModel {
            header: self.compute_header(),
            columns: Self::resolve_columns(self.table, cols),
            display_rows,
            pagination: self.compute_pagination(),
            footer: self.compute_footer(),
            status: self.compute_status(),
            empty_state,
            search_bar: self.compute_search_bar(),
        }
    }

    fn compute_display_rows(
        &self,
        rows: usize,
        cols: usize,
        now: DateTime<Utc>,
    ) -> Vec<DisplayRow> {
        let page = self.pager.paginated_data();
        let available_rows = self.calculate_available_rows(rows).max(1);

        let mut visible_start = self.cursor.saturating_sub(available_rows / 2);
        let visible_end = (visible_start + available_rows).min(page.len());

        if visible_end - visible_start < available_rows && page.len() >= available_rows {
            visible_start = visible_end.saturating_sub(available_rows);
        }

        let tokens = self.search_tokens();
        let matcher = (!tokens.is_empty()).then(SkimMatcherV2::default);
        let columns = Self::resolve_columns(self.table, cols);

        page[visible_start..visible_end]
            .iter()
            .enumerate()
            .map(|(relative_idx, row)| DisplayRow {
                cells: row
                    .cells
                    .iter()
                    .zip(&columns)
                    .map(|(cell, column)| {
                        let text = truncate(&cell.text_at(now), column.width);
                        let highlight_ranges = matcher.as_ref().map_or_else(Vec::new, |m| {
                            highlight_ranges(&text, &tokens, m)
                        });
                        DisplayCell {
                            text,
                            tone: cell.tone,
                            highlight_ranges,
                        }
                    })
                    .collect(),
                is_selected: visible_start + relative_idx == self.cursor,
            })
            .collect()
    }

    /// Column widths for a terminal `cols` wide; the last column takes what
    /// the fixed ones and their one-space gaps leave.
    fn resolve_columns(table: TableKind, cols: usize) -> Vec<ColumnHeader> {
        let layout = rows::columns(table);
        let fixed: usize = layout.iter().map(|c| c.width).sum();
        let gaps = layout.len().saturating_sub(1);
        let remaining = cols.saturating_sub(fixed + gaps);

        layout
            .iter()
            .map(|column| ColumnHeader {
                title: column.title,
                width: if column.width == 0 { remaining } else { column.width },
            })
            .collect()
    }

    fn compute_header(&self) -> HeaderInfo {
        let tabs = TableKind::ALL
            .iter()
            .enumerate()
            .map(|(index, &table)| {
                let label = self.table_len(table).map_or_else(
                    || format!("{} {}", index + 1, table.title()),
                    |count| format!("{} {} ({count})", index + 1, table.title()),
                );
                TabInfo {
                    label,
                    is_active: table == self.table,
                }
            })
            .collect();

        HeaderInfo { tabs }
    }

    fn compute_pagination(&self) -> Option<PaginationInfo> {
        self.dataset.as_ref()?;

        let current = self.pager.current_page();
        let total_pages = self.pager.total_pages();
        let page_size = self.pager.page_size();

        Some(PaginationInfo {
            range_label: PageRange::new(current, page_size, self.pager.total_items()).label(),
            page_label: page_label(current, total_pages),
            controls: NavControls::new(current, total_pages),
            size_options: PAGE_SIZE_OPTIONS
                .iter()
                .map(|&size| PageSizeOption {
                    size,
                    is_current: size == page_size,
                })
                .collect(),
        })
    }

    fn compute_empty_state(&self) -> Option<EmptyState> {
        let noun = self.table.noun();

        if self.dataset.is_none() {
            return Some(self.load_error.as_ref().map_or_else(
                || EmptyState {
                    message: "Loading inventory...".to_string(),
                    subtitle: "Reading the export in the background".to_string(),
                },
                |error| EmptyState {
                    message: "Could not load inventory".to_string(),
                    subtitle: error.clone(),
                },
            ));
        }

        if self.rows.is_empty() {
            return Some(EmptyState {
                message: format!("No {noun} yet"),
                subtitle: "Press Tab for another table or r to reload".to_string(),
            });
        }

        if self.pager.total_items() == 0 {
            return Some(EmptyState {
                message: "No matches".to_string(),
                subtitle: format!("No {noun} match \"{}\"", self.search_query),
            });
        }

        None
    }

    fn compute_status(&self) -> Option<StatusLine> {
        self.dataset.as_ref()?;
        self.load_error.as_ref().map(|error| StatusLine {
            message: format!("Reload failed, showing last good data: {error}"),
            tone: Tone::Rejected,
        })
    }

    fn compute_footer(&self) -> FooterInfo {
        let keybindings = match self.input_mode {
            InputMode::Search(SearchFocus::Typing) => {
                "ESC: exit search  Enter: browse results  Type to filter"
            }
            InputMode::Search(SearchFocus::Navigating) => {
                "ESC: exit search  /: edit query  j/k: row  h/l: page  g/G: first/last  +/-: size"
            }
            InputMode::Normal => {
                "j/k: row  h/l: page  g/G: first/last  +/-: size  1-5/Tab: table  /: search  r: reload  q: quit"
            }
        };

        FooterInfo {
            keybindings: keybindings.to_string(),
        }
    }

    fn compute_search_bar(&self) -> Option<SearchBarInfo> {
        match self.input_mode {
            InputMode::Search(focus) => Some(SearchBarInfo {
                query: self.search_query.clone(),
                is_typing: focus == SearchFocus::Typing,
            }),
            InputMode::Normal => None,
        }
    }

    const fn calculate_available_rows(&self, total_rows: usize) -> usize {
        match self.input_mode {
            InputMode::Normal => total_rows.saturating_sub(NORMAL_CHROME_ROWS),
            InputMode::Search(_) => total_rows.saturating_sub(SEARCH_CHROME_ROWS),
        }
    }
}

/// Cuts `text` to `width` characters, marking the cut with `...`.
fn truncate(text: &str, width: usize) -> String {
    let len = text.chars().count();
    if len <= width {
        return text.to_string();
    }
    if width <= 3 {
        return text.chars().take(width).collect();
    }
    let mut cut: String = text.chars().take(width - 3).collect();
    cut.push_str("...");
    cut
}

/// Character ranges of `text` matched by any of the query tokens, merged
/// into contiguous `(start, end)` runs.
fn highlight_ranges(text: &str, tokens: &[String], matcher: &SkimMatcherV2) -> Vec<(usize, usize)> {
    let len = text.chars().count();
    let mut indices: Vec<usize> = tokens
        .iter()
        .filter_map(|token| matcher.fuzzy_indices(text, token))
        .flat_map(|(_score, indices)| indices)
        .filter(|&idx| idx < len)
        .collect();
    indices.sort_unstable();
    indices.dedup();

    let mut ranges: Vec<(usize, usize)> = Vec::new();
    for idx in indices {
        match ranges.last_mut() {
            Some((_, end)) if *end == idx => *end = idx + 1,
            _ => ranges.push((idx, idx + 1)),
        }
    }
    ranges
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::records::Condition;
    use crate::domain::Item;

    fn now() -> DateTime<Utc> {
        Utc::now()
    }

    fn items(n: usize) -> Dataset {
        Dataset {
            items: (0..n)
                .map(|i| Item {
                    id: format!("i-{i}"),
                    name: format!("Item {i:02}"),
                    category: if i % 2 == 0 { "Lab" } else { "Office" }.to_string(),
                    quantity: 1,
                    unit: None,
                    department_id: None,
                    condition: Condition::Good,
                })
                .collect(),
            ..Dataset::default()
        }
    }

    fn loaded(n: usize, page_size: usize) -> AppState {
        let mut state = AppState::new(Theme::default(), TableKind::Items, page_size);
        assert!(state.set_dataset(items(n), now()));
        state
    }

    #[test]
    fn fresh_state_shows_loading() {
        let state = AppState::new(Theme::default(), TableKind::Items, 25);
        let vm = state.compute_viewmodel(24, 100);
        assert_eq!(vm.empty_state.unwrap().message, "Loading inventory...");
        assert!(vm.pagination.is_none());
    }

    #[test]
    fn identical_reload_does_not_rerender() {
        let mut state = loaded(27, 10);
        assert!(!state.set_dataset(items(27), now()));
    }

    #[test]
    fn reload_keeps_page_and_clamps_when_shrunk() {
        let mut state = loaded(27, 10);
        state.navigate(Navigation::Last);
        assert_eq!(state.pager().current_page(), 3);

        state.set_dataset(items(28), now());
        assert_eq!(state.pager().current_page(), 3);

        state.set_dataset(items(12), now());
        assert_eq!(state.pager().current_page(), 2);
        assert_eq!(state.pager().paginated_data().len(), 2);
    }

    #[test]
    fn cursor_crosses_pages_without_wrapping() {
        let mut state = loaded(12, 10);
        for _ in 0..9 {
            assert!(state.move_cursor_down());
        }
        assert_eq!((state.pager().current_page(), state.cursor()), (1, 9));

        assert!(state.move_cursor_down());
        assert_eq!((state.pager().current_page(), state.cursor()), (2, 0));
        assert!(state.move_cursor_down());
        assert!(!state.move_cursor_down());
        assert_eq!(state.selected_row().unwrap().id, "i-11");

        state.move_cursor_up();
        assert!(state.move_cursor_up());
        assert_eq!((state.pager().current_page(), state.cursor()), (1, 9));

        while state.move_cursor_up() {}
        assert_eq!((state.pager().current_page(), state.cursor()), (1, 0));
    }

    #[test]
    fn disabled_navigation_is_a_noop() {
        let mut state = loaded(5, 10);
        assert!(!state.navigate(Navigation::Next));
        assert!(!state.navigate(Navigation::Previous));
        assert!(!state.navigate(Navigation::Last));
    }

    #[test]
    fn page_size_change_returns_to_first_page() {
        let mut state = loaded(60, 10);
        state.navigate(Navigation::Last);
        assert!(state.change_page_size(25));
        assert_eq!(state.pager().current_page(), 1);
        assert_eq!(state.pager().total_pages(), 3);
        assert!(!state.change_page_size(25));
    }

    #[test]
    fn search_filters_and_resets_to_first_page() {
        let mut state = loaded(30, 10);
        state.navigate(Navigation::Last);
        state.input_mode = InputMode::Search(SearchFocus::Typing);

        for c in "office".chars() {
            state.push_search_char(c);
        }
        assert_eq!(state.pager().current_page(), 1);
        assert_eq!(state.pager().total_items(), 15);

        state.navigate(Navigation::Next);
        assert!(state.pop_search_char());
        assert_eq!(state.pager().current_page(), 1);

        assert!(state.exit_search());
        assert_eq!(state.pager().total_items(), 30);
        assert_eq!(state.input_mode, InputMode::Normal);
    }

    #[test]
    fn all_tokens_must_match() {
        let mut state = loaded(30, 10);
        for c in "lab 07".chars() {
            state.push_search_char(c);
        }
        assert_eq!(state.pager().total_items(), 0);

        let vm = state.compute_viewmodel(24, 100);
        assert_eq!(vm.empty_state.unwrap().message, "No matches");
    }

    #[test]
    fn switching_tables_mounts_a_fresh_pager() {
        let mut state = loaded(30, 10);
        state.change_page_size(25);
        state.navigate(Navigation::Next);
        state.push_search_char('x');

        assert!(state.switch_table(TableKind::Requests, now()));
        assert_eq!(state.pager().page_size(), 10);
        assert_eq!(state.pager().current_page(), 1);
        assert!(state.search_query.is_empty());
        assert!(!state.switch_table(TableKind::Requests, now()));

        let vm = state.compute_viewmodel(24, 100);
        assert_eq!(vm.empty_state.unwrap().message, "No requests yet");
    }

    #[test]
    fn failed_reload_keeps_data_and_shows_status() {
        let mut state = loaded(3, 10);
        assert!(state.set_load_error("export not found".to_string()));
        assert!(!state.set_load_error("export not found".to_string()));

        let vm = state.compute_viewmodel(24, 100);
        assert!(vm.empty_state.is_none());
        assert_eq!(vm.display_rows.len(), 3);
        assert!(vm.status.unwrap().message.ends_with("export not found"));

        assert!(state.set_dataset(items(3), now()));
        assert!(state.load_error.is_none());
    }

    #[test]
    fn first_load_failure_is_the_empty_state() {
        let mut state = AppState::new(Theme::default(), TableKind::Items, 25);
        state.set_load_error("Storage error: export not found".to_string());
        let vm = state.compute_viewmodel(24, 100);
        let empty = vm.empty_state.unwrap();
        assert_eq!(empty.message, "Could not load inventory");
        assert_eq!(empty.subtitle, "Storage error: export not found");
        assert!(vm.status.is_none());
    }

    #[test]
    fn viewmodel_pagination_labels() {
        let mut state = loaded(27, 10);
        state.navigate(Navigation::Next);
        let pagination = state.compute_viewmodel(40, 100).pagination.unwrap();

        assert_eq!(pagination.range_label, "Showing 11-20 of 27");
        assert_eq!(pagination.page_label, "Page 2 of 3");
        assert!(pagination.controls.first && pagination.controls.next);
        let current: Vec<usize> = pagination
            .size_options
            .iter()
            .filter(|o| o.is_current)
            .map(|o| o.size)
            .collect();
        assert_eq!(current, [10]);
    }

    #[test]
    fn large_pages_are_windowed_around_the_cursor() {
        let mut state = loaded(100, 100);
        for _ in 0..50 {
            state.move_cursor_down();
        }

        let vm = state.compute_viewmodel(20, 100);
        assert_eq!(vm.display_rows.len(), 20 - NORMAL_CHROME_ROWS);
        let selected: Vec<bool> = vm.display_rows.iter().map(|r| r.is_selected).collect();
        assert_eq!(selected.iter().filter(|&&s| s).count(), 1);
        assert_eq!(vm.display_rows[6].cells[0].text, "Item 50");
    }

    #[test]
    fn relative_times_are_rendered_at_view_time() {
        use crate::domain::records::AuditLog;

        let loaded_at = now();
        let dataset = Dataset {
            audit_logs: vec![AuditLog {
                id: "a-1".into(),
                actor_id: None,
                action: "update".into(),
                entity: "item".into(),
                entity_id: None,
                details: None,
                created_at: loaded_at - chrono::Duration::minutes(5),
            }],
            ..Dataset::default()
        };
        let mut state = AppState::new(Theme::default(), TableKind::AuditLog, 10);
        assert!(state.set_dataset(dataset, loaded_at));

        let vm = state.compute_viewmodel_at(24, 100, loaded_at);
        assert_eq!(vm.display_rows[0].cells[0].text, "5m ago");

        let vm = state.compute_viewmodel_at(24, 100, loaded_at + chrono::Duration::hours(2));
        assert_eq!(vm.display_rows[0].cells[0].text, "2h ago");
    }

    #[test]
    fn tabs_show_counts_once_loaded() {
        let state = loaded(4, 10);
        let vm = state.compute_viewmodel(24, 100);
        assert_eq!(vm.header.tabs[0].label, "1 Items (4)");
        assert!(vm.header.tabs[0].is_active);
        assert_eq!(vm.header.tabs[4].label, "5 Audit log (0)");
    }

    #[test]
    fn last_column_fills_the_terminal() {
        let columns = AppState::resolve_columns(TableKind::Items, 100);
        let total: usize = columns.iter().map(|c| c.width).sum::<usize>() + columns.len() - 1;
        assert_eq!(total, 100);
    }

    #[test]
    fn truncation_counts_characters() {
        assert_eq!(truncate("Überschrank", 20), "Überschrank");
        assert_eq!(truncate("Überschrank", 6), "Übe...");
        assert_eq!(truncate("abcdef", 2), "ab");
    }

    #[test]
    fn highlight_ranges_merge_adjacent_matches() {
        let matcher = SkimMatcherV2::default();
        let ranges = highlight_ranges("Microscope", &["micro".to_string()], &matcher);
        assert_eq!(ranges, [(0, 5)]);
        assert!(highlight_ranges("Microscope", &["zzz".to_string()], &matcher).is_empty());
    }
}
