//! Event handling and state transition logic.
//!
//! The handler follows a unidirectional data flow pattern:
//! 1. Events arrive from the plugin runtime or worker thread
//! 2. [`handle_event`] pattern-matches the event type
//! 3. State mutations occur via `AppState` methods
//! 4. Actions are collected and returned for execution
//!
//! # Event Types
//!
//! - **Rows**: `CursorDown`, `CursorUp`
//! - **Pages**: `Navigate`, `GrowPageSize`, `ShrinkPageSize`
//! - **Tables**: `ShowTable`, `NextTable`
//! - **Search**: `SearchMode`, `FocusSearchBar`, `FocusResults`, `ExitSearch`, `Char`, `Backspace`
//! - **Loading**: `PermissionsGranted`, `Reload`, `ExportChanged`, `WorkerResponse`
//!
//! # Example
//!
//! ```rust
//! use stockroom::app::{handle_event, AppState, Event, TableKind};
//! use stockroom::ui::Theme;
//!
//! let mut state = AppState::new(Theme::default(), TableKind::Items, 25);
//! let (should_render, actions) = handle_event(&mut state, &Event::Reload)?;
//! assert!(!should_render);
//! assert_eq!(actions.len(), 1);
//! # Ok::<(), stockroom::StockroomError>(())
//! ```

use super::modes::{InputMode, SearchFocus, TableKind};
use crate::app::{Action, AppState};
use crate::domain::error::Result;
use crate::pagination::{larger_page_size, smaller_page_size, Navigation};
use crate::worker::{LoadReason, WorkerMessage, WorkerResponse};

/// Events triggered by user input, system changes, or worker responses.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    /// Moves the row cursor down, onto the next page past the last row.
    CursorDown,
    /// Moves the row cursor up, onto the previous page before the first row.
    CursorUp,
    /// First / previous / next / last page.
    Navigate(Navigation),
    /// Next larger page-size option.
    GrowPageSize,
    /// Next smaller page-size option.
    ShrinkPageSize,

    /// Shows a specific table.
    ShowTable(TableKind),
    /// Shows the table after the current one.
    NextTable,

    /// Enters search mode with typing focus.
    SearchMode,
    /// Focuses the search input field (from navigating mode).
    FocusSearchBar,
    /// Focuses the search results (from typing mode).
    FocusResults,
    /// Exits search mode and clears the query.
    ExitSearch,
    /// Appends a character to the search query.
    Char(char),
    /// Removes the last character from the search query.
    Backspace,

    /// Closes the plugin pane.
    CloseFocus,

    /// Zellij granted the requested permissions; the first load can start.
    PermissionsGranted,
    /// User asked to re-read the export.
    Reload,
    /// A filesystem event was observed.
    ExportChanged,

    /// Wraps a response from the background worker thread.
    WorkerResponse(WorkerResponse),
}

fn load(reason: LoadReason) -> Action {
    Action::PostToWorker(WorkerMessage::load_dataset(reason))
}

/// Processes an event, mutates application state, and returns whether to
/// re-render plus the actions to execute.
///
/// # Errors
///
/// Returns errors from state mutation methods. None of the current events
/// fail; the signature leaves room for ones that do.
#[allow(clippy::too_many_lines)]
pub fn handle_event(state: &mut AppState, event: &Event) -> Result<(bool, Vec<Action>)> {
    let _span = tracing::debug_span!("handle_event", event_type = ?event).entered();

    let now = chrono::Utc::now();

    match event {
        Event::CursorDown => Ok((state.move_cursor_down(), vec![])),
        Event::CursorUp => Ok((state.move_cursor_up(), vec![])),
        Event::Navigate(navigation) => Ok((state.navigate(*navigation), vec![])),
        Event::GrowPageSize => {
            let size = larger_page_size(state.pager().page_size());
            Ok((state.change_page_size(size), vec![]))
        }
        Event::ShrinkPageSize => {
            let size = smaller_page_size(state.pager().page_size());
            Ok((state.change_page_size(size), vec![]))
        }
        Event::ShowTable(table) => Ok((state.switch_table(*table, now), vec![])),
        Event::NextTable => {
            let next = state.table.next();
            Ok((state.switch_table(next, now), vec![]))
        }
        Event::SearchMode => {
            tracing::debug!("entering search mode");
            state.exit_search();
            state.input_mode = InputMode::Search(SearchFocus::Typing);
            Ok((true, vec![]))
        }
        Event::FocusSearchBar => {
            if !matches!(state.input_mode, InputMode::Search(_)) {
                return Ok((false, vec![]));
            }
            state.input_mode = InputMode::Search(SearchFocus::Typing);
            Ok((true, vec![]))
        }
        Event::FocusResults => {
            if state.input_mode != InputMode::Search(SearchFocus::Typing) {
                return Ok((false, vec![]));
            }

            if state.search_query.is_empty() {
                state.input_mode = InputMode::Normal;
                return Ok((true, vec![]));
            }

            state.input_mode = InputMode::Search(SearchFocus::Navigating);
            Ok((true, vec![]))
        }
        Event::ExitSearch => {
            tracing::debug!(query = %state.search_query, "exiting search mode");
            Ok((state.exit_search(), vec![]))
        }
        Event::Char(c) => {
            if state.input_mode != InputMode::Search(SearchFocus::Typing) {
                return Ok((false, vec![]));
            }

            state.push_search_char(*c);
            tracing::trace!(query = %state.search_query, char = %c, "search query updated");
            Ok((true, vec![]))
        }
        Event::Backspace => {
            if state.input_mode != InputMode::Search(SearchFocus::Typing) {
                return Ok((false, vec![]));
            }
            Ok((state.pop_search_char(), vec![]))
        }
        Event::CloseFocus => Ok((false, vec![Action::CloseFocus])),
        Event::PermissionsGranted => Ok((false, vec![load(LoadReason::Startup)])),
        Event::Reload => {
            tracing::debug!("manual reload requested");
            Ok((false, vec![load(LoadReason::Manual)]))
        }
        Event::ExportChanged => Ok((false, vec![load(LoadReason::FileChanged)])),
        Event::WorkerResponse(response) => match response {
            WorkerResponse::DatasetLoaded { dataset } => {
                let changed = state.set_dataset(dataset.clone(), now);
                if !changed {
                    tracing::debug!("dataset unchanged after reload, skipping render");
                }
                Ok((changed, vec![]))
            }
            WorkerResponse::Error { message } => {
                tracing::error!("Worker error: {}", message);
                Ok((state.set_load_error(message.clone()), vec![]))
            }
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::records::Condition;
    use crate::domain::{Dataset, Item};
    use crate::ui::Theme;

    fn dataset(n: usize) -> Dataset {
        Dataset {
            items: (0..n)
                .map(|i| Item {
                    id: format!("i-{i}"),
                    name: format!("Projector {i}"),
                    category: "AV".to_string(),
                    quantity: 1,
                    unit: None,
                    department_id: None,
                    condition: Condition::Fair,
                })
                .collect(),
            ..Dataset::default()
        }
    }

    fn loaded(n: usize) -> AppState {
        let mut state = AppState::new(Theme::default(), TableKind::Items, 10);
        let response = WorkerResponse::DatasetLoaded { dataset: dataset(n) };
        handle_event(&mut state, &Event::WorkerResponse(response)).unwrap();
        state
    }

    fn send(state: &mut AppState, event: Event) -> bool {
        handle_event(state, &event).unwrap().0
    }

    #[test]
    fn loads_are_posted_with_their_reason() {
        let mut state = AppState::new(Theme::default(), TableKind::Items, 10);
        for (event, reason) in [
            (Event::PermissionsGranted, LoadReason::Startup),
            (Event::Reload, LoadReason::Manual),
            (Event::ExportChanged, LoadReason::FileChanged),
        ] {
            let (_, actions) = handle_event(&mut state, &event).unwrap();
            assert_eq!(
                actions,
                vec![Action::PostToWorker(WorkerMessage::LoadDataset {
                    reason,
                    trace_context: None,
                })]
            );
        }
    }

    #[test]
    fn identical_dataset_does_not_rerender() {
        let mut state = loaded(3);
        let response = WorkerResponse::DatasetLoaded { dataset: dataset(3) };
        assert!(!send(&mut state, Event::WorkerResponse(response)));

        let response = WorkerResponse::DatasetLoaded { dataset: dataset(4) };
        assert!(send(&mut state, Event::WorkerResponse(response)));
    }

    #[test]
    fn worker_error_is_kept_for_display() {
        let mut state = loaded(3);
        let error = WorkerResponse::Error {
            message: "load dataset: Storage error: export not found".to_string(),
        };
        assert!(send(&mut state, Event::WorkerResponse(error)));
        assert!(state.load_error.is_some());
        assert!(state.dataset.is_some());
    }

    #[test]
    fn page_size_cycles_and_saturates() {
        let mut state = loaded(250);
        assert!(send(&mut state, Event::GrowPageSize));
        assert_eq!(state.pager().page_size(), 25);
        send(&mut state, Event::GrowPageSize);
        send(&mut state, Event::GrowPageSize);
        assert_eq!(state.pager().page_size(), 100);
        assert!(!send(&mut state, Event::GrowPageSize));

        for _ in 0..5 {
            send(&mut state, Event::ShrinkPageSize);
        }
        assert_eq!(state.pager().page_size(), 10);
    }

    #[test]
    fn page_navigation_events() {
        let mut state = loaded(27);
        assert!(send(&mut state, Event::Navigate(Navigation::Last)));
        assert_eq!(state.pager().current_page(), 3);
        assert!(!send(&mut state, Event::Navigate(Navigation::Next)));
        assert!(send(&mut state, Event::Navigate(Navigation::Previous)));
        assert_eq!(state.pager().current_page(), 2);
        assert!(send(&mut state, Event::Navigate(Navigation::First)));
        assert!(!send(&mut state, Event::Navigate(Navigation::First)));
    }

    #[test]
    fn typing_only_reaches_the_query_while_typing() {
        let mut state = loaded(27);
        assert!(!send(&mut state, Event::Char('j')));

        send(&mut state, Event::SearchMode);
        send(&mut state, Event::Char('7'));
        assert_eq!(state.search_query, "7");
        assert_eq!(state.pager().total_items(), 2);

        assert!(send(&mut state, Event::FocusResults));
        assert_eq!(state.input_mode, InputMode::Search(SearchFocus::Navigating));
        assert!(!send(&mut state, Event::Char('x')));

        assert!(send(&mut state, Event::FocusSearchBar));
        assert!(send(&mut state, Event::Backspace));
        assert!(!send(&mut state, Event::Backspace));

        assert!(send(&mut state, Event::ExitSearch));
        assert_eq!(state.input_mode, InputMode::Normal);
    }

    #[test]
    fn empty_query_leaves_search_on_enter() {
        let mut state = loaded(3);
        send(&mut state, Event::SearchMode);
        assert!(send(&mut state, Event::FocusResults));
        assert_eq!(state.input_mode, InputMode::Normal);
    }

    #[test]
    fn table_events_switch_and_cycle() {
        let mut state = loaded(3);
        assert!(!send(&mut state, Event::ShowTable(TableKind::Items)));
        assert!(send(&mut state, Event::ShowTable(TableKind::AuditLog)));
        assert!(send(&mut state, Event::NextTable));
        assert_eq!(state.table, TableKind::Items);
        assert_eq!(state.pager().total_items(), 3);
    }

    #[test]
    fn close_emits_action_without_render() {
        let mut state = loaded(1);
        let (render, actions) = handle_event(&mut state, &Event::CloseFocus).unwrap();
        assert!(!render);
        assert_eq!(actions, vec![Action::CloseFocus]);
    }
}
