//! Top-level rendering coordinator.
//!
//! Rendering is a two-step process:
//!
//! 1. **View Model Computation**: Transform `AppState` into `UIViewModel`
//! 2. **Component Rendering**: Delegate to the component renderers
//!
//! # Example
//!
//! ```rust
//! use stockroom::app::{AppState, TableKind};
//! use stockroom::ui::{render, Theme};
//!
//! let state = AppState::new(Theme::default(), TableKind::Items, 25);
//! render(&state, 24, 80); // Renders to stdout
//! ```

use crate::app::AppState;
use crate::ui::components;

/// Renders the plugin UI to stdout for a pane of `rows` x `cols`.
///
/// Prints ANSI-styled output with `print!`, positioning every line
/// explicitly. Does not clear the screen.
pub fn render(state: &AppState, rows: usize, cols: usize) {
    let _span = tracing::trace_span!("render", rows, cols, table = ?state.table).entered();

    let viewmodel = state.compute_viewmodel(rows, cols);
    components::render_layout(&viewmodel, &state.theme, cols, rows);
}
