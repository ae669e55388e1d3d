//! Actions representing side effects to be executed by the plugin runtime.
//!
//! The event handler returns a `Vec<Action>` after processing each event; the
//! plugin shim executes them in order. Keeping effects out of the handler is
//! what lets the handler be tested without a running Zellij.
//!
//! # Example
//!
//! ```rust
//! use stockroom::app::Action;
//! use stockroom::worker::{LoadReason, WorkerMessage};
//!
//! let actions = vec![Action::PostToWorker(WorkerMessage::load_dataset(LoadReason::Manual))];
//! assert_eq!(actions.len(), 1);
//! ```

use crate::worker::WorkerMessage;

/// Commands representing side effects to be executed by the plugin runtime.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// Hides the plugin pane.
    CloseFocus,

    /// Posts a message to the background worker thread.
    PostToWorker(WorkerMessage),
}
