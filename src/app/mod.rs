//! Application layer coordinating state, events, and actions.
//!
//! This module sits between the plugin runtime (main.rs) and the
//! domain/pagination/worker layers.
//!
//! # Architecture
//!
//! ```text
//! User Input → Events → Event Handler → State Mutations → Actions → Side Effects
//!                           ↑                                  ↓
//!                           └──────── Worker Responses ────────┘
//! ```
//!
//! # Modules
//!
//! - [`actions`]: Side effect commands emitted by the event handler
//! - [`handler`]: Event processing logic and state transition coordinator
//! - [`modes`]: Input modes and the table selector
//! - [`rows`]: Projection of typed records into table rows
//! - [`state`]: Central application state container and view model computation

pub mod actions;
pub mod handler;
pub mod modes;
pub mod rows;
pub mod state;

pub use actions::Action;
pub use handler::{handle_event, Event};
pub use modes::{InputMode, SearchFocus, TableKind};
pub use rows::{Row, Tone};
pub use state::AppState;
