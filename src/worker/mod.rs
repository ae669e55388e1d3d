//! Background worker thread for reading the inventory export.
//!
//! Parsing a full export can take a noticeable moment, so it happens here rather
//! than on the plugin's render thread. Communication uses Zellij's worker API and
//! carries trace context so both halves of a load appear in one trace.
//!
//! # Architecture
//!
//! - `messages`: Request/response protocol types with trace context propagation
//! - `handler`: Worker implementation and message processing logic

pub mod handler;
pub mod messages;

pub use handler::{StockroomWorker, CONFIGURE_MESSAGE};
pub use messages::{LoadReason, TraceContext, WorkerMessage, WorkerResponse};
