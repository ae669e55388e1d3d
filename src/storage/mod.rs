//! Storage layer reading inventory snapshots.
//!
//! The managed backend owns the data; this layer only reads the JSON export it
//! produces and hands typed, validated records to the worker.
//!
//! # Modules
//!
//! - `backend`: [`RecordSource`] trait abstraction for snapshot providers
//! - `json`: JSON export file implementation

pub mod backend;
pub mod json;

pub use backend::RecordSource;
pub use json::JsonStorage;
