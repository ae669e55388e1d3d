//! Record source abstraction.
//!
//! This module defines the [`RecordSource`] trait that abstracts over where the
//! inventory records come from. The worker owns one boxed source and asks it for
//! a fresh [`Dataset`] on every load request.
//!
//! # Design Philosophy
//!
//! The trait is read-only and minimal: the backend that owns the data is the
//! only writer, and the plugin only ever needs the full snapshot.

use crate::domain::error::Result;
use crate::domain::Dataset;

/// Abstraction over inventory snapshot providers.
///
/// # Implementations
///
/// - [`JsonStorage`](crate::storage::JsonStorage): Reads a JSON export file (default)
///
/// # Examples
///
/// ```no_run
/// use stockroom::storage::{JsonStorage, RecordSource};
/// use std::path::PathBuf;
///
/// let mut source = JsonStorage::new(PathBuf::from("/tmp/inventory.json"));
/// let dataset = source.load_dataset()?;
/// println!("{} items", dataset.items.len());
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
pub trait RecordSource: Send {
    /// Returns the current snapshot of every table.
    ///
    /// Every call reads the underlying store afresh; a rewrite is visible to
    /// the next call even when file timestamps did not move.
    ///
    /// # Errors
    ///
    /// Returns an error if the snapshot cannot be read, parsed, or fails
    /// [`Dataset::validate`].
    fn load_dataset(&mut self) -> Result<Dataset>;

    /// Human-readable location of the source, for logs and error messages.
    fn location(&self) -> String;
}
