//! Domain layer for the Stockroom plugin.
//!
//! Core record types and errors, independent of Zellij-specific APIs or
//! rendering concerns.
//!
//! # Organization
//!
//! - [`error`]: Error types and result aliases
//! - [`records`]: Typed records per backend table (item, request, transfer, ...)
//! - [`dataset`]: The complete export with validation and name lookups
//!
//! # Examples
//!
//! ```
//! use stockroom::domain::{Dataset, Result};
//!
//! fn parse(json: &str) -> Result<Dataset> {
//!     let dataset: Dataset = serde_json::from_str(json)
//!         .map_err(|e| stockroom::StockroomError::Storage(e.to_string()))?;
//!     dataset.validate()?;
//!     Ok(dataset)
//! }
//!
//! assert!(parse(r#"{ "version": 1 }"#).is_ok());
//! ```

pub mod dataset;
pub mod error;
pub mod records;

pub use dataset::{Dataset, NameIndex};
pub use error::{Result, StockroomError};
pub use records::{
    AuditLog, College, Condition, Department, Item, ItemRequest, Profile, RequestStatus, Role,
    Transfer,
};
