//! JSON export file record source.
//!
//! Reads the inventory snapshot written by the institution's backend. The file is
//! parsed in full on every change and validated before it reaches the UI.
//!
//! # Performance Characteristics
//!
//! - **Read**: O(n) parse on every request; nothing is cached between loads
//! - **Write**: never; the export is owned by the backend
//!
//! # File Format
//!
//! ```json
//! {
//!   "version": 1,
//!   "exported_at": "2026-01-31T12:00:00Z",
//!   "colleges": [{ "id": "c-1", "name": "Science" }],
//!   "departments": [{ "id": "d-1", "name": "Chemistry", "college_id": "c-1" }],
//!   "profiles": [],
//!   "items": [],
//!   "requests": [],
//!   "transfers": [],
//!   "audit_logs": []
//! }
//! ```

use crate::domain::error::{Result, StockroomError};
use crate::domain::Dataset;
use crate::infrastructure::paths;
use crate::storage::backend::RecordSource;
use std::path::{Path, PathBuf};

/// JSON export backed record source.
///
/// # Thread Safety
///
/// This type is `Send` but not `Sync`. It's designed to be used from a single
/// worker thread, matching the Zellij plugin architecture.
#[derive(Debug)]
pub struct JsonStorage {
    /// Path to the JSON export on disk.
    file_path: PathBuf,
}

impl JsonStorage {
    /// Creates a source for the given export path.
    ///
    /// The file is not touched until the first [`RecordSource::load_dataset`]
    /// call, so construction succeeds even before the first export exists.
    #[must_use]
    pub const fn new(file_path: PathBuf) -> Self {
        Self { file_path }
    }

    /// Path of the export this source reads.
    #[must_use]
    pub fn file_path(&self) -> &Path {
        &self.file_path
    }

    /// Reads, parses, and validates the export.
    ///
    /// # Errors
    ///
    /// Returns an error if the file is missing or unreadable, is not valid JSON
    /// for a [`Dataset`], or fails validation.
    fn load_from_file(path: &Path) -> Result<Dataset> {
        if !path.exists() {
            return Err(StockroomError::Storage(format!(
                "export not found at {}",
                paths::strip_host_prefix(&path.to_string_lossy())
            )));
        }

        let contents = std::fs::read_to_string(path)?;
        let dataset: Dataset = serde_json::from_str(&contents)
            .map_err(|e| StockroomError::Storage(format!("failed to parse JSON: {e}")))?;

        dataset.validate()?;

        tracing::debug!(
            version = dataset.version,
            items = dataset.items.len(),
            requests = dataset.requests.len(),
            transfers = dataset.transfers.len(),
            profiles = dataset.profiles.len(),
            audit_logs = dataset.audit_logs.len(),
            "loaded export"
        );

        Ok(dataset)
    }
}

impl RecordSource for JsonStorage {
    fn load_dataset(&mut self) -> Result<Dataset> {
        let _span = tracing::debug_span!("json_load_dataset",
            path = %self.file_path.display()
        ).entered();

        Self::load_from_file(&self.file_path)
    }

    fn location(&self) -> String {
        self.file_path.display().to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::RequestStatus;
    use std::io::Write;

    const EXPORT: &str = r#"{
        "version": 1,
        "exported_at": "2026-01-31T12:00:00Z",
        "colleges": [{ "id": "c-1", "name": "Science" }],
        "departments": [{ "id": "d-1", "name": "Chemistry", "college_id": "c-1" }],
        "profiles": [{
            "id": "p-1", "full_name": "Grace Hopper", "email": "grace@example.edu",
            "role": "staff", "department_id": "d-1"
        }],
        "items": [{
            "id": "i-1", "name": "Microscope", "category": "Lab", "quantity": 3,
            "department_id": "d-1", "condition": "good"
        }],
        "requests": [{
            "id": "r-1", "item_id": "i-1", "requester_id": "p-1", "quantity": 1,
            "status": "pending_dean", "created_at": "2026-01-30T09:15:00Z"
        }],
        "transfers": null
    }"#;

    fn write_export(dir: &tempfile::TempDir, contents: &str) -> PathBuf {
        let path = dir.path().join("inventory.json");
        let mut file = std::fs::File::create(&path).unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        path
    }

    #[test]
    fn loads_a_valid_export() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_export(&dir, EXPORT);

        let mut storage = JsonStorage::new(path.clone());
        let dataset = storage.load_dataset().unwrap();

        assert_eq!(dataset.items.len(), 1);
        assert_eq!(dataset.requests[0].status, RequestStatus::PendingDean);
        assert!(dataset.transfers.is_empty());
        assert_eq!(storage.location(), path.display().to_string());
    }

    #[test]
    fn missing_file_is_a_storage_error() {
        let dir = tempfile::tempdir().unwrap();
        let mut storage = JsonStorage::new(dir.path().join("absent.json"));

        let err = storage.load_dataset().unwrap_err();
        assert!(matches!(err, StockroomError::Storage(_)));
        assert!(err.to_string().contains("export not found"));
    }

    #[test]
    fn malformed_json_is_a_storage_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_export(&dir, "{ not json");

        let err = JsonStorage::new(path).load_dataset().unwrap_err();
        assert!(err.to_string().starts_with("Storage error: failed to parse JSON"));
    }

    #[test]
    fn duplicate_ids_are_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_export(
            &dir,
            r#"{ "colleges": [{ "id": "c-1", "name": "A" }, { "id": "c-1", "name": "B" }] }"#,
        );

        let err = JsonStorage::new(path).load_dataset().unwrap_err();
        assert!(matches!(err, StockroomError::Validation(_)));
    }

    #[test]
    fn rewritten_export_is_picked_up() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_export(&dir, EXPORT);
        let mut storage = JsonStorage::new(path.clone());
        assert_eq!(storage.load_dataset().unwrap().items.len(), 1);

        std::fs::write(&path, r#"{ "version": 1, "items": [] }"#).unwrap();

        assert!(storage.load_dataset().unwrap().items.is_empty());
    }

    #[test]
    fn rewrite_within_the_same_mtime_is_picked_up() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_export(&dir, EXPORT);
        let original = std::fs::metadata(&path).unwrap().modified().unwrap();

        let mut storage = JsonStorage::new(path.clone());
        assert_eq!(storage.load_dataset().unwrap().items.len(), 1);

        std::fs::write(&path, r#"{ "items": [] }"#).unwrap();
        std::fs::File::options()
            .write(true)
            .open(&path)
            .unwrap()
            .set_modified(original)
            .unwrap();

        assert!(storage.load_dataset().unwrap().items.is_empty());
    }
}
