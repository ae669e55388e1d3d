//! The full set of records read from one inventory export.

use super::error::{Result, StockroomError};
use super::records::{AuditLog, College, Department, Item, ItemRequest, Profile, Transfer};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};
use std::collections::{HashMap, HashSet};

/// Current export format version.
pub const EXPORT_VERSION: u32 = 1;

/// Every table of the export, typed.
///
/// Collections that are missing, `null`, or not arrays deserialize as empty.
/// Use [`Dataset::validate`] after parsing to enforce cross-record rules.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Dataset {
    #[serde(default = "default_version")]
    pub version: u32,

    #[serde(default)]
    pub exported_at: Option<DateTime<Utc>>,

    #[serde(default, deserialize_with = "lenient_seq")]
    pub colleges: Vec<College>,

    #[serde(default, deserialize_with = "lenient_seq")]
    pub departments: Vec<Department>,

    #[serde(default, deserialize_with = "lenient_seq")]
    pub profiles: Vec<Profile>,

    #[serde(default, deserialize_with = "lenient_seq")]
    pub items: Vec<Item>,

    #[serde(default, deserialize_with = "lenient_seq")]
    pub requests: Vec<ItemRequest>,

    #[serde(default, deserialize_with = "lenient_seq")]
    pub transfers: Vec<Transfer>,

    #[serde(default, deserialize_with = "lenient_seq")]
    pub audit_logs: Vec<AuditLog>,
}

const fn default_version() -> u32 {
    EXPORT_VERSION
}

/// Deserializes a sequence, treating any non-array value as empty.
///
/// Elements of a real array are still parsed strictly.
fn lenient_seq<'de, D, T>(deserializer: D) -> std::result::Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: serde::de::DeserializeOwned,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    if value.is_array() {
        serde_json::from_value(value).map_err(serde::de::Error::custom)
    } else {
        tracing::debug!(value_kind = %json_kind(&value), "non-array collection coerced to empty");
        Ok(Vec::new())
    }
}

const fn json_kind(value: &serde_json::Value) -> &'static str {
    match value {
        serde_json::Value::Null => "null",
        serde_json::Value::Bool(_) => "bool",
        serde_json::Value::Number(_) => "number",
        serde_json::Value::String(_) => "string",
        serde_json::Value::Array(_) => "array",
        serde_json::Value::Object(_) => "object",
    }
}

/// Fails on the first repeated id within one collection.
fn ensure_unique<'a>(collection: &str, ids: impl Iterator<Item = &'a str>) -> Result<()> {
    let mut seen = HashSet::new();
    for id in ids {
        if !seen.insert(id) {
            return Err(StockroomError::Validation(format!(
                "duplicate {collection} id `{id}`"
            )));
        }
    }
    Ok(())
}

impl Dataset {
    /// Checks cross-record rules that serde alone cannot express.
    ///
    /// Ids must be unique within each collection. Dangling references are
    /// allowed; they render as `unknown`.
    ///
    /// # Errors
    ///
    /// Returns [`StockroomError::Validation`] naming the first offending id, or
    /// when the export declares a newer format version than this build reads.
    pub fn validate(&self) -> Result<()> {
        if self.version > EXPORT_VERSION {
            return Err(StockroomError::Validation(format!(
                "unsupported export version {} (expected {EXPORT_VERSION} or older)",
                self.version
            )));
        }

        ensure_unique("college", self.colleges.iter().map(|c| c.id.as_str()))?;
        ensure_unique("department", self.departments.iter().map(|d| d.id.as_str()))?;
        ensure_unique("profile", self.profiles.iter().map(|p| p.id.as_str()))?;
        ensure_unique("item", self.items.iter().map(|i| i.id.as_str()))?;
        ensure_unique("request", self.requests.iter().map(|r| r.id.as_str()))?;
        ensure_unique("transfer", self.transfers.iter().map(|t| t.id.as_str()))?;
        ensure_unique("audit log", self.audit_logs.iter().map(|a| a.id.as_str()))?;

        Ok(())
    }

    /// Total number of records across all collections.
    #[must_use]
    pub fn record_count(&self) -> usize {
        self.colleges.len()
            + self.departments.len()
            + self.profiles.len()
            + self.items.len()
            + self.requests.len()
            + self.transfers.len()
            + self.audit_logs.len()
    }

    /// Builds id → name lookups used when rendering references.
    #[must_use]
    pub fn names(&self) -> NameIndex<'_> {
        NameIndex {
            items: self.items.iter().map(|i| (i.id.as_str(), i.name.as_str())).collect(),
            profiles: self
                .profiles
                .iter()
                .map(|p| (p.id.as_str(), p.full_name.as_str()))
                .collect(),
            departments: self
                .departments
                .iter()
                .map(|d| (d.id.as_str(), d.name.as_str()))
                .collect(),
            colleges: self
                .colleges
                .iter()
                .map(|c| (c.id.as_str(), c.name.as_str()))
                .collect(),
            department_colleges: self
                .departments
                .iter()
                .map(|d| (d.id.as_str(), d.college_id.as_str()))
                .collect(),
        }
    }
}

/// Borrowed id → display-name maps over a [`Dataset`].
#[derive(Debug)]
pub struct NameIndex<'a> {
    items: HashMap<&'a str, &'a str>,
    profiles: HashMap<&'a str, &'a str>,
    departments: HashMap<&'a str, &'a str>,
    colleges: HashMap<&'a str, &'a str>,
    department_colleges: HashMap<&'a str, &'a str>,
}

const UNKNOWN: &str = "unknown";

impl<'a> NameIndex<'a> {
    #[must_use]
    pub fn item(&self, id: &str) -> &'a str {
        self.items.get(id).copied().unwrap_or(UNKNOWN)
    }

    #[must_use]
    pub fn profile(&self, id: &str) -> &'a str {
        self.profiles.get(id).copied().unwrap_or(UNKNOWN)
    }

    /// Department name, or `-` when no department is set.
    #[must_use]
    pub fn department(&self, id: Option<&str>) -> &'a str {
        id.map_or("-", |id| self.departments.get(id).copied().unwrap_or(UNKNOWN))
    }

    /// College name of the college owning a department, or `-` when no
    /// department is set.
    #[must_use]
    pub fn college_of(&self, department_id: Option<&str>) -> &'a str {
        department_id.map_or("-", |id| {
            self.department_colleges
                .get(id)
                .and_then(|college_id| self.colleges.get(college_id))
                .copied()
                .unwrap_or(UNKNOWN)
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::records::{Condition, Role};

    fn item(id: &str, name: &str) -> Item {
        Item {
            id: id.to_string(),
            name: name.to_string(),
            category: "Lab".to_string(),
            quantity: 4,
            unit: None,
            department_id: Some("d-1".to_string()),
            condition: Condition::Good,
        }
    }

    #[test]
    fn missing_and_non_array_collections_become_empty() {
        let json = r#"{ "version": 1, "items": null, "profiles": {"oops": true}, "transfers": "n/a" }"#;
        let dataset: Dataset = serde_json::from_str(json).unwrap();

        assert!(dataset.items.is_empty());
        assert!(dataset.profiles.is_empty());
        assert!(dataset.transfers.is_empty());
        assert!(dataset.audit_logs.is_empty());
        assert_eq!(dataset.record_count(), 0);
    }

    #[test]
    fn array_elements_are_still_strict() {
        let json = r#"{ "items": [ { "id": "i-1" } ] }"#;
        let result: std::result::Result<Dataset, _> = serde_json::from_str(json);
        assert!(result.is_err());
    }

    #[test]
    fn duplicate_ids_fail_validation() {
        let dataset = Dataset {
            items: vec![item("i-1", "Microscope"), item("i-1", "Beaker")],
            ..Dataset::default()
        };

        let err = dataset.validate().unwrap_err();
        assert_eq!(err.to_string(), "Validation error: duplicate item id `i-1`");
    }

    #[test]
    fn newer_export_version_fails_validation() {
        let dataset = Dataset {
            version: EXPORT_VERSION + 1,
            ..Dataset::default()
        };
        assert!(matches!(dataset.validate(), Err(StockroomError::Validation(_))));
    }

    #[test]
    fn name_index_resolves_and_falls_back() {
        let dataset = Dataset {
            colleges: vec![College { id: "c-1".into(), name: "Science".into() }],
            departments: vec![Department {
                id: "d-1".into(),
                name: "Chemistry".into(),
                college_id: "c-1".into(),
            }],
            profiles: vec![Profile {
                id: "p-1".into(),
                full_name: "Grace Hopper".into(),
                email: "grace@example.edu".into(),
                role: Role::Storekeeper,
                department_id: Some("d-1".into()),
            }],
            items: vec![item("i-1", "Microscope")],
            ..Dataset::default()
        };
        dataset.validate().unwrap();

        let names = dataset.names();
        assert_eq!(names.item("i-1"), "Microscope");
        assert_eq!(names.item("gone"), "unknown");
        assert_eq!(names.profile("p-1"), "Grace Hopper");
        assert_eq!(names.department(Some("d-1")), "Chemistry");
        assert_eq!(names.department(None), "-");
        assert_eq!(names.college_of(Some("d-1")), "Science");
        assert_eq!(names.college_of(Some("d-9")), "unknown");
        assert_eq!(names.college_of(None), "-");
    }
}
