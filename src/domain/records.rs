//! Typed inventory records.
//!
//! One struct per backend table. Records are deserialized straight from the
//! export file, so the enums here double as boundary validation: an unknown role,
//! status, or condition string fails the whole parse instead of flowing through
//! the UI as a loose string.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Number of seconds in one minute.
const SECONDS_PER_MINUTE: i64 = 60;

/// Number of seconds in one hour.
const SECONDS_PER_HOUR: i64 = 3600;

/// Number of seconds in one day.
const SECONDS_PER_DAY: i64 = 86400;

/// A college grouping several departments.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct College {
    pub id: String,
    pub name: String,
}

/// An academic department, owned by a college.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Department {
    pub id: String,
    pub name: String,
    pub college_id: String,
}

/// Role a staff member holds in the approval workflow.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    Admin,
    Dean,
    DeptHead,
    Storekeeper,
    Staff,
}

impl Role {
    /// Human-readable label for table cells.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Admin => "Admin",
            Self::Dean => "Dean",
            Self::DeptHead => "Department Head",
            Self::Storekeeper => "Storekeeper",
            Self::Staff => "Staff",
        }
    }
}

/// A staff profile.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Profile {
    pub id: String,
    pub full_name: String,
    pub email: String,
    pub role: Role,
    #[serde(default)]
    pub department_id: Option<String>,
}

/// Physical condition of an inventory item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Condition {
    New,
    Good,
    Fair,
    Damaged,
    Disposed,
}

impl Condition {
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::New => "New",
            Self::Good => "Good",
            Self::Fair => "Fair",
            Self::Damaged => "Damaged",
            Self::Disposed => "Disposed",
        }
    }
}

/// A stocked item.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    pub id: String,
    pub name: String,
    pub category: String,
    pub quantity: u32,
    #[serde(default)]
    pub unit: Option<String>,
    #[serde(default)]
    pub department_id: Option<String>,
    pub condition: Condition,
}

/// Approval stage of an item request.
///
/// The backend moves requests through these stages; this crate only reads
/// them. Stored as the backend's snake-case strings (`pending_dept_head`, ...).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RequestStatus {
    PendingDeptHead,
    PendingDean,
    PendingStorekeeper,
    Approved,
    Rejected,
}

impl RequestStatus {
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::PendingDeptHead => "Pending (Dept Head)",
            Self::PendingDean => "Pending (Dean)",
            Self::PendingStorekeeper => "Pending (Storekeeper)",
            Self::Approved => "Approved",
            Self::Rejected => "Rejected",
        }
    }

    /// Returns `true` while the request still awaits a decision.
    #[must_use]
    pub const fn is_pending(self) -> bool {
        matches!(
            self,
            Self::PendingDeptHead | Self::PendingDean | Self::PendingStorekeeper
        )
    }
}

/// A staff request for an item.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItemRequest {
    pub id: String,
    pub item_id: String,
    pub requester_id: String,
    pub quantity: u32,
    pub status: RequestStatus,
    #[serde(default)]
    pub reason: Option<String>,
    pub created_at: DateTime<Utc>,
}

/// Movement of stock between departments.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Transfer {
    pub id: String,
    pub item_id: String,
    #[serde(default)]
    pub from_department_id: Option<String>,
    #[serde(default)]
    pub to_department_id: Option<String>,
    pub quantity: u32,
    #[serde(default)]
    pub transferred_by: Option<String>,
    pub created_at: DateTime<Utc>,
}

/// One entry of the backend's audit trail.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuditLog {
    pub id: String,
    #[serde(default)]
    pub actor_id: Option<String>,
    pub action: String,
    pub entity: String,
    #[serde(default)]
    pub entity_id: Option<String>,
    #[serde(default)]
    pub details: Option<String>,
    pub created_at: DateTime<Utc>,
}

/// Returns a human-readable string describing how long before `now` a timestamp lies.
///
/// - Less than 1 minute (or in the future): "just now"
/// - Less than 1 hour: "Xm ago"
/// - Less than 1 day: "Xh ago"
/// - 1 day or more: "Xd ago"
///
/// # Examples
///
/// ```
/// use chrono::{Duration, Utc};
/// use stockroom::domain::records::time_ago;
///
/// let now = Utc::now();
/// assert_eq!(time_ago(now - Duration::minutes(5), now), "5m ago");
/// ```
#[must_use]
pub fn time_ago(timestamp: DateTime<Utc>, now: DateTime<Utc>) -> String {
    let diff = (now - timestamp).num_seconds();

    if diff < SECONDS_PER_MINUTE {
        "just now".to_string()
    } else if diff < SECONDS_PER_HOUR {
        let mins = diff / SECONDS_PER_MINUTE;
        format!("{mins}m ago")
    } else if diff < SECONDS_PER_DAY {
        let hours = diff / SECONDS_PER_HOUR;
        format!("{hours}h ago")
    } else {
        let days = diff / SECONDS_PER_DAY;
        format!("{days}d ago")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    #[test]
    fn request_status_uses_backend_strings() {
        let status: RequestStatus = serde_json::from_str("\"pending_dept_head\"").unwrap();
        assert_eq!(status, RequestStatus::PendingDeptHead);
        assert!(status.is_pending());

        let approved = serde_json::to_string(&RequestStatus::Approved).unwrap();
        assert_eq!(approved, "\"approved\"");
    }

    #[test]
    fn unknown_role_is_rejected() {
        let result: Result<Role, _> = serde_json::from_str("\"janitor\"");
        assert!(result.is_err());
    }

    #[test]
    fn negative_quantity_is_rejected() {
        let json = r#"{
            "id": "i-1", "name": "Projector", "category": "AV",
            "quantity": -3, "condition": "good"
        }"#;
        let result: Result<Item, _> = serde_json::from_str(json);
        assert!(result.is_err());
    }

    #[test]
    fn optional_fields_default_to_none() {
        let json = r#"{
            "id": "p-1", "full_name": "Ada Lovelace",
            "email": "ada@example.edu", "role": "dept_head"
        }"#;
        let profile: Profile = serde_json::from_str(json).unwrap();
        assert_eq!(profile.role, Role::DeptHead);
        assert!(profile.department_id.is_none());
    }

    #[test]
    fn time_ago_buckets() {
        let now = Utc::now();
        assert_eq!(time_ago(now, now), "just now");
        assert_eq!(time_ago(now + Duration::minutes(3), now), "just now");
        assert_eq!(time_ago(now - Duration::minutes(5), now), "5m ago");
        assert_eq!(time_ago(now - Duration::hours(3), now), "3h ago");
        assert_eq!(time_ago(now - Duration::days(7), now), "7d ago");
    }
}
