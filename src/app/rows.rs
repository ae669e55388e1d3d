//! Table rows derived from the typed records.
//!
//! Each [`TableKind`] has a fixed column layout and a projection from the
//! [`Dataset`] into display rows. References to other records (an item's
//! department, a request's requester) are resolved to names here, once per
//! load, so paging and searching only ever deal with flat strings. Relative
//! times are the exception: their cells keep the timestamp and are re-read
//! against the clock whenever the view model is computed.

use super::modes::TableKind;
use crate::domain::records::{time_ago, Condition, RequestStatus};
use crate::domain::{Dataset, Item};
use chrono::{DateTime, Utc};
use std::borrow::Cow;

/// Colour class of a status cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Tone {
    #[default]
    Neutral,
    Pending,
    Approved,
    Rejected,
}

impl From<RequestStatus> for Tone {
    fn from(status: RequestStatus) -> Self {
        match status {
            RequestStatus::Approved => Self::Approved,
            RequestStatus::Rejected => Self::Rejected,
            RequestStatus::PendingDeptHead
            | RequestStatus::PendingDean
            | RequestStatus::PendingStorekeeper => Self::Pending,
        }
    }
}

impl From<Condition> for Tone {
    fn from(condition: Condition) -> Self {
        match condition {
            Condition::New | Condition::Good => Self::Approved,
            Condition::Fair => Self::Pending,
            Condition::Damaged | Condition::Disposed => Self::Rejected,
        }
    }
}

/// A column heading and its width in terminal cells.
///
/// A width of `0` means "whatever is left"; only the last column uses it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Column {
    pub title: &'static str,
    pub width: usize,
}

const fn column(title: &'static str, width: usize) -> Column {
    Column { title, width }
}

const ITEM_COLUMNS: [Column; 5] = [
    column("NAME", 28),
    column("CATEGORY", 16),
    column("QTY", 10),
    column("CONDITION", 11),
    column("DEPARTMENT", 0),
];

const REQUEST_COLUMNS: [Column; 5] = [
    column("ITEM", 26),
    column("REQUESTED BY", 22),
    column("QTY", 5),
    column("STATUS", 23),
    column("CREATED", 0),
];

const TRANSFER_COLUMNS: [Column; 6] = [
    column("ITEM", 24),
    column("FROM", 18),
    column("TO", 18),
    column("QTY", 5),
    column("BY", 20),
    column("WHEN", 0),
];

const STAFF_COLUMNS: [Column; 5] = [
    column("NAME", 22),
    column("EMAIL", 28),
    column("ROLE", 17),
    column("DEPARTMENT", 20),
    column("COLLEGE", 0),
];

const AUDIT_COLUMNS: [Column; 5] = [
    column("WHEN", 10),
    column("ACTOR", 22),
    column("ACTION", 14),
    column("ENTITY", 14),
    column("DETAILS", 0),
];

/// Column layout of a table.
#[must_use]
pub const fn columns(kind: TableKind) -> &'static [Column] {
    match kind {
        TableKind::Items => &ITEM_COLUMNS,
        TableKind::Requests => &REQUEST_COLUMNS,
        TableKind::Transfers => &TRANSFER_COLUMNS,
        TableKind::Staff => &STAFF_COLUMNS,
        TableKind::AuditLog => &AUDIT_COLUMNS,
    }
}

/// One formatted cell.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Cell {
    /// Text as of the last build; relative times go stale, see [`Cell::text_at`].
    pub text: String,
    pub tone: Tone,
    /// Timestamp behind a relative-time cell.
    pub since: Option<DateTime<Utc>>,
}

impl Cell {
    fn plain(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            tone: Tone::Neutral,
            since: None,
        }
    }

    fn toned(text: impl Into<String>, tone: Tone) -> Self {
        Self {
            text: text.into(),
            tone,
            since: None,
        }
    }

    fn elapsed(since: DateTime<Utc>, now: DateTime<Utc>) -> Self {
        Self {
            text: time_ago(since, now),
            tone: Tone::Neutral,
            since: Some(since),
        }
    }

    /// Cell text with relative times recomputed against `now`.
    #[must_use]
    pub fn text_at(&self, now: DateTime<Utc>) -> Cow<'_, str> {
        self.since.map_or(Cow::Borrowed(self.text.as_str()), |since| {
            Cow::Owned(time_ago(since, now))
        })
    }
}

/// A display row: the record id plus one cell per column.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Row {
    pub id: String,
    pub cells: Vec<Cell>,
    /// Lowercased cells joined by spaces, matched against search tokens.
    search_text: String,
}

impl Row {
    fn new(id: &str, cells: Vec<Cell>) -> Self {
        let search_text = cells
            .iter()
            .map(|cell| cell.text.to_lowercase())
            .collect::<Vec<_>>()
            .join(" ");

        Self {
            id: id.to_string(),
            cells,
            search_text,
        }
    }

    #[must_use]
    pub fn search_text(&self) -> &str {
        &self.search_text
    }
}

fn item_quantity(item: &Item) -> String {
    item.unit
        .as_deref()
        .map_or_else(|| item.quantity.to_string(), |unit| format!("{} {unit}", item.quantity))
}

fn newest_first<T>(records: &[T], created_at: impl Fn(&T) -> DateTime<Utc>) -> Vec<&T> {
    let mut sorted: Vec<&T> = records.iter().collect();
    sorted.sort_by_key(|record| std::cmp::Reverse(created_at(record)));
    sorted
}

/// Projects one table of the dataset into display rows.
///
/// Items and staff keep export order; requests, transfers, and audit entries
/// are listed newest first. Relative times are first rendered against `now`.
#[must_use]
pub fn build_rows(kind: TableKind, dataset: &Dataset, now: DateTime<Utc>) -> Vec<Row> {
    let _span = tracing::debug_span!("build_rows", table = ?kind).entered();
    let names = dataset.names();

    let rows: Vec<Row> = match kind {
        TableKind::Items => dataset
            .items
            .iter()
            .map(|item| {
                Row::new(
                    &item.id,
                    vec![
                        Cell::plain(&item.name),
                        Cell::plain(&item.category),
                        Cell::plain(item_quantity(item)),
                        Cell::toned(item.condition.label(), item.condition.into()),
                        Cell::plain(names.department(item.department_id.as_deref())),
                    ],
                )
            })
            .collect(),
        TableKind::Requests => newest_first(&dataset.requests, |r| r.created_at)
            .into_iter()
            .map(|request| {
                Row::new(
                    &request.id,
                    vec![
                        Cell::plain(names.item(&request.item_id)),
                        Cell::plain(names.profile(&request.requester_id)),
                        Cell::plain(request.quantity.to_string()),
                        Cell::toned(request.status.label(), request.status.into()),
                        Cell::elapsed(request.created_at, now),
                    ],
                )
            })
            .collect(),
        TableKind::Transfers => newest_first(&dataset.transfers, |t| t.created_at)
            .into_iter()
            .map(|transfer| {
                Row::new(
                    &transfer.id,
                    vec![
                        Cell::plain(names.item(&transfer.item_id)),
                        Cell::plain(names.department(transfer.from_department_id.as_deref())),
                        Cell::plain(names.department(transfer.to_department_id.as_deref())),
                        Cell::plain(transfer.quantity.to_string()),
                        Cell::plain(
                            transfer
                                .transferred_by
                                .as_deref()
                                .map_or("-", |id| names.profile(id)),
                        ),
                        Cell::elapsed(transfer.created_at, now),
                    ],
                )
            })
            .collect(),
        TableKind::Staff => dataset
            .profiles
            .iter()
            .map(|profile| {
                let department = profile.department_id.as_deref();
                Row::new(
                    &profile.id,
                    vec![
                        Cell::plain(&profile.full_name),
                        Cell::plain(&profile.email),
                        Cell::plain(profile.role.label()),
                        Cell::plain(names.department(department)),
                        Cell::plain(names.college_of(department)),
                    ],
                )
            })
            .collect(),
        TableKind::AuditLog => newest_first(&dataset.audit_logs, |a| a.created_at)
            .into_iter()
            .map(|entry| {
                let details = match (&entry.entity_id, &entry.details) {
                    (Some(id), Some(details)) => format!("{id}: {details}"),
                    (Some(id), None) => id.clone(),
                    (None, Some(details)) => details.clone(),
                    (None, None) => String::new(),
                };
                Row::new(
                    &entry.id,
                    vec![
                        Cell::elapsed(entry.created_at, now),
                        Cell::plain(entry.actor_id.as_deref().map_or("system", |id| names.profile(id))),
                        Cell::plain(&entry.action),
                        Cell::plain(&entry.entity),
                        Cell::plain(details),
                    ],
                )
            })
            .collect(),
    };

    tracing::debug!(row_count = rows.len(), "rows built");
    rows
}
