//! Input mode and table selection state types.
//!
//! The application operates in one of two input modes:
//! - **Normal**: navigation, paging, table switching
//! - **Search**: either typing a query or navigating its results
//!
//! Orthogonally, [`TableKind`] selects which inventory table is on screen.
//!
//! # Example
//!
//! ```rust
//! use stockroom::app::modes::{InputMode, SearchFocus, TableKind};
//!
//! let input_mode = InputMode::Search(SearchFocus::Typing);
//! assert_eq!(TableKind::Items.next(), TableKind::Requests);
//! ```

/// Focus state within search mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchFocus {
    /// User is typing in the search input field.
    ///
    /// Printable keys extend the query; Enter moves focus to the results.
    Typing,

    /// User is moving through the filtered rows with the normal keys.
    ///
    /// `/` returns to typing.
    Navigating,
}

/// Current input handling mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputMode {
    /// Default navigation and command mode.
    Normal,

    /// Active search mode with focus state.
    Search(SearchFocus),
}

/// The inventory tables the browser can show.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TableKind {
    Items,
    Requests,
    Transfers,
    Staff,
    AuditLog,
}

impl TableKind {
    /// Every table in tab order.
    pub const ALL: [Self; 5] = [
        Self::Items,
        Self::Requests,
        Self::Transfers,
        Self::Staff,
        Self::AuditLog,
    ];

    /// Tab label.
    #[must_use]
    pub const fn title(self) -> &'static str {
        match self {
            Self::Items => "Items",
            Self::Requests => "Requests",
            Self::Transfers => "Transfers",
            Self::Staff => "Staff",
            Self::AuditLog => "Audit log",
        }
    }

    /// Lowercase noun used in empty-state messages.
    #[must_use]
    pub const fn noun(self) -> &'static str {
        match self {
            Self::Items => "items",
            Self::Requests => "requests",
            Self::Transfers => "transfers",
            Self::Staff => "staff profiles",
            Self::AuditLog => "audit entries",
        }
    }

    /// Table bound to a number key, `1` being the first tab.
    #[must_use]
    pub fn from_digit(digit: char) -> Option<Self> {
        let index = digit.to_digit(10)?.checked_sub(1)?;
        Self::ALL.get(usize::try_from(index).ok()?).copied()
    }

    /// Table selected by the `table` configuration key.
    ///
    /// Accepts the tab title in any case, with `_`, `-` or a space between
    /// words (`audit_log`, `Audit log`).
    #[must_use]
    pub fn from_config_name(name: &str) -> Option<Self> {
        let normalized: String = name
            .trim()
            .chars()
            .filter(|c| !matches!(c, '_' | '-' | ' '))
            .flat_map(char::to_lowercase)
            .collect();

        match normalized.as_str() {
            "items" => Some(Self::Items),
            "requests" => Some(Self::Requests),
            "transfers" => Some(Self::Transfers),
            "staff" | "profiles" => Some(Self::Staff),
            "auditlog" | "auditlogs" => Some(Self::AuditLog),
            _ => None,
        }
    }

    /// Next tab, wrapping from the last back to the first.
    #[must_use]
    pub fn next(self) -> Self {
        let index = Self::ALL.iter().position(|&kind| kind == self).unwrap_or(0);
        Self::ALL[(index + 1) % Self::ALL.len()]
    }
}
