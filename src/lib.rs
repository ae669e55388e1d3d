//! Stockroom: a Zellij plugin for browsing an inventory export.
//!
//! The inventory backend (items, requests, transfers, staff, audit log) exports
//! its tables as one JSON document. Stockroom loads that document on a worker
//! thread and shows each table as a paginated, searchable list inside a
//! Zellij pane:
//!
//! - Five tables on tabs, switched with `1`-`5` or `Tab`
//! - Page-by-page navigation with a selectable page size
//! - Multi-token fuzzy search over every column
//! - Automatic reload when the export changes on disk

#![allow(clippy::multiple_crate_versions)]

//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────┐
//! │  Zellij Plugin Shim (main.rs)                       │  ← Entry point
//! └─────────────────────────────────────────────────────┘
//!                        │
//! ┌─────────────────────────────────────────────────────┐
//! │  Application Layer (app/)                           │
//! │  - Event handling, actions                          │
//! │  - Row projection, view model computation           │
//! └─────────────────────────────────────────────────────┘
//!         │                    │                    │
//! ┌───────────────┐   ┌───────────────┐   ┌───────────────┐
//! │ UI Layer      │   │ Pagination    │   │ Worker Layer  │
//! │ (ui/)         │   │ (pagination/) │   │ (worker/)     │
//! └───────────────┘   └───────────────┘   └───────────────┘
//!                                                  │
//!                                         ┌───────────────┐
//!                                         │ Storage       │
//!                                         │ (storage/)    │
//!                                         └───────────────┘
//! ┌─────────────────────────────────────────────────────┐
//! │  Domain (domain/): records, dataset, errors          │
//! └─────────────────────────────────────────────────────┘
//! ┌─────────────────────────────────────────────────────┐
//! │  Observability (observability/): OTLP file traces    │
//! └─────────────────────────────────────────────────────┘
//! ```
//!
//! # Modules
//!
//! - [`app`]: Application state machine with event/action model
//! - [`domain`]: Record types, the dataset, errors
//! - [`pagination`]: Generic `Pager` and its display helpers
//! - [`infrastructure`]: Sandbox path utilities
//! - [`storage`]: Reading the JSON export
//! - [`worker`]: Background loading over Zellij's worker IPC
//! - [`ui`]: Terminal rendering with theme support
//! - [`observability`]: OpenTelemetry tracing to a local file
//!
//! # Configuration
//!
//! ```kdl
//! pane {
//!     plugin location="file:/path/to/stockroom.wasm" {
//!         data_file "~/exports/inventory.json"
//!         page_size "25"
//!         table "requests"
//!         theme "catppuccin-mocha"
//!         trace_level "info"
//!     }
//! }
//! ```
//!
//! # Example
//!
//! ```rust
//! use stockroom::{handle_event, initialize, Config, Event};
//!
//! let mut state = initialize(&Config::default());
//! let (_render, actions) = handle_event(&mut state, &Event::PermissionsGranted)?;
//! assert_eq!(actions.len(), 1);
//! # Ok::<(), stockroom::StockroomError>(())
//! ```

pub mod app;
pub mod domain;
pub mod infrastructure;
pub mod observability;
pub mod pagination;
pub mod storage;
pub mod ui;
pub mod worker;

pub use app::{handle_event, Action, AppState, Event, InputMode, SearchFocus, TableKind};
pub use domain::{Dataset, Result, StockroomError};
pub use pagination::{Pager, DEFAULT_PAGE_SIZE};
pub use ui::Theme;

use std::collections::BTreeMap;
use std::path::PathBuf;

/// Plugin configuration parsed from Zellij's KDL plugin block.
///
/// ```kdl
/// plugin location="file:/path/to/stockroom.wasm" {
///     data_file "~/exports/inventory.json"
///     page_size "50"
///     table "audit_log"
///     theme "catppuccin-latte"
///     theme_file "/path/to/theme.toml"
///     trace_level "debug"
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Path of the export. `~` maps to the sandbox's `/host`. Defaults to
    /// `~/.local/share/zellij/stockroom/inventory.json`.
    pub data_file: Option<String>,

    /// Initial rows per page for every freshly mounted table. Default: 25
    pub page_size: usize,

    /// Table shown on load. Default: items
    pub table: TableKind,

    /// Built-in theme name. Ignored if `theme_file` is set.
    pub theme_name: Option<String>,

    /// Path to a custom TOML theme file. See [`ui::theme`] for the format.
    pub theme_file: Option<String>,

    /// `EnvFilter` directive for traces. Default: `"info"`
    pub trace_level: Option<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            data_file: None,
            page_size: DEFAULT_PAGE_SIZE,
            table: TableKind::Items,
            theme_name: None,
            theme_file: None,
            trace_level: None,
        }
    }
}

impl Config {
    /// Parses the configuration map Zellij hands to `load`.
    ///
    /// Never fails: malformed values fall back to their defaults with a
    /// debug log, and blank strings count as unset.
    ///
    /// ```rust
    /// use std::collections::BTreeMap;
    /// use stockroom::{Config, TableKind};
    ///
    /// let mut map = BTreeMap::new();
    /// map.insert("page_size".to_string(), "50".to_string());
    /// map.insert("table".to_string(), "transfers".to_string());
    ///
    /// let config = Config::from_zellij(&map);
    /// assert_eq!(config.page_size, 50);
    /// assert_eq!(config.table, TableKind::Transfers);
    /// ```
    #[must_use]
    pub fn from_zellij(config: &BTreeMap<String, String>) -> Self {
        let get = |key: &str| {
            config
                .get(key)
                .map(|value| value.trim())
                .filter(|value| !value.is_empty())
                .map(String::from)
        };

        let page_size = get("page_size").map_or(DEFAULT_PAGE_SIZE, |raw| {
            match raw.parse::<usize>() {
                Ok(size) if size > 0 => size,
                _ => {
                    tracing::debug!(page_size = %raw, "invalid page size, using default");
                    DEFAULT_PAGE_SIZE
                }
            }
        });

        let table = get("table").map_or(TableKind::Items, |raw| {
            TableKind::from_config_name(&raw).unwrap_or_else(|| {
                tracing::debug!(table = %raw, "unknown table, showing items");
                TableKind::Items
            })
        });

        Self {
            data_file: get("data_file"),
            page_size,
            table,
            theme_name: get("theme"),
            theme_file: get("theme_file"),
            trace_level: get("trace_level"),
        }
    }

    /// Sandbox path of the export the worker reads.
    #[must_use]
    pub fn export_path(&self) -> PathBuf {
        self.data_file.as_deref().map_or_else(
            infrastructure::default_export_path,
            |path| PathBuf::from(infrastructure::expand_tilde(path)),
        )
    }
}

/// Builds the initial `AppState`: resolves the theme and mounts the
/// configured table with no data yet.
///
/// `theme_file` wins over `theme`; anything that fails to load falls back to
/// the default theme.
#[must_use]
pub fn initialize(config: &Config) -> AppState {
    tracing::debug!("initializing stockroom plugin");

    let theme = config.theme_file.as_ref().map_or_else(
        || {
            config.theme_name.as_ref().map_or_else(Theme::default, |theme_name| {
                Theme::from_name(theme_name).unwrap_or_else(|| {
                    tracing::debug!(theme_name = %theme_name, "unknown theme, using default");
                    Theme::default()
                })
            })
        },
        |theme_file| {
            Theme::from_file(infrastructure::expand_tilde(theme_file)).unwrap_or_else(|e| {
                tracing::debug!(theme_file = %theme_file, error = %e, "failed to load theme from file, using default");
                Theme::default()
            })
        },
    );

    AppState::new(theme, config.table, config.page_size)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn map(pairs: &[(&str, &str)]) -> BTreeMap<String, String> {
        pairs
            .iter()
            .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
            .collect()
    }

    #[test]
    fn empty_map_gives_defaults() {
        assert_eq!(Config::from_zellij(&BTreeMap::new()), Config::default());
    }

    #[test]
    fn parses_every_key() {
        let config = Config::from_zellij(&map(&[
            ("data_file", "~/exports/inv.json"),
            ("page_size", " 10 "),
            ("table", "Audit log"),
            ("theme", "catppuccin-frappe"),
            ("theme_file", "~/theme.toml"),
            ("trace_level", "debug"),
        ]));

        assert_eq!(config.data_file.as_deref(), Some("~/exports/inv.json"));
        assert_eq!(config.page_size, 10);
        assert_eq!(config.table, TableKind::AuditLog);
        assert_eq!(config.theme_name.as_deref(), Some("catppuccin-frappe"));
        assert_eq!(config.theme_file.as_deref(), Some("~/theme.toml"));
        assert_eq!(config.trace_level.as_deref(), Some("debug"));
    }

    #[test]
    fn malformed_values_fall_back() {
        for raw in ["0", "-3", "lots", ""] {
            let config = Config::from_zellij(&map(&[("page_size", raw)]));
            assert_eq!(config.page_size, DEFAULT_PAGE_SIZE, "page_size {raw:?}");
        }

        let config = Config::from_zellij(&map(&[("table", "warehouses"), ("theme", "  ")]));
        assert_eq!(config.table, TableKind::Items);
        assert_eq!(config.theme_name, None);
    }

    #[test]
    fn page_size_outside_the_options_is_kept() {
        let config = Config::from_zellij(&map(&[("page_size", "7")]));
        assert_eq!(config.page_size, 7);
        assert_eq!(initialize(&config).pager().page_size(), 7);
    }

    #[test]
    fn export_path_resolution() {
        assert_eq!(
            Config::default().export_path(),
            infrastructure::default_export_path()
        );

        let config = Config::from_zellij(&map(&[("data_file", "~/exports/inv.json")]));
        assert_eq!(config.export_path(), PathBuf::from("/host/exports/inv.json"));
    }

    #[test]
    fn initialize_resolves_theme_and_table() {
        let config = Config::from_zellij(&map(&[
            ("theme", "catppuccin-latte"),
            ("table", "staff"),
        ]));
        let state = initialize(&config);
        assert_eq!(state.theme.name, "catppuccin-latte");
        assert_eq!(state.table, TableKind::Staff);

        let config = Config::from_zellij(&map(&[
            ("theme", "catppuccin-latte"),
            ("theme_file", "/nonexistent/theme.toml"),
        ]));
        assert_eq!(initialize(&config).theme, Theme::default());

        let config = Config::from_zellij(&map(&[("theme", "nord")]));
        assert_eq!(initialize(&config).theme, Theme::default());
    }
}
