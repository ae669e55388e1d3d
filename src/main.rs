//! Zellij plugin wrapper and entry point.
//!
//! A thin layer between the Stockroom library and the Zellij plugin system:
//! it translates Zellij events into library events, executes the resulting
//! actions, and hosts the worker that reads the export.
//!
//! ```text
//! ┌─────────────────────────┐
//! │   Zellij Main Thread    │
//! │  ┌──────────────────┐   │
//! │  │  State (plugin)  │   │  ← UI state, event handling
//! │  └──────────────────┘   │
//! │          │ IPC          │
//! │          ▼              │
//! │  ┌──────────────────┐   │
//! │  │ StockroomWorker  │   │  ← Export parsing
//! │  │ (worker thread)  │   │
//! │  └──────────────────┘   │
//! └─────────────────────────┘
//! ```
//!
//! # Plugin Lifecycle
//!
//! 1. **Load**: Parse config, initialize tracing, create `AppState`
//! 2. **Permissions**: On grant, tell the worker where the export lives and
//!    request the first load
//! 3. **Update**: Keys, worker responses and filesystem events become library
//!    events
//! 4. **Render**: Call the library render function
//!
//! # Keybindings
//!
//! Normal mode, and search mode once focus is on the results:
//! - `j`/`Down`, `k`/`Up`: Row down / up, crossing page boundaries
//! - `h`/`Left`/`PageUp`, `l`/`Right`/`PageDown`: Previous / next page
//! - `g`/`Home`, `G`/`End`: First / last page
//! - `+`, `-`: Larger / smaller page size
//! - `/`: Search (or back to the query from the results)
//!
//! Normal mode only:
//! - `1`-`5`: Show a table, `Tab`: next table
//! - `r`: Reload, `q`: Close
//!
//! While typing a query every printable key goes to the query; `Enter` moves
//! to the results and `Esc` leaves search.

#![allow(clippy::multiple_crate_versions)]

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use zellij_tile::prelude::*;
use zellij_tile::shim::post_message_to;

use stockroom::pagination::Navigation;
use stockroom::worker::{StockroomWorker, WorkerMessage, WorkerResponse, CONFIGURE_MESSAGE};
use stockroom::{handle_event, Action, Config, Event, InputMode, SearchFocus, TableKind};

register_plugin!(State);
register_worker!(StockroomWorker, stockroom_worker, STOCKROOM_WORKER);

/// Plugin state wrapper.
///
/// Wraps the library's `AppState` with Zellij-specific concerns: worker
/// communication and the export location.
struct State {
    app: stockroom::AppState,

    /// Worker thread identifier for IPC messaging.
    worker_name: String,

    /// Sandbox path of the export, sent to the worker on permission grant.
    export_path: PathBuf,
}

impl Default for State {
    fn default() -> Self {
        let default_config = Config::default();
        Self {
            app: stockroom::initialize(&default_config),
            worker_name: "stockroom".to_string(),
            export_path: default_config.export_path(),
        }
    }
}

impl ZellijPlugin for State {
    /// Parses configuration, initializes state, requests permissions, and
    /// subscribes to events. Nothing is loaded until permissions arrive.
    ///
    /// # Permissions
    ///
    /// - `ReadApplicationState`: Receive plugin messages and events
    /// - `ChangeApplicationState`: Hide the pane on `q`
    /// - `FullHdAccess`: Read the export and watch it for changes
    fn load(&mut self, configuration: BTreeMap<String, String>) {
        let config = Config::from_zellij(&configuration);
        stockroom::observability::init_tracing(&config);

        let span = tracing::debug_span!("plugin_load");
        let _guard = span.entered();

        tracing::debug!(
            data_file = ?config.data_file,
            page_size = config.page_size,
            table = ?config.table,
            "parsed configuration"
        );
        self.app = stockroom::initialize(&config);
        self.export_path = config.export_path();

        request_permission(&[
            PermissionType::ReadApplicationState,
            PermissionType::ChangeApplicationState,
            PermissionType::FullHdAccess,
        ]);

        subscribe(&[
            EventType::Key,
            EventType::CustomMessage,
            EventType::PermissionRequestResult,
            EventType::FileSystemCreate,
            EventType::FileSystemUpdate,
            EventType::FileSystemDelete,
        ]);

        tracing::debug!("plugin load complete - waiting for permissions");
    }

    /// Translates a Zellij event, delegates to `handle_event`, and executes
    /// the resulting actions. Returns `true` if the UI should re-render.
    fn update(&mut self, event: zellij_tile::prelude::Event) -> bool {
        let event_name = Self::get_event_name(&event);
        let span_name = format!("plugin_update::{event_name}");
        let span = tracing::debug_span!("plugin_update_event", otel.name = %span_name, event_type = %event_name);
        let _guard = span.entered();

        let our_event = match event {
            zellij_tile::prelude::Event::Key(ref key) => match self.map_key_event(key) {
                Some(event) => event,
                None => return false,
            },
            zellij_tile::prelude::Event::CustomMessage(message, payload) => {
                match self.map_custom_message_event(&message, &payload) {
                    Some(event) => event,
                    None => return false,
                }
            }
            zellij_tile::prelude::Event::FileSystemCreate(paths)
            | zellij_tile::prelude::Event::FileSystemUpdate(paths)
            | zellij_tile::prelude::Event::FileSystemDelete(paths) => {
                if !self.touches_export(paths.iter().map(|(path, _)| path.as_path())) {
                    return false;
                }
                tracing::debug!(path_count = paths.len(), "export changed on disk");
                Event::ExportChanged
            }
            zellij_tile::prelude::Event::PermissionRequestResult(permissions) => {
                match self.handle_permission_result(permissions) {
                    Some(event) => event,
                    None => return false,
                }
            }
            _ => return false,
        };

        match handle_event(&mut self.app, &our_event) {
            Ok((should_render, actions)) => {
                tracing::debug!(
                    action_count = actions.len(),
                    should_render = should_render,
                    "event handled successfully"
                );
                for a in actions {
                    self.execute_action(&a);
                }
                should_render
            }
            Err(e) => {
                tracing::debug!(error = %e, "error handling event");
                false
            }
        }
    }

    fn render(&mut self, rows: usize, cols: usize) {
        stockroom::ui::render(&self.app, rows, cols);
    }
}

impl State {
    fn get_event_name(event: &zellij_tile::prelude::Event) -> String {
        match event {
            zellij_tile::prelude::Event::Key(key) => format!("Key({:?})", key.bare_key),
            zellij_tile::prelude::Event::CustomMessage(msg, _) => format!("CustomMessage({msg})"),
            zellij_tile::prelude::Event::PermissionRequestResult(..) => {
                "PermissionRequestResult".to_string()
            }
            zellij_tile::prelude::Event::FileSystemCreate(..) => "FileSystemCreate".to_string(),
            zellij_tile::prelude::Event::FileSystemUpdate(..) => "FileSystemUpdate".to_string(),
            zellij_tile::prelude::Event::FileSystemDelete(..) => "FileSystemDelete".to_string(),
            _ => "Other".to_string(),
        }
    }

    /// Filesystem events report paths relative to `/host` or absolute ones,
    /// depending on the Zellij version, so only the file name is compared.
    fn touches_export<'a>(&self, mut paths: impl Iterator<Item = &'a Path>) -> bool {
        let Some(export_name) = self.export_path.file_name() else {
            return false;
        };
        paths.any(|path| path.file_name() == Some(export_name))
    }

    /// Maps keyboard events to application events according to the input
    /// mode.
    fn map_key_event(&self, key: &KeyWithModifier) -> Option<Event> {
        tracing::trace!(bare_key = ?key.bare_key, "key event");

        match self.app.input_mode {
            InputMode::Search(SearchFocus::Typing) => Self::map_typing_key(key),
            InputMode::Search(SearchFocus::Navigating) => match key.bare_key {
                BareKey::Char('/') => Some(Event::FocusSearchBar),
                BareKey::Esc => Some(Event::ExitSearch),
                _ => Self::map_browsing_key(key),
            },
            InputMode::Normal => Self::map_browsing_key(key).or_else(|| Self::map_normal_key(key)),
        }
    }

    fn map_typing_key(key: &KeyWithModifier) -> Option<Event> {
        Some(match key.bare_key {
            BareKey::Esc => Event::ExitSearch,
            BareKey::Enter => Event::FocusResults,
            BareKey::Backspace => Event::Backspace,
            BareKey::Down => Event::CursorDown,
            BareKey::Up => Event::CursorUp,
            BareKey::Char(c) if !key.has_modifiers(&[KeyModifier::Ctrl]) => Event::Char(c),
            _ => return None,
        })
    }

    /// Row, page and search keys shared by normal mode and search results.
    fn map_browsing_key(key: &KeyWithModifier) -> Option<Event> {
        Some(match key.bare_key {
            BareKey::Down | BareKey::Char('j') => Event::CursorDown,
            BareKey::Up | BareKey::Char('k') => Event::CursorUp,
            BareKey::Left | BareKey::PageUp | BareKey::Char('h') => {
                Event::Navigate(Navigation::Previous)
            }
            BareKey::Right | BareKey::PageDown | BareKey::Char('l') => {
                Event::Navigate(Navigation::Next)
            }
            BareKey::Home | BareKey::Char('g') => Event::Navigate(Navigation::First),
            BareKey::End | BareKey::Char('G') => Event::Navigate(Navigation::Last),
            BareKey::Char('+' | '=') => Event::GrowPageSize,
            BareKey::Char('-') => Event::ShrinkPageSize,
            _ => return None,
        })
    }

    fn map_normal_key(key: &KeyWithModifier) -> Option<Event> {
        Some(match key.bare_key {
            BareKey::Tab => Event::NextTable,
            BareKey::Char('/') => Event::SearchMode,
            BareKey::Char('r') => Event::Reload,
            BareKey::Char('q') => Event::CloseFocus,
            BareKey::Char(c) => Event::ShowTable(TableKind::from_digit(c)?),
            _ => return None,
        })
    }

    /// On grant, points the worker at the export and turns the grant into
    /// the event that starts the first load.
    fn handle_permission_result(&self, permissions: PermissionStatus) -> Option<Event> {
        match permissions {
            PermissionStatus::Granted => {
                tracing::debug!(export_path = %self.export_path.display(), "permissions granted");
                post_message_to(PluginMessage {
                    worker_name: Some(self.worker_name.clone()),
                    name: CONFIGURE_MESSAGE.to_string(),
                    payload: self.export_path.to_string_lossy().into_owned(),
                });
                watch_filesystem();
                Some(Event::PermissionsGranted)
            }
            PermissionStatus::Denied => {
                tracing::warn!("permissions denied - the export cannot be read");
                None
            }
        }
    }

    /// Maps worker responses to application events.
    fn map_custom_message_event(&self, message: &str, payload: &str) -> Option<Event> {
        tracing::debug!(message_name = %message, payload_len = payload.len(), "custom message event");

        if message != self.worker_name {
            tracing::debug!(message_name = %message, "ignoring custom message with unknown name");
            return None;
        }

        match serde_json::from_str::<WorkerResponse>(payload) {
            Ok(response) => Some(Event::WorkerResponse(response)),
            Err(e) => {
                tracing::debug!(error = %e, "failed to deserialize worker response");
                None
            }
        }
    }

    /// Serializes the message as JSON and sends it to the worker. Errors are
    /// logged, not propagated.
    fn post_worker_message(&self, message: &WorkerMessage) {
        match serde_json::to_string(&message) {
            Ok(payload) => {
                tracing::debug!(payload_len = payload.len(), "posting message to worker");
                post_message_to(PluginMessage {
                    worker_name: Some(self.worker_name.clone()),
                    name: self.worker_name.clone(),
                    payload,
                });
            }
            Err(e) => {
                tracing::debug!(error = %e, "failed to serialize worker message");
            }
        }
    }

    #[tracing::instrument(level = "debug", skip(self))]
    fn execute_action(&self, action: &Action) {
        match action {
            Action::CloseFocus => {
                tracing::debug!("closing plugin focus");
                hide_self();
            }
            Action::PostToWorker(ref message) => {
                self.post_worker_message(message);
            }
        }
    }
}
