//! Worker thread implementation for asynchronous export loading.
//!
//! This module implements the Zellij worker thread interface, reading and
//! validating the inventory export off the rendering thread. It includes
//! distributed tracing support for cross-thread observability.

use crate::domain::error::{Result, StockroomError};
use crate::infrastructure::paths;
use crate::storage::{JsonStorage, RecordSource};
use crate::worker::{LoadReason, WorkerMessage, WorkerResponse};
use serde::{Deserialize, Serialize};
use zellij_tile::prelude::{PluginMessage, ZellijWorker};
use zellij_tile::shim::post_message_to_plugin;

/// Worker thread state for loading inventory snapshots.
///
/// This struct runs on a separate thread spawned by Zellij and processes
/// messages sent from the main plugin thread. The record source is opened
/// lazily on first message receipt.
#[derive(Serialize, Deserialize, Default)]
pub struct StockroomWorker {
    /// Record source, initialized lazily on first use.
    #[serde(skip)]
    source: Option<Box<dyn RecordSource>>,
}

impl std::fmt::Debug for StockroomWorker {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("StockroomWorker")
            .field("source", &self.source.as_ref().map(|s| s.location()))
            .finish()
    }
}

impl StockroomWorker {
    /// Creates a worker reading the export at the default location.
    #[must_use]
    pub fn new() -> Self {
        Self::with_source(Box::new(JsonStorage::new(paths::default_export_path())))
    }

    /// Creates a worker around an explicit record source.
    #[must_use]
    pub fn with_source(source: Box<dyn RecordSource>) -> Self {
        Self {
            source: Some(source),
        }
    }

    /// Returns a mutable reference to the record source, failing if not initialized.
    ///
    /// # Errors
    ///
    /// Returns an error if the source has not been opened yet.
    fn get_source(&mut self) -> Result<&mut Box<dyn RecordSource>> {
        self.source
            .as_mut()
            .ok_or_else(|| StockroomError::Worker("Record source not initialized".to_string()))
    }

    /// Helper for turning a storage result into the response union with
    /// consistent logging.
    fn handle_source_result<T, F>(operation: &str, result: Result<T>, on_success: F) -> WorkerResponse
    where
        F: FnOnce(T) -> WorkerResponse,
    {
        match result {
            Ok(value) => {
                tracing::debug!(operation = operation, "storage operation successful");
                on_success(value)
            }
            Err(e) => {
                tracing::debug!(operation = operation, error = %e, "storage operation failed");
                WorkerResponse::Error {
                    message: format!("{operation}: {e}"),
                }
            }
        }
    }

    /// Handles the `LoadDataset` message.
    fn handle_load_dataset(&mut self, reason: LoadReason) -> WorkerResponse {
        Self::handle_source_result(
            "load dataset",
            self.get_source().and_then(|source| source.load_dataset()),
            |dataset| {
                tracing::debug!(
                    reason = ?reason,
                    record_count = dataset.record_count(),
                    "dataset loaded"
                );
                WorkerResponse::DatasetLoaded { dataset }
            },
        )
    }

    /// Attaches the parent trace context from a message to the current thread.
    ///
    /// Returns a context guard that must be held for the duration of the operation.
    fn attach_parent_trace_context(message: &WorkerMessage) -> Option<opentelemetry::ContextGuard> {
        use opentelemetry::trace::{SpanContext, SpanId, TraceContextExt, TraceFlags, TraceId, TraceState};

        let trace_context = message.trace_context()?;

        let trace_id = TraceId::from_hex(&trace_context.trace_id).ok()?;
        let span_id = SpanId::from_hex(&trace_context.parent_span_id).ok()?;

        let span_context = SpanContext::new(
            trace_id,
            span_id,
            TraceFlags::SAMPLED,
            true,
            TraceState::default(),
        );

        let otel_context = opentelemetry::Context::current().with_remote_span_context(span_context);

        Some(otel_context.attach())
    }

    /// Processes a worker message and returns the appropriate response.
    ///
    /// Attaches the sender's trace context and creates a tracing span for the
    /// operation.
    pub fn handle_message(&mut self, message: WorkerMessage) -> WorkerResponse {
        let _context_guard = Self::attach_parent_trace_context(&message);

        let span = tracing::debug_span!("worker_handle_message", message_type = ?message);
        let _guard = span.entered();

        match message {
            WorkerMessage::LoadDataset { reason, .. } => self.handle_load_dataset(reason),
        }
    }
}

/// Initializes tracing for the worker thread.
///
/// Sets up the same tracing configuration as the main thread, ensuring logs
/// from both threads are written to the same file.
fn init_worker_tracing() {
    use crate::observability;
    use crate::Config;

    let config = Config::default();
    observability::init_tracing(&config);
}

/// Tracks whether worker tracing has been initialized.
static WORKER_TRACING_INITIALIZED: std::sync::atomic::AtomicBool =
    std::sync::atomic::AtomicBool::new(false);

/// Name of the IPC message carrying the export path to the worker.
pub const CONFIGURE_MESSAGE: &str = "stockroom:configure";

impl ZellijWorker<'_> for StockroomWorker {
    /// Handles incoming messages from the main plugin thread.
    ///
    /// 1. Initializes tracing on first message (once per worker lifetime)
    /// 2. Accepts a `stockroom:configure` message carrying the export path
    /// 3. Lazy-opens the default record source if still unset
    /// 4. Deserializes and processes the `WorkerMessage` payload
    /// 5. Serializes and sends the response back to the main thread
    fn on_message(&mut self, message: String, payload: String) {
        if !WORKER_TRACING_INITIALIZED.load(std::sync::atomic::Ordering::Relaxed) {
            init_worker_tracing();
            WORKER_TRACING_INITIALIZED.store(true, std::sync::atomic::Ordering::Relaxed);
        }

        if message == CONFIGURE_MESSAGE {
            tracing::debug!(export_path = %payload, "worker configured");
            self.source = Some(Box::new(JsonStorage::new(payload.into())));
            return;
        }

        if self.source.is_none() {
            *self = Self::new();
        }

        let response = match serde_json::from_str::<WorkerMessage>(&payload) {
            Ok(worker_message) => self.handle_message(worker_message),
            Err(e) => {
                tracing::debug!(error = %e, "failed to deserialize worker message");
                WorkerResponse::Error {
                    message: format!("malformed worker message: {e}"),
                }
            }
        };

        match serde_json::to_string(&response) {
            Ok(payload) => {
                let plugin_message = PluginMessage {
                    name: message,
                    payload,
                    worker_name: None,
                };
                post_message_to_plugin(plugin_message);
            }
            Err(e) => {
                tracing::debug!(error = %e, "failed to serialize worker response");
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Dataset, Item};
    use crate::domain::records::Condition;

    struct FixedSource(Result<Dataset>);

    impl RecordSource for FixedSource {
        fn load_dataset(&mut self) -> Result<Dataset> {
            match &self.0 {
                Ok(dataset) => Ok(dataset.clone()),
                Err(e) => Err(StockroomError::Storage(e.to_string())),
            }
        }

        fn location(&self) -> String {
            "memory".to_string()
        }
    }

    fn sample_dataset() -> Dataset {
        Dataset {
            items: vec![Item {
                id: "i-1".into(),
                name: "Centrifuge".into(),
                category: "Lab".into(),
                quantity: 2,
                unit: None,
                department_id: None,
                condition: Condition::New,
            }],
            ..Dataset::default()
        }
    }

    #[test]
    fn load_returns_the_dataset() {
        let mut worker = StockroomWorker::with_source(Box::new(FixedSource(Ok(sample_dataset()))));
        let response = worker.handle_message(WorkerMessage::load_dataset(LoadReason::Startup));
        assert_eq!(response, WorkerResponse::DatasetLoaded { dataset: sample_dataset() });
    }

    #[test]
    fn load_failure_becomes_an_error_response() {
        let mut worker = StockroomWorker::with_source(Box::new(FixedSource(Err(
            StockroomError::Storage("export not found".into()),
        ))));
        let response = worker.handle_message(WorkerMessage::load_dataset(LoadReason::Manual));

        let WorkerResponse::Error { message } = response else {
            panic!("expected an error response");
        };
        assert!(message.starts_with("load dataset: "));
        assert!(message.contains("export not found"));
    }

    #[test]
    fn unopened_source_is_a_worker_error() {
        let mut worker = StockroomWorker::default();
        let response = worker.handle_message(WorkerMessage::load_dataset(LoadReason::Manual));
        assert_eq!(
            response,
            WorkerResponse::Error {
                message: "load dataset: Worker communication error: Record source not initialized"
                    .to_string()
            }
        );
    }
}
