//! Worker thread message types for cross-thread communication.
//!
//! This module defines the request and response protocol between the main plugin
//! thread and the background worker thread that reads the inventory export. It
//! also implements distributed tracing context propagation across thread boundaries.
//!
//! A load request always resolves to exactly one [`WorkerResponse`]: either the
//! dataset or an error message, never both.

use crate::domain::Dataset;
use serde::{Deserialize, Serialize};

/// Distributed tracing context for cross-thread span propagation.
///
/// Captures the current trace and span IDs from OpenTelemetry to maintain
/// trace continuity when passing messages to the worker thread.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TraceContext {
    /// OpenTelemetry trace ID as a hex string.
    pub trace_id: String,

    /// Parent span ID for linking spans across threads.
    pub parent_span_id: String,
}

impl TraceContext {
    /// Creates a trace context from the current tracing span.
    ///
    /// Returns `None` if the current span context is invalid or not sampled,
    /// which is always the case when no subscriber is installed.
    pub fn from_current() -> Option<Self> {
        use opentelemetry::trace::TraceContextExt;
        use tracing_opentelemetry::OpenTelemetrySpanExt;

        let span = tracing::Span::current();

        let otel_context = span.context();
        let span_ref = otel_context.span();
        let span_context = span_ref.span_context();

        if span_context.is_valid() {
            let trace_id_str = format!("{:032x}", span_context.trace_id());
            let parent_span_id_str = format!("{:016x}", span_context.span_id());

            tracing::debug!(
                trace_id = %trace_id_str,
                parent_span_id = %parent_span_id_str,
                "capturing trace context"
            );

            Some(Self {
                trace_id: trace_id_str,
                parent_span_id: parent_span_id_str,
            })
        } else {
            tracing::debug!("span context is not valid");
            None
        }
    }
}

/// Macro to generate builder methods for `WorkerMessage` variants.
///
/// Generates convenience constructors that automatically attach the current
/// trace context to each message variant.
macro_rules! worker_message_builders {
    (
        $(
            $builder_name:ident($variant:ident { $($field:ident: $ty:ty),* $(,)? })
        ),* $(,)?
    ) => {
        impl WorkerMessage {
            $(
                #[doc = concat!("Create a ", stringify!($variant), " message with current trace context")]
                pub fn $builder_name($($field: $ty),*) -> Self {
                    Self::$variant {
                        $($field,)*
                        trace_context: TraceContext::from_current(),
                    }
                }
            )*
        }
    };
}

worker_message_builders! {
    load_dataset(LoadDataset { reason: LoadReason }),
}

/// Why a load was requested; recorded on the worker span.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum LoadReason {
    /// First load after permissions were granted.
    Startup,
    /// The user asked for a reload.
    Manual,
    /// A filesystem event suggested the export changed.
    FileChanged,
}

/// Messages sent from the main thread to the worker thread.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum WorkerMessage {
    /// Read the full inventory snapshot.
    LoadDataset {
        /// What triggered the load.
        reason: LoadReason,

        /// Trace context for linking spans across threads.
        #[serde(skip_serializing_if = "Option::is_none", default)]
        trace_context: Option<TraceContext>,
    },
}

impl WorkerMessage {
    /// Trace context carried by the message, if any.
    #[must_use]
    pub const fn trace_context(&self) -> Option<&TraceContext> {
        match self {
            Self::LoadDataset { trace_context, .. } => trace_context.as_ref(),
        }
    }
}

/// Responses sent from the worker thread back to the main thread.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum WorkerResponse {
    /// The snapshot was read and validated.
    DatasetLoaded {
        /// Every table of the export.
        dataset: Dataset,
    },

    /// An error occurred during the worker operation.
    Error {
        /// Human-readable error message.
        message: String,
    },
}
