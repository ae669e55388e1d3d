//! OpenTelemetry-based observability with file-based trace export.
//!
//! ```text
//! tracing macros → tracing-opentelemetry → SDK TracerProvider → FileSpanExporter → JSON lines
//! ```
//!
//! - **File export**: `~/.local/share/zellij/stockroom/stockroom-otlp.json`
//! - **Rotation**: at 10 MB, keeping `.json.1` to `.json.3`
//! - **Format**: one OTLP JSON document per line
//! - **Level**: the `trace_level` plugin option, `"info"` by default
//!
//! The worker continues the plugin's traces: messages carry a
//! `TraceContext` captured from the current span, so a reload shows up as one
//! trace across both threads.
//!
//! # Modules
//!
//! - [`init`]: Subscriber setup
//! - [`tracer`]: Tracer provider with the file exporter
//! - [`span_formatter`]: OTLP JSON serialization
//! - [`file_writer`]: Size-capped writer with numbered backups

mod file_writer;
mod init;
mod span_formatter;
mod tracer;

pub use init::{init_tracing, DEFAULT_TRACE_LEVEL, SERVICE_NAME, TRACE_FILE_NAME};
