//! Tracer provider whose exporter appends OTLP JSON to a local file.
//!
//! The plugin runs inside the Zellij WASM sandbox with no network, so spans
//! go to `stockroom-otlp.json` in the data directory instead of a collector.

use super::file_writer::FileWriter;
use super::span_formatter::SpanFormatter;
use futures_util::future::BoxFuture;
use opentelemetry::trace::TraceError;
use opentelemetry_sdk::export::trace::{ExportResult, SpanData, SpanExporter};
use opentelemetry_sdk::resource::Resource;
use opentelemetry_sdk::trace::TracerProvider;
use std::path::PathBuf;
use std::sync::atomic::{AtomicBool, Ordering};

/// Writes each exported batch as one line of OTLP JSON.
#[derive(Debug)]
struct FileSpanExporter {
    writer: FileWriter,
    formatter: SpanFormatter,
    is_shutdown: AtomicBool,
}

impl FileSpanExporter {
    const fn new(file_path: PathBuf, resource: Resource, scope_name: &'static str) -> Self {
        Self {
            writer: FileWriter::new(file_path),
            formatter: SpanFormatter::new(resource, scope_name),
            is_shutdown: AtomicBool::new(false),
        }
    }
}

impl SpanExporter for FileSpanExporter {
    fn export(&mut self, batch: Vec<SpanData>) -> BoxFuture<'static, ExportResult> {
        if self.is_shutdown.load(Ordering::SeqCst) {
            return Box::pin(std::future::ready(Err(TraceError::from(
                "exporter is shut down",
            ))));
        }

        let line = self.formatter.format_batch(&batch).to_string();
        let result = self
            .writer
            .write_line(&line)
            .map_err(|e| TraceError::from(e.to_string()));

        Box::pin(std::future::ready(result))
    }

    fn shutdown(&mut self) {
        self.is_shutdown.store(true, Ordering::SeqCst);
    }

    // The resource is fixed at construction.
    fn set_resource(&mut self, _res: &Resource) {}
}

/// Builds a provider that exports every span as soon as it closes.
pub fn create_tracer_provider(
    file_path: PathBuf,
    resource: Resource,
    scope_name: &'static str,
) -> TracerProvider {
    let exporter = FileSpanExporter::new(file_path, resource.clone(), scope_name);

    TracerProvider::builder()
        .with_config(opentelemetry_sdk::trace::Config::default().with_resource(resource))
        .with_simple_exporter(exporter)
        .build()
}
