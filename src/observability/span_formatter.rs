//! OTLP JSON span formatter.
//!
//! Converts finished spans into OTLP (OpenTelemetry Protocol) JSON, one
//! document per exported batch, readable by OTLP collectors and viewers.
//!
//! ```json
//! {
//!   "resourceSpans": [{
//!     "resource": {
//!       "attributes": [{"key": "service.name", "value": {"stringValue": "Stockroom"}}]
//!     },
//!     "scopeSpans": [{
//!       "scope": {"name": "Stockroom"},
//!       "spans": [...]
//!     }]
//!   }]
//! }
//! ```

use opentelemetry::trace::{Event, Link, SpanId, SpanKind, Status};
use opentelemetry::{KeyValue, Value};
use opentelemetry_sdk::export::trace::SpanData;
use opentelemetry_sdk::resource::Resource;
use serde_json::{json, Value as JsonValue};
use std::time::{Duration, SystemTime, UNIX_EPOCH};

pub struct SpanFormatter {
    resource: Resource,
    scope_name: &'static str,
}

impl SpanFormatter {
    pub const fn new(resource: Resource, scope_name: &'static str) -> Self {
        Self {
            resource,
            scope_name,
        }
    }

    /// Formats a batch of spans as a single OTLP JSON document.
    pub fn format_batch(&self, batch: &[SpanData]) -> JsonValue {
        let resource_attrs: Vec<JsonValue> = self
            .resource
            .iter()
            .map(|(k, v)| json!({ "key": k.to_string(), "value": format_attribute_value(v) }))
            .collect();

        let spans: Vec<JsonValue> = batch.iter().map(format_span).collect();

        json!({
            "resourceSpans": [{
                "resource": { "attributes": resource_attrs },
                "scopeSpans": [{
                    "scope": { "name": self.scope_name },
                    "spans": spans
                }]
            }]
        })
    }
}

/// IDs as lowercase hex (32 chars for traces, 16 for spans), times as
/// nanosecond strings, an empty `parentSpanId` for root spans.
fn format_span(span: &SpanData) -> JsonValue {
    let (status_code, status_message) = format_status(&span.status);

    json!({
        "traceId": format!("{:032x}", span.span_context.trace_id()),
        "spanId": format!("{:016x}", span.span_context.span_id()),
        "parentSpanId": if span.parent_span_id == SpanId::INVALID {
            String::new()
        } else {
            format!("{:016x}", span.parent_span_id)
        },
        "name": span.name,
        "kind": span_kind_to_int(&span.span_kind),
        "startTimeUnixNano": unix_nanos(span.start_time),
        "endTimeUnixNano": unix_nanos(span.end_time),
        "attributes": format_attributes(&span.attributes),
        "events": span.events.iter().map(format_event).collect::<Vec<_>>(),
        "links": span.links.iter().map(format_link).collect::<Vec<_>>(),
        "status": {
            "code": status_code,
            "message": status_message,
        },
    })
}

fn unix_nanos(time: SystemTime) -> String {
    time.duration_since(UNIX_EPOCH)
        .unwrap_or(Duration::ZERO)
        .as_nanos()
        .to_string()
}

const fn span_kind_to_int(kind: &SpanKind) -> u8 {
    match kind {
        SpanKind::Internal => 1,
        SpanKind::Server => 2,
        SpanKind::Client => 3,
        SpanKind::Producer => 4,
        SpanKind::Consumer => 5,
    }
}

fn format_attributes(attributes: &[KeyValue]) -> Vec<JsonValue> {
    attributes
        .iter()
        .map(|kv| json!({ "key": kv.key.to_string(), "value": format_attribute_value(&kv.value) }))
        .collect()
}

/// OTLP carries 64-bit integers as strings; arrays fall back to their debug
/// rendering.
fn format_attribute_value(value: &Value) -> JsonValue {
    match value {
        Value::Bool(b) => json!({ "boolValue": b }),
        Value::I64(i) => json!({ "intValue": i.to_string() }),
        Value::F64(f) => json!({ "doubleValue": f }),
        Value::String(s) => json!({ "stringValue": s.to_string() }),
        Value::Array(_) => json!({ "stringValue": format!("{value:?}") }),
    }
}

fn format_event(event: &Event) -> JsonValue {
    json!({
        "timeUnixNano": unix_nanos(event.timestamp),
        "name": event.name,
        "attributes": format_attributes(&event.attributes),
    })
}

fn format_link(link: &Link) -> JsonValue {
    json!({
        "traceId": format!("{:032x}", link.span_context.trace_id()),
        "spanId": format!("{:016x}", link.span_context.span_id()),
        "attributes": format_attributes(&link.attributes),
    })
}

fn format_status(status: &Status) -> (u8, String) {
    match status {
        Status::Unset => (0, String::new()),
        Status::Ok => (1, String::new()),
        Status::Error { description } => (2, description.to_string()),
    }
}

impl std::fmt::Debug for SpanFormatter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SpanFormatter")
            .field("scope_name", &self.scope_name)
            .finish_non_exhaustive()
    }
}
