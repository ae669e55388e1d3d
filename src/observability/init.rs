//! Tracing subscriber setup: `tracing` macros → OpenTelemetry → trace file.

use super::tracer;
use crate::Config;
use opentelemetry::trace::TracerProvider as _;
use opentelemetry_sdk::resource::Resource;
use tracing_opentelemetry::OpenTelemetryLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Service and instrumentation scope name on every exported span.
pub const SERVICE_NAME: &str = "Stockroom";

/// File name of the trace file inside the data directory.
pub const TRACE_FILE_NAME: &str = "stockroom-otlp.json";

/// Level used when the plugin configuration sets none.
pub const DEFAULT_TRACE_LEVEL: &str = "info";

/// Installs the global subscriber, filtered by `config.trace_level`
/// (an `EnvFilter` directive such as `"debug"` or `"stockroom=trace"`).
///
/// Traces go to `~/.local/share/zellij/stockroom/stockroom-otlp.json`, seen
/// from the sandbox under `/host`. Tracing is optional: if the directory
/// cannot be created, or a subscriber is already installed, this does
/// nothing. An unparsable directive falls back to the default level.
///
/// # Example
///
/// ```rust,no_run
/// use stockroom::observability::init_tracing;
/// use stockroom::Config;
///
/// let config = Config {
///     trace_level: Some("debug".to_string()),
///     ..Default::default()
/// };
/// init_tracing(&config);
///
/// tracing::debug!("tracing is now active");
/// ```
pub fn init_tracing(config: &Config) {
    let level = config.trace_level.as_deref().unwrap_or(DEFAULT_TRACE_LEVEL);
    let filter =
        EnvFilter::try_new(level).unwrap_or_else(|_| EnvFilter::new(DEFAULT_TRACE_LEVEL));

    let data_dir = crate::infrastructure::get_data_dir();
    if std::fs::create_dir_all(&data_dir).is_err() {
        return;
    }

    let resource = Resource::new(vec![opentelemetry::KeyValue::new(
        "service.name",
        SERVICE_NAME,
    )]);

    let provider =
        tracer::create_tracer_provider(data_dir.join(TRACE_FILE_NAME), resource, SERVICE_NAME);
    let otel_layer = OpenTelemetryLayer::new(provider.tracer(SERVICE_NAME));

    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(otel_layer)
        .try_init();
}
