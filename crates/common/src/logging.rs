//! Provides utilities to initialize logging and OpenTelemetry tracing.
use std::env;

use opentelemetry::{trace::TracerProvider, KeyValue};
use opentelemetry_otlp::WithExportConfig;
use opentelemetry_sdk::{trace::SdkTracerProvider, Resource};
use thiserror::Error;
use tracing::{info, Subscriber};
use tracing_subscriber::{
    layer::SubscriberExt, registry::LookupSpan, util::SubscriberInitExt, EnvFilter, Layer,
};

/// Environment variable name for the OTLP collector URL.
pub const OTLP_URL_ENVVAR: &str = "ROLLUP_BRIDGE_OTLP_URL";
/// Environment variable name for the service label, which is appended to the
/// whoami string.
pub const SVC_LABEL_ENVVAR: &str = "ROLLUP_BRIDGE_SVC_LABEL";

/// The filter used when `RUST_LOG` is unset or unparsable.
pub const DEFAULT_DIRECTIVE: &str = "info";

/// The tracer name reported to the OTLP collector.
const TRACER_NAME: &str = "rollup-bridge";

/// Errors that can occur while initializing logging.
#[derive(Debug, Error)]
pub enum LoggingError {
    /// The OTLP exporter could not be built.
    #[error("failed to build OTLP exporter: {0}")]
    Exporter(String),

    /// A global subscriber is already installed.
    #[error("failed to install subscriber: {0}")]
    Init(String),
}

/// Configuration for the logger.
#[derive(Debug, Clone)]
pub struct LoggerConfig {
    /// The whoami string, which is used to identify the service in logs.
    whoami: String,

    /// The OpenTelemetry URL for exporting traces.
    otel_url: Option<String>,
}

impl LoggerConfig {
    /// Creates a new empty instance with whoami set.
    pub const fn new(whoami: String) -> Self {
        Self {
            whoami,
            otel_url: None,
        }
    }

    /// Creates a new instance with the whoami string set to the provided
    /// string.
    pub fn with_base_name(s: &str) -> Self {
        Self::new(get_whoami_string(s))
    }

    /// Sets the opentelemetry URL to the provided string.
    pub fn set_otlp_url(&mut self, url: String) {
        self.otel_url = Some(url);
    }

    /// Returns the whoami string.
    pub fn whoami(&self) -> &str {
        &self.whoami
    }

    /// Returns the opentelemetry URL, if any.
    pub fn otlp_url(&self) -> Option<&str> {
        self.otel_url.as_deref()
    }
}

impl Default for LoggerConfig {
    fn default() -> Self {
        Self::with_base_name("(rollup-bridge)")
    }
}

/// Initializes the logging subsystem with the provided config.
///
/// Events go to stdout, filtered by `RUST_LOG` (falling back to [`DEFAULT_DIRECTIVE`]). Spans are
/// additionally exported over OTLP when the config carries a collector URL.
pub fn init(config: LoggerConfig) -> Result<(), LoggingError> {
    let otel = config
        .otlp_url()
        .map(|url| otlp_tracer_provider(config.whoami(), url))
        .transpose()?
        .map(|tp| tracing_opentelemetry::layer().with_tracer(tp.tracer(TRACER_NAME)));

    tracing_subscriber::registry()
        .with(stdout_layer(SourceLocation::from_env()))
        .with(otel)
        .try_init()
        .map_err(|e| LoggingError::Init(e.to_string()))?;

    info!(whoami = %config.whoami, otlp = config.otel_url.is_some(), "logging started");

    Ok(())
}

/// Which source location details are attached to stdout events.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
struct SourceLocation {
    file: bool,
    line_number: bool,
}

impl SourceLocation {
    /// Reads `LOG_FILE=1` and `LOG_LINE_NUM=1`.
    fn from_env() -> Self {
        Self::from_flags(env::var("LOG_FILE").ok(), env::var("LOG_LINE_NUM").ok())
    }

    fn from_flags(file: Option<String>, line_number: Option<String>) -> Self {
        let enabled = |flag: Option<String>| flag.is_some_and(|v| v == "1");

        Self {
            file: enabled(file),
            line_number: enabled(line_number),
        }
    }
}

fn env_filter() -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_DIRECTIVE))
}

fn stdout_layer<S>(location: SourceLocation) -> impl Layer<S>
where
    S: Subscriber + for<'span> LookupSpan<'span>,
{
    tracing_subscriber::fmt::layer()
        .compact()
        .event_format(
            tracing_subscriber::fmt::format()
                .compact()
                .with_file(location.file)
                .with_line_number(location.line_number),
        )
        .with_filter(env_filter())
}

fn otlp_tracer_provider(whoami: &str, url: &str) -> Result<SdkTracerProvider, LoggingError> {
    let resource = Resource::builder()
        .with_attribute(KeyValue::new("service.name", whoami.to_owned()))
        .build();

    let exporter = opentelemetry_otlp::SpanExporter::builder()
        .with_tonic()
        .with_endpoint(url)
        .build()
        .map_err(|e| LoggingError::Exporter(e.to_string()))?;

    Ok(SdkTracerProvider::builder()
        .with_resource(resource)
        .with_batch_exporter(exporter)
        .build())
}

/// Gets the OTLP URL from the standard envvar.
pub fn get_otlp_url_from_env() -> Option<String> {
    env::var(OTLP_URL_ENVVAR).ok()
}

/// Gets the service label from the standard envvar, which should be included
/// in the whoami string.
pub fn get_service_label_from_env() -> Option<String> {
    env::var(SVC_LABEL_ENVVAR).ok()
}

/// Computes a standard whoami string.
pub fn get_whoami_string(base: &str) -> String {
    whoami_with_label(base, get_service_label_from_env().as_deref())
}

fn whoami_with_label(base: &str, label: Option<&str>) -> String {
    match label {
        Some(label) => format!("{base}%{label}"),
        None => base.to_owned(),
    }
}
