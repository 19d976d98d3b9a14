//! OpenTelemetry metrics for the synthetic workload.
//!
//! Key metrics:
//! - total_delay_slow_endpoint: accumulated seconds spent in /slow
//! - simulated_errors_total: count of injected faults
//! - error_endpoint_success_total: count of successful /error calls

use opentelemetry::metrics::{Counter, Meter};
use opentelemetry::global;
use opentelemetry_sdk::metrics::{ManualReader, SdkMeterProvider};
use std::sync::OnceLock;

/// Global metrics instance.
static METRICS: OnceLock<Metrics> = OnceLock::new();

/// Pulsecheck metrics registry.
#[derive(Debug)]
pub struct Metrics {
    /// Accumulated delay served by the slow endpoint, in seconds.
    pub slow_delay_total: Counter<f64>,
    /// Total number of simulated errors.
    pub simulated_errors: Counter<u64>,
    /// Total number of successful error-endpoint calls.
    pub error_endpoint_successes: Counter<u64>,
}

impl Metrics {
    /// Create a new metrics registry from a meter.
    fn new(meter: &Meter) -> Self {
        Self {
            slow_delay_total: meter
                .f64_counter("total_delay_slow_endpoint")
                .with_description("Total time spent waiting for slow endpoint to answer")
                .with_unit("s")
                .init(),
            simulated_errors: meter
                .u64_counter("simulated_errors_total")
                .with_description("Total count of simulated errors")
                .with_unit("1")
                .init(),
            error_endpoint_successes: meter
                .u64_counter("error_endpoint_success_total")
                .with_description("Total count of successful requests")
                .with_unit("1")
                .init(),
        }
    }
}

/// Initialize the metrics system.
///
/// This should be called once at startup. Subsequent calls are ignored.
///
/// When no endpoint is configured the service keeps running in a degraded
/// (unexported) mode: instruments record into a manual reader that is never
/// scraped, and a warning is logged.
///
/// # Arguments
///
/// * `otel_endpoint` - Optional OTLP endpoint for metrics export
pub fn init_metrics_with_endpoint(otel_endpoint: Option<&str>) {
    METRICS.get_or_init(|| {
        if let Some(endpoint) = otel_endpoint {
            // Use OTLP exporter when endpoint is configured
            use opentelemetry_otlp::{Protocol, WithExportConfig};

            let exporter = opentelemetry_otlp::new_exporter()
                .tonic()
                .with_endpoint(endpoint)
                .with_protocol(Protocol::Grpc);

            match opentelemetry_otlp::new_pipeline()
                .metrics(opentelemetry_sdk::runtime::Tokio)
                .with_exporter(exporter)
                .with_period(std::time::Duration::from_secs(10))
                .build()
            {
                Ok(provider) => {
                    global::set_meter_provider(provider);
                    tracing::info!(endpoint, "OTLP metrics exporter configured");
                }
                Err(e) => {
                    tracing::warn!(error = %e, "Failed to create OTLP exporter, using no-op metrics");
                    let reader = ManualReader::builder().build();
                    let provider = SdkMeterProvider::builder().with_reader(reader).build();
                    global::set_meter_provider(provider);
                }
            }
        } else {
            tracing::warn!("No telemetry endpoint configured; metrics are recorded but not exported");
            let reader = ManualReader::builder().build();
            let provider = SdkMeterProvider::builder().with_reader(reader).build();
            global::set_meter_provider(provider);
        }

        let meter = global::meter("pulsecheck");
        Metrics::new(&meter)
    });
}

/// Initialize the metrics system without OTLP export.
///
/// This should be called once at startup. Subsequent calls are ignored.
pub fn init_metrics() {
    init_metrics_with_endpoint(None);
}

/// Get the global metrics instance.
///
/// Panics if metrics have not been initialized.
pub fn metrics() -> &'static Metrics {
    METRICS
        .get()
        .expect("metrics not initialized - call init_metrics() first")
}

/// Record delay served by the slow endpoint.
pub fn record_slow_delay(delay_seconds: f64) {
    if let Some(m) = METRICS.get() {
        m.slow_delay_total.add(delay_seconds, &[]);
    }
}

/// Record a simulated error.
pub fn record_simulated_error() {
    if let Some(m) = METRICS.get() {
        m.simulated_errors.add(1, &[]);
    }
}

/// Record a successful error-endpoint call.
pub fn record_error_endpoint_success() {
    if let Some(m) = METRICS.get() {
        m.error_endpoint_successes.add(1, &[]);
    }
}
