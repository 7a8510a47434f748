//! Gateway metrics.
//!
//! Available with the `metrics` feature.

use opentelemetry::{
    KeyValue, global,
    metrics::{Counter, Histogram, Meter},
};
use tracing::debug;

/// Per-task counters and backend latency.
#[derive(Clone)]
pub struct GatewayMetrics {
    /// Meter handle kept alive for metric instruments
    _meter: Meter,
    /// Tasks that produced an envelope
    pub tasks: Counter<u64>,
    /// Tasks that failed, labelled by failure category
    pub failures: Counter<u64>,
    /// Backend call duration in seconds
    pub backend_latency: Histogram<f64>,
}

impl GatewayMetrics {
    /// Create new gateway metrics on the global meter provider.
    pub fn new() -> Self {
        debug!("Getting global meter for parley_gateway");
        let meter = global::meter("parley_gateway");

        let tasks = meter
            .u64_counter("gateway.tasks")
            .with_description("Tasks completed")
            .build();

        let failures = meter
            .u64_counter("gateway.failures")
            .with_description("Tasks failed")
            .build();

        let backend_latency = meter
            .f64_histogram("gateway.backend_latency")
            .with_unit("seconds")
            .with_description("Inference backend call duration")
            .build();

        debug!("GatewayMetrics instruments created");
        Self {
            _meter: meter,
            tasks,
            failures,
            backend_latency,
        }
    }

    /// Record a task that produced an envelope.
    pub fn record_success(&self, task: &str, latency_secs: f64) {
        let labels = &[KeyValue::new("task", task.to_string())];
        self.tasks.add(1, labels);
        self.backend_latency.record(latency_secs, labels);
    }

    /// Record a failed task.
    pub fn record_failure(&self, task: &str, category: &'static str) {
        let labels = &[
            KeyValue::new("task", task.to_string()),
            KeyValue::new("category", category),
        ];
        self.failures.add(1, labels);
    }
}

impl Default for GatewayMetrics {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for GatewayMetrics {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GatewayMetrics").finish_non_exhaustive()
    }
}
