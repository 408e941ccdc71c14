// Private module declaration
mod server;

use prometheus::{HistogramOpts, HistogramVec, IntCounterVec, IntGauge, Opts, Registry};

use crate::domain::order::ErrorKind;

// Re-export for public API
pub use server::metrics_handler;

// ============================================================================
// Metrics Module - Prometheus metrics for observability
// ============================================================================
//
// Provides metrics for:
// - Requests per operation and outcome
// - Rejections per operation and error kind
// - Per-operation handling latency
// - Number of orders currently stored
//
// All metrics are registered with Prometheus and can be scraped via /metrics
// ============================================================================

/// Central metrics registry for the orders service
pub struct Metrics {
    registry: Registry,

    pub requests_total: IntCounterVec,
    pub rejections_total: IntCounterVec,
    pub request_duration: HistogramVec,
    pub orders_stored: IntGauge,
}

impl Metrics {
    pub fn new() -> anyhow::Result<Self> {
        let registry = Registry::new();

        let requests_total = IntCounterVec::new(
            Opts::new("orders_requests_total", "Total order requests handled"),
            &["operation", "outcome"],
        )?;
        registry.register(Box::new(requests_total.clone()))?;

        let rejections_total = IntCounterVec::new(
            Opts::new("orders_rejections_total", "Order requests rejected by validation"),
            &["operation", "kind"],
        )?;
        registry.register(Box::new(rejections_total.clone()))?;

        let request_duration = HistogramVec::new(
            HistogramOpts::new("orders_request_duration_seconds", "Order request handling duration")
                .buckets(vec![0.0001, 0.0005, 0.001, 0.005, 0.01, 0.05, 0.1]),
            &["operation"],
        )?;
        registry.register(Box::new(request_duration.clone()))?;

        let orders_stored = IntGauge::new("orders_stored", "Orders currently in the store")?;
        registry.register(Box::new(orders_stored.clone()))?;

        Ok(Self {
            registry,
            requests_total,
            rejections_total,
            request_duration,
            orders_stored,
        })
    }

    /// Get the Prometheus registry for exposing metrics via HTTP
    pub fn registry(&self) -> &Registry {
        &self.registry
    }

    /// Helper to record one handled request
    pub fn record_request(&self, operation: &str, duration_secs: f64, rejected: Option<ErrorKind>) {
        match rejected {
            None => {
                self.requests_total.with_label_values(&[operation, "success"]).inc();
            }
            Some(kind) => {
                self.requests_total.with_label_values(&[operation, "rejected"]).inc();
                self.rejections_total
                    .with_label_values(&[operation, kind.as_str()])
                    .inc();
            }
        }
        self.request_duration
            .with_label_values(&[operation])
            .observe(duration_secs);
    }

    /// Helper to track store size
    pub fn set_orders_stored(&self, count: usize) {
        self.orders_stored.set(i64::try_from(count).unwrap_or(i64::MAX));
    }

    /// Render every registered metric in the Prometheus text format.
    pub fn render(&self) -> anyhow::Result<String> {
        use prometheus::{Encoder, TextEncoder};

        let encoder = TextEncoder::new();
        let mut buffer = Vec::new();
        encoder.encode(&self.registry.gather(), &mut buffer)?;
        Ok(String::from_utf8(buffer)?)
    }
}
