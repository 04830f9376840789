//! Metrics collection and Prometheus integration service.

use crate::services::upstream_client::UpstreamMetrics;
use crate::utils::build_info;
use prometheus::{
    CounterVec, Gauge, HistogramOpts, HistogramVec, IntCounter, IntCounterVec, Opts, Registry,
    TextEncoder,
};
use std::time::{Duration, Instant};

/// Application metrics collector for Prometheus integration
#[derive(Clone)]
pub struct AppMetrics {
    pub registry: Registry,
    pub http_requests_total: CounterVec,
    pub http_request_duration_seconds: HistogramVec,
    pub location_lookups_total: IntCounterVec,
    pub history_records_written_total: IntCounter,
    pub app_uptime_seconds: Gauge,
    pub upstream: UpstreamMetrics,
    pub start_time: Instant,
}

impl AppMetrics {
    /// Create a new metrics collector with its own registry
    pub fn new() -> Result<Self, prometheus::Error> {
        let registry = Registry::new();

        // HTTP request counter by method, status, and route
        let http_requests_total = CounterVec::new(
            Opts::new("http_requests_total", "Total number of HTTP requests"),
            &["method", "status", "route"],
        )?;

        let http_request_duration_seconds = HistogramVec::new(
            HistogramOpts::new(
                "http_request_duration_seconds",
                "HTTP request duration in seconds",
            )
            .buckets(vec![
                0.005, 0.01, 0.025, 0.05, 0.1, 0.25, 0.5, 1.0, 2.5, 5.0, 10.0,
            ]),
            &["method", "route"],
        )?;

        // One increment per location in a batch
        let location_lookups_total = IntCounterVec::new(
            Opts::new(
                "location_lookups_total",
                "Location lookups by outcome (success, not_found, upstream_error, incomplete_data)",
            ),
            &["outcome"],
        )?;

        let history_records_written_total = IntCounter::new(
            "history_records_written_total",
            "Rows appended to the weather history table",
        )?;

        let app_uptime_seconds = Gauge::new("app_uptime_seconds", "Application uptime in seconds")?;

        let app_info = CounterVec::new(
            Opts::new("app_info", "Application information"),
            &["version", "commit", "build_time"],
        )?;

        registry.register(Box::new(http_requests_total.clone()))?;
        registry.register(Box::new(http_request_duration_seconds.clone()))?;
        registry.register(Box::new(location_lookups_total.clone()))?;
        registry.register(Box::new(history_records_written_total.clone()))?;
        registry.register(Box::new(app_uptime_seconds.clone()))?;
        registry.register(Box::new(app_info.clone()))?;

        let upstream = UpstreamMetrics::new(&registry)?;

        app_info
            .with_label_values(&[
                build_info::PACKAGE_VERSION,
                build_info::git_sha(),
                build_info::build_timestamp(),
            ])
            .inc();

        Ok(Self {
            registry,
            http_requests_total,
            http_request_duration_seconds,
            location_lookups_total,
            history_records_written_total,
            app_uptime_seconds,
            upstream,
            start_time: Instant::now(),
        })
    }

    /// Record an HTTP request with method, route, status, and duration
    pub fn record_request(&self, method: &str, route: &str, status: u16, duration: Duration) {
        if route == "/api/metrics" {
            // Scrapes would otherwise dominate the request counters
            return;
        }

        self.http_requests_total
            .with_label_values(&[method, &status.to_string(), route])
            .inc();

        self.http_request_duration_seconds
            .with_label_values(&[method, route])
            .observe(duration.as_secs_f64());
    }

    pub fn record_lookup(&self, outcome: &str) {
        self.location_lookups_total
            .with_label_values(&[outcome])
            .inc();
    }

    pub fn record_history_written(&self, rows: usize) {
        self.history_records_written_total
            .inc_by(u64::try_from(rows).unwrap_or(u64::MAX));
    }

    /// Update the application uptime gauge
    pub fn update_uptime(&self) {
        self.app_uptime_seconds
            .set(self.start_time.elapsed().as_secs_f64());
    }

    /// Render metrics in Prometheus text format
    pub fn render(&self) -> Result<String, prometheus::Error> {
        let encoder = TextEncoder::new();
        let metric_families = self.registry.gather();
        encoder.encode_to_string(&metric_families)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_includes_domain_counters() {
        let metrics = AppMetrics::new().unwrap();
        metrics.record_lookup("success");
        metrics.record_lookup("not_found");
        metrics.record_history_written(2);

        let rendered = metrics.render().unwrap();
        assert!(rendered.contains("location_lookups_total{outcome=\"success\"} 1"));
        assert!(rendered.contains("location_lookups_total{outcome=\"not_found\"} 1"));
        assert!(rendered.contains("history_records_written_total 2"));
        assert!(rendered.contains("app_info"));
    }

    #[test]
    fn test_metrics_route_is_not_recorded() {
        let metrics = AppMetrics::new().unwrap();
        metrics.record_request("GET", "/api/metrics", 200, Duration::from_millis(3));
        metrics.record_request("GET", "/history", 200, Duration::from_millis(3));

        let rendered = metrics.render().unwrap();
        assert!(!rendered.contains("route=\"/api/metrics\""));
        assert!(rendered.contains("route=\"/history\""));
    }
}
