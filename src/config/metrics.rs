//! Metrics configuration.

use std::env;

/// Configuration for Prometheus metrics exposure
#[derive(Clone, Debug)]
pub struct MetricsConfig {
    /// When false, `/api/metrics` answers 503
    pub enabled: bool,
}

impl Default for MetricsConfig {
    fn default() -> Self {
        Self { enabled: true }
    }
}

impl MetricsConfig {
    /// Load configuration from environment variables, falling back to defaults
    pub fn from_env() -> Self {
        let enabled = env::var("METRICS_ENABLED")
            .map(|v| !matches!(v.trim().to_lowercase().as_str(), "false" | "0" | "off"))
            .unwrap_or(true);

        Self { enabled }
    }
}
