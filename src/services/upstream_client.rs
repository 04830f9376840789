//! HTTP client for third-party APIs with timeouts, optional retries, and metrics.
//!
//! One attempt is made by default. Retries, when enabled, use exponential
//! backoff with jitter and only fire for timeouts, connection failures, and
//! the configured status codes.

use crate::utils::redact::redact_url_secrets;
use prometheus::{CounterVec, HistogramOpts, HistogramVec, Opts, Registry};
use reqwest::Client;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use std::time::{Duration, Instant};
use tokio_retry::{RetryIf, strategy::ExponentialBackoff};
use tracing::{debug, error, warn};
use url::Url;

/// Configuration for the upstream HTTP client
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpstreamClientConfig {
    /// Whole-request timeout (in seconds)
    pub timeout_seconds: u64,

    /// Connection timeout (in seconds)
    pub connect_timeout_seconds: u64,

    /// Retry configuration
    pub retry: RetryConfig,

    /// Log every request outcome, not only failures
    pub enable_detailed_logging: bool,
}

/// Retry configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RetryConfig {
    /// Retries after the first attempt; 0 disables retrying
    pub max_attempts: usize,

    /// Initial retry delay in milliseconds
    pub initial_delay_ms: u64,

    /// Maximum retry delay in milliseconds
    pub max_delay_ms: u64,

    /// Retry on these HTTP status codes
    pub retry_on_status: Vec<u16>,
}

impl Default for UpstreamClientConfig {
    fn default() -> Self {
        Self {
            timeout_seconds: 10,
            connect_timeout_seconds: 3,
            retry: RetryConfig::default(),
            enable_detailed_logging: true,
        }
    }
}

impl Default for RetryConfig {
    fn default() -> Self {
        Self {
            max_attempts: 0,
            initial_delay_ms: 100,
            max_delay_ms: 2000,
            retry_on_status: vec![429, 500, 502, 503, 504],
        }
    }
}

/// Metrics for upstream HTTP calls
#[derive(Clone)]
pub struct UpstreamMetrics {
    /// Requests by destination host and outcome
    pub requests_total: CounterVec,

    /// Request duration by destination host, including retries
    pub request_duration_seconds: HistogramVec,

    /// Retry attempts by destination host
    pub retries_total: CounterVec,
}

impl UpstreamMetrics {
    /// Create the collectors and register them with `registry`
    pub fn new(registry: &Registry) -> Result<Self, prometheus::Error> {
        let requests_total = CounterVec::new(
            Opts::new(
                "upstream_requests_total",
                "Upstream API requests by destination and outcome",
            ),
            &["destination", "outcome"],
        )?;

        let request_duration_seconds = HistogramVec::new(
            HistogramOpts::new(
                "upstream_request_duration_seconds",
                "Duration of upstream API requests",
            )
            .buckets(vec![0.01, 0.05, 0.1, 0.25, 0.5, 1.0, 2.5, 5.0, 10.0]),
            &["destination"],
        )?;

        let retries_total = CounterVec::new(
            Opts::new("upstream_retries_total", "Upstream retry attempts by destination"),
            &["destination"],
        )?;

        registry.register(Box::new(requests_total.clone()))?;
        registry.register(Box::new(request_duration_seconds.clone()))?;
        registry.register(Box::new(retries_total.clone()))?;

        Ok(Self {
            requests_total,
            request_duration_seconds,
            retries_total,
        })
    }
}

/// Errors that can occur when calling an upstream API
#[derive(Debug, thiserror::Error)]
pub enum UpstreamError {
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("Request timed out")]
    Timeout,

    #[error("Upstream returned status {0}")]
    Status(u16),

    #[error("Failed to decode upstream response: {0}")]
    Decode(String),
}

impl UpstreamError {
    /// Get a user-friendly error message for API responses
    pub fn user_message(&self) -> String {
        match self {
            UpstreamError::Network(_) => "the weather service could not be reached".to_string(),
            UpstreamError::Timeout => "the weather service timed out".to_string(),
            UpstreamError::Status(401) => "the weather service rejected the API key".to_string(),
            UpstreamError::Status(status) => {
                format!("the weather service returned status {status}")
            }
            UpstreamError::Decode(_) => {
                "the weather service returned an unexpected response".to_string()
            }
        }
    }

    fn outcome(&self) -> &'static str {
        match self {
            UpstreamError::Network(_) => "network_error",
            UpstreamError::Timeout => "timeout",
            UpstreamError::Status(_) => "http_status",
            UpstreamError::Decode(_) => "decode_error",
        }
    }

    fn is_retryable(&self, retry_statuses: &[u16]) -> bool {
        match self {
            UpstreamError::Network(_) | UpstreamError::Timeout => true,
            UpstreamError::Status(status) => retry_statuses.contains(status),
            UpstreamError::Decode(_) => false,
        }
    }
}

/// Shared HTTP client; cheap to clone
#[derive(Clone)]
pub struct UpstreamClient {
    client: Client,
    config: UpstreamClientConfig,
    metrics: Option<UpstreamMetrics>,
}

impl UpstreamClient {
    /// Create a new client
    pub fn new(
        config: UpstreamClientConfig,
        metrics: Option<UpstreamMetrics>,
    ) -> Result<Self, reqwest::Error> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_seconds))
            .connect_timeout(Duration::from_secs(config.connect_timeout_seconds))
            .user_agent(concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION")))
            .build()?;

        Ok(Self {
            client,
            config,
            metrics,
        })
    }

    pub fn config(&self) -> &UpstreamClientConfig {
        &self.config
    }

    /// GET `url` and decode the JSON body into `T`
    pub async fn get_json<T: DeserializeOwned>(&self, url: Url) -> Result<T, UpstreamError> {
        let destination = url.host_str().unwrap_or("unknown").to_string();
        let loggable_url = redact_url_secrets(url.as_str());
        let timeout = Duration::from_secs(self.config.timeout_seconds);
        let retry_statuses = self.config.retry.retry_on_status.clone();

        let strategy = ExponentialBackoff::from_millis(self.config.retry.initial_delay_ms.max(1))
            .max_delay(Duration::from_millis(self.config.retry.max_delay_ms))
            .map(tokio_retry::strategy::jitter)
            .take(self.config.retry.max_attempts);

        let start = Instant::now();
        let mut attempt = 0usize;

        let result = RetryIf::start(
            strategy,
            || {
                attempt += 1;
                if attempt > 1 {
                    self.record_retry(&destination);
                    debug!(destination = %destination, attempt, "Retrying upstream request");
                }
                self.attempt(url.clone(), timeout)
            },
            |err: &UpstreamError| err.is_retryable(&retry_statuses),
        )
        .await;

        let duration = start.elapsed();

        match &result {
            Ok(_) => {
                self.record_outcome(&destination, "success", duration);
                if self.config.enable_detailed_logging {
                    debug!(
                        destination = %destination,
                        url = %loggable_url,
                        duration_ms = duration.as_millis(),
                        "Upstream request completed"
                    );
                }
            }
            Err(err) => {
                self.record_outcome(&destination, err.outcome(), duration);
                match err {
                    UpstreamError::Status(_) | UpstreamError::Decode(_) => warn!(
                        destination = %destination,
                        url = %loggable_url,
                        error = %err,
                        duration_ms = duration.as_millis(),
                        "Upstream request failed"
                    ),
                    _ => error!(
                        destination = %destination,
                        url = %loggable_url,
                        error = %err,
                        duration_ms = duration.as_millis(),
                        "Upstream request failed"
                    ),
                }
            }
        }

        let body = result?;
        serde_json::from_slice(&body).map_err(|e| UpstreamError::Decode(e.to_string()))
    }

    async fn attempt(&self, url: Url, timeout: Duration) -> Result<Vec<u8>, UpstreamError> {
        let response = match tokio::time::timeout(timeout, self.client.get(url).send()).await {
            Ok(Ok(response)) => response,
            Ok(Err(e)) if e.is_timeout() => return Err(UpstreamError::Timeout),
            Ok(Err(e)) => return Err(UpstreamError::Network(e.without_url())),
            Err(_) => return Err(UpstreamError::Timeout),
        };

        let status = response.status();
        if !status.is_success() {
            return Err(UpstreamError::Status(status.as_u16()));
        }

        let bytes = response
            .bytes()
            .await
            .map_err(|e| UpstreamError::Network(e.without_url()))?;
        Ok(bytes.to_vec())
    }

    fn record_outcome(&self, destination: &str, outcome: &str, duration: Duration) {
        if let Some(metrics) = &self.metrics {
            metrics
                .requests_total
                .with_label_values(&[destination, outcome])
                .inc();
            metrics
                .request_duration_seconds
                .with_label_values(&[destination])
                .observe(duration.as_secs_f64());
        }
    }

    fn record_retry(&self, destination: &str) {
        if let Some(metrics) = &self.metrics {
            metrics.retries_total.with_label_values(&[destination]).inc();
        }
    }
}
