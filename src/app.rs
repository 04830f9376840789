//! Application state shared by every worker.

use crate::{
    config::{AppConfig, MetricsConfig, OpenWeatherConfig, SecurityHeadersConfig},
    services::{
        AppMetrics, LookupService, OpenWeatherClient, ProviderError, UpstreamClient,
        UpstreamClientConfig,
    },
    store::{HistoryStore, StoreError},
};
use std::sync::Arc;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum StartupError {
    #[error("failed to open history database: {0}")]
    Store(#[from] StoreError),

    #[error("failed to register metrics: {0}")]
    Metrics(#[from] prometheus::Error),

    #[error("failed to build HTTP client: {0}")]
    HttpClient(#[from] reqwest::Error),
}

/// Everything `create_app` registers as app data.
///
/// `lookup` is `None` when no weather API key is configured; the batch
/// endpoint then answers with a configuration error.
#[derive(Clone)]
pub struct AppState {
    pub config: AppConfig,
    pub history: HistoryStore,
    pub lookup: Option<LookupService>,
    pub metrics: AppMetrics,
    pub metrics_config: MetricsConfig,
    pub security: SecurityHeadersConfig,
}

impl AppState {
    /// State with no weather provider and default middleware configuration
    pub fn new(config: AppConfig, history: HistoryStore, metrics: AppMetrics) -> Self {
        Self {
            config,
            history,
            lookup: None,
            metrics,
            metrics_config: MetricsConfig::default(),
            security: SecurityHeadersConfig::default(),
        }
    }

    pub fn with_lookup(mut self, lookup: LookupService) -> Self {
        self.lookup = Some(lookup);
        self
    }

    /// Build the full state from environment variables
    pub fn from_env() -> Result<Self, StartupError> {
        let config = AppConfig::from_env();
        let history = HistoryStore::open(&config.database_path)?;
        tracing::info!(path = %config.database_path, "Opened history database");

        let metrics = AppMetrics::new()?;
        let upstream = UpstreamClient::new(
            UpstreamClientConfig::from_env(),
            Some(metrics.upstream.clone()),
        )?;

        let lookup = match OpenWeatherClient::new(&OpenWeatherConfig::from_env(), upstream) {
            Ok(client) => Some(
                LookupService::new(Arc::new(client), config.lookup_concurrency)
                    .with_metrics(metrics.clone()),
            ),
            Err(ProviderError::MissingApiKey) => {
                tracing::error!(
                    "OPENWEATHER_API_KEY is not set; weather lookups will be rejected"
                );
                None
            }
            Err(e) => {
                tracing::error!(error = %e, "Weather provider misconfigured; lookups disabled");
                None
            }
        };

        Ok(Self {
            config,
            history,
            lookup,
            metrics,
            metrics_config: MetricsConfig::from_env(),
            security: SecurityHeadersConfig::from_env(),
        })
    }
}
