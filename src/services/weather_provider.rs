//! The external geocoding and weather capability.

use crate::models::{CurrentConditions, GeocodedPlace};
use crate::services::upstream_client::UpstreamError;
use async_trait::async_trait;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ProviderError {
    #[error("No location matched the query")]
    NotFound,

    #[error("Upstream request failed: {0}")]
    Upstream(#[from] UpstreamError),

    #[error("Weather API key is not configured")]
    MissingApiKey,

    #[error("Invalid provider URL: {0}")]
    InvalidUrl(#[from] url::ParseError),
}

/// Resolves place names and reports current conditions.
///
/// Implementations make a single attempt per call; policy such as fallback
/// queries lives with the caller.
#[async_trait]
pub trait WeatherProvider: Send + Sync {
    /// Best match for free-text `query`, or [`ProviderError::NotFound`]
    async fn geocode(&self, query: &str) -> Result<GeocodedPlace, ProviderError>;

    /// Current readings at the given coordinates
    async fn current_weather(&self, lat: f64, lon: f64)
    -> Result<CurrentConditions, ProviderError>;
}
