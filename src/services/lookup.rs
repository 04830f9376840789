//! Per-location resolution and batch fan-out.
//!
//! Each query is geocoded (with fallbacks), its current weather fetched, and
//! the readings shaped into a [`WeatherResult`]. Every failure is contained
//! in that location's [`WeatherEntry`]; a batch never fails as a whole.

use crate::models::{
    CurrentConditions, GeocodedPlace, LocationQuery, LookupFailure, WeatherEntry, WeatherResult,
};
use crate::services::{
    comfort,
    geocode_fallback::fallback_queries,
    metrics::AppMetrics,
    weather_provider::{ProviderError, WeatherProvider},
};
use futures::stream::{self, StreamExt};
use std::sync::Arc;
use thiserror::Error;
use tracing::{debug, info, warn};

/// Why a single location could not be resolved
#[derive(Debug, Error, PartialEq, Eq)]
pub enum LookupError {
    #[error("location not found")]
    NotFound,

    #[error("upstream failure: {0}")]
    Upstream(String),

    #[error("incomplete data from the weather service")]
    IncompleteData,
}

impl LookupError {
    /// Message shown next to the query in the batch response
    pub fn message_for(&self, query: &str) -> String {
        match self {
            LookupError::NotFound => format!(
                "Could not find location '{query}'. Check the spelling or add a state or country code."
            ),
            LookupError::Upstream(reason) => {
                format!("Could not fetch weather data for '{query}': {reason}.")
            }
            LookupError::IncompleteData => {
                "Incomplete data received from the weather service API.".to_string()
            }
        }
    }

    fn outcome(&self) -> &'static str {
        match self {
            LookupError::NotFound => "not_found",
            LookupError::Upstream(_) => "upstream_error",
            LookupError::IncompleteData => "incomplete_data",
        }
    }
}

impl From<ProviderError> for LookupError {
    fn from(err: ProviderError) -> Self {
        match err {
            ProviderError::NotFound => LookupError::NotFound,
            ProviderError::Upstream(e) => LookupError::Upstream(e.user_message()),
            ProviderError::MissingApiKey => {
                LookupError::Upstream("the weather API key is not configured".to_string())
            }
            ProviderError::InvalidUrl(_) => {
                LookupError::Upstream("the weather service URL is invalid".to_string())
            }
        }
    }
}

/// Resolves location queries against a [`WeatherProvider`]
#[derive(Clone)]
pub struct LookupService {
    provider: Arc<dyn WeatherProvider>,
    concurrency: usize,
    metrics: Option<AppMetrics>,
}

impl LookupService {
    /// `concurrency` bounds how many locations of one batch are in flight at once
    pub fn new(provider: Arc<dyn WeatherProvider>, concurrency: usize) -> Self {
        Self {
            provider,
            concurrency: concurrency.max(1),
            metrics: None,
        }
    }

    pub fn with_metrics(mut self, metrics: AppMetrics) -> Self {
        self.metrics = Some(metrics);
        self
    }

    /// Look up every query; the output has one entry per query, in input order
    pub async fn lookup_batch(&self, queries: &[LocationQuery]) -> Vec<WeatherEntry> {
        stream::iter(queries.iter().map(|query| self.lookup(query)))
            .buffered(self.concurrency)
            .collect()
            .await
    }

    /// Look up one query, folding any failure into the entry
    pub async fn lookup(&self, query: &LocationQuery) -> WeatherEntry {
        let outcome = self.fetch(query).await;

        if let Some(metrics) = &self.metrics {
            let label = outcome.as_ref().map_or_else(LookupError::outcome, |_| "success");
            metrics.record_lookup(label);
        }

        match outcome {
            Ok(result) => WeatherEntry::Success(result),
            Err(err) => {
                warn!(query = %query, error = %err, "Failed to get weather data");
                WeatherEntry::Failure(LookupFailure {
                    original_input: query.as_str().to_string(),
                    error: err.message_for(query.as_str()),
                })
            }
        }
    }

    async fn fetch(&self, query: &LocationQuery) -> Result<WeatherResult, LookupError> {
        let place = self.resolve_place(query.as_str()).await?;
        debug!(query = %query, lat = place.lat, lon = place.lon, "Fetching current weather");
        let conditions = self.provider.current_weather(place.lat, place.lon).await?;
        build_result(query, place, conditions)
    }

    /// Geocode `query`, trying fallback spellings only when nothing matched
    async fn resolve_place(&self, query: &str) -> Result<GeocodedPlace, LookupError> {
        info!(query = %query, "Attempting direct geocode");
        match self.provider.geocode(query).await {
            Ok(place) => return Ok(place),
            Err(ProviderError::NotFound) => {}
            Err(err) => return Err(err.into()),
        }

        for fallback in fallback_queries(query) {
            info!(query = %query, fallback = %fallback, "Attempting geocode fallback");
            match self.provider.geocode(&fallback).await {
                Ok(place) => return Ok(place),
                Err(ProviderError::NotFound) => {}
                Err(err) => warn!(fallback = %fallback, error = %err, "Geocode fallback failed"),
            }
        }

        Err(LookupError::NotFound)
    }
}

/// Shape raw readings into a result; the geocoder's naming wins over the weather API's
pub fn build_result(
    query: &LocationQuery,
    place: GeocodedPlace,
    conditions: CurrentConditions,
) -> Result<WeatherResult, LookupError> {
    let finite = |value: Option<f64>| value.filter(|v| v.is_finite());

    let (Some(temp_kelvin), Some(humidity), Some(wind_speed)) = (
        finite(conditions.temp_kelvin),
        finite(conditions.humidity),
        finite(conditions.wind_speed),
    ) else {
        return Err(LookupError::IncompleteData);
    };

    let city_name = place.name.trim().to_string();
    if city_name.is_empty() {
        return Err(LookupError::IncompleteData);
    }

    let weather_desc = conditions
        .description
        .map(|d| d.trim().to_string())
        .filter(|d| !d.is_empty())
        .unwrap_or_else(|| "N/A".to_string());

    let humidity = humidity.clamp(0.0, 100.0);
    let wind_speed = wind_speed.max(0.0);
    let temp_celsius = comfort::kelvin_to_celsius(temp_kelvin);
    let evaluation = comfort::evaluate(Some(temp_celsius), Some(humidity), Some(wind_speed));

    Ok(WeatherResult {
        original_input: query.as_str().to_string(),
        city_name,
        state: place.state,
        country_code: place.country,
        weather_desc,
        temp_kelvin,
        temp_celsius,
        temp_fahrenheit: comfort::celsius_to_fahrenheit(temp_celsius),
        humidity: humidity.round() as u8,
        wind_speed,
        comfort_index: evaluation.map(|(index, _)| index),
        comfort_level: evaluation.map(|(_, level)| level),
    })
}
