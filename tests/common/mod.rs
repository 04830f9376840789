//! Shared fixtures for the integration tests.

#![allow(dead_code)]

use async_trait::async_trait;
use comfort_weather::{
    AppConfig, AppMetrics, AppState, HistoryStore, LookupService, ProviderError, WeatherProvider,
    models::{CurrentConditions, GeocodedPlace},
};
use std::collections::HashMap;
use std::sync::Arc;

/// In-memory provider keyed by geocode query
#[derive(Default)]
pub struct FakeProvider {
    places: HashMap<String, (GeocodedPlace, CurrentConditions)>,
}

impl FakeProvider {
    pub fn with_city(self, query: &str, name: &str, celsius: f64, humidity: f64, wind: f64) -> Self {
        self.with_conditions(
            query,
            name,
            CurrentConditions {
                temp_kelvin: Some(celsius + 273.15),
                humidity: Some(humidity),
                wind_speed: Some(wind),
                description: Some("clear sky".to_string()),
            },
        )
    }

    pub fn with_conditions(
        mut self,
        query: &str,
        name: &str,
        conditions: CurrentConditions,
    ) -> Self {
        // lat doubles as the lookup key for current_weather
        let lat = self.places.len() as f64;
        let place = GeocodedPlace {
            lat,
            lon: 0.0,
            name: name.to_string(),
            state: None,
            country: Some("US".to_string()),
        };
        self.places.insert(query.to_string(), (place, conditions));
        self
    }
}

#[async_trait]
impl WeatherProvider for FakeProvider {
    async fn geocode(&self, query: &str) -> Result<GeocodedPlace, ProviderError> {
        self.places
            .get(query)
            .map(|(place, _)| place.clone())
            .ok_or(ProviderError::NotFound)
    }

    async fn current_weather(
        &self,
        lat: f64,
        _lon: f64,
    ) -> Result<CurrentConditions, ProviderError> {
        self.places
            .values()
            .find(|(place, _)| place.lat == lat)
            .map(|(_, conditions)| conditions.clone())
            .ok_or(ProviderError::NotFound)
    }
}

/// State with an in-memory store and no weather provider
pub fn bare_state() -> AppState {
    AppState::new(
        AppConfig::default(),
        HistoryStore::open_in_memory().expect("in-memory store"),
        AppMetrics::new().expect("metrics"),
    )
}

/// State whose lookups are answered by `provider`
pub fn state_with(provider: FakeProvider) -> AppState {
    let state = bare_state();
    let lookup = LookupService::new(Arc::new(provider), 2).with_metrics(state.metrics.clone());
    state.with_lookup(lookup)
}
