//! OpenWeatherMap adapter for geocoding and current weather.

use crate::config::OpenWeatherConfig;
use crate::models::{CurrentConditions, GeocodedPlace};
use crate::services::upstream_client::UpstreamClient;
use crate::services::weather_provider::{ProviderError, WeatherProvider};
use async_trait::async_trait;
use serde::Deserialize;
use url::Url;

/// One match from the direct geocoding endpoint
#[derive(Debug, Deserialize)]
struct GeocodeMatch {
    name: String,
    lat: f64,
    lon: f64,
    country: Option<String>,
    state: Option<String>,
}

/// Subset of the `/weather` response used by the service
#[derive(Debug, Default, Deserialize)]
struct OpenWeatherResponse {
    main: Option<MainReadings>,
    wind: Option<WindReadings>,
    #[serde(default)]
    weather: Vec<WeatherCondition>,
}

#[derive(Debug, Deserialize)]
struct MainReadings {
    temp: Option<f64>,
    humidity: Option<f64>,
}

#[derive(Debug, Deserialize)]
struct WindReadings {
    speed: Option<f64>,
}

#[derive(Debug, Deserialize)]
struct WeatherCondition {
    description: Option<String>,
}

impl From<GeocodeMatch> for GeocodedPlace {
    fn from(m: GeocodeMatch) -> Self {
        Self {
            lat: m.lat,
            lon: m.lon,
            name: m.name,
            state: m.state,
            country: m.country,
        }
    }
}

impl From<OpenWeatherResponse> for CurrentConditions {
    fn from(data: OpenWeatherResponse) -> Self {
        let (temp_kelvin, humidity) = data
            .main
            .map(|main| (main.temp, main.humidity))
            .unwrap_or_default();

        Self {
            temp_kelvin,
            humidity,
            wind_speed: data.wind.and_then(|wind| wind.speed),
            description: data
                .weather
                .into_iter()
                .next()
                .and_then(|condition| condition.description),
        }
    }
}

/// Weather provider backed by the OpenWeatherMap HTTP APIs
#[derive(Clone)]
pub struct OpenWeatherClient {
    client: UpstreamClient,
    api_key: String,
    geocode_base_url: String,
    weather_base_url: String,
}

impl OpenWeatherClient {
    /// Create a client; fails when no API key is configured
    pub fn new(config: &OpenWeatherConfig, client: UpstreamClient) -> Result<Self, ProviderError> {
        let api_key = config.api_key.clone().ok_or(ProviderError::MissingApiKey)?;

        Ok(Self {
            client,
            api_key,
            geocode_base_url: config.geocode_base_url.trim_end_matches('/').to_string(),
            weather_base_url: config.weather_base_url.trim_end_matches('/').to_string(),
        })
    }

    fn geocode_url(&self, query: &str) -> Result<Url, url::ParseError> {
        Url::parse_with_params(
            &format!("{}/direct", self.geocode_base_url),
            &[("q", query), ("limit", "1"), ("appid", self.api_key.as_str())],
        )
    }

    fn weather_url(&self, lat: f64, lon: f64) -> Result<Url, url::ParseError> {
        Url::parse_with_params(
            &format!("{}/weather", self.weather_base_url),
            &[
                ("lat", lat.to_string().as_str()),
                ("lon", lon.to_string().as_str()),
                ("appid", self.api_key.as_str()),
                ("units", "standard"),
            ],
        )
    }
}

#[async_trait]
impl WeatherProvider for OpenWeatherClient {
    async fn geocode(&self, query: &str) -> Result<GeocodedPlace, ProviderError> {
        let url = self.geocode_url(query)?;
        let matches: Vec<GeocodeMatch> = self.client.get_json(url).await?;

        matches
            .into_iter()
            .next()
            .map(GeocodedPlace::from)
            .ok_or(ProviderError::NotFound)
    }

    async fn current_weather(
        &self,
        lat: f64,
        lon: f64,
    ) -> Result<CurrentConditions, ProviderError> {
        let url = self.weather_url(lat, lon)?;
        let data: OpenWeatherResponse = self.client.get_json(url).await?;
        Ok(data.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::upstream_client::UpstreamClientConfig;

    fn client() -> OpenWeatherClient {
        let config = OpenWeatherConfig::with_base_url("test-key", "https://api.test.com");
        let upstream = UpstreamClient::new(UpstreamClientConfig::default(), None).unwrap();
        OpenWeatherClient::new(&config, upstream).unwrap()
    }

    #[test]
    fn test_missing_api_key() {
        let upstream = UpstreamClient::new(UpstreamClientConfig::default(), None).unwrap();
        let result = OpenWeatherClient::new(&OpenWeatherConfig::default(), upstream);
        assert!(matches!(result, Err(ProviderError::MissingApiKey)));
    }

    #[test]
    fn test_geocode_url_encodes_query() {
        let url = client().geocode_url("Boston, MA").unwrap();
        assert_eq!(url.path(), "/geo/1.0/direct");
        let pairs: Vec<(String, String)> = url.query_pairs().into_owned().collect();
        assert!(pairs.contains(&("q".into(), "Boston, MA".into())));
        assert!(pairs.contains(&("limit".into(), "1".into())));
        assert!(pairs.contains(&("appid".into(), "test-key".into())));
    }

    #[test]
    fn test_weather_url_requests_kelvin() {
        let url = client().weather_url(42.36, -71.06).unwrap();
        assert_eq!(url.path(), "/data/2.5/weather");
        let query = url.query().unwrap();
        assert!(query.contains("lat=42.36"));
        assert!(query.contains("lon=-71.06"));
        assert!(query.contains("units=standard"));
    }

    #[test]
    fn test_weather_response_conversion() {
        let data: OpenWeatherResponse = serde_json::from_value(serde_json::json!({
            "main": { "temp": 295.15, "humidity": 48 },
            "wind": { "speed": 2.5 },
            "weather": [{ "main": "Clear", "description": "clear sky" }],
            "name": "Ignored"
        }))
        .unwrap();

        let conditions = CurrentConditions::from(data);
        assert_eq!(conditions.temp_kelvin, Some(295.15));
        assert_eq!(conditions.humidity, Some(48.0));
        assert_eq!(conditions.wind_speed, Some(2.5));
        assert_eq!(conditions.description.as_deref(), Some("clear sky"));
    }

    #[test]
    fn test_sparse_weather_response() {
        let data: OpenWeatherResponse = serde_json::from_str("{}").unwrap();
        assert_eq!(CurrentConditions::from(data), CurrentConditions::default());
    }
}
