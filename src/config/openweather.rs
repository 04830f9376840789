//! OpenWeatherMap endpoint configuration.

use std::env;

pub const DEFAULT_GEOCODE_URL: &str = "http://api.openweathermap.org/geo/1.0";
pub const DEFAULT_WEATHER_URL: &str = "https://api.openweathermap.org/data/2.5";

/// Credentials and base URLs for the OpenWeatherMap APIs
#[derive(Clone, Debug)]
pub struct OpenWeatherConfig {
    /// API key; lookups are refused while this is unset
    pub api_key: Option<String>,
    /// Base URL of the geocoding API (`/direct` is appended)
    pub geocode_base_url: String,
    /// Base URL of the current weather API (`/weather` is appended)
    pub weather_base_url: String,
}

impl Default for OpenWeatherConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            geocode_base_url: DEFAULT_GEOCODE_URL.to_string(),
            weather_base_url: DEFAULT_WEATHER_URL.to_string(),
        }
    }
}

impl OpenWeatherConfig {
    /// Load configuration from environment variables, falling back to defaults
    pub fn from_env() -> Self {
        let api_key = env::var("OPENWEATHER_API_KEY")
            .ok()
            .filter(|key| !key.trim().is_empty());

        let geocode_base_url = env::var("OPENWEATHER_GEOCODE_URL")
            .unwrap_or_else(|_| DEFAULT_GEOCODE_URL.to_string());

        let weather_base_url = env::var("OPENWEATHER_BASE_URL")
            .unwrap_or_else(|_| DEFAULT_WEATHER_URL.to_string());

        Self {
            api_key,
            geocode_base_url,
            weather_base_url,
        }
    }

    /// Build a configuration pointing both APIs at one base URL (used with mock servers)
    pub fn with_base_url(api_key: impl Into<String>, base_url: &str) -> Self {
        let base = base_url.trim_end_matches('/');
        Self {
            api_key: Some(api_key.into()),
            geocode_base_url: format!("{base}/geo/1.0"),
            weather_base_url: format!("{base}/data/2.5"),
        }
    }
}
