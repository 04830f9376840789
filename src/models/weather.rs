//! Request and response models for the batch weather endpoint.

use paperclip::actix::Apiv2Schema;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Request body for `POST /get_weather`
#[derive(Clone, Debug, Serialize, Deserialize, Apiv2Schema)]
pub struct WeatherBatchRequest {
    /// Location strings, e.g. `["Boston, MA", "London, UK"]`.
    /// An element may itself hold several `;`-separated locations.
    pub cities: Vec<String>,
}

/// Qualitative band of a comfort index
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum ComfortLevel {
    #[serde(rename = "very comfortable")]
    VeryComfortable,
    #[serde(rename = "moderately comfortable")]
    ModeratelyComfortable,
    #[serde(rename = "less comfortable")]
    LessComfortable,
}

impl ComfortLevel {
    /// Band an index: above 0.7, above 0.4, everything else
    pub fn from_index(index: f64) -> Self {
        if index > 0.7 {
            Self::VeryComfortable
        } else if index > 0.4 {
            Self::ModeratelyComfortable
        } else {
            Self::LessComfortable
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::VeryComfortable => "very comfortable",
            Self::ModeratelyComfortable => "moderately comfortable",
            Self::LessComfortable => "less comfortable",
        }
    }
}

impl fmt::Display for ComfortLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A successfully resolved lookup
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct WeatherResult {
    /// The query exactly as the user typed it (trimmed)
    pub original_input: String,
    pub city_name: String,
    pub state: Option<String>,
    pub country_code: Option<String>,
    pub weather_desc: String,
    pub temp_kelvin: f64,
    pub temp_celsius: f64,
    pub temp_fahrenheit: f64,
    /// Relative humidity, 0-100
    pub humidity: u8,
    /// Metres per second
    pub wind_speed: f64,
    /// In [0, 1]; `None` when a reading could not be scored
    pub comfort_index: Option<f64>,
    pub comfort_level: Option<ComfortLevel>,
}

/// A lookup that failed for one location
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct LookupFailure {
    pub original_input: String,
    pub error: String,
}

/// One element of the batch response, in input order
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum WeatherEntry {
    Success(WeatherResult),
    Failure(LookupFailure),
}

impl WeatherEntry {
    pub fn original_input(&self) -> &str {
        match self {
            Self::Success(result) => &result.original_input,
            Self::Failure(failure) => &failure.original_input,
        }
    }

    pub fn as_success(&self) -> Option<&WeatherResult> {
        match self {
            Self::Success(result) => Some(result),
            Self::Failure(_) => None,
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, Self::Success(_))
    }
}

/// Response body for `POST /get_weather`
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct WeatherBatchResponse {
    pub weather_data: Vec<WeatherEntry>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_comfort_level_bands() {
        assert_eq!(ComfortLevel::from_index(0.95), ComfortLevel::VeryComfortable);
        assert_eq!(ComfortLevel::from_index(0.7), ComfortLevel::ModeratelyComfortable);
        assert_eq!(ComfortLevel::from_index(0.41), ComfortLevel::ModeratelyComfortable);
        assert_eq!(ComfortLevel::from_index(0.4), ComfortLevel::LessComfortable);
        assert_eq!(ComfortLevel::from_index(0.0), ComfortLevel::LessComfortable);
    }

    #[test]
    fn test_failure_entry_has_error_shape() {
        let entry = WeatherEntry::Failure(LookupFailure {
            original_input: "Atlantis".to_string(),
            error: "not found".to_string(),
        });

        let json = serde_json::to_value(&entry).unwrap();
        assert_eq!(
            json,
            serde_json::json!({ "original_input": "Atlantis", "error": "not found" })
        );
    }

    #[test]
    fn test_success_entry_serializes_flat() {
        let entry = WeatherEntry::Success(WeatherResult {
            original_input: "London, UK".to_string(),
            city_name: "London".to_string(),
            state: Some("England".to_string()),
            country_code: Some("GB".to_string()),
            weather_desc: "light rain".to_string(),
            temp_kelvin: 288.15,
            temp_celsius: 15.0,
            temp_fahrenheit: 59.0,
            humidity: 80,
            wind_speed: 4.1,
            comfort_index: Some(0.55),
            comfort_level: Some(ComfortLevel::ModeratelyComfortable),
        });

        let json = serde_json::to_value(&entry).unwrap();
        assert_eq!(json["city_name"], "London");
        assert_eq!(json["comfort_level"], "moderately comfortable");
        assert_eq!(json["original_input"], "London, UK");
        assert!(json.get("error").is_none());
    }
}
