//! Location queries and the raw readings returned by a weather provider.

use serde::{Deserialize, Serialize};
use std::fmt;

/// One user-supplied place string, trimmed and guaranteed non-empty
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LocationQuery(String);

impl LocationQuery {
    /// Build a query from raw text, returning `None` when nothing is left after trimming
    pub fn new(raw: &str) -> Option<Self> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            None
        } else {
            Some(Self(trimmed.to_string()))
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for LocationQuery {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for LocationQuery {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// A geocoding match: coordinates plus the canonical place name
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GeocodedPlace {
    pub lat: f64,
    pub lon: f64,
    pub name: String,
    pub state: Option<String>,
    /// ISO 3166 country code, e.g. "US" or "GB"
    pub country: Option<String>,
}

/// Current readings for a coordinate pair.
///
/// Every field is optional because the upstream API may omit any of them.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct CurrentConditions {
    pub temp_kelvin: Option<f64>,
    pub humidity: Option<f64>,
    /// Metres per second
    pub wind_speed: Option<f64>,
    pub description: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_query_is_trimmed() {
        let query = LocationQuery::new("  Boston, MA \t").unwrap();
        assert_eq!(query.as_str(), "Boston, MA");
        assert_eq!(query.to_string(), "Boston, MA");
    }

    #[test]
    fn test_blank_query_is_rejected() {
        assert!(LocationQuery::new("").is_none());
        assert!(LocationQuery::new("   ").is_none());
    }
}
