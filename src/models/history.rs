//! Persisted lookup history.

use chrono::{DateTime, Utc};
use paperclip::actix::Apiv2Schema;
use serde::{Deserialize, Serialize};

/// Upper bound accepted by `GET /api/history?limit=`
pub const MAX_HISTORY_LIMIT: usize = 500;

/// One row of the `weather_records` table
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct HistoryRecord {
    pub id: i64,
    pub timestamp: DateTime<Utc>,
    pub city: String,
    pub temperature_kelvin: Option<f64>,
    pub temperature_celsius: Option<f64>,
    pub temperature_fahrenheit: Option<f64>,
    pub humidity: Option<u8>,
    pub wind_speed: Option<f64>,
    pub weather_description: Option<String>,
    pub comfort_index: Option<f64>,
}

/// Query parameters for the JSON history endpoint
#[derive(Clone, Debug, Default, Serialize, Deserialize, Apiv2Schema)]
pub struct HistoryQuery {
    /// Number of rows to return, newest first (1-500)
    pub limit: Option<usize>,
}

impl HistoryQuery {
    /// Resolve the requested limit against a default, clamped to `1..=MAX_HISTORY_LIMIT`
    pub fn effective_limit(&self, default: usize) -> usize {
        self.limit.unwrap_or(default).clamp(1, MAX_HISTORY_LIMIT)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_effective_limit() {
        assert_eq!(HistoryQuery { limit: None }.effective_limit(50), 50);
        assert_eq!(HistoryQuery { limit: Some(0) }.effective_limit(50), 1);
        assert_eq!(HistoryQuery { limit: Some(10_000) }.effective_limit(50), 500);
        assert_eq!(HistoryQuery { limit: Some(7) }.effective_limit(50), 7);
    }
}
