//! Comfort index and temperature conversions.
//!
//! The index blends three sub-scores, each 1.0 inside a comfortable band and
//! falling linearly to 0.0 as the reading moves away from it.

use crate::models::ComfortLevel;

const TEMP_BAND_C: (f64, f64) = (20.0, 25.0);
/// Degrees outside the band at which the temperature score reaches zero
const TEMP_FALLOFF_C: f64 = 15.0;

const HUMIDITY_BAND_PCT: (f64, f64) = (40.0, 60.0);
const HUMIDITY_FALLOFF_PCT: f64 = 40.0;

/// Up to a light breeze the wind does not cost anything
const CALM_WIND_MS: f64 = 3.0;
const MAX_WIND_MS: f64 = 15.0;

const TEMP_WEIGHT: f64 = 0.5;
const HUMIDITY_WEIGHT: f64 = 0.3;
const WIND_WEIGHT: f64 = 0.2;

pub fn kelvin_to_celsius(kelvin: f64) -> f64 {
    kelvin - 273.15
}

pub fn celsius_to_fahrenheit(celsius: f64) -> f64 {
    celsius * 9.0 / 5.0 + 32.0
}

/// Score in [0, 1] for a reading against a band, reaching zero `falloff` units outside it
fn band_score(value: f64, band: (f64, f64), falloff: f64) -> f64 {
    let (low, high) = band;
    let distance = if value < low {
        low - value
    } else if value > high {
        value - high
    } else {
        0.0
    };
    (1.0 - distance / falloff).clamp(0.0, 1.0)
}

fn wind_score(wind_ms: f64) -> f64 {
    let excess = (wind_ms.max(0.0) - CALM_WIND_MS).max(0.0);
    (1.0 - excess / (MAX_WIND_MS - CALM_WIND_MS)).clamp(0.0, 1.0)
}

/// Comfort index in [0, 1] for a temperature (°C), relative humidity (%) and wind speed (m/s).
///
/// Returns `None` if any reading is missing or not a finite number.
pub fn comfort_index(
    temp_celsius: Option<f64>,
    humidity_pct: Option<f64>,
    wind_speed_ms: Option<f64>,
) -> Option<f64> {
    let temp = temp_celsius.filter(|v| v.is_finite())?;
    let humidity = humidity_pct.filter(|v| v.is_finite())?.clamp(0.0, 100.0);
    let wind = wind_speed_ms.filter(|v| v.is_finite())?;

    let score = TEMP_WEIGHT * band_score(temp, TEMP_BAND_C, TEMP_FALLOFF_C)
        + HUMIDITY_WEIGHT * band_score(humidity, HUMIDITY_BAND_PCT, HUMIDITY_FALLOFF_PCT)
        + WIND_WEIGHT * wind_score(wind);

    Some(score.clamp(0.0, 1.0))
}

/// Index and its band together, `None` when the index cannot be computed
pub fn evaluate(
    temp_celsius: Option<f64>,
    humidity_pct: Option<f64>,
    wind_speed_ms: Option<f64>,
) -> Option<(f64, ComfortLevel)> {
    comfort_index(temp_celsius, humidity_pct, wind_speed_ms)
        .map(|index| (index, ComfortLevel::from_index(index)))
}
