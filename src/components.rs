//! Per-factor severity scoring of a single reading.

use serde::{Deserialize, Serialize};

use crate::aqi::{pm25_to_aqi, AQI_MAX};
use crate::models::EnvironmentalReading;
use crate::normalize::{clamp_percent, finite, normalize, TEMP_RANGE_C, UV_RANGE, WIND_RANGE_KPH};
use crate::profiles::Factor;

// ---

/// Severity of each factor on a 0–100 scale (higher = worse).
///
/// A `None` field means the reading did not carry enough input for that
/// factor; it is not the same as a zero score.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct ComponentScores {
    // ---
    pub aqi_score: Option<f64>,
    pub temp_score: Option<f64>,
    pub humidity_score: Option<f64>,
    pub uv_score: Option<f64>,
    pub wind_score: Option<f64>,

    /// AQI (0–500) the `aqi_score` was derived from.
    pub aqi_value: Option<f64>,
}

impl ComponentScores {
    pub fn score(&self, factor: Factor) -> Option<f64> {
        match factor {
            Factor::Aqi => self.aqi_score,
            Factor::Temp => self.temp_score,
            Factor::Humidity => self.humidity_score,
            Factor::Uv => self.uv_score,
            Factor::Wind => self.wind_score,
        }
    }
}

/// Score every factor of `reading`.
///
/// The AQI comes from the provider's `aqi_us` when present, otherwise it is
/// derived from PM2.5.
pub fn score_components(reading: &EnvironmentalReading) -> ComponentScores {
    // ---
    let aqi_value = finite(reading.aqi_us).or_else(|| pm25_to_aqi(reading.pm25));
    let aqi_score = aqi_value.map(|aqi| (aqi / AQI_MAX * 100.0).clamp(0.0, 100.0));

    let (temp_min, temp_max) = TEMP_RANGE_C;
    let (uv_min, uv_max) = UV_RANGE;
    let (wind_min, wind_max) = WIND_RANGE_KPH;

    ComponentScores {
        aqi_score,
        temp_score: normalize(reading.temp_c, temp_min, temp_max),
        humidity_score: clamp_percent(reading.humidity_pct),
        uv_score: normalize(reading.uv_index, uv_min, uv_max),
        wind_score: normalize(reading.wind_kph, wind_min, wind_max),
        aqi_value,
    }
}
