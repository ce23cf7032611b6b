//! Input data contracts for the comfort engine.
//!
//! These are the shapes the surrounding weather application hands to the
//! engine: one [`EnvironmentalReading`] for current conditions, the raw
//! provider [`ForecastDay`] records, and the optional [`AirQuality`] block.
//! Every numeric field is optional so that a partially populated provider
//! payload degrades to missing scores instead of failing.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::normalize::finite;

// ---

/// Conversion factor from kilometres per hour to metres per second.
pub const KPH_PER_MPS: f64 = 3.6;

/// One observation of environmental conditions (current or one forecast day).
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct EnvironmentalReading {
    // ---
    /// Air temperature in °C.
    #[serde(default)]
    pub temp_c: Option<f64>,

    /// Relative humidity, 0–100 %.
    #[serde(default)]
    pub humidity_pct: Option<f64>,

    /// UV index, 0–11+.
    #[serde(default)]
    pub uv_index: Option<f64>,

    /// Wind speed in kph.
    #[serde(default)]
    pub wind_kph: Option<f64>,

    /// PM2.5 concentration in µg/m³.
    #[serde(default)]
    pub pm25: Option<f64>,

    /// Provider supplied US AQI (0–500). Takes precedence over `pm25`.
    #[serde(default)]
    pub aqi_us: Option<f64>,
}

impl EnvironmentalReading {
    // ---
    /// Reading with the three fields every provider payload carries.
    pub fn new(temp_c: f64, humidity_pct: f64, wind_kph: f64) -> Self {
        // ---
        Self {
            temp_c: Some(temp_c),
            humidity_pct: Some(humidity_pct),
            wind_kph: Some(wind_kph),
            ..Self::default()
        }
    }

    pub fn with_uv(mut self, uv_index: f64) -> Self {
        self.uv_index = Some(uv_index);
        self
    }

    pub fn with_pm25(mut self, pm25: f64) -> Self {
        self.pm25 = Some(pm25);
        self
    }

    pub fn with_aqi_us(mut self, aqi_us: f64) -> Self {
        self.aqi_us = Some(aqi_us);
        self
    }

    /// Wind speed in m/s, as shown on the dashboard.
    pub fn wind_mps(&self) -> Option<f64> {
        finite(self.wind_kph).map(|kph| kph / KPH_PER_MPS)
    }
}

/// Air quality block as returned by the weather provider.
///
/// Providers disagree on the PM2.5 key, so all known spellings are accepted.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct AirQuality {
    // ---
    #[serde(default, alias = "pm25", alias = "pm2_5_us", alias = "pm25_us")]
    pub pm2_5: Option<f64>,
}

/// Raw forecast day from the weather provider.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ForecastDay {
    // ---
    pub date: NaiveDate,
    #[serde(default)]
    pub avgtemp_c: Option<f64>,
    #[serde(default)]
    pub mintemp_c: Option<f64>,
    #[serde(default)]
    pub maxtemp_c: Option<f64>,
    #[serde(default)]
    pub avghumidity: Option<f64>,
    #[serde(default)]
    pub uv: Option<f64>,
    /// Wind speed of the first hourly entry of the day.
    #[serde(default)]
    pub first_hour_wind_kph: Option<f64>,
    #[serde(default)]
    pub maxwind_kph: Option<f64>,
}

impl ForecastDay {
    // ---
    /// Day with only a date; fields are filled in by the caller.
    pub fn new(date: NaiveDate) -> Self {
        // ---
        Self {
            date,
            avgtemp_c: None,
            mintemp_c: None,
            maxtemp_c: None,
            avghumidity: None,
            uv: None,
            first_hour_wind_kph: None,
            maxwind_kph: None,
        }
    }

    /// Average temperature, falling back to the min/max midpoint.
    pub fn average_temp_c(&self) -> Option<f64> {
        // ---
        finite(self.avgtemp_c).or_else(|| {
            let (min, max) = (finite(self.mintemp_c)?, finite(self.maxtemp_c)?);
            Some((min + max) / 2.0)
        })
    }

    /// Representative wind: first hour unless missing or calm, then the day's max.
    pub fn wind_kph(&self) -> f64 {
        // ---
        finite(self.first_hour_wind_kph)
            .filter(|kph| *kph != 0.0)
            .or_else(|| finite(self.maxwind_kph))
            .unwrap_or(0.0)
    }

    /// Build the reading used to score this day.
    ///
    /// Humidity falls back to `current` when the day has none, and air quality
    /// is always taken from `current` since providers do not forecast it.
    pub fn to_reading(&self, current: &EnvironmentalReading) -> EnvironmentalReading {
        // ---
        EnvironmentalReading {
            temp_c: self.average_temp_c(),
            humidity_pct: finite(self.avghumidity).or(current.humidity_pct),
            uv_index: finite(self.uv),
            wind_kph: Some(self.wind_kph()),
            pm25: current.pm25,
            aqi_us: current.aqi_us,
        }
    }
}
