//! Projection of the composite comfort value onto forecast days.
//!
//! Each forecast day is scored like current conditions, then held within a
//! fixed distance of today's composite so the outlook does not swing wildly
//! on coarse daily aggregates.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::components::score_components;
use crate::composite::{composite_value, round2};
use crate::error::ScoringError;
use crate::models::{EnvironmentalReading, ForecastDay};
use crate::profiles::{ProfileTable, ProfileWeights};

// ---

/// Default maximum distance between a forecast composite and today's.
pub const DEFAULT_MAX_DEVIATION: f64 = 15.0;

/// Comfort outlook for one forecast day.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ForecastEstimate {
    // ---
    pub date: NaiveDate,

    /// Reading the day was scored from.
    pub reading: EnvironmentalReading,

    /// Composite before clamping against the baseline.
    pub raw_composite: Option<f64>,

    /// Composite after clamping; `None` when the day has no temperature.
    pub possible_composite: Option<f64>,
}

/// Hold `raw` within `max_deviation` of `baseline`, and within `[0, 100]`.
pub fn clamp_to_baseline(raw: f64, baseline: f64, max_deviation: f64) -> f64 {
    // ---
    let deviation = max_deviation.max(0.0);
    let min_bound = (baseline - deviation).max(0.0);
    let max_bound = (baseline + deviation).min(100.0);
    raw.max(min_bound).min(max_bound)
}

/// Project `profile`'s composite onto each of `days`.
///
/// The baseline is the composite of `current` under the same profile. When
/// there is no baseline, day composites are returned unclamped.
pub fn project(
    days: &[ForecastDay],
    current: &EnvironmentalReading,
    table: &ProfileTable,
    profile: &str,
    max_deviation: f64,
) -> Result<Vec<ForecastEstimate>, ScoringError> {
    // ---
    let weights = table.get(profile)?;
    Ok(estimate_days(days, current, Some(weights), max_deviation))
}

/// Build one estimate per day under already-resolved `weights`.
///
/// With no weights every day is still listed, with its reading, but both
/// composites are `None`.
pub fn estimate_days(
    days: &[ForecastDay],
    current: &EnvironmentalReading,
    weights: Option<&ProfileWeights>,
    max_deviation: f64,
) -> Vec<ForecastEstimate> {
    // ---
    let baseline = weights.and_then(|w| composite_value(&score_components(current), w));
    tracing::debug!(
        "Projecting {} forecast days, baseline {:?}",
        days.len(),
        baseline
    );

    days.iter()
        .map(|day| {
            let reading = day.to_reading(current);
            let raw_composite = match (weights, reading.temp_c) {
                (Some(w), Some(_)) => composite_value(&score_components(&reading), w),
                _ => None,
            };

            let possible_composite = raw_composite.map(|raw| match baseline {
                Some(b) => round2(clamp_to_baseline(raw, b, max_deviation)),
                None => raw,
            });
            if possible_composite != raw_composite {
                tracing::debug!(
                    "Forecast {} clamped from {:?} to {:?}",
                    day.date,
                    raw_composite,
                    possible_composite
                );
            }

            ForecastEstimate {
                date: day.date,
                reading,
                raw_composite,
                possible_composite,
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    // ---
    use super::*;

    fn date(day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 7, day).unwrap()
    }

    fn mild_current() -> EnvironmentalReading {
        EnvironmentalReading::new(20.0, 50.0, 10.0)
            .with_uv(3.0)
            .with_pm25(5.0)
    }

    #[test]
    fn test_clamp_to_baseline() {
        // ---
        assert_eq!(clamp_to_baseline(40.0, 70.0, 15.0), 55.0);
        assert_eq!(clamp_to_baseline(95.0, 70.0, 15.0), 85.0);
        assert_eq!(clamp_to_baseline(72.0, 70.0, 15.0), 72.0);
        // Bounds never leave [0, 100]
        assert_eq!(clamp_to_baseline(120.0, 95.0, 15.0), 100.0);
        assert_eq!(clamp_to_baseline(-5.0, 5.0, 15.0), 0.0);
        // A negative deviation pins to the baseline
        assert_eq!(clamp_to_baseline(10.0, 50.0, -3.0), 50.0);
    }

    #[test]
    fn test_harsh_day_is_clamped() {
        // ---
        let table = ProfileTable::builtin();
        let current = mild_current();
        let baseline = composite_value(&score_components(&current), table.get("general").unwrap())
            .unwrap();

        let mut harsh = ForecastDay::new(date(2));
        harsh.avgtemp_c = Some(40.0);
        harsh.avghumidity = Some(100.0);
        harsh.uv = Some(11.0);
        harsh.maxwind_kph = Some(120.0);

        let estimates = project(&[harsh], &current, &table, "general", 15.0).unwrap();
        let estimate = &estimates[0];
        let raw = estimate.raw_composite.unwrap();
        let possible = estimate.possible_composite.unwrap();

        assert!(raw < baseline - 15.0, "raw {raw} baseline {baseline}");
        assert!((possible - (baseline - 15.0)).abs() < 1e-9);
    }

    #[test]
    fn test_day_without_temperature() {
        // ---
        let table = ProfileTable::builtin();
        let mut day = ForecastDay::new(date(3));
        day.avghumidity = Some(60.0);
        day.maxtemp_c = Some(30.0);

        let estimates = project(&[day], &mild_current(), &table, "asthma", 15.0).unwrap();
        assert_eq!(estimates[0].possible_composite, None);
        assert_eq!(estimates[0].raw_composite, None);
    }

    #[test]
    fn test_min_max_temperature_fallback() {
        // ---
        let table = ProfileTable::builtin();
        let mut day = ForecastDay::new(date(4));
        day.mintemp_c = Some(16.0);
        day.maxtemp_c = Some(24.0);

        let estimates = project(&[day], &mild_current(), &table, "athlete", 15.0).unwrap();
        assert_eq!(estimates[0].reading.temp_c, Some(20.0));
        assert!(estimates[0].possible_composite.is_some());
    }

    #[test]
    fn test_no_baseline_is_unclamped() {
        // ---
        let table = ProfileTable::empty()
            .with_profile("air_only", ProfileWeights::new(0.5, 0.5, 0.0, 0.0, 0.0))
            .unwrap();
        // Current has neither temperature nor air quality, so no baseline
        let current = EnvironmentalReading {
            humidity_pct: Some(50.0),
            ..EnvironmentalReading::default()
        };

        let mut day = ForecastDay::new(date(5));
        day.avgtemp_c = Some(40.0);

        let estimates = project(&[day], &current, &table, "air_only", 15.0).unwrap();
        assert_eq!(estimates[0].possible_composite, Some(0.0));
        assert_eq!(estimates[0].possible_composite, estimates[0].raw_composite);
    }

    #[test]
    fn test_unknown_profile() {
        // ---
        let table = ProfileTable::builtin();
        let result = project(&[], &mild_current(), &table, "nobody", 15.0);
        assert_eq!(result, Err(ScoringError::UnknownProfile("nobody".into())));
    }

    #[test]
    fn test_days_listed_without_weights() {
        // ---
        let mut day = ForecastDay::new(date(6));
        day.avgtemp_c = Some(22.0);
        day.maxwind_kph = Some(14.0);

        let estimates = estimate_days(&[day], &mild_current(), None, 15.0);
        assert_eq!(estimates.len(), 1);
        assert_eq!(estimates[0].date, date(6));
        assert_eq!(estimates[0].reading.temp_c, Some(22.0));
        assert_eq!(estimates[0].reading.wind_kph, Some(14.0));
        assert_eq!(estimates[0].raw_composite, None);
        assert_eq!(estimates[0].possible_composite, None);
    }
}
