//! One-call comfort assessment for a weather request.
//!
//! Runs the whole pipeline for the current reading, every profile, the
//! selected profile's band and forecast, and the legacy simple index, and
//! gathers the results into a [`ComfortReport`] for the host to encode.

use serde::{Deserialize, Serialize};

use crate::bands::{interpret_composite, ComfortBand};
use crate::components::{score_components, ComponentScores};
use crate::composite::{composite_value, score_all_profiles, CompositeScore};
use crate::config::EngineConfig;
use crate::forecast::{estimate_days, ForecastEstimate};
use crate::legacy::{simple_comfort, SimpleComfort};
use crate::models::{AirQuality, EnvironmentalReading, ForecastDay};
use crate::profiles::ProfileTable;

// ---

/// Message reported when the selected profile is not in the table.
pub const UNKNOWN_PROFILE: &str = "Unknown profile";

/// Everything the weather collaborator supplies for one request.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AssessmentRequest {
    // ---
    pub current: EnvironmentalReading,

    /// Provider air-quality block; used when `current` has no PM2.5 of its own.
    #[serde(default)]
    pub air_quality: Option<AirQuality>,

    #[serde(default)]
    pub forecast: Vec<ForecastDay>,

    /// Profile name, case-insensitive. Falls back to the configured default.
    #[serde(default)]
    pub profile: Option<String>,
}

impl AssessmentRequest {
    // ---
    /// Current reading with the air-quality block folded in.
    pub fn current_reading(&self) -> EnvironmentalReading {
        // ---
        let mut reading = self.current;
        if reading.pm25.is_none() {
            reading.pm25 = self.air_quality.and_then(|aq| aq.pm2_5);
        }
        reading
    }
}

/// Full comfort assessment of one request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ComfortReport {
    // ---
    /// Selected profile, lowercased.
    pub profile: String,
    pub component_scores: ComponentScores,
    /// Composite under every known profile.
    pub profile_composites: Vec<CompositeScore>,
    pub composite: Option<CompositeScore>,
    pub band: Option<ComfortBand>,
    pub forecast: Vec<ForecastEstimate>,
    pub simple_comfort: Option<SimpleComfort>,
    pub wind_mps: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub profile_error: Option<String>,
}

/// Assess `request` under `table` and `config`.
///
/// An unknown profile does not fail the assessment: profile-independent parts
/// are still produced and `profile_error` is set.
pub fn assess(
    request: &AssessmentRequest,
    table: &ProfileTable,
    config: &EngineConfig,
) -> ComfortReport {
    // ---
    let current = request.current_reading();
    let profile = request
        .profile
        .as_deref()
        .map(str::trim)
        .filter(|p| !p.is_empty())
        .unwrap_or(config.default_profile.as_str())
        .to_lowercase();

    let component_scores = score_components(&current);
    let profile_composites = score_all_profiles(table, &component_scores);

    let days = &request.forecast[..request.forecast.len().min(config.max_forecast_days)];
    if days.len() < request.forecast.len() {
        tracing::debug!(
            "Scoring {} of {} forecast days (HCI_MAX_FORECAST_DAYS)",
            days.len(),
            request.forecast.len()
        );
    }

    let weights = match table.get(&profile) {
        Ok(weights) => Some(weights),
        Err(e) => {
            tracing::warn!("{}", e);
            None
        }
    };

    let composite = weights.map(|w| CompositeScore {
        value: composite_value(&component_scores, w),
        profile: profile.clone(),
    });
    let band = composite
        .as_ref()
        .and_then(|c| interpret_composite(c, &current, &component_scores));
    let forecast = estimate_days(days, &current, weights, config.forecast_max_deviation);
    let profile_error = weights.is_none().then(|| UNKNOWN_PROFILE.to_string());

    tracing::debug!(
        "Assessment for '{}': composite {:?}, band {:?}",
        profile,
        composite.as_ref().and_then(|c| c.value),
        band.as_ref().map(|b| b.level)
    );

    ComfortReport {
        profile,
        component_scores,
        profile_composites,
        composite,
        band,
        forecast,
        simple_comfort: simple_comfort(&current),
        wind_mps: current.wind_mps(),
        profile_error,
    }
}

#[cfg(test)]
mod tests {
    // ---
    use super::*;
    use chrono::NaiveDate;

    fn request(profile: Option<&str>) -> AssessmentRequest {
        // ---
        let forecast = (1..=5)
            .map(|d| {
                let mut day = ForecastDay::new(NaiveDate::from_ymd_opt(2025, 8, d).unwrap());
                day.avgtemp_c = Some(20.0 + d as f64);
                day
            })
            .collect();

        AssessmentRequest {
            current: EnvironmentalReading::new(25.0, 50.0, 10.0).with_uv(5.0),
            air_quality: Some(AirQuality { pm2_5: Some(10.0) }),
            forecast,
            profile: profile.map(str::to_string),
        }
    }

    #[test]
    fn test_air_quality_block_supplies_pm25() {
        // ---
        let req = request(None);
        assert_eq!(req.current_reading().pm25, Some(10.0));

        let mut own = request(None);
        own.current.pm25 = Some(3.0);
        assert_eq!(own.current_reading().pm25, Some(3.0));
    }

    #[test]
    fn test_default_profile_and_forecast_limit() {
        // ---
        let report = assess(&request(None), &ProfileTable::builtin(), &EngineConfig::default());
        assert_eq!(report.profile, "general");
        assert_eq!(report.forecast.len(), 3);
        assert_eq!(report.profile_composites.len(), 4);
        assert_eq!(report.band.unwrap().band, "Moderate Comfort");
        assert!(report.profile_error.is_none());
    }

    #[test]
    fn test_unknown_profile_keeps_other_parts() {
        // ---
        let report = assess(
            &request(Some("unknown_profile")),
            &ProfileTable::builtin(),
            &EngineConfig::default(),
        );
        assert_eq!(report.profile_error.as_deref(), Some(UNKNOWN_PROFILE));
        assert!(report.composite.is_none());
        assert!(report.band.is_none());
        assert_eq!(report.forecast.len(), 3);
        assert_eq!(
            report.forecast[0].date,
            NaiveDate::from_ymd_opt(2025, 8, 1).unwrap()
        );
        assert_eq!(report.forecast[0].reading.temp_c, Some(21.0));
        assert!(report
            .forecast
            .iter()
            .all(|f| f.possible_composite.is_none()));
        assert!(report.simple_comfort.is_some());
        assert!(report.component_scores.temp_score.is_some());
    }

    #[test]
    fn test_profile_is_case_insensitive() {
        // ---
        let report = assess(
            &request(Some("ATHLETE")),
            &ProfileTable::builtin(),
            &EngineConfig::default(),
        );
        assert_eq!(report.profile, "athlete");
        assert_eq!(report.composite.unwrap().profile, "athlete");
    }
}
