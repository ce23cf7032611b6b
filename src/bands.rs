//! Comfort bands and environmental interpretation.
//!
//! A composite value selects exactly one [`ComfortLevel`] from an ordered
//! threshold table. Independently, each raw factor is tagged with a short
//! descriptive bucket for display next to the band.

use std::ops::Bound::{self, Excluded, Included, Unbounded};
use std::ops::RangeBounds;

use serde::{Deserialize, Serialize};

use crate::components::ComponentScores;
use crate::composite::CompositeScore;
use crate::models::EnvironmentalReading;
use crate::normalize::finite;

// ---

/// Qualitative comfort band, best first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ComfortLevel {
    Excellent,
    Comfortable,
    Moderate,
    Uncomfortable,
    Poor,
    VeryPoor,
    Severe,
}

/// Lower bounds (inclusive) for each band, evaluated top-down.
const BAND_THRESHOLDS: [(f64, ComfortLevel); 6] = [
    (90.0, ComfortLevel::Excellent),
    (75.0, ComfortLevel::Comfortable),
    (60.0, ComfortLevel::Moderate),
    (45.0, ComfortLevel::Uncomfortable),
    (30.0, ComfortLevel::Poor),
    (15.0, ComfortLevel::VeryPoor),
];

impl ComfortLevel {
    // ---
    /// Band for a composite value (higher = better).
    pub fn from_score(score: f64) -> Self {
        BAND_THRESHOLDS
            .iter()
            .find(|(threshold, _)| score >= *threshold)
            .map_or(ComfortLevel::Severe, |(_, level)| *level)
    }

    pub fn label(&self) -> &'static str {
        match self {
            ComfortLevel::Excellent => "Excellent / Very Comfortable",
            ComfortLevel::Comfortable => "Comfortable",
            ComfortLevel::Moderate => "Moderate Comfort",
            ComfortLevel::Uncomfortable => "Uncomfortable",
            ComfortLevel::Poor => "Poor Comfort / Caution",
            ComfortLevel::VeryPoor => "Very Poor / Health Risk",
            ComfortLevel::Severe => "Severe Discomfort / Dangerous",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            ComfortLevel::Excellent => {
                "Ideal outdoor conditions. Air is clean, UV moderate, pleasant temperature and humidity."
            }
            ComfortLevel::Comfortable => {
                "Slight variation in one or two parameters but overall safe for most people."
            }
            ComfortLevel::Moderate => {
                "Conditions acceptable for healthy individuals, mild discomfort for sensitive people."
            }
            ComfortLevel::Uncomfortable => {
                "Increasing discomfort due to high heat, humidity, poor air, or high UV."
            }
            ComfortLevel::Poor => {
                "Multiple factors deteriorate comfort. Air or heat may cause physical strain."
            }
            ComfortLevel::VeryPoor => "Unhealthy air, extreme heat or UV, oppressive humidity.",
            ComfortLevel::Severe => "Hazardous environmental conditions, high health risk.",
        }
    }

    pub fn recommendations(&self) -> &'static [&'static str] {
        match self {
            ComfortLevel::Excellent => &["Best time for outdoor activity, exercise, travel."],
            ComfortLevel::Comfortable => {
                &["Good for outdoor activity; stay hydrated and use sunscreen if UV is high."]
            }
            ComfortLevel::Moderate => &["Limit long outdoor exposure, protective gear recommended."],
            ComfortLevel::Uncomfortable => {
                &["Avoid prolonged outdoor activity, especially for elderly/asthmatics."]
            }
            ComfortLevel::Poor => &["Sensitive individuals should remain indoors; stay hydrated."],
            ComfortLevel::VeryPoor => {
                &["Outdoor activity discouraged; use masks and cooling measures."]
            }
            ComfortLevel::Severe => {
                &["Stay indoors; emergency conditions for health-sensitive individuals."]
            }
        }
    }
}

/// Interpreted comfort band for a composite value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ComfortBand {
    // ---
    pub level: ComfortLevel,
    pub band: String,
    pub description: String,
    pub recommendations: Vec<String>,
    /// Comma-separated factor tags, `None` when no factor matched a bucket.
    pub environmental_interpretation: Option<String>,
}

/// A value range and the tag it maps to.
type Bucket = ((Bound<f64>, Bound<f64>), &'static str);

const AQI_TAGS: &[Bucket] = &[
    ((Unbounded, Excluded(50.0)), "AQI < 50"),
    ((Unbounded, Excluded(80.0)), "AQI < 80"),
    ((Unbounded, Excluded(120.0)), "AQI < 120"),
    ((Unbounded, Excluded(150.0)), "AQI 120–150"),
    ((Unbounded, Excluded(200.0)), "AQI 150–200"),
    ((Unbounded, Excluded(300.0)), "AQI 200–300"),
    ((Unbounded, Unbounded), "AQI > 300"),
];

// 18–20 °C is deliberately untagged.
const TEMP_TAGS: &[Bucket] = &[
    ((Included(20.0), Included(28.0)), "Temp 20–28 °C"),
    ((Excluded(28.0), Included(32.0)), "Temp 28–32 °C"),
    ((Excluded(32.0), Included(35.0)), "Temp 32–35 °C"),
    ((Excluded(35.0), Unbounded), "Temp > 35 °C"),
    ((Unbounded, Excluded(18.0)), "Temp < 18 °C"),
];

const HUMIDITY_TAGS: &[Bucket] = &[
    ((Excluded(70.0), Unbounded), "Humidity > 70%"),
    ((Included(40.0), Included(60.0)), "Humidity 40–60%"),
];

const UV_TAGS: &[Bucket] = &[
    ((Unbounded, Included(4.0)), "UV ≤ 4"),
    ((Unbounded, Included(6.0)), "UV ≤ 6"),
    ((Unbounded, Included(7.0)), "UV ≤ 7"),
    // Older dashboards labeled this bucket "UV > 8"; the label follows the range
    ((Unbounded, Included(8.0)), "UV ≤ 8"),
    ((Unbounded, Unbounded), "UV very high"),
];

// 3–5 m/s expressed in kph
const WIND_TAGS: &[Bucket] = &[((Included(10.8), Included(18.0)), "mild wind (3–5 m/s)")];

/// First bucket in `ladder` containing `value`.
fn tag(value: Option<f64>, ladder: &[Bucket]) -> Option<&'static str> {
    // ---
    let v = finite(value)?;
    ladder
        .iter()
        .find(|(range, _)| range.contains(&v))
        .map(|(_, label)| *label)
}

/// Tag each present factor of `reading` and join the tags.
///
/// `aqi_value` is the AQI the scores were computed from, which may have been
/// derived from PM2.5 rather than read directly.
pub fn environmental_interpretation(
    reading: &EnvironmentalReading,
    aqi_value: Option<f64>,
) -> Option<String> {
    // ---
    let tags: Vec<&str> = [
        tag(aqi_value, AQI_TAGS),
        tag(reading.temp_c, TEMP_TAGS),
        tag(reading.humidity_pct, HUMIDITY_TAGS),
        tag(reading.uv_index, UV_TAGS),
        tag(reading.wind_kph, WIND_TAGS),
    ]
    .into_iter()
    .flatten()
    .collect();

    (!tags.is_empty()).then(|| tags.join(", "))
}

/// Classify `score` and annotate it with the factors of `reading`.
pub fn interpret(
    score: f64,
    reading: &EnvironmentalReading,
    scores: &ComponentScores,
) -> ComfortBand {
    // ---
    let level = ComfortLevel::from_score(score);
    ComfortBand {
        level,
        band: level.label().to_string(),
        description: level.description().to_string(),
        recommendations: level
            .recommendations()
            .iter()
            .map(|r| r.to_string())
            .collect(),
        environmental_interpretation: environmental_interpretation(reading, scores.aqi_value),
    }
}

/// Band for a composite, if it has a value.
pub fn interpret_composite(
    composite: &CompositeScore,
    reading: &EnvironmentalReading,
    scores: &ComponentScores,
) -> Option<ComfortBand> {
    composite.value.map(|value| interpret(value, reading, scores))
}
