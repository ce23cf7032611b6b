//! Legacy simple comfort index.
//!
//! `(temp_c + humidity_pct) / 4` mapped onto six thermal labels. This predates
//! the weighted composite and is still shown on the dashboard next to it; the
//! two can disagree.

use serde::{Deserialize, Serialize};

use crate::models::EnvironmentalReading;
use crate::normalize::finite;

// ---

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ThermalLevel {
    Cold,
    Cool,
    Comfortable,
    Warm,
    Hot,
    VeryHot,
}

/// Exclusive upper bounds, evaluated bottom-up. Anything above is `VeryHot`.
const THERMAL_THRESHOLDS: [(f64, ThermalLevel); 5] = [
    (10.0, ThermalLevel::Cold),
    (18.0, ThermalLevel::Cool),
    (24.0, ThermalLevel::Comfortable),
    (28.0, ThermalLevel::Warm),
    (32.0, ThermalLevel::Hot),
];

impl ThermalLevel {
    // ---
    pub fn from_index(hci: f64) -> Self {
        THERMAL_THRESHOLDS
            .iter()
            .find(|(bound, _)| hci < *bound)
            .map_or(ThermalLevel::VeryHot, |(_, level)| *level)
    }

    pub fn label(&self) -> &'static str {
        match self {
            ThermalLevel::Cold => "Cold",
            ThermalLevel::Cool => "Cool",
            ThermalLevel::Comfortable => "Comfortable",
            ThermalLevel::Warm => "Warm",
            ThermalLevel::Hot => "Hot",
            ThermalLevel::VeryHot => "Very Hot",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            ThermalLevel::Cold => "Uncomfortably cold for most people",
            ThermalLevel::Cool => "Cool but tolerable; may need light clothing",
            ThermalLevel::Comfortable => "Ideal thermal comfort for most individuals",
            ThermalLevel::Warm => "Slightly warm, may feel humid or stuffy",
            ThermalLevel::Hot => "Uncomfortable heat, risk of heat stress",
            ThermalLevel::VeryHot => "High risk of heat exhaustion or heatstroke",
        }
    }
}

/// Simple comfort index and its label.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimpleComfort {
    // ---
    pub hci: f64,
    pub level: ThermalLevel,
    pub label: String,
    pub description: String,
}

/// `(temp_c + humidity_pct) / 4`, or `None` if either input is missing.
pub fn simple_hci(temp_c: Option<f64>, humidity_pct: Option<f64>) -> Option<f64> {
    Some((finite(temp_c)? + finite(humidity_pct)?) / 4.0)
}

pub fn simple_comfort(reading: &EnvironmentalReading) -> Option<SimpleComfort> {
    // ---
    let hci = simple_hci(reading.temp_c, reading.humidity_pct)?;
    let level = ThermalLevel::from_index(hci);
    Some(SimpleComfort {
        hci,
        level,
        label: level.label().to_string(),
        description: level.description().to_string(),
    })
}
