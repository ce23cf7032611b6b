//! Audience profiles and their per-factor weightings.
//!
//! The table is an explicit immutable value: the engine never consults
//! process-wide state, and tests can pass alternate profile sets.

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::ScoringError;

// ---

/// Profile used when a request names none.
pub const DEFAULT_PROFILE: &str = "general";

/// Tolerance when checking that a profile's weights sum to 1.
const WEIGHT_SUM_TOLERANCE: f64 = 1e-6;

/// The five tracked environmental factors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Factor {
    Aqi,
    Temp,
    Humidity,
    Uv,
    Wind,
}

impl Factor {
    /// All factors, in table column order.
    pub const ALL: [Factor; 5] = [
        Factor::Aqi,
        Factor::Temp,
        Factor::Humidity,
        Factor::Uv,
        Factor::Wind,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Factor::Aqi => "aqi",
            Factor::Temp => "temp",
            Factor::Humidity => "humidity",
            Factor::Uv => "uv",
            Factor::Wind => "wind",
        }
    }
}

impl fmt::Display for Factor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Per-factor weight fractions for one profile.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ProfileWeights {
    // ---
    pub aqi: f64,
    pub temp: f64,
    pub humidity: f64,
    pub uv: f64,
    pub wind: f64,
}

impl ProfileWeights {
    // ---
    pub const fn new(aqi: f64, temp: f64, humidity: f64, uv: f64, wind: f64) -> Self {
        Self {
            aqi,
            temp,
            humidity,
            uv,
            wind,
        }
    }

    pub fn weight(&self, factor: Factor) -> f64 {
        match factor {
            Factor::Aqi => self.aqi,
            Factor::Temp => self.temp,
            Factor::Humidity => self.humidity,
            Factor::Uv => self.uv,
            Factor::Wind => self.wind,
        }
    }

    pub fn total(&self) -> f64 {
        Factor::ALL.iter().map(|f| self.weight(*f)).sum()
    }
}

pub const GENERAL: ProfileWeights = ProfileWeights::new(0.30, 0.15, 0.15, 0.20, 0.20);
pub const ASTHMA: ProfileWeights = ProfileWeights::new(0.50, 0.10, 0.10, 0.15, 0.15);
pub const ELDERLY_CHILD: ProfileWeights = ProfileWeights::new(0.30, 0.20, 0.20, 0.20, 0.10);
pub const ATHLETE: ProfileWeights = ProfileWeights::new(0.20, 0.15, 0.15, 0.20, 0.30);

/// Built-in profiles shipped with the engine.
pub const BUILTIN_PROFILES: [(&str, ProfileWeights); 4] = [
    ("general", GENERAL),
    ("asthma", ASTHMA),
    ("elderly_child", ELDERLY_CHILD),
    ("athlete", ATHLETE),
];

/// Lookup key for a profile name; names are case-insensitive.
fn profile_key(name: &str) -> String {
    name.trim().to_lowercase()
}

/// Named weight vectors, keyed by lowercase profile name.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(
    try_from = "BTreeMap<String, ProfileWeights>",
    into = "BTreeMap<String, ProfileWeights>"
)]
pub struct ProfileTable {
    profiles: BTreeMap<String, ProfileWeights>,
}

impl ProfileTable {
    // ---
    /// The four built-in profiles.
    pub fn builtin() -> Self {
        // ---
        let profiles = BUILTIN_PROFILES
            .iter()
            .map(|(name, weights)| (name.to_string(), *weights))
            .collect();
        Self { profiles }
    }

    /// A table with no profiles, for building custom sets.
    pub fn empty() -> Self {
        Self {
            profiles: BTreeMap::new(),
        }
    }

    /// Add or replace a profile.
    ///
    /// Rejects negative or non-finite weights. Weights that do not sum to 1
    /// are accepted (composites renormalize) but logged.
    pub fn with_profile(
        mut self,
        name: &str,
        weights: ProfileWeights,
    ) -> Result<Self, ScoringError> {
        // ---
        let key = profile_key(name);
        for factor in Factor::ALL {
            let value = weights.weight(factor);
            if !value.is_finite() || value < 0.0 {
                return Err(ScoringError::InvalidWeight {
                    profile: key,
                    factor,
                    value,
                });
            }
        }

        let total = weights.total();
        if (total - 1.0).abs() > WEIGHT_SUM_TOLERANCE {
            tracing::warn!("Profile '{}' weights sum to {:.4}, not 1.0", key, total);
        }

        self.profiles.insert(key, weights);
        Ok(self)
    }

    /// Look up a profile by name (case-insensitive).
    pub fn get(&self, name: &str) -> Result<&ProfileWeights, ScoringError> {
        // ---
        let key = profile_key(name);
        self.profiles
            .get(&key)
            .ok_or_else(|| ScoringError::UnknownProfile(key))
    }

    pub fn contains(&self, name: &str) -> bool {
        self.profiles.contains_key(&profile_key(name))
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &ProfileWeights)> {
        self.profiles.iter().map(|(name, weights)| (name.as_str(), weights))
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.profiles.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.profiles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.profiles.is_empty()
    }
}

impl Default for ProfileTable {
    fn default() -> Self {
        Self::builtin()
    }
}

impl TryFrom<BTreeMap<String, ProfileWeights>> for ProfileTable {
    type Error = ScoringError;

    fn try_from(map: BTreeMap<String, ProfileWeights>) -> Result<Self, Self::Error> {
        map.into_iter()
            .try_fold(Self::empty(), |table, (name, weights)| {
                table.with_profile(&name, weights)
            })
    }
}

impl From<ProfileTable> for BTreeMap<String, ProfileWeights> {
    fn from(table: ProfileTable) -> Self {
        table.profiles
    }
}

#[cfg(test)]
mod tests {
    // ---
    use super::*;

    #[test]
    fn test_builtin_profiles_sum_to_one() {
        // ---
        let table = ProfileTable::builtin();
        assert_eq!(table.len(), 4);
        for (name, weights) in table.iter() {
            assert!(
                (weights.total() - 1.0).abs() < 1e-9,
                "{name} sums to {}",
                weights.total()
            );
        }
    }

    #[test]
    fn test_lookup_is_case_insensitive() {
        // ---
        let table = ProfileTable::builtin();
        assert_eq!(table.get("ASTHMA").unwrap(), &ASTHMA);
        assert_eq!(table.get(" Elderly_Child ").unwrap(), &ELDERLY_CHILD);
        assert!(table.contains("Athlete"));
    }

    #[test]
    fn test_unknown_profile() {
        // ---
        let table = ProfileTable::builtin();
        assert_eq!(
            table.get("unknown_profile"),
            Err(ScoringError::UnknownProfile("unknown_profile".to_string()))
        );
    }

    #[test]
    fn test_custom_profile_validation() {
        // ---
        let table = ProfileTable::empty()
            .with_profile("Cyclist", ProfileWeights::new(0.1, 0.2, 0.2, 0.1, 0.4))
            .unwrap();
        assert_eq!(table.names().collect::<Vec<_>>(), vec!["cyclist"]);

        let err = ProfileTable::empty()
            .with_profile("broken", ProfileWeights::new(0.5, -0.1, 0.2, 0.2, 0.2))
            .unwrap_err();
        assert!(matches!(
            err,
            ScoringError::InvalidWeight {
                factor: Factor::Temp,
                ..
            }
        ));

        let err = ProfileTable::empty()
            .with_profile("nan", ProfileWeights::new(f64::NAN, 0.2, 0.2, 0.2, 0.2))
            .unwrap_err();
        assert!(matches!(err, ScoringError::InvalidWeight { factor: Factor::Aqi, .. }));
    }

    #[test]
    fn test_table_from_json() {
        // ---
        let json = r#"{"Runner": {"aqi": 0.25, "temp": 0.25, "humidity": 0.1, "uv": 0.1, "wind": 0.3}}"#;
        let table: ProfileTable = serde_json::from_str(json).unwrap();
        assert!(table.contains("runner"));

        let bad = r#"{"x": {"aqi": -1.0, "temp": 0.25, "humidity": 0.1, "uv": 0.1, "wind": 0.3}}"#;
        assert!(serde_json::from_str::<ProfileTable>(bad).is_err());
    }
}
