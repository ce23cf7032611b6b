//! Configuration loader for the `comfort-index` engine.
//!
//! The engine itself never reads the environment; host applications build an
//! [`EngineConfig`] here once at startup (with optional `.env` file support
//! provided by the caller) and pass it into each assessment. Keeping the
//! `env::var` calls in one place avoids scattering them through the codebase.
use std::env;

use anyhow::{anyhow, bail, Result};

use crate::forecast::DEFAULT_MAX_DEVIATION;
use crate::profiles::DEFAULT_PROFILE;

/// Providers only forecast this many days on the free tier.
pub const DEFAULT_MAX_FORECAST_DAYS: usize = 3;

/// Parse an optional environment variable into `$ty`, with a default value.
macro_rules! parse_env {
    ($lookup:expr, $var_name:expr, $ty:ty, $default:expr) => {
        $lookup($var_name)
            .map(|v| v.trim().parse::<$ty>())
            .transpose()
            .map_err(|e| anyhow!("Invalid {}: {}", $var_name, e))?
            .unwrap_or($default)
    };
}

/// Strongly typed engine configuration.
///
/// All fields are immutable after loading, ensuring a consistent configuration
/// snapshot for the lifetime of the application.
#[derive(Debug, Clone, PartialEq)]
pub struct EngineConfig {
    // ---
    /// Profile used when a request names none.
    pub default_profile: String,

    /// Maximum distance between a forecast composite and today's.
    pub forecast_max_deviation: f64,

    /// Forecast days scored per request (safety limit).
    pub max_forecast_days: usize,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            default_profile: DEFAULT_PROFILE.to_string(),
            forecast_max_deviation: DEFAULT_MAX_DEVIATION,
            max_forecast_days: DEFAULT_MAX_FORECAST_DAYS,
        }
    }
}

/// Load configuration from environment variables with defaults.
///
/// Optional:
/// - `HCI_DEFAULT_PROFILE` – profile used when a request names none (default: `general`)
/// - `HCI_FORECAST_MAX_DEVIATION` – forecast clamp distance (default: 15)
/// - `HCI_MAX_FORECAST_DAYS` – forecast days scored per request (default: 3)
///
/// Returns an error if any variable is present but invalid.
pub fn load_from_env() -> Result<EngineConfig> {
    from_lookup(|key| env::var(key).ok())
}

/// Build the configuration from an arbitrary key lookup.
pub fn from_lookup<F>(lookup: F) -> Result<EngineConfig>
where
    F: Fn(&str) -> Option<String>,
{
    // ---
    let default_profile = lookup("HCI_DEFAULT_PROFILE")
        .map(|p| p.trim().to_lowercase())
        .filter(|p| !p.is_empty())
        .unwrap_or_else(|| DEFAULT_PROFILE.to_string());
    let forecast_max_deviation = parse_env!(
        lookup,
        "HCI_FORECAST_MAX_DEVIATION",
        f64,
        DEFAULT_MAX_DEVIATION
    );
    let max_forecast_days = parse_env!(
        lookup,
        "HCI_MAX_FORECAST_DAYS",
        usize,
        DEFAULT_MAX_FORECAST_DAYS
    );

    if !forecast_max_deviation.is_finite() || forecast_max_deviation < 0.0 {
        bail!(
            "Invalid HCI_FORECAST_MAX_DEVIATION: {} (must be a non-negative number)",
            forecast_max_deviation
        );
    }

    Ok(EngineConfig {
        default_profile,
        forecast_max_deviation,
        max_forecast_days,
    })
}

impl EngineConfig {
    /// Log the loaded configuration for debugging purposes.
    pub fn log_config(&self) {
        // ---
        tracing::info!("Configuration loaded:");
        tracing::info!("  HCI_DEFAULT_PROFILE        : {}", self.default_profile);
        tracing::info!("  HCI_FORECAST_MAX_DEVIATION : {}", self.forecast_max_deviation);
        tracing::info!("  HCI_MAX_FORECAST_DAYS      : {}", self.max_forecast_days);
    }
}

#[cfg(test)]
mod tests {
    // ---
    use super::*;
    use std::collections::HashMap;

    fn load(vars: &[(&str, &str)]) -> Result<EngineConfig> {
        let map: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        from_lookup(|key| map.get(key).cloned())
    }

    #[test]
    fn test_defaults() {
        // ---
        assert_eq!(load(&[]).unwrap(), EngineConfig::default());
    }

    #[test]
    fn test_overrides() {
        // ---
        let cfg = load(&[
            ("HCI_DEFAULT_PROFILE", " Asthma "),
            ("HCI_FORECAST_MAX_DEVIATION", "10.5"),
            ("HCI_MAX_FORECAST_DAYS", "7"),
        ])
        .unwrap();
        assert_eq!(cfg.default_profile, "asthma");
        assert_eq!(cfg.forecast_max_deviation, 10.5);
        assert_eq!(cfg.max_forecast_days, 7);
    }

    #[test]
    fn test_invalid_values() {
        // ---
        let err = load(&[("HCI_MAX_FORECAST_DAYS", "three")]).unwrap_err();
        assert!(err.to_string().contains("HCI_MAX_FORECAST_DAYS"));

        assert!(load(&[("HCI_FORECAST_MAX_DEVIATION", "-1")]).is_err());
        assert!(load(&[("HCI_FORECAST_MAX_DEVIATION", "NaN")]).is_err());
    }

    #[test]
    fn test_blank_profile_uses_default() {
        // ---
        let cfg = load(&[("HCI_DEFAULT_PROFILE", "  ")]).unwrap();
        assert_eq!(cfg.default_profile, DEFAULT_PROFILE);
    }
}
