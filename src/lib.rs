//! Human Comfort Index scoring engine.
//!
//! Converts environmental readings (temperature, humidity, UV, wind,
//! particulates) into per-factor severity scores, combines them under an
//! audience profile into a 0–100 comfort value, projects that value onto
//! forecast days, and classifies it into a comfort band.
//!
//! Data flows strictly downward:
//! - [`aqi`] and [`normalize`] map raw measurements onto 0–100 severities
//! - [`components`] scores one [`EnvironmentalReading`]
//! - [`composite`] weights the scores under a [`profiles::ProfileWeights`]
//! - [`forecast`] and [`bands`] project and classify the composite
//!
//! [`legacy`] keeps the older `(temp + humidity) / 4` index alongside, and
//! [`assessment`] runs the whole pipeline for one request.
//!
//! All operations are pure functions of their inputs. The profile table and
//! engine configuration are immutable values passed in by the caller, so any
//! number of requests can be scored concurrently.
//!
//! ```
//! use comfort_index::{score_components, score_profile, EnvironmentalReading, ProfileTable};
//!
//! let reading = EnvironmentalReading::new(25.0, 50.0, 10.0)
//!     .with_uv(5.0)
//!     .with_pm25(10.0);
//! let scores = score_components(&reading);
//! let composite = score_profile(&ProfileTable::builtin(), "general", &scores).unwrap();
//! assert_eq!(composite.value, Some(68.72));
//! ```

pub mod aqi;
pub mod assessment;
pub mod bands;
pub mod components;
pub mod composite;
pub mod config;
pub mod error;
pub mod forecast;
pub mod legacy;
pub mod models;
pub mod normalize;
pub mod persona;
pub mod profiles;

pub use assessment::{assess, AssessmentRequest, ComfortReport};
pub use bands::{interpret, ComfortBand, ComfortLevel};
pub use components::{score_components, ComponentScores};
pub use composite::{composite_value, score_all_profiles, score_profile, CompositeScore};
pub use config::EngineConfig;
pub use error::ScoringError;
pub use forecast::{project, ForecastEstimate};
pub use legacy::{simple_comfort, SimpleComfort};
pub use models::{AirQuality, EnvironmentalReading, ForecastDay};
pub use persona::PersonAdvisory;
pub use profiles::{Factor, ProfileTable, ProfileWeights};
