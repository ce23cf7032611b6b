//! PM2.5 to US EPA Air Quality Index conversion.
//!
//! Uses the pre-2024 EPA PM2.5 breakpoint table (Good tops out at 12.0 µg/m³),
//! which is what the weather provider's own AQI figures are based on.

use crate::normalize::finite;

// ---

/// Highest value on the AQI scale; concentrations beyond the table cap here.
pub const AQI_MAX: f64 = 500.0;

/// One row of the PM2.5 breakpoint table.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Breakpoint {
    // ---
    pub c_low: f64,
    pub c_high: f64,
    pub i_low: f64,
    pub i_high: f64,
}

impl Breakpoint {
    const fn new(c_low: f64, c_high: f64, i_low: f64, i_high: f64) -> Self {
        Self {
            c_low,
            c_high,
            i_low,
            i_high,
        }
    }

    /// AQI = ((Ihigh - Ilow) / (Chigh - Clow)) * (C - Clow) + Ilow
    fn interpolate(&self, c: f64) -> f64 {
        (self.i_high - self.i_low) / (self.c_high - self.c_low) * (c - self.c_low) + self.i_low
    }
}

/// EPA PM2.5 breakpoints, in ascending order.
pub const PM25_BREAKPOINTS: [Breakpoint; 7] = [
    Breakpoint::new(0.0, 12.0, 0.0, 50.0),        // Good
    Breakpoint::new(12.1, 35.4, 51.0, 100.0),     // Moderate
    Breakpoint::new(35.5, 55.4, 101.0, 150.0),    // Unhealthy for Sensitive Groups
    Breakpoint::new(55.5, 150.4, 151.0, 200.0),   // Unhealthy
    Breakpoint::new(150.5, 250.4, 201.0, 300.0),  // Very Unhealthy
    Breakpoint::new(250.5, 350.4, 301.0, 400.0),  // Hazardous
    Breakpoint::new(350.5, 500.4, 401.0, 500.0),  // Hazardous
];

/// Round to the nearest integer, halves to even.
fn round_aqi(aqi: f64) -> f64 {
    aqi.round_ties_even()
}

/// Convert a PM2.5 concentration (µg/m³) to a US AQI value in `[0, 500]`.
///
/// Concentrations above the table are capped at 500. Missing, non-numeric
/// and negative concentrations yield `None`.
///
/// The published brackets leave 0.1 µg/m³ gaps (e.g. 12.0–12.1). A value in
/// a gap is interpolated in the next bracket up, so the result stays
/// non-decreasing across the whole table.
///
/// # Examples
///
/// ```
/// use comfort_index::aqi::pm25_to_aqi;
///
/// assert_eq!(pm25_to_aqi(Some(6.0)), Some(25.0));
/// assert_eq!(pm25_to_aqi(Some(45.0)), Some(124.0));
/// assert_eq!(pm25_to_aqi(Some(900.0)), Some(500.0));
/// assert_eq!(pm25_to_aqi(None), None);
/// ```
pub fn pm25_to_aqi(pm25: Option<f64>) -> Option<f64> {
    // ---
    let c = finite(pm25)?;
    if c < 0.0 {
        return None;
    }

    match PM25_BREAKPOINTS.iter().find(|bp| c <= bp.c_high) {
        Some(bp) => Some(round_aqi(bp.interpolate(c))),
        None => Some(AQI_MAX),
    }
}
