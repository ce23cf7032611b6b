//! Factor normalization onto the 0–100 severity scale (higher = worse).

// ---

/// Temperature range in °C mapped onto 0–100.
pub const TEMP_RANGE_C: (f64, f64) = (-10.0, 40.0);

/// UV index range mapped onto 0–100.
pub const UV_RANGE: (f64, f64) = (0.0, 11.0);

/// Wind speed range in kph mapped onto 0–100.
pub const WIND_RANGE_KPH: (f64, f64) = (0.0, 120.0);

/// Drop non-numeric values (NaN, ±inf) so they behave like missing input.
pub(crate) fn finite(value: Option<f64>) -> Option<f64> {
    value.filter(|v| v.is_finite())
}

/// Map `value` from `[min, max]` onto `[0, 100]`, clamping outside values.
///
/// A degenerate range (`min == max`) yields 0. Missing or non-numeric input
/// yields `None`.
pub fn normalize(value: Option<f64>, min: f64, max: f64) -> Option<f64> {
    // ---
    let v = finite(value)?;
    if max == min {
        return Some(0.0);
    }
    let t = (v - min) / (max - min);
    if !t.is_finite() {
        return None;
    }
    Some(t.clamp(0.0, 1.0) * 100.0)
}

/// Clamp a percentage into `[0, 100]`; humidity is scored this way.
pub fn clamp_percent(value: Option<f64>) -> Option<f64> {
    finite(value).map(|v| v.clamp(0.0, 100.0))
}
