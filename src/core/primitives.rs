use chrono::{DateTime, Utc};

/// Converts a UTC instant into the whole-second timestamps stored by datasets.
///
/// Sub-second precision is truncated, matching feeds that publish
/// millisecond timestamps but chart them at second resolution.
#[must_use]
pub fn datetime_to_unix_seconds(time: DateTime<Utc>) -> i64 {
    time.timestamp()
}

/// Truncates a millisecond unix timestamp to whole seconds.
#[must_use]
pub const fn unix_millis_to_seconds(millis: i64) -> i64 {
    millis.div_euclid(1000)
}

/// Clamps `value` into `[min, max]`, mapping NaN to `min`.
#[must_use]
pub fn clamp_px(value: f64, min: f64, max: f64) -> f64 {
    if value.is_nan() {
        return min;
    }
    value.clamp(min, max)
}
