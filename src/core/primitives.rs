use chrono::{DateTime, Utc};
use rust_decimal::Decimal;

/// Seconds since the unix epoch, keeping millisecond precision.
#[must_use]
pub fn datetime_to_unix_seconds(time: DateTime<Utc>) -> f64 {
    time.timestamp_millis() as f64 / 1000.0
}

/// Converts a finite float into a decimal carrying its exact binary value,
/// so `1.005` stays just below the midpoint. `None` for NaN and infinities.
#[must_use]
pub fn f64_to_decimal(value: f64) -> Option<Decimal> {
    if !value.is_finite() {
        return None;
    }
    Decimal::from_f64_retain(value)
}
