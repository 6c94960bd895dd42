//! Common utilities for device calculations.

use crate::error::{DeviceError, DeviceResult};
use dk_core::numeric::ensure_in_range;

/// Ensure a parameter lies in `[min, max]`, reporting a ParameterRange error otherwise.
pub fn check_range(value: f64, min: f64, max: f64, what: &'static str) -> DeviceResult<f64> {
    ensure_in_range(value, min, max, what).map_err(|_| DeviceError::ParameterRange {
        what,
        value,
        min,
        max,
    })
}

/// Upper clamp only. Values below `max` pass through untouched.
pub fn clamp_upper(value: f64, max: f64) -> f64 {
    if value > max { max } else { value }
}
