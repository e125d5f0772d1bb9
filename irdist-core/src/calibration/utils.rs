//! Numeric helpers shared by the fit functions
//!
//! Pure functions, no state. All arithmetic is `f32` through `libm` so a
//! Cortex-M0 without an FPU and a desktop test run produce the same bits.

use crate::errors::{CalibrationError, CalibrationResult};

/// Evaluate `c[0] + c[1]·x + … + c[n]·x^n` with Horner's scheme
pub fn polynomial(coeffs: &[f32], x: f32) -> f32 {
    coeffs.iter().rev().fold(0.0, |acc, &c| acc * x + c)
}

/// Evaluate `c · x^p`
pub fn power(c: f32, p: f32, x: f32) -> f32 {
    c * libm::powf(x, p)
}

/// Round a fit result to whole millimetres, saturating into `u16`
///
/// Negative results become 0, results past `u16::MAX` (including +inf from
/// a power fit at x = 0) become `u16::MAX`, NaN becomes 0. Rounding is half
/// away from zero.
pub fn to_distance(value: f32) -> u16 {
    let rounded = libm::roundf(value);

    if rounded.is_nan() || rounded <= 0.0 {
        0
    } else if rounded >= u16::MAX as f32 {
        u16::MAX
    } else {
        rounded as u16
    }
}

/// Reject NaN and infinite coefficients
pub fn check_finite(coeffs: &[f32]) -> CalibrationResult<()> {
    if coeffs.iter().all(|c| c.is_finite()) {
        Ok(())
    } else {
        Err(CalibrationError::NonFiniteCoefficient)
    }
}
