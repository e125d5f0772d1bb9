//! Error Types for Calibration Setup
//!
//! ## Where Errors Can Happen
//!
//! The per-reading path never fails. A raw sample outside the calibrated
//! domain is clamped, a fit result below zero saturates to zero, and an
//! oversized coefficient list is truncated. None of that needs a `Result`
//! on a control loop that polls every few milliseconds.
//!
//! Errors only exist on the *checked* construction paths, for integrators
//! who build calibrations from external data (a host-side config file, a
//! serial console) and want to reject bad input instead of silently
//! clamping it:
//!
//! - `FitFunction::try_polynomial` / `FitFunction::try_power`
//! - `Domain::try_new`
//! - `Preset::from_str`
//!
//! ## Error Handling Strategy
//!
//! ```rust
//! use irdist_core::{CalibrationError, FitFunction};
//!
//! fn load_fit(coeffs: &[f32]) -> FitFunction {
//!     match FitFunction::try_polynomial(coeffs) {
//!         Ok(fit) => fit,
//!         Err(CalibrationError::TooManyCoefficients { .. }) => {
//!             // Fit was made for a higher degree than we evaluate
//!             FitFunction::polynomial(coeffs)
//!         }
//!         Err(_) => FitFunction::default(),
//!     }
//! }
//! # let _ = load_fit(&[1.0, 2.0]);
//! ```
//!
//! Like the rest of the crate, every variant is `Copy` and carries no heap data.

use thiserror_no_std::Error;

/// Result type for checked calibration setup
pub type CalibrationResult<T> = Result<T, CalibrationError>;

/// Calibration setup errors - kept small for embedded use
#[derive(Error, Debug, Clone, Copy, PartialEq)]
pub enum CalibrationError {
    /// More polynomial coefficients than the evaluator supports
    #[error("{supplied} polynomial coefficients supplied, at most {max} supported")]
    TooManyCoefficients {
        /// Number of coefficients handed in
        supplied: usize,
        /// Highest supported count (degree + 1)
        max: usize,
    },

    /// Polynomial fit without even a constant term
    #[error("Polynomial fit needs at least one coefficient")]
    NoCoefficients,

    /// Domain lower bound above upper bound
    #[error("Domain [{min}, {max}] is inverted")]
    InvertedDomain {
        /// Requested lower bound
        min: u16,
        /// Requested upper bound
        max: u16,
    },

    /// NaN or infinite coefficient
    #[error("Invalid coefficient: not a finite number")]
    NonFiniteCoefficient,

    /// Preset name not in the registry
    #[error("Unknown sensor preset")]
    UnknownPreset,
}

#[cfg(feature = "defmt")]
impl defmt::Format for CalibrationError {
    fn format(&self, fmt: defmt::Formatter) {
        match self {
            Self::TooManyCoefficients { supplied, max } =>
                defmt::write!(fmt, "{} coefficients, max {}", supplied, max),
            Self::NoCoefficients =>
                defmt::write!(fmt, "No coefficients"),
            Self::InvertedDomain { min, max } =>
                defmt::write!(fmt, "Domain [{}, {}] inverted", min, max),
            Self::NonFiniteCoefficient =>
                defmt::write!(fmt, "Non-finite coefficient"),
            Self::UnknownPreset =>
                defmt::write!(fmt, "Unknown preset"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn errors_stay_small() {
        assert!(core::mem::size_of::<CalibrationError>() <= 24);
    }

    #[cfg(feature = "std")]
    #[test]
    fn messages_name_the_problem() {
        let err = CalibrationError::TooManyCoefficients { supplied: 7, max: 6 };
        assert_eq!(
            err.to_string(),
            "7 polynomial coefficients supplied, at most 6 supported"
        );

        let err = CalibrationError::InvertedDomain { min: 900, max: 30 };
        assert_eq!(err.to_string(), "Domain [900, 30] is inverted");
    }
}
