//! Fit functions mapping a raw sample to distance
//!
//! Two shapes cover the Sharp family:
//! - fifth-order polynomial, for the longer-range parts whose curve has an
//!   inflection
//! - power law `C · x^P`, for the short-range parts whose curve is close to
//!   a hyperbola
//!
//! The variant carries its own parameters, so switching shape replaces the
//! whole parameter set in one assignment.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::{
    constants::sensors::{GP2Y0A60SZLF_5V_COEFFS, MAX_POLY_COEFFS},
    errors::{CalibrationError, CalibrationResult},
};

use super::utils;

/// Which shape a fit function has
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum FitKind {
    /// `Σ c[i] · x^i`
    Polynomial,
    /// `C · x^P`
    PowerLaw,
}

/// Fit function with its parameters
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum FitFunction {
    /// Coefficients for x^0 through x^5; unused high orders are zero
    ///
    /// Deserializes from a list of one to six coefficients, padded and
    /// truncated like [`FitFunction::polynomial`].
    #[cfg_attr(feature = "serde", serde(deserialize_with = "coefficients::deserialize"))]
    Polynomial([f32; MAX_POLY_COEFFS]),

    /// `distance = c · x^p`
    PowerLaw {
        /// Scale
        c: f32,
        /// Exponent (negative for every Sharp part)
        p: f32,
    },
}

impl FitFunction {
    /// Polynomial from up to six coefficients, lowest order first
    ///
    /// Missing high-order coefficients are zero. Coefficients past the sixth
    /// are dropped.
    pub fn polynomial(coeffs: &[f32]) -> Self {
        if coeffs.len() > MAX_POLY_COEFFS {
            log_warn!(
                "{} polynomial coefficients supplied, keeping the first {}",
                coeffs.len(),
                MAX_POLY_COEFFS
            );
        }

        let mut padded = [0.0; MAX_POLY_COEFFS];
        for (slot, &c) in padded.iter_mut().zip(coeffs) {
            *slot = c;
        }

        Self::Polynomial(padded)
    }

    /// Polynomial that rejects oversized, empty, or non-finite input
    pub fn try_polynomial(coeffs: &[f32]) -> CalibrationResult<Self> {
        if coeffs.is_empty() {
            return Err(CalibrationError::NoCoefficients);
        }

        if coeffs.len() > MAX_POLY_COEFFS {
            return Err(CalibrationError::TooManyCoefficients {
                supplied: coeffs.len(),
                max: MAX_POLY_COEFFS,
            });
        }

        utils::check_finite(coeffs)?;

        Ok(Self::polynomial(coeffs))
    }

    /// Power law `c · x^p`
    pub const fn power(c: f32, p: f32) -> Self {
        Self::PowerLaw { c, p }
    }

    /// Power law that rejects non-finite parameters
    pub fn try_power(c: f32, p: f32) -> CalibrationResult<Self> {
        utils::check_finite(&[c, p])?;
        Ok(Self::power(c, p))
    }

    /// Shape of this fit
    pub const fn kind(&self) -> FitKind {
        match self {
            Self::Polynomial(_) => FitKind::Polynomial,
            Self::PowerLaw { .. } => FitKind::PowerLaw,
        }
    }

    /// Evaluate at `x` without rounding
    pub fn eval(&self, x: f32) -> f32 {
        match self {
            Self::Polynomial(coeffs) => utils::polynomial(coeffs, x),
            Self::PowerLaw { c, p } => utils::power(*c, *p, x),
        }
    }
}

impl Default for FitFunction {
    fn default() -> Self {
        Self::Polynomial(GP2Y0A60SZLF_5V_COEFFS)
    }
}

#[cfg(feature = "serde")]
mod coefficients {
    use core::fmt;

    use serde::de::{Deserializer, Error, SeqAccess, Visitor};

    use super::MAX_POLY_COEFFS;

    struct CoefficientList;

    impl<'de> Visitor<'de> for CoefficientList {
        type Value = [f32; MAX_POLY_COEFFS];

        fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
            f.write_str("a list of polynomial coefficients, lowest order first")
        }

        fn visit_seq<A: SeqAccess<'de>>(self, mut seq: A) -> Result<Self::Value, A::Error> {
            let mut kept: heapless::Vec<f32, MAX_POLY_COEFFS> = heapless::Vec::new();
            let mut supplied = 0usize;

            while let Some(c) = seq.next_element::<f32>()? {
                // Past the sixth the push fails and the value is dropped
                let _ = kept.push(c);
                supplied += 1;
            }

            if supplied == 0 {
                return Err(A::Error::invalid_length(0, &self));
            }
            if supplied > MAX_POLY_COEFFS {
                log_warn!(
                    "{} polynomial coefficients in config, keeping the first {}",
                    supplied,
                    MAX_POLY_COEFFS
                );
            }

            let mut padded = [0.0; MAX_POLY_COEFFS];
            for (slot, &c) in padded.iter_mut().zip(kept.iter()) {
                *slot = c;
            }

            Ok(padded)
        }
    }

    pub(super) fn deserialize<'de, D: Deserializer<'de>>(
        deserializer: D,
    ) -> Result<[f32; MAX_POLY_COEFFS], D::Error> {
        deserializer.deserialize_seq(CoefficientList)
    }
}
