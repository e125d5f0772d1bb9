//! Analog input domain of a fit
//!
//! A curve fit is only meaningful over the analog range it was fitted on.
//! Samples outside that range are clamped to the nearest bound before
//! evaluation, so a reading past the sensor's minimum or maximum distance
//! reports that distance instead of extrapolating.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::errors::{CalibrationError, CalibrationResult};

/// Inclusive range of raw analog values a fit is valid for
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Domain {
    /// Lowest raw value passed to the fit
    min: u16,

    /// Highest raw value passed to the fit
    max: u16,
}

impl Domain {
    /// Create a domain without checking the bounds
    ///
    /// `min <= max` is the caller's contract. An inverted domain is stored
    /// as given; clamping against it never panics but the result is only
    /// ever one of the two bounds.
    pub const fn new(min: u16, max: u16) -> Self {
        Self { min, max }
    }

    /// Create a domain, rejecting inverted bounds
    pub fn try_new(min: u16, max: u16) -> CalibrationResult<Self> {
        if min > max {
            return Err(CalibrationError::InvertedDomain { min, max });
        }

        Ok(Self { min, max })
    }

    /// Domain spanning the whole 16-bit sample range
    pub const fn full() -> Self {
        Self { min: 0, max: u16::MAX }
    }

    /// Lower bound (inclusive)
    pub const fn min(&self) -> u16 {
        self.min
    }

    /// Upper bound (inclusive)
    pub const fn max(&self) -> u16 {
        self.max
    }

    /// Check whether a raw sample lies inside the domain
    pub const fn contains(&self, raw: u16) -> bool {
        raw >= self.min && raw <= self.max
    }

    /// Clamp a raw sample into the domain
    ///
    /// Unlike `Ord::clamp` this does not assert `min <= max`.
    pub const fn clamp(&self, raw: u16) -> u16 {
        if raw < self.min {
            self.min
        } else if raw > self.max {
            self.max
        } else {
            raw
        }
    }
}

impl Default for Domain {
    fn default() -> Self {
        Self::full()
    }
}

impl From<(u16, u16)> for Domain {
    fn from((min, max): (u16, u16)) -> Self {
        Self::new(min, max)
    }
}
