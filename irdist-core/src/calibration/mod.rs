//! Analog-to-Distance Calibration
//!
//! ## Overview
//!
//! Sharp IR rangers output a voltage that falls roughly with the inverse of
//! distance. The relationship is nonlinear and differs per model, so each
//! model gets a curve fit of distance (mm) against the raw analog value,
//! valid only over the analog range it was fitted on.
//!
//! A [`CalibrationModel`] is that pair: a [`FitFunction`] and a [`Domain`].
//!
//! ## Conversion Steps
//!
//! ```text
//! raw sample ──► clamp to domain ──► fit(x) ──► round, saturate ──► mm
//!     10              30            1481.46          1481
//! ```
//!
//! ### 1. Domain Clamp
//! Outside the fitted range the polynomial fits swing wildly (a fifth-order
//! polynomial does not stay monotonic for long). Clamping makes a sample past
//! the sensor's range report the range limit instead.
//!
//! ### 2. Fit Evaluation
//! Polynomial fits are evaluated with Horner's scheme; power fits through
//! `libm::powf`. Both in `f32`.
//!
//! ### 3. Rounding
//! The result is rounded to whole millimetres and saturated into `u16`. A
//! misconfigured fit that goes negative reads as 0 mm rather than wrapping
//! around to 65 m.
//!
//! ## Replacing a Calibration
//!
//! Each setter replaces fit and domain together, so no reading ever sees a
//! new fit against an old domain:
//!
//! ```rust
//! use irdist_core::calibration::{CalibrationModel, FitKind, Preset};
//!
//! let mut model = CalibrationModel::default();
//! assert_eq!(model.fit().kind(), FitKind::Polynomial);
//!
//! model.set_power_fit(4.03576e4, -1.26093, 70, 500);
//! assert_eq!(model.fit().kind(), FitKind::PowerLaw);
//!
//! model.select_preset(Preset::Gp2y0a41sk0f);
//! assert_eq!(model.domain().min(), 61);
//! ```

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

mod domain;
mod fit;
mod preset;
mod utils;

pub use domain::Domain;
pub use fit::{FitFunction, FitKind};
pub use preset::Preset;
pub use utils::to_distance;

/// Fit function plus the analog range it applies to
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct CalibrationModel {
    fit: FitFunction,
    domain: Domain,
}

impl CalibrationModel {
    /// Calibration from an explicit fit and domain
    pub const fn new(fit: FitFunction, domain: Domain) -> Self {
        Self { fit, domain }
    }

    /// Calibration of a registered sensor model
    pub fn from_preset(preset: Preset) -> Self {
        preset.calibration()
    }

    /// Active fit function
    pub fn fit(&self) -> &FitFunction {
        &self.fit
    }

    /// Active input domain
    pub fn domain(&self) -> Domain {
        self.domain
    }

    /// Switch to a polynomial fit over `[min, max]`
    ///
    /// Up to six coefficients, x^0 first. Missing orders are zero, extra
    /// coefficients are dropped.
    pub fn set_polynomial_fit(&mut self, coeffs: &[f32], min: u16, max: u16) {
        self.replace(FitFunction::polynomial(coeffs), Domain::new(min, max));
    }

    /// Switch to a power fit `c · x^p` over `[min, max]`
    pub fn set_power_fit(&mut self, c: f32, p: f32, min: u16, max: u16) {
        self.replace(FitFunction::power(c, p), Domain::new(min, max));
    }

    /// Replace only the clamp bounds, keeping the fit
    ///
    /// `min <= max` is the caller's contract, see [`Domain::new`].
    pub fn set_domain(&mut self, min: u16, max: u16) {
        self.domain = Domain::new(min, max);
    }

    /// Load the calibration of a registered sensor model
    pub fn select_preset(&mut self, preset: Preset) {
        log_debug!("Selecting sensor preset {}", preset.name());
        let calibration = preset.calibration();
        self.replace(calibration.fit, calibration.domain);
    }

    /// Convert a raw sample to millimetres
    pub fn evaluate(&self, raw: u16) -> u16 {
        to_distance(self.evaluate_raw(raw))
    }

    /// Fit value for a raw sample, clamped but not rounded
    ///
    /// Useful when checking a calibration against reference distances.
    pub fn evaluate_raw(&self, raw: u16) -> f32 {
        let x = self.domain.clamp(raw);
        self.fit.eval(f32::from(x))
    }

    fn replace(&mut self, fit: FitFunction, domain: Domain) {
        log_debug!(
            "Calibration replaced: polynomial={} domain=[{}, {}]",
            fit.kind() == FitKind::Polynomial,
            domain.min(),
            domain.max()
        );
        *self = Self { fit, domain };
    }
}

impl Default for CalibrationModel {
    fn default() -> Self {
        Self::from_preset(Preset::default())
    }
}

impl From<Preset> for CalibrationModel {
    fn from(preset: Preset) -> Self {
        preset.calibration()
    }
}
