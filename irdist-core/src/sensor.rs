//! Distance Conversion Engine
//!
//! ## Overview
//!
//! [`DistanceSensor`] ties one analog channel to a calibration and an
//! optional median filter. Each call to [`DistanceSensor::get_distance`]
//! runs the whole chain synchronously:
//!
//! ```text
//! SampleSource::read(channel)
//!        │ raw counts
//!        ▼
//! CalibrationModel::evaluate      clamp to domain, fit, round
//!        │ mm
//!        ▼
//! MedianFilter::push              only when the window is longer than 1
//!        │ mm
//!        ▼
//!     distance
//! ```
//!
//! ## Construction Variants
//!
//! | Constructor | Calibration |
//! |---|---|
//! | [`new`](DistanceSensor::new) | default preset (GP2Y0A60SZLF) |
//! | [`with_domain`](DistanceSensor::with_domain) | default fit, caller's analog range |
//! | [`with_calibration`](DistanceSensor::with_calibration) | caller's fit and range |
//! | [`with_preset`](DistanceSensor::with_preset) | named preset |
//! | [`from_config`](DistanceSensor::from_config) | any of the above from a [`SensorConfig`] |
//!
//! Channel and filter window are fixed for the sensor's lifetime; the
//! calibration can be swapped at any time.
//!
//! ## Usage Example
//!
//! ```rust
//! use irdist_core::{DistanceSensor, Preset};
//!
//! // Stand-in for an ADC read
//! let adc = |_channel: u8| 200u16;
//!
//! let mut sensor: DistanceSensor<_> =
//!     DistanceSensor::with_preset(adc, 0, 1, Preset::Gp2y0a51sk0f);
//!
//! assert_eq!(sensor.get_distance(), 51);
//! ```
//!
//! ## Capacity
//!
//! The median window is stored inline. `N` (default
//! [`DEFAULT_MAX_WINDOW`]) bounds the window length; larger requests are
//! clamped down. With `N = 1` every request clamps to 1 and smoothing is
//! off whatever `filter_window` says.
//!
//! ## Snapshots
//!
//! [`DistanceSensor::config`] reports a preset by name while the sensor is
//! still running one, and the explicit fit and range once any setter has
//! changed it.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::{
    calibration::{CalibrationModel, Domain, FitFunction, Preset},
    constants::buffers::{DEFAULT_FILTER_WINDOW, DEFAULT_MAX_WINDOW, FILTER_SEED_MM},
    filter::MedianFilter,
    traits::{Channel, SampleSource},
};

/// Where a sensor's initial calibration comes from
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum CalibrationSource {
    /// Default preset
    #[default]
    Default,

    /// Default preset's fit over a custom analog range
    Domain(Domain),

    /// Explicit fit and range
    Fit {
        /// Fit function
        fit: FitFunction,
        /// Analog range
        domain: Domain,
    },

    /// Named preset
    Preset(Preset),
}

impl CalibrationSource {
    /// Resolve to a concrete calibration
    pub fn model(&self) -> CalibrationModel {
        match *self {
            Self::Default => CalibrationModel::default(),
            Self::Domain(domain) => CalibrationModel::new(FitFunction::default(), domain),
            Self::Fit { fit, domain } => CalibrationModel::new(fit, domain),
            Self::Preset(preset) => preset.calibration(),
        }
    }
}

/// Everything needed to set up a [`DistanceSensor`] apart from its sample source
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct SensorConfig {
    /// Analog input the sensor is wired to
    pub channel: Channel,

    /// Median window length; 0 or 1 disables smoothing
    pub filter_window: usize,

    /// Initial calibration
    pub calibration: CalibrationSource,
}

impl Default for SensorConfig {
    fn default() -> Self {
        Self {
            channel: 0,
            filter_window: DEFAULT_FILTER_WINDOW,
            calibration: CalibrationSource::Default,
        }
    }
}

/// Sharp IR distance sensor on one analog channel
///
/// Output is in millimetres.
///
/// `N` is the inline median capacity. Every constructor clamps its
/// `filter_window` argument into `1..=N`, so a `DistanceSensor<_, 1>` never
/// smooths; check [`filter_window`](Self::filter_window) or
/// [`is_smoothing`](Self::is_smoothing) for the effective setting.
#[derive(Debug, Clone)]
pub struct DistanceSensor<S, const N: usize = DEFAULT_MAX_WINDOW> {
    source: S,
    channel: Channel,
    calibration: CalibrationModel,
    /// Preset the calibration still matches, if any
    preset: Option<Preset>,
    smoother: MedianFilter<N>,
}

impl<S: SampleSource, const N: usize> DistanceSensor<S, N> {
    /// Sensor with the default preset
    ///
    /// `filter_window` is clamped to `N`; 0 or 1 disables smoothing.
    pub fn new(source: S, channel: Channel, filter_window: usize) -> Self {
        Self::with_preset(source, channel, filter_window, Preset::default())
    }

    /// Sensor with the default preset's fit over a custom analog range
    pub fn with_domain(
        source: S,
        channel: Channel,
        filter_window: usize,
        min: u16,
        max: u16,
    ) -> Self {
        let calibration = CalibrationModel::new(FitFunction::default(), Domain::new(min, max));
        Self::with_calibration(source, channel, filter_window, calibration)
    }

    /// Sensor with a named preset
    pub fn with_preset(
        source: S,
        channel: Channel,
        filter_window: usize,
        preset: Preset,
    ) -> Self {
        Self::build(source, channel, filter_window, preset.calibration(), Some(preset))
    }

    /// Sensor with an explicit calibration
    pub fn with_calibration(
        source: S,
        channel: Channel,
        filter_window: usize,
        calibration: CalibrationModel,
    ) -> Self {
        Self::build(source, channel, filter_window, calibration, None)
    }

    /// Sensor described by a [`SensorConfig`]
    pub fn from_config(source: S, config: &SensorConfig) -> Self {
        let preset = match config.calibration {
            CalibrationSource::Default => Some(Preset::default()),
            CalibrationSource::Preset(preset) => Some(preset),
            CalibrationSource::Domain(_) | CalibrationSource::Fit { .. } => None,
        };

        Self::build(
            source,
            config.channel,
            config.filter_window,
            config.calibration.model(),
            preset,
        )
    }

    fn build(
        source: S,
        channel: Channel,
        filter_window: usize,
        calibration: CalibrationModel,
        preset: Option<Preset>,
    ) -> Self {
        log_debug!(
            "Distance sensor on channel {} with median window {}",
            channel,
            filter_window
        );

        Self {
            source,
            channel,
            calibration,
            preset,
            smoother: MedianFilter::new(filter_window, FILTER_SEED_MM),
        }
    }

    /// Read the channel and return the (smoothed) distance in mm
    ///
    /// Advances the median window when smoothing is on.
    pub fn get_distance(&mut self) -> u16 {
        let raw = self.source.read(self.channel);
        self.convert(raw)
    }

    /// Run a caller-supplied raw sample through calibration and smoothing
    pub fn convert(&mut self, raw: u16) -> u16 {
        let distance = self.calibration.evaluate(raw);

        if self.is_smoothing() {
            self.smoother.push(distance)
        } else {
            distance
        }
    }

    /// Load a preset calibration
    pub fn set_model(&mut self, preset: Preset) {
        self.calibration.select_preset(preset);
        self.preset = Some(preset);
    }

    /// Switch to a polynomial fit, see [`CalibrationModel::set_polynomial_fit`]
    pub fn set_polynomial_fit(&mut self, coeffs: &[f32], min: u16, max: u16) {
        self.calibration.set_polynomial_fit(coeffs, min, max);
        self.preset = None;
    }

    /// Switch to a power fit, see [`CalibrationModel::set_power_fit`]
    pub fn set_power_fit(&mut self, c: f32, p: f32, min: u16, max: u16) {
        self.calibration.set_power_fit(c, p, min, max);
        self.preset = None;
    }

    /// Replace the analog clamp range only
    pub fn set_domain(&mut self, min: u16, max: u16) {
        self.calibration.set_domain(min, max);
        self.preset = None;
    }
}

impl<S, const N: usize> DistanceSensor<S, N> {
    /// Analog input this sensor reads
    pub fn channel(&self) -> Channel {
        self.channel
    }

    /// Effective median window length (after clamping)
    pub fn filter_window(&self) -> usize {
        self.smoother.window()
    }

    /// Whether readings go through the median filter
    pub fn is_smoothing(&self) -> bool {
        self.smoother.window() > 1
    }

    /// Active calibration
    pub fn calibration(&self) -> &CalibrationModel {
        &self.calibration
    }

    /// Preset the active calibration came from, until a setter replaced it
    pub fn preset(&self) -> Option<Preset> {
        self.preset
    }

    /// Snapshot of the current setup
    ///
    /// Names the preset while one is active, otherwise records the explicit
    /// fit and range.
    pub fn config(&self) -> SensorConfig {
        let calibration = match self.preset {
            Some(preset) => CalibrationSource::Preset(preset),
            None => CalibrationSource::Fit {
                fit: *self.calibration.fit(),
                domain: self.calibration.domain(),
            },
        };

        SensorConfig {
            channel: self.channel,
            filter_window: self.filter_window(),
            calibration,
        }
    }

    /// Tear down the sensor and give back the sample source
    pub fn release(self) -> S {
        self.source
    }
}
