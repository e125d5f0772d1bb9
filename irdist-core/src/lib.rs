//! Analog-to-distance conversion for Sharp IR rangers
//!
//! Turns raw analog readings from a Sharp infrared distance sensor into
//! millimetres using a datasheet curve fit, with optional median smoothing.
//! Designed for small microcontrollers polling one sensor per control loop.
//!
//! Key constraints:
//! - No heap allocation; window storage is inline
//! - No error path per reading (clamp, saturate, carry on)
//! - Same `f32` results on FPU-less targets and host tests (`libm`)
//!
//! ```no_run
//! use irdist_core::{DistanceSensor, Preset};
//!
//! # fn analog_read(_pin: u8) -> u16 { 512 }
//! let mut sensor: DistanceSensor<_> =
//!     DistanceSensor::with_preset(analog_read, 0, 5, Preset::Gp2y0a60szlf);
//!
//! loop {
//!     let mm = sensor.get_distance();
//!     // steer away if mm < 200
//! #   let _ = mm;
//! }
//! ```

#![cfg_attr(not(feature = "std"), no_std)]
#![deny(unsafe_code)]
#![warn(missing_docs)]

#[macro_use]
mod macros;

pub mod calibration;
pub mod constants;
pub mod errors;
pub mod filter;
pub mod sensor;
pub mod traits;
pub mod window;

// Public API
pub use calibration::{CalibrationModel, Domain, FitFunction, FitKind, Preset};
pub use errors::{CalibrationError, CalibrationResult};
pub use filter::MedianFilter;
pub use sensor::{CalibrationSource, DistanceSensor, SensorConfig};
pub use traits::{BlockingAdc, Channel, SampleSource};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
