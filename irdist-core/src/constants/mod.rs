//! Constants for irdist Core
//!
//! Every numeric value the conversion chain depends on lives here, next to
//! the datasheet or reasoning it came from.
//!
//! ## Organization
//!
//! - **Sensors**: Curve-fit coefficients and valid analog ranges per Sharp model
//! - **Buffers**: Median filter sizing and seeding
//!
//! ## Usage Guidelines
//!
//! 1. Use these constants instead of magic numbers
//! 2. Cite the datasheet or measurement a new table came from
//! 3. Include units in names (`_MM`, raw ADC counts are unitless)

/// Calibration tables for supported Sharp sensor models.
pub mod sensors;

/// Filter window sizes and seed values.
pub mod buffers;

pub use buffers::{
    DEFAULT_FILTER_WINDOW, DEFAULT_MAX_WINDOW, FILTER_SEED_MM, MIN_FILTER_WINDOW,
};

pub use sensors::MAX_POLY_COEFFS;
