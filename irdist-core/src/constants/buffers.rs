//! Median Filter Sizing
//!
//! The smoothing window is stored inline, so its capacity is a compile-time
//! constant while the active window length is picked at construction.

/// Default storage capacity of a sensor's median window (samples).
///
/// 32 × 2 bytes of window plus 32 × 2 bytes of sort scratch. Odd windows up
/// to 31 fit, which covers every practical Sharp polling setup.
pub const DEFAULT_MAX_WINDOW: usize = 32;

/// Smallest window the filter will run with (samples).
///
/// A window of one is a pass-through, so the engine skips the filter
/// entirely at or below this size.
pub const MIN_FILTER_WINDOW: usize = 1;

/// Window used when the integrator does not ask for smoothing.
pub const DEFAULT_FILTER_WINDOW: usize = 1;

/// Value every window slot holds before real readings arrive (mm).
///
/// Mid-range of the default GP2Y0A60SZLF (50-1500 mm). Seeding avoids a
/// median of empty slots dragging the first readings to zero.
pub const FILTER_SEED_MM: u16 = 1500;
