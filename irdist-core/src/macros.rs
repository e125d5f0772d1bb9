//! Feature-gated logging
//!
//! `log` on hosted builds, `defmt` on probe-attached targets, nothing otherwise.
//! Format strings must stay within the subset both backends accept (plain `{}`).

#[cfg(feature = "log")]
macro_rules! log_debug {
    ($($arg:tt)*) => { log::debug!($($arg)*) };
}

#[cfg(all(feature = "defmt", not(feature = "log")))]
macro_rules! log_debug {
    ($($arg:tt)*) => { defmt::debug!($($arg)*) };
}

#[cfg(not(any(feature = "log", feature = "defmt")))]
macro_rules! log_debug {
    ($($arg:tt)*) => {};
}

#[cfg(feature = "log")]
macro_rules! log_warn {
    ($($arg:tt)*) => { log::warn!($($arg)*) };
}

#[cfg(all(feature = "defmt", not(feature = "log")))]
macro_rules! log_warn {
    ($($arg:tt)*) => { defmt::warn!($($arg)*) };
}

#[cfg(not(any(feature = "log", feature = "defmt")))]
macro_rules! log_warn {
    ($($arg:tt)*) => {};
}
