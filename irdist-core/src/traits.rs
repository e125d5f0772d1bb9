//! Core traits for sample acquisition
//!
//! The conversion engine only needs one thing from the hardware: the latest
//! raw reading of an analog channel. Keep the seam that small so any HAL,
//! a register read, or a test script can sit behind it.

/// Analog input identifier (pin or ADC channel number)
pub type Channel = u8;

/// Source of raw analog samples
///
/// Implementations must return immediately with the most recent conversion.
/// The range is platform-defined (0-1023 on a 10-bit ADC, 0-4095 on 12-bit);
/// calibrations are fitted against a particular resolution.
pub trait SampleSource {
    /// Latest raw reading of `channel`
    fn read(&mut self, channel: Channel) -> u16;
}

/// Any `FnMut(Channel) -> u16` is a sample source
impl<F> SampleSource for F
where
    F: FnMut(Channel) -> u16,
{
    fn read(&mut self, channel: Channel) -> u16 {
        self(channel)
    }
}

/// Adapter for `nb`-style one-shot ADC reads
///
/// Spins while the conversion reports `WouldBlock`. If the read fails, the
/// last good sample is returned instead, since the engine has no error path.
/// Before the first good sample that fallback is `initial`.
#[derive(Debug, Clone)]
pub struct BlockingAdc<F> {
    read: F,
    last_good: u16,
    failures: u32,
}

impl<F, E> BlockingAdc<F>
where
    F: FnMut(Channel) -> nb::Result<u16, E>,
{
    /// Wrap an `nb` read with a fallback value for failed conversions
    pub fn new(read: F, initial: u16) -> Self {
        Self {
            read,
            last_good: initial,
            failures: 0,
        }
    }

    /// Number of failed conversions replaced by the last good sample
    pub fn failures(&self) -> u32 {
        self.failures
    }

    /// Give back the wrapped read function
    pub fn into_inner(self) -> F {
        self.read
    }
}

impl<F, E> SampleSource for BlockingAdc<F>
where
    F: FnMut(Channel) -> nb::Result<u16, E>,
{
    fn read(&mut self, channel: Channel) -> u16 {
        match nb::block!((self.read)(channel)) {
            Ok(value) => {
                self.last_good = value;
                value
            }
            Err(_) => {
                self.failures = self.failures.saturating_add(1);
                log_warn!(
                    "ADC read on channel {} failed, reusing {}",
                    channel,
                    self.last_good
                );
                self.last_good
            }
        }
    }
}
