//! Streaming median filter
//!
//! Sharp rangers produce occasional single-sample spikes (supply ripple from
//! the emitter pulse, a reflective edge crossing the beam). A median over the
//! last few readings removes those spikes without the lag an average adds.
//!
//! The window starts full of a seed value (see
//! [`FILTER_SEED_MM`](crate::constants::FILTER_SEED_MM)), so the output moves
//! toward real readings once they outnumber the seeds.

use heapless::Vec;

use crate::{
    constants::buffers::{FILTER_SEED_MM, MIN_FILTER_WINDOW},
    window::SampleWindow,
};

/// Median of the last `window` samples, storage for up to `N`
#[derive(Debug, Clone)]
pub struct MedianFilter<const N: usize> {
    samples: SampleWindow<N>,
}

impl<const N: usize> MedianFilter<N> {
    /// Create a filter over `window` samples, all seeded with `seed`
    ///
    /// `window` is clamped into `MIN_FILTER_WINDOW..=N`.
    pub fn new(window: usize, seed: u16) -> Self {
        if window > N {
            log_warn!("Median window {} exceeds capacity {}, clamping", window, N);
        }

        Self {
            samples: SampleWindow::new(window.max(MIN_FILTER_WINDOW), seed),
        }
    }

    /// Active window length
    pub fn window(&self) -> usize {
        self.samples.len()
    }

    /// Admit a sample and return the median of the updated window
    pub fn push(&mut self, value: u16) -> u16 {
        self.samples.push(value);
        self.median()
    }

    /// Median of the current window
    ///
    /// For even windows this is the upper of the two middle samples.
    pub fn median(&self) -> u16 {
        let mut sorted: Vec<u16, N> = self.samples.iter().collect();
        sorted.sort_unstable();
        sorted[sorted.len() / 2]
    }

    /// Discard history and refill the window with `seed`
    pub fn reset(&mut self, seed: u16) {
        self.samples.fill(seed);
    }
}

impl<const N: usize> Default for MedianFilter<N> {
    fn default() -> Self {
        Self::new(N, FILTER_SEED_MM)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn seeded_window_outvotes_first_sample() {
        let mut filter: MedianFilter<8> = MedianFilter::new(5, 1500);

        // [1500, 1500, 1500, 1500, 300]
        assert_eq!(filter.push(300), 1500);
        assert_eq!(filter.push(300), 1500);
        // Three of five are now 300
        assert_eq!(filter.push(300), 300);
    }

    #[test]
    fn rejects_single_spike() {
        let mut filter: MedianFilter<8> = MedianFilter::new(3, 200);

        assert_eq!(filter.push(200), 200);
        assert_eq!(filter.push(4000), 200);
        assert_eq!(filter.push(205), 205);
    }

    #[test]
    fn even_window_takes_upper_middle() {
        let mut filter: MedianFilter<4> = MedianFilter::new(4, 0);
        filter.push(10);
        filter.push(20);
        filter.push(30);

        // [10, 20, 30, 40] -> index 2
        assert_eq!(filter.push(40), 30);
    }

    #[test]
    fn window_is_clamped() {
        let filter: MedianFilter<4> = MedianFilter::new(0, 1500);
        assert_eq!(filter.window(), 1);

        let filter: MedianFilter<4> = MedianFilter::new(9, 1500);
        assert_eq!(filter.window(), 4);
    }

    #[test]
    fn window_of_one_passes_through() {
        let mut filter: MedianFilter<4> = MedianFilter::new(1, 1500);
        assert_eq!(filter.push(42), 42);
        assert_eq!(filter.push(7), 7);
    }

    #[test]
    fn reset_restores_seed() {
        let mut filter: MedianFilter<8> = MedianFilter::new(3, 1500);
        filter.push(100);
        filter.push(100);
        assert_eq!(filter.median(), 100);

        filter.reset(1500);
        assert_eq!(filter.median(), 1500);
    }

    #[test]
    fn default_uses_full_capacity_and_seed() {
        let filter: MedianFilter<5> = MedianFilter::default();
        assert_eq!(filter.window(), 5);
        assert_eq!(filter.median(), FILTER_SEED_MM);
    }
}
