//! Shared fixtures for the integration tests
//!
//! - Scripted sample sources that replay raw ADC values
//! - Reference evaluators written as the expanded power sum, independent of
//!   the crate's Horner evaluation

#![allow(dead_code)]

use irdist_core::{Channel, SampleSource};

/// Replays a fixed list of raw samples, repeating the last one forever
pub struct ScriptedSource {
    samples: Vec<u16>,
    next: usize,
    reads: Vec<Channel>,
}

impl ScriptedSource {
    pub fn new(samples: &[u16]) -> Self {
        assert!(!samples.is_empty(), "script needs at least one sample");
        Self {
            samples: samples.to_vec(),
            next: 0,
            reads: Vec::new(),
        }
    }

    /// Source that always returns `value`
    pub fn constant(value: u16) -> Self {
        Self::new(&[value])
    }

    /// Channels requested so far, in order
    pub fn reads(&self) -> &[Channel] {
        &self.reads
    }
}

impl SampleSource for ScriptedSource {
    fn read(&mut self, channel: Channel) -> u16 {
        self.reads.push(channel);
        let idx = self.next.min(self.samples.len() - 1);
        self.next += 1;
        self.samples[idx]
    }
}

/// `Σ c[i] · x^i` in f64, for checking the crate's f32 Horner result
pub fn reference_polynomial(coeffs: &[f32], x: u16) -> f64 {
    coeffs
        .iter()
        .enumerate()
        .map(|(i, &c)| f64::from(c) * f64::from(x).powi(i as i32))
        .sum()
}

/// `c · x^p` in f64
pub fn reference_power(c: f32, p: f32, x: u16) -> f64 {
    f64::from(c) * f64::from(x).powf(f64::from(p))
}

/// Assert that a rounded distance is within `tolerance` mm of a reference
pub fn assert_close(actual: u16, reference: f64, tolerance: f64) {
    let diff = (f64::from(actual) - reference).abs();
    assert!(
        diff <= tolerance,
        "distance {} differs from reference {:.3} by {:.3} (> {})",
        actual,
        reference,
        diff,
        tolerance
    );
}
