//! Fixed-Capacity Rolling Window of Distance Samples
//!
//! ## Overview
//!
//! Backing store for the median filter. Capacity is a compile-time constant
//! (const generic `N`) so the window lives inline in the sensor struct with
//! no heap; the *active* length is chosen at construction and may be anything
//! from 1 to `N`.
//!
//! ## Always Full
//!
//! Unlike a history buffer that grows from empty, this window starts with
//! every active slot holding a seed value. A push therefore always evicts
//! exactly one sample, and the median is defined from the first push on.
//!
//! ```text
//! SampleWindow<8> with len = 5, seeded with 1500:
//! ┌──────┬──────┬──────┬──────┬──────┬───┬───┬───┐
//! │ 1500 │ 1500 │ 1500 │ 1500 │ 1500 │ · │ · │ · │  ← slots 5..8 unused
//! └──────┴──────┴──────┴──────┴──────┴───┴───┴───┘
//!    ↑
//!    └── write_pos: next push overwrites the oldest sample here
//! ```
//!
//! ## Usage Example
//!
//! ```rust
//! use irdist_core::window::SampleWindow;
//!
//! let mut window: SampleWindow<8> = SampleWindow::new(3, 1500);
//! window.push(400);
//! window.push(410);
//!
//! let samples: Vec<u16> = window.iter().collect();
//! assert_eq!(samples, vec![1500, 400, 410]);
//! ```

/// Rolling window of `u16` samples with inline storage for `N`
///
/// ## Internal Invariants
///
/// - `1 <= len <= N`
/// - `write_pos < len`
/// - every slot in `data[..len]` holds a sample (seed or real)
#[derive(Debug, Clone)]
pub struct SampleWindow<const N: usize> {
    /// Storage; only the first `len` slots are part of the window
    data: [u16; N],

    /// Active window length
    len: usize,

    /// Slot the next push overwrites (the oldest sample)
    write_pos: usize,
}

impl<const N: usize> SampleWindow<N> {
    const NON_EMPTY: () = assert!(N > 0, "SampleWindow capacity must be at least 1");

    /// Create a window of `len` samples, every slot set to `seed`
    ///
    /// `len` is clamped into `1..=N`.
    pub fn new(len: usize, seed: u16) -> Self {
        #[allow(clippy::let_unit_value)]
        let () = Self::NON_EMPTY;

        let len = len.clamp(1, N);
        Self {
            data: [seed; N],
            len,
            write_pos: 0,
        }
    }

    /// Storage capacity
    pub const fn capacity(&self) -> usize {
        N
    }

    /// Active window length
    pub fn len(&self) -> usize {
        self.len
    }

    /// Always false; a window holds at least one sample
    pub fn is_empty(&self) -> bool {
        false
    }

    /// Admit a sample, returning the evicted oldest one
    pub fn push(&mut self, value: u16) -> u16 {
        let evicted = core::mem::replace(&mut self.data[self.write_pos], value);
        self.write_pos = (self.write_pos + 1) % self.len;
        evicted
    }

    /// Set every active slot to `value` and restart the rotation
    pub fn fill(&mut self, value: u16) {
        self.data[..self.len].fill(value);
        self.write_pos = 0;
    }

    /// Most recently admitted sample
    pub fn last(&self) -> u16 {
        let idx = if self.write_pos == 0 { self.len - 1 } else { self.write_pos - 1 };
        self.data[idx]
    }

    /// Samples from oldest to newest
    pub fn iter(&self) -> impl Iterator<Item = u16> + '_ {
        let (newer, older) = self.data[..self.len].split_at(self.write_pos);
        older.iter().chain(newer).copied()
    }
}
