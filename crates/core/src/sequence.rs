//! Seeded pseudo-random sequences.
//!
//! [`RandomSequence`] is a 32-bit linear congruential generator. Its whole
//! state is the seed, so two sequences with equal seeds produce identical
//! output forever after, on every platform. Cloning a sequence, or
//! serializing and restoring it, preserves its future output.
//!
//! The recurrence is part of the public contract:
//!
//! ```text
//! state' = (1664525 * state + 1013904223) mod 2^32
//! value  = state / 2^32
//! ```
//!
//! `c` is odd and `a - 1` is a multiple of 4, so the period is the full
//! 2^32. Replayed sequences pinned to a seed rely on these constants never
//! changing.
//!
//! The generator is not cryptographically secure.

use std::sync::{Mutex, OnceLock, PoisonError};
use std::time::{SystemTime, UNIX_EPOCH};

use serde::{Deserialize, Serialize};

use crate::error::{Result, SequenceError};
use crate::range::SampleRange;

/// LCG multiplier.
pub const MULTIPLIER: u32 = 1_664_525;
/// LCG increment.
pub const INCREMENT: u32 = 1_013_904_223;

/// 2^32 as a double, the divisor mapping a state into `[0, 1)`.
const STATE_SPAN: f64 = 4_294_967_296.0;

/// A deterministic, seedable sequence of pseudo-random values.
///
/// Equality and hashing compare seeds, so two sequences are equal exactly
/// when their future output is.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RandomSequence {
    seed: u32,
}

impl RandomSequence {
    /// Creates a sequence with an explicit seed.
    pub const fn new(seed: u32) -> Self {
        Self { seed }
    }

    /// Creates a sequence with a non-reproducible seed.
    ///
    /// The seed comes from the OS entropy source, or from the system clock if
    /// that is unavailable. Read it back with [`seed`](Self::seed) to replay
    /// the run.
    pub fn from_entropy() -> Self {
        Self::new(entropy_seed())
    }

    /// Current seed, which is also the full generator state.
    pub fn seed(&self) -> u32 {
        self.seed
    }

    /// Reseeds the sequence. Subsequent output matches `RandomSequence::new(seed)`.
    pub fn set_seed(&mut self, seed: u32) {
        tracing::trace!(seed, "reseeding sequence");
        self.seed = seed;
    }

    /// Current state mapped into `[0, 1)`, without advancing.
    ///
    /// Never returns 1.0: the largest state is `2^32 - 1`, and
    /// `(2^32 - 1) / 2^32` is exact in an `f64`.
    #[inline]
    pub fn value(&self) -> f64 {
        self.seed as f64 / STATE_SPAN
    }

    /// Advances one step and returns the new [`value`](Self::value).
    #[inline]
    pub fn next_value(&mut self) -> f64 {
        self.seed = self.seed.wrapping_mul(MULTIPLIER).wrapping_add(INCREMENT);
        self.value()
    }

    /// Returns `i` with `from <= i < to`.
    ///
    /// Fails with [`SequenceError::InvalidRange`] when `to <= from`; the
    /// generator is not advanced in that case.
    pub fn next_integer(&mut self, from: i64, to: i64) -> Result<i64> {
        if to <= from {
            return Err(SequenceError::InvalidRange { from, to });
        }
        Ok(self.draw(SampleRange::new_unchecked(from, to)))
    }

    /// Returns an integer contained in `range`.
    ///
    /// Fails with [`SequenceError::EmptyRange`] for a degenerate range.
    pub fn next_integer_in(&mut self, range: SampleRange) -> Result<i64> {
        if range.is_empty() {
            return Err(SequenceError::EmptyRange { count: 1 });
        }
        Ok(self.draw(range))
    }

    /// Returns `i` with `location <= i < location + length`.
    pub fn next_index(&mut self, location: usize, length: usize) -> Result<usize> {
        let range = SampleRange::from_location_length(location, length)?;
        // non-negative: the range starts at a usize
        self.next_integer_in(range).map(|i| i as usize)
    }

    /// Draws from a range already known to be non-empty.
    #[inline]
    pub(crate) fn draw(&mut self, range: SampleRange) -> i64 {
        let unit = self.next_value();
        range.scale(unit)
    }
}

impl Default for RandomSequence {
    fn default() -> Self {
        Self::from_entropy()
    }
}

impl From<u32> for RandomSequence {
    fn from(seed: u32) -> Self {
        Self::new(seed)
    }
}

fn entropy_seed() -> u32 {
    let mut buf = [0u8; 4];
    match getrandom::getrandom(&mut buf) {
        Ok(()) => {
            let seed = u32::from_le_bytes(buf);
            tracing::debug!(seed, "seeded from os entropy");
            seed
        }
        Err(err) => {
            let nanos = SystemTime::now()
                .duration_since(UNIX_EPOCH)
                .map(|d| d.as_nanos())
                .unwrap_or_default();
            // fold the 128-bit timestamp so the fast-moving low bits dominate
            let seed = (nanos ^ (nanos >> 32) ^ (nanos >> 64)) as u32;
            tracing::debug!(seed, %err, "os entropy unavailable, seeded from clock");
            seed
        }
    }
}

/// Process-wide shared sequence, seeded from entropy on first use.
///
/// Output is not reproducible across runs. Code that needs replayable
/// output should own a [`RandomSequence`] and pass it explicitly; nothing in
/// this crate draws from the shared instance on a caller's behalf.
pub fn default_sequence() -> &'static Mutex<RandomSequence> {
    static DEFAULT: OnceLock<Mutex<RandomSequence>> = OnceLock::new();
    DEFAULT.get_or_init(|| {
        let sequence = RandomSequence::from_entropy();
        tracing::debug!(seed = sequence.seed(), "initialized default sequence");
        Mutex::new(sequence)
    })
}

/// Runs `f` with the default sequence locked.
pub fn with_default_sequence<R>(f: impl FnOnce(&mut RandomSequence) -> R) -> R {
    // the state is a single integer, a panic cannot leave it torn
    let mut guard = default_sequence()
        .lock()
        .unwrap_or_else(PoisonError::into_inner);
    f(&mut guard)
}
