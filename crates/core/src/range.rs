//! Half-open integer ranges.
//!
//! Every draw and enumeration works on one canonical signed form,
//! [`SampleRange`]. The unsigned location+length form is converted once at
//! the API boundary by [`SampleRange::from_location_length`].

use std::fmt;
use std::ops::Range;

use serde::{Deserialize, Serialize};

use crate::error::{Result, SequenceError};

/// A half-open interval `[from, to)` with `from <= to`.
///
/// `from == to` is a valid, empty range. Drawing from it fails, enumerating
/// zero elements over it does not.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "repr::RawRange", into = "repr::RawRange")]
pub struct SampleRange {
    from: i64,
    to: i64,
}

mod repr {
    use serde::{Deserialize, Serialize};

    /// Wire form, validated on the way back in.
    #[derive(Serialize, Deserialize)]
    pub struct RawRange {
        pub from: i64,
        pub to: i64,
    }
}

impl SampleRange {
    /// Creates `[from, to)`. Fails when `to < from`.
    pub fn new(from: i64, to: i64) -> Result<Self> {
        if to < from {
            return Err(SequenceError::InvalidRange { from, to });
        }
        Ok(Self { from, to })
    }

    /// Creates `[from, to)` from bounds the caller has already ordered.
    pub(crate) const fn new_unchecked(from: i64, to: i64) -> Self {
        debug_assert!(from <= to);
        Self { from, to }
    }

    /// Converts a `(location, length)` pair to `[location, location + length)`.
    pub fn from_location_length(location: usize, length: usize) -> Result<Self> {
        let overflow = || SequenceError::LengthOverflow { location, length };
        let end = location.checked_add(length).ok_or_else(overflow)?;
        let from = i64::try_from(location).map_err(|_| overflow())?;
        let to = i64::try_from(end).map_err(|_| overflow())?;
        Ok(Self { from, to })
    }

    /// Inclusive lower bound.
    pub fn from(&self) -> i64 {
        self.from
    }

    /// Exclusive upper bound.
    pub fn to(&self) -> i64 {
        self.to
    }

    /// Number of integers in the range.
    pub fn len(&self) -> u64 {
        self.to.abs_diff(self.from)
    }

    pub fn is_empty(&self) -> bool {
        self.from == self.to
    }

    pub fn contains(&self, value: i64) -> bool {
        self.from <= value && value < self.to
    }

    /// Maps `unit` in `[0, 1)` onto the range.
    ///
    /// The range must be non-empty. Products that round up to `len` are
    /// clamped to the last element.
    pub(crate) fn scale(&self, unit: f64) -> i64 {
        let len = self.len();
        // float-to-int `as` truncates toward zero and saturates
        let offset = ((unit * len as f64) as u64).min(len - 1);
        self.from.wrapping_add_unsigned(offset)
    }

    /// Position `k` of `count` evenly spaced positions across the range.
    ///
    /// Requires `k < count` and a non-empty range.
    pub(crate) fn spaced(&self, k: usize, count: usize) -> i64 {
        let offset = (k as u128 * self.len() as u128 / count as u128) as u64;
        self.from.wrapping_add_unsigned(offset)
    }
}

impl TryFrom<Range<i64>> for SampleRange {
    type Error = SequenceError;

    fn try_from(range: Range<i64>) -> Result<Self> {
        Self::new(range.start, range.end)
    }
}

impl TryFrom<repr::RawRange> for SampleRange {
    type Error = SequenceError;

    fn try_from(raw: repr::RawRange) -> Result<Self> {
        Self::new(raw.from, raw.to)
    }
}

impl From<SampleRange> for repr::RawRange {
    fn from(range: SampleRange) -> Self {
        Self {
            from: range.from,
            to: range.to,
        }
    }
}

impl From<SampleRange> for Range<i64> {
    fn from(range: SampleRange) -> Self {
        range.from..range.to
    }
}

impl fmt::Display for SampleRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}, {})", self.from, self.to)
    }
}
