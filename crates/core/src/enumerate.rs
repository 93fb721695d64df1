//! Enumerating many integers over a range.
//!
//! An enumeration yields `(value, serial)` pairs, `serial` counting from 0.
//! Two policies share that shape:
//!
//! - [`EnumerationMode::Random`]: each value is an independent draw, so
//!   repeats are expected.
//! - [`EnumerationMode::Samples`]: `count` evenly spaced positions in
//!   ascending order, `from + floor(k * len / count)`. No randomness is
//!   consumed.
//!
//! Enumerations are lazy. Stop early by breaking out of the loop; a new
//! call starts over from serial 0.
//!
//! ```
//! use randseq_core::{RandomSequence, SampleRange};
//!
//! let mut seq = RandomSequence::new(42);
//! let range = SampleRange::new(0, 100).unwrap();
//! for (value, serial) in seq.integers(1_000, range).unwrap() {
//!     assert!(range.contains(value));
//!     if serial == 3 {
//!         break;
//!     }
//! }
//! ```

use std::iter::FusedIterator;

use crate::error::{Result, SequenceError};
use crate::range::SampleRange;
use crate::sequence::RandomSequence;

/// How an enumeration picks its values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum EnumerationMode {
    /// Independent draws, sampling with replacement.
    #[default]
    Random,
    /// Evenly distributed ascending positions.
    Samples,
}

enum Source<'a> {
    Random(&'a mut RandomSequence),
    Samples,
}

/// Lazy sequence of `(value, serial)` pairs. See the module docs.
pub struct Enumeration<'a> {
    source: Source<'a>,
    range: SampleRange,
    count: usize,
    serial: usize,
}

impl<'a> Enumeration<'a> {
    fn new(source: Source<'a>, count: usize, range: SampleRange) -> Result<Self> {
        if count > 0 && range.is_empty() {
            return Err(SequenceError::EmptyRange { count });
        }
        Ok(Self {
            source,
            range,
            count,
            serial: 0,
        })
    }

    pub fn mode(&self) -> EnumerationMode {
        match self.source {
            Source::Random(_) => EnumerationMode::Random,
            Source::Samples => EnumerationMode::Samples,
        }
    }

    pub fn range(&self) -> SampleRange {
        self.range
    }
}

impl Iterator for Enumeration<'_> {
    type Item = (i64, usize);

    fn next(&mut self) -> Option<Self::Item> {
        if self.serial >= self.count {
            return None;
        }
        let serial = self.serial;
        let value = match &mut self.source {
            Source::Random(sequence) => sequence.draw(self.range),
            Source::Samples => self.range.spaced(serial, self.count),
        };
        self.serial += 1;
        Some((value, serial))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.count - self.serial;
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for Enumeration<'_> {}

impl FusedIterator for Enumeration<'_> {}

/// [`Enumeration`] over a location+length range, yielding `(index, serial)`.
pub struct Indices<'a> {
    inner: Enumeration<'a>,
}

impl Iterator for Indices<'_> {
    type Item = (usize, usize);

    fn next(&mut self) -> Option<Self::Item> {
        // every value lies in [location, location + length), all usize
        self.inner
            .next()
            .map(|(value, serial)| (value as usize, serial))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl ExactSizeIterator for Indices<'_> {}

impl FusedIterator for Indices<'_> {}

/// Evenly spaced samples over `range`, independent of any generator.
pub fn even_samples(count: usize, range: SampleRange) -> Result<Enumeration<'static>> {
    tracing::trace!(count, %range, "enumerating samples");
    Enumeration::new(Source::Samples, count, range)
}

impl RandomSequence {
    /// Enumerates `count` values over `range` using `mode`.
    ///
    /// `count == 0` yields nothing over any range. Fails with
    /// [`SequenceError::EmptyRange`] when `count > 0` and `range` is empty.
    pub fn enumerate(
        &mut self,
        count: usize,
        range: SampleRange,
        mode: EnumerationMode,
    ) -> Result<Enumeration<'_>> {
        match mode {
            EnumerationMode::Random => self.integers(count, range),
            EnumerationMode::Samples => even_samples(count, range),
        }
    }

    /// `count` independent random draws over `range`.
    pub fn integers(&mut self, count: usize, range: SampleRange) -> Result<Enumeration<'_>> {
        tracing::trace!(count, %range, seed = self.seed(), "enumerating integers");
        Enumeration::new(Source::Random(self), count, range)
    }

    /// `count` evenly spaced ascending samples over `range`.
    ///
    /// Does not read or advance the generator.
    pub fn samples(&self, count: usize, range: SampleRange) -> Result<Enumeration<'static>> {
        even_samples(count, range)
    }

    /// Location+length form of [`enumerate`](Self::enumerate).
    pub fn enumerate_indices(
        &mut self,
        count: usize,
        location: usize,
        length: usize,
        mode: EnumerationMode,
    ) -> Result<Indices<'_>> {
        let range = SampleRange::from_location_length(location, length)?;
        let inner = self.enumerate(count, range, mode)?;
        Ok(Indices { inner })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn range(from: i64, to: i64) -> SampleRange {
        SampleRange::new(from, to).unwrap()
    }

    #[test]
    fn test_serials_count_from_zero() {
        let mut seq = RandomSequence::new(1);
        let serials: Vec<usize> = seq
            .integers(5, range(0, 10))
            .unwrap()
            .map(|(_, serial)| serial)
            .collect();
        assert_eq!(serials, vec![0, 1, 2, 3, 4]);
    }

    #[test]
    fn test_exact_size() {
        let mut seq = RandomSequence::new(1);
        let mut it = seq.integers(3, range(0, 10)).unwrap();
        assert_eq!(it.len(), 3);
        it.next();
        assert_eq!(it.len(), 2);
        it.by_ref().for_each(drop);
        assert_eq!(it.next(), None);
    }

    #[test]
    fn test_samples_leave_state_untouched() {
        let seq = RandomSequence::new(77);
        let values: Vec<i64> = seq
            .samples(4, range(10, 18))
            .unwrap()
            .map(|(value, _)| value)
            .collect();
        assert_eq!(values, vec![10, 12, 14, 16]);
        assert_eq!(seq.seed(), 77);
    }

    #[test]
    fn test_more_samples_than_values_repeat() {
        let values: Vec<i64> = even_samples(6, range(0, 3))
            .unwrap()
            .map(|(value, _)| value)
            .collect();
        assert_eq!(values, vec![0, 0, 1, 1, 2, 2]);
    }

    #[test]
    fn test_empty_range_with_count() {
        let mut seq = RandomSequence::new(1);
        let err = seq
            .enumerate(2, range(4, 4), EnumerationMode::Samples)
            .err()
            .unwrap();
        assert!(matches!(err, SequenceError::EmptyRange { count: 2 }));
        assert!(seq.integers(1, range(4, 4)).is_err());
    }

    #[test]
    fn test_zero_count_over_empty_range() {
        let mut seq = RandomSequence::new(1);
        assert_eq!(seq.integers(0, range(4, 4)).unwrap().count(), 0);
        assert_eq!(seq.seed(), 1);
    }

    #[test]
    fn test_mode_reported() {
        let mut seq = RandomSequence::new(1);
        let it = seq.enumerate(1, range(0, 2), EnumerationMode::Random).unwrap();
        assert_eq!(it.mode(), EnumerationMode::Random);
        assert_eq!(it.range(), range(0, 2));
    }
}
