//! randseq - deterministic seeded random sequences.
//!
//! A [`RandomSequence`] is a small, non-cryptographic generator whose only
//! state is a 32-bit seed. Equal seeds give equal output on every platform,
//! which makes it suitable for reproducible tests, procedural content and
//! replaying a recorded run from its seed.
//!
//! ```
//! use randseq_core::{RandomSequence, SampleRange, shuffled};
//!
//! let mut seq = RandomSequence::new(42);
//! let roll = seq.next_integer(1, 7).unwrap();
//! assert!((1..7).contains(&roll));
//!
//! let range = SampleRange::new(0, 100).unwrap();
//! let evenly: Vec<i64> = seq.samples(4, range).unwrap().map(|(v, _)| v).collect();
//! assert_eq!(evenly, vec![0, 25, 50, 75]);
//!
//! let deck = shuffled(&["a", "b", "c"], &mut seq);
//! assert_eq!(deck.len(), 3);
//! ```

pub mod collection;
pub mod enumerate;
pub mod error;
pub mod range;
pub mod sequence;

pub use collection::{random_element, random_index, shuffle, shuffled};
pub use enumerate::{Enumeration, EnumerationMode, Indices, even_samples};
pub use error::{Result, SequenceError};
pub use range::SampleRange;
pub use sequence::{RandomSequence, default_sequence, with_default_sequence};
