//! Error types for randseq.

use thiserror::Error;

/// Primary error type for sequence operations.
///
/// Every variant is attributable to a caller-supplied argument; draws
/// themselves never fail once their range has been validated.
#[derive(Error, Debug)]
pub enum SequenceError {
    #[error("invalid range: {from}..{to}")]
    InvalidRange { from: i64, to: i64 },

    #[error("cannot draw {count} values from an empty range")]
    EmptyRange { count: usize },

    #[error("range overflow: location {location} + length {length}")]
    LengthOverflow { location: usize, length: usize },
}

/// Convenience Result type alias for SequenceError.
pub type Result<T> = std::result::Result<T, SequenceError>;
