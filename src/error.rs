//! Error types for loading point sets.

use std::fmt;
use std::path::PathBuf;

/// Errors that can occur while loading a point set.
///
/// The core builders never fail on valid input; contract violations such as
/// out-of-range indices panic instead.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CircuitError {
    /// The input file could not be read.
    Io { path: PathBuf, message: String },

    /// A record did not have exactly three comma-separated fields.
    MalformedRecord { line: usize, content: String },

    /// A field could not be parsed as an integer coordinate.
    InvalidCoordinate { line: usize, value: String },

    /// More points than the `u32` index space can address.
    TooManyPoints(usize),
}

impl fmt::Display for CircuitError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CircuitError::Io { path, message } => {
                write!(f, "failed to read {}: {}", path.display(), message)
            }
            CircuitError::MalformedRecord { line, content } => {
                write!(
                    f,
                    "line {}: expected 3 comma-separated integers, got {:?}",
                    line, content
                )
            }
            CircuitError::InvalidCoordinate { line, value } => {
                write!(f, "line {}: invalid coordinate {:?}", line, value)
            }
            CircuitError::TooManyPoints(n) => {
                write!(f, "too many points: {} exceeds u32 index space", n)
            }
        }
    }
}

impl std::error::Error for CircuitError {}
