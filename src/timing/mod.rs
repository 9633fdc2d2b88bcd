//! Zero-cost phase timing.
//!
//! When the `timing` feature is enabled, this module records how long each
//! pipeline phase takes and reports it through `log`.
//!
//! When disabled, all types become zero-sized and all methods compile away.

/// Pipeline phase being timed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Enumerate,
    Rank,
    Closest,
    Spanning,
}

#[cfg(feature = "timing")]
mod real;
#[cfg(not(feature = "timing"))]
mod stub;

#[cfg(feature = "timing")]
pub use real::*;
#[cfg(not(feature = "timing"))]
pub use stub::*;
