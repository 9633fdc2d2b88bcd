use super::Phase;
use std::time::Duration;

/// Dummy lap timer when `timing` is disabled (zero-sized).
pub struct LapTimer;

impl LapTimer {
    #[inline(always)]
    pub fn start() -> Self {
        Self
    }

    #[inline(always)]
    pub fn lap(&mut self) -> Duration {
        Duration::ZERO
    }
}

/// Dummy phase timings when `timing` is disabled (zero-sized).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PhaseTimings;

impl PhaseTimings {
    #[inline(always)]
    pub fn record(&mut self, _phase: Phase, _d: Duration) {}

    #[inline(always)]
    pub fn total(&self) -> Duration {
        Duration::ZERO
    }

    #[inline(always)]
    pub fn report(&self, _n: usize) {}
}
