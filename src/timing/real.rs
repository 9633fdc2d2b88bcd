use super::Phase;
use std::time::{Duration, Instant};

/// Timer optimized for sequential phases: each `lap()` uses a single `Instant::now()`.
pub struct LapTimer(Instant);

impl LapTimer {
    #[inline]
    pub fn start() -> Self {
        Self(Instant::now())
    }

    #[inline]
    pub fn lap(&mut self) -> Duration {
        let now = Instant::now();
        let d = now.duration_since(self.0);
        self.0 = now;
        d
    }
}

/// Wall-clock time spent in each phase of one `compute_with` call.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PhaseTimings {
    pub enumerate: Duration,
    pub rank: Duration,
    pub closest: Duration,
    pub spanning: Duration,
}

impl PhaseTimings {
    #[inline]
    pub fn record(&mut self, phase: Phase, d: Duration) {
        match phase {
            Phase::Enumerate => self.enumerate += d,
            Phase::Rank => self.rank += d,
            Phase::Closest => self.closest += d,
            Phase::Spanning => self.spanning += d,
        }
    }

    pub fn total(&self) -> Duration {
        self.enumerate + self.rank + self.closest + self.spanning
    }

    pub fn report(&self, n: usize) {
        let total = self.total().as_secs_f64();
        let ms = |d: Duration| d.as_secs_f64() * 1000.0;
        let pct = |d: Duration| {
            if total > 0.0 {
                d.as_secs_f64() / total * 100.0
            } else {
                0.0
            }
        };

        log::debug!("timing n={}", n);
        log::debug!("  enumerate: {:7.1}ms ({:4.1}%)", ms(self.enumerate), pct(self.enumerate));
        log::debug!("  rank:      {:7.1}ms ({:4.1}%)", ms(self.rank), pct(self.rank));
        log::debug!("  closest:   {:7.1}ms ({:4.1}%)", ms(self.closest), pct(self.closest));
        log::debug!("  spanning:  {:7.1}ms ({:4.1}%)", ms(self.spanning), pct(self.spanning));
        log::debug!("  total:     {:7.1}ms", ms(self.total()));
    }
}
