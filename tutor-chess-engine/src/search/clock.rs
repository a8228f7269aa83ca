use std::time::{Duration, Instant};

// A simple wall-clock time budget for a single `find_best_move` call.
// Unlike the teacher's `TimeManager` (which juggles per-move allocation from
// a total remaining clock, panic time, and a hard/soft distinction), this
// engine is only ever given a flat `time_limit` per spec.md 4.7, so a single
// deadline is all that's needed.
pub struct SearchClock {
    start: Instant,
    limit: Duration,
}

impl SearchClock {
    pub fn new(limit: Duration) -> Self {
        Self { start: Instant::now(), limit }
    }

    pub fn expired(&self) -> bool {
        self.start.elapsed() >= self.limit
    }

    pub fn elapsed(&self) -> Duration {
        self.start.elapsed()
    }
}
