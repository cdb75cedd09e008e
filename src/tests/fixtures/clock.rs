use crate::shared::core::primitives::Clock;
use chrono::{DateTime, Duration, TimeZone, Utc};
use std::sync::atomic::{AtomicI64, Ordering};

/// Deterministic clock that advances one millisecond per reading.
pub struct SteppingClock {
    start: DateTime<Utc>,
    ticks: AtomicI64,
}

impl SteppingClock {
    pub fn starting_at(start: DateTime<Utc>) -> Self {
        Self {
            start,
            ticks: AtomicI64::new(0),
        }
    }
}

impl Default for SteppingClock {
    fn default() -> Self {
        Self::starting_at(Utc.timestamp_millis_opt(1_700_000_000_000).unwrap())
    }
}

impl Clock for SteppingClock {
    fn now(&self) -> DateTime<Utc> {
        let tick = self.ticks.fetch_add(1, Ordering::SeqCst);
        self.start + Duration::milliseconds(tick)
    }
}
