use std::sync::{Arc, Mutex, PoisonError};

use chrono::{DateTime, Duration, Utc};

/// Where the stopwatch reads the current instant from.
#[derive(Debug, Clone, Default)]
pub enum Clock {
    #[default]
    System,
    /// Shared hand-driven time; every clone sees the same instant.
    Manual(ManualClock),
}

impl Clock {
    #[must_use]
    pub fn system() -> Self {
        Self::System
    }

    #[must_use]
    pub fn now(&self) -> DateTime<Utc> {
        match self {
            Clock::System => Utc::now(),
            Clock::Manual(manual) => manual.now(),
        }
    }
}

/// Wall time that only moves when `advance` is called.
#[derive(Debug, Clone)]
pub struct ManualClock(Arc<Mutex<DateTime<Utc>>>);

impl ManualClock {
    #[must_use]
    pub fn starting_at(at: DateTime<Utc>) -> Self {
        Self(Arc::new(Mutex::new(at)))
    }

    #[must_use]
    pub fn now(&self) -> DateTime<Utc> {
        *self.0.lock().unwrap_or_else(PoisonError::into_inner)
    }

    pub fn advance(&self, delta: Duration) {
        let mut at = self.0.lock().unwrap_or_else(PoisonError::into_inner);
        *at += delta;
    }
}

impl From<ManualClock> for Clock {
    fn from(manual: ManualClock) -> Self {
        Clock::Manual(manual)
    }
}

/// 2024-01-01T09:00:00Z, the instant every test board starts at.
pub const TEST_START_SECS: i64 = 1_704_099_600;

/// # Panics
///
/// Never in practice: `TEST_START_SECS` is in chrono's range.
#[must_use]
pub fn fixed_now() -> DateTime<Utc> {
    DateTime::<Utc>::from_timestamp(TEST_START_SECS, 0).expect("test start is a valid timestamp")
}

/// A manual clock parked at `fixed_now()`.
#[must_use]
pub fn fixed_clock() -> ManualClock {
    ManualClock::starting_at(fixed_now())
}
