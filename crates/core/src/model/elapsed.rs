use chrono::{DateTime, Utc};
use std::fmt;

/// Whole seconds on the stopwatch.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Elapsed(u64);

impl Elapsed {
    #[must_use]
    pub const fn from_secs(secs: u64) -> Self {
        Self(secs)
    }

    /// Whole seconds from `start` to `end`. A clock that went backwards reads as zero.
    #[must_use]
    pub fn between(start: DateTime<Utc>, end: DateTime<Utc>) -> Self {
        let secs = (end - start).num_seconds();
        Self(u64::try_from(secs).unwrap_or(0))
    }

    #[must_use]
    pub const fn as_secs(self) -> u64 {
        self.0
    }
}

/// `MM:SS`; minutes keep growing past 59.
impl fmt::Display for Elapsed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:{:02}", self.0 / 60, self.0 % 60)
    }
}
