//! Time source for transaction timestamps
//!
//! Domain code never reads the wall clock directly. Callers hand a `Clock`
//! to the account operations, which lets tests pin timestamps.

use std::cell::Cell;

use chrono::{DateTime, Duration, TimeZone, Utc};

/// Source of the current time
pub trait Clock {
    /// Current instant in UTC
    fn now(&self) -> DateTime<Utc>;

    /// Current instant as seconds since the Unix epoch
    fn timestamp(&self) -> i64 {
        self.now().timestamp()
    }
}

/// Clock backed by the system wall clock
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

/// Clock that returns a manually controlled instant
#[derive(Debug, Clone)]
pub struct FixedClock {
    instant: Cell<DateTime<Utc>>,
}

impl FixedClock {
    /// Create a clock frozen at `instant`
    pub fn new(instant: DateTime<Utc>) -> Self {
        Self {
            instant: Cell::new(instant),
        }
    }

    /// Create a clock frozen at a Unix timestamp (seconds), or `None` if
    /// chrono cannot represent it
    pub fn try_at_timestamp(seconds: i64) -> Option<Self> {
        Utc.timestamp_opt(seconds, 0).single().map(Self::new)
    }

    /// Create a clock frozen at a Unix timestamp (seconds)
    ///
    /// A timestamp outside chrono's range (roughly +/-262,000 years) yields
    /// a clock at 1970-01-01T00:00:00Z instead. Use `try_at_timestamp` to
    /// detect that case.
    pub fn at_timestamp(seconds: i64) -> Self {
        Self::try_at_timestamp(seconds).unwrap_or_else(|| Self::new(DateTime::default()))
    }

    /// Move the clock to a new instant
    pub fn set(&self, instant: DateTime<Utc>) {
        self.instant.set(instant);
    }

    /// Move the clock forward
    pub fn advance(&self, by: Duration) {
        self.instant.set(self.instant.get() + by);
    }
}

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Utc> {
        self.instant.get()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fixed_clock_is_stable() {
        let clock = FixedClock::at_timestamp(1_700_000_000);
        assert_eq!(clock.timestamp(), 1_700_000_000);
        assert_eq!(clock.timestamp(), 1_700_000_000);
    }

    #[test]
    fn test_out_of_range_timestamp() {
        assert!(FixedClock::try_at_timestamp(i64::MAX).is_none());
        assert_eq!(FixedClock::at_timestamp(i64::MAX).timestamp(), 0);
        assert_eq!(
            FixedClock::try_at_timestamp(-86_400).map(|c| c.timestamp()),
            Some(-86_400)
        );
    }

    #[test]
    fn test_fixed_clock_advance() {
        let clock = FixedClock::at_timestamp(1_000);
        clock.advance(Duration::seconds(60));
        assert_eq!(clock.timestamp(), 1_060);
    }

    #[test]
    fn test_fixed_clock_set() {
        let clock = FixedClock::at_timestamp(0);
        let later = Utc.with_ymd_and_hms(2024, 1, 15, 12, 0, 0).unwrap();
        clock.set(later);
        assert_eq!(clock.now(), later);
    }

    #[test]
    fn test_system_clock_moves_forward() {
        let clock = SystemClock;
        let first = clock.timestamp();
        assert!(clock.timestamp() >= first);
        assert!(first > 1_600_000_000);
    }
}
