// ABOUTME: Injectable current-time provider so hour-gated logic is testable
// ABOUTME: SystemClock for production, FixedClock for deterministic tests
//
// Licensed under either of Apache License, Version 2.0 or MIT License at your option.
// Copyright ©2026 Macrocoach Project

//! # Time Provider
//!
//! Every analyzer that branches on "now" (streak grace windows, meal hour
//! gates, the what-to-do-right-now prompt) takes a `&dyn TimeProvider`
//! instead of reading the system clock directly. Production callers pass
//! [`SystemClock`]; tests pin any wall-clock hour with [`FixedClock`].

use chrono::{DateTime, Datelike, Local, NaiveDate, TimeZone, Timelike};

/// Source of the current local time
pub trait TimeProvider: Send + Sync {
    /// Current local date and time
    fn now(&self) -> DateTime<Local>;

    /// Today's local calendar date
    fn today(&self) -> NaiveDate {
        self.now().date_naive()
    }

    /// Current local hour, 0-23
    fn hour(&self) -> u32 {
        self.now().hour()
    }

    /// Whether today is a Sunday (end-of-week boundary for weekly milestones)
    fn is_sunday(&self) -> bool {
        self.now().weekday() == chrono::Weekday::Sun
    }
}

/// Reads the real system clock
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl TimeProvider for SystemClock {
    fn now(&self) -> DateTime<Local> {
        Local::now()
    }
}

/// Always reports the same instant. Test-only in spirit, but exported so
/// downstream consumers can pin time in their own tests.
#[derive(Debug, Clone, Copy)]
pub struct FixedClock {
    instant: DateTime<Local>,
}

impl FixedClock {
    /// Pin the clock to the given instant
    #[must_use]
    pub const fn new(instant: DateTime<Local>) -> Self {
        Self { instant }
    }

    /// Pin the clock to a local date and time, panicking on invalid input.
    /// Convenience for tests.
    ///
    /// # Panics
    /// If the components do not form a valid local datetime.
    #[must_use]
    pub fn at(year: i32, month: u32, day: u32, hour: u32, minute: u32) -> Self {
        Self {
            instant: Local
                .with_ymd_and_hms(year, month, day, hour, minute, 0)
                .unwrap(),
        }
    }
}

impl TimeProvider for FixedClock {
    fn now(&self) -> DateTime<Local> {
        self.instant
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fixed_clock_reports_pinned_hour() {
        let clock = FixedClock::at(2026, 6, 14, 18, 30);
        assert_eq!(clock.hour(), 18);
        assert_eq!(clock.today(), NaiveDate::from_ymd_opt(2026, 6, 14).unwrap());
        assert!(clock.is_sunday());
    }
}
