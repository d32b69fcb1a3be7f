use chrono::{Duration, Local, NaiveDate, NaiveDateTime};
use std::sync::Mutex;

/// Source of the local wall-clock time the tracker treats as "now".
pub trait Clock: Send + Sync {
    fn now(&self) -> NaiveDateTime;

    fn today(&self) -> NaiveDate {
        self.now().date()
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> NaiveDateTime {
        Local::now().naive_local()
    }
}

/// A clock that only moves when told to.
#[derive(Debug)]
pub struct FixedClock {
    now: Mutex<NaiveDateTime>,
}

impl FixedClock {
    pub fn new(now: NaiveDateTime) -> Self {
        Self {
            now: Mutex::new(now),
        }
    }

    /// Starts at 09:00 on `date`.
    pub fn on(date: NaiveDate) -> Self {
        Self::new(date.and_hms_opt(9, 0, 0).unwrap_or_default())
    }

    pub fn set(&self, now: NaiveDateTime) {
        *self.lock() = now;
    }

    pub fn advance_days(&self, days: i64) {
        let mut now = self.lock();
        *now += Duration::days(days);
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, NaiveDateTime> {
        self.now.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

impl Clock for FixedClock {
    fn now(&self) -> NaiveDateTime {
        *self.lock()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fixed_clock_advances_by_whole_days() {
        let clock = FixedClock::on(NaiveDate::from_ymd_opt(2024, 12, 31).unwrap());
        clock.advance_days(1);
        assert_eq!(clock.today(), NaiveDate::from_ymd_opt(2025, 1, 1).unwrap());
    }
}
