//! State transitions for a single tracker.
//!
//! Every function here is pure over [`TrackerState`]: the caller supplies the
//! date being acted on, so the rules can be exercised without a wall clock or
//! a data file. [`crate::store::HabitStore`] wraps these with a clock and
//! persistence.

use crate::models::{DayColor, DayRecord, MAX_SCORE, TrackerState};
use chrono::{Duration, NaiveDate, NaiveDateTime};

pub const BAD_HABIT_PENALTY: u32 = 10;
pub const STREAK_REWARD: u32 = 10;
pub const REWARD_INTERVAL: u32 = 5;
pub const UNDO_CHECK_IN_COST: u32 = 1;

impl TrackerState {
    /// Records a success for `now`'s date unless the day already has a record.
    pub fn check_in_at(&mut self, now: NaiveDateTime) -> bool {
        let today = now.date();
        if self.records.contains_key(&today) {
            return false;
        }

        self.records.insert(today, DayRecord::success(now));
        self.streak = self.streak.saturating_add(1);
        self.apply_streak_reward();
        self.first_record_date.get_or_insert(today);
        true
    }

    /// Logs one bad-habit event for `now`'s date and returns the day's count.
    ///
    /// A same-day success is overwritten: any failure voids it.
    pub fn record_bad_habit_at(&mut self, now: NaiveDateTime) -> u32 {
        let today = now.date();
        let record = self
            .records
            .entry(today)
            .and_modify(|record| {
                record.count = record.count.saturating_add(1);
                record.color = DayColor::Failure;
            })
            .or_insert_with(|| DayRecord::failure(now));
        let count = record.count;

        self.score = self.score.saturating_sub(BAD_HABIT_PENALTY);
        self.streak = 0;
        self.first_record_date.get_or_insert(today);
        count
    }

    /// Removes the record for `today` and reverses its effect on score and
    /// streak. Returns false when there was nothing to remove.
    pub fn undo_at(&mut self, today: NaiveDate) -> bool {
        let Some(record) = self.records.remove(&today) else {
            return false;
        };

        match record.color {
            DayColor::Success => {
                self.score = self.score.saturating_sub(UNDO_CHECK_IN_COST);
                self.streak = self.streak.saturating_sub(1);
            }
            DayColor::Failure => {
                let refund = record.count.saturating_mul(BAD_HABIT_PENALTY);
                self.score = self.score.saturating_add(refund).min(MAX_SCORE);
                self.streak = self.recompute_streak();
            }
        }

        self.first_record_date = self.records.keys().next().copied();
        true
    }

    /// Counts the run of consecutive success days ending at the most recent
    /// record. The run stops at the first failure or missing day.
    pub fn recompute_streak(&self) -> u32 {
        let mut streak = 0;
        let mut previous: Option<NaiveDate> = None;

        for (date, record) in self.records.iter().rev() {
            if !record.is_success() {
                break;
            }
            if let Some(previous) = previous {
                if previous - Duration::days(1) != *date {
                    break;
                }
            }
            streak += 1;
            previous = Some(*date);
        }

        streak
    }

    /// Clamps values an edited or older file may carry outside the invariants.
    pub fn normalize(&mut self) {
        self.score = self.score.min(MAX_SCORE);
        for record in self.records.values_mut() {
            if record.color == DayColor::Failure {
                record.count = record.count.max(1);
            }
        }
        self.first_record_date = self.records.keys().next().copied();
    }

    fn apply_streak_reward(&mut self) {
        if self.streak > 0 && self.streak % REWARD_INTERVAL == 0 {
            self.score = self.score.saturating_add(STREAK_REWARD).min(MAX_SCORE);
        }
    }
}
