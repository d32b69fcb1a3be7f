use crate::clock::Clock;
use crate::models::{DayRecord, HeatmapCell, RecordSummary, TodaySnapshot, TodayStatus, TrackerState};
use crate::stats;
use crate::storage::{load_state, persist_state};
use chrono::NaiveDate;
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tracing::{error, info};

/// The tracker's state together with where it lives on disk and what "today"
/// means. Every mutation ends by rewriting the whole file.
pub struct HabitStore {
    path: PathBuf,
    state: TrackerState,
    clock: Arc<dyn Clock>,
}

impl HabitStore {
    pub fn new(path: PathBuf, state: TrackerState, clock: Arc<dyn Clock>) -> Self {
        Self { path, state, clock }
    }

    /// Loads `path`, falling back to a fresh state if it is missing or unusable.
    pub async fn open(path: PathBuf, clock: Arc<dyn Clock>) -> Self {
        let state = load_state(&path).await;
        Self::new(path, state, clock)
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn state(&self) -> &TrackerState {
        &self.state
    }

    pub fn today(&self) -> NaiveDate {
        self.clock.today()
    }

    pub async fn check_in(&mut self) -> bool {
        let now = self.clock.now();
        if !self.state.check_in_at(now) {
            return false;
        }
        info!(date = %now.date(), streak = self.state.streak, score = self.state.score, "checked in");
        self.save().await;
        true
    }

    pub async fn record_bad_habit(&mut self) -> u32 {
        let now = self.clock.now();
        let count = self.state.record_bad_habit_at(now);
        info!(date = %now.date(), count, score = self.state.score, "recorded bad habit");
        self.save().await;
        count
    }

    pub async fn undo_today(&mut self) -> bool {
        let today = self.clock.today();
        if !self.state.undo_at(today) {
            return false;
        }
        info!(date = %today, streak = self.state.streak, score = self.state.score, "undid today's record");
        self.save().await;
        true
    }

    pub fn today_status(&self) -> TodayStatus {
        stats::today_status(&self.state, self.clock.today())
    }

    pub fn snapshot(&self) -> TodaySnapshot {
        stats::snapshot(&self.state, self.clock.today())
    }

    pub fn records_for_year(&self, year: i32) -> BTreeMap<NaiveDate, DayRecord> {
        stats::records_for_year(&self.state, year)
    }

    pub fn available_years(&self) -> Vec<i32> {
        stats::available_years(&self.state, self.clock.today())
    }

    pub fn recent_window(&self, days: usize) -> Vec<HeatmapCell> {
        stats::recent_window(&self.state, days)
    }

    pub fn summary(&self) -> RecordSummary {
        stats::summary(&self.state)
    }

    async fn save(&self) {
        if let Err(err) = persist_state(&self.path, &self.state).await {
            error!(path = %self.path.display(), "{err}");
        }
    }
}
