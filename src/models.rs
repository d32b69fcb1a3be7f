use chrono::{DateTime, FixedOffset, NaiveDate, NaiveDateTime};
use serde::{Deserialize, Deserializer, Serialize};
use std::collections::BTreeMap;
use std::fmt;

pub const INITIAL_SCORE: u32 = 100;
pub const MAX_SCORE: u32 = 200;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DayColor {
    #[serde(rename = "green")]
    Success,
    #[serde(rename = "red")]
    Failure,
}

/// Instant of the first write for a day.
///
/// New records are written as local wall-clock time. Files edited by hand or
/// produced elsewhere may carry an offset or some other ISO-8601 form; those
/// are kept as they were read so the record still loads and saves unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Timestamp {
    Local(NaiveDateTime),
    Offset(DateTime<FixedOffset>),
    Verbatim(String),
}

impl From<NaiveDateTime> for Timestamp {
    fn from(at: NaiveDateTime) -> Self {
        Timestamp::Local(at)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DayRecord {
    pub color: DayColor,
    #[serde(deserialize_with = "saturating_u32")]
    pub count: u32,
    pub timestamp: Timestamp,
}

impl DayRecord {
    pub fn success(at: NaiveDateTime) -> Self {
        Self {
            color: DayColor::Success,
            count: 0,
            timestamp: at.into(),
        }
    }

    pub fn failure(at: NaiveDateTime) -> Self {
        Self {
            color: DayColor::Failure,
            count: 1,
            timestamp: at.into(),
        }
    }

    pub fn is_success(&self) -> bool {
        self.color == DayColor::Success
    }
}

/// Everything the tracker persists. Missing fields in an older file fall back
/// to the same values a fresh install starts with.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrackerState {
    #[serde(default = "default_score", deserialize_with = "saturating_u32")]
    pub score: u32,
    #[serde(default, deserialize_with = "saturating_u32")]
    pub streak: u32,
    #[serde(default)]
    pub records: BTreeMap<NaiveDate, DayRecord>,
    #[serde(default)]
    pub first_record_date: Option<NaiveDate>,
}

fn default_score() -> u32 {
    INITIAL_SCORE
}

/// Negative or oversized integers from an edited file clamp into `u32`
/// instead of rejecting the whole file.
fn saturating_u32<'de, D>(deserializer: D) -> Result<u32, D::Error>
where
    D: Deserializer<'de>,
{
    let value = i64::deserialize(deserializer)?;
    Ok(value.clamp(0, i64::from(u32::MAX)) as u32)
}

impl Default for TrackerState {
    fn default() -> Self {
        Self {
            score: INITIAL_SCORE,
            streak: 0,
            records: BTreeMap::new(),
            first_record_date: None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum TodayStatus {
    NotRecorded,
    CheckedIn,
    BadHabit { count: u32 },
}

impl fmt::Display for TodayStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TodayStatus::NotRecorded => f.write_str("not yet recorded"),
            TodayStatus::CheckedIn => f.write_str("checked in"),
            TodayStatus::BadHabit { count } => write!(f, "bad habit × {count}"),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct TodaySnapshot {
    pub date: NaiveDate,
    pub score: u32,
    pub streak: u32,
    pub status: TodayStatus,
    pub label: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HeatmapCell {
    pub date: NaiveDate,
    pub color: DayColor,
    pub count: u32,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct RecordSummary {
    pub total_days: usize,
    pub success_days: usize,
    pub failure_days: usize,
}

#[derive(Debug, Deserialize)]
pub struct HeatmapQuery {
    pub days: Option<usize>,
}

#[derive(Debug, Serialize)]
pub struct HeatmapResponse {
    pub summary: RecordSummary,
    pub cells: Vec<HeatmapCell>,
}

#[derive(Debug, Serialize)]
pub struct CheckInResponse {
    pub created: bool,
    pub today: TodaySnapshot,
}

#[derive(Debug, Serialize)]
pub struct BadHabitResponse {
    pub count: u32,
    pub today: TodaySnapshot,
}

#[derive(Debug, Serialize)]
pub struct UndoResponse {
    pub undone: bool,
    pub today: TodaySnapshot,
}
