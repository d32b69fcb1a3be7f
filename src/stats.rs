use crate::models::{
    DayColor, DayRecord, HeatmapCell, RecordSummary, TodaySnapshot, TodayStatus, TrackerState,
};
use chrono::{Datelike, NaiveDate};
use std::collections::BTreeMap;

/// Twelve weeks of seven days.
pub const HEATMAP_DAYS: usize = 84;

pub fn today_status(state: &TrackerState, today: NaiveDate) -> TodayStatus {
    match state.records.get(&today) {
        None => TodayStatus::NotRecorded,
        Some(record) if record.is_success() => TodayStatus::CheckedIn,
        Some(record) => TodayStatus::BadHabit {
            count: record.count,
        },
    }
}

pub fn snapshot(state: &TrackerState, today: NaiveDate) -> TodaySnapshot {
    let status = today_status(state, today);
    TodaySnapshot {
        date: today,
        score: state.score,
        streak: state.streak,
        label: status.to_string(),
        status,
    }
}

pub fn records_for_year(state: &TrackerState, year: i32) -> BTreeMap<NaiveDate, DayRecord> {
    state
        .records
        .iter()
        .filter(|(date, _)| date.year() == year)
        .map(|(date, record)| (*date, record.clone()))
        .collect()
}

/// Years from the first record through `today`'s year, inclusive.
pub fn available_years(state: &TrackerState, today: NaiveDate) -> Vec<i32> {
    let current = today.year();
    let first = state
        .first_record_date
        .map_or(current, |date| date.year())
        .min(current);
    (first..=current).collect()
}

/// The latest `days` recorded dates, oldest first.
pub fn recent_window(state: &TrackerState, days: usize) -> Vec<HeatmapCell> {
    let skip = state.records.len().saturating_sub(days);
    state
        .records
        .iter()
        .skip(skip)
        .map(|(date, record)| HeatmapCell {
            date: *date,
            color: record.color,
            count: record.count,
        })
        .collect()
}

pub fn summary(state: &TrackerState) -> RecordSummary {
    state
        .records
        .values()
        .fold(RecordSummary::default(), |mut acc, record| {
            acc.total_days += 1;
            match record.color {
                DayColor::Success => acc.success_days += 1,
                DayColor::Failure => acc.failure_days += 1,
            }
            acc
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    fn day(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn seeded(dates: &[(NaiveDate, DayColor)]) -> TrackerState {
        let mut state = TrackerState::default();
        for (date, color) in dates {
            let at = date.and_hms_opt(8, 0, 0).unwrap();
            let record = match color {
                DayColor::Success => DayRecord::success(at),
                DayColor::Failure => DayRecord::failure(at),
            };
            state.records.insert(*date, record);
        }
        state.normalize();
        state
    }

    #[test]
    fn today_status_covers_each_state() {
        let today = day(2025, 2, 1);
        let mut state = TrackerState::default();
        assert_eq!(today_status(&state, today), TodayStatus::NotRecorded);

        state.check_in_at(today.and_hms_opt(7, 0, 0).unwrap());
        assert_eq!(today_status(&state, today), TodayStatus::CheckedIn);
        assert_eq!(today_status(&state, today).to_string(), "checked in");

        state.record_bad_habit_at(today.and_hms_opt(12, 0, 0).unwrap());
        state.record_bad_habit_at(today.and_hms_opt(13, 0, 0).unwrap());
        let status = today_status(&state, today);
        assert_eq!(status, TodayStatus::BadHabit { count: 2 });
        assert_eq!(status.to_string(), "bad habit × 2");
    }

    #[test]
    fn records_for_year_filters_by_year() {
        let state = seeded(&[
            (day(2023, 12, 31), DayColor::Success),
            (day(2024, 1, 1), DayColor::Failure),
            (day(2024, 6, 15), DayColor::Success),
        ]);

        let records = records_for_year(&state, 2024);
        assert_eq!(
            records.keys().copied().collect::<Vec<_>>(),
            vec![day(2024, 1, 1), day(2024, 6, 15)]
        );
        assert!(records_for_year(&state, 2022).is_empty());
    }

    #[test]
    fn available_years_span_first_record_to_today() {
        let state = seeded(&[(day(2022, 11, 3), DayColor::Success)]);
        assert_eq!(available_years(&state, day(2024, 5, 5)), vec![2022, 2023, 2024]);

        let empty = TrackerState::default();
        assert_eq!(available_years(&empty, day(2024, 5, 5)), vec![2024]);
    }

    #[test]
    fn available_years_never_empty_when_clock_is_behind() {
        let state = seeded(&[(day(2026, 1, 3), DayColor::Success)]);
        assert_eq!(available_years(&state, day(2025, 12, 31)), vec![2025]);
    }

    #[test]
    fn recent_window_keeps_latest_dates_in_order() {
        let start = day(2024, 1, 1);
        let dates: Vec<_> = (0..100)
            .map(|offset| (start + Duration::days(offset), DayColor::Success))
            .collect();
        let state = seeded(&dates);

        let window = recent_window(&state, HEATMAP_DAYS);

        assert_eq!(window.len(), HEATMAP_DAYS);
        assert_eq!(window.first().unwrap().date, start + Duration::days(16));
        assert_eq!(window.last().unwrap().date, start + Duration::days(99));
    }

    #[test]
    fn recent_window_returns_everything_when_short() {
        let state = seeded(&[
            (day(2024, 1, 3), DayColor::Failure),
            (day(2024, 1, 1), DayColor::Success),
        ]);

        let window = recent_window(&state, HEATMAP_DAYS);
        assert_eq!(window.len(), 2);
        assert_eq!(window[0].date, day(2024, 1, 1));
        assert_eq!(window[1].color, DayColor::Failure);
        assert_eq!(window[1].count, 1);
    }

    #[test]
    fn summary_counts_colors() {
        let state = seeded(&[
            (day(2024, 1, 1), DayColor::Success),
            (day(2024, 1, 2), DayColor::Failure),
            (day(2024, 1, 3), DayColor::Success),
        ]);

        assert_eq!(
            summary(&state),
            RecordSummary {
                total_days: 3,
                success_days: 2,
                failure_days: 1,
            }
        );
    }
}
