use chrono::{Duration, NaiveDate};
use habit_tracker::models::{DayColor, MAX_SCORE, TrackerState};
use proptest::prelude::*;

#[derive(Debug, Clone, Copy)]
enum Op {
    CheckIn,
    BadHabit,
    Undo,
    NextDay(u8),
}

fn op() -> impl Strategy<Value = Op> {
    prop_oneof![
        3 => Just(Op::CheckIn),
        3 => Just(Op::BadHabit),
        1 => Just(Op::Undo),
        3 => (1u8..4).prop_map(Op::NextDay),
    ]
}

fn start() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 1, 1).unwrap()
}

proptest! {
    #[test]
    fn invariants_hold_for_any_sequence(initial in 0u32..=MAX_SCORE, ops in prop::collection::vec(op(), 0..120)) {
        let mut state = TrackerState { score: initial, ..TrackerState::default() };
        let mut today = start();

        for op in ops {
            let now = today.and_hms_opt(12, 0, 0).unwrap();
            match op {
                Op::CheckIn => { state.check_in_at(now); }
                Op::BadHabit => {
                    state.record_bad_habit_at(now);
                    prop_assert_eq!(state.streak, 0);
                }
                Op::Undo => { state.undo_at(today); }
                Op::NextDay(days) => today += Duration::days(i64::from(days)),
            }

            prop_assert!(state.score <= MAX_SCORE);
            prop_assert_eq!(state.first_record_date, state.records.keys().next().copied());
            if let Some(record) = state.records.get(&today) {
                match record.color {
                    DayColor::Success => prop_assert_eq!(record.count, 0),
                    DayColor::Failure => {
                        prop_assert!(record.count >= 1);
                        prop_assert_eq!(state.streak, 0);
                    }
                }
            }
        }
    }

    #[test]
    fn undo_after_check_in_restores_streak_and_records(
        ops in prop::collection::vec(op(), 0..60),
        gap in 0i64..5,
    ) {
        let mut state = TrackerState::default();
        let mut today = start();
        for op in ops {
            let now = today.and_hms_opt(12, 0, 0).unwrap();
            match op {
                Op::CheckIn => { state.check_in_at(now); }
                Op::BadHabit => { state.record_bad_habit_at(now); }
                Op::Undo => { state.undo_at(today); }
                Op::NextDay(days) => today += Duration::days(i64::from(days)),
            }
        }
        let day = today + Duration::days(gap);
        let before = state.clone();

        if state.check_in_at(day.and_hms_opt(7, 30, 0).unwrap()) {
            prop_assert_eq!(state.streak, before.streak + 1);
            prop_assert!(state.undo_at(day));
            prop_assert_eq!(state.streak, before.streak);
            prop_assert_eq!(&state.records, &before.records);
            prop_assert_eq!(state.first_record_date, before.first_record_date);
        } else {
            prop_assert_eq!(state, before);
        }
    }

    #[test]
    fn undo_reverses_bad_habits(initial in 0u32..=MAX_SCORE, n in 1u32..30) {
        let mut state = TrackerState { score: initial, ..TrackerState::default() };
        let now = start().and_hms_opt(12, 0, 0).unwrap();

        for _ in 0..n {
            state.record_bad_habit_at(now);
        }
        prop_assert_eq!(state.records[&start()].count, n);
        prop_assert_eq!(state.score, initial.saturating_sub(10 * n));

        let after_failures = state.score;
        prop_assert!(state.undo_at(start()));
        prop_assert_eq!(state.score, (after_failures + 10 * n).min(MAX_SCORE));
        prop_assert!(state.records.is_empty());
        prop_assert_eq!(state.first_record_date, None);
    }

    #[test]
    fn second_check_in_same_day_changes_nothing(hour in 0u32..24) {
        let mut state = TrackerState::default();
        state.check_in_at(start().and_hms_opt(0, 0, 0).unwrap());
        let before = state.clone();

        prop_assert!(!state.check_in_at(start().and_hms_opt(hour, 59, 59).unwrap()));
        prop_assert_eq!(state, before);
    }
}
