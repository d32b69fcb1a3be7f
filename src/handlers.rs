use crate::errors::AppError;
use crate::models::{
    BadHabitResponse, CheckInResponse, DayRecord, HeatmapQuery, HeatmapResponse, TodaySnapshot,
    UndoResponse,
};
use crate::state::AppState;
use crate::stats::HEATMAP_DAYS;
use crate::ui::render_index;
use axum::{
    extract::{Path, Query, State},
    response::{Html, Redirect},
    Json,
};
use chrono::NaiveDate;
use std::collections::BTreeMap;

const MAX_HEATMAP_DAYS: usize = 366;

pub async fn index(State(state): State<AppState>) -> Html<String> {
    let store = state.store.lock().await;
    Html(render_index(
        &store.snapshot(),
        &store.summary(),
        &store.recent_window(HEATMAP_DAYS),
    ))
}

pub async fn get_today(State(state): State<AppState>) -> Json<TodaySnapshot> {
    let store = state.store.lock().await;
    Json(store.snapshot())
}

pub async fn check_in(State(state): State<AppState>) -> Json<CheckInResponse> {
    let mut store = state.store.lock().await;
    let created = store.check_in().await;
    Json(CheckInResponse {
        created,
        today: store.snapshot(),
    })
}

pub async fn bad_habit(State(state): State<AppState>) -> Json<BadHabitResponse> {
    let mut store = state.store.lock().await;
    let count = store.record_bad_habit().await;
    Json(BadHabitResponse {
        count,
        today: store.snapshot(),
    })
}

pub async fn undo(State(state): State<AppState>) -> Json<UndoResponse> {
    let mut store = state.store.lock().await;
    let undone = store.undo_today().await;
    Json(UndoResponse {
        undone,
        today: store.snapshot(),
    })
}

pub async fn check_in_form(State(state): State<AppState>) -> Redirect {
    state.store.lock().await.check_in().await;
    Redirect::to("/")
}

pub async fn bad_habit_form(State(state): State<AppState>) -> Redirect {
    state.store.lock().await.record_bad_habit().await;
    Redirect::to("/")
}

pub async fn undo_form(State(state): State<AppState>) -> Redirect {
    state.store.lock().await.undo_today().await;
    Redirect::to("/")
}

pub async fn get_years(State(state): State<AppState>) -> Json<Vec<i32>> {
    let store = state.store.lock().await;
    Json(store.available_years())
}

pub async fn get_year_records(
    State(state): State<AppState>,
    Path(year): Path<i32>,
) -> Json<BTreeMap<NaiveDate, DayRecord>> {
    let store = state.store.lock().await;
    Json(store.records_for_year(year))
}

pub async fn get_heatmap(
    State(state): State<AppState>,
    Query(query): Query<HeatmapQuery>,
) -> Result<Json<HeatmapResponse>, AppError> {
    let days = query.days.unwrap_or(HEATMAP_DAYS);
    if days == 0 || days > MAX_HEATMAP_DAYS {
        return Err(AppError::bad_request(format!(
            "days must be between 1 and {MAX_HEATMAP_DAYS}"
        )));
    }

    let store = state.store.lock().await;
    Ok(Json(HeatmapResponse {
        summary: store.summary(),
        cells: store.recent_window(days),
    }))
}
