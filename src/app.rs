use crate::handlers;
use crate::state::AppState;
use axum::{routing::{get, post}, Router};

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(handlers::index))
        .route("/check-in", post(handlers::check_in_form))
        .route("/bad-habit", post(handlers::bad_habit_form))
        .route("/undo", post(handlers::undo_form))
        .route("/api/today", get(handlers::get_today))
        .route("/api/check-in", post(handlers::check_in))
        .route("/api/bad-habit", post(handlers::bad_habit))
        .route("/api/undo", post(handlers::undo))
        .route("/api/years", get(handlers::get_years))
        .route("/api/records/:year", get(handlers::get_year_records))
        .route("/api/heatmap", get(handlers::get_heatmap))
        .with_state(state)
}
