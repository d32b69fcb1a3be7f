use habit_tracker::{AppConfig, AppState, HabitStore, SystemClock, router};
use std::sync::Arc;
use tokio::fs;
use tracing::info;
use tracing_subscriber::{EnvFilter, fmt};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive("info".parse()?))
        .init();

    let config = AppConfig::from_env();
    if let Some(parent) = config.data_path.parent() {
        fs::create_dir_all(parent).await?;
    }

    let mut store = HabitStore::open(config.data_path.clone(), Arc::new(SystemClock)).await;
    if store.check_in().await {
        info!("automatic check-in recorded for {}", store.today());
    }
    info!(
        path = %store.path().display(),
        score = store.state().score,
        streak = store.state().streak,
        status = %store.today_status(),
        "tracker loaded"
    );

    let app = router(AppState::new(store));

    info!("listening on http://{}", config.addr);
    let listener = tokio::net::TcpListener::bind(config.addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

async fn shutdown_signal() {
    if tokio::signal::ctrl_c().await.is_ok() {
        info!("shutting down");
    }
}
