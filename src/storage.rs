use crate::errors::StoreError;
use crate::models::TrackerState;
use std::path::Path;
use tokio::fs;
use tracing::error;

/// Reads the state file, returning a fresh state when it is absent or broken.
pub async fn load_state(path: &Path) -> TrackerState {
    match read_state(path).await {
        Ok(Some(state)) => state,
        Ok(None) => TrackerState::default(),
        Err(err) => {
            error!(path = %path.display(), "{err}; starting from a fresh state");
            TrackerState::default()
        }
    }
}

/// Like [`load_state`] but reports why a file could not be used.
pub async fn read_state(path: &Path) -> Result<Option<TrackerState>, StoreError> {
    let bytes = match fs::read(path).await {
        Ok(bytes) => bytes,
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => return Ok(None),
        Err(err) => return Err(StoreError::Read(err)),
    };

    let mut state: TrackerState = serde_json::from_slice(&bytes).map_err(StoreError::Parse)?;
    state.normalize();
    Ok(Some(state))
}

/// Rewrites the whole state file.
pub async fn persist_state(path: &Path, state: &TrackerState) -> Result<(), StoreError> {
    let payload = serde_json::to_vec_pretty(state).map_err(StoreError::Serialize)?;
    fs::write(path, payload).await.map_err(StoreError::Write)?;
    Ok(())
}
