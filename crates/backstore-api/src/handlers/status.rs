//! Status handler.

use axum::extract::State;

use crate::state::AppState;

/// GET /status
pub async fn status(State(state): State<AppState>) -> String {
    [
        format!("counter={}", state.counter_value()),
        format!("cache={}", state.cache.provider_name()),
        format!("blob_storage={}", state.blobs.provider_name()),
        format!("database={}", state.items.provider_name()),
    ]
    .join("\n")
}
