//! Item store handler.

use axum::extract::State;

use crate::error::ApiError;
use crate::state::AppState;

/// GET /items
pub async fn list(State(state): State<AppState>) -> Result<String, ApiError> {
    let items = state.items.items().await?;
    let joined = items
        .iter()
        .map(i64::to_string)
        .collect::<Vec<_>>()
        .join(",");

    Ok(format!("Items={joined}\n"))
}
