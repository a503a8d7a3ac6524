//! Counter handler.

use axum::Json;
use axum::extract::State;
use tracing::debug;

use crate::dto::request::{IncrementRequest, name_or_default};
use crate::dto::response::IncrementResponse;
use crate::error::ApiError;
use crate::state::AppState;

/// How long an incremented value stays in the cache.
pub const COUNTER_TTL_SECONDS: u64 = 10;

/// POST /inc
///
/// The JSON body is optional; without one the value is cached under `World`.
pub async fn increment(
    State(state): State<AppState>,
    body: Option<Json<IncrementRequest>>,
) -> Result<Json<IncrementResponse>, ApiError> {
    let counter = state.bump_counter();
    let name = name_or_default(body.and_then(|Json(body)| body.name));

    state
        .cache
        .set_string(&name, &counter.to_string(), COUNTER_TTL_SECONDS)
        .await?;
    debug!(name = %name, counter, "Cached counter value");

    Ok(Json(IncrementResponse { counter, name }))
}
