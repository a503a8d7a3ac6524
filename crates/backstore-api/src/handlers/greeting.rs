//! Greeting handler.

use axum::extract::{Query, State};

use crate::dto::request::{GreetingQuery, name_or_default};
use crate::error::ApiError;
use crate::state::AppState;

/// GET /?name=
pub async fn greet(
    State(state): State<AppState>,
    Query(query): Query<GreetingQuery>,
) -> Result<String, ApiError> {
    let name = name_or_default(query.name);
    let cached = state.cache.get_string(&name).await?;

    Ok(format!(
        "Hello {name}! counter={} val={}",
        state.counter_value(),
        cached.as_deref().unwrap_or("null")
    ))
}
