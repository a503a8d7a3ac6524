//! Request DTOs.

use serde::Deserialize;

/// Query string for the greeting endpoint.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct GreetingQuery {
    /// Name to greet and look up in the cache.
    #[serde(default)]
    pub name: Option<String>,
}

/// Body of `POST /inc`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct IncrementRequest {
    /// Cache key to store the new counter value under.
    #[serde(default)]
    pub name: Option<String>,
}

/// Fall back to `World` for missing or empty names.
pub fn name_or_default(name: Option<String>) -> String {
    name.filter(|n| !n.is_empty())
        .unwrap_or_else(|| "World".to_string())
}
