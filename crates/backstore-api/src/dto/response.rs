//! Response DTOs.

use serde::{Deserialize, Serialize};

/// Standard success response wrapper.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiResponse<T: Serialize> {
    /// Whether the request was successful.
    pub success: bool,
    /// Response data.
    pub data: T,
}

impl<T: Serialize> ApiResponse<T> {
    /// Creates a successful response.
    pub fn ok(data: T) -> Self {
        Self {
            success: true,
            data,
        }
    }
}

/// Health check response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    /// Overall status.
    pub status: String,
    /// Crate version.
    pub version: String,
    /// Whether the cache answered its health probe.
    pub cache_reachable: bool,
}

/// Response of `POST /inc`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IncrementResponse {
    /// Counter value after the increment.
    pub counter: u64,
    /// Key the value was cached under (without prefix).
    pub name: String,
}
