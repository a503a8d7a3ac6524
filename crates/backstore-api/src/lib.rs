//! # backstore-api
//!
//! HTTP API layer for Backstore built on Axum.
//!
//! Each route maps to exactly one capability call on the cache, blob, or
//! item manager held in [`AppState`].

pub mod dto;
pub mod error;
pub mod handlers;
pub mod middleware;
pub mod router;
pub mod state;

pub use error::ApiError;
pub use router::build_router;
pub use state::AppState;
