//! # backstore-cache
//!
//! Cache provider implementations for Backstore. Supports two modes:
//!
//! - **memory**: In-process fallback using [moka](https://crates.io/crates/moka),
//!   no expiry and no persistence
//! - **redis**: Redis-backed cache using the [redis](https://crates.io/crates/redis) crate,
//!   with per-entry TTL enforced by the server
//!
//! The provider is selected at construction time: a configured host picks
//! Redis, anything else falls back to memory.

#[cfg(feature = "memory")]
pub mod memory;
pub mod provider;
#[cfg(feature = "redis-backend")]
pub mod redis;

pub use provider::CacheManager;
