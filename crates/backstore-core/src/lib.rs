//! # backstore-core
//!
//! Core crate for Backstore. Contains the three storage capability traits
//! (cache, blob store, item store), configuration schemas, and the unified
//! error system.
//!
//! This crate has **no** internal dependencies on other Backstore crates.

pub mod config;
pub mod error;
pub mod result;
pub mod traits;

pub use error::AppError;
pub use result::AppResult;
