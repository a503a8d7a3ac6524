//! # backstore-storage
//!
//! Blob storage provider implementations for Backstore. Supports an
//! S3-compatible object store and an in-process fallback map.
//!
//! The provider is selected at construction time: a non-empty connection
//! string picks S3, anything else falls back to memory.

pub mod connection_string;
pub mod manager;
pub mod providers;

pub use manager::BlobManager;
