//! Capability traits defined in `backstore-core` and implemented by the
//! provider crates.

pub mod blob;
pub mod cache;
pub mod items;

pub use blob::{BlobMetadata, BlobStore};
pub use cache::CacheProvider;
pub use items::ItemStore;
