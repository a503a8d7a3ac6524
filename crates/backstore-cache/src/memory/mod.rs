//! In-process fallback cache.

pub mod store;

pub use store::MemoryCacheProvider;
