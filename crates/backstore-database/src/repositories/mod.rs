//! Item store implementations.

pub mod items;
pub mod memory;

pub use items::PgItemStore;
pub use memory::MemoryItemStore;
