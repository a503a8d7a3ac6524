//! # backstore-database
//!
//! PostgreSQL connection handling and the item store implementations.
//!
//! The PostgreSQL store opens a fresh connection for every query and closes
//! it afterwards; there is no pool.

pub mod connection;
pub mod provider;
pub mod repositories;

pub use connection::DatabaseConnector;
pub use provider::ItemManager;
