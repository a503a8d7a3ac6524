//! HTTP request handlers.

pub mod blob;
pub mod counter;
pub mod greeting;
pub mod health;
pub mod items;
pub mod status;
