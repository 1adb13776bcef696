//! Storage layer for intake
//!
//! This crate implements the durable key/value adapter the form repository
//! writes through:
//! - KeyValueStore: the trait every backend implements
//! - MemoryStore: shared in-memory map with an optional byte quota
//! - FileStore: one JSON file per key, written atomically
//! - testing::FlakyStore: failure injection for persistence tests
//!
//! Stores move opaque strings. Serialization of form records happens in the
//! engine, so a store never needs to understand what it holds.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod file;
pub mod memory;
pub mod store;
pub mod testing;

pub use file::FileStore;
pub use memory::MemoryStore;
pub use store::{KeyValueStore, StoreResult};
