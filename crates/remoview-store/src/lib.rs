//! RemoView Store - History storage port and adapters
//!
//! This crate defines the session history port and provides in-memory and
//! JSON file implementations.

pub mod file;
pub mod memory;
pub mod ports;

pub use file::JsonFileHistoryStore;
pub use memory::MemoryHistoryStore;
pub use ports::HistoryStore;
