//! RemoView Session - Session processing
//!
//! This crate drives one session end to end: local guess validation, the
//! inference round trip, response normalization, and history persistence.

pub mod models;
pub mod processor;

pub use models::SessionTicket;
pub use processor::SessionProcessor;
