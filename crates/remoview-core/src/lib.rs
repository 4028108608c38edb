//! RemoView Core - Domain models, guess validation, and configuration
//!
//! This crate contains the session data model shared by the request builder,
//! the history store, and the front-ends.

pub mod config;
pub mod error;
pub mod media;
pub mod models;

pub use error::{RemoviewError, Result};
