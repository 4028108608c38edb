//! In-memory history store for development and testing.
//!
//! Uses `RwLock::unwrap()`: lock poisoning only follows a panic in another
//! thread while holding the lock, which is unrecoverable here.

use async_trait::async_trait;
use remoview_core::error::Result;
use remoview_core::models::SessionResult;
use std::sync::{Arc, RwLock};

use crate::ports::HistoryStore;

/// In-memory implementation of HistoryStore
#[derive(Debug, Clone, Default)]
pub struct MemoryHistoryStore {
    entries: Arc<RwLock<Vec<SessionResult>>>,
}

impl MemoryHistoryStore {
    /// Create an empty in-memory history
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a history pre-populated with entries (most recent first)
    pub fn with_entries(entries: Vec<SessionResult>) -> Self {
        Self { entries: Arc::new(RwLock::new(entries)) }
    }

    pub fn len(&self) -> usize {
        self.entries.read().unwrap().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[async_trait]
impl HistoryStore for MemoryHistoryStore {
    async fn load(&self) -> Result<Vec<SessionResult>> {
        Ok(self.entries.read().unwrap().clone())
    }

    async fn append(&self, result: &SessionResult) -> Result<()> {
        self.entries.write().unwrap().insert(0, result.clone());
        Ok(())
    }
}
