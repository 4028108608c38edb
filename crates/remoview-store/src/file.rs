//! JSON file history store.
//!
//! The whole history lives in one file holding the serialized list. The file
//! is rewritten after every completed session through a temporary sibling and
//! a rename, and appends are serialized by an async mutex.

use async_trait::async_trait;
use remoview_core::error::{RemoviewError, Result};
use remoview_core::models::SessionResult;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tokio::fs;
use tokio::sync::Mutex;

use crate::ports::HistoryStore;

/// History persisted as a JSON array in a single file
#[derive(Debug)]
pub struct JsonFileHistoryStore {
    path: PathBuf,
    write_lock: Mutex<()>,
}

impl JsonFileHistoryStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            write_lock: Mutex::new(()),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    async fn read_entries(&self) -> Result<Vec<SessionResult>> {
        let content = match fs::read_to_string(&self.path).await {
            Ok(content) => content,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(Vec::new()),
            Err(e) => return Err(e.into()),
        };

        if content.trim().is_empty() {
            return Ok(Vec::new());
        }

        serde_json::from_str(&content).map_err(|e| {
            RemoviewError::Serialization(format!(
                "History file {} is unreadable: {}",
                self.path.display(),
                e
            ))
        })
    }

    async fn write_entries(&self, entries: &[SessionResult]) -> Result<()> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).await?;
        }

        let content = serde_json::to_string_pretty(entries)?;
        let tmp_path = self.path.with_extension("json.tmp");
        fs::write(&tmp_path, content).await?;
        fs::rename(&tmp_path, &self.path).await?;
        Ok(())
    }
}

#[async_trait]
impl HistoryStore for JsonFileHistoryStore {
    async fn load(&self) -> Result<Vec<SessionResult>> {
        self.read_entries().await
    }

    async fn append(&self, result: &SessionResult) -> Result<()> {
        let _guard = self.write_lock.lock().await;

        let mut entries = self.read_entries().await?;
        entries.insert(0, result.clone());
        self.write_entries(&entries).await?;

        tracing::debug!(
            path = %self.path.display(),
            entries = entries.len(),
            "History written"
        );
        Ok(())
    }
}
