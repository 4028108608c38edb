use async_trait::async_trait;
use remoview_core::error::Result;
use remoview_core::models::{SessionId, SessionResult};

/// Port for the durable, append-only session history
#[async_trait]
pub trait HistoryStore: Send + Sync {
    /// Load every stored session, most recent first
    async fn load(&self) -> Result<Vec<SessionResult>>;

    /// Record a completed session as the most recent entry
    async fn append(&self, result: &SessionResult) -> Result<()>;

    /// Find a stored session by ID
    async fn find(&self, id: SessionId) -> Result<Option<SessionResult>> {
        Ok(self.load().await?.into_iter().find(|r| r.id == id))
    }
}
