use chrono::{DateTime, Utc};
use remoview_core::media::map_url;
use remoview_core::models::Coordinates;
use serde::Serialize;

/// A session that has been started but not yet submitted
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionTicket {
    /// Target coordinates, fixed for the lifetime of the session
    pub coordinates: Coordinates,
    pub started_at: DateTime<Utc>,
}

impl SessionTicket {
    /// Start a session at freshly sampled coordinates
    pub fn random() -> Self {
        Self::at(Coordinates::random())
    }

    /// Start a session at known coordinates
    pub fn at(coordinates: Coordinates) -> Self {
        Self {
            coordinates,
            started_at: Utc::now(),
        }
    }

    pub fn map_url(&self) -> String {
        map_url(&self.coordinates)
    }
}
