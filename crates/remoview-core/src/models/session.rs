use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

use super::{Coordinates, RealLocationData, UserGuesses, ValidationResult};

/// Identifier of a completed session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SessionId(pub Uuid);

impl SessionId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for SessionId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for SessionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl std::str::FromStr for SessionId {
    type Err = uuid::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Uuid::parse_str(s).map(SessionId)
    }
}

/// Durable record of one completed session. Never mutated after creation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionResult {
    pub id: SessionId,
    pub timestamp: DateTime<Utc>,
    pub coordinates: Coordinates,
    pub user_guesses: UserGuesses,
    pub real_data: RealLocationData,
    pub validation: ValidationResult,
    pub photo_url: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub photo_attribution: Option<String>,
}
