use remoview_core::models::{Coordinates, UserGuesses};
use serde::Deserialize;

/// Session submission body
#[derive(Debug, Deserialize)]
pub struct SubmitSessionRequest {
    pub coordinates: Coordinates,
    pub guesses: UserGuesses,
}
