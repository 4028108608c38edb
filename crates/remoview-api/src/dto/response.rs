use remoview_core::models::Coordinates;
use remoview_session::SessionTicket;
use serde::Serialize;

/// Health check response
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub service: &'static str,
}

impl Default for HealthResponse {
    fn default() -> Self {
        Self { status: "ok", service: "remoview-api" }
    }
}

/// Freshly sampled target coordinates
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CoordinatesResponse {
    pub coordinates: Coordinates,
    /// Hemisphere notation, e.g. `48.8584° N, 2.2945° E`
    pub formatted: String,
    pub map_url: String,
}

impl From<SessionTicket> for CoordinatesResponse {
    fn from(ticket: SessionTicket) -> Self {
        Self {
            coordinates: ticket.coordinates,
            formatted: ticket.coordinates.to_string(),
            map_url: ticket.map_url(),
        }
    }
}
