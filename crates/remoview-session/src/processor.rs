use chrono::Utc;
use remoview_core::error::{RemoviewError, Result};
use remoview_core::models::{Coordinates, SessionId, SessionResult, UserGuesses};
use remoview_llm::ports::{Generator, StructuredRequest};
use remoview_llm::{build_session_request, normalize_response, ProcessedSession};
use remoview_store::ports::HistoryStore;
use std::sync::Arc;

use crate::models::SessionTicket;

/// Session processor orchestrating validation, generation, and history
#[derive(Clone)]
pub struct SessionProcessor {
    generator: Arc<dyn Generator>,
    history: Arc<dyn HistoryStore>,
}

impl SessionProcessor {
    /// Create a new session processor
    pub fn new(generator: Arc<dyn Generator>, history: Arc<dyn HistoryStore>) -> Self {
        Self { generator, history }
    }

    /// Start a new session at random coordinates
    pub fn start(&self) -> SessionTicket {
        let ticket = SessionTicket::random();
        tracing::debug!(
            lat = ticket.coordinates.lat,
            lng = ticket.coordinates.lng,
            "Session started"
        );
        ticket
    }

    /// Submit guesses for the given coordinates.
    ///
    /// Invalid guesses fail with `InvalidGuesses` before any network call. Any
    /// failure of the remote round trip is logged and surfaced as
    /// `SessionProcessingFailed`, leaving the history untouched.
    pub async fn submit(
        &self,
        coordinates: Coordinates,
        guesses: &UserGuesses,
    ) -> Result<SessionResult> {
        let guesses = guesses.trimmed();
        let request = build_session_request(&coordinates, &guesses)?;

        tracing::info!(
            lat = coordinates.lat,
            lng = coordinates.lng,
            model = %self.generator.model_name(),
            "Processing session"
        );

        let processed = self.process_remote(&request).await?;

        let result = SessionResult {
            id: SessionId::new(),
            timestamp: Utc::now(),
            coordinates,
            user_guesses: guesses,
            real_data: processed.real_data,
            validation: processed.validation,
            photo_url: processed.photo_url,
            photo_attribution: Some(processed.attribution),
        };

        if let Err(e) = self.history.append(&result).await {
            tracing::warn!(
                id = %result.id,
                score = result.validation.score,
                country = %result.real_data.country,
                error = %e,
                "Session graded but not saved to history"
            );
            return Err(e);
        }

        tracing::info!(
            id = %result.id,
            score = result.validation.score,
            country = %result.real_data.country,
            "Session complete"
        );

        Ok(result)
    }

    /// Submit guesses for a started session
    pub async fn submit_ticket(
        &self,
        ticket: &SessionTicket,
        guesses: &UserGuesses,
    ) -> Result<SessionResult> {
        self.submit(ticket.coordinates, guesses).await
    }

    /// All completed sessions, most recent first
    pub async fn history(&self) -> Result<Vec<SessionResult>> {
        self.history.load().await
    }

    /// A single completed session
    pub async fn find(&self, id: SessionId) -> Result<SessionResult> {
        self.history
            .find(id)
            .await?
            .ok_or_else(|| RemoviewError::SessionNotFound { id: id.to_string() })
    }

    /// One generation call followed by normalization, collapsed to a single error
    async fn process_remote(&self, request: &StructuredRequest) -> Result<ProcessedSession> {
        let outcome = match self.generator.generate(request).await {
            Ok(raw) => normalize_response(&raw),
            Err(e) => Err(e),
        };

        outcome.map_err(|e| {
            tracing::error!(error = %e, "Error processing session");
            RemoviewError::SessionProcessingFailed
        })
    }
}
