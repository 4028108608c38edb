//! Session response normalization
//!
//! The model output is decoded into tagged structures and rejected on any shape
//! mismatch; partially-typed data never reaches the caller.

use remoview_core::error::{RemoviewError, Result};
use remoview_core::media::{photo_url, PHOTO_ATTRIBUTION};
use remoview_core::models::{RealLocationData, ValidationResult};
use serde::Deserialize;

/// Domain objects recovered from one model response
#[derive(Debug, Clone, PartialEq)]
pub struct ProcessedSession {
    pub real_data: RealLocationData,
    pub validation: ValidationResult,
    pub photo_url: String,
    pub attribution: String,
}

/// Raw response shape, as requested by the session schema
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct SessionResponse {
    location_data: RealLocationData,
    validation_result: ValidationResult,
    photo_keywords: String,
}

/// Decode the model output for a session
pub fn normalize_response(raw: &str) -> Result<ProcessedSession> {
    let response: SessionResponse =
        serde_json::from_str(raw.trim()).map_err(|e| RemoviewError::MalformedResponse {
            reason: format!("Response does not match the session schema: {}", e),
        })?;

    let score = response.validation_result.score;
    if !score.is_finite() || !(0.0..=100.0).contains(&score) {
        return Err(RemoviewError::MalformedResponse {
            reason: format!("Score {} is outside [0, 100]", score),
        });
    }

    Ok(ProcessedSession {
        real_data: response.location_data,
        validation: response.validation_result,
        photo_url: photo_url(&response.photo_keywords),
        attribution: PHOTO_ATTRIBUTION.to_string(),
    })
}
