use async_trait::async_trait;
use remoview_core::config::{LayeredConfig, DEFAULT_API_BASE_URL};
use remoview_core::error::{RemoviewError, Result};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::ports::{Generator, StructuredRequest};

const API_KEY_HEADER: &str = "x-goog-api-key";

/// Gemini `generateContent` implementation of [`Generator`]
pub struct GeminiGenerator {
    /// Base URL for the Gemini API (e.g., "https://generativelanguage.googleapis.com/v1beta")
    base_url: String,

    /// Model name to use for generation
    model: String,

    api_key: String,

    /// HTTP client
    client: reqwest::Client,
}

impl GeminiGenerator {
    /// Create a new Gemini generator
    pub fn new(
        base_url: impl Into<String>,
        model: impl Into<String>,
        api_key: impl Into<String>,
    ) -> Self {
        Self {
            base_url: base_url.into(),
            model: model.into(),
            api_key: api_key.into(),
            client: reqwest::Client::new(),
        }
    }

    /// Create against the public Gemini endpoint
    pub fn public(model: impl Into<String>, api_key: impl Into<String>) -> Self {
        Self::new(DEFAULT_API_BASE_URL, model, api_key)
    }

    /// Create from layered configuration. Fails when no API key is configured.
    pub fn from_config(config: &LayeredConfig) -> Result<Self> {
        let api_key = config.require_api_key()?;
        Ok(Self::new(
            config.api_base_url.value.clone(),
            config.model.value.clone(),
            api_key,
        ))
    }

    fn endpoint(&self) -> String {
        format!("{}/models/{}:generateContent", self.base_url, self.model)
    }
}

#[async_trait]
impl Generator for GeminiGenerator {
    async fn generate(&self, request: &StructuredRequest) -> Result<String> {
        let body = GenerateContentRequest {
            contents: vec![Content {
                role: "user".to_string(),
                parts: vec![Part { text: request.prompt.clone() }],
            }],
            generation_config: GenerationConfig {
                response_mime_type: "application/json".to_string(),
                response_schema: request.schema.clone(),
            },
        };

        tracing::debug!(model = %self.model, "Sending generateContent request");

        let response = self
            .client
            .post(self.endpoint())
            .header(API_KEY_HEADER, &self.api_key)
            .json(&body)
            .send()
            .await
            .map_err(|e| RemoviewError::Generation {
                reason: format!("Failed to reach Gemini at {}: {}", self.base_url, e),
            })?;

        if !response.status().is_success() {
            let status = response.status();
            let error_text = response.text().await.unwrap_or_default();
            return Err(RemoviewError::Generation {
                reason: format!("Gemini API error ({}): {}", status, error_text),
            });
        }

        let generated: GenerateContentResponse =
            response.json().await.map_err(|e| RemoviewError::Generation {
                reason: format!("Failed to parse Gemini response: {}", e),
            })?;

        generated.text().ok_or_else(|| RemoviewError::Generation {
            reason: "Gemini response contained no text candidate".to_string(),
        })
    }

    fn model_name(&self) -> &str {
        &self.model
    }
}

/// Request body for the generateContent API
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerateContentRequest {
    contents: Vec<Content>,
    generation_config: GenerationConfig,
}

#[derive(Debug, Serialize, Deserialize)]
struct Content {
    #[serde(default)]
    role: String,
    #[serde(default)]
    parts: Vec<Part>,
}

#[derive(Debug, Serialize, Deserialize)]
struct Part {
    #[serde(default)]
    text: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerationConfig {
    response_mime_type: String,
    response_schema: Value,
}

/// Response from the generateContent API
#[derive(Debug, Deserialize)]
struct GenerateContentResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    content: Option<Content>,
}

impl GenerateContentResponse {
    /// Concatenated text parts of the first candidate
    fn text(&self) -> Option<String> {
        let content = self.candidates.first()?.content.as_ref()?;
        let text: String = content.parts.iter().map(|p| p.text.as_str()).collect();
        if text.trim().is_empty() {
            None
        } else {
            Some(text)
        }
    }
}
