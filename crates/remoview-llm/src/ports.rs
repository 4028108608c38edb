//! LLM port definitions

use async_trait::async_trait;
use remoview_core::error::Result;
use serde_json::Value;

/// A prompt paired with the JSON schema the response must follow
#[derive(Debug, Clone, PartialEq)]
pub struct StructuredRequest {
    /// Natural-language instruction
    pub prompt: String,

    /// Output schema (OpenAPI subset, as accepted by Gemini `responseSchema`)
    pub schema: Value,
}

/// Port for structured text generation
#[async_trait]
pub trait Generator: Send + Sync {
    /// Issue one generation call and return the raw JSON text of the response
    ///
    /// # Arguments
    /// * `request` - Prompt and response schema
    ///
    /// # Returns
    /// The model output, expected to be a single JSON document
    async fn generate(&self, request: &StructuredRequest) -> Result<String>;

    /// Get the name/identifier of the generation model
    fn model_name(&self) -> &str;
}
