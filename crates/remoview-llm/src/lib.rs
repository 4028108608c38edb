//! RemoView LLM - Session request building, response normalization, and generation ports
//!
//! This crate defines the generation port along with the Gemini adapter, and
//! owns the fixed request/response contract of a session.

pub mod gemini;
pub mod normalize;
pub mod ports;
pub mod request;

// Re-export main types
pub use gemini::GeminiGenerator;
pub use normalize::{normalize_response, ProcessedSession};
pub use ports::{Generator, StructuredRequest};
pub use request::build_session_request;
