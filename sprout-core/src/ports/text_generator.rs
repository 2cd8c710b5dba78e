//! Text generation port
//!
//! Defines the interface to the external generative-language service.
//! The service is an opaque collaborator: it receives a prompt plus a
//! strict JSON output schema and returns JSON text.

use serde_json::Value as JsonValue;

use crate::domain::result::Result;

/// A single structured generation request
#[derive(Debug, Clone, PartialEq)]
pub struct GenerationRequest {
    /// Natural-language instructions
    pub prompt: String,
    /// JSON schema the response must follow (OpenAPI subset, uppercase types)
    pub response_schema: JsonValue,
}

impl GenerationRequest {
    pub fn new(prompt: impl Into<String>, response_schema: JsonValue) -> Self {
        Self {
            prompt: prompt.into(),
            response_schema,
        }
    }
}

/// Text generator trait
///
/// Implementations return the raw JSON text produced by the model. Parsing
/// and fallback handling live in `GenerationService`, so adapters only need
/// to report transport failures.
pub trait TextGenerator: Send + Sync {
    /// Generator name (e.g., "gemini", "offline")
    fn name(&self) -> &str;

    /// Run one generation and return the model's JSON text
    fn generate(&self, request: &GenerationRequest) -> Result<String>;
}
