//! Gemini API client
//!
//! Calls the Generative Language REST API with a JSON response schema so the
//! model answers with structured JSON text.
//!
//! API Documentation: https://ai.google.dev/api/generate-content

use std::time::Duration;

use anyhow::{Context, Result};
use reqwest::blocking::Client;
use serde::{Deserialize, Serialize};
use serde_json::Value as JsonValue;

use crate::domain::result::{Error as DomainError, Result as DomainResult};
use crate::ports::{GenerationRequest, TextGenerator};

// =============================================================================
// API Request/Response Models (generateContent)
// =============================================================================

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerateContentRequest<'a> {
    contents: Vec<Content<'a>>,
    generation_config: GenerationConfig<'a>,
}

#[derive(Debug, Serialize)]
struct Content<'a> {
    parts: Vec<RequestPart<'a>>,
}

#[derive(Debug, Serialize)]
struct RequestPart<'a> {
    text: &'a str,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerationConfig<'a> {
    response_mime_type: &'static str,
    response_schema: &'a JsonValue,
}

#[derive(Debug, Deserialize)]
struct GenerateContentResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    #[serde(default)]
    content: Option<CandidateContent>,
}

#[derive(Debug, Deserialize)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<ResponsePart>,
}

#[derive(Debug, Deserialize)]
struct ResponsePart {
    #[serde(default)]
    text: Option<String>,
}

impl GenerateContentResponse {
    /// Concatenated text of the first candidate, like the SDK's `response.text`
    fn text(&self) -> Option<String> {
        let parts = &self.candidates.first()?.content.as_ref()?.parts;
        let text: String = parts.iter().filter_map(|p| p.text.as_deref()).collect();
        if text.trim().is_empty() {
            None
        } else {
            Some(text)
        }
    }
}

// =============================================================================
// Gemini HTTP Client
// =============================================================================

/// Default production API URL
const GEMINI_PRODUCTION_URL: &str = "https://generativelanguage.googleapis.com/v1beta";

/// Model used for every panel
pub const DEFAULT_MODEL: &str = "gemini-2.5-flash";

/// Environment variable to override the Gemini API base URL.
/// Set this to point at a local mock server for testing.
pub const GEMINI_BASE_URL_ENV: &str = "SPROUT_GEMINI_BASE_URL";

/// Get the Gemini base URL, checking environment variable first
pub fn get_base_url() -> String {
    std::env::var(GEMINI_BASE_URL_ENV).unwrap_or_else(|_| GEMINI_PRODUCTION_URL.to_string())
}

/// Gemini API client
#[derive(Debug)]
pub struct GeminiClient {
    client: Client,
    api_key: String,
    model: String,
    base_url: String,
}

impl GeminiClient {
    /// Create a new Gemini client with the given API key and model.
    ///
    /// Uses the `SPROUT_GEMINI_BASE_URL` environment variable if set,
    /// otherwise defaults to the production API.
    pub fn new(api_key: &str, model: &str) -> Result<Self> {
        Self::new_with_base_url(api_key, model, &get_base_url())
    }

    /// Create a new Gemini client with a custom base URL.
    pub fn new_with_base_url(api_key: &str, model: &str, base_url: &str) -> Result<Self> {
        if api_key.is_empty() {
            anyhow::bail!("Gemini API key cannot be empty");
        }

        let client = Client::builder()
            .timeout(Duration::from_secs(60))
            .build()
            .context("Failed to create HTTP client")?;

        Ok(Self {
            client,
            api_key: api_key.to_string(),
            model: if model.is_empty() {
                DEFAULT_MODEL.to_string()
            } else {
                model.to_string()
            },
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    /// Run generateContent and return the JSON text of the first candidate
    pub fn generate_json(&self, prompt: &str, schema: &JsonValue) -> Result<String> {
        let url = format!("{}/models/{}:generateContent", self.base_url, self.model);

        let body = GenerateContentRequest {
            contents: vec![Content {
                parts: vec![RequestPart { text: prompt }],
            }],
            generation_config: GenerationConfig {
                response_mime_type: "application/json",
                response_schema: schema,
            },
        };

        let response = self
            .client
            .post(&url)
            .header("x-goog-api-key", &self.api_key)
            .json(&body)
            .send()
            .map_err(|e| self.map_request_error(e))?;

        self.check_response_status(&response)?;

        let api_response: GenerateContentResponse = response
            .json()
            .context("Failed to parse Gemini generateContent response")?;

        api_response
            .text()
            .ok_or_else(|| anyhow::anyhow!("No response from AI"))
    }

    /// Map request errors to user-friendly messages
    fn map_request_error(&self, error: reqwest::Error) -> anyhow::Error {
        if error.is_timeout() {
            anyhow::anyhow!("Connection timed out after 60 seconds")
        } else if error.is_connect() {
            anyhow::anyhow!("Unable to connect to Gemini servers")
        } else {
            anyhow::anyhow!("Gemini request failed: {}", error)
        }
    }

    /// Check response status and return appropriate errors
    fn check_response_status(&self, response: &reqwest::blocking::Response) -> Result<()> {
        match response.status().as_u16() {
            200 => Ok(()),
            400 => anyhow::bail!("Gemini rejected the request (bad prompt or schema)."),
            401 | 403 => {
                anyhow::bail!("Gemini authentication failed. Your API key may be invalid.")
            }
            404 => anyhow::bail!("Gemini model '{}' not found.", self.model),
            429 => anyhow::bail!("Gemini rate limit exceeded."),
            status => anyhow::bail!("Gemini API error: HTTP {}", status),
        }
    }
}

impl TextGenerator for GeminiClient {
    fn name(&self) -> &str {
        "gemini"
    }

    fn generate(&self, request: &GenerationRequest) -> DomainResult<String> {
        self.generate_json(&request.prompt, &request.response_schema)
            .map_err(|e| DomainError::generation(e.to_string()))
    }
}
