//! Offline text generator
//!
//! Used when no API key is configured or offline mode is on. Every call
//! fails, so each panel shows its canned fallback.

use crate::domain::result::{Error, Result};
use crate::ports::{GenerationRequest, TextGenerator};

#[derive(Debug, Default, Clone, Copy)]
pub struct OfflineGenerator;

impl OfflineGenerator {
    pub fn new() -> Self {
        Self
    }
}

impl TextGenerator for OfflineGenerator {
    fn name(&self) -> &str {
        "offline"
    }

    fn generate(&self, _request: &GenerationRequest) -> Result<String> {
        Err(Error::generation("text generation is offline"))
    }
}
