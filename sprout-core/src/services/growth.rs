//! Text panels backed by the generation service: worry shredder,
//! experience translator and social script.

use std::time::Duration;

use crate::domain::{ComfortResponse, ExperienceTranslation, SocialScriptResponse};
use crate::services::generation::{GenerationService, Generated, Source};

/// Length of the shredding animation shown before the comfort message
pub const SHRED_ANIMATION: Duration = Duration::from_millis(1500);

/// XP for each shredded worry
pub const WORRY_XP: u32 = 30;

#[derive(Debug, Clone, Default)]
pub struct WorryShredder {
    draft: String,
    result: Option<Generated<ComfortResponse>>,
}

impl WorryShredder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn draft(&self) -> &str {
        &self.draft
    }

    pub fn set_draft(&mut self, text: impl Into<String>) {
        self.draft = text.into();
    }

    pub fn result(&self) -> Option<&Generated<ComfortResponse>> {
        self.result.as_ref()
    }

    /// Shred the current draft.
    ///
    /// Blank drafts do nothing and return `None`. Otherwise the draft is
    /// cleared and the comfort response stored and returned.
    pub fn shred(&mut self, generation: &GenerationService) -> Option<&Generated<ComfortResponse>> {
        if self.draft.trim().is_empty() {
            return None;
        }
        let worry = std::mem::take(&mut self.draft);
        self.result = Some(generation.comfort(&worry));
        self.result.as_ref()
    }

    pub fn reset(&mut self) {
        self.result = None;
    }
}

#[derive(Debug, Clone, Default)]
pub struct ExperienceTranslator {
    input: String,
    results: Vec<ExperienceTranslation>,
    source: Option<Source>,
}

impl ExperienceTranslator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn input(&self) -> &str {
        &self.input
    }

    pub fn set_input(&mut self, text: impl Into<String>) {
        self.input = text.into();
    }

    pub fn results(&self) -> &[ExperienceTranslation] {
        &self.results
    }

    /// Where the current results came from
    pub fn source(&self) -> Option<Source> {
        self.source
    }

    /// Translate the input. Blank input is a no-op and returns false.
    pub fn translate(&mut self, generation: &GenerationService) -> bool {
        if self.input.trim().is_empty() {
            return false;
        }
        let generated = generation.translate_experience(&self.input);
        self.source = Some(generated.source);
        self.results = generated.into_inner();
        true
    }

    pub fn reset(&mut self) {
        self.results.clear();
        self.input.clear();
        self.source = None;
    }
}

#[derive(Debug, Clone, Default)]
pub struct SocialScriptPanel {
    situation: String,
    response: Option<Generated<SocialScriptResponse>>,
}

impl SocialScriptPanel {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn situation(&self) -> &str {
        &self.situation
    }

    pub fn set_situation(&mut self, text: impl Into<String>) {
        self.situation = text.into();
    }

    pub fn response(&self) -> Option<&Generated<SocialScriptResponse>> {
        self.response.as_ref()
    }

    /// Generate a script, replacing the previous one.
    /// Blank situations are ignored.
    pub fn generate(
        &mut self,
        generation: &GenerationService,
    ) -> Option<&Generated<SocialScriptResponse>> {
        if self.situation.trim().is_empty() {
            return None;
        }
        self.response = Some(generation.social_script(&self.situation));
        self.response.as_ref()
    }
}
