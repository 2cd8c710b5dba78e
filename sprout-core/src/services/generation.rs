//! Generation service - prompts, schemas and fallbacks for every AI panel
//!
//! Each operation sends a fixed prompt plus a strict JSON schema to the
//! configured `TextGenerator`. Any failure (transport, empty body, bad JSON)
//! is logged and replaced with the panel's canned fallback, so callers
//! always get a usable value.

use std::sync::Arc;

use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::json;

use crate::domain::job::resting_buffs;
use crate::domain::result::{Error, Result};
use crate::domain::{
    ComfortResponse, ExperienceTranslation, JobBuff, JobCoachingResponse, SocialScriptResponse,
};
use crate::ports::{GenerationRequest, TextGenerator};

/// Where a generated value came from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Source {
    Model,
    Fallback,
}

/// A generated value tagged with its source
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Generated<T> {
    pub value: T,
    pub source: Source,
}

impl<T> Generated<T> {
    fn model(value: T) -> Self {
        Self {
            value,
            source: Source::Model,
        }
    }

    fn fallback(value: T) -> Self {
        Self {
            value,
            source: Source::Fallback,
        }
    }

    pub fn is_fallback(&self) -> bool {
        self.source == Source::Fallback
    }

    pub fn into_inner(self) -> T {
        self.value
    }
}

/// Generation service over a pluggable text generator
#[derive(Clone)]
pub struct GenerationService {
    generator: Arc<dyn TextGenerator>,
}

impl GenerationService {
    pub fn new(generator: Arc<dyn TextGenerator>) -> Self {
        Self { generator }
    }

    pub fn generator_name(&self) -> &str {
        self.generator.name()
    }

    /// Short comfort message plus one micro-step for a worry
    pub fn comfort(&self, worry: &str) -> Generated<ComfortResponse> {
        let prompt = format!(
            "The user is feeling anxious about: \"{worry}\".\n\
             Provide a very short, warm, and empathetic comforting message (under 50 characters) in Korean.\n\
             Then, suggest one extremely small micro-step action (e.g., \"take one deep breath\") to help them."
        );
        let schema = json!({
            "type": "OBJECT",
            "properties": {
                "comfortMessage": { "type": "STRING" },
                "actionItem": { "type": "STRING" }
            },
            "required": ["comfortMessage", "actionItem"]
        });

        self.request("comfort", GenerationRequest::new(prompt, schema))
            .map(Generated::model)
            .unwrap_or_else(|_| Generated::fallback(ComfortResponse::fallback()))
    }

    /// Reframe an unofficial experience as up to three resume skills.
    ///
    /// Model results carry the original text; the fallback does not.
    pub fn translate_experience(&self, raw: &str) -> Generated<Vec<ExperienceTranslation>> {
        let prompt = format!(
            "The user describes their unofficial experience (gaming, fangirling, resting) as: \"{raw}\".\n\
             Translate this into professional \"soft skills\" or \"competencies\" for a resume.\n\
             Re-frame it positively. Return a JSON array of objects with 'skill' and 'description' keys.\n\
             Limit to 3 items. Language: Korean."
        );
        let schema = json!({
            "type": "ARRAY",
            "items": {
                "type": "OBJECT",
                "properties": {
                    "skill": { "type": "STRING" },
                    "description": { "type": "STRING" }
                }
            }
        });

        match self.request::<Vec<ExperienceTranslation>>(
            "translate",
            GenerationRequest::new(prompt, schema),
        ) {
            Ok(items) => Generated::model(
                items
                    .into_iter()
                    .map(|item| ExperienceTranslation {
                        original_text: Some(raw.to_string()),
                        ..item
                    })
                    .collect(),
            ),
            Err(_) => Generated::fallback(ExperienceTranslation::fallback()),
        }
    }

    /// Polite script and one calming tip for a social situation
    pub fn social_script(&self, situation: &str) -> Generated<SocialScriptResponse> {
        let prompt = format!(
            "The user needs a social script for this situation: \"{situation}\".\n\
             Write a polite, natural Korean script they can read.\n\
             Also provide 1 small tip to reduce anxiety."
        );
        let schema = json!({
            "type": "OBJECT",
            "properties": {
                "script": { "type": "STRING" },
                "tips": { "type": "STRING" }
            }
        });

        self.request("script", GenerationRequest::new(prompt, schema))
            .map(Generated::model)
            .unwrap_or_else(|_| Generated::fallback(SocialScriptResponse::fallback()))
    }

    /// Strengths discovered while resting. Static; no model call.
    pub fn job_buffs(&self) -> Vec<JobBuff> {
        resting_buffs()
    }

    /// Encouragement, gentle gap analysis and a three-step roadmap
    pub fn job_coaching(
        &self,
        job_title: &str,
        successful_specs: &[String],
    ) -> Generated<JobCoachingResponse> {
        let prompt = format!(
            "The user is interested in the job \"{job_title}\".\n\
             Successful candidates usually have these specs: {specs}.\n\n\
             1. Provide a short \"encouragement\" message (Korean) saying they can do it.\n\
             2. Provide a \"gapAnalysis\" (Korean) gently explaining how their current latent potential \
             connects to these specs (don't say they lack it, say what to prepare).\n\
             3. Provide a 3-step \"roadmap\" (Korean) of very small micro-steps to get closer to these specs.\n\n\
             Return JSON.",
            specs = successful_specs.join(", ")
        );
        let schema = json!({
            "type": "OBJECT",
            "properties": {
                "encouragement": { "type": "STRING" },
                "gapAnalysis": { "type": "STRING" },
                "roadmap": {
                    "type": "ARRAY",
                    "items": {
                        "type": "OBJECT",
                        "properties": {
                            "step": { "type": "STRING" },
                            "action": { "type": "STRING" }
                        }
                    }
                }
            }
        });

        self.request("coaching", GenerationRequest::new(prompt, schema))
            .map(Generated::model)
            .unwrap_or_else(|_| Generated::fallback(JobCoachingResponse::fallback()))
    }

    /// Run one request and parse its JSON. Failures are logged here.
    fn request<T: DeserializeOwned>(&self, panel: &str, request: GenerationRequest) -> Result<T> {
        let result = self.generator.generate(&request).and_then(|text| {
            if text.trim().is_empty() {
                return Err(Error::generation("No response from model"));
            }
            serde_json::from_str(&text).map_err(Error::from)
        });

        if let Err(e) = &result {
            log::warn!(
                "{} generation via {} failed, using fallback: {}",
                panel,
                self.generator.name(),
                e
            );
        }
        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    use crate::adapters::offline::OfflineGenerator;

    /// Generator that replays one canned reply and records prompts
    struct Scripted {
        reply: String,
        prompts: Mutex<Vec<GenerationRequest>>,
    }

    impl Scripted {
        fn new(reply: &str) -> Arc<Self> {
            Arc::new(Self {
                reply: reply.to_string(),
                prompts: Mutex::new(Vec::new()),
            })
        }
    }

    impl TextGenerator for Scripted {
        fn name(&self) -> &str {
            "scripted"
        }

        fn generate(&self, request: &GenerationRequest) -> Result<String> {
            self.prompts.lock().unwrap().push(request.clone());
            Ok(self.reply.clone())
        }
    }

    fn offline() -> GenerationService {
        GenerationService::new(Arc::new(OfflineGenerator::new()))
    }

    #[test]
    fn test_comfort_from_model() {
        let generator = Scripted::new(r#"{"comfortMessage":"잘하고 있어요","actionItem":"창밖 보기"}"#);
        let service = GenerationService::new(generator.clone());

        let comfort = service.comfort("면접이 무서워요");
        assert_eq!(comfort.source, Source::Model);
        assert_eq!(comfort.value.comfort_message, "잘하고 있어요");

        let prompts = generator.prompts.lock().unwrap();
        assert!(prompts[0].prompt.contains("\"면접이 무서워요\""));
        assert_eq!(prompts[0].response_schema["required"][0], "comfortMessage");
    }

    #[test]
    fn test_comfort_offline_falls_back() {
        let comfort = offline().comfort("걱정");
        assert!(comfort.is_fallback());
        assert_eq!(comfort.into_inner(), ComfortResponse::fallback());
    }

    #[test]
    fn test_malformed_json_falls_back() {
        let service = GenerationService::new(Scripted::new("not json"));
        assert!(service.social_script("전화하기").is_fallback());
        assert!(service.job_coaching("데이터 라벨러", &[]).is_fallback());
    }

    #[test]
    fn test_blank_reply_falls_back() {
        let service = GenerationService::new(Scripted::new("  "));
        assert!(service.comfort("걱정").is_fallback());
    }

    #[test]
    fn test_translation_carries_original_text() {
        let generator = Scripted::new(
            r#"[{"skill":"리더십","description":"길드장"},{"skill":"협업","description":"레이드"}]"#,
        );
        let service = GenerationService::new(generator);

        let result = service.translate_experience("게임 길드장 3년");
        assert_eq!(result.source, Source::Model);
        assert_eq!(result.value.len(), 2);
        assert!(result
            .value
            .iter()
            .all(|t| t.original_text.as_deref() == Some("게임 길드장 3년")));
    }

    #[test]
    fn test_translation_fallback_has_no_original_text() {
        let result = offline().translate_experience("휴식");
        assert!(result.is_fallback());
        assert_eq!(result.value.len(), 1);
        assert_eq!(result.value[0].skill, "잠재력 탐색");
        assert_eq!(result.value[0].original_text, None);
    }

    #[test]
    fn test_coaching_prompt_joins_specs() {
        let generator = Scripted::new(
            r#"{"encouragement":"할 수 있어요","gapAnalysis":"준비해요","roadmap":[{"step":"1","action":"a"}]}"#,
        );
        let service = GenerationService::new(generator.clone());

        let specs = vec!["꼼꼼함".to_string(), "엑셀 기초".to_string()];
        let coaching = service.job_coaching("데이터 라벨러", &specs);
        assert_eq!(coaching.source, Source::Model);
        assert_eq!(coaching.value.roadmap.len(), 1);

        let prompts = generator.prompts.lock().unwrap();
        assert!(prompts[0].prompt.contains("꼼꼼함, 엑셀 기초"));
    }

    #[test]
    fn test_job_buffs_are_static() {
        let buffs = offline().job_buffs();
        assert_eq!(buffs.len(), 3);
        assert!(buffs.iter().all(|b| (1..=100).contains(&b.score)));
    }
}
