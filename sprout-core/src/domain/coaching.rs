//! Response types produced by the text generation service
//!
//! Field names follow the JSON schemas sent with each prompt (camelCase).
//! Each type knows its canned fallback, used whenever generation fails.

use serde::{Deserialize, Serialize};

/// Comfort for a shredded worry
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ComfortResponse {
    pub comfort_message: String,
    pub action_item: String,
}

impl ComfortResponse {
    pub fn fallback() -> Self {
        Self {
            comfort_message: "괜찮아요, 이 감정도 곧 지나갈 거예요.".to_string(),
            action_item: "따뜻한 물 한 잔 마시기".to_string(),
        }
    }
}

/// An everyday experience reframed as a resume skill
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExperienceTranslation {
    pub skill: String,
    pub description: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub original_text: Option<String>,
}

impl ExperienceTranslation {
    pub fn fallback() -> Vec<Self> {
        vec![Self {
            skill: "잠재력 탐색".to_string(),
            description: "충분한 휴식을 통해 다음 도약을 준비했습니다.".to_string(),
            original_text: None,
        }]
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SocialScriptResponse {
    pub script: String,
    pub tips: String,
}

impl SocialScriptResponse {
    pub fn fallback() -> Self {
        Self {
            script: "안녕하세요, 문의드릴 게 있어서 전화드렸습니다.".to_string(),
            tips: "말하기 전에 심호흡을 한 번 크게 해보세요.".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoadmapStep {
    pub step: String,
    pub action: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JobCoachingResponse {
    pub encouragement: String,
    /// Gentle explanation of what to prepare, never what is lacking
    pub gap_analysis: String,
    pub roadmap: Vec<RoadmapStep>,
}

impl JobCoachingResponse {
    pub fn fallback() -> Self {
        let roadmap = [
            ("Step 1", "관련 분야 유튜브 영상 1개 보기"),
            ("Step 2", "하루 10분 관련 기사 읽기"),
            ("Step 3", "자신만의 강점 3가지 적어보기"),
        ]
        .into_iter()
        .map(|(step, action)| RoadmapStep {
            step: step.to_string(),
            action: action.to_string(),
        })
        .collect();

        Self {
            encouragement: "당신은 이미 충분한 가능성을 가지고 있어요.".to_string(),
            gap_analysis: "이 직무는 꼼꼼함이 중요해요. 당신의 섬세함이 큰 무기가 될 거예요."
                .to_string(),
            roadmap,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_comfort_parses_camel_case() {
        let parsed: ComfortResponse =
            serde_json::from_str(r#"{"comfortMessage":"숨 쉬어요","actionItem":"물 마시기"}"#)
                .unwrap();
        assert_eq!(parsed.comfort_message, "숨 쉬어요");
        assert_eq!(parsed.action_item, "물 마시기");
    }

    #[test]
    fn test_translation_without_original_text() {
        let parsed: Vec<ExperienceTranslation> =
            serde_json::from_str(r#"[{"skill":"리더십","description":"길드를 이끌었어요"}]"#)
                .unwrap();
        assert_eq!(parsed[0].original_text, None);
    }

    #[test]
    fn test_coaching_fallback_has_three_steps() {
        let fallback = JobCoachingResponse::fallback();
        assert_eq!(fallback.roadmap.len(), 3);
        assert_eq!(fallback.roadmap[0].step, "Step 1");
    }
}
