//! Job board postings and "buffs"

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
}

/// What people who got the job tended to have
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SuccessfulSpecs {
    pub category: String,
    pub items: Vec<String>,
    /// Qualitative note about successful candidates
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JobPosting {
    pub id: String,
    pub title: String,
    pub company: String,
    pub tags: Vec<String>,
    pub difficulty: Difficulty,
    pub successful_specs: SuccessfulSpecs,
}

/// A latent strength, scored for display only
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct JobBuff {
    pub name: String,
    pub score: u8,
    pub description: String,
}

/// Low-pressure side jobs suggested next to the buffs
pub const MICRO_JOBS: [&str; 4] = ["데이터 라벨링", "단순 타이핑", "펫 시터", "리뷰 작성"];

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

pub fn mock_jobs() -> Vec<JobPosting> {
    vec![
        JobPosting {
            id: "j1".to_string(),
            title: "데이터 라벨링 에디터".to_string(),
            company: "AI 퓨처스".to_string(),
            tags: strings(&["재택", "비대면", "초보가능"]),
            difficulty: Difficulty::Easy,
            successful_specs: SuccessfulSpecs {
                category: "꼼꼼함 & 성실함".to_string(),
                items: strings(&["컴퓨터활용능력 2급", "블로그 운영 경험", "타자 500타 이상"]),
                description: "합격한 선배들은 화려한 스펙보다는 \"꾸준히 무언가를 기록해본 경험\"을 높게 평가받았어요.".to_string(),
            },
        },
        JobPosting {
            id: "j2".to_string(),
            title: "커뮤니티 모니터링 요원".to_string(),
            company: "세이프 넷".to_string(),
            tags: strings(&["유연근무", "텍스트기반"]),
            difficulty: Difficulty::Easy,
            successful_specs: SuccessfulSpecs {
                category: "센스 & 문해력".to_string(),
                items: strings(&["SNS 헤비 유저", "온라인 게임 길드장 경험", "CS 응대 아르바이트"]),
                description: "합격 선배들은 온라인 밈과 문화에 익숙하고, 상황 판단이 빠른 분들이 많았어요.".to_string(),
            },
        },
        JobPosting {
            id: "j3".to_string(),
            title: "초급 콘텐츠 디자이너".to_string(),
            company: "스타트업 콩".to_string(),
            tags: strings(&["포트폴리오", "창의성"]),
            difficulty: Difficulty::Medium,
            successful_specs: SuccessfulSpecs {
                category: "도구 활용 & 감각".to_string(),
                items: strings(&["GTQ 1급", "인스타그램 부계정 운영", "미리캔버스 활용 가능"]),
                description: "자격증보다는 실제로 내 취향을 담아 무언가를 만들어본 \"작은 포트폴리오\"가 핵심이었어요.".to_string(),
            },
        },
    ]
}

/// Strengths everyone who rested a while can claim
pub fn resting_buffs() -> Vec<JobBuff> {
    [
        ("회복 탄력성", 95, "긴 휴식을 통해 번아웃을 예방할 줄 아는 능력"),
        ("깊은 몰입", 88, "좋아하는 것에 깊게 파고드는 집중력"),
        ("디지털 문해력", 92, "다양한 온라인 정보를 빠르게 습득하는 능력"),
    ]
    .into_iter()
    .map(|(name, score, description)| JobBuff {
        name: name.to_string(),
        score,
        description: description.to_string(),
    })
    .collect()
}
