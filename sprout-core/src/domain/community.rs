//! Community feed entries
//!
//! Everything here is ephemeral. Seeded posts are recreated every session.

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

/// Pen name used for everything the user writes
pub const MY_PEN_NAME: &str = "나의부캐";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Comment {
    pub id: u64,
    pub author: String,
    pub text: String,
    pub posted_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CommunityPost {
    pub id: u64,
    pub author: String,
    pub content: String,
    pub likes: u32,
    pub comments: u32,
    pub tag: String,
    pub posted_at: DateTime<Utc>,
    pub is_liked: bool,
    pub comments_list: Vec<Comment>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FailurePost {
    pub id: u64,
    pub content: String,
    pub cheers: u32,
    pub is_mine: bool,
}

/// Korean relative time label ("방금 전", "10분 전", ...)
pub fn relative_label(posted_at: DateTime<Utc>, now: DateTime<Utc>) -> String {
    let elapsed = now.signed_duration_since(posted_at);
    if elapsed < Duration::minutes(1) {
        "방금 전".to_string()
    } else if elapsed < Duration::hours(1) {
        format!("{}분 전", elapsed.num_minutes())
    } else if elapsed < Duration::days(1) {
        format!("{}시간 전", elapsed.num_hours())
    } else {
        format!("{}일 전", elapsed.num_days())
    }
}

fn comment(id: u64, author: &str, text: &str, posted_at: DateTime<Utc>) -> Comment {
    Comment {
        id,
        author: author.to_string(),
        text: text.to_string(),
        posted_at,
    }
}

fn post(
    id: u64,
    author: &str,
    content: &str,
    likes: u32,
    tag: &str,
    posted_at: DateTime<Utc>,
    comments_list: Vec<Comment>,
) -> CommunityPost {
    CommunityPost {
        id,
        author: author.to_string(),
        content: content.to_string(),
        likes,
        comments: comments_list.len() as u32,
        tag: tag.to_string(),
        posted_at,
        is_liked: false,
        comments_list,
    }
}

/// Mock posts shown before the user writes anything
pub fn seed_posts(now: DateTime<Utc>) -> Vec<CommunityPost> {
    vec![
        post(
            1,
            "느린거북이",
            "오늘 처음으로 카페에 가서 주문했어요. 별 거 아닌데 손이 떨렸지만 해냈습니다!",
            45,
            "성공일기",
            now - Duration::minutes(10),
            vec![
                comment(101, "응원요정", "와 정말 대단해요! 시작이 반이죠.", now - Duration::minutes(5)),
                comment(102, "지나가던행인", "저도 내일 도전해봐야겠어요.", now - Duration::minutes(1)),
            ],
        ),
        post(
            2,
            "구름이",
            "다들 무기력할 때 어떻게 극복하시나요? 저는 그냥 하루종일 잤어요 ㅠㅠ",
            23,
            "고민나눔",
            now - Duration::hours(1),
            vec![comment(
                201,
                "햇살한스푼",
                "잠도 훌륭한 휴식이에요. 자책하지 마세요!",
                now - Duration::minutes(30),
            )],
        ),
        post(
            3,
            "햇살한스푼",
            "면접 떨어졌지만 맛있는 떡볶이 먹고 기분 풀기로 했습니다. 다들 화이팅!",
            67,
            "응원해요",
            now - Duration::hours(3),
            Vec::new(),
        ),
    ]
}

/// Mock exhibits for the museum of failure
pub fn seed_failures() -> Vec<FailurePost> {
    [
        (1, "오늘도 알람 듣고 다시 잤다. 12시에 일어남...", 12),
        (2, "면접 보러 가다가 너무 무서워서 돌아옴", 24),
        (3, "운동 등록하고 3일째 안 가는 중", 5),
    ]
    .into_iter()
    .map(|(id, content, cheers)| FailurePost {
        id,
        content: content.to_string(),
        cheers,
        is_mine: false,
    })
    .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_relative_labels() {
        let now = Utc::now();
        assert_eq!(relative_label(now - Duration::seconds(10), now), "방금 전");
        assert_eq!(relative_label(now - Duration::minutes(10), now), "10분 전");
        assert_eq!(relative_label(now - Duration::hours(3), now), "3시간 전");
        assert_eq!(relative_label(now - Duration::days(2), now), "2일 전");
    }

    #[test]
    fn test_seed_comment_counts_match_lists() {
        let posts = seed_posts(Utc::now());
        assert_eq!(posts.len(), 3);
        for p in &posts {
            assert_eq!(p.comments as usize, p.comments_list.len());
        }
    }
}
