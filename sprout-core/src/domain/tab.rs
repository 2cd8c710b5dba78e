//! Dashboard tabs

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Tab {
    #[default]
    Home,
    Growth,
    Jobs,
    Connect,
    Garden,
}

impl Tab {
    pub const ALL: [Tab; 5] = [Tab::Home, Tab::Growth, Tab::Jobs, Tab::Connect, Tab::Garden];

    /// Header title; the home tab greets the user by name
    pub fn title(&self, name: &str) -> String {
        match self {
            Tab::Home => format!("안녕, {}", name),
            Tab::Growth => "성장 연구소".to_string(),
            Tab::Jobs => "가능성 탐험".to_string(),
            Tab::Connect => "느슨한 연대".to_string(),
            Tab::Garden => "나의 정원".to_string(),
        }
    }

    pub fn subtitle(&self) -> &'static str {
        match self {
            Tab::Home => "오늘도 조금씩 자라나고 있어요",
            Tab::Growth => "당신의 경험은 버려지지 않아요",
            Tab::Jobs => "선배들의 길을 따라가보세요",
            Tab::Connect => "혼자가 아니에요",
            Tab::Garden => "매일 조금씩 자라나는 나무",
        }
    }
}
