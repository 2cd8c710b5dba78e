//! Micro-quest domain model

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum QuestCategory {
    Health,
    Growth,
    Social,
}

/// A small, low-effort task that awards fixed experience
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Quest {
    pub id: String,
    pub title: String,
    pub description: String,
    pub xp: u32,
    pub is_completed: bool,
    pub category: QuestCategory,
}

impl Quest {
    pub fn new(
        id: impl Into<String>,
        title: impl Into<String>,
        description: impl Into<String>,
        xp: u32,
        category: QuestCategory,
    ) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            description: description.into(),
            xp,
            is_completed: false,
            category,
        }
    }

    /// Mark the quest done.
    ///
    /// Returns the XP to award, or `None` if it was already completed.
    /// Completion is one-way.
    pub fn complete(&mut self) -> Option<u32> {
        if self.is_completed {
            return None;
        }
        self.is_completed = true;
        Some(self.xp)
    }
}

/// Quests every new session starts with
pub fn starter_quests() -> Vec<Quest> {
    vec![
        Quest::new("1", "물 한 잔 마시기", "가장 쉬운 시작", 10, QuestCategory::Health),
        Quest::new("2", "창문 5cm 열기", "바깥 공기와 인사하기", 15, QuestCategory::Health),
        Quest::new("3", "기지개 펴기", "몸 깨우기", 10, QuestCategory::Health),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_complete_once() {
        let mut quest = Quest::new("q", "t", "d", 15, QuestCategory::Growth);
        assert_eq!(quest.complete(), Some(15));
        assert!(quest.is_completed);
        assert_eq!(quest.complete(), None);
    }

    #[test]
    fn test_starter_quests() {
        let quests = starter_quests();
        assert_eq!(quests.len(), 3);
        assert_eq!(quests.iter().map(|q| q.xp).sum::<u32>(), 35);
        assert!(quests.iter().all(|q| !q.is_completed));
    }
}
