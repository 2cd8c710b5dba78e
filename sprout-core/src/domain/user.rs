//! User state and mood

use serde::{Deserialize, Serialize};

/// Experience points shown per visual progress cycle
pub const XP_PER_VISUAL_LEVEL: u32 = 100;

/// How the user feels today ("mind weather")
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Mood {
    Good,
    #[default]
    Neutral,
    Low,
    Anxious,
}

impl Mood {
    pub const ALL: [Mood; 4] = [Mood::Good, Mood::Neutral, Mood::Low, Mood::Anxious];

    /// Weather label shown in the mood picker
    pub fn label(&self) -> &'static str {
        match self {
            Mood::Good => "맑음",
            Mood::Neutral => "보통",
            Mood::Low => "흐림",
            Mood::Anxious => "불안",
        }
    }

    pub fn icon(&self) -> &'static str {
        match self {
            Mood::Good => "☀️",
            Mood::Neutral => "☁️",
            Mood::Low => "🌧️",
            Mood::Anxious => "⛈️",
        }
    }
}

/// Global gamification state owned by the dashboard
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserState {
    pub name: String,
    pub is_onboarded: bool,
    pub level: u32,
    pub exp: u32,
    pub streak: u32,
    pub current_mood: Mood,
    pub coins: u32,
    pub sunlight_collected: bool,
    pub bingo_completed: bool,
    /// Today's garden box has paid out
    #[serde(default)]
    pub reward_claimed: bool,
}

impl UserState {
    /// Fresh state for a user who just finished onboarding
    pub fn new(name: impl Into<String>, mood: Mood) -> Self {
        Self {
            name: name.into(),
            is_onboarded: true,
            level: 1,
            exp: 0,
            streak: 0,
            current_mood: mood,
            coins: 0,
            sunlight_collected: false,
            bingo_completed: false,
            reward_claimed: false,
        }
    }

    /// Fill of the progress bar, 0..100.
    ///
    /// Wraps every 100 XP regardless of how levels are actually earned.
    pub fn progress_percent(&self) -> u32 {
        (self.exp % XP_PER_VISUAL_LEVEL).min(100)
    }

    pub fn add_exp(&mut self, amount: u32) {
        self.exp = self.exp.saturating_add(amount);
    }

    pub fn add_coins(&mut self, amount: u32) {
        self.coins = self.coins.saturating_add(amount);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_user_defaults() {
        let user = UserState::new("새싹", Mood::Low);
        assert!(user.is_onboarded);
        assert_eq!(user.level, 1);
        assert_eq!(user.exp, 0);
        assert_eq!(user.coins, 0);
        assert_eq!(user.current_mood, Mood::Low);
        assert!(!user.sunlight_collected);
        assert!(!user.bingo_completed);
        assert!(!user.reward_claimed);
    }

    #[test]
    fn test_progress_wraps_every_hundred() {
        let mut user = UserState::new("a", Mood::Good);
        user.add_exp(35);
        assert_eq!(user.progress_percent(), 35);
        user.add_exp(65);
        assert_eq!(user.progress_percent(), 0);
        user.add_exp(230);
        assert_eq!(user.progress_percent(), 30);
    }

    #[test]
    fn test_serializes_camel_case() {
        let user = UserState::new("a", Mood::Anxious);
        let json = serde_json::to_value(&user).unwrap();
        assert_eq!(json["isOnboarded"], true);
        assert_eq!(json["currentMood"], "Anxious");
        assert_eq!(json["sunlightCollected"], false);
    }
}
