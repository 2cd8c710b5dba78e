//! Garden - growth stage and the reward box

use std::time::Duration;

use rand::seq::SliceRandom;
use rand::Rng;
use serde::Serialize;

use crate::domain::reward::REWARDS;
use crate::domain::{GrowthStage, Reward};

/// How long the box shakes before revealing a reward
pub const BOX_OPENING: Duration = Duration::from_millis(1500);

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "state", content = "reward", rename_all = "lowercase")]
pub enum BoxState {
    Closed,
    Opening,
    Revealed(Reward),
}

#[derive(Debug, Clone)]
pub struct RewardBox {
    state: BoxState,
}

impl Default for RewardBox {
    fn default() -> Self {
        Self::new()
    }
}

impl RewardBox {
    pub fn new() -> Self {
        Self {
            state: BoxState::Closed,
        }
    }

    pub fn state(&self) -> &BoxState {
        &self.state
    }

    pub fn is_opening(&self) -> bool {
        self.state == BoxState::Opening
    }

    /// Start shaking the box. Ignored while it is already opening.
    pub fn begin_open(&mut self) -> bool {
        if self.is_opening() {
            return false;
        }
        self.state = BoxState::Opening;
        true
    }

    /// Reveal a random reward from the catalog
    pub fn reveal<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Option<Reward> {
        if !self.is_opening() {
            return None;
        }
        let reward = REWARDS.choose(rng)?.clone();
        self.state = BoxState::Revealed(reward.clone());
        Some(reward)
    }

    /// Open the box, wait out the animation and reveal.
    ///
    /// Returns `None` if the box was already opening.
    pub async fn open<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Option<Reward> {
        if !self.begin_open() {
            return None;
        }
        tokio::time::sleep(BOX_OPENING).await;
        self.reveal(rng)
    }

    /// Dismiss the reward modal
    pub fn close(&mut self) {
        if !self.is_opening() {
            self.state = BoxState::Closed;
        }
    }
}

/// What the garden shows for a level
pub fn garden_stage(level: u32) -> GrowthStage {
    GrowthStage::for_level(level)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_open_is_ignored_while_opening() {
        let mut reward_box = RewardBox::new();
        assert!(reward_box.begin_open());
        assert!(!reward_box.begin_open());
    }

    #[test]
    fn test_reveal_requires_opening() {
        let mut rng = StdRng::seed_from_u64(7);
        let mut reward_box = RewardBox::new();
        assert_eq!(reward_box.reveal(&mut rng), None);

        reward_box.begin_open();
        let reward = reward_box.reveal(&mut rng).unwrap();
        assert!(REWARDS.iter().any(|r| r.id == reward.id));
        assert_eq!(reward_box.state(), &BoxState::Revealed(reward));

        reward_box.close();
        assert_eq!(reward_box.state(), &BoxState::Closed);
    }

    #[tokio::test(start_paused = true)]
    async fn test_open_waits_for_animation() {
        let mut rng = StdRng::seed_from_u64(1);
        let mut reward_box = RewardBox::new();

        let started = tokio::time::Instant::now();
        let reward = reward_box.open(&mut rng).await;

        assert!(reward.is_some());
        assert_eq!(started.elapsed(), BOX_OPENING);
    }

    #[test]
    fn test_garden_stage_follows_level() {
        assert_eq!(garden_stage(1), GrowthStage::Sprout);
        assert_eq!(garden_stage(2), GrowthStage::Sapling);
        assert_eq!(garden_stage(10), GrowthStage::Tree);
    }
}
