//! Garden rewards and growth stages

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "amount", rename_all = "camelCase")]
pub enum RewardEffect {
    Seeds(u32),
    Exp(u32),
    RaffleTicket,
    Coins(u32),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Reward {
    pub id: &'static str,
    pub name: &'static str,
    pub description: &'static str,
    pub effect: RewardEffect,
}

pub const REWARDS: [Reward; 4] = [
    Reward {
        id: "r1",
        name: "신비한 씨앗 50개",
        description: "정원을 더 풍성하게 만들 수 있어요.",
        effect: RewardEffect::Seeds(50),
    },
    Reward {
        id: "r2",
        name: "경험치 +100 XP",
        description: "성장이 더 빨라집니다!",
        effect: RewardEffect::Exp(100),
    },
    Reward {
        id: "r3",
        name: "커피 기프티콘 응모권",
        description: "당첨 확률이 올라갔어요!",
        effect: RewardEffect::RaffleTicket,
    },
    Reward {
        id: "r4",
        name: "보너스 코인 500G",
        description: "상점에서 아이템을 구매하세요.",
        effect: RewardEffect::Coins(500),
    },
];

/// How big the garden tree has grown
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GrowthStage {
    Sprout,
    Sapling,
    Tree,
}

impl GrowthStage {
    pub fn for_level(level: u32) -> Self {
        if level < 2 {
            GrowthStage::Sprout
        } else if level < 10 {
            GrowthStage::Sapling
        } else {
            GrowthStage::Tree
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            GrowthStage::Sprout => "새싹",
            GrowthStage::Sapling => "묘목",
            GrowthStage::Tree => "큰 나무",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_growth_stage_boundaries() {
        assert_eq!(GrowthStage::for_level(1), GrowthStage::Sprout);
        assert_eq!(GrowthStage::for_level(2), GrowthStage::Sapling);
        assert_eq!(GrowthStage::for_level(9), GrowthStage::Sapling);
        assert_eq!(GrowthStage::for_level(10), GrowthStage::Tree);
    }
}
