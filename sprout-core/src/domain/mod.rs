//! Core domain entities
//!
//! All session entities are defined here. These are pure data structures
//! with their state rules - no I/O or external dependencies.

pub mod bingo;
pub mod coaching;
pub mod community;
pub mod job;
mod quest;
pub mod result;
pub mod reward;
mod tab;
mod transient;
mod user;

pub use bingo::{BingoBoard, BingoCell, BingoToggle};
pub use coaching::{
    ComfortResponse, ExperienceTranslation, JobCoachingResponse, RoadmapStep,
    SocialScriptResponse,
};
pub use community::{Comment, CommunityPost, FailurePost};
pub use job::{Difficulty, JobBuff, JobPosting, SuccessfulSpecs};
pub use quest::{starter_quests, Quest, QuestCategory};
pub use reward::{GrowthStage, Reward, RewardEffect};
pub use tab::Tab;
pub use transient::Transient;
pub use user::{Mood, UserState};
