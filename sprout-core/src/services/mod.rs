//! Service layer - panels, timers and the generation wrapper
//!
//! Services own the session's state machines and talk to the outside
//! world only through the port traits.

pub mod community;
pub mod dashboard;
pub mod focus;
pub mod garden;
pub mod generation;
pub mod growth;
pub mod jobs;
pub mod logging;
pub mod nudge;
mod onboarding;
pub mod sunlight;

pub use community::{CommunityBoard, FailureMuseum};
pub use dashboard::{Dashboard, MentorModal};
pub use focus::{FocusTick, FocusTimer};
pub use garden::{BoxState, RewardBox};
pub use generation::{Generated, GenerationService, Source};
pub use growth::{ExperienceTranslator, SocialScriptPanel, WorryShredder};
pub use jobs::{JobBoard, JobPossibility};
pub use logging::{EntryPoint, EventCount, LogEntry, LogEvent, LoggingService};
pub use nudge::{PostureNudge, VoiceWarmup};
pub use onboarding::{OnboardingStep, OnboardingWizard};
pub use sunlight::{CheckInSettings, CheckInState, SampleOutcome, SunlightCheckIn};
