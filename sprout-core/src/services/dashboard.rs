//! Dashboard shell - owns the session's gamification state
//!
//! Panels report completions here; the dashboard applies the reward rules
//! and drives the short-lived overlays. Time-based UI (level-up overlay,
//! mentor confirmation, posture reminder) takes `now` explicitly and is
//! cleared by `refresh`.

use std::time::{Duration, Instant};

use crate::domain::result::{Error, Result};
use crate::domain::{
    starter_quests, BingoBoard, BingoToggle, ComfortResponse, Mood, Quest, Reward, RewardEffect,
    Tab, Transient, UserState,
};
use crate::services::generation::{GenerationService, Generated};
use crate::services::growth::{WorryShredder, WORRY_XP};
use crate::services::nudge::{POSTURE_MESSAGE, POSTURE_MESSAGE_TTL};

pub const SUNLIGHT_XP: u32 = 50;
pub const BINGO_XP: u32 = 200;

pub const LEVEL_UP_OVERLAY: Duration = Duration::from_secs(3);
pub const MENTOR_SENT_CONFIRMATION: Duration = Duration::from_secs(2);

pub const LOW_MOOD_GREETING: &str = "오늘은 무리하지 말고, 아주 작은 것 하나만 해볼까요?";

/// Question box for the community mentor
#[derive(Debug, Clone)]
pub struct MentorModal {
    open: bool,
    question: String,
    sent: Transient,
}

impl Default for MentorModal {
    fn default() -> Self {
        Self {
            open: false,
            question: String::new(),
            sent: Transient::new(MENTOR_SENT_CONFIRMATION),
        }
    }
}

impl MentorModal {
    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn question(&self) -> &str {
        &self.question
    }

    pub fn is_sent(&self, now: Instant) -> bool {
        self.sent.is_visible(now)
    }
}

#[derive(Debug, Clone)]
pub struct Dashboard {
    user: UserState,
    quests: Vec<Quest>,
    bingo: BingoBoard,
    tab: Tab,
    sos: bool,
    mentor: MentorModal,
    level_up: Transient,
    posture: Transient,
    worry: WorryShredder,
}

impl Dashboard {
    pub fn new(user: UserState) -> Self {
        Self {
            user: UserState {
                bingo_completed: false,
                ..user
            },
            quests: starter_quests(),
            bingo: BingoBoard::new(),
            tab: Tab::default(),
            sos: false,
            mentor: MentorModal::default(),
            level_up: Transient::new(LEVEL_UP_OVERLAY),
            posture: Transient::new(POSTURE_MESSAGE_TTL),
            worry: WorryShredder::new(),
        }
    }

    pub fn user(&self) -> &UserState {
        &self.user
    }

    pub fn quests(&self) -> &[Quest] {
        &self.quests
    }

    pub fn bingo(&self) -> &BingoBoard {
        &self.bingo
    }

    pub fn worry(&self) -> &WorryShredder {
        &self.worry
    }

    pub fn worry_mut(&mut self) -> &mut WorryShredder {
        &mut self.worry
    }

    // Tabs

    pub fn tab(&self) -> Tab {
        self.tab
    }

    pub fn switch_tab(&mut self, tab: Tab) {
        self.tab = tab;
    }

    pub fn title(&self) -> String {
        self.tab.title(&self.user.name)
    }

    pub fn subtitle(&self) -> &'static str {
        self.tab.subtitle()
    }

    /// Extra line on the home tab for a rough day
    pub fn mood_greeting(&self) -> Option<&'static str> {
        (self.tab == Tab::Home && self.user.current_mood == Mood::Low).then_some(LOW_MOOD_GREETING)
    }

    // SOS

    pub fn is_sos(&self) -> bool {
        self.sos
    }

    pub fn enter_sos(&mut self) {
        self.sos = true;
    }

    pub fn exit_sos(&mut self) {
        self.sos = false;
    }

    // Rewards

    /// Complete a quest. Returns the XP awarded, `None` if it was done.
    pub fn complete_quest(&mut self, id: &str) -> Result<Option<u32>> {
        let quest = self
            .quests
            .iter_mut()
            .find(|q| q.id == id)
            .ok_or_else(|| Error::not_found(format!("quest {}", id)))?;

        let awarded = quest.complete();
        if let Some(xp) = awarded {
            self.user.add_exp(xp);
        }
        Ok(awarded)
    }

    /// Sunlight check-in finished. Only the first one counts.
    pub fn collect_sunlight(&mut self) -> bool {
        if self.user.sunlight_collected {
            return false;
        }
        self.user.sunlight_collected = true;
        self.user.add_exp(SUNLIGHT_XP);
        true
    }

    /// Shred the drafted worry and award XP for it.
    ///
    /// A blank draft is a no-op. Every other submission earns XP, even
    /// when the comfort message is the fallback.
    pub fn shred_worry(&mut self, generation: &GenerationService) -> Option<Generated<ComfortResponse>> {
        let result = self.worry.shred(generation)?.clone();
        self.user.add_exp(WORRY_XP);
        Some(result)
    }

    /// Toggle a bingo cell; a full board pays out once and shows the
    /// level-up overlay.
    pub fn toggle_bingo(&mut self, id: u8, now: Instant) -> Result<BingoToggle> {
        let outcome = self.bingo.toggle(id)?;
        if outcome == BingoToggle::BoardCompleted && !self.user.bingo_completed {
            self.user.bingo_completed = true;
            self.user.level += 1;
            self.user.add_exp(BINGO_XP);
            self.level_up.show(now);
        }
        Ok(outcome)
    }

    pub fn is_level_up_visible(&self, now: Instant) -> bool {
        self.level_up.is_visible(now)
    }

    /// Apply a reward from the garden box.
    ///
    /// Only the first claim pays; later boxes return `None` and change
    /// nothing.
    pub fn claim_reward(&mut self, reward: &Reward) -> Option<RewardEffect> {
        if self.user.reward_claimed {
            return None;
        }
        self.user.reward_claimed = true;
        match reward.effect {
            RewardEffect::Exp(amount) => self.user.add_exp(amount),
            RewardEffect::Coins(amount) => self.user.add_coins(amount),
            RewardEffect::Seeds(_) | RewardEffect::RaffleTicket => {}
        }
        Some(reward.effect)
    }

    // Posture reminder

    /// Show the posture reminder for `POSTURE_MESSAGE_TTL`
    pub fn show_posture_nudge(&mut self, now: Instant) {
        self.posture.show(now);
    }

    pub fn posture_nudge(&self, now: Instant) -> Option<&'static str> {
        self.posture.is_visible(now).then_some(POSTURE_MESSAGE)
    }

    // Mentor question

    pub fn mentor(&self) -> &MentorModal {
        &self.mentor
    }

    pub fn open_mentor(&mut self) {
        self.mentor.open = true;
    }

    pub fn close_mentor(&mut self) {
        self.mentor.open = false;
    }

    pub fn set_mentor_question(&mut self, text: impl Into<String>) {
        self.mentor.question = text.into();
    }

    /// Send the question. Blank questions are ignored.
    pub fn submit_mentor_question(&mut self, now: Instant) -> bool {
        if !self.mentor.open || self.mentor.question.trim().is_empty() {
            return false;
        }
        self.mentor.sent.show(now);
        true
    }

    /// Expire overlays whose time is up
    pub fn refresh(&mut self, now: Instant) {
        self.level_up.expire(now);
        self.posture.expire(now);
        if self.mentor.sent.expire(now) {
            self.mentor.open = false;
            self.mentor.question.clear();
        }
    }
}
