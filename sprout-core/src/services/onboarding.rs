//! Onboarding wizard - welcome, name, mood

use serde::Serialize;

use crate::domain::result::{Error, Result};
use crate::domain::{Mood, UserState};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum OnboardingStep {
    Welcome,
    Name,
    Mood,
    Done,
}

#[derive(Debug, Clone, Default)]
pub struct OnboardingWizard {
    step: Option<OnboardingStep>,
    name: String,
    mood: Option<Mood>,
}

impl OnboardingWizard {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn step(&self) -> OnboardingStep {
        self.step.unwrap_or(OnboardingStep::Welcome)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn mood(&self) -> Option<Mood> {
        self.mood
    }

    /// Leave the welcome screen
    pub fn start(&mut self) {
        if self.step() == OnboardingStep::Welcome {
            self.step = Some(OnboardingStep::Name);
        }
    }

    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }

    pub fn can_submit_name(&self) -> bool {
        !self.name.trim().is_empty()
    }

    /// Move from the name step to the mood step
    pub fn submit_name(&mut self) -> Result<()> {
        if self.step() != OnboardingStep::Name {
            return Err(Error::validation("not on the name step"));
        }
        if !self.can_submit_name() {
            return Err(Error::validation("name must not be blank"));
        }
        self.step = Some(OnboardingStep::Mood);
        Ok(())
    }

    pub fn select_mood(&mut self, mood: Mood) {
        self.mood = Some(mood);
    }

    /// Enter the garden with the chosen name and mood
    pub fn finish(&mut self) -> Result<UserState> {
        if self.step() != OnboardingStep::Mood {
            return Err(Error::validation("not on the mood step"));
        }
        let mood = self
            .mood
            .ok_or_else(|| Error::validation("pick today's mood first"))?;

        self.step = Some(OnboardingStep::Done);
        Ok(UserState::new(self.name.clone(), mood))
    }
}
