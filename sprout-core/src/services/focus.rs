//! Focus lock - a single Pomodoro countdown
//!
//! Counts down once per second while active. Leaving early takes two steps
//! (request, then confirm) and resets the clock.

use std::time::Duration;

use serde::Serialize;
use tokio::time::{interval_at, Instant, MissedTickBehavior};

pub const DEFAULT_FOCUS_MINUTES: u32 = 25;

const TICK: Duration = Duration::from_secs(1);

/// Result of one tick
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FocusTick {
    Idle,
    Running(u32),
    /// Reached zero on this tick
    Finished,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FocusTimer {
    duration_secs: u32,
    remaining_secs: u32,
    active: bool,
    confirming_quit: bool,
}

impl Default for FocusTimer {
    fn default() -> Self {
        Self::new(DEFAULT_FOCUS_MINUTES)
    }
}

impl FocusTimer {
    /// Timer for `minutes` (at least one)
    pub fn new(minutes: u32) -> Self {
        let duration_secs = minutes.max(1).saturating_mul(60);
        Self {
            duration_secs,
            remaining_secs: duration_secs,
            active: false,
            confirming_quit: false,
        }
    }

    pub fn duration_secs(&self) -> u32 {
        self.duration_secs
    }

    pub fn remaining_secs(&self) -> u32 {
        self.remaining_secs
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    pub fn is_confirming_quit(&self) -> bool {
        self.confirming_quit
    }

    /// Start the lock. A finished timer starts over from the full duration.
    pub fn start(&mut self) {
        if self.remaining_secs == 0 {
            self.remaining_secs = self.duration_secs;
        }
        self.active = true;
        self.confirming_quit = false;
    }

    pub fn tick(&mut self) -> FocusTick {
        if !self.active {
            return FocusTick::Idle;
        }

        self.remaining_secs = self.remaining_secs.saturating_sub(1);
        if self.remaining_secs == 0 {
            self.active = false;
            self.confirming_quit = false;
            return FocusTick::Finished;
        }
        FocusTick::Running(self.remaining_secs)
    }

    /// Ask to leave early; needs `confirm_quit` to take effect
    pub fn request_quit(&mut self) -> bool {
        if self.active {
            self.confirming_quit = true;
        }
        self.confirming_quit
    }

    /// Keep going
    pub fn cancel_quit(&mut self) {
        self.confirming_quit = false;
    }

    /// Leave early. Returns false without a pending quit request.
    pub fn confirm_quit(&mut self) -> bool {
        if !self.confirming_quit {
            return false;
        }
        self.active = false;
        self.confirming_quit = false;
        self.remaining_secs = self.duration_secs;
        true
    }

    /// Remaining time as `m:ss`
    pub fn display(&self) -> String {
        format_clock(self.remaining_secs)
    }

    pub fn status_line(&self) -> String {
        if self.active {
            "다른 앱은 잠시 잊고, 지금 이 순간에만 집중해요.".to_string()
        } else {
            format!("딱 {}분만 몰입해볼까요?", self.duration_secs / 60)
        }
    }

    /// Tick once per second until the timer stops.
    ///
    /// `on_tick` sees the remaining seconds after each tick. Returns true if
    /// the countdown reached zero. Dropping the future pauses the timer
    /// where it is; it stays active.
    pub async fn run<F: FnMut(u32)>(&mut self, mut on_tick: F) -> bool {
        let mut ticker = interval_at(Instant::now() + TICK, TICK);
        ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);

        while self.active {
            ticker.tick().await;
            match self.tick() {
                FocusTick::Running(left) => on_tick(left),
                FocusTick::Finished => {
                    on_tick(0);
                    return true;
                }
                FocusTick::Idle => break,
            }
        }
        false
    }
}

/// `m:ss` with minutes unpadded
pub fn format_clock(seconds: u32) -> String {
    format!("{}:{:02}", seconds / 60, seconds % 60)
}
