//! Small nudges: voice warm-up and posture reminders

use std::time::Duration;

use rand::seq::SliceRandom;
use rand::Rng;

pub const AFFIRMATIONS: [&str; 3] = [
    "나는 오늘 나만의 속도로 걷고 있다.",
    "실수해도 괜찮아, 다시 하면 되니까.",
    "나의 목소리에는 힘이 있다.",
];

pub const VOICE_FEEDBACK: &str =
    "목소리 톤이 아주 차분하고 듣기 좋아요! 끝음을 조금 더 분명하게 맺어볼까요?";

pub const RECORDING_TIME: Duration = Duration::from_secs(2);

pub const POSTURE_MESSAGE: &str = "어깨가 조금 굽은 것 같아요! 기지개 쭈욱~";
pub const POSTURE_CHECK_INTERVAL: Duration = Duration::from_secs(30);
pub const POSTURE_MESSAGE_TTL: Duration = Duration::from_secs(4);
pub const POSTURE_PROBABILITY: f64 = 0.3;

/// Read an affirmation aloud and get gentle feedback
#[derive(Debug, Clone)]
pub struct VoiceWarmup {
    text: &'static str,
    recording: bool,
    feedback: Option<&'static str>,
}

impl VoiceWarmup {
    /// Pick today's affirmation
    pub fn new<R: Rng + ?Sized>(rng: &mut R) -> Self {
        Self {
            text: AFFIRMATIONS.choose(rng).copied().unwrap_or(AFFIRMATIONS[0]),
            recording: false,
            feedback: None,
        }
    }

    pub fn text(&self) -> &'static str {
        self.text
    }

    pub fn is_recording(&self) -> bool {
        self.recording
    }

    pub fn feedback(&self) -> Option<&'static str> {
        self.feedback
    }

    /// Record for a fixed time, then show feedback
    pub async fn record(&mut self) -> &'static str {
        self.recording = true;
        self.feedback = None;
        tokio::time::sleep(RECORDING_TIME).await;
        self.recording = false;
        self.feedback = Some(VOICE_FEEDBACK);
        VOICE_FEEDBACK
    }
}

/// Periodic posture check.
///
/// Each check shows the reminder with a fixed probability. Callers own the
/// interval and pass a random draw in.
#[derive(Debug, Clone, Copy, Default)]
pub struct PostureNudge;

impl PostureNudge {
    pub fn new() -> Self {
        Self
    }

    /// One check; `Some(message)` means show it for `POSTURE_MESSAGE_TTL`
    pub fn check<R: Rng + ?Sized>(&self, rng: &mut R) -> Option<&'static str> {
        rng.gen_bool(POSTURE_PROBABILITY).then_some(POSTURE_MESSAGE)
    }

    /// Run checks every `POSTURE_CHECK_INTERVAL` for `checks` rounds.
    /// `on_nudge` is called with the message each time it shows.
    pub async fn watch<R, F>(&self, rng: &mut R, checks: usize, mut on_nudge: F)
    where
        R: Rng + ?Sized,
        F: FnMut(&'static str),
    {
        let start = tokio::time::Instant::now() + POSTURE_CHECK_INTERVAL;
        let mut ticker = tokio::time::interval_at(start, POSTURE_CHECK_INTERVAL);
        for _ in 0..checks {
            ticker.tick().await;
            if let Some(message) = self.check(rng) {
                on_nudge(message);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_affirmation_from_list() {
        let mut rng = StdRng::seed_from_u64(3);
        let warmup = VoiceWarmup::new(&mut rng);
        assert!(AFFIRMATIONS.contains(&warmup.text()));
        assert!(warmup.feedback().is_none());
    }

    #[tokio::test(start_paused = true)]
    async fn test_recording_takes_two_seconds() {
        let mut rng = StdRng::seed_from_u64(3);
        let mut warmup = VoiceWarmup::new(&mut rng);

        let started = tokio::time::Instant::now();
        let feedback = warmup.record().await;

        assert_eq!(feedback, VOICE_FEEDBACK);
        assert_eq!(started.elapsed(), RECORDING_TIME);
        assert!(!warmup.is_recording());
        assert_eq!(warmup.feedback(), Some(VOICE_FEEDBACK));
    }

    #[test]
    fn test_posture_rate_is_roughly_thirty_percent() {
        let mut rng = StdRng::seed_from_u64(42);
        let nudge = PostureNudge::new();
        let shown = (0..10_000).filter(|_| nudge.check(&mut rng).is_some()).count();
        assert!((2_500..3_500).contains(&shown), "shown {} times", shown);
    }

    #[tokio::test(start_paused = true)]
    async fn test_watch_checks_every_thirty_seconds() {
        let mut rng = StdRng::seed_from_u64(9);
        let started = tokio::time::Instant::now();
        let mut shown = 0;

        PostureNudge::new().watch(&mut rng, 4, |_| shown += 1).await;

        assert_eq!(started.elapsed(), POSTURE_CHECK_INTERVAL * 4);
        assert!(shown <= 4);
    }
}
