//! Sunlight check-in - camera brightness sampling loop
//!
//! After a camera stream is acquired, frames are sampled on a fixed
//! interval to estimate ambient brightness. Crossing the threshold ends the
//! activation: the stream is released and the completion callback runs once.
//!
//! State machine:
//!
//! ```text
//! Inactive -> Requesting -> Failed
//!                        -> Streaming --sample--> Streaming (below threshold)
//!                                     --sample--> Completed (stream released)
//! close() from any state -> Inactive (stream released)
//! ```

use std::time::Duration;

use serde::Serialize;
use tokio::time::{interval_at, Instant, MissedTickBehavior};

use crate::ports::{CameraDevice, VideoConstraints, VideoStream};

/// Every Nth byte of the RGBA buffer starts a sample
pub const SAMPLE_STRIDE: usize = 40;

/// Scores strictly above this count as sunlight
pub const DEFAULT_THRESHOLD: u8 = 100;

pub const DEFAULT_SAMPLE_INTERVAL: Duration = Duration::from_millis(500);

pub const STATUS_AWAITING_PERMISSION: &str = "카메라 권한을 허용해주세요";
pub const STATUS_STREAMING: &str = "아침 햇살을 비춰주세요";
pub const STATUS_CAMERA_FAILED: &str = "카메라를 켤 수 없어요. 설정을 확인해주세요.";

/// Average luminance proxy of an RGBA buffer, 0..=255.
///
/// Takes the three colour bytes at every `SAMPLE_STRIDE`th offset, floors
/// their mean, then floors the mean over all samples. An empty buffer is 0.
pub fn brightness_score(rgba: &[u8]) -> u8 {
    let mut sum: u64 = 0;
    let mut samples: u64 = 0;

    for offset in (0..rgba.len()).step_by(SAMPLE_STRIDE) {
        let Some(rgb) = rgba.get(offset..offset + 3) else {
            break;
        };
        let avg = (rgb[0] as u32 + rgb[1] as u32 + rgb[2] as u32) / 3;
        sum += avg as u64;
        samples += 1;
    }

    if samples == 0 {
        return 0;
    }
    (sum / samples) as u8
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum CheckInState {
    Inactive,
    Requesting,
    Failed,
    Streaming,
    Completed,
}

/// Result of one sampling tick
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SampleOutcome {
    /// Not streaming, nothing sampled
    Idle,
    /// Video not ready yet, frame skipped
    NotReady,
    Below(u8),
    /// Threshold crossed; reported once per activation
    Completed(u8),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CheckInSettings {
    pub threshold: u8,
    pub sample_interval: Duration,
    pub constraints: VideoConstraints,
}

impl Default for CheckInSettings {
    fn default() -> Self {
        Self {
            threshold: DEFAULT_THRESHOLD,
            sample_interval: DEFAULT_SAMPLE_INTERVAL,
            constraints: VideoConstraints::default(),
        }
    }
}

/// Sunlight check-in panel
pub struct SunlightCheckIn<C: CameraDevice> {
    camera: C,
    settings: CheckInSettings,
    state: CheckInState,
    stream: Option<Box<dyn VideoStream>>,
    brightness: u8,
    status: &'static str,
}

impl<C: CameraDevice> SunlightCheckIn<C> {
    pub fn new(camera: C, settings: CheckInSettings) -> Self {
        Self {
            camera,
            settings,
            state: CheckInState::Inactive,
            stream: None,
            brightness: 0,
            status: STATUS_AWAITING_PERMISSION,
        }
    }

    pub fn state(&self) -> CheckInState {
        self.state
    }

    /// Latest brightness score
    pub fn brightness(&self) -> u8 {
        self.brightness
    }

    pub fn status_message(&self) -> &'static str {
        self.status
    }

    pub fn is_active(&self) -> bool {
        matches!(self.state, CheckInState::Requesting | CheckInState::Streaming)
    }

    pub fn camera(&self) -> &C {
        &self.camera
    }

    /// Request the camera and start streaming.
    ///
    /// On failure the panel shows a fixed message and stays inactive.
    pub async fn activate(&mut self) -> CheckInState {
        if self.is_active() {
            return self.state;
        }

        self.state = CheckInState::Requesting;
        self.brightness = 0;

        match self.camera.open(&self.settings.constraints).await {
            Ok(stream) => {
                // A close() may not interleave here: we hold &mut self
                self.stream = Some(stream);
                self.state = CheckInState::Streaming;
                self.status = STATUS_STREAMING;
            }
            Err(e) => {
                log::warn!("Camera access denied or failed: {}", e);
                self.state = CheckInState::Failed;
                self.status = STATUS_CAMERA_FAILED;
            }
        }

        self.state
    }

    /// Take one brightness sample
    pub fn sample(&mut self) -> SampleOutcome {
        if self.state != CheckInState::Streaming {
            return SampleOutcome::Idle;
        }
        let Some(stream) = self.stream.as_mut() else {
            return SampleOutcome::Idle;
        };
        let Some(frame) = stream.read_frame() else {
            return SampleOutcome::NotReady;
        };

        let score = brightness_score(&frame.rgba);
        self.brightness = score;

        if score > self.settings.threshold {
            self.release_stream();
            self.state = CheckInState::Completed;
            return SampleOutcome::Completed(score);
        }
        SampleOutcome::Below(score)
    }

    /// Manual close; releases the camera
    pub fn close(&mut self) {
        self.release_stream();
        self.state = CheckInState::Inactive;
    }

    /// Sample on the configured interval until the threshold is crossed.
    ///
    /// `on_progress` sees every measured score; `on_complete` runs exactly
    /// once if this activation completes. Returns immediately unless the
    /// panel is streaming. The first sample happens one interval after the
    /// call, like a browser `setInterval`.
    pub async fn run<P, F>(&mut self, mut on_progress: P, on_complete: F) -> CheckInState
    where
        P: FnMut(u8),
        F: FnOnce(u8),
    {
        let period = self.settings.sample_interval;
        let mut ticker = interval_at(Instant::now() + period, period);
        ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);

        while self.state == CheckInState::Streaming {
            ticker.tick().await;
            match self.sample() {
                SampleOutcome::Below(score) => on_progress(score),
                SampleOutcome::Completed(score) => {
                    on_progress(score);
                    on_complete(score);
                    break;
                }
                SampleOutcome::NotReady | SampleOutcome::Idle => {}
            }
        }

        self.state
    }

    fn release_stream(&mut self) {
        if let Some(mut stream) = self.stream.take() {
            stream.stop();
        }
    }
}

impl<C: CameraDevice> Drop for SunlightCheckIn<C> {
    fn drop(&mut self) {
        self.release_stream();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::synthetic_camera::SyntheticCamera;

    fn settings() -> CheckInSettings {
        CheckInSettings {
            constraints: VideoConstraints {
                ideal_width: 20,
                ideal_height: 10,
                ..VideoConstraints::default()
            },
            ..CheckInSettings::default()
        }
    }

    #[test]
    fn test_score_of_empty_buffer_is_zero() {
        assert_eq!(brightness_score(&[]), 0);
        assert_eq!(brightness_score(&[255, 255]), 0);
    }

    #[test]
    fn test_score_uses_strided_samples() {
        // Sample offsets 0 and 40; everything in between is ignored
        let mut rgba = vec![0u8; 80];
        rgba[0..3].copy_from_slice(&[30, 60, 90]);
        rgba[40..43].copy_from_slice(&[250, 250, 250]);
        rgba[4..8].copy_from_slice(&[255, 255, 255, 255]);
        assert_eq!(brightness_score(&rgba), 155);
    }

    #[test]
    fn test_score_floors_per_sample() {
        // (1 + 1 + 0) / 3 floors to 0
        assert_eq!(brightness_score(&[1, 1, 0, 255]), 0);
    }

    #[test]
    fn test_score_stays_in_byte_range() {
        let rgba = vec![255u8; 44];
        assert_eq!(brightness_score(&rgba), 255);
    }

    #[tokio::test]
    async fn test_activate_streams() {
        let mut panel = SunlightCheckIn::new(SyntheticCamera::new(vec![20]), settings());
        assert_eq!(panel.status_message(), STATUS_AWAITING_PERMISSION);

        assert_eq!(panel.activate().await, CheckInState::Streaming);
        assert_eq!(panel.status_message(), STATUS_STREAMING);
        assert_eq!(panel.camera().open_streams(), 1);
    }

    #[tokio::test]
    async fn test_denied_camera_sets_message() {
        let mut panel = SunlightCheckIn::new(SyntheticCamera::denied(), settings());
        assert_eq!(panel.activate().await, CheckInState::Failed);
        assert_eq!(panel.status_message(), STATUS_CAMERA_FAILED);
        assert!(!panel.is_active());
        assert_eq!(panel.sample(), SampleOutcome::Idle);
    }

    #[tokio::test]
    async fn test_completion_releases_stream_once() {
        let mut panel = SunlightCheckIn::new(SyntheticCamera::new(vec![50, 101, 200]), settings());
        panel.activate().await;

        assert_eq!(panel.sample(), SampleOutcome::Below(50));
        assert_eq!(panel.sample(), SampleOutcome::Completed(101));
        assert_eq!(panel.state(), CheckInState::Completed);
        assert_eq!(panel.camera().open_streams(), 0);
        assert_eq!(panel.sample(), SampleOutcome::Idle);
    }

    #[tokio::test]
    async fn test_threshold_is_strict() {
        let mut panel = SunlightCheckIn::new(SyntheticCamera::new(vec![100]), settings());
        panel.activate().await;
        assert_eq!(panel.sample(), SampleOutcome::Below(100));
    }

    #[tokio::test]
    async fn test_not_ready_frames_are_skipped() {
        let mut panel =
            SunlightCheckIn::new(SyntheticCamera::new(vec![150]).with_warmup(2), settings());
        panel.activate().await;

        assert_eq!(panel.sample(), SampleOutcome::NotReady);
        assert_eq!(panel.sample(), SampleOutcome::NotReady);
        assert_eq!(panel.brightness(), 0);
        assert_eq!(panel.sample(), SampleOutcome::Completed(150));
    }

    #[tokio::test]
    async fn test_close_releases_stream() {
        let mut panel = SunlightCheckIn::new(SyntheticCamera::new(vec![20]), settings());
        panel.activate().await;
        panel.close();

        assert_eq!(panel.state(), CheckInState::Inactive);
        assert_eq!(panel.camera().open_streams(), 0);
    }

    #[tokio::test(start_paused = true)]
    async fn test_run_fires_completion_once() {
        let mut panel =
            SunlightCheckIn::new(SyntheticCamera::new(vec![10, 40, 90, 180]), settings());
        panel.activate().await;

        let mut seen = Vec::new();
        let mut completions = 0;
        let started = Instant::now();
        let state = panel
            .run(|score| seen.push(score), |_| completions += 1)
            .await;

        assert_eq!(state, CheckInState::Completed);
        assert_eq!(completions, 1);
        assert_eq!(seen, vec![10, 40, 90, 180]);
        assert_eq!(started.elapsed(), DEFAULT_SAMPLE_INTERVAL * 4);

        // Running again after completion is a no-op
        panel.run(|_| {}, |_| completions += 1).await;
        assert_eq!(completions, 1);
    }
}
