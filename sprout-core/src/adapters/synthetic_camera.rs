//! Synthetic camera
//!
//! A `CameraDevice` that plays back a list of grey levels as solid frames.
//! The terminal front end uses it in place of real hardware, and tests use
//! it to script brightness ramps, slow warm-up and denied permissions.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::result::{Error, Result};
use crate::ports::{CameraDevice, Frame, VideoConstraints, VideoStream};

/// Frame size used when constraints ask for something absurd
const MAX_SIDE: u32 = 1920;

#[derive(Debug, Clone)]
pub struct SyntheticCamera {
    levels: Vec<u8>,
    warmup_frames: usize,
    deny: bool,
    open_streams: Arc<AtomicUsize>,
}

impl SyntheticCamera {
    /// Camera whose successive frames have the given grey levels.
    /// The last level repeats forever.
    pub fn new(levels: Vec<u8>) -> Self {
        Self {
            levels,
            warmup_frames: 0,
            deny: false,
            open_streams: Arc::new(AtomicUsize::new(0)),
        }
    }

    /// Camera that refuses permission
    pub fn denied() -> Self {
        Self {
            deny: true,
            ..Self::new(Vec::new())
        }
    }

    /// Report "not ready" for the first `frames` reads
    pub fn with_warmup(mut self, frames: usize) -> Self {
        self.warmup_frames = frames;
        self
    }

    /// Streams opened and not yet stopped
    pub fn open_streams(&self) -> usize {
        self.open_streams.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl CameraDevice for SyntheticCamera {
    async fn open(&self, constraints: &VideoConstraints) -> Result<Box<dyn VideoStream>> {
        if self.deny {
            return Err(Error::camera("Permission denied"));
        }

        self.open_streams.fetch_add(1, Ordering::SeqCst);
        Ok(Box::new(SyntheticStream {
            width: constraints.ideal_width.clamp(1, MAX_SIDE),
            height: constraints.ideal_height.clamp(1, MAX_SIDE),
            levels: self.levels.clone(),
            cursor: 0,
            warmup_left: self.warmup_frames,
            stopped: false,
            open_streams: Arc::clone(&self.open_streams),
        }))
    }
}

struct SyntheticStream {
    width: u32,
    height: u32,
    levels: Vec<u8>,
    cursor: usize,
    warmup_left: usize,
    stopped: bool,
    open_streams: Arc<AtomicUsize>,
}

impl VideoStream for SyntheticStream {
    fn is_ready(&self) -> bool {
        !self.is_stopped() && self.warmup_left == 0
    }

    fn read_frame(&mut self) -> Option<Frame> {
        if self.is_stopped() {
            return None;
        }
        if self.warmup_left > 0 {
            self.warmup_left -= 1;
            return None;
        }

        let level = match self.levels.get(self.cursor) {
            Some(level) => *level,
            None => *self.levels.last()?,
        };
        self.cursor += 1;
        Some(Frame::solid(self.width, self.height, [level; 3]))
    }

    fn stop(&mut self) {
        if !self.stopped {
            self.stopped = true;
            self.open_streams.fetch_sub(1, Ordering::SeqCst);
        }
    }

    fn is_stopped(&self) -> bool {
        self.stopped
    }
}

impl Drop for SyntheticStream {
    fn drop(&mut self) {
        self.stop();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_plays_levels_then_repeats_last() {
        let camera = SyntheticCamera::new(vec![10, 200]);
        let mut stream = camera.open(&VideoConstraints::default()).await.unwrap();

        assert_eq!(stream.read_frame().unwrap().rgba[0], 10);
        assert_eq!(stream.read_frame().unwrap().rgba[0], 200);
        assert_eq!(stream.read_frame().unwrap().rgba[0], 200);
    }

    #[tokio::test]
    async fn test_warmup_frames_not_ready() {
        let camera = SyntheticCamera::new(vec![50]).with_warmup(1);
        let mut stream = camera.open(&VideoConstraints::default()).await.unwrap();

        assert!(!stream.is_ready());
        assert!(stream.read_frame().is_none());
        assert!(stream.is_ready());
        assert!(stream.read_frame().is_some());
    }

    #[tokio::test]
    async fn test_stop_releases_once() {
        let camera = SyntheticCamera::new(vec![50]);
        let mut stream = camera.open(&VideoConstraints::default()).await.unwrap();
        assert_eq!(camera.open_streams(), 1);

        stream.stop();
        stream.stop();
        assert_eq!(camera.open_streams(), 0);
        assert!(stream.read_frame().is_none());
    }

    #[tokio::test]
    async fn test_denied() {
        let camera = SyntheticCamera::denied();
        let result = camera.open(&VideoConstraints::default()).await;
        assert!(matches!(result, Err(Error::Camera(_))));
        assert_eq!(camera.open_streams(), 0);
    }
}
