//! Camera port - video acquisition for the sunlight check-in

use async_trait::async_trait;

use crate::domain::result::Result;

/// Which physical camera to prefer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FacingMode {
    /// Rear camera, pointed at the window
    Environment,
    /// Front camera
    User,
}

/// Constraints passed when requesting a stream
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VideoConstraints {
    pub facing_mode: FacingMode,
    pub ideal_width: u32,
    pub ideal_height: u32,
}

impl Default for VideoConstraints {
    fn default() -> Self {
        Self {
            facing_mode: FacingMode::Environment,
            ideal_width: 640,
            ideal_height: 480,
        }
    }
}

/// A decoded video frame in RGBA order, 4 bytes per pixel
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Frame {
    pub width: u32,
    pub height: u32,
    pub rgba: Vec<u8>,
}

impl Frame {
    /// Frame with every pixel set to the same colour
    pub fn solid(width: u32, height: u32, rgb: [u8; 3]) -> Self {
        let pixels = (width as usize) * (height as usize);
        let mut rgba = Vec::with_capacity(pixels * 4);
        for _ in 0..pixels {
            rgba.extend_from_slice(&[rgb[0], rgb[1], rgb[2], 255]);
        }
        Self { width, height, rgba }
    }
}

/// A live video stream
///
/// The stream holds the camera until `stop` is called.
pub trait VideoStream: Send {
    /// Whether enough data has arrived to read a frame
    fn is_ready(&self) -> bool;

    /// Grab the current frame, or `None` while the video is not ready.
    /// Reading also advances a warming-up stream.
    fn read_frame(&mut self) -> Option<Frame>;

    /// Release the underlying device
    fn stop(&mut self);

    fn is_stopped(&self) -> bool;
}

/// Permission-gated camera device
#[async_trait]
pub trait CameraDevice: Send + Sync {
    /// Request a stream matching the constraints
    ///
    /// Fails with `Error::Camera` when permission is denied or no device
    /// is available.
    async fn open(&self, constraints: &VideoConstraints) -> Result<Box<dyn VideoStream>>;
}
