//! Port definitions (hexagonal architecture)
//!
//! Ports define the interfaces for external dependencies. The core state
//! machines depend only on these traits, not on concrete implementations.

mod camera;
mod text_generator;

pub use camera::{CameraDevice, FacingMode, Frame, VideoConstraints, VideoStream};
pub use text_generator::{GenerationRequest, TextGenerator};
