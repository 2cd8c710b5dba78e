//! Adapter implementations
//!
//! Adapters implement the port traits with concrete technologies:
//! - Gemini HTTP client for TextGenerator
//! - Offline generator for TextGenerator (always falls back)
//! - Synthetic camera for CameraDevice (terminal front end and tests)

pub mod gemini;
pub mod offline;
pub mod synthetic_camera;

#[cfg(test)]
pub mod gemini_mock;
