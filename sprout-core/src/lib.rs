//! Sprout Core - state machines and AI service layer for a wellness garden
//!
//! This crate follows hexagonal architecture:
//!
//! - **domain**: Session entities and their rules (UserState, Quest, BingoBoard, ...)
//! - **ports**: Traits for external collaborators (TextGenerator, CameraDevice)
//! - **services**: Panels, timers, the dashboard and the generation wrapper
//! - **adapters**: Concrete implementations (Gemini, offline, synthetic camera)
//!
//! Nothing here persists user state; a session lives in memory only.

pub mod adapters;
pub mod config;
pub mod domain;
pub mod log_migrations;
pub mod ports;
pub mod services;

use std::path::Path;
use std::sync::Arc;

use anyhow::Result;

use adapters::gemini::GeminiClient;
use adapters::offline::OfflineGenerator;
use config::Config;
use ports::TextGenerator;
use services::GenerationService;

pub use domain::result::Error;
pub use domain::{Mood, Tab, UserState};
pub use services::{Dashboard, EntryPoint, LogEvent, LoggingService};

/// Main context for a Sprout session
///
/// Holds the configuration and the generation service every AI panel
/// shares.
pub struct SproutContext {
    pub config: Config,
    pub generation: GenerationService,
}

impl SproutContext {
    /// Build a context from `<sprout_dir>/settings.json` and the environment.
    ///
    /// Uses Gemini when an API key is set and offline mode is off;
    /// otherwise every panel gets its fallback.
    pub fn new(sprout_dir: &Path) -> Result<Self> {
        let config = Config::load(sprout_dir)?;

        let generator: Arc<dyn TextGenerator> = match config.api_key() {
            Some(key) if !config.is_offline() => Arc::new(GeminiClient::new(key, &config.ai_model)?),
            _ => {
                log::debug!("No API key or offline mode; using fallbacks");
                Arc::new(OfflineGenerator::new())
            }
        };

        Ok(Self::with_generator(config, generator))
    }

    /// Context with an explicit generator
    pub fn with_generator(config: Config, generator: Arc<dyn TextGenerator>) -> Self {
        Self {
            config,
            generation: GenerationService::new(generator),
        }
    }
}
