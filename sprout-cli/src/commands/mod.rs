//! CLI command implementations

pub mod config;
pub mod focus;
pub mod garden;
pub mod generate;
pub mod jobs;
pub mod logs;
pub mod play;
pub mod sunlight;

use std::path::PathBuf;

use anyhow::{Context, Result};
use sprout_core::services::Generated;
use sprout_core::{EntryPoint, LogEvent, LoggingService, SproutContext};

/// Get the logging service for CLI operations
///
/// Returns None if logging fails to initialize (shouldn't block operations)
pub fn get_logger() -> Option<LoggingService> {
    let sprout_dir = get_sprout_dir().ok()?;
    std::fs::create_dir_all(&sprout_dir).ok()?;
    match LoggingService::new(&sprout_dir, EntryPoint::Cli, env!("CARGO_PKG_VERSION")) {
        Ok(logger) => Some(logger),
        Err(e) => {
            log::debug!("Event log unavailable: {:#}", e);
            None
        }
    }
}

/// Log an event, ignoring any errors (logging should never break the app)
pub fn log_event(logger: &Option<LoggingService>, event: LogEvent) {
    if let Some(l) = logger {
        let _ = l.log(event);
    }
}

/// Log a fallback if generation did not reach the model
pub fn log_generation<T>(
    logger: &Option<LoggingService>,
    ctx: &SproutContext,
    panel: &str,
    generated: &Generated<T>,
) {
    if generated.is_fallback() {
        log_event(
            logger,
            LogEvent::new(sprout_core::services::logging::events::AI_FALLBACK)
                .with_panel(panel)
                .with_generator(ctx.generation.generator_name()),
        );
    }
}

/// `$SPROUT_DIR`, or `~/.sprout`
pub fn get_sprout_dir() -> Result<PathBuf> {
    if let Ok(dir) = std::env::var("SPROUT_DIR") {
        return Ok(PathBuf::from(dir));
    }
    let home = dirs::home_dir().context("Could not find home directory; set SPROUT_DIR")?;
    Ok(home.join(".sprout"))
}

/// Build the session context, creating the sprout directory if needed
pub fn get_context() -> Result<SproutContext> {
    let sprout_dir = get_sprout_dir()?;
    std::fs::create_dir_all(&sprout_dir)
        .with_context(|| format!("Failed to create sprout directory: {:?}", sprout_dir))?;
    SproutContext::new(&sprout_dir)
}

/// Single-threaded runtime for timer and camera loops.
///
/// Generation calls use a blocking HTTP client and must stay outside
/// `block_on`.
pub fn runtime() -> Result<tokio::runtime::Runtime> {
    tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .context("Failed to start async runtime")
}
