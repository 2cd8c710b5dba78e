//! Config command - view and change settings.json

use anyhow::{bail, Result};
use clap::Subcommand;
use colored::Colorize;

use super::get_sprout_dir;
use crate::output;
use sprout_core::config::{Config, API_KEY_VARS, OFFLINE_VAR};

#[derive(Subcommand)]
pub enum ConfigCommands {
    /// Show the current settings
    Show {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
    /// Set the text generation model
    Model {
        /// Model name, e.g. gemini-2.5-flash
        name: String,
    },
    /// Turn offline mode on or off
    Offline {
        /// "on" or "off"
        state: String,
    },
    /// Set the focus timer length
    Focus {
        /// Minutes per session
        minutes: u32,
    },
    /// Set the sunlight brightness threshold (0-254)
    Threshold {
        /// A score above this completes the check-in
        value: u8,
    },
}

pub fn run(command: ConfigCommands) -> Result<()> {
    let sprout_dir = get_sprout_dir()?;
    std::fs::create_dir_all(&sprout_dir)?;
    let mut config = Config::load(&sprout_dir)?;

    match command {
        ConfigCommands::Show { json } => {
            if json {
                println!(
                    "{}",
                    serde_json::to_string_pretty(&serde_json::json!({
                        "model": config.ai_model,
                        "offline": config.is_offline(),
                        "offline_saved": config.offline,
                        "api_key_set": config.api_key().is_some(),
                        "uses_model": config.uses_model(),
                        "focus_minutes": config.focus_minutes,
                        "sunlight_threshold": config.sunlight_threshold,
                        "sample_interval_ms": config.sample_interval_ms,
                        "settings_path": sprout_dir.join("settings.json"),
                    }))?
                );
                return Ok(());
            }

            println!("{}", "Settings".bold());
            println!("  Model: {}", config.ai_model);
            match config.offline_override() {
                Some(state) => println!(
                    "  Offline: {} (from {}, saved: {})",
                    state, OFFLINE_VAR, config.offline
                ),
                None => println!("  Offline: {}", config.offline),
            }
            println!(
                "  API key: {}",
                if config.api_key().is_some() {
                    "set".green()
                } else {
                    "not set".yellow()
                }
            );
            println!("  Focus: {} min", config.focus_minutes);
            println!(
                "  Sunlight: threshold {}, every {} ms",
                config.sunlight_threshold, config.sample_interval_ms
            );
            println!("  File: {}", sprout_dir.join("settings.json").display());

            if !config.uses_model() {
                println!();
                output::info(&format!(
                    "Using built-in messages. Set one of {} for AI replies.",
                    API_KEY_VARS.join(", ")
                ));
            }
            return Ok(());
        }
        ConfigCommands::Model { name } => {
            if name.trim().is_empty() {
                bail!("Model name cannot be empty");
            }
            config.ai_model = name.trim().to_string();
        }
        ConfigCommands::Offline { state } => {
            config.offline = match state.to_lowercase().as_str() {
                "on" | "true" => true,
                "off" | "false" => false,
                other => bail!("Expected \"on\" or \"off\", got \"{}\"", other),
            };
        }
        ConfigCommands::Focus { minutes } => {
            if minutes == 0 {
                bail!("Focus length must be at least one minute");
            }
            config.focus_minutes = minutes;
        }
        ConfigCommands::Threshold { value } => {
            if value == u8::MAX {
                bail!("No score can exceed 255; pick 254 or lower");
            }
            config.sunlight_threshold = value;
        }
    }

    config.save(&sprout_dir)?;
    output::success("Settings saved");
    Ok(())
}
