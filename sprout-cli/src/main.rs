//! Sprout CLI - a small wellness garden in your terminal

use std::process::ExitCode;

use anyhow::Result;
use clap::{Parser, Subcommand};

mod commands;
mod output;

use commands::{config, focus, garden, generate, jobs, logs, play, sunlight};

/// Sprout - grow a little every day, at your own pace
#[derive(Parser)]
#[command(name = "sprout", version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Start an interactive session: onboarding, then the dashboard
    Play,

    /// Shred a worry and get a comforting message
    Comfort {
        /// What is on your mind
        worry: String,
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Translate an everyday experience into resume skills
    Translate {
        /// Gaming, fandom, resting...
        experience: String,
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Get a script for a social situation
    Script {
        /// The situation, e.g. "병원 예약 전화"
        situation: String,
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Browse job postings and get coaching
    Jobs {
        #[command(subcommand)]
        command: jobs::JobsCommands,
    },

    /// Run the focus lock timer
    Focus {
        /// Minutes to focus (defaults to settings)
        #[arg(long)]
        minutes: Option<u32>,
    },

    /// Sunlight check-in against the synthetic camera
    Sunlight {
        /// Brightness levels the camera plays back
        #[arg(long, value_delimiter = ',', default_value = "40,90,130")]
        levels: Vec<u8>,
        /// Simulate a denied camera permission
        #[arg(long)]
        deny: bool,
        /// Give up after this many seconds
        #[arg(long, default_value = "30")]
        timeout: u64,
    },

    /// Visit the garden
    Garden {
        #[command(subcommand)]
        command: garden::GardenCommands,
    },

    /// View or change settings
    Config {
        #[command(subcommand)]
        command: config::ConfigCommands,
    },

    /// View and manage the event log
    Logs {
        #[command(subcommand)]
        command: logs::LogsCommands,
    },
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            output::error(&format!("{:#}", e));
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<()> {
    match cli.command {
        Commands::Play => play::run(),
        Commands::Comfort { worry, json } => generate::comfort(&worry, json),
        Commands::Translate { experience, json } => generate::translate(&experience, json),
        Commands::Script { situation, json } => generate::script(&situation, json),
        Commands::Jobs { command } => jobs::run(command),
        Commands::Focus { minutes } => focus::run(minutes),
        Commands::Sunlight { levels, deny, timeout } => sunlight::run(levels, deny, timeout),
        Commands::Garden { command } => garden::run(command),
        Commands::Config { command } => config::run(command),
        Commands::Logs { command } => logs::run(command),
    }
}
