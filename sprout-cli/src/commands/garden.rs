//! Garden command - the reward box and the catalog behind it

use anyhow::Result;
use clap::Subcommand;
use colored::Colorize;

use super::{get_logger, log_event, runtime};
use crate::output;
use sprout_core::domain::reward::REWARDS;
use sprout_core::domain::{Reward, RewardEffect};
use sprout_core::services::logging::events;
use sprout_core::services::RewardBox;
use sprout_core::{LogEvent, LoggingService};

#[derive(Subcommand)]
pub enum GardenCommands {
    /// Open today's mystery box
    Open {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
    /// List what the box can hold
    Rewards {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
}

pub fn run(command: GardenCommands) -> Result<()> {
    match command {
        GardenCommands::Open { json } => {
            let logger = get_logger();
            let Some(reward) = open_box(&logger, !json)? else {
                output::warning("상자를 열 수 없어요.");
                return Ok(());
            };

            if json {
                println!("{}", serde_json::to_string_pretty(&reward)?);
            } else {
                print_reward(&reward);
            }
        }
        GardenCommands::Rewards { json } => {
            if json {
                println!("{}", serde_json::to_string_pretty(&REWARDS)?);
                return Ok(());
            }

            let mut table = output::create_table();
            table.set_header(vec!["ID", "보상", "설명"]);
            for reward in &REWARDS {
                table.add_row(vec![reward.id, reward.name, reward.description]);
            }
            println!("{}", table);
        }
    }
    Ok(())
}

/// Shake the box for the opening animation, then reveal a reward
pub fn open_box(logger: &Option<LoggingService>, animate: bool) -> Result<Option<Reward>> {
    let spinner = animate.then(|| output::spinner("상자가 흔들리고 있어요..."));

    let mut reward_box = RewardBox::new();
    let reward = runtime()?.block_on(reward_box.open(&mut rand::thread_rng()));

    if let Some(spinner) = spinner {
        spinner.finish_and_clear();
    }
    if let Some(reward) = &reward {
        log_event(
            logger,
            LogEvent::new(events::REWARD_CLAIMED).with_panel("garden"),
        );
    }
    Ok(reward)
}

pub fn print_reward(reward: &Reward) {
    println!("{} {}", "축하해요!".green().bold(), reward.name.bold());
    println!("  {}", reward.description.dimmed());
    match reward.effect {
        RewardEffect::Exp(amount) => println!("  경험치 +{}", amount),
        RewardEffect::Coins(amount) => println!("  코인 +{}", amount),
        RewardEffect::Seeds(amount) => println!("  씨앗 {}개", amount),
        RewardEffect::RaffleTicket => println!("  응모권 1장"),
    }
}
