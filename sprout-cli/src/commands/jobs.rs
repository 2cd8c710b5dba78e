//! Jobs command - postings, coaching and possibility buffs

use anyhow::Result;
use clap::Subcommand;
use colored::Colorize;

use super::{get_context, get_logger, log_event, log_generation};
use crate::output;
use sprout_core::domain::Difficulty;
use sprout_core::services::logging::events;
use sprout_core::services::{JobBoard, JobPossibility};
use sprout_core::LogEvent;

#[derive(Subcommand)]
pub enum JobsCommands {
    /// List job postings
    List {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
    /// Get coaching for a posting
    Coach {
        /// Posting id (e.g. j1)
        id: String,
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
    /// Show strengths found while resting, and micro jobs
    Buffs {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
}

fn difficulty_label(difficulty: Difficulty) -> colored::ColoredString {
    match difficulty {
        Difficulty::Easy => "Easy".green(),
        Difficulty::Medium => "Medium".yellow(),
        Difficulty::Hard => "Hard".red(),
    }
}

pub fn run(command: JobsCommands) -> Result<()> {
    match command {
        JobsCommands::List { json } => {
            let board = JobBoard::new();
            if json {
                println!("{}", serde_json::to_string_pretty(board.postings())?);
                return Ok(());
            }

            let mut table = output::create_table();
            table.set_header(vec!["ID", "Title", "Company", "Difficulty", "Tags"]);
            for posting in board.postings() {
                table.add_row(vec![
                    posting.id.clone(),
                    posting.title.clone(),
                    posting.company.clone(),
                    difficulty_label(posting.difficulty).to_string(),
                    posting.tags.join(", "),
                ]);
            }
            println!("{}", table);
        }
        JobsCommands::Coach { id, json } => {
            let ctx = get_context()?;
            let logger = get_logger();
            let mut board = JobBoard::new();

            let spinner = (!json).then(|| output::spinner("선배들의 길을 살펴보는 중..."));
            let coaching = board.select(&id, &ctx.generation).cloned();
            if let Some(s) = spinner {
                s.finish_and_clear();
            }
            let coaching = coaching?;
            log_generation(&logger, &ctx, "coaching", &coaching);
            log_event(&logger, LogEvent::new(events::JOB_COACHED).with_command("jobs coach"));

            if json {
                println!("{}", serde_json::to_string_pretty(&coaching)?);
                return Ok(());
            }

            if let Some(posting) = board.selected() {
                println!("{} · {}", posting.title.bold(), posting.company);
                let specs = &posting.successful_specs;
                println!("  {} {}", specs.category.dimmed(), specs.items.join(", "));
                println!("  {}", specs.description.dimmed());
                println!();
            }

            let advice = &coaching.value;
            output::success(&advice.encouragement);
            println!("{}", advice.gap_analysis);
            println!();
            for step in &advice.roadmap {
                println!("  {} {}", step.step.cyan(), step.action);
            }
            output::source_note(coaching.source);
        }
        JobsCommands::Buffs { json } => {
            let ctx = get_context()?;
            let view = JobPossibility::load(&ctx.generation);

            if json {
                println!(
                    "{}",
                    serde_json::to_string_pretty(&serde_json::json!({
                        "buffs": view.buffs,
                        "microJobs": view.micro_jobs,
                    }))?
                );
                return Ok(());
            }

            let mut table = output::create_table();
            table.set_header(vec!["Buff", "Score", "Description"]);
            for buff in &view.buffs {
                table.add_row(vec![
                    buff.name.clone(),
                    format!("{} {}", output::meter(buff.score as u32, 10), buff.score),
                    buff.description.clone(),
                ]);
            }
            println!("{}", table);
            println!("{} {}", "마이크로 잡:".cyan(), view.micro_jobs.join(" · "));
        }
    }
    Ok(())
}
