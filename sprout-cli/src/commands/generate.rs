//! One-shot generation commands: comfort, translate, script

use anyhow::Result;
use colored::Colorize;

use super::{get_context, get_logger, log_event, log_generation};
use crate::output;
use sprout_core::services::logging::events;
use sprout_core::services::{ExperienceTranslator, SocialScriptPanel, Source, WorryShredder};
use sprout_core::LogEvent;

pub fn comfort(worry: &str, json: bool) -> Result<()> {
    let ctx = get_context()?;
    let logger = get_logger();

    let mut shredder = WorryShredder::new();
    shredder.set_draft(worry);

    let spinner = (!json).then(|| output::spinner("걱정을 갈아버리는 중..."));
    let result = shredder.shred(&ctx.generation).cloned();
    if let Some(s) = spinner {
        s.finish_and_clear();
    }

    let Some(result) = result else {
        anyhow::bail!("Write down what is on your mind first");
    };
    log_generation(&logger, &ctx, "worry", &result);
    log_event(&logger, LogEvent::new(events::WORRY_SHREDDED).with_command("comfort"));

    if json {
        println!("{}", serde_json::to_string_pretty(&result)?);
        return Ok(());
    }

    println!();
    println!("{}", result.value.comfort_message.bold());
    println!("  {} {}", "작은 한 걸음:".green(), result.value.action_item);
    output::source_note(result.source);
    Ok(())
}

pub fn translate(experience: &str, json: bool) -> Result<()> {
    let ctx = get_context()?;
    let logger = get_logger();

    let mut translator = ExperienceTranslator::new();
    translator.set_input(experience);

    let spinner = (!json).then(|| output::spinner("경험을 번역하는 중..."));
    let translated = translator.translate(&ctx.generation);
    if let Some(s) = spinner {
        s.finish_and_clear();
    }

    if !translated {
        anyhow::bail!("Describe an experience to translate");
    }
    let results = translator.results();
    let source = translator.source().unwrap_or(Source::Fallback);
    if source == Source::Fallback {
        log_event(
            &logger,
            LogEvent::new(events::AI_FALLBACK)
                .with_panel("translate")
                .with_generator(ctx.generation.generator_name()),
        );
    }

    if json {
        println!("{}", serde_json::to_string_pretty(results)?);
        return Ok(());
    }

    let mut table = output::create_table();
    table.set_header(vec!["Skill", "Description"]);
    for item in results {
        table.add_row(vec![item.skill.clone(), item.description.clone()]);
    }
    println!("{}", table);
    output::source_note(source);
    Ok(())
}

pub fn script(situation: &str, json: bool) -> Result<()> {
    let ctx = get_context()?;
    let logger = get_logger();

    let mut panel = SocialScriptPanel::new();
    panel.set_situation(situation);

    let spinner = (!json).then(|| output::spinner("대본을 쓰는 중..."));
    let response = panel.generate(&ctx.generation).cloned();
    if let Some(s) = spinner {
        s.finish_and_clear();
    }

    let Some(response) = response else {
        anyhow::bail!("Describe the situation first");
    };
    log_generation(&logger, &ctx, "script", &response);
    log_event(&logger, LogEvent::new(events::COMMAND_EXECUTED).with_command("script"));

    if json {
        println!("{}", serde_json::to_string_pretty(&response)?);
        return Ok(());
    }

    println!();
    println!("{}", "대본".bold());
    println!("  {}", response.value.script);
    println!("{} {}", "팁:".cyan(), response.value.tips);
    output::source_note(response.source);
    Ok(())
}
