//! Focus command - the focus lock with a progress bar

use anyhow::Result;
use colored::Colorize;
use dialoguer::Confirm;

use super::{get_context, get_logger, log_event, runtime};
use crate::output;
use sprout_core::services::focus::format_clock;
use sprout_core::services::logging::events;
use sprout_core::services::FocusTimer;
use sprout_core::LogEvent;

pub fn run(minutes: Option<u32>) -> Result<()> {
    let ctx = get_context()?;
    let logger = get_logger();

    let mut timer = FocusTimer::new(minutes.unwrap_or(ctx.config.focus_minutes));
    println!("{}", "디지털 족쇄 (집중 모드)".bold());
    println!("{}", timer.status_line().dimmed());

    run_timer(&mut timer, &logger)
}

/// Start the timer and drive it until it finishes or the user confirms quitting.
/// Ctrl-C asks for confirmation instead of exiting.
pub fn run_timer(
    timer: &mut FocusTimer,
    logger: &Option<sprout_core::LoggingService>,
) -> Result<()> {
    timer.start();
    println!("{}", timer.status_line().dimmed());

    let total = timer.duration_secs() as u64;
    let bar = output::progress(total, "{msg} [{bar:30.magenta}]")?;
    bar.set_message(timer.display());
    bar.set_position(total - timer.remaining_secs() as u64);

    let rt = runtime()?;
    let finished = rt.block_on(async {
        loop {
            tokio::select! {
                finished = timer.run(|left| {
                    bar.set_position(total - left as u64);
                    bar.set_message(format_clock(left));
                }) => break Ok::<bool, anyhow::Error>(finished),
                signal = tokio::signal::ctrl_c() => {
                    signal?;
                    timer.request_quit();
                    let quit = bar.suspend(|| {
                        Confirm::new()
                            .with_prompt("정말 그만두시겠어요? 조금만 더 버텨봐요!")
                            .default(false)
                            .interact()
                    })?;
                    if quit && timer.confirm_quit() {
                        break Ok(false);
                    }
                    timer.cancel_quit();
                }
            }
        }
    })?;

    if finished {
        bar.finish_with_message(format_clock(0));
        log_event(logger, LogEvent::new(events::FOCUS_FINISHED).with_command("focus"));
        output::success("집중 완료! 스스로를 칭찬해주세요.");
    } else {
        bar.abandon_with_message(timer.display());
        log_event(logger, LogEvent::new(events::FOCUS_QUIT).with_command("focus"));
        output::info("괜찮아요. 다음에 다시 도전해요.");
    }
    Ok(())
}
