//! Sunlight command - morning check-in against a camera

use std::time::Duration;

use anyhow::Result;
use colored::Colorize;

use super::{get_context, get_logger, log_event, runtime};
use crate::output;
use sprout_core::adapters::synthetic_camera::SyntheticCamera;
use sprout_core::services::logging::events;
use sprout_core::services::{CheckInSettings, CheckInState, SunlightCheckIn};
use sprout_core::{LogEvent, LoggingService};

pub fn run(levels: Vec<u8>, deny: bool, timeout: u64) -> Result<()> {
    let ctx = get_context()?;
    let logger = get_logger();

    let camera = if deny {
        SyntheticCamera::denied()
    } else {
        SyntheticCamera::new(levels)
    };

    match check_in(camera, ctx.config.check_in_settings(), timeout, &logger)? {
        Some(score) => {
            output::success(&format!("햇살 충전 완료! (밝기 {})", score));
            output::info("경험치 +50 은 대시보드에서 하루 한 번 받을 수 있어요.");
        }
        None => output::warning("오늘은 햇살을 찾지 못했어요. 창가로 가서 다시 해봐요."),
    }
    Ok(())
}

/// Stream until the brightness crosses the threshold or `timeout_secs`
/// passes. Returns the winning score, if any.
pub fn check_in(
    camera: SyntheticCamera,
    settings: CheckInSettings,
    timeout_secs: u64,
    logger: &Option<LoggingService>,
) -> Result<Option<u8>> {
    let threshold = settings.threshold;
    let mut panel = SunlightCheckIn::new(camera, settings);
    println!("{}", "햇살 체크인".bold());

    let rt = runtime()?;
    let completed = rt.block_on(async {
        println!("{}", panel.status_message().dimmed());
        if panel.activate().await == CheckInState::Failed {
            output::error(panel.status_message());
            log_event(
                logger,
                LogEvent::new(events::CAMERA_FAILED)
                    .with_panel("sunlight")
                    .with_error(panel.status_message()),
            );
            return Ok::<_, anyhow::Error>(None);
        }
        println!("{}", panel.status_message().yellow());

        let bar = output::progress(255, "밝기 {pos:>3}/255 [{bar:30.yellow}] {msg}")?;
        bar.set_message(format!("목표 {} 초과", threshold));

        let mut winner = None;
        let run = panel.run(|score| bar.set_position(score as u64), |score| winner = Some(score));
        let finished = tokio::time::timeout(Duration::from_secs(timeout_secs), run).await;

        if finished.is_err() {
            bar.abandon_with_message("시간 초과");
            panel.close();
            return Ok(None);
        }
        bar.finish_with_message("완료");
        Ok(winner)
    })?;

    if completed.is_some() {
        log_event(
            logger,
            LogEvent::new(events::SUNLIGHT_COLLECTED).with_panel("sunlight"),
        );
    }
    Ok(completed)
}
