//! Play command - interactive session in the terminal
//!
//! Onboarding first, then a menu per dashboard tab. State lives only for
//! the length of the session.

use std::time::{Duration, Instant};

use anyhow::Result;
use chrono::Utc;
use colored::Colorize;
use dialoguer::{Confirm, Input, Select};
use rand::rngs::ThreadRng;

use super::{focus, garden, get_context, get_logger, log_event, log_generation, runtime, sunlight};
use crate::output;
use sprout_core::adapters::synthetic_camera::SyntheticCamera;
use sprout_core::domain::community::relative_label;
use sprout_core::domain::{BingoToggle, RewardEffect};
use sprout_core::services::dashboard::MENTOR_SENT_CONFIRMATION;
use sprout_core::services::garden::garden_stage;
use sprout_core::services::growth::SHRED_ANIMATION;
use sprout_core::services::logging::events;
use sprout_core::services::nudge::POSTURE_CHECK_INTERVAL;
use sprout_core::services::{
    CommunityBoard, ExperienceTranslator, FailureMuseum, FocusTimer, JobBoard, JobPossibility,
    OnboardingWizard, PostureNudge, SocialScriptPanel, Source, VoiceWarmup,
};
use sprout_core::{Dashboard, LogEvent, LoggingService, Mood, SproutContext, Tab, UserState};

/// Brightness levels for the check-in camera: a dim room, then a window
const MORNING_LEVELS: [u8; 4] = [30, 60, 95, 140];
const CHECK_IN_TIMEOUT_SECS: u64 = 30;

const SOS_MESSAGE: &str = "괜찮아요. 천천히 숨을 들이마시고, 내쉬어요.";

pub fn run() -> Result<()> {
    let ctx = get_context()?;
    let logger = get_logger();
    log_event(&logger, LogEvent::new(events::SESSION_STARTED).with_command("play"));

    let user = onboard()?;
    log_event(&logger, LogEvent::new(events::ONBOARDING_COMPLETED));

    let mut session = Session {
        dash: Dashboard::new(user),
        community: CommunityBoard::new(Utc::now()),
        museum: FailureMuseum::new(),
        translator: ExperienceTranslator::new(),
        script: SocialScriptPanel::new(),
        jobs: JobBoard::new(),
        posture: PostureNudge::new(),
        last_posture_check: Instant::now(),
        rng: rand::thread_rng(),
        ctx,
        logger,
    };
    session.main_loop()
}

fn onboard() -> Result<UserState> {
    let mut wizard = OnboardingWizard::new();

    println!();
    println!("{}", "새싹 정원에 오신 걸 환영해요".green().bold());
    println!("{}", "매일 조금씩, 나만의 속도로 자라나요.".dimmed());
    wizard.start();

    while !wizard.can_submit_name() {
        let name: String = Input::new()
            .with_prompt("뭐라고 불러드릴까요?")
            .allow_empty(true)
            .interact_text()?;
        wizard.set_name(name);
    }
    wizard.submit_name()?;

    let labels: Vec<String> = Mood::ALL
        .iter()
        .map(|m| format!("{} {}", m.icon(), m.label()))
        .collect();
    let choice = Select::new()
        .with_prompt(format!("{}님, 오늘 기분은 어때요?", wizard.name()))
        .items(&labels)
        .default(0)
        .interact()?;
    wizard.select_mood(Mood::ALL[choice]);

    Ok(wizard.finish()?)
}

fn select(prompt: &str, items: &[&str]) -> Result<usize> {
    Ok(Select::new()
        .with_prompt(prompt)
        .items(items)
        .default(0)
        .interact()?)
}

fn input(prompt: &str) -> Result<String> {
    Ok(Input::new()
        .with_prompt(prompt)
        .allow_empty(true)
        .interact_text()?)
}

struct Session {
    ctx: SproutContext,
    logger: Option<LoggingService>,
    dash: Dashboard,
    community: CommunityBoard,
    museum: FailureMuseum,
    translator: ExperienceTranslator,
    script: SocialScriptPanel,
    jobs: JobBoard,
    posture: PostureNudge,
    last_posture_check: Instant,
    rng: ThreadRng,
}

impl Session {
    fn main_loop(&mut self) -> Result<()> {
        loop {
            self.dash.refresh(Instant::now());
            self.check_posture();
            self.print_header();

            let mut items: Vec<&str> = Tab::ALL.iter().map(|t| tab_label(*t)).collect();
            items.push("SOS 진정 모드");
            items.push("종료");

            let choice = select("어디로 갈까요?", &items)?;
            match Tab::ALL.get(choice) {
                Some(tab) => {
                    self.dash.switch_tab(*tab);
                    log_event(
                        &self.logger,
                        LogEvent::new(events::TAB_OPENED).with_tab(tab_key(*tab)),
                    );
                    self.print_header();
                    match tab {
                        Tab::Home => self.home()?,
                        Tab::Growth => self.growth()?,
                        Tab::Jobs => self.jobs()?,
                        Tab::Connect => self.connect()?,
                        Tab::Garden => self.garden()?,
                    }
                }
                None if choice == Tab::ALL.len() => self.sos()?,
                None => break,
            }
        }

        output::info(&format!("오늘도 수고했어요, {}님.", self.dash.user().name));
        Ok(())
    }

    fn print_header(&self) {
        let user = self.dash.user();
        println!();
        println!("{}", self.dash.title().bold());
        println!("{}", self.dash.subtitle().dimmed());
        if let Some(greeting) = self.dash.mood_greeting() {
            println!("{}", greeting.cyan());
        }
        println!(
            "Lv.{} {} {}xp · {}G · {} {}",
            user.level,
            output::meter(user.progress_percent(), 10),
            user.exp,
            user.coins,
            user.current_mood.icon(),
            user.current_mood.label()
        );
        if let Some(message) = self.dash.posture_nudge(Instant::now()) {
            output::warning(message);
        }
    }

    /// Posture reminders piggyback on the menu loop
    fn check_posture(&mut self) {
        if self.last_posture_check.elapsed() < POSTURE_CHECK_INTERVAL {
            return;
        }
        self.last_posture_check = Instant::now();
        if self.posture.check(&mut self.rng).is_some() {
            self.dash.show_posture_nudge(Instant::now());
        }
    }

    // Home

    fn home(&mut self) -> Result<()> {
        let choice = select(
            "무엇을 해볼까요?",
            &["오늘의 퀘스트", "햇살 체크인", "동네 빙고", "목소리 워밍업", "집중 모드", "뒤로"],
        )?;
        match choice {
            0 => self.quests(),
            1 => self.sunlight(),
            2 => self.bingo(),
            3 => self.voice_warmup(),
            4 => self.focus(),
            _ => Ok(()),
        }
    }

    fn quests(&mut self) -> Result<()> {
        let mut items: Vec<String> = self
            .dash
            .quests()
            .iter()
            .map(|q| {
                let mark = if q.is_completed { "✔" } else { "○" };
                format!("{} {} (+{}xp) - {}", mark, q.title, q.xp, q.description)
            })
            .collect();
        items.push("뒤로".to_string());

        let choice = Select::new()
            .with_prompt("완료한 퀘스트를 골라주세요")
            .items(&items)
            .default(0)
            .interact()?;
        let Some(id) = self.dash.quests().get(choice).map(|q| q.id.clone()) else {
            return Ok(());
        };

        match self.dash.complete_quest(&id)? {
            Some(xp) => {
                output::success(&format!("퀘스트 완료! +{}xp", xp));
                log_event(&self.logger, LogEvent::new(events::QUEST_COMPLETED).with_panel("quests"));
            }
            None => output::info("이미 완료한 퀘스트예요."),
        }
        Ok(())
    }

    fn sunlight(&mut self) -> Result<()> {
        let camera = SyntheticCamera::new(MORNING_LEVELS.to_vec());
        let settings = self.ctx.config.check_in_settings();
        if sunlight::check_in(camera, settings, CHECK_IN_TIMEOUT_SECS, &self.logger)?.is_none() {
            return Ok(());
        }

        if self.dash.collect_sunlight() {
            output::success("햇살 충전 완료! +50xp");
        } else {
            output::info("오늘의 햇살은 이미 받았어요.");
        }
        Ok(())
    }

    fn bingo(&mut self) -> Result<()> {
        let board = self.dash.bingo();
        println!(
            "{} {}/9",
            output::meter(board.progress_percent() as u32, 9),
            board.completed_count()
        );
        if board.is_locked() {
            output::info("빙고 완성! 이번 보드는 끝났어요.");
            return Ok(());
        }

        let mut items: Vec<String> = board
            .cells()
            .iter()
            .map(|c| format!("{} {}", if c.is_completed { "■" } else { "□" }, c.label))
            .collect();
        items.push("뒤로".to_string());

        let choice = Select::new()
            .with_prompt("다녀온 곳을 체크해요")
            .items(&items)
            .default(0)
            .interact()?;
        let Some(id) = board.cells().get(choice).map(|c| c.id) else {
            return Ok(());
        };

        let now = Instant::now();
        if self.dash.toggle_bingo(id, now)? == BingoToggle::BoardCompleted {
            log_event(&self.logger, LogEvent::new(events::BINGO_COMPLETED).with_panel("bingo"));
        }
        if self.dash.is_level_up_visible(now) {
            println!("{}", "LEVEL UP!".yellow().bold());
            output::success(&format!(
                "빙고 완성! 레벨 {} 달성, +200xp",
                self.dash.user().level
            ));
        }
        Ok(())
    }

    fn voice_warmup(&mut self) -> Result<()> {
        let mut warmup = VoiceWarmup::new(&mut self.rng);
        println!("{}", "소리 내어 읽어보세요".bold());
        println!("  \"{}\"", warmup.text().cyan());

        if !Confirm::new()
            .with_prompt("녹음을 시작할까요?")
            .default(true)
            .interact()?
        {
            return Ok(());
        }

        let spinner = output::spinner("듣고 있어요...");
        let feedback = runtime()?.block_on(warmup.record());
        spinner.finish_and_clear();
        output::success(feedback);
        Ok(())
    }

    fn focus(&mut self) -> Result<()> {
        let mut timer = FocusTimer::new(self.ctx.config.focus_minutes);
        println!("{}", timer.status_line().dimmed());
        focus::run_timer(&mut timer, &self.logger)
    }

    // Growth

    fn growth(&mut self) -> Result<()> {
        let choice = select(
            "무엇을 해볼까요?",
            &["걱정 분쇄기", "경험 번역기", "사회성 대본", "뒤로"],
        )?;
        match choice {
            0 => self.shred_worry(),
            1 => self.translate(),
            2 => self.social_script(),
            _ => Ok(()),
        }
    }

    fn shred_worry(&mut self) -> Result<()> {
        let worry = input("걱정을 적어주세요 (아무도 보지 않아요)")?;
        self.dash.worry_mut().set_draft(worry);

        let started = Instant::now();
        let spinner = output::spinner("걱정을 갈아버리는 중...");
        let result = self.dash.shred_worry(&self.ctx.generation);
        if let Some(rest) = SHRED_ANIMATION.checked_sub(started.elapsed()) {
            std::thread::sleep(rest);
        }
        spinner.finish_and_clear();

        let Some(result) = result else {
            output::info("적힌 걱정이 없어요.");
            return Ok(());
        };
        log_generation(&self.logger, &self.ctx, "worry", &result);
        log_event(&self.logger, LogEvent::new(events::WORRY_SHREDDED).with_panel("worry"));

        println!("{}", result.value.comfort_message.bold());
        println!("  {} {}", "작은 한 걸음:".green(), result.value.action_item);
        output::success("+30xp");
        self.dash.worry_mut().reset();
        Ok(())
    }

    fn translate(&mut self) -> Result<()> {
        self.translator.reset();
        self.translator
            .set_input(input("어떤 경험을 했나요? (게임, 덕질, 휴식...)")?);

        let spinner = output::spinner("경험을 번역하는 중...");
        let translated = self.translator.translate(&self.ctx.generation);
        spinner.finish_and_clear();
        if !translated {
            return Ok(());
        }

        if self.translator.source() == Some(Source::Fallback) {
            log_event(
                &self.logger,
                LogEvent::new(events::AI_FALLBACK)
                    .with_panel("translate")
                    .with_generator(self.ctx.generation.generator_name()),
            );
        }

        let mut table = output::create_table();
        table.set_header(vec!["역량", "설명"]);
        for item in self.translator.results() {
            table.add_row(vec![item.skill.clone(), item.description.clone()]);
        }
        println!("{}", table);
        Ok(())
    }

    fn social_script(&mut self) -> Result<()> {
        self.script.set_situation(input("어떤 상황인가요?")?);

        let spinner = output::spinner("대본을 쓰는 중...");
        let response = self.script.generate(&self.ctx.generation).cloned();
        spinner.finish_and_clear();

        if let Some(response) = response {
            log_generation(&self.logger, &self.ctx, "script", &response);
            println!("  {}", response.value.script);
            println!("{} {}", "팁:".cyan(), response.value.tips);
        }
        Ok(())
    }

    // Jobs

    fn jobs(&mut self) -> Result<()> {
        let choice = select("무엇을 볼까요?", &["선배들의 길", "나의 가능성", "뒤로"])?;
        match choice {
            0 => self.job_board(),
            1 => {
                let view = JobPossibility::load(&self.ctx.generation);
                for buff in &view.buffs {
                    println!(
                        "{} {} {}",
                        output::meter(buff.score as u32, 10),
                        buff.name.bold(),
                        buff.description.dimmed()
                    );
                }
                println!("{} {}", "마이크로 잡:".cyan(), view.micro_jobs.join(" · "));
                Ok(())
            }
            _ => Ok(()),
        }
    }

    fn job_board(&mut self) -> Result<()> {
        let mut items: Vec<String> = self
            .jobs
            .postings()
            .iter()
            .map(|p| format!("{} · {}", p.title, p.company))
            .collect();
        items.push("뒤로".to_string());

        let choice = Select::new()
            .with_prompt("궁금한 공고를 골라주세요")
            .items(&items)
            .default(0)
            .interact()?;
        let Some(id) = self.jobs.postings().get(choice).map(|p| p.id.clone()) else {
            return Ok(());
        };

        let spinner = output::spinner("선배들의 길을 살펴보는 중...");
        let coaching = self.jobs.select(&id, &self.ctx.generation).cloned();
        spinner.finish_and_clear();
        let coaching = coaching?;
        log_generation(&self.logger, &self.ctx, "coaching", &coaching);
        log_event(&self.logger, LogEvent::new(events::JOB_COACHED).with_panel("jobs"));

        output::success(&coaching.value.encouragement);
        println!("{}", coaching.value.gap_analysis);
        for step in &coaching.value.roadmap {
            println!("  {} {}", step.step.cyan(), step.action);
        }
        self.jobs.back();
        Ok(())
    }

    // Connect

    fn connect(&mut self) -> Result<()> {
        let choice = select(
            "무엇을 해볼까요?",
            &["커뮤니티", "글 쓰기", "실패 박물관", "멘토에게 질문하기", "뒤로"],
        )?;
        match choice {
            0 => self.community(),
            1 => {
                let content = input("오늘의 이야기")?;
                if self.community.publish(&content, Utc::now()).is_some() {
                    output::success("글을 올렸어요.");
                }
                Ok(())
            }
            2 => self.museum(),
            3 => self.mentor(),
            _ => Ok(()),
        }
    }

    fn community(&mut self) -> Result<()> {
        let now = Utc::now();
        let mut items: Vec<String> = self
            .community
            .posts()
            .iter()
            .map(|p| {
                let heart = if p.is_liked { "♥" } else { "♡" };
                format!(
                    "[{}] {} · {} {}{} 💬{}\n    {}",
                    p.tag,
                    p.author,
                    relative_label(p.posted_at, now),
                    heart,
                    p.likes,
                    p.comments,
                    p.content
                )
            })
            .collect();
        items.push("뒤로".to_string());

        let choice = Select::new()
            .with_prompt("글을 골라주세요")
            .items(&items)
            .default(0)
            .interact()?;
        let Some(post_id) = self.community.posts().get(choice).map(|p| p.id) else {
            return Ok(());
        };

        match select("어떻게 할까요?", &["좋아요", "댓글 보기 / 쓰기", "뒤로"])? {
            0 => {
                self.community.toggle_like(post_id)?;
            }
            1 => {
                if self.community.expanded() != Some(post_id) {
                    self.community.toggle_comments(post_id);
                }
                if let Some(post) = self.community.posts().iter().find(|p| p.id == post_id) {
                    for comment in &post.comments_list {
                        println!(
                            "  {} {} {}",
                            comment.author.bold(),
                            comment.text,
                            relative_label(comment.posted_at, now).dimmed()
                        );
                    }
                }
                self.community
                    .set_comment_draft(post_id, input("댓글 (비워두면 건너뛰어요)")?);
                if self.community.submit_comment(post_id, Utc::now())?.is_some() {
                    output::success("댓글을 남겼어요.");
                }
                self.community.toggle_comments(post_id);
            }
            _ => {}
        }
        Ok(())
    }

    fn museum(&mut self) -> Result<()> {
        let mut items: Vec<String> = self
            .museum
            .posts()
            .iter()
            .map(|p| {
                let mine = if p.is_mine { " (나)" } else { "" };
                format!("{}{} · 응원 {}", p.content, mine, p.cheers)
            })
            .collect();
        items.push("실패 전시하기".to_string());
        items.push("뒤로".to_string());

        let choice = Select::new()
            .with_prompt("응원할 실패를 골라주세요")
            .items(&items)
            .default(0)
            .interact()?;

        let posts = self.museum.posts().len();
        if let Some(post_id) = self.museum.posts().get(choice).map(|p| p.id) {
            let cheers = self.museum.cheer(post_id)?;
            output::success(&format!("응원했어요! ({})", cheers));
        } else if choice == posts {
            let content = input("어떤 실패였나요?")?;
            if self.museum.exhibit(&content).is_some() {
                output::success("전시했어요. 실패도 경험이에요.");
            }
        }
        Ok(())
    }

    fn mentor(&mut self) -> Result<()> {
        self.dash.open_mentor();
        self.dash
            .set_mentor_question(input("멘토에게 묻고 싶은 것")?);

        let now = Instant::now();
        if !self.dash.submit_mentor_question(now) {
            self.dash.close_mentor();
            return Ok(());
        }
        output::success("질문을 보냈어요. 곧 답변이 올 거예요.");
        std::thread::sleep(MENTOR_SENT_CONFIRMATION);
        self.dash.refresh(Instant::now());
        Ok(())
    }

    // Garden

    fn garden(&mut self) -> Result<()> {
        let stage = garden_stage(self.dash.user().level);
        println!("나의 나무: {}", stage.label().green().bold());

        if self.dash.user().reward_claimed {
            output::info("오늘의 상자는 이미 열었어요. 내일 또 만나요.");
            return Ok(());
        }
        if !Confirm::new()
            .with_prompt("오늘의 상자를 열어볼까요?")
            .default(true)
            .interact()?
        {
            return Ok(());
        }

        let Some(reward) = garden::open_box(&self.logger, true)? else {
            return Ok(());
        };
        garden::print_reward(&reward);
        let effect = self.dash.claim_reward(&reward);
        if let Some(RewardEffect::Exp(_) | RewardEffect::Coins(_)) = effect {
            output::info("보상이 적용되었어요.");
        }
        Ok(())
    }

    // SOS

    fn sos(&mut self) -> Result<()> {
        self.dash.enter_sos();
        println!();
        println!("{}", SOS_MESSAGE.cyan().bold());
        for phase in ["들이마시고...", "멈추고...", "내쉬어요..."] {
            println!("  {}", phase.dimmed());
            std::thread::sleep(Duration::from_secs(4));
        }

        Confirm::new()
            .with_prompt("조금 괜찮아졌나요?")
            .default(true)
            .interact()?;
        self.dash.exit_sos();
        Ok(())
    }
}

fn tab_label(tab: Tab) -> &'static str {
    match tab {
        Tab::Home => "홈",
        Tab::Growth => "성장",
        Tab::Jobs => "일자리",
        Tab::Connect => "연대",
        Tab::Garden => "정원",
    }
}

fn tab_key(tab: Tab) -> &'static str {
    match tab {
        Tab::Home => "home",
        Tab::Growth => "growth",
        Tab::Jobs => "jobs",
        Tab::Connect => "connect",
        Tab::Garden => "garden",
    }
}
