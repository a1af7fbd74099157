use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use rand::seq::SliceRandom;
use raylib::prelude::*;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use orbit::constants::*;
use orbit::host::MarkupHost;
use orbit::slide::{SlideSource, sources_from_dir};
use orbit::{AppConfig, Carousel, Environment, PresentationMode};

mod texture_loader;
mod window;

use crate::window::FrameHost;

#[derive(Parser)]
#[command(name = "orbit")]
#[command(version, about = "Image carousel with autoplay, swipe and keyboard navigation")]
struct Cli {
    /// TOML configuration file
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Presentation mode
    #[arg(long, global = true, value_enum)]
    mode: Option<PresentationMode>,

    /// Autoplay interval in milliseconds
    #[arg(long, global = true, allow_negative_numbers = true)]
    interval_ms: Option<i64>,

    /// Disable autoplay
    #[arg(long, global = true)]
    no_autoplay: bool,

    /// Behave as if the user prefers reduced motion
    #[arg(long, global = true)]
    reduced_motion: bool,

    /// Shuffle slide order
    #[arg(long, global = true)]
    shuffle: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Open a window and run the carousel
    Show {
        /// Directory of images; defaults to the slides in the config file
        dir: Option<PathBuf>,
    },
    /// Print the track and indicator markup the carousel renders
    Markup {
        /// Directory of images; defaults to the slides in the config file
        dir: Option<PathBuf>,
    },
}

impl Command {
    fn dir(&self) -> Option<&PathBuf> {
        match self {
            Command::Show { dir } | Command::Markup { dir } => dir.as_ref(),
        }
    }
}

fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "info".into()),
        ))
        .with(tracing_subscriber::fmt::layer().with_target(false))
        .init();

    let cli = Cli::parse();

    let mut config = match &cli.config {
        Some(path) => AppConfig::load(path)
            .with_context(|| format!("loading config {}", path.display()))?,
        None => AppConfig::default(),
    };
    apply_overrides(&cli, &mut config);

    let env = Environment {
        reduced_motion: config.reduced_motion || reduced_motion_from_env(),
    };

    let mut sources: Vec<SlideSource> = match cli.command.dir() {
        Some(dir) => sources_from_dir(dir)
            .with_context(|| format!("loading images from {}", dir.display()))?,
        None => std::mem::take(&mut config.slides),
    };
    if cli.shuffle {
        sources.shuffle(&mut rand::rng());
    }
    info!(
        slides = sources.len(),
        mode = ?config.carousel.mode,
        interval_ms = config.carousel.interval(),
        reduced_motion = env.reduced_motion,
        "carousel configured"
    );

    match cli.command {
        Command::Markup { .. } => print_markup(config, sources, env),
        Command::Show { .. } => show(config, sources, env),
    }
}

fn apply_overrides(cli: &Cli, config: &mut AppConfig) {
    if let Some(mode) = cli.mode {
        config.carousel.mode = mode;
    }
    if let Some(interval) = cli.interval_ms {
        config.carousel.interval_ms = interval;
    }
    if cli.no_autoplay {
        config.carousel.autoplay = false;
    }
    if cli.reduced_motion {
        config.reduced_motion = true;
    }
}

/// `ORBIT_REDUCED_MOTION` set to anything but empty or "0".
fn reduced_motion_from_env() -> bool {
    std::env::var("ORBIT_REDUCED_MOTION").is_ok_and(|v| !v.is_empty() && v != "0")
}

fn print_markup(config: AppConfig, sources: Vec<SlideSource>, env: Environment) -> Result<()> {
    let selectors = config.carousel.selectors.clone();
    let mut host = MarkupHost::new();
    if Carousel::mount(config.carousel, sources, env, &mut host, 0).is_none() {
        return Ok(());
    }
    println!("<!-- {} -->", selectors.track);
    println!("{}", host.track_html());
    println!("<!-- {} -->", selectors.indicators);
    println!("{}", host.indicators_html());
    Ok(())
}

fn show(config: AppConfig, sources: Vec<SlideSource>, env: Environment) -> Result<()> {
    let (mut rl, thread) = raylib::init()
        .size(RENDER_WIDTH, RENDER_HEIGHT)
        .title("orbit")
        .vsync()
        .resizable()
        .build();
    rl.set_target_fps(FPS);
    rl.set_trace_log(TraceLogLevel::LOG_ERROR);

    let mut frame = FrameHost::default();
    let now = (rl.get_time() * 1000.0) as u64;
    let Some(carousel) = Carousel::mount(config.carousel, sources, env, &mut frame, now) else {
        return Ok(());
    };

    window::run(&mut rl, &thread, carousel, frame);
    Ok(())
}
