//! Duel CLI
//!
//! Headless driver: runs a match at a fixed frame rate from an input script
//! and prints snapshots and events as JSON lines.

mod script;

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use duel_core::{Difficulty, EngineConfig, GameMode, InputLayout, MatchEngine};
use serde_json::json;
use tracing::info;
use tracing_subscriber::EnvFilter;

use script::Script;

#[derive(Parser)]
#[command(name = "duel_cli")]
#[command(about = "Run the Striker's Duel simulation headless", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run a match and print JSON lines
    Run {
        /// Engine config JSON (defaults to the arcade preset)
        #[arg(long)]
        config: Option<PathBuf>,

        /// Input script JSON (defaults to a built-in shot on goal)
        #[arg(long)]
        script: Option<PathBuf>,

        /// Override the match mode
        #[arg(long, value_enum)]
        mode: Option<ModeArg>,

        /// Override the noise seed
        #[arg(long)]
        seed: Option<u64>,

        /// Frames per simulated second
        #[arg(long, default_value = "60")]
        fps: u32,

        /// Print a snapshot every N frames (0 = only frames with events)
        #[arg(long, default_value = "0")]
        every: u64,

        /// Treat the script as touch input (joystick only)
        #[arg(long, default_value = "false")]
        touch: bool,
    },

    /// Print a config preset as JSON
    Config {
        #[arg(long, value_enum, default_value = "arcade")]
        preset: PresetArg,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum ModeArg {
    Easy,
    Medium,
    Hard,
    Practice,
}

impl From<ModeArg> for GameMode {
    fn from(mode: ModeArg) -> Self {
        match mode {
            ModeArg::Easy => GameMode::Timed(Difficulty::Easy),
            ModeArg::Medium => GameMode::Timed(Difficulty::Medium),
            ModeArg::Hard => GameMode::Timed(Difficulty::Hard),
            ModeArg::Practice => GameMode::Practice,
        }
    }
}

#[derive(Clone, Copy, ValueEnum)]
enum PresetArg {
    Arcade,
    Practice,
    Deterministic,
}

fn main() -> Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Run { config, script, mode, seed, fps, every, touch } => {
            let mut config = match config {
                Some(path) => EngineConfig::from_json_file(&path)
                    .with_context(|| format!("loading config {}", path.display()))?,
                None => EngineConfig::arcade(),
            };
            if let Some(mode) = mode {
                config.match_rules.mode = mode.into();
            }
            if let Some(seed) = seed {
                config.match_rules.seed = seed;
            }

            let layout = if touch { InputLayout::Touch } else { InputLayout::Desktop };
            let script = match script {
                Some(path) => Script::load(&path, layout)?,
                None => Script::demo(),
            };

            run_match(config, &script, fps, every)?;
        }

        Commands::Config { preset } => {
            let config = match preset {
                PresetArg::Arcade => EngineConfig::arcade(),
                PresetArg::Practice => EngineConfig::practice(),
                PresetArg::Deterministic => EngineConfig::deterministic(),
            };
            println!("{}", serde_json::to_string_pretty(&config)?);
        }
    }

    Ok(())
}

fn run_match(config: EngineConfig, script: &Script, fps: u32, every: u64) -> Result<()> {
    if fps == 0 {
        anyhow::bail!("--fps must be positive");
    }
    let dt = 1.0 / fps as f32;

    info!(frames = script.total_frames(), fps, "starting headless match");
    let mut engine = MatchEngine::new(config);

    let mut last = engine.snapshot();
    for (frame, intent) in script.intents().enumerate() {
        let frame = frame as u64 + 1;
        last = engine.step(dt, intent);

        let periodic = every > 0 && frame % every == 0;
        if periodic || !last.events.is_empty() {
            println!("{}", json!({ "frame": frame, "snapshot": &last }));
        }
        if last.game_over {
            break;
        }
    }

    info!(score = last.score, elapsed = last.elapsed, "run finished");
    println!("{}", json!({ "final": { "score": last.score, "elapsed": last.elapsed } }));
    Ok(())
}
