//! Tiny Roguelike -- headless frame driver and application entry point.
//!
//! The game core (`session`, `player`, `enemy`, `combat`, ...) only knows about
//! dt, input snapshots, draw commands and audio triggers. This driver plays
//! the host role without a window:
//!
//!   1. load tuning (`--config`) and an input script (`--replay`), or fall
//!      back to an attract-mode script that starts a game and idles
//!   2. feed the script frame by frame through a fixed-step clock
//!   3. log the outcome, and optionally dump the final frame's draw commands
//!      as JSON (`--dump-frame`) for inspection or golden-file checks

mod character;
mod combat;
mod config;
mod enemy;
mod menu;
mod player;
mod replay;
mod session;

use std::fs;
use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use rand::RngCore;
use trl_core::audio::{AudioBackend, AudioError};

use config::{load_config_from_path, GameConfig};
use menu::MenuAction;
use replay::{load_replay_from_path, play_replay, ReplaySequence};
use session::GameSession;

const DEFAULT_ATTRACT_FRAMES: u32 = 600;

#[derive(Debug, Parser)]
#[command(name = "trl_game", about = "Tiny Roguelike headless runner")]
struct Args {
    /// JSON file overriding the default tuning.
    #[arg(long)]
    config: Option<PathBuf>,

    /// JSON input script to play back.
    #[arg(long)]
    replay: Option<PathBuf>,

    /// RNG seed; overrides the replay's seed. Random when neither is given.
    #[arg(long)]
    seed: Option<u64>,

    /// Idle frames for the built-in attract script (ignored with --replay).
    #[arg(long, default_value_t = DEFAULT_ATTRACT_FRAMES)]
    frames: u32,

    /// Write the final frame's draw commands here as JSON.
    #[arg(long)]
    dump_frame: Option<PathBuf>,
}

/// Audio backend that only logs what it was asked to play.
#[derive(Debug, Default)]
struct LogAudio;

impl AudioBackend for LogAudio {
    fn play_sound(&mut self, sound_id: &str) -> Result<(), AudioError> {
        log::debug!("audio: play sound '{}'", sound_id);
        Ok(())
    }

    fn play_music(&mut self, music_id: &str) -> Result<(), AudioError> {
        log::debug!("audio: play music '{}'", music_id);
        Ok(())
    }

    fn set_music_volume(&mut self, volume: f32) -> Result<(), AudioError> {
        log::debug!("audio: music volume {:.2}", volume);
        Ok(())
    }

    fn stop_music(&mut self) -> Result<(), AudioError> {
        log::debug!("audio: stop music");
        Ok(())
    }
}

fn run(args: Args) -> Result<(), String> {
    let config = match &args.config {
        Some(path) => {
            let config = load_config_from_path(path)?;
            log::info!("Loaded config from {}", path.display());
            config
        }
        None => GameConfig::default(),
    };

    let replay = match &args.replay {
        Some(path) => Some(load_replay_from_path(path)?),
        None => None,
    };

    let seed = args
        .seed
        .or_else(|| replay.as_ref().and_then(|r| r.seed))
        .unwrap_or_else(|| rand::thread_rng().next_u64());
    log::info!("Session seed: {}", seed);

    let mut session = GameSession::new(config, seed)?;
    let replay = match replay {
        Some(replay) => replay,
        None => {
            let start = session
                .menu()
                .button(MenuAction::StartGame)
                .ok_or_else(|| "Menu has no Start Game button".to_string())?
                .center;
            ReplaySequence::attract(start, args.frames)
        }
    };

    log::info!(
        "Playing {} frames at {:.4}s per step",
        replay.total_frames(),
        replay.fixed_dt
    );
    let mut audio = LogAudio;
    let outcome = play_replay(&mut session, &replay, &mut audio);
    log::info!(
        "Finished: {} frames, {} steps, state {:?}, player hp {:?}",
        outcome.frames_played,
        outcome.steps,
        outcome.final_state,
        outcome.player_hp
    );

    if let Some(path) = &args.dump_frame {
        let frame = session.render();
        let json = serde_json::to_string_pretty(&frame)
            .map_err(|e| format!("Failed to serialize frame: {e}"))?;
        fs::write(path, json).map_err(|e| format!("Failed to write {}: {e}", path.display()))?;
        log::info!(
            "Wrote {} draw commands to {}",
            frame.commands.len(),
            path.display()
        );
    }

    Ok(())
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    log::info!("Tiny Roguelike starting...");

    match run(Args::parse()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            log::error!("{}", err);
            ExitCode::FAILURE
        }
    }
}
