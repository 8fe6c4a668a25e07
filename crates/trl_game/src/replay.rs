//! Scripted input playback for headless runs.
//!
//! A replay is a list of input frames, each held for `repeat` fixed steps.
//! Keys are level state ("is held this frame"); pressing and releasing edges
//! fall out of consecutive frames differing. A `click` presses the left button
//! at that point on the frame it appears and releases it on the next frame
//! without one.

use std::fs;
use std::path::Path;

use glam::Vec2;
use serde::Deserialize;
use trl_core::audio::AudioBackend;
use trl_core::input::{InputState, Key, MouseBtn};
use trl_core::time::FrameClock;

use crate::session::{GameSession, GameState};

#[derive(Debug, Deserialize, Clone)]
pub struct ReplaySequence {
    #[serde(default = "default_dt")]
    pub fixed_dt: f32,
    #[serde(default)]
    pub seed: Option<u64>,
    pub frames: Vec<ReplayFrame>,
}

#[derive(Debug, Deserialize, Clone, Default, PartialEq)]
#[serde(default)]
pub struct ReplayFrame {
    pub left: bool,
    pub right: bool,
    pub up: bool,
    pub down: bool,
    pub confirm: bool,
    pub cancel: bool,
    pub click: Option<[f32; 2]>,
    #[serde(default = "default_repeat")]
    pub repeat: u32,
}

impl ReplayFrame {
    /// Drive `input` to this frame's state.
    pub fn apply(&self, input: &mut InputState) {
        input.set_key(Key::Left, self.left);
        input.set_key(Key::Right, self.right);
        input.set_key(Key::Up, self.up);
        input.set_key(Key::Down, self.down);
        input.set_key(Key::Confirm, self.confirm);
        input.set_key(Key::Cancel, self.cancel);
        match self.click {
            Some([x, y]) => {
                input.pointer = Vec2::new(x, y);
                input.mouse_down(MouseBtn::Left);
            }
            None => input.mouse_up(MouseBtn::Left),
        }
    }
}

impl ReplaySequence {
    /// Click "Start Game" at `start_button`, then stand still for `idle_frames`.
    pub fn attract(start_button: Vec2, idle_frames: u32) -> Self {
        Self {
            fixed_dt: default_dt(),
            seed: None,
            frames: vec![
                ReplayFrame {
                    click: Some([start_button.x, start_button.y]),
                    ..ReplayFrame::default()
                },
                ReplayFrame {
                    repeat: idle_frames,
                    ..ReplayFrame::default()
                },
            ],
        }
    }

    pub fn expanded_frames(&self) -> Vec<ReplayFrame> {
        let mut out = Vec::new();
        for frame in &self.frames {
            for _ in 0..frame.repeat.max(1) {
                out.push(ReplayFrame {
                    repeat: 1,
                    ..frame.clone()
                });
            }
        }
        out
    }

    pub fn total_frames(&self) -> u64 {
        self.frames.iter().map(|f| u64::from(f.repeat.max(1))).sum()
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ReplayOutcome {
    pub frames_played: u64,
    pub steps: u64,
    pub final_state: GameState,
    pub player_hp: Option<i32>,
    #[allow(dead_code)]
    pub exit_requested: bool,
}

/// Feed every replay frame through a fixed-step clock into `session`. Stops
/// early when the session asks to exit.
pub fn play_replay(
    session: &mut GameSession,
    replay: &ReplaySequence,
    audio: &mut dyn AudioBackend,
) -> ReplayOutcome {
    let mut clock = FrameClock::new(replay.fixed_dt);
    // Each replay frame is exactly one step, even when it is longer than the
    // runaway-frame cap.
    clock.max_frame_dt = clock.max_frame_dt.max(replay.fixed_dt);
    let mut input = InputState::new();
    let mut frames_played = 0;

    for frame in replay.expanded_frames() {
        frame.apply(&mut input);
        clock.begin_frame(replay.fixed_dt);
        while clock.should_step() {
            session.advance(clock.fixed_dt, &input, audio);
        }
        clock.end_frame();
        // Edges survive frames that produced no step.
        if clock.steps_this_frame > 0 {
            input.end_frame();
        }
        frames_played += 1;

        if session.exit_requested() {
            log::info!("Session requested exit after {} frames", frames_played);
            break;
        }
    }

    ReplayOutcome {
        frames_played,
        steps: clock.fixed_step_count,
        final_state: session.state(),
        player_hp: session.player().map(|p| p.character.hp),
        exit_requested: session.exit_requested(),
    }
}

pub fn load_replay_from_path(path: &Path) -> Result<ReplaySequence, String> {
    let raw =
        fs::read_to_string(path).map_err(|e| format!("Failed to read {}: {e}", path.display()))?;
    let replay: ReplaySequence = serde_json::from_str(&raw)
        .map_err(|e| format!("Failed to parse replay JSON {}: {e}", path.display()))?;
    validate_replay(&replay)?;
    Ok(replay)
}

fn validate_replay(replay: &ReplaySequence) -> Result<(), String> {
    if replay.fixed_dt <= 0.0 {
        return Err("Replay validation failed: fixed_dt must be > 0".to_string());
    }
    if replay.frames.is_empty() {
        return Err("Replay validation failed: frames list is empty".to_string());
    }
    Ok(())
}

const fn default_dt() -> f32 {
    1.0 / 60.0
}

const fn default_repeat() -> u32 {
    1
}
