//! Game tuning: build-time defaults with an optional JSON override.
//!
//! Every field has a default, so an override file only needs to name the
//! values it changes:
//!
//! ```json
//! { "enemy_count": 10, "player_speed": 8.0 }
//! ```

use std::fs;
use std::path::Path;

use serde::Deserialize;
use trl_core::grid::TileGrid;

pub mod assets {
    pub const PLAYER_IDLE: &[&str] = &["hero_idle_1", "hero_idle_2"];
    pub const PLAYER_MOVE: &[&str] = &["hero_walk_1", "hero_walk_2", "hero_walk_3", "hero_walk_4"];
    pub const ENEMY_IDLE: &[&str] = &["enemy_idle_1", "enemy_idle_2"];
    pub const ENEMY_MOVE: &[&str] = &["enemy_walk_1", "enemy_walk_2"];
    pub const BACKGROUND_TILE: &str = "dungeon_floor";
    pub const BUTTON: &str = "button";

    pub const SOUND_HIT: &str = "hit";
    pub const SOUND_DEATH: &str = "death";
    pub const SOUND_TOGGLE: &str = "toggle";
    pub const MUSIC_BG: &str = "bg_music";
}

/// Half-open `[min, max)` interval in seconds.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
pub struct SecondsRange {
    pub min: f32,
    pub max: f32,
}

impl SecondsRange {
    pub const fn new(min: f32, max: f32) -> Self {
        Self { min, max }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct GameConfig {
    pub grid_width: i32,
    pub grid_height: i32,
    pub tile_size: i32,
    /// Cells per second.
    pub player_speed: f32,
    /// Cells per second.
    pub enemy_speed: f32,
    pub idle_frame_duration: f32,
    pub move_frame_duration: f32,
    pub starting_hp: i32,
    pub enemy_count: usize,
    /// Inclusive cell radius bounds.
    pub territory_radius_min: i32,
    pub territory_radius_max: i32,
    pub enemy_decision_interval: SecondsRange,
    pub enemy_initial_delay: SecondsRange,
    pub enemy_idle_chance: f64,
    /// Hitbox side as a fraction of the tile size.
    pub hitbox_fraction: f32,
    pub music_volume: f32,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            grid_width: 16,
            grid_height: 12,
            tile_size: 48,
            player_speed: 6.0,
            enemy_speed: 4.0,
            idle_frame_duration: 0.4,
            move_frame_duration: 0.12,
            starting_hp: 3,
            enemy_count: 6,
            territory_radius_min: 2,
            territory_radius_max: 4,
            enemy_decision_interval: SecondsRange::new(0.6, 1.8),
            enemy_initial_delay: SecondsRange::new(0.2, 1.2),
            enemy_idle_chance: 0.2,
            hitbox_fraction: 0.6,
            music_volume: 0.5,
        }
    }
}

impl GameConfig {
    pub fn grid(&self) -> TileGrid {
        TileGrid::new(self.grid_width, self.grid_height, self.tile_size)
    }

    pub fn hitbox_side(&self) -> f32 {
        self.tile_size as f32 * self.hitbox_fraction
    }
}

pub fn load_config_from_path(path: &Path) -> Result<GameConfig, String> {
    let raw =
        fs::read_to_string(path).map_err(|e| format!("Failed to read {}: {e}", path.display()))?;
    let config: GameConfig = serde_json::from_str(&raw)
        .map_err(|e| format!("Failed to parse config JSON {}: {e}", path.display()))?;
    validate_config(&config)?;
    Ok(config)
}

pub fn validate_config(config: &GameConfig) -> Result<(), String> {
    // Enemies spawn in [1, size - 2], so each axis needs at least three cells.
    if config.grid_width < 3 || config.grid_height < 3 {
        return Err("Config validation failed: grid must be at least 3x3".to_string());
    }
    if config.tile_size <= 0 {
        return Err("Config validation failed: tile_size must be > 0".to_string());
    }
    if config.player_speed <= 0.0 || config.enemy_speed <= 0.0 {
        return Err("Config validation failed: speeds must be > 0".to_string());
    }
    if config.idle_frame_duration <= 0.0 || config.move_frame_duration <= 0.0 {
        return Err("Config validation failed: frame durations must be > 0".to_string());
    }
    if config.starting_hp <= 0 {
        return Err("Config validation failed: starting_hp must be > 0".to_string());
    }
    if config.territory_radius_min < 0 || config.territory_radius_min > config.territory_radius_max
    {
        return Err(format!(
            "Config validation failed: territory radius range [{}, {}] is invalid",
            config.territory_radius_min, config.territory_radius_max
        ));
    }
    for (name, range) in [
        ("enemy_decision_interval", config.enemy_decision_interval),
        ("enemy_initial_delay", config.enemy_initial_delay),
    ] {
        if range.min < 0.0 || range.min >= range.max {
            return Err(format!(
                "Config validation failed: {name} must satisfy 0 <= min < max"
            ));
        }
    }
    if !(0.0..=1.0).contains(&config.enemy_idle_chance) {
        return Err("Config validation failed: enemy_idle_chance must be in [0, 1]".to_string());
    }
    if config.hitbox_fraction <= 0.0 || config.hitbox_fraction > 1.0 {
        return Err("Config validation failed: hitbox_fraction must be in (0, 1]".to_string());
    }
    if !(0.0..=1.0).contains(&config.music_volume) {
        return Err("Config validation failed: music_volume must be in [0, 1]".to_string());
    }
    Ok(())
}
