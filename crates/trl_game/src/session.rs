//! Game session: the menu / playing / game-over state machine and everything
//! it owns.
//!
//! One `GameSession` is the whole mutable world. The host calls
//! [`GameSession::advance`] once per frame and then [`GameSession::render`];
//! nothing is global. Starting a game builds a fresh player and enemy list,
//! and returning to the menu drops them.
//!
//! Per-frame order while playing:
//!   1. player input (only when the player is at rest)
//!   2. player motion + animation
//!   3. for each enemy in list order: decision, motion + animation, contact
//!
//! so every contact check sees this frame's positions for both parties.

use glam::Vec2;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use trl_core::audio::{
    play_music_best_effort, play_sound_best_effort, stop_music_best_effort, AudioBackend,
};
use trl_core::grid::{GridCell, TileGrid};
use trl_core::input::{InputState, Key};
use trl_core::render::{Color, Frame, TextAnchor};

use crate::character::{EntityKind, SpriteHandle};
use crate::combat::{resolve_contact, ContactOutcome};
use crate::config::{assets, validate_config, GameConfig};
use crate::enemy::Enemy;
use crate::menu::{Menu, MenuAction};
use crate::player::Player;

const MENU_BACKGROUND: Color = Color::rgb(25, 25, 30);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameState {
    Menu,
    Playing,
    GameOver,
}

pub struct GameSession {
    config: GameConfig,
    grid: TileGrid,
    state: GameState,
    player: Option<Player>,
    enemies: Vec<Enemy>,
    menu: Menu,
    music_enabled: bool,
    exit_requested: bool,
    rng: ChaCha8Rng,
}

impl GameSession {
    pub fn new(config: GameConfig, seed: u64) -> Result<Self, String> {
        Self::with_rng(config, ChaCha8Rng::seed_from_u64(seed))
    }

    /// Rejects configs that `validate_config` rejects; spawning and motion
    /// rely on its bounds.
    pub fn with_rng(config: GameConfig, rng: ChaCha8Rng) -> Result<Self, String> {
        validate_config(&config)?;
        let grid = config.grid();
        Ok(Self {
            menu: Menu::new(grid.pixel_size()),
            config,
            grid,
            state: GameState::Menu,
            player: None,
            enemies: Vec::new(),
            music_enabled: true,
            exit_requested: false,
            rng,
        })
    }

    pub fn state(&self) -> GameState {
        self.state
    }

    #[allow(dead_code)]
    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    #[allow(dead_code)]
    pub fn grid(&self) -> &TileGrid {
        &self.grid
    }

    pub fn player(&self) -> Option<&Player> {
        self.player.as_ref()
    }

    #[allow(dead_code)]
    pub fn player_mut(&mut self) -> Option<&mut Player> {
        self.player.as_mut()
    }

    pub fn enemies(&self) -> &[Enemy] {
        &self.enemies
    }

    #[allow(dead_code)]
    pub fn enemies_mut(&mut self) -> &mut Vec<Enemy> {
        &mut self.enemies
    }

    pub fn menu(&self) -> &Menu {
        &self.menu
    }

    pub fn music_enabled(&self) -> bool {
        self.music_enabled
    }

    pub fn exit_requested(&self) -> bool {
        self.exit_requested
    }

    /// Run one frame of `dt` seconds against this frame's input snapshot.
    pub fn advance(&mut self, dt: f32, input: &InputState, audio: &mut dyn AudioBackend) {
        if input.is_just_pressed(Key::Cancel) {
            self.reset_to_menu();
            return;
        }

        match self.state {
            GameState::Menu => {
                if let Some(point) = input.clicked_at() {
                    if let Some(action) = self.menu.hit_test(point) {
                        self.handle_menu_action(action, audio);
                    }
                }
            }
            GameState::Playing => self.simulate(dt, input, audio),
            GameState::GameOver => {
                if input.is_just_pressed(Key::Confirm) {
                    self.reset_to_menu();
                }
            }
        }
    }

    pub fn handle_menu_action(&mut self, action: MenuAction, audio: &mut dyn AudioBackend) {
        match action {
            MenuAction::StartGame => self.start_new_game(audio),
            MenuAction::ToggleMusic => self.toggle_music(audio),
            MenuAction::Exit => {
                log::info!("Exit requested from menu");
                self.exit_requested = true;
            }
        }
    }

    pub fn start_new_game(&mut self, audio: &mut dyn AudioBackend) {
        let player = Player::new(self.grid.center_cell(), &self.config);
        let enemies: Vec<Enemy> = (0..self.config.enemy_count)
            .map(|_| self.spawn_enemy())
            .collect();

        log::info!(
            "New game: player at {:?}, {} enemies",
            player.character.cell(),
            enemies.len()
        );
        self.player = Some(player);
        self.enemies = enemies;
        self.state = GameState::Playing;
        self.play_music(audio);
    }

    pub fn toggle_music(&mut self, audio: &mut dyn AudioBackend) {
        self.music_enabled = !self.music_enabled;
        if self.music_enabled {
            self.play_music(audio);
        } else {
            stop_music_best_effort(audio);
        }
        play_sound_best_effort(audio, assets::SOUND_TOGGLE);
        log::info!("Music {}", if self.music_enabled { "ON" } else { "OFF" });
    }

    /// Back to the menu from any state, dropping the running game.
    pub fn reset_to_menu(&mut self) {
        if self.state != GameState::Menu {
            log::info!("Returning to menu from {:?}", self.state);
        }
        self.state = GameState::Menu;
        self.player = None;
        self.enemies.clear();
        self.menu = Menu::new(self.grid.pixel_size());
    }

    fn play_music(&mut self, audio: &mut dyn AudioBackend) {
        if self.music_enabled {
            play_music_best_effort(audio, assets::MUSIC_BG, self.config.music_volume);
        }
    }

    /// Spawn cells keep a one-cell margin from the edges; overlap with other
    /// enemies or the player is not checked.
    fn spawn_enemy(&mut self) -> Enemy {
        let rng = &mut self.rng;
        let cell = GridCell::new(
            rng.gen_range(1..=self.grid.width - 2),
            rng.gen_range(1..=self.grid.height - 2),
        );
        let radius =
            rng.gen_range(self.config.territory_radius_min..=self.config.territory_radius_max);
        Enemy::new(cell, radius, &self.config, rng)
    }

    fn simulate(&mut self, dt: f32, input: &InputState, audio: &mut dyn AudioBackend) {
        let Some(player) = self.player.as_mut() else {
            return;
        };
        let grid = &self.grid;

        if !player.character.is_moving() {
            player.handle_input(input, grid);
        }
        player.character.advance(dt, grid);

        let mut died = false;
        for enemy in &mut self.enemies {
            let decision = enemy.think(dt, grid, &self.config, &mut self.rng);
            log::trace!("Enemy at {:?}: {:?}", enemy.character.cell(), decision);
            enemy.character.advance(dt, grid);
            if resolve_contact(player, enemy, grid, audio) == ContactOutcome::Fatal {
                died = true;
            }
        }

        if died {
            log::info!("Player died, game over");
            self.state = GameState::GameOver;
        }
    }

    /// Actors in draw order: enemies first, player on top.
    pub fn visible_entities(&self) -> impl Iterator<Item = (EntityKind, &SpriteHandle)> + '_ {
        self.enemies
            .iter()
            .map(|e| (e.character.kind, &e.character.sprite))
            .chain(
                self.player
                    .iter()
                    .map(|p| (p.character.kind, &p.character.sprite)),
            )
    }

    /// Draw commands for the current state. Pure: calling it twice without an
    /// `advance` in between yields identical frames.
    pub fn render(&self) -> Frame {
        let mut frame = Frame::new();
        frame.clear();
        let size = self.grid.pixel_size();
        let center = Vec2::new((size.x as i32 / 2) as f32, (size.y as i32 / 2) as f32);

        match self.state {
            GameState::Menu => {
                frame.fill(MENU_BACKGROUND);
                frame.text(
                    "Tiny Roguelike",
                    center - Vec2::new(0.0, 140.0),
                    TextAnchor::Center,
                    64.0,
                    Color::WHITE,
                );
                self.menu.draw(&mut frame);
                frame.text(
                    "Use arrow keys to move. Avoid enemies.",
                    Vec2::new(center.x, size.y - 40.0),
                    TextAnchor::Center,
                    22.0,
                    Color::LIGHT_GRAY,
                );
            }
            GameState::Playing => {
                for cell in self.grid.cells() {
                    frame.tile(assets::BACKGROUND_TILE, self.grid.cell_origin(cell));
                }
                for (_, sprite) in self.visible_entities() {
                    frame.sprite(&sprite.image, sprite.position);
                }
                let hp = self.player.as_ref().map_or(0, |p| p.character.hp);
                frame.text(
                    format!("HP: {hp}"),
                    Vec2::new(10.0, 10.0),
                    TextAnchor::TopLeft,
                    30.0,
                    Color::WHITE,
                );
                frame.text(
                    format!("Enemies: {}", self.enemies.len()),
                    Vec2::new(10.0, 44.0),
                    TextAnchor::TopLeft,
                    20.0,
                    Color::WHITE,
                );
            }
            GameState::GameOver => {
                frame.fill(Color::BLACK);
                frame.text(
                    "Game Over",
                    center - Vec2::new(0.0, 20.0),
                    TextAnchor::Center,
                    64.0,
                    Color::RED,
                );
                frame.text(
                    "Press Enter to return to menu",
                    center + Vec2::new(0.0, 40.0),
                    TextAnchor::Center,
                    28.0,
                    Color::WHITE,
                );
            }
        }
        frame
    }
}
