//! Timer-driven random walk confined to a circular territory.
//!
//! Each enemy counts down to its next decision. A step in flight always
//! finishes before the next decision is considered. On a decision the enemy
//! picks uniformly among its four neighbours and its own cell, keeping only
//! cells on the grid and within `territory_radius` of the spawn cell; with
//! `enemy_idle_chance` it then discards the pick and waits a cycle.

use rand::Rng;
use trl_core::grid::{GridCell, TileGrid};

use crate::character::{Character, EntityKind};
use crate::config::{assets, GameConfig, SecondsRange};

const CANDIDATE_OFFSETS: [(i32, i32); 5] = [(1, 0), (-1, 0), (0, 1), (0, -1), (0, 0)];

/// Outcome of one `Enemy::think` call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Decision {
    /// Timer still running.
    Waiting,
    /// A step is in flight; no decision taken.
    Busy,
    /// Timer fired but no candidate survived filtering.
    NoCandidates,
    /// Timer fired and the idle roll discarded the pick.
    Idle,
    /// Picked the current cell.
    Stay,
    /// Issued a new target.
    Step(GridCell),
}

#[derive(Debug, Clone)]
pub struct Enemy {
    pub character: Character,
    pub territory_center: GridCell,
    pub territory_radius: i32,
    pub action_timer: f32,
}

impl Enemy {
    pub fn new<R: Rng + ?Sized>(
        cell: GridCell,
        territory_radius: i32,
        config: &GameConfig,
        rng: &mut R,
    ) -> Self {
        Self {
            character: Character::new(
                EntityKind::Enemy,
                cell,
                config.enemy_speed,
                assets::ENEMY_IDLE,
                assets::ENEMY_MOVE,
                config,
            ),
            territory_center: cell,
            territory_radius,
            action_timer: sample_seconds(config.enemy_initial_delay, rng),
        }
    }

    /// Cells the next decision may pick from, in offset order.
    pub fn candidate_cells(&self, grid: &TileGrid) -> Vec<GridCell> {
        let here = self.character.cell();
        CANDIDATE_OFFSETS
            .iter()
            .map(|&(dx, dy)| here.offset(dx, dy))
            .filter(|&cell| grid.contains(cell) && self.in_territory(cell))
            .collect()
    }

    pub fn in_territory(&self, cell: GridCell) -> bool {
        cell.distance_to(self.territory_center) <= self.territory_radius as f32
    }

    pub fn think<R: Rng + ?Sized>(
        &mut self,
        dt: f32,
        grid: &TileGrid,
        config: &GameConfig,
        rng: &mut R,
    ) -> Decision {
        self.action_timer -= dt;
        if self.character.is_moving() {
            return Decision::Busy;
        }
        if self.action_timer > 0.0 {
            return Decision::Waiting;
        }

        self.action_timer = sample_seconds(config.enemy_decision_interval, rng);
        let candidates = self.candidate_cells(grid);
        if candidates.is_empty() {
            return Decision::NoCandidates;
        }
        let choice = candidates[rng.gen_range(0..candidates.len())];
        if rng.gen::<f64>() < config.enemy_idle_chance {
            return Decision::Idle;
        }
        if choice == self.character.cell() {
            return Decision::Stay;
        }
        self.character.set_target_cell(choice, grid);
        Decision::Step(choice)
    }
}

/// Uniform in `[min, max)`; a degenerate range yields `min`.
pub(crate) fn sample_seconds<R: Rng + ?Sized>(range: SecondsRange, rng: &mut R) -> f32 {
    if range.max > range.min {
        rng.gen_range(range.min..range.max)
    } else {
        range.min
    }
}
