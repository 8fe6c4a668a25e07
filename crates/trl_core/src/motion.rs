//! Continuous motion between discrete grid cells.
//!
//! Logical position changes the instant a new target cell is issued; the
//! pixel position then travels towards that cell's center in a straight line
//! at constant speed over subsequent `advance` calls. The step ratio is capped
//! at 1 so motion never overshoots, and anything closer than
//! [`ARRIVAL_EPSILON`] snaps onto the target so arrival is exact rather than
//! asymptotic.

use glam::Vec2;

use crate::grid::{GridCell, TileGrid};

/// Pixel distance under which an actor counts as having arrived.
pub const ARRIVAL_EPSILON: f32 = 1.0;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MotionState {
    pub cell: GridCell,
    pub position: Vec2,
    pub target: Vec2,
    /// Grid cells per second.
    pub speed: f32,
    pub moving: bool,
    /// Degrees, from `atan2(dy, dx)` of the last step taken.
    pub facing_deg: f32,
}

impl MotionState {
    /// Resting at `cell`, with no motion pending.
    pub fn at_cell(cell: GridCell, speed: f32, grid: &TileGrid) -> Self {
        let center = grid.cell_center(cell);
        Self {
            cell,
            position: center,
            target: center,
            speed,
            moving: false,
            facing_deg: 0.0,
        }
    }

    /// Point the actor at `cell`. Does not move it; `advance` does.
    pub fn set_target_cell(&mut self, cell: GridCell, grid: &TileGrid) {
        self.cell = cell;
        self.target = grid.cell_center(cell);
        self.moving = true;
    }

    pub fn advance(&mut self, dt: f32, grid: &TileGrid) {
        if !self.moving {
            self.position = self.target;
            return;
        }

        let delta = self.target - self.position;
        let distance = delta.length();
        if distance < ARRIVAL_EPSILON {
            self.arrive();
            return;
        }

        let step = self.speed * dt.max(0.0) * grid.tile_size as f32;
        let ratio = (step / distance).min(1.0);
        if ratio > 0.0 {
            self.position += delta * ratio;
            self.facing_deg = delta.y.atan2(delta.x).to_degrees();
        }

        // Arrival lands on the same advance as the final step, not one frame later.
        if ratio >= 1.0 || self.position.distance(self.target) < ARRIVAL_EPSILON {
            self.arrive();
        }
    }

    /// Seconds a full-speed trip from the current position to the target takes.
    pub fn remaining_time(&self, grid: &TileGrid) -> f32 {
        let px_per_sec = self.speed * grid.tile_size as f32;
        if px_per_sec <= 0.0 {
            return f32::INFINITY;
        }
        self.position.distance(self.target) / px_per_sec
    }

    fn arrive(&mut self) {
        self.position = self.target;
        self.moving = false;
    }
}
