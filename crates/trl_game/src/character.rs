//! Shared motion + animation + hitbox unit owned by every mobile actor.
//!
//! Player and enemies differ only in how they pick target cells; everything
//! that happens once a target exists lives here.

use glam::Vec2;
use trl_core::animation::AnimationClock;
use trl_core::bounds::Aabb;
use trl_core::grid::{GridCell, TileGrid};
use trl_core::motion::MotionState;

use crate::config::GameConfig;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntityKind {
    Player,
    Enemy,
}

/// What the host draws for one actor.
#[derive(Debug, Clone, PartialEq)]
pub struct SpriteHandle {
    pub image: String,
    pub position: Vec2,
}

#[derive(Debug, Clone)]
pub struct Character {
    pub kind: EntityKind,
    pub motion: MotionState,
    pub idle_anim: AnimationClock,
    pub move_anim: AnimationClock,
    pub hp: i32,
    pub sprite: SpriteHandle,
    hitbox_side: f32,
}

impl Character {
    pub fn new(
        kind: EntityKind,
        cell: GridCell,
        speed: f32,
        idle_frames: &[&str],
        move_frames: &[&str],
        config: &GameConfig,
    ) -> Self {
        let motion = MotionState::at_cell(cell, speed, &config.grid());
        let idle_anim =
            AnimationClock::looping(idle_frames.iter().copied(), config.idle_frame_duration);
        let move_anim =
            AnimationClock::looping(move_frames.iter().copied(), config.move_frame_duration);
        let sprite = SpriteHandle {
            image: idle_anim.current().to_string(),
            position: motion.position,
        };
        Self {
            kind,
            motion,
            idle_anim,
            move_anim,
            hp: config.starting_hp,
            sprite,
            hitbox_side: config.hitbox_side(),
        }
    }

    pub fn cell(&self) -> GridCell {
        self.motion.cell
    }

    #[allow(dead_code)]
    pub fn position(&self) -> Vec2 {
        self.motion.position
    }

    pub fn is_moving(&self) -> bool {
        self.motion.moving
    }

    pub fn set_target_cell(&mut self, cell: GridCell, grid: &TileGrid) {
        self.motion.set_target_cell(cell, grid);
    }

    /// Motion first, then the animation matching the post-motion state, so
    /// the sprite never lags the position by a frame.
    pub fn advance(&mut self, dt: f32, grid: &TileGrid) {
        self.motion.advance(dt, grid);
        let image = if self.motion.moving {
            self.move_anim.advance(dt)
        } else {
            self.idle_anim.advance(dt)
        };
        if self.sprite.image != image {
            self.sprite.image.clear();
            self.sprite.image.push_str(image);
        }
        self.sprite.position = self.motion.position;
    }

    pub fn hitbox(&self) -> Aabb {
        Aabb::square(self.motion.position, self.hitbox_side)
    }
}
