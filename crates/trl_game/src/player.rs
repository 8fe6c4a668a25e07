use trl_core::grid::{GridCell, TileGrid};
use trl_core::input::{InputState, Key};

use crate::character::{Character, EntityKind};
use crate::config::{assets, GameConfig};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Left,
    Right,
    Up,
    Down,
}

impl Direction {
    /// Highest-priority first. Only one direction is honored per frame.
    pub const PRIORITY: [Direction; 4] = [
        Direction::Left,
        Direction::Right,
        Direction::Up,
        Direction::Down,
    ];

    pub const fn offset(self) -> (i32, i32) {
        match self {
            Self::Left => (-1, 0),
            Self::Right => (1, 0),
            Self::Up => (0, -1),
            Self::Down => (0, 1),
        }
    }

    const fn key(self) -> Key {
        match self {
            Self::Left => Key::Left,
            Self::Right => Key::Right,
            Self::Up => Key::Up,
            Self::Down => Key::Down,
        }
    }

    /// First held direction in priority order, if any.
    pub fn from_input(input: &InputState) -> Option<Direction> {
        Self::PRIORITY
            .into_iter()
            .find(|dir| input.is_held(dir.key()))
    }
}

#[derive(Debug, Clone)]
pub struct Player {
    pub character: Character,
    #[allow(dead_code)]
    pub score: u32,
}

impl Player {
    pub fn new(cell: GridCell, config: &GameConfig) -> Self {
        Self {
            character: Character::new(
                EntityKind::Player,
                cell,
                config.player_speed,
                assets::PLAYER_IDLE,
                assets::PLAYER_MOVE,
                config,
            ),
            score: 0,
        }
    }

    /// Step one cell towards `direction`. Ignored while a step is still in
    /// flight or when the destination is off the grid. Returns whether a new
    /// target was issued.
    pub fn try_move(&mut self, direction: Direction, grid: &TileGrid) -> bool {
        if self.character.is_moving() {
            return false;
        }
        let (dx, dy) = direction.offset();
        let next = self.character.cell().offset(dx, dy);
        if !grid.contains(next) {
            log::trace!("Move {:?} from {:?} rejected: off grid", direction, self.character.cell());
            return false;
        }
        self.character.set_target_cell(next, grid);
        true
    }

    pub fn handle_input(&mut self, input: &InputState, grid: &TileGrid) -> bool {
        match Direction::from_input(input) {
            Some(direction) => self.try_move(direction, grid),
            None => false,
        }
    }

    pub fn is_dead(&self) -> bool {
        self.character.hp <= 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Vec2;

    fn setup() -> (GameConfig, TileGrid, Player) {
        let config = GameConfig::default();
        let grid = config.grid();
        let player = Player::new(grid.center_cell(), &config);
        (config, grid, player)
    }

    #[test]
    fn move_left_from_center_reaches_exact_pixel_target() {
        let (_, grid, mut player) = setup();
        assert_eq!(player.character.cell(), GridCell::new(8, 6));

        assert!(player.try_move(Direction::Left, &grid));
        assert_eq!(player.character.cell(), GridCell::new(7, 6));
        assert_eq!(player.character.motion.target, Vec2::new(360.0, 312.0));

        player.character.advance(1.0 / 6.0, &grid);
        assert_eq!(player.character.position(), Vec2::new(360.0, 312.0));
        assert!(!player.character.is_moving());
    }

    #[test]
    fn try_move_is_a_no_op_while_moving() {
        let (_, grid, mut player) = setup();
        assert!(player.try_move(Direction::Up, &grid));
        player.character.advance(0.05, &grid);

        let before_motion = player.character.motion;
        for dir in Direction::PRIORITY {
            assert!(!player.try_move(dir, &grid));
            assert_eq!(player.character.motion, before_motion);
        }
    }

    #[test]
    fn off_grid_moves_are_rejected_silently() {
        let config = GameConfig::default();
        let grid = config.grid();
        let mut player = Player::new(GridCell::new(0, 0), &config);
        assert!(!player.try_move(Direction::Left, &grid));
        assert!(!player.try_move(Direction::Up, &grid));
        assert!(!player.character.is_moving());
        assert_eq!(player.character.cell(), GridCell::new(0, 0));

        let mut corner = Player::new(GridCell::new(15, 11), &config);
        assert!(!corner.try_move(Direction::Right, &grid));
        assert!(!corner.try_move(Direction::Down, &grid));
    }

    #[test]
    fn input_priority_is_left_right_up_down() {
        let mut input = InputState::new();
        input.key_down(Key::Down);
        assert_eq!(Direction::from_input(&input), Some(Direction::Down));
        input.key_down(Key::Up);
        assert_eq!(Direction::from_input(&input), Some(Direction::Up));
        input.key_down(Key::Right);
        assert_eq!(Direction::from_input(&input), Some(Direction::Right));
        input.key_down(Key::Left);
        assert_eq!(Direction::from_input(&input), Some(Direction::Left));

        input.key_up(Key::Left);
        input.key_up(Key::Right);
        assert_eq!(Direction::from_input(&input), Some(Direction::Up));
    }

    #[test]
    fn no_direction_held_means_no_move() {
        let (_, grid, mut player) = setup();
        let mut input = InputState::new();
        input.key_down(Key::Confirm);
        assert!(!player.handle_input(&input, &grid));
        assert!(!player.character.is_moving());
    }

    #[test]
    fn held_key_with_blocked_priority_does_not_fall_through() {
        let config = GameConfig::default();
        let grid = config.grid();
        let mut player = Player::new(GridCell::new(0, 5), &config);
        let mut input = InputState::new();
        input.key_down(Key::Left);
        input.key_down(Key::Down);
        // Left wins and is off-grid; Down is not tried.
        assert!(!player.handle_input(&input, &grid));
        assert_eq!(player.character.cell(), GridCell::new(0, 5));
    }
}
