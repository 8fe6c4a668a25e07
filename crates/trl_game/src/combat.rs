//! Player/enemy contact: damage, knockback, and the death transition.
//!
//! Every overlapping enemy deals its own point of damage, so several enemies
//! stacked on the player hurt several times in one frame.

use trl_core::audio::{play_sound_best_effort, AudioBackend};
use trl_core::grid::{GridCell, TileGrid};

use crate::config::assets;
use crate::enemy::Enemy;
use crate::player::Player;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContactOutcome {
    Clear,
    Hit,
    /// This hit took the player from alive to dead.
    Fatal,
}

/// Check one enemy against the player and apply the consequences.
pub fn resolve_contact(
    player: &mut Player,
    enemy: &Enemy,
    grid: &TileGrid,
    audio: &mut dyn AudioBackend,
) -> ContactOutcome {
    if !enemy.character.hitbox().intersects(&player.character.hitbox()) {
        return ContactOutcome::Clear;
    }

    let was_alive = !player.is_dead();
    player.character.hp -= 1;
    play_sound_best_effort(audio, assets::SOUND_HIT);
    log::debug!(
        "Player hit by enemy at {:?}, hp now {}",
        enemy.character.cell(),
        player.character.hp
    );

    if !player.character.is_moving() {
        if let Some(cell) = knockback_cell(player.character.cell(), enemy.character.cell(), grid) {
            player.character.set_target_cell(cell, grid);
        }
    }

    if was_alive && player.is_dead() {
        play_sound_best_effort(audio, assets::SOUND_DEATH);
        ContactOutcome::Fatal
    } else {
        ContactOutcome::Hit
    }
}

/// One cell directly away from `enemy` on each differing axis, clamped to the
/// grid. `None` when both stand on the same cell.
pub fn knockback_cell(player: GridCell, enemy: GridCell, grid: &TileGrid) -> Option<GridCell> {
    let dx = player.x - enemy.x;
    let dy = player.y - enemy.y;
    if dx == 0 && dy == 0 {
        return None;
    }
    Some(grid.clamp(player.offset(dx.signum(), dy.signum())))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::GameConfig;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;
    use trl_core::audio::RecordingAudio;

    fn enemy_at(cell: GridCell, config: &GameConfig) -> Enemy {
        let mut rng = ChaCha8Rng::seed_from_u64(0);
        Enemy::new(cell, 2, config, &mut rng)
    }

    #[test]
    fn knockback_pushes_away_on_each_axis() {
        let grid = TileGrid::new(16, 12, 48);
        let p = GridCell::new(5, 5);
        assert_eq!(knockback_cell(p, GridCell::new(6, 5), &grid), Some(GridCell::new(4, 5)));
        assert_eq!(knockback_cell(p, GridCell::new(5, 3), &grid), Some(GridCell::new(5, 6)));
        assert_eq!(knockback_cell(p, GridCell::new(4, 4), &grid), Some(GridCell::new(6, 6)));
        assert_eq!(knockback_cell(p, p, &grid), None);
    }

    #[test]
    fn knockback_is_clamped_to_grid() {
        let grid = TileGrid::new(16, 12, 48);
        let p = GridCell::new(0, 11);
        assert_eq!(knockback_cell(p, GridCell::new(1, 10), &grid), Some(GridCell::new(0, 11)));
    }

    #[test]
    fn no_overlap_means_no_damage() {
        let config = GameConfig::default();
        let grid = config.grid();
        let mut player = Player::new(GridCell::new(5, 5), &config);
        let enemy = enemy_at(GridCell::new(6, 5), &config);
        let mut audio = RecordingAudio::new();

        assert_eq!(resolve_contact(&mut player, &enemy, &grid, &mut audio), ContactOutcome::Clear);
        assert_eq!(player.character.hp, 3);
        assert!(audio.events.is_empty());
    }

    #[test]
    fn overlap_damages_plays_hit_and_knocks_back() {
        let config = GameConfig::default();
        let grid = config.grid();
        let mut player = Player::new(GridCell::new(5, 5), &config);
        let mut enemy = enemy_at(GridCell::new(6, 5), &config);
        enemy.character.motion.position.x -= 30.0;
        let mut audio = RecordingAudio::new();

        assert_eq!(resolve_contact(&mut player, &enemy, &grid, &mut audio), ContactOutcome::Hit);
        assert_eq!(player.character.hp, 2);
        assert_eq!(audio.sound_count("hit"), 1);
        assert!(player.character.is_moving());
        assert_eq!(player.character.cell(), GridCell::new(4, 5));
    }

    #[test]
    fn moving_player_takes_damage_without_knockback() {
        let config = GameConfig::default();
        let grid = config.grid();
        let mut player = Player::new(GridCell::new(5, 5), &config);
        player.character.set_target_cell(GridCell::new(5, 4), &grid);
        let enemy = enemy_at(GridCell::new(5, 5), &config);
        let mut audio = RecordingAudio::new();

        assert_eq!(resolve_contact(&mut player, &enemy, &grid, &mut audio), ContactOutcome::Hit);
        assert_eq!(player.character.hp, 2);
        assert_eq!(player.character.cell(), GridCell::new(5, 4));
    }

    #[test]
    fn last_hit_point_is_fatal_and_plays_death() {
        let config = GameConfig::default();
        let grid = config.grid();
        let mut player = Player::new(GridCell::new(5, 5), &config);
        player.character.hp = 1;
        let enemy = enemy_at(GridCell::new(5, 5), &config);
        let mut audio = RecordingAudio::new();

        assert_eq!(resolve_contact(&mut player, &enemy, &grid, &mut audio), ContactOutcome::Fatal);
        assert_eq!(player.character.hp, 0);
        assert_eq!(audio.sound_count("death"), 1);
    }

    #[test]
    fn each_overlapping_enemy_deals_damage() {
        let config = GameConfig::default();
        let grid = config.grid();
        let mut player = Player::new(GridCell::new(5, 5), &config);
        player.character.hp = 10;
        let enemies: Vec<Enemy> = (0..4).map(|_| enemy_at(GridCell::new(5, 5), &config)).collect();
        let mut audio = RecordingAudio::new();

        for enemy in &enemies {
            resolve_contact(&mut player, enemy, &grid, &mut audio);
        }
        assert_eq!(player.character.hp, 6);
        assert_eq!(audio.sound_count("hit"), 4);
    }

    #[test]
    fn audio_failure_does_not_change_outcome() {
        let config = GameConfig::default();
        let grid = config.grid();
        let mut player = Player::new(GridCell::new(5, 5), &config);
        player.character.hp = 1;
        let enemy = enemy_at(GridCell::new(5, 5), &config);
        let mut audio = RecordingAudio::failing();

        assert_eq!(resolve_contact(&mut player, &enemy, &grid, &mut audio), ContactOutcome::Fatal);
        assert_eq!(player.character.hp, 0);
    }
}
