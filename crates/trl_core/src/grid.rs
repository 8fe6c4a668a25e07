//! Tile grid coordinates and the fixed affine mapping into pixel space.
//!
//! Gameplay truth is discrete: every actor stands on (or is travelling
//! towards) exactly one cell. Pixel positions only exist for interpolation
//! and drawing, and are always derived from a cell via [`TileGrid::cell_center`].

use glam::Vec2;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct GridCell {
    pub x: i32,
    pub y: i32,
}

impl GridCell {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    pub const fn offset(self, dx: i32, dy: i32) -> Self {
        Self {
            x: self.x + dx,
            y: self.y + dy,
        }
    }

    /// Euclidean distance in cell units.
    pub fn distance_to(self, other: GridCell) -> f32 {
        let dx = (self.x - other.x) as f32;
        let dy = (self.y - other.y) as f32;
        dx.hypot(dy)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TileGrid {
    pub width: i32,
    pub height: i32,
    pub tile_size: i32,
}

impl TileGrid {
    pub const fn new(width: i32, height: i32, tile_size: i32) -> Self {
        Self {
            width,
            height,
            tile_size,
        }
    }

    pub fn contains(&self, cell: GridCell) -> bool {
        cell.x >= 0 && cell.x < self.width && cell.y >= 0 && cell.y < self.height
    }

    pub fn clamp(&self, cell: GridCell) -> GridCell {
        GridCell {
            x: cell.x.clamp(0, self.width - 1),
            y: cell.y.clamp(0, self.height - 1),
        }
    }

    /// Pixel-space center of `cell`. Tile halving is integer, so odd tile
    /// sizes land on the left/top pixel of the middle pair.
    pub fn cell_center(&self, cell: GridCell) -> Vec2 {
        let half = self.tile_size / 2;
        Vec2::new(
            (cell.x * self.tile_size + half) as f32,
            (cell.y * self.tile_size + half) as f32,
        )
    }

    /// Top-left pixel corner of `cell`, used for tiling backgrounds.
    pub fn cell_origin(&self, cell: GridCell) -> Vec2 {
        Vec2::new(
            (cell.x * self.tile_size) as f32,
            (cell.y * self.tile_size) as f32,
        )
    }

    pub fn center_cell(&self) -> GridCell {
        GridCell::new(self.width / 2, self.height / 2)
    }

    /// Surface size in pixels.
    pub fn pixel_size(&self) -> Vec2 {
        Vec2::new(
            (self.width * self.tile_size) as f32,
            (self.height * self.tile_size) as f32,
        )
    }

    /// Every cell in row-major order.
    pub fn cells(&self) -> impl Iterator<Item = GridCell> + '_ {
        (0..self.height).flat_map(move |y| (0..self.width).map(move |x| GridCell::new(x, y)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn grid() -> TileGrid {
        TileGrid::new(16, 12, 48)
    }

    #[test]
    fn cell_center_uses_half_tile_offset() {
        let center = grid().cell_center(GridCell::new(7, 6));
        assert_eq!(center, Vec2::new(360.0, 312.0));
        assert_eq!(grid().cell_center(GridCell::new(0, 0)), Vec2::new(24.0, 24.0));
    }

    #[test]
    fn contains_rejects_every_edge_outside() {
        let g = grid();
        assert!(g.contains(GridCell::new(0, 0)));
        assert!(g.contains(GridCell::new(15, 11)));
        assert!(!g.contains(GridCell::new(-1, 0)));
        assert!(!g.contains(GridCell::new(0, -1)));
        assert!(!g.contains(GridCell::new(16, 0)));
        assert!(!g.contains(GridCell::new(0, 12)));
    }

    #[test]
    fn clamp_pulls_cells_back_inside() {
        let g = grid();
        assert_eq!(g.clamp(GridCell::new(-3, 20)), GridCell::new(0, 11));
        assert_eq!(g.clamp(GridCell::new(4, 5)), GridCell::new(4, 5));
    }

    #[test]
    fn center_cell_and_pixel_size_match_surface() {
        let g = grid();
        assert_eq!(g.center_cell(), GridCell::new(8, 6));
        assert_eq!(g.pixel_size(), Vec2::new(768.0, 576.0));
        assert_eq!(g.cells().count(), 16 * 12);
    }

    #[test]
    fn distance_is_euclidean() {
        let a = GridCell::new(5, 5);
        assert!((a.distance_to(GridCell::new(8, 9)) - 5.0).abs() < 1e-6);
        assert_eq!(a.distance_to(a), 0.0);
    }
}
