use glam::Vec2;

/// Axis-aligned box stored as center plus half extents.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Aabb {
    pub center_x: f32,
    pub center_y: f32,
    pub half_w: f32,
    pub half_h: f32,
}

impl Aabb {
    pub fn from_center(center: Vec2, width: f32, height: f32) -> Self {
        Self {
            center_x: center.x,
            center_y: center.y,
            half_w: width * 0.5,
            half_h: height * 0.5,
        }
    }

    pub fn square(center: Vec2, side: f32) -> Self {
        Self::from_center(center, side, side)
    }

    pub fn min(&self) -> Vec2 {
        Vec2::new(self.center_x - self.half_w, self.center_y - self.half_h)
    }

    pub fn max(&self) -> Vec2 {
        Vec2::new(self.center_x + self.half_w, self.center_y + self.half_h)
    }

    /// Strict overlap: boxes that only share an edge do not intersect.
    pub fn intersects(&self, other: &Aabb) -> bool {
        let (a_min, a_max) = (self.min(), self.max());
        let (b_min, b_max) = (other.min(), other.max());
        a_min.x < b_max.x && b_min.x < a_max.x && a_min.y < b_max.y && b_min.y < a_max.y
    }

    /// Half-open containment: left/top edges are inside, right/bottom are not.
    pub fn contains_point(&self, point: Vec2) -> bool {
        let (min, max) = (self.min(), self.max());
        point.x >= min.x && point.x < max.x && point.y >= min.y && point.y < max.y
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn overlapping_boxes_intersect_both_ways() {
        let a = Aabb::square(Vec2::new(24.0, 24.0), 28.8);
        let b = Aabb::square(Vec2::new(40.0, 30.0), 28.8);
        assert!(a.intersects(&b));
        assert!(b.intersects(&a));
    }

    #[test]
    fn touching_edges_do_not_intersect() {
        let a = Aabb::square(Vec2::new(0.0, 0.0), 10.0);
        let b = Aabb::square(Vec2::new(10.0, 0.0), 10.0);
        assert!(!a.intersects(&b));
    }

    #[test]
    fn hitboxes_on_adjacent_cells_are_separate() {
        let a = Aabb::square(Vec2::new(24.0, 24.0), 48.0 * 0.6);
        let b = Aabb::square(Vec2::new(72.0, 24.0), 48.0 * 0.6);
        assert!(!a.intersects(&b));
    }

    #[test]
    fn contains_point_is_half_open() {
        let b = Aabb::from_center(Vec2::new(100.0, 50.0), 200.0, 48.0);
        assert!(b.contains_point(Vec2::new(0.0, 26.0)));
        assert!(b.contains_point(Vec2::new(100.0, 50.0)));
        assert!(!b.contains_point(Vec2::new(200.0, 50.0)));
        assert!(!b.contains_point(Vec2::new(100.0, 74.0)));
    }
}
