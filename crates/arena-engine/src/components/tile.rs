use glam::Vec2;

use crate::api::types::Color;
use crate::core::geometry::{Aabb, Collider};
use crate::error::ArenaError;

/// A static obstacle. Never moves and has no velocity.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Tile {
    aabb: Aabb,
    /// Fill color for the render snapshot.
    pub color: Color,
}

impl Tile {
    /// Create a tile centered at `pos` with the given full `size`.
    pub fn new(pos: Vec2, size: Vec2) -> Result<Self, ArenaError> {
        Ok(Self {
            aabb: Aabb::from_size(pos, size)?,
            color: Color::BROWN,
        })
    }

    pub fn with_color(mut self, color: Color) -> Self {
        self.color = color;
        self
    }

    pub fn bounds(&self) -> &Aabb {
        &self.aabb
    }
}

impl Collider for Tile {
    fn aabb(&self) -> Aabb {
        self.aabb
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::geometry::collect_boxes;

    #[test]
    fn rejects_negative_size() {
        assert!(Tile::new(Vec2::ZERO, Vec2::new(-10.0, 10.0)).is_err());
    }

    #[test]
    fn collect_boxes_keeps_order() {
        let tiles = [
            Tile::new(Vec2::new(0.0, 0.0), Vec2::splat(10.0)).unwrap(),
            Tile::new(Vec2::new(50.0, 0.0), Vec2::splat(10.0)).unwrap(),
        ];
        let boxes = collect_boxes(&tiles);
        assert_eq!(boxes.len(), 2);
        assert_eq!(boxes[0].center(), Vec2::ZERO);
        assert_eq!(boxes[1].center(), Vec2::new(50.0, 0.0));
    }
}
