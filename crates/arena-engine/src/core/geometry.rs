// core/geometry.rs
//
// Vector helpers and the axis-aligned box used for all collision geometry.
// Coordinates are Y-down: `top` is the smaller Y value.

use glam::Vec2;

use crate::error::ArenaError;

/// Scale `v` down to length `max` if it is longer; otherwise return it unchanged.
/// A zero vector is returned as-is.
pub fn clamp_magnitude(v: Vec2, max: f32) -> Vec2 {
    let len_sq = v.length_squared();
    if len_sq == 0.0 || len_sq <= max * max {
        return v;
    }
    v * (max / len_sq.sqrt())
}

/// Snap each component whose magnitude is at or below `threshold` to exactly zero.
pub fn apply_deadzone(v: Vec2, threshold: f32) -> Vec2 {
    let snap = |c: f32| if c.abs() <= threshold { 0.0 } else { c };
    Vec2::new(snap(v.x), snap(v.y))
}

/// One side of an [`Aabb`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Edge {
    Left,
    Right,
    Top,
    Bottom,
}

/// Axis-aligned rectangle stored as center + half extents.
/// Edges are derived on demand so they can never drift from the center.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Aabb {
    center: Vec2,
    half_extents: Vec2,
}

impl Aabb {
    /// Build a box from its center and half extents.
    /// Extents must be strictly positive and finite.
    pub fn new(center: Vec2, half_extents: Vec2) -> Result<Self, ArenaError> {
        let valid = half_extents.x > 0.0
            && half_extents.y > 0.0
            && half_extents.is_finite()
            && center.is_finite();
        if !valid {
            return Err(ArenaError::InvalidGeometry {
                width: half_extents.x * 2.0,
                height: half_extents.y * 2.0,
            });
        }
        Ok(Self { center, half_extents })
    }

    /// Build a box from its center and full size.
    pub fn from_size(center: Vec2, size: Vec2) -> Result<Self, ArenaError> {
        Self::new(center, size * 0.5)
    }

    pub fn center(&self) -> Vec2 {
        self.center
    }

    pub fn half_extents(&self) -> Vec2 {
        self.half_extents
    }

    pub fn size(&self) -> Vec2 {
        self.half_extents * 2.0
    }

    pub fn left(&self) -> f32 {
        self.center.x - self.half_extents.x
    }

    pub fn right(&self) -> f32 {
        self.center.x + self.half_extents.x
    }

    pub fn top(&self) -> f32 {
        self.center.y - self.half_extents.y
    }

    pub fn bottom(&self) -> f32 {
        self.center.y + self.half_extents.y
    }

    pub fn set_center(&mut self, center: Vec2) {
        self.center = center;
    }

    /// A copy of this box moved by `offset`.
    pub fn translated(&self, offset: Vec2) -> Self {
        Self {
            center: self.center + offset,
            half_extents: self.half_extents,
        }
    }

    /// Strict overlap on both axes. Boxes that only share an edge do not overlap.
    pub fn overlaps(&self, other: &Aabb) -> bool {
        self.left() < other.right()
            && self.right() > other.left()
            && self.top() < other.bottom()
            && self.bottom() > other.top()
    }

    pub fn contains_point(&self, point: Vec2) -> bool {
        point.x >= self.left()
            && point.x <= self.right()
            && point.y >= self.top()
            && point.y <= self.bottom()
    }

    /// Move the box so the given edge lies at `value`. Size is unchanged.
    ///
    /// Rounding in `value ± half_extent` can land the edge one ulp past
    /// `value`; the center is then stepped back until the edge sits at or
    /// behind it. An aligned box never reaches into what it was aligned to.
    pub fn align_edge(&mut self, edge: Edge, value: f32) {
        match edge {
            Edge::Left => self.center.x = value + self.half_extents.x,
            Edge::Right => self.center.x = value - self.half_extents.x,
            Edge::Top => self.center.y = value + self.half_extents.y,
            Edge::Bottom => self.center.y = value - self.half_extents.y,
        }
        let step = align_step(value, self.half_extents);
        for _ in 0..MAX_ALIGN_NUDGES {
            match edge {
                Edge::Left if self.left() < value => self.center.x += step.x,
                Edge::Right if self.right() > value => self.center.x -= step.x,
                Edge::Top if self.top() < value => self.center.y += step.y,
                Edge::Bottom if self.bottom() > value => self.center.y -= step.y,
                _ => break,
            }
        }
    }
}

const MAX_ALIGN_NUDGES: usize = 4;

// Roughly one ulp at the magnitude of the aligned edge.
fn align_step(value: f32, half_extents: Vec2) -> Vec2 {
    Vec2::new(
        value.abs().max(half_extents.x) * f32::EPSILON,
        value.abs().max(half_extents.y) * f32::EPSILON,
    )
}

/// Anything that can act as an obstacle for a moving body.
pub trait Collider {
    fn aabb(&self) -> Aabb;
}

impl Collider for Aabb {
    fn aabb(&self) -> Aabb {
        *self
    }
}

/// Snapshot a collection into an ordered obstacle list.
pub fn collect_boxes<C: Collider>(items: &[C]) -> Vec<Aabb> {
    items.iter().map(Collider::aabb).collect()
}
