// core/collision.rs
//
// Axis-separated collision response against rectangular obstacles.
// Each obstacle is handled on its own: two probes (X-only and Y-only) are
// swept from the body's current box, and whichever overlaps snaps the body
// flush against the obstacle and kills velocity on that axis.
//
// A body that already overlaps an obstacle while not moving on an axis is
// left where it is; only a moving probe can trigger a correction. A probe
// also only snaps against an obstacle whose near edge lies ahead of the
// body's trailing edge on that axis, so a body resting on a tile is never
// pushed sideways to the tile's far end.

use glam::Vec2;

use crate::core::body::KinematicBody;
use crate::core::geometry::{Aabb, Edge};

/// Stateless resolver for kinematic bodies.
pub struct CollisionResolver;

impl CollisionResolver {
    /// Clear the grounded flag, then resolve every collection in the given order.
    pub fn resolve_all(body: &mut KinematicBody, collections: &[&[Aabb]]) {
        body.grounded = false;
        for obstacles in collections {
            Self::resolve(body, obstacles);
        }
    }

    /// Resolve the body against one obstacle collection.
    /// Sets `grounded` when a downward sweep is stopped.
    pub fn resolve(body: &mut KinematicBody, obstacles: &[Aabb]) {
        for obstacle in obstacles {
            let start = body.aabb;
            let horizontal = start.translated(Vec2::new(body.velocity.x, 0.0));
            let vertical = start.translated(Vec2::new(0.0, body.velocity.y));

            if body.velocity.x != 0.0 && horizontal.overlaps(obstacle) {
                if body.velocity.x > 0.0 {
                    if obstacle.left() > start.left() {
                        body.aabb.align_edge(Edge::Right, obstacle.left());
                        body.velocity.x = 0.0;
                    }
                } else if obstacle.right() < start.right() {
                    body.aabb.align_edge(Edge::Left, obstacle.right());
                    body.velocity.x = 0.0;
                }
            }

            if body.velocity.y != 0.0 && vertical.overlaps(obstacle) {
                if body.velocity.y > 0.0 {
                    if obstacle.top() > start.top() {
                        body.aabb.align_edge(Edge::Bottom, obstacle.top());
                        body.velocity.y = 0.0;
                        body.grounded = true;
                    }
                } else if obstacle.bottom() < start.bottom() {
                    body.aabb.align_edge(Edge::Top, obstacle.bottom());
                    body.velocity.y = 0.0;
                }
            }
        }
        body.position = body.aabb.center();
    }
}
