//! Axis-aligned collision checks
//!
//! Everything in the play area is a box: the train's hitbox (shrunk for
//! forgiving collisions) against each rock's full bounds.

use crate::sim::state::Obstacle;

/// An axis-aligned box, top-left anchored
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Rect {
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Strict AABB overlap on both axes; shared edges do not count
    pub fn intersects(&self, other: &Rect) -> bool {
        self.x < other.x + other.width
            && self.x + self.width > other.x
            && self.y < other.y + other.height
            && self.y + self.height > other.y
    }

    /// Shrink by `amount` on all four sides
    pub fn inset(&self, amount: f32) -> Rect {
        Rect::new(
            self.x + amount,
            self.y + amount,
            self.width - 2.0 * amount,
            self.height - 2.0 * amount,
        )
    }
}

/// Index of the first obstacle overlapping `hitbox`, if any. Iteration order
/// only decides which hit is reported; any hit ends the session.
pub fn first_hit(hitbox: &Rect, obstacles: &[Obstacle]) -> Option<usize> {
    obstacles.iter().position(|obs| hitbox.intersects(&obs.bounds()))
}
