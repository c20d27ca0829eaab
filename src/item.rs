//! Recoverable pickups
//!
//! One item drops in with every recycled column. Items fall under gravity,
//! come to rest on solid cells, and are worth points when the player touches
//! them. Collected items stay in the list (inert) until they scroll off the
//! left edge, at which point they are dropped along with uncollected ones.

use macroquad::prelude::{Vec2, Rect};

#[derive(Debug, Clone)]
pub struct Item {
    pub pos: Vec2,
    pub vel: Vec2,
    /// Terminal flag: a collected item no longer updates, collides or renders
    pub collected: bool,
    pub radius: f32,
}

impl Item {
    pub fn new(pos: Vec2, radius: f32) -> Self {
        Self { pos, vel: Vec2::ZERO, collected: false, radius }
    }

    /// Bounding box used for cell overlap tests.
    pub fn rect(&self) -> Rect {
        Rect::new(
            self.pos.x - self.radius,
            self.pos.y - self.radius,
            self.radius * 2.0,
            self.radius * 2.0,
        )
    }

    /// True once the item has scrolled past the left boundary and should be
    /// removed, collected or not.
    pub fn off_screen(&self) -> bool {
        self.pos.x < -self.radius
    }
}
