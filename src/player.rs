//! The player
//!
//! A circle with box collision. Kinematics live in `physics`; this module
//! owns the state that the renderer reads, including the display color,
//! which doubles as the entire "animation system": it encodes airborne vs
//! grounded, facing, and a two-frame run cycle.

use macroquad::prelude::{vec2, Color, Rect, Vec2, BLUE, GREEN, MAGENTA, RED, YELLOW};

const CYAN: Color = Color::new(0.0, 1.0, 1.0, 1.0);

/// Below this horizontal speed the player counts as standing still.
const RUN_THRESHOLD: f32 = 0.1;

#[derive(Debug, Clone)]
pub struct Player {
    pub pos: Vec2,
    pub vel: Vec2,
    pub radius: f32,
    pub grounded: bool,
    pub facing_right: bool,
}

impl Player {
    /// Spawn at screen center, inside the no-spawn zone, falling.
    pub fn spawn(world_width: f32, world_height: f32, radius: f32) -> Self {
        Self {
            pos: vec2(world_width / 2.0, world_height / 2.0),
            vel: Vec2::ZERO,
            radius,
            grounded: false,
            facing_right: true,
        }
    }

    /// Collision box: the circle's bounding square.
    pub fn rect(&self) -> Rect {
        Rect::new(
            self.pos.x - self.radius,
            self.pos.y - self.radius,
            self.radius * 2.0,
            self.radius * 2.0,
        )
    }

    /// Display color for the current tick.
    ///
    /// Airborne: yellow right / blue left. Running on the ground: a
    /// two-color strobe keyed on tick parity (green/magenta right,
    /// red/cyan left). Standing: green right / red left.
    pub fn display_color(&self, global_tick: u64) -> Color {
        let running = self.vel.x.abs() > RUN_THRESHOLD && self.grounded;
        if !self.grounded {
            if self.facing_right { YELLOW } else { BLUE }
        } else if running {
            let even = global_tick % 2 == 0;
            if self.facing_right {
                if even { GREEN } else { MAGENTA }
            } else if even {
                RED
            } else {
                CYAN
            }
        } else if self.facing_right {
            GREEN
        } else {
            RED
        }
    }
}
