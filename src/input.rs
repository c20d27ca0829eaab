//! Input snapshot
//!
//! The simulation consumes one immutable snapshot of input state per tick,
//! never the input device directly. Tests build snapshots by hand; the game
//! loop polls macroquad once per frame.

use macroquad::prelude::{is_key_down, screen_height, screen_width, KeyCode};

/// Everything the simulation wants to know about this frame's input.
#[derive(Debug, Clone, Copy, Default)]
pub struct InputSnapshot {
    pub left: bool,
    pub right: bool,
    pub jump: bool,
    pub quit: bool,
    /// New (width, height) if the window changed size since last frame
    pub resize: Option<(f32, f32)>,
}

impl InputSnapshot {
    /// Poll the keyboard and window state. `last_size` tracks the previous
    /// frame's window dimensions so resizes surface as one-shot events.
    pub fn poll(last_size: &mut (f32, f32)) -> Self {
        let size = (screen_width(), screen_height());
        let resize = if size != *last_size {
            *last_size = size;
            Some(size)
        } else {
            None
        };

        Self {
            left: is_key_down(KeyCode::A) || is_key_down(KeyCode::Left),
            right: is_key_down(KeyCode::D) || is_key_down(KeyCode::Right),
            jump: is_key_down(KeyCode::W) || is_key_down(KeyCode::Up),
            quit: is_key_down(KeyCode::Escape),
            resize,
        }
    }

    /// Snapshot with the given keys held.
    #[cfg(test)]
    pub fn holding(left: bool, right: bool, jump: bool) -> Self {
        Self { left, right, jump, ..Self::default() }
    }
}
