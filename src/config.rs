//! Game tuning
//!
//! Every tunable scalar lives here, grouped in one immutable bundle that is
//! built once at startup and handed to the simulation. If you want to change
//! how the game feels, change it here (or drop an `automata.ron` next to the
//! binary to override without recompiling).

use serde::{Deserialize, Serialize};

/// Target simulation rate. One logical tick per rendered frame.
pub const FPS: u32 = 60;

/// How a cell that scrolled off the left edge is replaced.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum RecycleStrategy {
    /// Replace the cell in its own slot. Row-major index keeps matching the
    /// cell's (row, column), so toroidal neighbor lookups stay correct.
    #[default]
    StableSlot,
    /// Remove the cell and append the replacement at the tail, like the
    /// original game. Index-derived neighbor lookups drift after every
    /// recycle, which adds extra churn to the automaton near the edges.
    EraseAppend,
}

/// All gameplay tunables, injected at startup and never mutated.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    // === Physics ===
    /// World gravity (pixels/s^2)
    pub gravity: f32,
    /// Horizontal velocity retained per frame while grounded
    pub ground_friction: f32,
    /// Horizontal velocity retained per frame while airborne
    pub air_friction: f32,
    /// Horizontal run speed (pixels/s)
    pub move_speed: f32,
    /// Initial jump impulse (pixels/s)
    pub jump_speed: f32,

    // === Scrolling and levels ===
    /// Initial world scroll speed (pixels/s)
    pub scroll_speed: f32,
    /// Scroll speed gained per level
    pub speed_increment: f32,
    /// Frames between level changes (color + speed bump)
    pub color_change_frames: u32,

    // === Cellular automaton ===
    /// Grid spacing; also the full-size cell collider edge (pixels)
    pub cell_size: f32,
    /// Per-evaluation probability that a dead cell is born spontaneously
    pub spontaneous_rate: f64,
    /// Size animation step per tick, clamped to [0, 1]
    pub growth_step: f32,
    /// How recycled cells rejoin the grid
    pub recycle_strategy: RecycleStrategy,

    // === Player and items ===
    /// Player collision radius (pixels)
    pub player_radius: f32,
    /// Pickup radius (pixels)
    pub item_radius: f32,
    /// Points per pickup collected
    pub item_points: u32,

    // === Overlays ===
    /// Frames the title card stays up
    pub title_frames: u32,
    /// Frames the "Level N" banner stays up
    pub level_banner_frames: u32,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            gravity: 1000.0,
            ground_friction: 0.8,
            air_friction: 0.98,
            move_speed: 800.0,
            jump_speed: 950.0,
            scroll_speed: 10.0,
            speed_increment: 5.0,
            color_change_frames: 600,
            cell_size: 120.0,
            spontaneous_rate: 0.002,
            growth_step: 0.05,
            recycle_strategy: RecycleStrategy::default(),
            player_radius: 40.0,
            item_radius: 25.0,
            item_points: 10,
            title_frames: 300,
            level_banner_frames: 180,
        }
    }
}

impl GameConfig {
    /// Load tunables from a RON file, falling back to defaults if the file
    /// is missing or malformed. WASM builds always use defaults.
    pub fn load_or_default(path: &str) -> Self {
        #[cfg(not(target_arch = "wasm32"))]
        {
            match std::fs::read_to_string(path) {
                Ok(text) => match ron::from_str::<GameConfig>(&text) {
                    Ok(cfg) => {
                        println!("Loaded tuning overrides from {}", path);
                        return cfg;
                    }
                    Err(e) => {
                        eprintln!("Ignoring malformed {}: {}", path, e);
                    }
                },
                Err(_) => {} // No override file, defaults are fine
            }
        }
        #[cfg(target_arch = "wasm32")]
        let _ = path;
        Self::default()
    }
}
