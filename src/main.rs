//! automata: an endless-scrolling platformer whose terrain is alive
//!
//! The level is a Game-of-Life variant running on a coarse grid. Platforms
//! are born, grow, shrink and die under the player's feet while the whole
//! world scrolls left. Survive the scroll, collect pickups, don't fall.
//!
//! Controls: A/D or arrows to run, W/Up to jump, Escape to quit. Dying
//! regenerates the world and starts a fresh attempt.

/// Version from Cargo.toml
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

mod config;
mod grid;
mod input;
mod item;
mod palette;
mod physics;
mod player;
mod render;
mod sim;

use macroquad::prelude::*;
use ::rand::rngs::StdRng;
use ::rand::SeedableRng;

use config::{GameConfig, FPS};
use input::InputSnapshot;
use sim::{Attempt, TickOutcome};

fn window_conf() -> Conf {
    Conf {
        window_title: format!("automata v{}", VERSION),
        window_width: 1920,
        window_height: 1080,
        window_resizable: true,
        high_dpi: true,
        ..Default::default()
    }
}

#[macroquad::main(window_conf)]
async fn main() {
    // Initialize crash logging FIRST (before any other code)
    #[cfg(not(target_arch = "wasm32"))]
    crashlog::setup!(crashlog::cargo_metadata!().capitalized(), false);

    let cfg = GameConfig::load_or_default("automata.ron");
    let dt = 1.0 / FPS as f32;

    // Seeded once per process from the wall clock; attempts reuse the same
    // generator rather than reseeding
    let mut rng = StdRng::seed_from_u64((miniquad::date::now() * 1000.0) as u64);

    let mut last_size = (screen_width(), screen_height());
    let mut attempt = Attempt::new(last_size.0, last_size.1, &cfg, &mut rng);

    loop {
        let frame_start = get_time();
        let input = InputSnapshot::poll(&mut last_size);

        match attempt.tick(&input, &cfg, &mut rng, dt) {
            TickOutcome::Running => {}
            TickOutcome::AttemptOver => {
                println!(
                    "Attempt over: level {}, score {}",
                    attempt.level, attempt.score
                );
                attempt = Attempt::new(last_size.0, last_size.1, &cfg, &mut rng);
            }
            TickOutcome::Quit => break,
        }

        render::draw_frame(&attempt);

        // One logical tick per rendered frame: burn off any leftover frame
        // time so the fixed timestep holds even without vsync
        #[cfg(not(target_arch = "wasm32"))]
        {
            let remaining = f64::from(dt) - (get_time() - frame_start);
            if remaining > 0.0 {
                std::thread::sleep(std::time::Duration::from_secs_f64(remaining));
            }
        }
        #[cfg(target_arch = "wasm32")]
        let _ = frame_start;

        next_frame().await;
    }
}
