//! Frame drawing
//!
//! Pure presentation: reads the attempt's public state once per frame and
//! issues macroquad draw calls. Nothing here mutates the simulation, so the
//! whole module stays out of the tests.

use macroquad::prelude::*;

use crate::sim::Attempt;

const ITEM_COLOR: Color = Color::new(1.0, 0.843, 0.0, 1.0); // gold
const TEXT_DARK: Color = Color::new(0.0, 0.0, 0.0, 1.0);

/// Text with a fat white underlay so it reads against any cell color.
fn draw_outlined_text(text: &str, x: f32, y: f32, size: f32) {
    for (dx, dy) in [
        (-2.0, 0.0), (2.0, 0.0), (0.0, -2.0), (0.0, 2.0),
        (-2.0, -2.0), (2.0, -2.0), (-2.0, 2.0), (2.0, 2.0),
    ] {
        draw_text(text, x + dx, y + dy, size, WHITE);
    }
    draw_text(text, x, y, size, TEXT_DARK);
}

/// Same, centered on the screen.
fn draw_centered_text(text: &str, size: f32, width: f32, height: f32) {
    let dims = measure_text(text, None, size as u16, 1.0);
    let x = (width - dims.width) / 2.0;
    let y = (height + dims.height) / 2.0;
    draw_outlined_text(text, x, y, size);
}

/// Draw one frame of the attempt.
pub fn draw_frame(attempt: &Attempt) {
    clear_background(WHITE);

    // Cells: a shrinking corpse still renders until it reaches zero size
    for cell in &attempt.grid.cells {
        if cell.size_factor <= 0.0 {
            continue;
        }
        let rect = cell.rect(attempt.grid.cell_size);
        draw_rectangle(rect.x, rect.y, rect.w, rect.h, attempt.palette.color(cell.color_index));
    }

    for item in &attempt.items {
        if !item.collected {
            draw_circle(item.pos.x, item.pos.y, item.radius, ITEM_COLOR);
        }
    }

    let player = &attempt.player;
    draw_circle(
        player.pos.x,
        player.pos.y,
        player.radius,
        player.display_color(attempt.global_tick),
    );

    if attempt.level_banner_ticks > 0 {
        let banner = format!("Level {}", attempt.level);
        draw_centered_text(&banner, 96.0, attempt.world_width, attempt.world_height);
    }

    if attempt.title_ticks > 0 {
        draw_centered_text("automata", 128.0, attempt.world_width, attempt.world_height);
    }

    draw_outlined_text(&format!("Score: {}", attempt.score), 10.0, 30.0, 32.0);
}
