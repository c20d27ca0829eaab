//! Physics and collision
//!
//! A fast approximate solver, not a constraint solver. The player's box is
//! resolved against solid cells one at a time, in grid iteration order,
//! along the axis of least penetration; the box is recomputed after every
//! push so later cells in the same tick see the corrected position. The
//! order dependence is deliberate and tests pin it.
//!
//! Items get an even cheaper treatment: vertical-only resolution that sets
//! them on top of whatever solid cell they overlap. Items never collide
//! with each other and never resolve horizontally.

use macroquad::prelude::Rect;

use crate::config::GameConfig;
use crate::grid::Grid;
use crate::input::InputSnapshot;
use crate::item::Item;
use crate::player::Player;

/// Apply this tick's input and forces to the player's velocity. Horizontal
/// input overwrites `vel.x` outright; with no key held, friction alone
/// bleeds it off. Position is not touched here; the world scrolls between
/// force application and integration.
pub fn apply_player_forces(player: &mut Player, input: &InputSnapshot, cfg: &GameConfig, dt: f32) {
    if input.left {
        player.vel.x = -cfg.move_speed;
        player.facing_right = false;
    } else if input.right {
        player.vel.x = cfg.move_speed;
        player.facing_right = true;
    }

    player.vel.y += cfg.gravity * dt;

    if player.grounded {
        player.vel.x *= cfg.ground_friction;
    } else {
        player.vel.x *= cfg.air_friction;
    }
}

/// Move the player by its velocity.
pub fn integrate_player(player: &mut Player, dt: f32) {
    player.pos += player.vel * dt;
}

/// Rect intersection with the zero-area edge case filtered out.
fn overlap(a: Rect, b: Rect) -> Option<Rect> {
    a.intersect(b).filter(|r| r.w > 0.0 && r.h > 0.0)
}

/// Push the player out of every solid cell, sequentially, and recompute
/// ground contact from scratch. Grounded is only set when the resolution
/// pushed the player up off a cell below it.
pub fn resolve_player_collisions(player: &mut Player, grid: &Grid) {
    player.grounded = false;

    for cell in &grid.cells {
        if !cell.is_solid() {
            continue;
        }
        let cell_rect = cell.rect(grid.cell_size);
        let player_rect = player.rect();
        let Some(inter) = overlap(player_rect, cell_rect) else {
            continue;
        };

        if inter.w < inter.h {
            // Horizontal push, direction away from the cell center
            if player_rect.x + player_rect.w / 2.0 < cell_rect.x + cell_rect.w / 2.0 {
                player.pos.x -= inter.w;
            } else {
                player.pos.x += inter.w;
            }
            player.vel.x = 0.0;
        } else {
            let player_above =
                player_rect.y + player_rect.h / 2.0 < cell_rect.y + cell_rect.h / 2.0;
            if player_above {
                player.pos.y -= inter.h;
                player.grounded = true;
            } else {
                player.pos.y += inter.h;
            }
            player.vel.y = 0.0;
        }
    }
}

/// Launch if jump is held and the player has ground under it right now
/// (checked after collision resolution, so a mid-air press does nothing).
pub fn apply_jump(player: &mut Player, input: &InputSnapshot, cfg: &GameConfig) {
    if input.jump && player.grounded {
        player.vel.y = -cfg.jump_speed;
        player.grounded = false;
    }
}

/// One physics tick for every uncollected item: gravity, integration,
/// rest-on-top against solid cells, then the pickup test against the
/// player. Returns points scored this tick.
pub fn update_items(
    items: &mut [Item],
    grid: &Grid,
    player: &mut Player,
    cfg: &GameConfig,
    dt: f32,
) -> u32 {
    let mut points = 0;

    for item in items.iter_mut() {
        if item.collected {
            continue;
        }
        item.vel.y += cfg.gravity * dt;
        item.pos += item.vel * dt;

        for cell in grid.solid_cells() {
            let cell_rect = cell.rect(grid.cell_size);
            if overlap(item.rect(), cell_rect).is_some() {
                item.pos.y = cell_rect.y - item.radius;
                item.vel.y = 0.0;
            }
        }

        // Strict inequality: exactly touching does not collect
        let reach = item.radius + player.radius;
        if item.pos.distance_squared(player.pos) < reach * reach {
            item.collected = true;
            points += cfg.item_points;
        }
    }

    points
}

/// Both loss conditions: squeezed off the left edge, or fallen past the
/// bottom. Either one ends the attempt.
pub fn player_lost(player: &Player, world_height: f32) -> bool {
    player.pos.x - player.radius <= 0.0 || player.pos.y + player.radius >= world_height
}
