//! Attempt simulation
//!
//! One `Attempt` is a single play-through: grid, items, player, palette and
//! all the per-attempt counters, reset wholesale when the player dies. The
//! tick ordering below is the concurrency contract of the whole game:
//! everything is sequential, and several stages depend on running after the
//! one before (items must exist before item physics sees them, collision
//! must run after the automaton moved the colliders, jump must run after
//! ground contact was recomputed).

use rand::rngs::StdRng;

use crate::config::GameConfig;
use crate::grid::Grid;
use crate::input::InputSnapshot;
use crate::item::Item;
use crate::palette::Palette;
use crate::physics;
use crate::player::Player;

/// What a tick told the caller.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickOutcome {
    Running,
    /// A loss condition fired; the caller starts a fresh attempt
    AttemptOver,
    /// The player asked to leave; the caller exits the process
    Quit,
}

/// Everything owned by one play-through.
pub struct Attempt {
    pub grid: Grid,
    pub items: Vec<Item>,
    pub player: Player,
    pub palette: Palette,

    pub score: u32,
    pub level: u32,
    pub scroll_speed: f32,
    pub global_tick: u64,

    /// Remaining frames of the "Level N" banner
    pub level_banner_ticks: u32,
    /// Remaining frames of the title card
    pub title_ticks: u32,

    /// Current world bounds; updated on window resize
    pub world_width: f32,
    pub world_height: f32,
}

impl Attempt {
    /// Build a fresh attempt: reshuffled palette, regenerated grid, player
    /// at screen center, empty item list, counters at their start values.
    pub fn new(world_width: f32, world_height: f32, cfg: &GameConfig, rng: &mut StdRng) -> Self {
        let palette = Palette::shuffled(rng);
        let grid = Grid::generate(world_width, world_height, cfg, palette.current_index(), rng);
        let player = Player::spawn(world_width, world_height, cfg.player_radius);

        Self {
            grid,
            items: Vec::new(),
            player,
            palette,
            score: 0,
            level: 1,
            scroll_speed: cfg.scroll_speed,
            global_tick: 0,
            level_banner_ticks: cfg.level_banner_frames,
            title_ticks: cfg.title_frames,
            world_width,
            world_height,
        }
    }

    /// Advance the world by one fixed timestep.
    pub fn tick(&mut self, input: &InputSnapshot, cfg: &GameConfig, rng: &mut StdRng, dt: f32) -> TickOutcome {
        if input.quit {
            return TickOutcome::Quit;
        }
        if let Some((w, h)) = input.resize {
            // New bounds take effect for recycling and the loss check; the
            // grid keeps its dimensions until the next attempt.
            self.world_width = w;
            self.world_height = h;
        }

        // ===== Input and forces =====
        physics::apply_player_forces(&mut self.player, input, cfg, dt);

        // ===== World scroll =====
        let dx = self.scroll_speed * dt;
        self.grid.scroll(dx);
        for item in &mut self.items {
            item.pos.x -= dx;
        }
        self.player.pos.x -= dx;

        physics::integrate_player(&mut self.player, dt);

        // ===== Recycle scrolled-out cells, spawn their pickups =====
        let current_color = self.palette.current_index();
        for event in self.grid.recycle(self.world_width, current_color, rng) {
            self.items.push(Item::new(event.item_spawn, cfg.item_radius));
        }
        self.items.retain(|item| !item.off_screen());

        // ===== Level and color cadence =====
        if self.global_tick > 0 && self.global_tick % cfg.color_change_frames as u64 == 0 {
            self.palette.advance();
            self.level += 1;
            self.scroll_speed += cfg.speed_increment;
            self.level_banner_ticks = cfg.level_banner_frames;
        }

        // ===== Automaton step =====
        self.grid.step(cfg, self.palette.current_index(), rng);

        // ===== Item physics, collection =====
        self.score += physics::update_items(&mut self.items, &self.grid, &mut self.player, cfg, dt);

        // ===== Player collision, ground contact, jump =====
        physics::resolve_player_collisions(&mut self.player, &self.grid);
        physics::apply_jump(&mut self.player, input, cfg);

        // ===== Overlay countdowns =====
        self.level_banner_ticks = self.level_banner_ticks.saturating_sub(1);
        self.title_ticks = self.title_ticks.saturating_sub(1);

        self.global_tick += 1;

        if physics::player_lost(&self.player, self.world_height) {
            TickOutcome::AttemptOver
        } else {
            TickOutcome::Running
        }
    }
}
