//! Automaton grid
//!
//! A fixed columns x rows field of cells driven by a Game-of-Life variant.
//! Three things make it feel alive rather than lock-step:
//! - every cell carries its own randomized update cadence, so the field
//!   pulses out of sync instead of blinking as one
//! - births grow in and deaths shrink out over several frames, and the
//!   hitbox follows the animated size
//! - dead cells have a small chance of spontaneous birth, so the automaton
//!   never settles into a still life
//!
//! A permanently-dead "no spawn zone" in the middle of the screen keeps the
//! player's starting column clear.
//!
//! Cells are stored row-major and a cell's (row, column) for neighbor
//! lookups is derived from its array index. The default recycle strategy
//! replaces scrolled-out cells in place, so that derivation stays exact;
//! the legacy erase-and-append strategy is kept behind a config switch
//! (see [`RecycleStrategy`]).

use macroquad::prelude::{vec2, Rect, Vec2};
use rand::rngs::StdRng;
use rand::Rng;

use crate::config::{GameConfig, RecycleStrategy, FPS};

/// Grow/shrink animation state. The tri-state makes "never growing and
/// shrinking at once" structural instead of a flag invariant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CellAnimation {
    Steady,
    Growing,
    Shrinking,
}

/// One automaton cell, bound to a grid slot.
#[derive(Debug, Clone)]
pub struct Cell {
    /// World-space center; scrolls left every tick
    pub center: Vec2,
    /// Life state
    pub alive: bool,
    /// Visual and collision scale in [0, 1]
    pub size_factor: f32,
    /// Current size animation
    pub animation: CellAnimation,
    /// Permanently excluded from the life rule
    pub no_spawn_zone: bool,
    /// Palette index stamped at birth
    pub color_index: usize,
    /// Frames between life-rule evaluations for this cell
    pub update_period: i32,
    /// Countdown to the next evaluation
    pub ticks_remaining: i32,
    /// Grid row, fixed for the cell's lifetime
    pub row: usize,
}

impl Cell {
    /// Roll a fresh cell at `center`. Outside the no-spawn zone it starts
    /// alive half the time, at full size, with a cadence between half and
    /// double the frame rate.
    fn spawn(center: Vec2, row: usize, no_spawn_zone: bool, color_index: usize, rng: &mut StdRng) -> Self {
        let alive = !no_spawn_zone && rng.gen_bool(0.5);
        let speed: f64 = rng.gen_range(0.5..2.0);
        let update_period = ((FPS as f64 / speed).round() as i32).max(1);
        Self {
            center,
            alive,
            size_factor: if alive { 1.0 } else { 0.0 },
            animation: if alive { CellAnimation::Growing } else { CellAnimation::Steady },
            no_spawn_zone,
            color_index,
            update_period,
            ticks_remaining: update_period,
            row,
        }
    }

    /// Current collision/render box: `cell_size * size_factor` centered on
    /// the cell. Only meaningful while `size_factor > 0`.
    pub fn rect(&self, cell_size: f32) -> Rect {
        let s = cell_size * self.size_factor;
        Rect::new(self.center.x - s / 2.0, self.center.y - s / 2.0, s, s)
    }

    /// Does this cell currently block movement?
    pub fn is_solid(&self) -> bool {
        self.size_factor > 0.0 && !self.no_spawn_zone
    }

    /// Advance the size animation by one step, clamped to [0, 1].
    fn advance_animation(&mut self, step: f32) {
        match self.animation {
            CellAnimation::Growing => {
                self.size_factor = (self.size_factor + step).min(1.0);
                if self.size_factor >= 1.0 {
                    self.animation = CellAnimation::Steady;
                }
            }
            CellAnimation::Shrinking => {
                self.size_factor = (self.size_factor - step).max(0.0);
                if self.size_factor <= 0.0 {
                    self.animation = CellAnimation::Steady;
                }
            }
            CellAnimation::Steady => {}
        }
    }

    fn be_born(&mut self, color_index: usize) {
        self.alive = true;
        self.size_factor = 0.0;
        self.animation = CellAnimation::Growing;
        self.color_index = color_index;
    }

    fn die(&mut self) {
        self.alive = false;
        self.size_factor = 1.0;
        self.animation = CellAnimation::Shrinking;
    }
}

/// Emitted for every recycled cell; the item spawner turns each event into
/// one pickup at the new cell's top edge.
#[derive(Debug, Clone, Copy)]
pub struct RecycleEvent {
    pub row: usize,
    /// Where the replacement cell's pickup appears
    pub item_spawn: Vec2,
}

/// The automaton field. Always holds exactly `columns * rows` cells.
pub struct Grid {
    pub cells: Vec<Cell>,
    pub columns: usize,
    pub rows: usize,
    pub cell_size: f32,
    strategy: RecycleStrategy,
}

impl Grid {
    /// Populate a fresh grid covering a `world_width` x `world_height`
    /// screen. The 3x3 block of cells around the one containing the screen
    /// center forms the no-spawn zone and starts dead, so the player always
    /// spawns in clear air.
    pub fn generate(
        world_width: f32,
        world_height: f32,
        cfg: &GameConfig,
        color_index: usize,
        rng: &mut StdRng,
    ) -> Self {
        let cs = cfg.cell_size;
        let columns = (world_width / cs) as usize;
        let rows = (world_height / cs) as usize;
        assert!(columns > 0 && rows > 0, "world smaller than one cell");

        let center_col = (columns / 2) as isize;
        let center_row = (rows / 2) as isize;

        let mut cells = Vec::with_capacity(columns * rows);
        for row in 0..rows {
            for col in 0..columns {
                let center = vec2(col as f32 * cs + cs / 2.0, row as f32 * cs + cs / 2.0);
                let no_spawn = (col as isize - center_col).abs() <= 1
                    && (row as isize - center_row).abs() <= 1;
                cells.push(Cell::spawn(center, row, no_spawn, color_index, rng));
            }
        }

        Self { cells, columns, rows, cell_size: cs, strategy: cfg.recycle_strategy }
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// Shift the whole field left by `dx`.
    pub fn scroll(&mut self, dx: f32) {
        for cell in &mut self.cells {
            cell.center.x -= dx;
        }
    }

    /// Replace every cell whose right edge has left the screen with a fresh
    /// one at the right boundary of the same row. Returns one event per
    /// replacement so the caller can spawn pickups.
    ///
    /// The cell count is identical before and after; only slot order may
    /// change, and only under [`RecycleStrategy::EraseAppend`].
    pub fn recycle(
        &mut self,
        world_width: f32,
        color_index: usize,
        rng: &mut StdRng,
    ) -> Vec<RecycleEvent> {
        let cs = self.cell_size;
        let mut events = Vec::new();

        match self.strategy {
            RecycleStrategy::StableSlot => {
                for i in 0..self.cells.len() {
                    if self.cells[i].center.x + cs / 2.0 < 0.0 {
                        let row = self.cells[i].row;
                        events.push(self.respawn_at_right(i, row, world_width, color_index, rng));
                    }
                }
            }
            RecycleStrategy::EraseAppend => {
                // Legacy order: drop scrolled-out cells, then append all
                // replacements at the tail.
                let mut replacements = Vec::new();
                let mut i = 0;
                while i < self.cells.len() {
                    if self.cells[i].center.x + cs / 2.0 < 0.0 {
                        let cell = self.cells.remove(i);
                        let center = vec2(world_width + cs / 2.0, cell.row as f32 * cs + cs / 2.0);
                        replacements.push(Cell::spawn(center, cell.row, false, color_index, rng));
                        events.push(RecycleEvent {
                            row: cell.row,
                            item_spawn: vec2(world_width + cs / 2.0, cell.row as f32 * cs),
                        });
                    } else {
                        i += 1;
                    }
                }
                self.cells.extend(replacements);
            }
        }

        events
    }

    /// Replace slot `i` in place with a fresh right-edge cell.
    fn respawn_at_right(
        &mut self,
        i: usize,
        row: usize,
        world_width: f32,
        color_index: usize,
        rng: &mut StdRng,
    ) -> RecycleEvent {
        let cs = self.cell_size;
        let center = vec2(world_width + cs / 2.0, row as f32 * cs + cs / 2.0);
        // Recycling only happens at the horizontal edges, never inside the
        // central no-spawn zone.
        self.cells[i] = Cell::spawn(center, row, false, color_index, rng);
        RecycleEvent { row, item_spawn: vec2(world_width + cs / 2.0, row as f32 * cs) }
    }

    /// Count live cells among the 8 toroidally-wrapped neighbors of slot `i`.
    /// Row and column come from the array index, not from screen position.
    fn alive_neighbors(&self, i: usize) -> usize {
        let col = (i % self.columns) as isize;
        let row = (i / self.columns) as isize;
        let columns = self.columns as isize;
        let rows = self.rows as isize;
        let mut count = 0;
        for dy in -1..=1 {
            for dx in -1..=1 {
                if dx == 0 && dy == 0 {
                    continue;
                }
                let nx = (col + dx).rem_euclid(columns);
                let ny = (row + dy).rem_euclid(rows);
                if self.cells[(ny * columns + nx) as usize].alive {
                    count += 1;
                }
            }
        }
        count
    }

    /// Run one tick of the automaton: advance every cell's size animation,
    /// and evaluate the life rule for cells whose personal countdown expired.
    ///
    /// Evaluation reads the grid as it currently is, in index order, rather
    /// than double-buffering. Combined with per-cell cadences this is what
    /// keeps the field churning organically.
    pub fn step(&mut self, cfg: &GameConfig, color_index: usize, rng: &mut StdRng) {
        for i in 0..self.cells.len() {
            self.cells[i].advance_animation(cfg.growth_step);

            self.cells[i].ticks_remaining -= 1;
            if self.cells[i].ticks_remaining > 0 || self.cells[i].no_spawn_zone {
                continue;
            }

            let neighbors = self.alive_neighbors(i);
            let cell = &mut self.cells[i];
            let next_alive = if cell.alive {
                neighbors == 2 || neighbors == 3
            } else {
                neighbors == 3
            };

            if next_alive && !cell.alive {
                cell.be_born(color_index);
            } else if !next_alive && cell.alive {
                cell.die();
            } else if !cell.alive && rng.gen::<f64>() < cfg.spontaneous_rate {
                cell.be_born(color_index);
            }
            cell.ticks_remaining = cell.update_period;
        }
    }

    /// Cells that currently block the player or items.
    pub fn solid_cells(&self) -> impl Iterator<Item = &Cell> {
        self.cells.iter().filter(|c| c.is_solid())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;

    fn test_cfg() -> GameConfig {
        GameConfig { spontaneous_rate: 0.0, ..GameConfig::default() }
    }

    fn test_grid(cfg: &GameConfig) -> (Grid, StdRng) {
        let mut rng = StdRng::seed_from_u64(42);
        let grid = Grid::generate(1920.0, 1080.0, cfg, 0, &mut rng);
        (grid, rng)
    }

    /// Kill every cell and pin every countdown far in the future, so a test
    /// can arrange an exact neighborhood and wake exactly one cell.
    fn clear(grid: &mut Grid) {
        for cell in &mut grid.cells {
            cell.alive = false;
            cell.size_factor = 0.0;
            cell.animation = CellAnimation::Steady;
            cell.ticks_remaining = i32::MAX;
        }
    }

    fn idx(grid: &Grid, row: usize, col: usize) -> usize {
        row * grid.columns + col
    }

    #[test]
    fn test_generate_dimensions() {
        let cfg = test_cfg();
        let (grid, _) = test_grid(&cfg);
        assert_eq!(grid.columns, 16);
        assert_eq!(grid.rows, 9);
        assert_eq!(grid.len(), 16 * 9);
    }

    #[test]
    fn test_no_spawn_zone_is_three_by_three_and_dead() {
        let cfg = test_cfg();
        let (grid, _) = test_grid(&cfg);
        let zone: Vec<usize> = (0..grid.len()).filter(|&i| grid.cells[i].no_spawn_zone).collect();
        assert_eq!(zone.len(), 9);
        for &i in &zone {
            let cell = &grid.cells[i];
            assert!(!cell.alive);
            assert_eq!(cell.size_factor, 0.0);
            // 3x3 block around the cell containing the screen center
            let (col, row) = (i % grid.columns, i / grid.columns);
            assert!((7..=9).contains(&col) && (3..=5).contains(&row));
        }
    }

    #[test]
    fn test_birth_on_exactly_three_neighbors() {
        let cfg = test_cfg();
        let (mut grid, mut rng) = test_grid(&cfg);
        clear(&mut grid);
        for col in [1, 2, 3] {
            let i = idx(&grid, 1, col);
            grid.cells[i].alive = true;
        }
        let target = idx(&grid, 2, 2);
        grid.cells[target].ticks_remaining = 1;
        grid.step(&cfg, 5, &mut rng);

        let cell = &grid.cells[target];
        assert!(cell.alive);
        assert_eq!(cell.size_factor, 0.0);
        assert_eq!(cell.animation, CellAnimation::Growing);
        assert_eq!(cell.color_index, 5);
    }

    #[test]
    fn test_survival_on_two_or_three_neighbors() {
        let cfg = test_cfg();
        for neighbors in [2, 3] {
            let (mut grid, mut rng) = test_grid(&cfg);
            clear(&mut grid);
            let target = idx(&grid, 2, 2);
            grid.cells[target].alive = true;
            grid.cells[target].size_factor = 1.0;
            for col in 1..=neighbors {
                let i = idx(&grid, 1, col);
                grid.cells[i].alive = true;
            }
            grid.cells[target].ticks_remaining = 1;
            grid.step(&cfg, 0, &mut rng);
            assert!(grid.cells[target].alive, "survives with {} neighbors", neighbors);
            assert_eq!(grid.cells[target].animation, CellAnimation::Steady);
        }
    }

    #[test]
    fn test_death_by_isolation_and_overcrowding() {
        let cfg = test_cfg();
        for neighbors in [0usize, 1, 4, 5, 8] {
            let (mut grid, mut rng) = test_grid(&cfg);
            clear(&mut grid);
            let target = idx(&grid, 2, 2);
            grid.cells[target].alive = true;
            grid.cells[target].size_factor = 1.0;
            let offsets: [(isize, isize); 8] =
                [(-1, -1), (-1, 0), (-1, 1), (0, -1), (0, 1), (1, -1), (1, 0), (1, 1)];
            for &(dr, dc) in offsets.iter().take(neighbors) {
                let r = (2 + dr) as usize;
                let c = (2 + dc) as usize;
                let i = idx(&grid, r, c);
                grid.cells[i].alive = true;
            }
            grid.cells[target].ticks_remaining = 1;
            grid.step(&cfg, 0, &mut rng);

            let cell = &grid.cells[target];
            assert!(!cell.alive, "dies with {} neighbors", neighbors);
            assert_eq!(cell.size_factor, 1.0);
            assert_eq!(cell.animation, CellAnimation::Shrinking);
        }
    }

    #[test]
    fn test_neighbor_count_wraps_both_axes() {
        let cfg = test_cfg();
        let (mut grid, _) = test_grid(&cfg);
        clear(&mut grid);
        // Opposite edges of the corner cell's neighborhood
        let row_wrap = idx(&grid, grid.rows - 1, 0);
        let col_wrap = idx(&grid, 0, grid.columns - 1);
        let both_wrap = idx(&grid, grid.rows - 1, grid.columns - 1);
        grid.cells[row_wrap].alive = true; // row wrap
        grid.cells[col_wrap].alive = true; // column wrap
        grid.cells[both_wrap].alive = true; // both
        assert_eq!(grid.alive_neighbors(idx(&grid, 0, 0)), 3);
    }

    #[test]
    fn test_no_spawn_zone_never_comes_alive() {
        // 10,000 ticks with default spontaneous rate and live surroundings
        let cfg = GameConfig::default();
        let mut rng = StdRng::seed_from_u64(9);
        let mut grid = Grid::generate(1920.0, 1080.0, &cfg, 0, &mut rng);
        for _ in 0..10_000 {
            grid.step(&cfg, 0, &mut rng);
            for cell in grid.cells.iter().filter(|c| c.no_spawn_zone) {
                assert!(!cell.alive);
            }
        }
    }

    #[test]
    fn test_size_factor_bounds_hold_over_time() {
        let cfg = GameConfig::default();
        let mut rng = StdRng::seed_from_u64(3);
        let mut grid = Grid::generate(1920.0, 1080.0, &cfg, 0, &mut rng);
        for _ in 0..1000 {
            grid.step(&cfg, 0, &mut rng);
            for cell in &grid.cells {
                assert!((0.0..=1.0).contains(&cell.size_factor));
            }
        }
    }

    #[test]
    fn test_growth_clamps_and_settles() {
        let cfg = test_cfg();
        let (mut grid, mut rng) = test_grid(&cfg);
        clear(&mut grid);
        let target = idx(&grid, 0, 0);
        grid.cells[target].alive = true;
        grid.cells[target].animation = CellAnimation::Growing;
        // 0.05 per tick reaches 1.0 in 20 ticks
        for _ in 0..25 {
            grid.step(&cfg, 0, &mut rng);
        }
        assert_eq!(grid.cells[target].size_factor, 1.0);
        assert_eq!(grid.cells[target].animation, CellAnimation::Steady);
    }

    #[test]
    fn test_scroll_moves_every_cell_exactly() {
        let cfg = test_cfg();
        let (mut grid, _) = test_grid(&cfg);
        let before: Vec<f32> = grid.cells.iter().map(|c| c.center.x).collect();
        let dx = 10.0 / 60.0;
        grid.scroll(dx);
        for (cell, x0) in grid.cells.iter().zip(before) {
            assert!((cell.center.x - (x0 - dx)).abs() < 1e-4);
        }
    }

    #[test]
    fn test_recycle_stable_slot_preserves_index_and_row() {
        let cfg = test_cfg();
        let (mut grid, mut rng) = test_grid(&cfg);
        let slot = idx(&grid, 4, 0);
        let row = grid.cells[slot].row;
        // Push the cell past the left edge
        grid.cells[slot].center.x = -cfg.cell_size;
        let events = grid.recycle(1920.0, 7, &mut rng);

        assert_eq!(events.len(), 1);
        assert_eq!(events[0].row, row);
        assert_eq!(grid.len(), 16 * 9);
        let fresh = &grid.cells[slot];
        assert_eq!(fresh.row, row);
        assert!((fresh.center.x - (1920.0 + 60.0)).abs() < 1e-4);
        assert!((fresh.center.y - (row as f32 * 120.0 + 60.0)).abs() < 1e-4);
        assert!(!fresh.no_spawn_zone);
        assert_eq!(fresh.color_index, 7);
    }

    #[test]
    fn test_recycle_erase_append_moves_to_tail() {
        let cfg = GameConfig {
            recycle_strategy: RecycleStrategy::EraseAppend,
            ..test_cfg()
        };
        let (mut grid, mut rng) = test_grid(&cfg);
        let slot = idx(&grid, 2, 0);
        let row = grid.cells[slot].row;
        grid.cells[slot].center.x = -cfg.cell_size;
        let events = grid.recycle(1920.0, 0, &mut rng);

        assert_eq!(events.len(), 1);
        assert_eq!(grid.len(), 16 * 9);
        let tail = grid.cells.last().unwrap();
        assert_eq!(tail.row, row);
        assert!((tail.center.x - (1920.0 + 60.0)).abs() < 1e-4);
    }

    #[test]
    fn test_recycle_event_spawn_point() {
        let cfg = test_cfg();
        let (mut grid, mut rng) = test_grid(&cfg);
        let slot = idx(&grid, 3, 0);
        grid.cells[slot].center.x = -cfg.cell_size;
        let events = grid.recycle(1920.0, 0, &mut rng);
        assert_eq!(events.len(), 1);
        // Item appears at the new cell's right-boundary x and top edge y
        assert!((events[0].item_spawn.x - (1920.0 + 60.0)).abs() < 1e-4);
        assert!((events[0].item_spawn.y - 3.0 * 120.0).abs() < 1e-4);
    }

    #[test]
    fn test_no_recycle_while_on_screen() {
        let cfg = test_cfg();
        let (mut grid, mut rng) = test_grid(&cfg);
        let events = grid.recycle(1920.0, 0, &mut rng);
        assert!(events.is_empty());
    }
}
