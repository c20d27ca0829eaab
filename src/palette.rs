//! Cell color palette
//!
//! A fixed set of saturated colors for automaton cells. Each attempt shuffles
//! the traversal order once, then a cycle index advances one slot per level
//! so newborn cells pick up the current level's color.

use macroquad::prelude::Color;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;

/// The full color set, kept as authored. A few duplicates are intentional
/// noise in the shuffle.
const PALETTE_HEX: &[&str] = &[
    "#0000FF", "#8A2BE2", "#A52A2A", "#5F9EA0", "#D2691E", "#FF7F50", "#6495ED", "#DC143C",
    "#00CED1", "#00008B", "#008B8B", "#B8860B", "#006400", "#8B008B", "#556B2F", "#FF8C00",
    "#9932CC", "#8B0000", "#483D8B", "#2F4F4F", "#00CED1", "#9400D3", "#FF1493", "#00BFFF",
    "#696969", "#1E90FF", "#B22222", "#228B22", "#FF00FF", "#808080", "#008000", "#FF69B4",
    "#CD5C5C", "#4B0082", "#F08080", "#20B2AA", "#778899", "#00FF00", "#32CD32", "#FF00FF",
    "#800000", "#0000CD", "#BA55D3", "#9370DB", "#3CB371", "#7B68EE", "#C71585", "#191970",
    "#000080", "#808000", "#6B8E23", "#FF4500", "#DA70D6", "#DB7093", "#CD853F", "#800080",
    "#663399", "#FF0000", "#BC8F8F", "#4169E1", "#8B4513", "#FA8072", "#2E8B57", "#A0522D",
    "#6A5ACD", "#708090", "#4682B4", "#008080", "#FF6347",
];

/// Parse "#RRGGBB" into a macroquad color. Panics on malformed input, which
/// can only come from the constant table above.
fn hex_to_color(hex: &str) -> Color {
    let r = u8::from_str_radix(&hex[1..3], 16).unwrap();
    let g = u8::from_str_radix(&hex[3..5], 16).unwrap();
    let b = u8::from_str_radix(&hex[5..7], 16).unwrap();
    Color::from_rgba(r, g, b, 255)
}

/// Per-attempt palette: resolved colors plus a shuffled traversal order.
pub struct Palette {
    colors: Vec<Color>,
    order: Vec<usize>,
    cycle: usize,
}

impl Palette {
    /// Build the palette with a fresh shuffle of the traversal order.
    pub fn shuffled(rng: &mut StdRng) -> Self {
        let colors: Vec<Color> = PALETTE_HEX.iter().map(|h| hex_to_color(h)).collect();
        assert!(!colors.is_empty(), "palette must not be empty");
        let mut order: Vec<usize> = (0..colors.len()).collect();
        order.shuffle(rng);
        Self { colors, order, cycle: 0 }
    }

    /// Color index that newborn cells stamp right now.
    pub fn current_index(&self) -> usize {
        self.order[self.cycle]
    }

    /// Resolved color for a stored cell color index.
    pub fn color(&self, index: usize) -> Color {
        self.colors[index]
    }

    /// Step to the next color in the shuffled order, wrapping around.
    pub fn advance(&mut self) {
        self.cycle = (self.cycle + 1) % self.order.len();
    }

    pub fn len(&self) -> usize {
        self.colors.len()
    }
}
