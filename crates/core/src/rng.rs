//! RNG module - uniform shape and colour selection
//!
//! Every spawn draws a shape and, independently, a colour, each uniformly
//! from its catalog. A small seeded LCG keeps games reproducible.

use crate::shapes::ShapeKind;
use crate::types::Color;

/// Simple LCG (Linear Congruential Generator) RNG
/// Uses constants from Numerical Recipes
#[derive(Debug, Clone)]
pub struct SimpleRng {
    state: u32,
}

impl SimpleRng {
    /// Create a new RNG with the given seed
    pub fn new(seed: u32) -> Self {
        // Avoid 0 seed which would produce all zeros
        let state = if seed == 0 { 1 } else { seed };
        Self { state }
    }

    /// Generate next random u32
    pub fn next_u32(&mut self) -> u32 {
        self.state = self.state.wrapping_mul(1664525).wrapping_add(1013904223);
        self.state
    }

    /// Random value in `[0, max)`; `max` must be non-zero.
    ///
    /// Multiply-shift reads the high bits; the low bits of an LCG cycle
    /// with very short periods.
    pub fn next_range(&mut self, max: u32) -> u32 {
        ((self.next_u32() as u64 * max as u64) >> 32) as u32
    }

    /// Uniformly pick one element, `None` for an empty slice
    pub fn choose<T: Copy>(&mut self, items: &[T]) -> Option<T> {
        if items.is_empty() {
            return None;
        }
        let idx = self.next_range(items.len() as u32) as usize;
        Some(items[idx])
    }
}

/// Draws (shape, colour) pairs for new pieces
#[derive(Debug, Clone)]
pub struct PieceRandomizer {
    rng: SimpleRng,
    seed: u32,
}

impl PieceRandomizer {
    pub fn new(seed: u32) -> Self {
        Self {
            rng: SimpleRng::new(seed),
            seed,
        }
    }

    pub fn draw(&mut self) -> (ShapeKind, Color) {
        let kind = self.rng.choose(&ShapeKind::ALL).unwrap_or(ShapeKind::I);
        let color = self.rng.choose(&Color::ALL).unwrap_or(Color::Red);
        (kind, color)
    }

    /// Seed the randomizer was created with
    pub fn seed(&self) -> u32 {
        self.seed
    }
}

impl Default for PieceRandomizer {
    fn default() -> Self {
        Self::new(1)
    }
}
