//! RNG module - 7-bag random piece generation
//!
//! Implements the "7-bag" randomization used by modern falling-block games:
//! each bag holds one of each piece kind, shuffled; draws empty the bag before
//! a new one is generated. A small LCG keeps games reproducible from a seed.

use crate::types::PieceKind;

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

    /// Generate random value in range [0, max)
    pub fn next_range(&mut self, max: u32) -> u32 {
        self.next_u32() % max
    }

    /// Shuffle a slice using Fisher-Yates
    pub fn shuffle<T>(&mut self, slice: &mut [T]) {
        for i in (1..slice.len()).rev() {
            let j = self.next_range((i + 1) as u32) as usize;
            slice.swap(i, j);
        }
    }
}

/// 7-bag piece generator
#[derive(Debug, Clone)]
pub struct PieceQueue {
    /// Current shuffled bag
    bag: [PieceKind; 7],
    /// Index of the next piece in the bag
    bag_index: usize,
    rng: SimpleRng,
}

impl PieceQueue {
    /// Create a new piece queue with the given seed
    pub fn new(seed: u32) -> Self {
        let mut queue = Self {
            bag: PieceKind::ALL,
            bag_index: 0,
            rng: SimpleRng::new(seed),
        };
        queue.refill_bag();
        queue
    }

    /// Generate a new shuffled bag
    fn refill_bag(&mut self) {
        self.bag = PieceKind::ALL;
        self.rng.shuffle(&mut self.bag);
        self.bag_index = 0;
    }

    /// The next piece to be drawn, for next-piece previews
    pub fn peek(&self) -> PieceKind {
        self.bag[self.bag_index]
    }

    /// Draw the next piece from the queue.
    /// Refills eagerly so the queue can always be peeked.
    pub fn draw(&mut self) -> PieceKind {
        let piece = self.bag[self.bag_index];
        self.bag_index += 1;
        if self.bag_index >= self.bag.len() {
            self.refill_bag();
        }
        piece
    }

    /// Current RNG state (for restarting a game with the same sequence)
    pub fn seed(&self) -> u32 {
        self.rng.state
    }

    #[cfg(test)]
    fn remaining(&self) -> &[PieceKind] {
        &self.bag[self.bag_index..]
    }
}

impl Default for PieceQueue {
    fn default() -> Self {
        Self::new(1)
    }
}
