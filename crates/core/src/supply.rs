//! Piece supply: deterministic RNG and the supplier seam.
//!
//! The engine requests fresh pieces through the [`PieceSupplier`] trait so
//! tests can inject fixed sequences. The default supplier draws each kind
//! uniformly at random from a small LCG, which keeps games reproducible
//! from a seed.

use crt_tetris_types::PieceKind;

/// Linear congruential generator (Numerical Recipes constants).
#[derive(Debug, Clone)]
pub struct SimpleRng {
    state: u32,
}

impl SimpleRng {
    pub fn new(seed: u32) -> Self {
        // A zero state would stick on the additive constant's orbit start.
        let state = if seed == 0 { 1 } else { seed };
        Self { state }
    }

    pub fn next_u32(&mut self) -> u32 {
        self.state = self.state.wrapping_mul(1664525).wrapping_add(1013904223);
        self.state
    }

    /// Random value in `[0, max)`.
    pub fn next_range(&mut self, max: u32) -> u32 {
        self.next_u32() % max
    }
}

/// Source of fresh pieces for spawn, hold, and next-piece promotion.
pub trait PieceSupplier {
    fn next_piece(&mut self) -> PieceKind;
}

/// Uniform random supplier.
#[derive(Debug, Clone)]
pub struct RandomSupplier {
    rng: SimpleRng,
}

impl RandomSupplier {
    pub fn new(seed: u32) -> Self {
        Self {
            rng: SimpleRng::new(seed),
        }
    }
}

impl PieceSupplier for RandomSupplier {
    fn next_piece(&mut self) -> PieceKind {
        let idx = self.rng.next_range(PieceKind::ALL.len() as u32);
        PieceKind::ALL[idx as usize]
    }
}

/// Supplier that cycles through a fixed sequence (test scaffolding).
#[derive(Debug, Clone)]
pub struct SequenceSupplier {
    sequence: Vec<PieceKind>,
    index: usize,
}

impl SequenceSupplier {
    pub fn new(sequence: Vec<PieceKind>) -> Self {
        assert!(!sequence.is_empty(), "sequence supplier needs pieces");
        Self { sequence, index: 0 }
    }
}

impl PieceSupplier for SequenceSupplier {
    fn next_piece(&mut self) -> PieceKind {
        let kind = self.sequence[self.index % self.sequence.len()];
        self.index += 1;
        kind
    }
}
