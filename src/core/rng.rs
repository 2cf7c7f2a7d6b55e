//! RNG module - pluggable piece selection
//!
//! Pieces are drawn uniformly over the 7 kinds (no bag). The source is a
//! trait so tests can inject a deterministic sequence instead of a PRNG.

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use crate::types::PieceKind;

/// Source of upcoming pieces
pub trait PieceSource: std::fmt::Debug {
    /// Draw the kind of the next piece to spawn
    fn next_kind(&mut self) -> PieceKind;
}

/// Uniform, unweighted piece selection backed by a seeded ChaCha8 PRNG
#[derive(Debug, Clone)]
pub struct UniformPieceSource {
    rng: ChaCha8Rng,
}

impl UniformPieceSource {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: ChaCha8Rng::seed_from_u64(seed),
        }
    }

    /// Seed from OS entropy
    pub fn from_entropy() -> Self {
        Self::new(rand::rng().random())
    }
}

impl PieceSource for UniformPieceSource {
    fn next_kind(&mut self) -> PieceKind {
        PieceKind::ALL[self.rng.random_range(0..PieceKind::ALL.len())]
    }
}

/// Fixed piece sequence for deterministic tests; cycles when exhausted
#[derive(Debug, Clone)]
pub struct ScriptedPieceSource {
    sequence: Vec<PieceKind>,
    index: usize,
}

impl ScriptedPieceSource {
    pub fn new(sequence: Vec<PieceKind>) -> Self {
        assert!(!sequence.is_empty(), "scripted sequence must not be empty");
        Self { sequence, index: 0 }
    }
}

impl PieceSource for ScriptedPieceSource {
    fn next_kind(&mut self) -> PieceKind {
        let kind = self.sequence[self.index % self.sequence.len()];
        self.index += 1;
        kind
    }
}
