//! Factory module - produces new falling pieces
//!
//! The default source picks uniformly among the seven kinds. A seeded source
//! gives reproducible games, and a scripted source replays a fixed order
//! (handy for tests and practice boards).

use rand::distributions::{Distribution, Uniform};
use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::piece::Piece;
use crate::types::PieceKind;

#[derive(Debug, Clone)]
enum Source {
    Random {
        rng: StdRng,
        uniform: Uniform<usize>,
    },
    Sequence {
        kinds: Vec<PieceKind>,
        next: usize,
    },
}

/// Piece generator owned by the board.
#[derive(Debug, Clone)]
pub struct PieceFactory {
    source: Source,
}

impl PieceFactory {
    /// Uniform random pieces from an entropy-seeded RNG.
    pub fn new() -> Self {
        Self::with_rng(StdRng::from_entropy())
    }

    /// Uniform random pieces, reproducible for a given seed.
    pub fn seeded(seed: u64) -> Self {
        Self::with_rng(StdRng::seed_from_u64(seed))
    }

    fn with_rng(rng: StdRng) -> Self {
        Self {
            source: Source::Random {
                rng,
                uniform: Uniform::from(0..PieceKind::ALL.len()),
            },
        }
    }

    /// Replay `kinds` in order, wrapping around at the end.
    ///
    /// # Panics
    ///
    /// Panics if `kinds` is empty.
    pub fn sequence(kinds: impl IntoIterator<Item = PieceKind>) -> Self {
        let kinds: Vec<PieceKind> = kinds.into_iter().collect();
        assert!(!kinds.is_empty(), "piece sequence must not be empty");
        Self {
            source: Source::Sequence { kinds, next: 0 },
        }
    }

    /// Choose the kind of the next piece.
    pub fn next_kind(&mut self) -> PieceKind {
        match &mut self.source {
            Source::Random { rng, uniform } => PieceKind::ALL[uniform.sample(rng)],
            Source::Sequence { kinds, next } => {
                let kind = kinds[*next];
                *next = (*next + 1) % kinds.len();
                kind
            }
        }
    }

    /// Build the next piece with its bounding box at (spawn_x, spawn_y).
    pub fn generate(&mut self, spawn_x: i32, spawn_y: i32) -> Piece {
        Piece::new(self.next_kind(), spawn_x, spawn_y)
    }
}

impl Default for PieceFactory {
    fn default() -> Self {
        Self::new()
    }
}
