//! Random piece generation
//!
//! Every new piece gets a uniformly random kind and starting rotation, and
//! enters the board at a fixed anchor inside the hidden buffer so it emerges
//! into view gradually.

use crate::board::BOARD_WIDTH;
use crate::piece::Piece;
use crate::tetromino::{PieceKind, Rotation};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// Row inside the hidden buffer where new pieces start falling
pub const SPAWN_ROW: i32 = 2;
/// New pieces enter at the horizontal center
pub const SPAWN_COL: i32 = BOARD_WIDTH as i32 / 2;

/// The piece generator, seeded once per game
#[derive(Debug, Clone)]
pub struct PieceGen {
    rng: ChaCha8Rng,
}

impl Default for PieceGen {
    fn default() -> Self {
        Self::new()
    }
}

impl PieceGen {
    /// Create a generator seeded from process entropy
    pub fn new() -> Self {
        Self::with_seed(rand::random())
    }

    /// Create a generator with a fixed seed (for deterministic tests)
    pub fn with_seed(seed: u64) -> Self {
        Self {
            rng: ChaCha8Rng::seed_from_u64(seed),
        }
    }

    /// Produce the next piece at the spawn anchor
    pub fn next(&mut self) -> Piece {
        let kind = PieceKind::all()[self.rng.gen_range(0..7)];
        let rotation = Rotation::all()[self.rng.gen_range(0..4)];
        Piece {
            kind,
            rotation,
            row: SPAWN_ROW,
            col: SPAWN_COL,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pieces_spawn_at_fixed_anchor() {
        let mut generator = PieceGen::with_seed(7);
        for _ in 0..50 {
            let piece = generator.next();
            assert_eq!(piece.row, SPAWN_ROW);
            assert_eq!(piece.col, SPAWN_COL);
        }
    }

    #[test]
    fn test_same_seed_same_sequence() {
        let mut a = PieceGen::with_seed(42);
        let mut b = PieceGen::with_seed(42);
        for _ in 0..50 {
            let (pa, pb) = (a.next(), b.next());
            assert_eq!(pa.kind, pb.kind);
            assert_eq!(pa.rotation, pb.rotation);
        }
    }

    #[test]
    fn test_all_kinds_eventually_appear() {
        use std::collections::HashSet;

        let mut generator = PieceGen::with_seed(1);
        let mut seen = HashSet::new();
        for _ in 0..500 {
            seen.insert(generator.next().kind);
        }
        assert_eq!(seen.len(), 7);
    }
}
