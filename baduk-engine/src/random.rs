use rand::SeedableRng;
use rand::rngs::SmallRng;
use rand::seq::SliceRandom;

use crate::Point;
use crate::board::{Board, SIZE};
use crate::engine::Engine;
use crate::stone::Stone;

/// Uniform-random legal-move picker. Used as a calibration opponent and as
/// the trivial [`Engine`] implementation in tests.
pub struct RandomEngine {
    rng: SmallRng,
}

impl RandomEngine {
    pub fn new() -> Self {
        RandomEngine {
            rng: rand::make_rng(),
        }
    }

    /// Seeded variant for reproducible games.
    pub fn with_seed(seed: u64) -> Self {
        RandomEngine {
            rng: SmallRng::seed_from_u64(seed),
        }
    }
}

impl Default for RandomEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl Engine for RandomEngine {
    fn select_move(&mut self, board: &Board, player: Stone, ko: Option<Point>) -> Option<Point> {
        let mut candidates: Vec<Point> = Vec::new();
        for row in 0..SIZE {
            for col in 0..SIZE {
                let p = (row, col);
                if board.stone_at(p).is_none() && ko != Some(p) {
                    candidates.push(p);
                }
            }
        }
        candidates.shuffle(&mut self.rng);
        candidates
            .into_iter()
            .find(|&p| board.place(p, player).is_ok())
    }
}
