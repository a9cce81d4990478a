pub mod board;
pub mod compare;
pub mod engine;
pub mod error;
pub mod eval;
pub mod random;
pub mod search;
pub mod stone;

/// Board coordinate as `(row, col)`, both in `0..SIZE`.
pub type Point = (u8, u8);

pub use board::{Board, SIZE};
pub use compare::{MatchOutcome, play_match};
pub use engine::Engine;
pub use error::PlaceError;
pub use eval::evaluate;
pub use random::RandomEngine;
pub use search::AlphaBeta;
pub use stone::Stone;
