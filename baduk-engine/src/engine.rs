use crate::Point;
use crate::board::Board;
use crate::stone::Stone;

/// Something that can propose a move for a position.
///
/// `board` is the current position and must not be mutated; `ko`, when
/// present, is the single point forbidden by the simple-ko rule. Returns
/// the point to play, or `None` to pass (including the no-legal-move case).
///
/// The receiver is `&mut` because implementations may carry mutable state
/// across calls (the alpha-beta engine keeps its killer, history and
/// transposition tables for the lifetime of the instance). One instance
/// must not be shared across threads without external locking; independent
/// instances own disjoint state and may run concurrently.
pub trait Engine {
    fn select_move(&mut self, board: &Board, player: Stone, ko: Option<Point>) -> Option<Point>;
}
