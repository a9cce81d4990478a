use std::collections::HashMap;

use crate::Point;
use crate::board::{Board, SIZE};
use crate::engine::Engine;
use crate::eval::evaluate;
use crate::stone::Stone;

/// Default search depth in plies. Depth is the sole bound on work (there is
/// no timeout), so this is a latency knob, not a correctness parameter.
const DEFAULT_DEPTH: u8 = 4;

const INF: i32 = 1 << 30;

// Move-ordering bonuses. Ordering only affects how early cutoffs happen,
// never the final minimax value.
const KILLER_BONUS: i32 = 10_000;
const HISTORY_SCALE: i32 = 10;
const CONTACT_BONUS: i32 = 2;
const CAPTURE_BONUS: i32 = 5;

/// Depth-limited negamax with alpha-beta pruning, killer moves, a history
/// heuristic for move ordering, null-move pruning and a transposition
/// cache.
///
/// The three tables live as long as the engine instance and are reused
/// across [`Engine::select_move`] calls. The transposition key is a base-3
/// positional polynomial over the cells plus the side to move; it encodes
/// neither ko nor remaining depth, so cached scores can be replayed in
/// contexts where they are only approximately valid. That is a known,
/// accepted trade of accuracy for speed (see `position_hash`), not
/// something callers should rely on being exact.
pub struct AlphaBeta {
    depth: u8,
    /// Search depth -> move that last caused a cutoff at that depth.
    killers: HashMap<u8, Point>,
    /// Positional hash -> best score found under that key.
    cache: HashMap<u64, i32>,
    /// Point -> accumulated cutoff weight, for ordering only.
    history: HashMap<Point, i32>,
}

impl AlphaBeta {
    pub fn new() -> Self {
        Self::with_depth(DEFAULT_DEPTH)
    }

    /// Engine searching `depth` plies. Deeper is stronger and slower.
    pub fn with_depth(depth: u8) -> Self {
        AlphaBeta {
            depth: depth.max(1),
            killers: HashMap::new(),
            cache: HashMap::new(),
            history: HashMap::new(),
        }
    }

    fn alpha_beta(
        &mut self,
        board: &Board,
        player: Stone,
        opp: Stone,
        ko: Option<Point>,
        depth: u8,
        mut alpha: i32,
        beta: i32,
    ) -> i32 {
        if depth == 0 {
            return evaluate(board, player, opp);
        }

        let key = position_hash(board, player);
        if let Some(&cached) = self.cache.get(&key) {
            return cached;
        }

        // Null-move probe: passing is always a legal alternative here, so a
        // reduced-depth, zero-window search of "do nothing" that already
        // fails high lets us cut without trying any real move.
        if depth >= 2 {
            let probe = -self.alpha_beta(board, opp, player, ko, depth - 2, -beta, -beta + 1);
            if probe >= beta {
                self.cache.insert(key, probe);
                return probe;
            }
        }

        let mut found_move = false;
        let killer = self.killers.get(&depth).copied();

        // Killer move first, if it is playable in this position.
        if let Some(k) = killer {
            if board.stone_at(k).is_none() && ko != Some(k) {
                if let Ok((next, _)) = board.place(k, player) {
                    found_move = true;
                    let score = -self.alpha_beta(&next, opp, player, ko, depth - 1, -beta, -alpha);
                    *self.history.entry(k).or_insert(0) += 1 << depth;
                    if score > alpha {
                        alpha = score;
                        if alpha >= beta {
                            self.killers.insert(depth, k);
                            self.cache.insert(key, alpha);
                            return alpha;
                        }
                    }
                }
            }
        }

        for p in self.ordered_moves(board, player, depth) {
            if Some(p) == killer {
                continue;
            }
            if ko == Some(p) {
                continue;
            }
            let Ok((next, _)) = board.place(p, player) else {
                continue;
            };
            found_move = true;
            let score = -self.alpha_beta(&next, opp, player, ko, depth - 1, -beta, -alpha);
            *self.history.entry(p).or_insert(0) += 1 << depth;
            if score > alpha {
                alpha = score;
                if alpha >= beta {
                    self.killers.insert(depth, p);
                    self.cache.insert(key, alpha);
                    return alpha;
                }
            }
        }

        // Pass branch: taken when it improves alpha, and unconditionally
        // when no legal placement existed.
        let pass = -self.alpha_beta(board, opp, player, ko, depth - 1, -beta, -alpha);
        if !found_move || pass > alpha {
            alpha = pass;
        }

        self.cache.insert(key, alpha);
        alpha
    }

    /// All empty points, sorted by descending heuristic score: killer move
    /// first, then history weight, contact with existing stones, and
    /// adjacency to opposing chains at their last liberty.
    fn ordered_moves(&self, board: &Board, player: Stone, depth: u8) -> Vec<Point> {
        let killer = self.killers.get(&depth).copied();
        let opp = player.opp();

        let mut moves: Vec<(Point, i32)> = Vec::new();
        for row in 0..SIZE {
            for col in 0..SIZE {
                let p = (row, col);
                if board.stone_at(p).is_some() {
                    continue;
                }
                let mut score = 0;
                if killer == Some(p) {
                    score += KILLER_BONUS;
                }
                score += self.history.get(&p).copied().unwrap_or(0) * HISTORY_SCALE;
                for n in Board::neighbors(p) {
                    if board.stone_at(n).is_some() {
                        score += CONTACT_BONUS;
                    }
                    if board.stone_at(n) == Some(opp) && board.liberties(n).len() == 1 {
                        score += CAPTURE_BONUS;
                    }
                }
                moves.push((p, score));
            }
        }

        moves.sort_by(|a, b| b.1.cmp(&a.1));
        moves.into_iter().map(|(p, _)| p).collect()
    }
}

impl Default for AlphaBeta {
    fn default() -> Self {
        Self::new()
    }
}

impl Engine for AlphaBeta {
    /// Scores every empty, non-ko, non-suicidal point by a negamax search
    /// from the opponent's perspective, plus the pass branch. Returns a
    /// point only if it strictly beats passing.
    fn select_move(&mut self, board: &Board, player: Stone, ko: Option<Point>) -> Option<Point> {
        let opp = player.opp();
        let depth = self.depth;
        let mut best: Option<(Point, i32)> = None;

        for row in 0..SIZE {
            for col in 0..SIZE {
                let p = (row, col);
                if board.stone_at(p).is_some() || ko == Some(p) {
                    continue;
                }
                let Ok((next, _)) = board.place(p, player) else {
                    continue;
                };
                let score = -self.alpha_beta(&next, opp, player, ko, depth - 1, -INF, INF);
                if best.is_none_or(|(_, s)| score > s) {
                    best = Some((p, score));
                }
            }
        }

        let pass = -self.alpha_beta(board, opp, player, ko, depth - 1, -INF, INF);
        match best {
            Some((p, score)) if score > pass => Some(p),
            _ => None,
        }
    }
}

/// Positional fingerprint of `(board, side to move)`: a base-3 polynomial
/// over the cells. Simple and collision-prone compared to Zobrist hashing;
/// kept deliberately, and deliberately ignorant of ko and depth.
fn position_hash(board: &Board, player: Stone) -> u64 {
    let mut h: u64 = 0;
    for &cell in board.cells() {
        h = h.wrapping_mul(3).wrapping_add((cell as i64 + 1) as u64);
    }
    h.wrapping_mul(3).wrapping_add((player.to_int() as i64 + 1) as u64)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hash_distinguishes_side_to_move() {
        let mut board = Board::new();
        board.set_stone((2, 2), Some(Stone::Black));
        assert_ne!(
            position_hash(&board, Stone::Black),
            position_hash(&board, Stone::White)
        );
        let copy = board;
        assert_eq!(
            position_hash(&board, Stone::Black),
            position_hash(&copy, Stone::Black)
        );
    }

    #[test]
    fn takes_an_obvious_capture_at_depth_one() {
        // White at (4,4) has one liberty left at (4,5); at depth 1 the
        // search is greedy on the evaluation and must take the capture.
        let mut board = Board::new();
        board.set_stone((4, 4), Some(Stone::White));
        board.set_stone((3, 4), Some(Stone::Black));
        board.set_stone((5, 4), Some(Stone::Black));
        board.set_stone((4, 3), Some(Stone::Black));

        let mut engine = AlphaBeta::with_depth(1);
        assert_eq!(engine.select_move(&board, Stone::Black, None), Some((4, 5)));
    }

    #[test]
    fn successive_calls_agree() {
        let mut board = Board::new();
        board.set_stone((4, 4), Some(Stone::White));
        board.set_stone((3, 4), Some(Stone::Black));
        board.set_stone((4, 3), Some(Stone::Black));

        let mut engine = AlphaBeta::with_depth(1);
        let first = engine.select_move(&board, Stone::Black, None);
        let second = engine.select_move(&board, Stone::Black, None);
        assert_eq!(first, second);
    }

    #[test]
    fn fresh_instances_agree() {
        let board = Board::from_layout(&[
            ".........",
            "..BW.....",
            "..BW.....",
            "....W....",
            ".........",
        ]);
        let a = AlphaBeta::with_depth(3).select_move(&board, Stone::Black, None);
        let b = AlphaBeta::with_depth(3).select_move(&board, Stone::Black, None);
        assert_eq!(a, b);
    }

    #[test]
    fn passes_when_only_suicide_remains() {
        // All-black board with two eyes: every white placement is suicide.
        let mut board = Board::new();
        for row in 0..SIZE {
            for col in 0..SIZE {
                if (row, col) != (0, 0) && (row, col) != (8, 8) {
                    board.set_stone((row, col), Some(Stone::Black));
                }
            }
        }
        let mut engine = AlphaBeta::with_depth(2);
        assert_eq!(engine.select_move(&board, Stone::White, None), None);
    }

    #[test]
    fn passes_on_full_board() {
        let mut board = Board::new();
        for row in 0..SIZE {
            for col in 0..SIZE {
                board.set_stone((row, col), Some(Stone::Black));
            }
        }
        let mut engine = AlphaBeta::with_depth(2);
        assert_eq!(engine.select_move(&board, Stone::White, None), None);
    }

    #[test]
    fn ko_point_is_never_proposed() {
        // One empty point which would be a legal (capturing) move, but it
        // is locked by ko.
        let mut board = Board::new();
        for row in 0..SIZE {
            for col in 0..SIZE {
                if (row, col) != (0, 0) {
                    board.set_stone((row, col), Some(Stone::Black));
                }
            }
        }
        let mut engine = AlphaBeta::with_depth(1);
        assert_eq!(engine.select_move(&board, Stone::White, None), Some((0, 0)));
        let mut locked = AlphaBeta::with_depth(1);
        assert_eq!(locked.select_move(&board, Stone::White, Some((0, 0))), None);
    }

    #[test]
    fn killer_move_is_ordered_first() {
        let mut engine = AlphaBeta::with_depth(2);
        engine.killers.insert(2, (7, 7));
        let board = Board::new();
        let ordered = engine.ordered_moves(&board, Stone::Black, 2);
        assert_eq!(ordered[0], (7, 7));
    }

    #[test]
    fn capture_opportunities_rank_above_quiet_moves() {
        // White (0,0) in atari: its last liberty (1,0) should outrank a
        // point far from any stone.
        let board = Board::from_layout(&[
            "WB.......",
            ".........",
        ]);
        let engine = AlphaBeta::with_depth(2);
        let ordered = engine.ordered_moves(&board, Stone::Black, 2);
        let capture_rank = ordered.iter().position(|&p| p == (1, 0)).unwrap();
        let quiet_rank = ordered.iter().position(|&p| p == (8, 8)).unwrap();
        assert!(capture_rank < quiet_rank);
    }

    #[test]
    fn tables_are_retained_across_calls() {
        let mut board = Board::new();
        board.set_stone((4, 4), Some(Stone::White));
        let mut engine = AlphaBeta::with_depth(2);
        engine.select_move(&board, Stone::Black, None);
        assert!(!engine.cache.is_empty());
        assert!(!engine.history.is_empty());
    }
}
