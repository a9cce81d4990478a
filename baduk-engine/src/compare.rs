use crate::Point;
use crate::board::Board;
use crate::engine::Engine;
use crate::eval::evaluate;
use crate::stone::Stone;

/// Result of a [`play_match`] from the first engine's perspective.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchOutcome {
    FirstWins,
    SecondWins,
    Draw,
}

/// Play two engines against each other from `board`, `first` taking
/// `first_player`. Ends after two consecutive passes or `max_moves` turns,
/// whichever comes first; the winner is the sign of the final evaluation
/// for `first_player`.
///
/// Moves are applied with full capture resolution and ko tracking; an
/// engine proposing a point its own contract forbids (occupied, suicidal)
/// is scored as having passed.
pub fn play_match(
    first: &mut dyn Engine,
    second: &mut dyn Engine,
    mut board: Board,
    first_player: Stone,
    max_moves: u32,
) -> MatchOutcome {
    let mut player = first_player;
    let mut ko: Option<Point> = None;
    let mut passes = 0;
    let mut moves = 0;

    while moves < max_moves && passes < 2 {
        let engine: &mut dyn Engine = if player == first_player {
            first
        } else {
            second
        };

        let proposal = engine
            .select_move(&board, player, ko)
            .filter(|&p| ko != Some(p));

        match proposal.and_then(|p| board.place(p, player).ok().map(|r| (p, r))) {
            Some((p, (next, captured))) => {
                passes = 0;
                ko = next.ko_from_capture(p, player, &captured);
                board = next;
            }
            None => {
                passes += 1;
                ko = None;
            }
        }

        player = player.opp();
        moves += 1;
    }

    let score = evaluate(&board, first_player, first_player.opp());
    match score.cmp(&0) {
        std::cmp::Ordering::Greater => MatchOutcome::FirstWins,
        std::cmp::Ordering::Less => MatchOutcome::SecondWins,
        std::cmp::Ordering::Equal => MatchOutcome::Draw,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Engine that always passes.
    struct PassEngine;

    impl Engine for PassEngine {
        fn select_move(&mut self, _: &Board, _: Stone, _: Option<Point>) -> Option<Point> {
            None
        }
    }

    /// Engine that plays the first legal point, scanning row-major.
    struct FirstPointEngine;

    impl Engine for FirstPointEngine {
        fn select_move(&mut self, board: &Board, player: Stone, ko: Option<Point>) -> Option<Point> {
            for row in 0..crate::SIZE {
                for col in 0..crate::SIZE {
                    let p = (row, col);
                    if ko != Some(p) && board.place(p, player).is_ok() {
                        return Some(p);
                    }
                }
            }
            None
        }
    }

    #[test]
    fn two_passes_end_the_game_in_a_draw() {
        let outcome = play_match(
            &mut PassEngine,
            &mut PassEngine,
            Board::new(),
            Stone::Black,
            100,
        );
        assert_eq!(outcome, MatchOutcome::Draw);
    }

    #[test]
    fn playing_side_beats_passing_side() {
        let outcome = play_match(
            &mut FirstPointEngine,
            &mut PassEngine,
            Board::new(),
            Stone::Black,
            10,
        );
        assert_eq!(outcome, MatchOutcome::FirstWins);
    }

    #[test]
    fn move_cap_terminates_mirror_games() {
        // Two engines that both keep playing; the cap must end the game.
        let outcome = play_match(
            &mut FirstPointEngine,
            &mut FirstPointEngine,
            Board::new(),
            Stone::Black,
            20,
        );
        // 20 alternating first-point moves leave an even-ish but decided
        // position; the important property is termination, not the winner.
        let _ = outcome;
    }

    #[test]
    fn seeded_random_match_is_reproducible() {
        let run = || {
            let mut a = crate::RandomEngine::with_seed(11);
            let mut b = crate::RandomEngine::with_seed(22);
            play_match(&mut a, &mut b, Board::new(), Stone::Black, 40)
        };
        assert_eq!(run(), run());
    }
}
