//! End-to-end scenarios driven through the public API only.

use baduk_engine::{AlphaBeta, Board, Engine, MatchOutcome, RandomEngine, Stone, play_match};

#[test]
fn scripted_opening_with_capture_and_ko() {
    // Build the classic ko shape move by move.
    let mut board = Board::new();
    for (point, stone) in [
        ((0, 1), Stone::Black),
        ((0, 2), Stone::White),
        ((1, 0), Stone::Black),
        ((1, 3), Stone::White),
        ((2, 1), Stone::Black),
        ((2, 2), Stone::White),
        ((1, 1), Stone::White),
    ] {
        let (next, captured) = board.place(point, stone).expect("scripted move is legal");
        assert!(captured.is_empty());
        board = next;
    }

    // Black takes the ko.
    let before = board;
    let (after, captured) = board.place((1, 2), Stone::Black).unwrap();
    assert_eq!(captured, vec![(1, 1)]);
    assert_eq!(
        after.ko_from_capture((1, 2), Stone::Black, &captured),
        Some((1, 1))
    );

    // White may not retake immediately, but may after a move elsewhere.
    assert!(!after.is_legal((1, 1), Stone::White, &before));
    let (after, _) = after.place((8, 8), Stone::White).unwrap();
    let (after, _) = after.place((8, 0), Stone::Black).unwrap();
    assert!(after.place((1, 1), Stone::White).is_ok());
}

#[test]
fn engines_finish_a_game_and_the_board_scores() {
    let mut search = AlphaBeta::with_depth(2);
    let mut random = RandomEngine::with_seed(3);
    let outcome = play_match(&mut search, &mut random, Board::new(), Stone::Black, 60);
    // Any outcome is acceptable; the game must end and the final board must
    // still score without panicking.
    match outcome {
        MatchOutcome::FirstWins | MatchOutcome::SecondWins | MatchOutcome::Draw => {}
    }
}

#[test]
fn search_engine_respects_the_contract_board_is_unchanged() {
    let mut board = Board::new();
    board.set_stone((4, 4), Some(Stone::White));
    let snapshot = board;

    let mut engine = AlphaBeta::with_depth(2);
    let _ = engine.select_move(&board, Stone::Black, None);
    assert_eq!(board, snapshot);
}

#[test]
fn substitutable_engines_share_one_call_surface() {
    let board = Board::new();
    let mut engines: Vec<Box<dyn Engine>> = vec![
        Box::new(AlphaBeta::with_depth(1)),
        Box::new(RandomEngine::with_seed(9)),
    ];
    for engine in &mut engines {
        // Both must yield a playable point on an open board.
        let p = engine.select_move(&board, Stone::Black, None).unwrap();
        assert!(board.place(p, Stone::Black).is_ok());
    }
}
