use anyhow::Result;
use tracing::info;

use baduk_engine::{Board, MatchOutcome, Stone, play_match};

use crate::config::Config;

/// Run `games` matches of `config.engine` (Black, moves first) against
/// `config.opponent` and print the tally. Each game gets fresh engine
/// instances so no search tables leak between games.
pub fn run(config: &Config, games: u32) -> Result<()> {
    let mut first_wins = 0u32;
    let mut second_wins = 0u32;
    let mut draws = 0u32;

    for game in 1..=games {
        let mut first = config.build_engine(config.engine);
        let mut second = config.build_engine(config.opponent);
        let outcome = play_match(
            first.as_mut(),
            second.as_mut(),
            Board::new(),
            Stone::Black,
            config.max_moves,
        );
        info!(game, ?outcome, "game finished");
        match outcome {
            MatchOutcome::FirstWins => first_wins += 1,
            MatchOutcome::SecondWins => second_wins += 1,
            MatchOutcome::Draw => draws += 1,
        }
    }

    println!(
        "{:?} vs {:?} over {} games: {} / {} / {} (first / second / draws)",
        config.engine, config.opponent, games, first_wins, second_wins, draws
    );
    Ok(())
}
