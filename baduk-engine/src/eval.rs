use crate::board::{Board, SIZE};
use crate::stone::Stone;

// Evaluation weights. Material dominates, liberties proxy for safety,
// chains down to one liberty swing the score asymmetrically (capturing the
// opponent outweighs the symmetric risk), fragmentation breaks ties.
const STONE_WEIGHT: i32 = 10;
const LIBERTY_WEIGHT: i32 = 2;
const ATARI_WEIGHT: i32 = 8;
const GROUP_WEIGHT: i32 = 1;

/// Static score of `board` from `player`'s perspective, positive favoring
/// `player`. Antisymmetric: `evaluate(b, x, y) == -evaluate(b, y, x)`.
///
/// Partitions the board into chains exactly once via a visited bitset; each
/// stone is flood-filled a single time.
pub fn evaluate(board: &Board, player: Stone, opponent: Stone) -> i32 {
    let mut player_stones = 0i32;
    let mut opp_stones = 0i32;
    let mut player_libs = 0i32;
    let mut opp_libs = 0i32;
    let mut player_groups = 0i32;
    let mut opp_groups = 0i32;
    let mut player_atari = 0i32;
    let mut opp_atari = 0i32;

    let mut visited = [false; SIZE as usize * SIZE as usize];
    for row in 0..SIZE {
        for col in 0..SIZE {
            let p = (row, col);
            let i = row as usize * SIZE as usize + col as usize;
            if visited[i] {
                continue;
            }
            let Some(stone) = board.stone_at(p) else {
                continue;
            };

            let chain = board.chain(p);
            let libs = board.chain_liberties(&chain);
            for &(r, c) in &chain {
                visited[r as usize * SIZE as usize + c as usize] = true;
            }

            let stones = chain.len() as i32;
            let in_atari = if libs.len() == 1 { stones } else { 0 };
            if stone == player {
                player_stones += stones;
                player_libs += libs.len() as i32;
                player_groups += 1;
                player_atari += in_atari;
            } else if stone == opponent {
                opp_stones += stones;
                opp_libs += libs.len() as i32;
                opp_groups += 1;
                opp_atari += in_atari;
            }
        }
    }

    (player_stones - opp_stones) * STONE_WEIGHT
        + (player_libs - opp_libs) * LIBERTY_WEIGHT
        + (opp_atari - player_atari) * ATARI_WEIGHT
        + (player_groups - opp_groups) * GROUP_WEIGHT
}
