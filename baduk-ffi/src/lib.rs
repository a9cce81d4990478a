//! C-callable export layer: engines and boards live behind opaque `u64`
//! handles in process-wide registries, so foreign callers (e.g. a Python
//! driver loading the shared library via `ctypes`) never see Rust types.
//!
//! Conventions: every function returns a scalar. Handle-taking functions
//! return `false` / a negative sentinel when the handle is unknown. Stones
//! cross the boundary as `i8` (`1` Black, `-1` White); points as separate
//! row/col arguments; "no point" as `-1`.

use std::collections::HashMap;
use std::sync::{Mutex, OnceLock};

use baduk_engine::{AlphaBeta, Board, Engine, MatchOutcome, RandomEngine, SIZE, Stone, play_match};

/// Returned by [`engine_move`] when the engine passes.
pub const MOVE_PASS: i32 = -1;
/// Returned on an unknown handle or invalid argument.
pub const MOVE_ERROR: i32 = -2;

struct Registry<T> {
    next_id: u64,
    objects: HashMap<u64, T>,
}

impl<T> Registry<T> {
    fn new() -> Self {
        Registry {
            next_id: 0,
            objects: HashMap::new(),
        }
    }

    fn insert(&mut self, value: T) -> u64 {
        let id = self.next_id;
        self.next_id += 1;
        self.objects.insert(id, value);
        id
    }
}

type BoxedEngine = Box<dyn Engine + Send>;

fn engines() -> &'static Mutex<Registry<BoxedEngine>> {
    static ENGINES: OnceLock<Mutex<Registry<BoxedEngine>>> = OnceLock::new();
    ENGINES.get_or_init(|| Mutex::new(Registry::new()))
}

fn boards() -> &'static Mutex<Registry<Board>> {
    static BOARDS: OnceLock<Mutex<Registry<Board>>> = OnceLock::new();
    BOARDS.get_or_init(|| Mutex::new(Registry::new()))
}

fn lock<T>(mutex: &Mutex<T>) -> std::sync::MutexGuard<'_, T> {
    // A poisoned registry only means another caller panicked mid-call; the
    // map itself is still usable.
    mutex.lock().unwrap_or_else(|e| e.into_inner())
}

// -- Constructors --

#[unsafe(no_mangle)]
pub extern "C" fn new_alpha_beta_engine() -> u64 {
    lock(engines()).insert(Box::new(AlphaBeta::new()))
}

#[unsafe(no_mangle)]
pub extern "C" fn new_alpha_beta_engine_with_depth(depth: u8) -> u64 {
    lock(engines()).insert(Box::new(AlphaBeta::with_depth(depth)))
}

#[unsafe(no_mangle)]
pub extern "C" fn new_random_engine() -> u64 {
    lock(engines()).insert(Box::new(RandomEngine::new()))
}

#[unsafe(no_mangle)]
pub extern "C" fn new_board() -> u64 {
    lock(boards()).insert(Board::new())
}

// -- Board access --

/// Cell content at (row, col): `1` Black, `-1` White, `0` empty,
/// [`MOVE_ERROR`] on a bad handle or out-of-range point.
#[unsafe(no_mangle)]
pub extern "C" fn board_get(board: u64, row: u8, col: u8) -> i8 {
    if row >= SIZE || col >= SIZE {
        return MOVE_ERROR as i8;
    }
    match lock(boards()).objects.get(&board) {
        Some(b) => b.stone_at((row, col)).map_or(0, Stone::to_int),
        None => MOVE_ERROR as i8,
    }
}

/// Overwrite a cell (position setup, no rules applied).
#[unsafe(no_mangle)]
pub extern "C" fn board_set(board: u64, row: u8, col: u8, value: i8) -> bool {
    if row >= SIZE || col >= SIZE {
        return false;
    }
    match lock(boards()).objects.get_mut(&board) {
        Some(b) => {
            b.set_stone((row, col), Stone::from_int(value));
            true
        }
        None => false,
    }
}

/// Play a stone with full rules (captures resolved, suicide rejected).
#[unsafe(no_mangle)]
pub extern "C" fn board_play(board: u64, row: u8, col: u8, stone: i8) -> bool {
    let Some(stone) = Stone::from_int(stone) else {
        return false;
    };
    match lock(boards()).objects.get_mut(&board) {
        Some(b) => match b.place((row, col), stone) {
            Ok((next, _)) => {
                *b = next;
                true
            }
            Err(_) => false,
        },
        None => false,
    }
}

/// Territory score packed as `(black << 32) | white`, or `-1` on a bad
/// handle.
#[unsafe(no_mangle)]
pub extern "C" fn board_score(board: u64) -> i64 {
    match lock(boards()).objects.get(&board) {
        Some(b) => {
            let (black, white) = b.score();
            ((black as i64) << 32) | white as i64
        }
        None => -1,
    }
}

// -- Engine calls --

/// Ask an engine for a move. `ko_row`/`ko_col` < 0 mean "no ko point".
/// Returns `row * 9 + col`, [`MOVE_PASS`], or [`MOVE_ERROR`].
#[unsafe(no_mangle)]
pub extern "C" fn engine_move(engine: u64, board: u64, stone: i8, ko_row: i16, ko_col: i16) -> i32 {
    let Some(stone) = Stone::from_int(stone) else {
        return MOVE_ERROR;
    };
    let ko = if ko_row >= 0 && ko_col >= 0 {
        Some((ko_row as u8, ko_col as u8))
    } else {
        None
    };
    let Some(snapshot) = lock(boards()).objects.get(&board).copied() else {
        return MOVE_ERROR;
    };
    match lock(engines()).objects.get_mut(&engine) {
        Some(e) => match e.select_move(&snapshot, stone, ko) {
            Some((row, col)) => row as i32 * SIZE as i32 + col as i32,
            None => MOVE_PASS,
        },
        None => MOVE_ERROR,
    }
}

/// Pit two engine handles against each other on a copy of the given board.
/// Returns `1` if the first engine wins, `2` for the second, `0` for a
/// draw, [`MOVE_ERROR`] on a bad handle.
#[unsafe(no_mangle)]
pub extern "C" fn compare_engines(
    first: u64,
    second: u64,
    board: u64,
    first_stone: i8,
    max_moves: u32,
) -> i32 {
    let Some(stone) = Stone::from_int(first_stone) else {
        return MOVE_ERROR;
    };
    let Some(snapshot) = lock(boards()).objects.get(&board).copied() else {
        return MOVE_ERROR;
    };
    let mut registry = lock(engines());
    if first == second || !registry.objects.contains_key(&first) {
        return MOVE_ERROR;
    }
    // Take the second engine out briefly so both can be borrowed mutably.
    let Some(mut second_engine) = registry.objects.remove(&second) else {
        return MOVE_ERROR;
    };
    let first_engine = registry
        .objects
        .get_mut(&first)
        .expect("checked above");

    let outcome = play_match(
        first_engine.as_mut(),
        second_engine.as_mut(),
        snapshot,
        stone,
        max_moves,
    );
    registry.objects.insert(second, second_engine);

    match outcome {
        MatchOutcome::FirstWins => 1,
        MatchOutcome::SecondWins => 2,
        MatchOutcome::Draw => 0,
    }
}

// -- Teardown --

#[unsafe(no_mangle)]
pub extern "C" fn destroy_engine(engine: u64) -> bool {
    lock(engines()).objects.remove(&engine).is_some()
}

#[unsafe(no_mangle)]
pub extern "C" fn destroy_board(board: u64) -> bool {
    lock(boards()).objects.remove(&board).is_some()
}
