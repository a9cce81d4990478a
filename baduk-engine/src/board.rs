use arrayvec::ArrayVec;

use crate::Point;
use crate::error::PlaceError;
use crate::stone::Stone;

/// Side length of the board.
pub const SIZE: u8 = 9;

const CELLS: usize = SIZE as usize * SIZE as usize;

/// A 9x9 Go board stored as a flat array of `i8` cells (`0` empty, `1`
/// Black, `-1` White).
///
/// `Board` is `Copy`: game actions return a new board instead of mutating,
/// and every search branch works on its own copy.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Board {
    cells: [i8; CELLS],
}

impl Default for Board {
    fn default() -> Self {
        Board { cells: [0; CELLS] }
    }
}

impl Board {
    pub fn new() -> Self {
        Self::default()
    }

    // -- Accessors --

    pub fn cells(&self) -> &[i8; CELLS] {
        &self.cells
    }

    pub fn stone_at(&self, point: Point) -> Option<Stone> {
        if self.on_board(point) {
            Stone::from_int(self.cells[Self::idx(point)])
        } else {
            None
        }
    }

    pub fn on_board(&self, (row, col): Point) -> bool {
        row < SIZE && col < SIZE
    }

    pub fn is_empty(&self) -> bool {
        self.cells.iter().all(|&c| c == 0)
    }

    /// Overwrite a cell without any rules checks (position setup only).
    /// Off-board points are ignored.
    pub fn set_stone(&mut self, point: Point, stone: Option<Stone>) {
        if self.on_board(point) {
            self.cells[Self::idx(point)] = stone.map_or(0, Stone::to_int);
        }
    }

    // -- Game actions --

    /// Place a stone: resolve captures of adjacent opposing chains first,
    /// then reject suicide. Returns the resulting board and the captured
    /// points. Does not mutate `self`.
    pub fn place(&self, point: Point, stone: Stone) -> Result<(Board, Vec<Point>), PlaceError> {
        if !self.on_board(point) {
            return Err(PlaceError::NotOnBoard);
        }
        if self.stone_at(point).is_some() {
            return Err(PlaceError::Occupied);
        }

        let mut next = *self;
        next.cells[Self::idx(point)] = stone.to_int();

        // Captures resolve before the suicide check: a placement with no
        // liberties of its own is legal if it removes an opposing chain.
        let mut captured = Vec::new();
        for chain in next.opponent_neighbor_chains(point) {
            if next.chain_liberties(&chain).is_empty() {
                captured.extend_from_slice(&chain);
            }
        }
        for &p in &captured {
            next.cells[Self::idx(p)] = 0;
        }

        if next.liberties(point).is_empty() {
            return Err(PlaceError::Suicide);
        }

        Ok((next, captured))
    }

    /// Simple-ko legality: the placement must succeed and must not recreate
    /// `prev` cell for cell. Only the immediately preceding board is
    /// checked, never deeper history.
    pub fn is_legal(&self, point: Point, stone: Stone, prev: &Board) -> bool {
        match self.place(point, stone) {
            Ok((next, _)) => next != *prev,
            Err(_) => false,
        }
    }

    /// Detect the single-stone snapback ko after a successful placement on
    /// this board (`self` is the post-move board). Returns the point
    /// forbidden for the opponent's reply, if any.
    pub fn ko_from_capture(&self, point: Point, stone: Stone, captured: &[Point]) -> Option<Point> {
        let libs = self.liberties(point);
        let is_ko = captured.len() == 1
            && libs.len() == 1
            && libs[0] == captured[0]
            && Self::neighbors(point)
                .iter()
                .all(|&n| self.stone_at(n) != Some(stone));
        if is_ko { Some(captured[0]) } else { None }
    }

    // -- Graph algorithms --

    /// The in-bounds orthogonal neighbors of a point: 2 at a corner, 3 on
    /// an edge, 4 in the interior.
    pub fn neighbors((row, col): Point) -> ArrayVec<Point, 4> {
        let mut result = ArrayVec::new();
        if row > 0 {
            result.push((row - 1, col));
        }
        if row + 1 < SIZE {
            result.push((row + 1, col));
        }
        if col > 0 {
            result.push((row, col - 1));
        }
        if col + 1 < SIZE {
            result.push((row, col + 1));
        }
        result
    }

    /// Flood-fill the maximal same-colored chain containing `point`, using
    /// an explicit stack. Calling this on an empty cell is a caller error
    /// and yields an empty chain.
    pub fn chain(&self, point: Point) -> Vec<Point> {
        debug_assert!(self.stone_at(point).is_some(), "chain() on empty cell");
        let Some(stone) = self.stone_at(point) else {
            return Vec::new();
        };

        let mut visited = [false; CELLS];
        let mut result = Vec::new();
        let mut stack = vec![point];

        while let Some(p) = stack.pop() {
            let pi = Self::idx(p);
            if visited[pi] {
                continue;
            }
            visited[pi] = true;
            result.push(p);
            for n in Self::neighbors(p) {
                if self.stone_at(n) == Some(stone) && !visited[Self::idx(n)] {
                    stack.push(n);
                }
            }
        }

        result
    }

    /// Liberties of the chain containing a single stone.
    pub fn liberties(&self, point: Point) -> Vec<Point> {
        let chain = self.chain(point);
        self.chain_liberties(&chain)
    }

    /// Distinct empty points adjacent to any stone of a pre-computed chain.
    pub fn chain_liberties(&self, chain: &[Point]) -> Vec<Point> {
        let mut seen = [false; CELLS];
        let mut libs = Vec::new();
        for &p in chain {
            for n in Self::neighbors(p) {
                let ni = Self::idx(n);
                if !seen[ni] && self.stone_at(n).is_none() {
                    seen[ni] = true;
                    libs.push(n);
                }
            }
        }
        libs
    }

    /// Opposing chains adjacent to `point`, each reported once.
    fn opponent_neighbor_chains(&self, point: Point) -> Vec<Vec<Point>> {
        let Some(stone) = self.stone_at(point) else {
            return Vec::new();
        };
        let opponent = stone.opp();

        let mut chains = Vec::new();
        let mut claimed = [false; CELLS];

        for n in Self::neighbors(point) {
            if self.stone_at(n) != Some(opponent) || claimed[Self::idx(n)] {
                continue;
            }
            let chain = self.chain(n);
            for &p in &chain {
                claimed[Self::idx(p)] = true;
            }
            chains.push(chain);
        }

        chains
    }

    // -- Scoring --

    /// Territory count as `(black, white)`. Every stone scores one point
    /// for its color; each empty region bordered exclusively by one color
    /// scores its whole area for that color. Mixed-bordered regions and
    /// regions bordering nothing (the empty board) are neutral.
    pub fn score(&self) -> (u32, u32) {
        let mut black = 0;
        let mut white = 0;
        let mut visited = [false; CELLS];

        for row in 0..SIZE {
            for col in 0..SIZE {
                let p = (row, col);
                match self.stone_at(p) {
                    Some(Stone::Black) => black += 1,
                    Some(Stone::White) => white += 1,
                    None => {
                        if !visited[Self::idx(p)] {
                            let (area, owner) = self.territory_owner(p, &mut visited);
                            match owner {
                                Some(Stone::Black) => black += area,
                                Some(Stone::White) => white += area,
                                None => {}
                            }
                        }
                    }
                }
            }
        }

        (black, white)
    }

    /// Flood-fill one empty region; returns its area and the single color
    /// bordering it, if the border is uniform.
    fn territory_owner(&self, start: Point, visited: &mut [bool; CELLS]) -> (u32, Option<Stone>) {
        let mut area = 0;
        let mut borders_black = false;
        let mut borders_white = false;
        let mut stack = vec![start];

        while let Some(p) = stack.pop() {
            let pi = Self::idx(p);
            if visited[pi] {
                continue;
            }
            visited[pi] = true;
            area += 1;
            for n in Self::neighbors(p) {
                match self.stone_at(n) {
                    None => {
                        if !visited[Self::idx(n)] {
                            stack.push(n);
                        }
                    }
                    Some(Stone::Black) => borders_black = true,
                    Some(Stone::White) => borders_white = true,
                }
            }
        }

        let owner = match (borders_black, borders_white) {
            (true, false) => Some(Stone::Black),
            (false, true) => Some(Stone::White),
            _ => None,
        };
        (area, owner)
    }

    #[inline]
    fn idx((row, col): Point) -> usize {
        row as usize * SIZE as usize + col as usize
    }
}

#[cfg(test)]
impl Board {
    /// Test helper: build a board from an ASCII layout. 'B' = Black,
    /// 'W' = White, anything else = empty. Rows shorter than SIZE are
    /// padded with empty cells.
    pub(crate) fn from_layout(layout: &[&str]) -> Board {
        let mut board = Board::new();
        for (row, line) in layout.iter().enumerate() {
            for (col, c) in line.chars().enumerate() {
                let stone = match c {
                    'B' => Some(Stone::Black),
                    'W' => Some(Stone::White),
                    _ => None,
                };
                board.set_stone((row as u8, col as u8), stone);
            }
        }
        board
    }
}
