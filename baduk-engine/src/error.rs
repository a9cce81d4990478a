use std::fmt;

/// Why a stone could not be placed. Ko is not part of this enum: the simple
/// ko check compares against the previous board (`Board::is_legal`) or a
/// forbidden point carried by the caller, both outside `Board::place`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlaceError {
    NotOnBoard,
    Occupied,
    Suicide,
}

impl fmt::Display for PlaceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PlaceError::NotOnBoard => write!(f, "point is not on the board"),
            PlaceError::Occupied => write!(f, "point is already occupied"),
            PlaceError::Suicide => write!(f, "suicide"),
        }
    }
}

impl std::error::Error for PlaceError {}
