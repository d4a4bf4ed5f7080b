use strum_macros::{Display, EnumIter};

/// A move of the blank cell. Equivalently, the tile in that direction slides
/// into the blank's former position. The enum iteration order (Up, Down,
/// Left, Right) is the fixed expansion order of the search.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumIter)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    /// Row and column offset of the blank's target cell.
    pub(crate) fn delta(&self) -> (i32, i32) {
        match self {
            Direction::Up => (-1, 0),
            Direction::Down => (1, 0),
            Direction::Left => (0, -1),
            Direction::Right => (0, 1),
        }
    }
}
