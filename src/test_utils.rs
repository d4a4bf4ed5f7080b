//! Fixture boards shared across the test modules. Each `*_MOVE_TILES` board
//! was produced by walking that many blank moves backwards from the goal
//! without revisiting a board; in each case the manhattan distance equals the
//! walk length, so the walk length is also the optimal solution depth.

pub use crate::search::Board;

/// Solved by a single `Right`.
pub const ONE_MOVE_TILES: [u8; 9] = [1, 2, 3, 4, 5, 6, 7, 0, 8];

/// Solved by `Right Down`.
pub const TWO_MOVE_TILES: [u8; 9] = [1, 2, 3, 4, 0, 5, 7, 8, 6];

/// Solved by `Down Right Down`.
pub const THREE_MOVE_TILES: [u8; 9] = [1, 0, 3, 4, 2, 5, 7, 8, 6];

/// Solved by `Right Down Right Down`.
pub const FOUR_MOVE_TILES: [u8; 9] = [0, 1, 3, 4, 2, 5, 7, 8, 6];

pub fn board(tiles: [u8; 9]) -> Board {
    Board::new(tiles).expect("test boards must be permutations of 0-8")
}
