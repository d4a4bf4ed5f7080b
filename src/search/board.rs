use crate::search::{Direction, SearchError};
use rand::{seq::SliceRandom, Rng};
use std::fmt;
use std::str::FromStr;
use strum::IntoEnumIterator;

/// The goal configuration, with the blank in the bottom-right cell.
pub const GOAL_TILES: [u8; 9] = [1, 2, 3, 4, 5, 6, 7, 8, 0];

const SIDE: i32 = 3;

/// A 3×3 board as nine tile values in row order, 0 for the blank. A `Board`
/// is always a permutation of 0..=8; the validating constructors are the only
/// way to build one. Equality and hashing are structural, which is what the
/// goal test and the visited registry of the search rely on.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Board([u8; 9]);

impl Board {
    pub fn new(tiles: [u8; 9]) -> Result<Self, SearchError> {
        let mut seen = [false; 9];
        for &tile in &tiles {
            if tile > 8 {
                return Err(SearchError::InvalidBoard(format!(
                    "tile value {tile} is out of range 0-8"
                )));
            }
            if seen[tile as usize] {
                return Err(SearchError::InvalidBoard(format!(
                    "tile value {tile} appears more than once"
                )));
            }
            seen[tile as usize] = true;
        }
        Ok(Board(tiles))
    }

    pub fn goal() -> Self {
        Board(GOAL_TILES)
    }

    pub fn tiles(&self) -> &[u8; 9] {
        &self.0
    }

    pub fn is_goal(&self) -> bool {
        self.0 == GOAL_TILES
    }

    fn blank_index(&self) -> usize {
        self.0
            .iter()
            .position(|&tile| tile == 0)
            .expect("a board always contains the blank")
    }

    /// Applies a single blank move, or `None` if the blank would leave the
    /// grid.
    pub fn apply(&self, direction: Direction) -> Option<Board> {
        let blank = self.blank_index();
        let (row, col) = coordinates(blank);
        let (row_delta, col_delta) = direction.delta();
        let (target_row, target_col) = (row + row_delta, col + col_delta);
        if !(0..SIDE).contains(&target_row) || !(0..SIDE).contains(&target_col) {
            return None;
        }
        let target = (target_row * SIDE + target_col) as usize;
        let mut tiles = self.0;
        tiles.swap(blank, target);
        Some(Board(tiles))
    }

    /// All legal successor boards, in the fixed order Up, Down, Left, Right.
    /// Yields 2 successors when the blank is in a corner, 3 on an edge and 4
    /// in the center.
    pub fn neighbors(&self) -> Vec<(Board, Direction)> {
        Direction::iter()
            .filter_map(|direction| self.apply(direction).map(|board| (board, direction)))
            .collect()
    }

    /// Random walk backwards from the goal, so the result is always solvable.
    pub fn scrambled<R: Rng>(steps: usize, rng: &mut R) -> Board {
        let mut current = Board::goal();
        for _ in 0..steps {
            let neighbors = current.neighbors();
            let (next, _) = neighbors
                .choose(rng)
                .expect("every board has at least two successors");
            current = next.clone();
        }
        current
    }
}

/// `(row, col)` of a cell index.
pub(crate) fn coordinates(index: usize) -> (i32, i32) {
    (index as i32 / SIDE, index as i32 % SIDE)
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.0.chunks(SIDE as usize) {
            for (col, &tile) in row.iter().enumerate() {
                if col > 0 {
                    write!(f, " | ")?;
                }
                if tile == 0 {
                    write!(f, "_")?;
                } else {
                    write!(f, "{tile}")?;
                }
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

impl FromStr for Board {
    type Err = SearchError;

    /// Parses nine whitespace or comma separated tile values in row order,
    /// e.g. `"1 2 3 4 5 6 7 0 8"`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let values: Vec<u8> = s
            .split(|c: char| c.is_whitespace() || c == ',')
            .filter(|token| !token.is_empty())
            .map(|token| {
                token
                    .parse::<u8>()
                    .map_err(|_| SearchError::InvalidBoard(format!("cannot parse tile {token:?}")))
            })
            .collect::<Result<_, _>>()?;
        let tiles: [u8; 9] = values.try_into().map_err(|values: Vec<u8>| {
            SearchError::InvalidBoard(format!("expected 9 tiles, got {}", values.len()))
        })?;
        Board::new(tiles)
    }
}
