use crate::search::board::coordinates;
use crate::search::heuristics::{Heuristic, HeuristicValue};
use crate::search::Board;

/// Sums the grid distances of the non-blank tiles to their goal cells. The
/// goal cell of tile value `v` is index `v - 1`.
#[derive(Debug, Clone, Default)]
pub struct ManhattanDistance;

impl ManhattanDistance {
    pub fn new() -> Self {
        ManhattanDistance
    }
}

impl Heuristic for ManhattanDistance {
    fn evaluate(&mut self, board: &Board) -> HeuristicValue {
        let mut distance = 0;
        for (index, &tile) in board.tiles().iter().enumerate() {
            if tile == 0 {
                continue;
            }
            let (row, col) = coordinates(index);
            let (goal_row, goal_col) = coordinates(tile as usize - 1);
            distance += (row - goal_row).abs() + (col - goal_col).abs();
        }
        (f64::from(distance)).into()
    }
}
