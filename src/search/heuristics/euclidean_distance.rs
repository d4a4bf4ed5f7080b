use crate::search::board::coordinates;
use crate::search::heuristics::{Heuristic, HeuristicValue};
use crate::search::Board;

/// Sums the straight-line distances of the non-blank tiles to their goal
/// cells. Fractional for diagonal displacements, so it underestimates more
/// than [`ManhattanDistance`](crate::search::heuristics::ManhattanDistance)
/// while staying admissible.
#[derive(Debug, Clone, Default)]
pub struct EuclideanDistance;

impl EuclideanDistance {
    pub fn new() -> Self {
        EuclideanDistance
    }
}

impl Heuristic for EuclideanDistance {
    fn evaluate(&mut self, board: &Board) -> HeuristicValue {
        let mut distance = 0.;
        for (index, &tile) in board.tiles().iter().enumerate() {
            if tile == 0 {
                continue;
            }
            let (row, col) = coordinates(index);
            let (goal_row, goal_col) = coordinates(tile as usize - 1);
            let (row_delta, col_delta) = (row - goal_row, col - goal_col);
            distance += f64::from(row_delta * row_delta + col_delta * col_delta).sqrt();
        }
        distance.into()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::*;
    use assert_approx_eq::assert_approx_eq;

    #[test]
    fn zero_on_goal() {
        let mut heuristic = EuclideanDistance::new();
        assert_eq!(heuristic.evaluate(&Board::goal()), HeuristicValue::from(0.));
    }

    #[test]
    fn matches_manhattan_on_straight_displacements() {
        let mut heuristic = EuclideanDistance::new();
        assert_approx_eq!(
            heuristic.evaluate(&board(ONE_MOVE_TILES)).into_inner(),
            1.,
            1e-9
        );
        assert_approx_eq!(
            heuristic.evaluate(&board(FOUR_MOVE_TILES)).into_inner(),
            4.,
            1e-9
        );
    }

    #[test]
    fn diagonal_displacements_are_fractional() {
        // Tiles 1 and 5 swapped, each one diagonal step from home.
        let mut heuristic = EuclideanDistance::new();
        assert_approx_eq!(
            heuristic
                .evaluate(&board([5, 2, 3, 4, 1, 6, 7, 8, 0]))
                .into_inner(),
            2. * 2.0_f64.sqrt(),
            1e-9
        );
    }
}
