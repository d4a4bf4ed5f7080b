use crate::search::heuristics::{Heuristic, HeuristicValue};
use crate::search::{Board, GOAL_TILES};

/// Counts the non-blank tiles that are not on their goal cell.
#[derive(Debug, Clone, Default)]
pub struct MisplacedTiles;

impl MisplacedTiles {
    pub fn new() -> Self {
        MisplacedTiles
    }
}

impl Heuristic for MisplacedTiles {
    fn evaluate(&mut self, board: &Board) -> HeuristicValue {
        let misplaced = board
            .tiles()
            .iter()
            .zip(GOAL_TILES.iter())
            .filter(|&(&tile, &goal)| tile != 0 && tile != goal)
            .count();
        (misplaced as f64).into()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::*;

    #[test]
    fn zero_on_goal() {
        let mut heuristic = MisplacedTiles::new();
        assert_eq!(heuristic.evaluate(&Board::goal()), HeuristicValue::from(0.));
    }

    #[test]
    fn counts_out_of_place_tiles() {
        let mut heuristic = MisplacedTiles::new();
        assert_eq!(
            heuristic.evaluate(&board(ONE_MOVE_TILES)),
            HeuristicValue::from(1.)
        );
        assert_eq!(
            heuristic.evaluate(&board(FOUR_MOVE_TILES)),
            HeuristicValue::from(4.)
        );
    }

    #[test]
    fn blank_is_not_counted() {
        // Only the blank and tile 8 are displaced, so the count is 1, not 2.
        let mut heuristic = MisplacedTiles::new();
        assert_eq!(
            heuristic.evaluate(&board([1, 2, 3, 4, 5, 6, 7, 0, 8])),
            HeuristicValue::from(1.)
        );
    }
}
