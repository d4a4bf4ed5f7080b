use crate::search::heuristics::{EuclideanDistance, ManhattanDistance, MisplacedTiles};
use crate::search::Board;
use ordered_float::OrderedFloat;
use std::fmt::Debug;
use strum_macros::Display;

pub type HeuristicValue = OrderedFloat<f64>;

pub trait Heuristic: Debug {
    /// Estimate the remaining cost from `board` to the goal. Never negative,
    /// and 0 on the goal board. The blank is excluded from scoring.
    fn evaluate(&mut self, board: &Board) -> HeuristicValue;
}

#[derive(clap::ValueEnum, Display, Debug, Clone, Copy, PartialEq, Eq)]
#[clap(rename_all = "kebab-case")]
#[strum(serialize_all = "lowercase")]
pub enum HeuristicName {
    #[clap(
        name = "misplaced",
        help = "Count of tiles out of place. Admissible but weakly informative."
    )]
    Misplaced,
    #[clap(
        name = "manhattan",
        help = "Sum of tile grid distances to their goal cells. Admissible \
        and consistent, the standard choice for A*."
    )]
    Manhattan,
    #[clap(
        name = "euclidean",
        help = "Sum of straight-line tile distances to their goal cells. \
        Admissible, real-valued, guides more weakly than manhattan."
    )]
    Euclidean,
}

impl HeuristicName {
    pub fn create(&self) -> Box<dyn Heuristic> {
        match self {
            HeuristicName::Misplaced => Box::new(MisplacedTiles::new()),
            HeuristicName::Manhattan => Box::new(ManhattanDistance::new()),
            HeuristicName::Euclidean => Box::new(EuclideanDistance::new()),
        }
    }
}
