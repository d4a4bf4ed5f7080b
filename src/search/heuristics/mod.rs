mod euclidean_distance;
mod heuristic;
mod manhattan_distance;
mod misplaced_tiles;

pub use euclidean_distance::EuclideanDistance;
pub use heuristic::{Heuristic, HeuristicName, HeuristicValue};
pub use manhattan_distance::ManhattanDistance;
pub use misplaced_tiles::MisplacedTiles;
