mod board;
mod direction;
mod error;
pub mod heuristics;
mod plan;
pub mod search_engines;
mod validate;
mod verbosity;

pub use board::{Board, GOAL_TILES};
pub use direction::Direction;
pub use error::SearchError;
pub use heuristics::{Heuristic, HeuristicName, HeuristicValue};
pub use plan::Plan;
pub use search_engines::{SearchEngineName, SearchResult, SearchStatistics};
pub use validate::validate;
pub use verbosity::Verbosity;
