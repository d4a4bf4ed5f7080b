use crate::search::SearchEngineName;
use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SearchError {
    /// The board is not a permutation of the values 0 through 8. Raised by
    /// the board constructors, so it always fires before any search begins.
    #[error("invalid board: {0}")]
    InvalidBoard(String),
    /// An informed engine was invoked without a heuristic evaluator. Raised
    /// before any node is expanded.
    #[error("search engine {0} requires a heuristic")]
    MissingHeuristic(SearchEngineName),
}
