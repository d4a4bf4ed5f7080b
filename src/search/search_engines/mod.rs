mod best_first;
mod frontier;
mod search_engine;
mod search_node;
mod search_space;
mod search_statistics;

pub(crate) use frontier::Frontier;
pub use search_engine::{SearchEngineName, SearchResult};
pub use search_node::SearchNode;
pub use search_space::{SearchSpace, StateId, NO_STATE};
pub use search_statistics::SearchStatistics;
