use crate::search::heuristics::HeuristicValue;
use crate::search::search_engines::{best_first, SearchStatistics};
use crate::search::{Board, Heuristic, Plan, SearchError};
use strum_macros::Display;

/// Outcome of a search run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchResult {
    /// A path from the start board to the goal was found
    Success(Plan),
    /// The frontier emptied without reaching the goal. For the 8-puzzle this
    /// only happens when the start board is in the unsolvable parity class,
    /// which is not detected up front; the reachable half of the state space
    /// is exhausted first.
    Exhausted,
}

#[derive(clap::ValueEnum, Display, Debug, Clone, Copy, PartialEq, Eq)]
#[clap(rename_all = "kebab-case")]
#[strum(serialize_all = "lowercase")]
pub enum SearchEngineName {
    #[clap(help = "Breadth-first search. Uninformed, returns minimum-depth paths.")]
    Bfs,
    #[clap(help = "Greedy best-first search, ordered by h alone. Fast but \
        without optimality guarantees.")]
    Gbfs,
    #[clap(help = "A* search, ordered by g + h. Returns minimum-depth paths \
        with any of the bundled (admissible) heuristics.")]
    Astar,
}

impl SearchEngineName {
    /// Searches for a path from `start` to the goal board. The engines share
    /// one best-first core; they differ only in the f-value computed here and
    /// in the frontier discipline.
    pub fn search(
        &self,
        start: &Board,
        heuristic: Option<Box<dyn Heuristic>>,
    ) -> Result<(SearchResult, SearchStatistics), SearchError> {
        best_first::search(*self, start, heuristic)
    }

    /// Breadth-first search is the only uninformed engine; it ignores a
    /// supplied heuristic.
    pub fn requires_heuristic(&self) -> bool {
        !matches!(self, SearchEngineName::Bfs)
    }

    pub(crate) fn f_value(&self, g: u32, h: HeuristicValue) -> HeuristicValue {
        match self {
            SearchEngineName::Bfs => (0.).into(),
            SearchEngineName::Gbfs => h,
            SearchEngineName::Astar => HeuristicValue::from(f64::from(g)) + h,
        }
    }
}
