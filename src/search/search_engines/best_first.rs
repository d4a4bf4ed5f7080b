//! Best-first search core shared by all three engines. Strategy selection is
//! a policy injection: the engines differ only in the f-value computation and
//! in the frontier discipline, both dispatched on [`SearchEngineName`], so
//! the state model, the node layout and the expansion loop are identical
//! across BFS, greedy best-first search and A*.

use crate::search::search_engines::{
    Frontier, SearchEngineName, SearchResult, SearchSpace, SearchStatistics,
};
use crate::search::{Board, Heuristic, SearchError};

/// Graph search with visited-at-discovery marking: a board is registered in
/// the search space the moment it is generated, so a cheaper path found later
/// to an already registered board is skipped, never reopened. This mirrors
/// the textbook graph-search variant; with a consistent heuristic (manhattan)
/// A* still returns minimum-depth paths.
pub(crate) fn search(
    engine: SearchEngineName,
    start: &Board,
    heuristic: Option<Box<dyn Heuristic>>,
) -> Result<(SearchResult, SearchStatistics), SearchError> {
    if engine.requires_heuristic() && heuristic.is_none() {
        return Err(SearchError::MissingHeuristic(engine));
    }
    let mut heuristic = if engine.requires_heuristic() {
        heuristic
    } else {
        None
    };

    let mut statistics = SearchStatistics::new();
    let root_h = match heuristic.as_mut() {
        Some(heuristic) => heuristic.evaluate(start),
        None => (0.).into(),
    };
    let root_f = engine.f_value(0, root_h);
    let mut search_space = SearchSpace::new(start.clone(), root_h, root_f);
    let mut frontier = Frontier::new(engine);
    frontier.push(search_space.root_id(), root_f);

    while let Some(state_id) = frontier.pop() {
        if search_space.board(state_id).is_goal() {
            let plan = search_space.extract_plan(state_id);
            statistics.finalise();
            return Ok((SearchResult::Success(plan), statistics));
        }

        statistics.increment_expanded_nodes();
        let g = search_space.node(state_id).g();
        let successors = search_space.board(state_id).neighbors();

        for (successor, direction) in successors {
            if search_space.contains(&successor) {
                continue;
            }
            let h = match heuristic.as_mut() {
                Some(heuristic) => heuristic.evaluate(&successor),
                None => (0.).into(),
            };
            let f = engine.f_value(g + 1, h);
            let child_id = search_space.insert(successor, direction, state_id, g + 1, h, f);
            statistics.increment_generated_nodes();
            frontier.push(child_id, f);
        }

        statistics.log_if_needed();
    }

    statistics.finalise();
    Ok((SearchResult::Exhausted, statistics))
}
