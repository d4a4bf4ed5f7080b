use crate::search::heuristics::HeuristicValue;
use crate::search::search_engines::{SearchEngineName, StateId};
use priority_queue::PriorityQueue;
use std::cmp::Reverse;
use std::collections::VecDeque;

/// The generated-but-not-yet-expanded nodes. Breadth-first search pops in
/// strict FIFO order; the informed engines pop the minimum-f node, with ties
/// in `f` broken by discovery order (state ids are assigned monotonically at
/// discovery).
pub(crate) enum Frontier {
    Fifo(VecDeque<StateId>),
    Priority(PriorityQueue<StateId, Reverse<(HeuristicValue, StateId)>>),
}

impl Frontier {
    pub(crate) fn new(engine: SearchEngineName) -> Self {
        match engine {
            SearchEngineName::Bfs => Frontier::Fifo(VecDeque::new()),
            SearchEngineName::Gbfs | SearchEngineName::Astar => {
                Frontier::Priority(PriorityQueue::new())
            }
        }
    }

    pub(crate) fn push(&mut self, state_id: StateId, f: HeuristicValue) {
        match self {
            Frontier::Fifo(queue) => queue.push_back(state_id),
            Frontier::Priority(queue) => {
                queue.push(state_id, Reverse((f, state_id)));
            }
        }
    }

    pub(crate) fn pop(&mut self) -> Option<StateId> {
        match self {
            Frontier::Fifo(queue) => queue.pop_front(),
            Frontier::Priority(queue) => queue.pop().map(|(state_id, _)| state_id),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn id(index: usize) -> StateId {
        StateId(index)
    }

    #[test]
    fn fifo_pops_in_insertion_order() {
        let mut frontier = Frontier::new(SearchEngineName::Bfs);
        frontier.push(id(0), 0.0.into());
        frontier.push(id(1), 0.0.into());
        frontier.push(id(2), 0.0.into());
        assert_eq!(frontier.pop(), Some(id(0)));
        assert_eq!(frontier.pop(), Some(id(1)));
        assert_eq!(frontier.pop(), Some(id(2)));
        assert_eq!(frontier.pop(), None);
    }

    #[test]
    fn priority_pops_minimum_f_first() {
        let mut frontier = Frontier::new(SearchEngineName::Astar);
        frontier.push(id(0), 5.0.into());
        frontier.push(id(1), 2.0.into());
        frontier.push(id(2), 4.0.into());
        assert_eq!(frontier.pop(), Some(id(1)));
        assert_eq!(frontier.pop(), Some(id(2)));
        assert_eq!(frontier.pop(), Some(id(0)));
    }

    #[test]
    fn priority_breaks_f_ties_by_discovery_order() {
        let mut frontier = Frontier::new(SearchEngineName::Gbfs);
        frontier.push(id(2), 3.0.into());
        frontier.push(id(0), 3.0.into());
        frontier.push(id(1), 3.0.into());
        assert_eq!(frontier.pop(), Some(id(0)));
        assert_eq!(frontier.pop(), Some(id(1)));
        assert_eq!(frontier.pop(), Some(id(2)));
    }
}
