use crate::search::heuristics::HeuristicValue;
use crate::search::search_engines::{StateId, NO_STATE};
use crate::search::Direction;

/// A node in the search tree, linking a board (by arena id) to the parent it
/// was generated from and the scores assigned at discovery. Parent links are
/// arena indices, so they stay valid for the lifetime of the search space.
/// Nodes are never mutated once created.
#[derive(Debug, Clone)]
pub struct SearchNode {
    /// Id of this node's board in the search space.
    state_id: StateId,
    /// Id of the parent node, `NO_STATE` for the root.
    parent_id: StateId,
    /// Move that produced this node from its parent, `None` for the root.
    direction: Option<Direction>,
    /// Cost from the root, one unit per move.
    g: u32,
    /// Heuristic estimate of the remaining cost to the goal.
    h: HeuristicValue,
    /// Frontier priority. `h` for greedy best-first search, `g + h` for A*,
    /// unused for breadth-first search.
    f: HeuristicValue,
}

impl SearchNode {
    pub(crate) fn root(state_id: StateId, h: HeuristicValue, f: HeuristicValue) -> Self {
        Self {
            state_id,
            parent_id: NO_STATE,
            direction: None,
            g: 0,
            h,
            f,
        }
    }

    pub(crate) fn child(
        state_id: StateId,
        parent_id: StateId,
        direction: Direction,
        g: u32,
        h: HeuristicValue,
        f: HeuristicValue,
    ) -> Self {
        Self {
            state_id,
            parent_id,
            direction: Some(direction),
            g,
            h,
            f,
        }
    }

    pub fn state_id(&self) -> StateId {
        self.state_id
    }

    pub fn parent_id(&self) -> StateId {
        self.parent_id
    }

    pub fn direction(&self) -> Option<Direction> {
        self.direction
    }

    pub fn g(&self) -> u32 {
        self.g
    }

    pub fn h(&self) -> HeuristicValue {
        self.h
    }

    pub fn f(&self) -> HeuristicValue {
        self.f
    }
}
