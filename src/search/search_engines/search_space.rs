use crate::search::heuristics::HeuristicValue;
use crate::search::search_engines::SearchNode;
use crate::search::{Board, Direction, Plan};
use segvec::{Linear, SegVec};
use std::collections::HashMap;

/// Handle of a discovered board in a [`SearchSpace`]. Ids are assigned
/// monotonically at discovery, which the informed frontiers use to break
/// f-value ties in discovery order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct StateId(pub(crate) usize);

pub const NO_STATE: StateId = StateId(usize::MAX);

/// Arena of search nodes and their boards, plus the visited registry. A board
/// is registered the moment it is generated, never at expansion, so a state
/// reached later through another parent is skipped rather than reopened.
///
/// The arena is owned by a single search invocation; ids index into it, so
/// separate invocations never interfere.
pub struct SearchSpace {
    nodes: SegVec<SearchNode, Linear>,
    boards: SegVec<Board, Linear>,
    registered_boards: HashMap<Board, StateId>,
}

impl SearchSpace {
    pub fn new(initial_board: Board, h: HeuristicValue, f: HeuristicValue) -> Self {
        let mut nodes = SegVec::new();
        let mut boards = SegVec::new();
        let mut registered_boards = HashMap::new();

        let root_id = StateId(0);
        nodes.push(SearchNode::root(root_id, h, f));
        registered_boards.insert(initial_board.clone(), root_id);
        boards.push(initial_board);

        Self {
            nodes,
            boards,
            registered_boards,
        }
    }

    pub fn root_id(&self) -> StateId {
        StateId(0)
    }

    /// Whether `board` has already been discovered via some parent.
    pub fn contains(&self, board: &Board) -> bool {
        self.registered_boards.contains_key(board)
    }

    /// Registers a newly discovered board and returns its node id. The caller
    /// must have checked [`contains`](Self::contains) first.
    pub fn insert(
        &mut self,
        board: Board,
        direction: Direction,
        parent_id: StateId,
        g: u32,
        h: HeuristicValue,
        f: HeuristicValue,
    ) -> StateId {
        debug_assert!(!self.contains(&board), "board registered twice");
        let state_id = StateId(self.nodes.len());
        self.nodes
            .push(SearchNode::child(state_id, parent_id, direction, g, h, f));
        self.registered_boards.insert(board.clone(), state_id);
        self.boards.push(board);
        state_id
    }

    /// Walks the parent links from `goal_id` back to the root and returns the
    /// moves in root-to-goal order.
    pub fn extract_plan(&self, goal_id: StateId) -> Plan {
        let mut steps = vec![];
        let mut current_node = self.node(goal_id);
        while current_node.parent_id() != NO_STATE {
            steps.push(
                current_node
                    .direction()
                    .expect("a non-root node always records its move"),
            );
            current_node = self.node(current_node.parent_id());
        }
        steps.reverse();
        Plan::new(steps)
    }

    pub fn node(&self, state_id: StateId) -> &SearchNode {
        self.nodes.get(state_id.0).expect("invalid state id")
    }

    pub fn board(&self, state_id: StateId) -> &Board {
        self.boards.get(state_id.0).expect("invalid state id")
    }

    /// Number of discovered boards.
    pub fn len(&self) -> usize {
        self.registered_boards.len()
    }
}
