//! A plan is the ordered sequence of blank moves taking the start board to
//! the goal. This module provides the [`Plan`] struct, which represents a
//! plan.

use crate::search::Direction;
use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Plan {
    steps: Vec<Direction>,
}

impl Plan {
    pub fn empty() -> Self {
        Self { steps: vec![] }
    }

    pub fn new(steps: Vec<Direction>) -> Self {
        Self { steps }
    }

    pub fn steps(&self) -> &[Direction] {
        &self.steps
    }

    /// The solution depth, one unit per move.
    pub fn len(&self) -> usize {
        self.steps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }
}

impl fmt::Display for Plan {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let steps: Vec<String> = self.steps.iter().map(Direction::to_string).collect();
        write!(f, "{}", steps.join(" "))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn displays_steps_in_order() {
        let plan = Plan::new(vec![Direction::Up, Direction::Left, Direction::Down]);
        assert_eq!(plan.to_string(), "Up Left Down");
        assert_eq!(plan.len(), 3);
    }

    #[test]
    fn empty_plan_has_depth_zero() {
        assert_eq!(Plan::empty().len(), 0);
        assert!(Plan::empty().is_empty());
    }
}
