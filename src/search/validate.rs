use crate::search::{Board, Plan};

/// Replays `plan` from `start` and checks that every move is legal and that
/// the final board is the goal.
pub fn validate(plan: &Plan, start: &Board) -> Result<(), String> {
    let mut current = start.clone();
    for &direction in plan.steps() {
        current = current
            .apply(direction)
            .ok_or_else(|| format!("Move {} is not legal in board\n{}", direction, current))?;
    }

    if !current.is_goal() {
        return Err(format!(
            "Plan does not reach the goal, final board is\n{current}"
        ));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::search::Direction;
    use crate::test_utils::*;

    #[test]
    fn validate_good_plan_ok() {
        let plan = Plan::new(vec![Direction::Right]);
        assert!(validate(&plan, &board(ONE_MOVE_TILES)).is_ok());
    }

    #[test]
    fn validate_bad_plan_illegal_move() {
        // The blank starts on the bottom row, Down is out of bounds.
        let plan = Plan::new(vec![Direction::Down]);
        assert!(validate(&plan, &board(ONE_MOVE_TILES)).is_err());
    }

    #[test]
    fn validate_bad_plan_incomplete() {
        let plan = Plan::new(vec![Direction::Up]);
        assert!(validate(&plan, &board(ONE_MOVE_TILES)).is_err());
    }

    #[test]
    fn validate_empty_plan_on_goal_ok() {
        assert!(validate(&Plan::empty(), &Board::goal()).is_ok());
        assert!(validate(&Plan::empty(), &board(ONE_MOVE_TILES)).is_err());
    }
}
