//! One-dimensional corridor environment
//!
//! Positions run from `0` to `length - 1`. The agent steps left or right;
//! the last position is the goal and offers no actions. Stepping left from
//! position 0 is incompatible.

use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::{
    identifiers::{ActionId, StateId},
    ports::{Action, Rewarder, State},
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Step {
    Left,
    Right,
}

impl Step {
    pub fn as_str(&self) -> &'static str {
        match self {
            Step::Left => "left",
            Step::Right => "right",
        }
    }
}

impl fmt::Display for Step {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Action for Step {
    fn id(&self) -> ActionId {
        ActionId::new(self.as_str())
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum CorridorError {
    #[error("cannot step {step} from position {position} of a corridor of length {length}")]
    OutOfBounds {
        position: usize,
        length: usize,
        step: Step,
    },

    #[error("position {position} is outside a corridor of length {length}")]
    InvalidPosition { position: usize, length: usize },
}

/// Agent position inside a corridor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Corridor {
    length: usize,
    position: usize,
}

impl Corridor {
    /// Corridor of `length` cells (at least 2) starting at position 0.
    pub fn new(length: usize) -> Self {
        Self {
            length: length.max(2),
            position: 0,
        }
    }

    pub fn at(length: usize, position: usize) -> Result<Self, CorridorError> {
        let corridor = Self::new(length);
        if position >= corridor.length {
            return Err(CorridorError::InvalidPosition {
                position,
                length: corridor.length,
            });
        }
        Ok(Self {
            position,
            ..corridor
        })
    }

    pub fn length(&self) -> usize {
        self.length
    }

    pub fn position(&self) -> usize {
        self.position
    }

    pub fn goal(&self) -> usize {
        self.length - 1
    }

    pub fn is_goal(&self) -> bool {
        self.position == self.goal()
    }
}

impl State for Corridor {
    type Action = Step;
    type Error = CorridorError;

    fn id(&self) -> StateId {
        StateId::new(format!("corridor:{}/{}", self.position, self.length))
    }

    fn possible_actions(&self) -> Vec<Step> {
        if self.is_goal() {
            Vec::new()
        } else if self.position == 0 {
            vec![Step::Right]
        } else {
            vec![Step::Left, Step::Right]
        }
    }

    fn action_is_compatible(&self, action: &Step) -> bool {
        self.possible_actions().contains(action)
    }

    fn apply(&self, action: &Step) -> Result<Self, CorridorError> {
        let position = match action {
            Step::Left => self.position.checked_sub(1),
            Step::Right => Some(self.position + 1).filter(|&p| p < self.length),
        };
        let position = position.ok_or(CorridorError::OutOfBounds {
            position: self.position,
            length: self.length,
            step: *action,
        })?;
        Ok(Self { position, ..*self })
    }
}

/// Reward of `1.0` for reaching the goal and `step_penalty` otherwise.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GoalReward {
    pub goal_reward: f64,
    pub step_penalty: f64,
}

impl Default for GoalReward {
    fn default() -> Self {
        Self {
            goal_reward: 1.0,
            step_penalty: -0.01,
        }
    }
}

impl Rewarder<Corridor> for GoalReward {
    fn reward(&self, _previous: &Corridor, _action: &Step, current: &Corridor) -> f64 {
        if current.is_goal() {
            self.goal_reward
        } else {
            self.step_penalty
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_start_only_allows_right() {
        let start = Corridor::new(4);
        assert_eq!(start.possible_actions(), vec![Step::Right]);
        assert!(!start.action_is_compatible(&Step::Left));
    }

    #[test]
    fn test_goal_has_no_actions() {
        let goal = Corridor::at(4, 3).unwrap();
        assert!(goal.is_goal());
        assert!(goal.possible_actions().is_empty());
    }

    #[test]
    fn test_apply_moves_position() {
        let mid = Corridor::at(5, 2).unwrap();
        assert_eq!(mid.apply(&Step::Left).unwrap().position(), 1);
        assert_eq!(mid.apply(&Step::Right).unwrap().position(), 3);
    }

    #[test]
    fn test_apply_out_of_bounds() {
        let start = Corridor::new(3);
        assert_eq!(
            start.apply(&Step::Left),
            Err(CorridorError::OutOfBounds {
                position: 0,
                length: 3,
                step: Step::Left
            })
        );
    }

    #[test]
    fn test_ids_are_stable() {
        assert_eq!(Corridor::at(5, 2).unwrap().id(), Corridor::at(5, 2).unwrap().id());
        assert_ne!(Corridor::at(5, 2).unwrap().id(), Corridor::at(6, 2).unwrap().id());
        assert_eq!(Step::Right.id(), "right");
    }

    #[test]
    fn test_invalid_position() {
        assert!(Corridor::at(3, 3).is_err());
    }

    #[test]
    fn test_goal_reward() {
        let rewarder = GoalReward::default();
        let before = Corridor::at(3, 1).unwrap();
        let goal = Corridor::at(3, 2).unwrap();
        assert_eq!(rewarder.reward(&before, &Step::Right, &goal), 1.0);
        assert_eq!(rewarder.reward(&goal, &Step::Left, &before), -0.01);
    }
}
