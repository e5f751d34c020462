//! Reference environments implementing the [`State`](crate::ports::State) port.

pub mod corridor;

pub use corridor::{Corridor, CorridorError, GoalReward, Step};
