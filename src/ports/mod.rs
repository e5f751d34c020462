//! Ports (trait boundaries) for external collaborators.
//!
//! The agent core depends only on these traits: environments supply states
//! and actions, rewarders score transitions, repositories persist models and
//! observers watch training.

pub mod environment;
pub mod observer;
pub mod repository;
pub mod rewarder;

pub use environment::{Action, State};
pub use observer::Observer;
pub use repository::ModelRepository;
pub use rewarder::Rewarder;
