//! Tabular Q-learning with Bayesian-smoothed action values
//!
//! This crate provides:
//! - A value table keyed by state and action identifiers
//! - [`BayesianAgent`], which learns from rewarded transitions and recommends
//!   actions from values shrunk towards the mean of their siblings
//! - Environment, rewarder, persistence and observer ports with file-backed
//!   and in-memory adapters
//! - A training pipeline and a small corridor environment to drive it

pub mod adapters;
pub mod app;
pub mod cli;
pub mod environments;
pub mod error;
pub mod identifiers;
pub mod pipeline;
pub mod ports;
pub mod q_learning;

pub use error::{Error, Result, TransitionError};
pub use identifiers::{ActionId, StateId};
pub use ports::{Action, State};
pub use q_learning::{ActionStats, BayesianAgent, QTable};
