//! CLI infrastructure for the bayesq toolkit
//!
//! Commands train an agent on the reference corridor environment, inspect a
//! saved model and ask a saved model for a recommendation.

pub mod commands;
pub mod config;
pub mod output;
