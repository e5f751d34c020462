//! Bayesian Q-learning
//!
//! Tabular, single-step Q-learning over a finite action set. Each
//! (state, action) pair carries a raw Bellman estimate and a smoothed
//! estimate; recommendations compare the smoothed values.
//!
//! ## Update
//!
//! After a transition `s --a--> s'` with reward `r`:
//!
//! ```text
//! raw(s,a) ← w(s,a) + α[r + γ max_a' w(s',a') - w(s,a)]
//! ```
//!
//! where `w` is the smoothed value. Then every action `b` of `s` is
//! re-weighted:
//!
//! ```text
//! w(s,b) = (c·mean + n_b·raw(s,b)) / (c + n_b)
//! ```
//!
//! with `c` the priming threshold, `n_b` the number of updates of `(s,b)` and
//! `mean` the average raw value over the actions of `s` that were already
//! recorded.
//!
//! ## Usage Example
//!
//! ```no_run
//! use bayesq::environments::{Corridor, GoalReward};
//! use bayesq::ports::Rewarder;
//! use bayesq::q_learning::BayesianAgent;
//!
//! let mut agent = BayesianAgent::new(
//!     0.5, // learning_rate
//!     0.9, // discount_factor
//!     10,  // priming_threshold
//! );
//! let rewarder = GoalReward::default();
//!
//! let start = Corridor::new(5);
//! let action = agent.recommend_action(&start)?;
//! let next = agent.transition(&start, &action)?;
//! let reward = rewarder.reward(&start, &action, &next);
//! agent.learn(Some(&start), Some(&action), &next, reward);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub mod action_stats;
pub mod agent;
pub mod math;
pub mod q_table;
pub mod serialization;
pub mod tie_break;

// Public re-exports
pub use action_stats::ActionStats;
pub use agent::BayesianAgent;
pub use q_table::{QTable, StateActions};
pub use serialization::{AgentContext, SavedAgent};
pub use tie_break::{RandomTieBreaker, TieBreaker};
