//! Serialization support for Bayesian agents.

use serde::{Deserialize, Serialize};

use crate::{
    error::{Error, Result},
    q_learning::{agent::BayesianAgent, q_table::QTable},
};

/// Agent parameters plus the value table.
///
/// `q_values` uses the persisted layout: state id -> action id ->
/// `{calls, qRaw, qWeighted}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AgentContext {
    pub learning_rate: f64,
    pub discount_factor: f64,
    pub priming_threshold: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub seed: Option<u64>,
    pub q_values: QTable,
}

/// Versioned model file contents.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SavedAgent {
    pub version: u32,
    pub agent: AgentContext,
}

impl SavedAgent {
    pub const VERSION: u32 = 1;

    pub fn from_agent(agent: &BayesianAgent) -> Self {
        Self {
            version: Self::VERSION,
            agent: agent.context(),
        }
    }

    /// Rebuild the agent, rejecting files written by another format version.
    pub fn into_agent(self) -> Result<BayesianAgent> {
        if self.version != Self::VERSION {
            return Err(Error::UnsupportedVersion {
                found: self.version,
                expected: Self::VERSION,
            });
        }
        Ok(BayesianAgent::from_context(self.agent))
    }
}
