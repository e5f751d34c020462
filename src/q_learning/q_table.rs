//! Value table for Bayesian Q-learning

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::{
    identifiers::{ActionId, StateId},
    q_learning::action_stats::ActionStats,
};

/// Actions recorded for a single state.
pub type StateActions = BTreeMap<ActionId, ActionStats>;

/// Two-level map: state id -> action id -> [`ActionStats`].
///
/// Lookups never create entries. Creating an empty per-state entry is an
/// explicit operation ([`QTable::ensure_state`]). Nothing is ever evicted.
///
/// Ordered maps keep snapshots and iteration deterministic.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct QTable {
    states: BTreeMap<StateId, StateActions>,
}

impl QTable {
    /// Create an empty table
    pub fn new() -> Self {
        Self::default()
    }

    /// Stats for a pair, or `None` if the pair was never recorded.
    pub fn get_stats(&self, state: &StateId, action: &ActionId) -> Option<&ActionStats> {
        self.states.get(state).and_then(|actions| actions.get(action))
    }

    /// Overwrite (or create) the record for a pair.
    pub fn update_stats(&mut self, state: &StateId, action: &ActionId, stats: ActionStats) {
        self.ensure_state(state).insert(action.clone(), stats);
    }

    /// Actions recorded for a state, without creating an entry.
    pub fn actions(&self, state: &StateId) -> Option<&StateActions> {
        self.states.get(state)
    }

    /// Live action map for a state, creating an empty one if the state is new.
    pub fn ensure_state(&mut self, state: &StateId) -> &mut StateActions {
        self.states.entry(state.clone()).or_default()
    }

    /// Whether the table holds an entry (possibly empty) for a state.
    pub fn contains_state(&self, state: &StateId) -> bool {
        self.states.contains_key(state)
    }

    /// Iterate over every state and its actions.
    pub fn iter(&self) -> impl Iterator<Item = (&StateId, &StateActions)> {
        self.states.iter()
    }

    /// Number of states with an entry
    pub fn state_count(&self) -> usize {
        self.states.len()
    }

    /// Total number of (state, action) records
    pub fn size(&self) -> usize {
        self.states.values().map(BTreeMap::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.states.is_empty()
    }
}
