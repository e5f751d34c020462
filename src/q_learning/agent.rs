//! Bayesian Q-learning agent
//!
//! The agent keeps a raw Bellman estimate per (state, action) pair, but ranks
//! actions by a Bayesian-smoothed value: each action's raw estimate blended
//! with the mean raw estimate of its sibling actions, weighted by how often
//! the action has been observed against the priming threshold. Rarely tried
//! actions therefore defer to the group mean instead of looking arbitrarily
//! good or bad.
//!
//! Unobserved actions are primed to a zero record before every comparison,
//! so a brand-new state ties across all of its actions and the first
//! recommendation is a uniform random pick.

use std::fmt;

use tracing::{debug, trace, warn};

use crate::{
    error::{Error, Result, TransitionError},
    identifiers::{ActionId, StateId},
    ports::{Action, State},
    q_learning::{
        action_stats::ActionStats,
        math::{bayesian_average, bellman, nan_to_zero, safe_divide},
        q_table::QTable,
        serialization::AgentContext,
        tie_break::{RandomTieBreaker, TieBreaker},
    },
};

/// Tabular Q-learning agent with Bayesian-smoothed action values.
///
/// Not safe for concurrent mutation; callers needing shared access must
/// serialize `learn` / `recommend_action` themselves.
pub struct BayesianAgent {
    q_table: QTable,
    learning_rate: f64,
    discount_factor: f64,
    priming_threshold: u32,
    tie_breaker: Box<dyn TieBreaker>,
    seed: Option<u64>,
}

impl BayesianAgent {
    /// Create a new agent
    ///
    /// # Arguments
    ///
    /// * `learning_rate` - α, how far new information overrides old (usually 0.0 to 1.0)
    /// * `discount_factor` - γ, weight of the best value of the resulting state
    /// * `priming_threshold` - observations needed before an action's own
    ///   estimate is trusted as much as the sibling mean
    pub fn new(learning_rate: f64, discount_factor: f64, priming_threshold: u32) -> Self {
        Self {
            q_table: QTable::new(),
            learning_rate,
            discount_factor,
            priming_threshold,
            tie_breaker: Box::new(RandomTieBreaker::new()),
            seed: None,
        }
    }

    /// Use a deterministic random tie-breaker.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.tie_breaker = Box::new(RandomTieBreaker::seeded(seed));
        self.seed = Some(seed);
        self
    }

    /// Replace the tie-breaking strategy.
    pub fn with_tie_breaker<T: TieBreaker + 'static>(mut self, tie_breaker: T) -> Self {
        self.set_tie_breaker(tie_breaker);
        self
    }

    pub fn set_tie_breaker<T: TieBreaker + 'static>(&mut self, tie_breaker: T) {
        self.tie_breaker = Box::new(tie_breaker);
        self.seed = None;
    }

    pub fn learning_rate(&self) -> f64 {
        self.learning_rate
    }

    pub fn discount_factor(&self) -> f64 {
        self.discount_factor
    }

    pub fn priming_threshold(&self) -> u32 {
        self.priming_threshold
    }

    /// Seed of the tie-breaker, if it was built from one.
    pub fn seed(&self) -> Option<u64> {
        self.seed
    }

    pub fn q_table(&self) -> &QTable {
        &self.q_table
    }

    /// Stored stats for a pair.
    pub fn stats(&self, state: &StateId, action: &ActionId) -> Option<ActionStats> {
        self.q_table.get_stats(state, action).copied()
    }

    /// Smoothed value for a pair as of the last weighting pass (0 if unknown).
    pub fn q_value(&self, state: &StateId, action: &ActionId) -> f64 {
        self.q_table
            .get_stats(state, action)
            .map_or(0.0, |stats| stats.q_weighted)
    }

    /// Update the model after a transition `previous_state --action_taken--> current_state`.
    ///
    /// When there is no prior transition (bootstrap), pass `None` for
    /// `previous_state` or `action_taken` and the call does nothing.
    ///
    /// The Bellman update is seeded from the pair's *smoothed* value, so
    /// smoothing compounds across updates. Afterwards the previous state is
    /// re-weighted so every sibling reflects the new raw value.
    pub fn learn<S: State>(
        &mut self,
        previous_state: Option<&S>,
        action_taken: Option<&S::Action>,
        current_state: &S,
        reward: f64,
    ) {
        let (Some(previous_state), Some(action_taken)) = (previous_state, action_taken) else {
            trace!("no prior transition to learn from");
            return;
        };

        let state_id = previous_state.id();
        let action_id = action_taken.id();

        let mut stats = self
            .q_table
            .get_stats(&state_id, &action_id)
            .copied()
            .unwrap_or_default();

        let best_next = self.best_value(&current_state.id());
        let new_value = bellman(
            stats.q_weighted,
            self.learning_rate,
            reward,
            self.discount_factor,
            best_next,
        );

        stats.calls += 1;
        stats.q_raw = new_value;
        self.q_table.update_stats(&state_id, &action_id, stats);

        debug!(
            state = %state_id,
            action = %action_id,
            reward,
            best_next,
            q_raw = new_value,
            calls = stats.calls,
            "learned transition"
        );

        let actions = previous_state.possible_actions();
        self.reweigh(&state_id, &actions);
    }

    /// Recommend the action with the highest smoothed value for `state`.
    ///
    /// Ties (exact equality of smoothed values) are broken by the agent's
    /// [`TieBreaker`]; among tied actions the order of
    /// [`State::possible_actions`] is preserved.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NoActions`] if the state offers no actions.
    pub fn recommend_action<S: State>(&mut self, state: &S) -> Result<S::Action> {
        let state_id = state.id();
        let possible = state.possible_actions();
        if possible.is_empty() {
            return Err(Error::NoActions { state: state_id });
        }

        self.reweigh(&state_id, &possible);

        let recorded = self.q_table.actions(&state_id);
        let mut best_value = f64::NEG_INFINITY;
        let mut best_actions: Vec<S::Action> = Vec::new();
        for action in possible {
            let value = recorded
                .and_then(|actions| actions.get(&action.id()))
                .map_or(0.0, |stats| nan_to_zero(stats.q_weighted));
            if value > best_value {
                best_value = value;
                best_actions.clear();
                best_actions.push(action);
            } else if value == best_value {
                best_actions.push(action);
            }
        }

        let tied = best_actions.len();
        let index = if tied == 1 {
            0
        } else {
            self.tie_breaker.choose(tied).min(tied - 1)
        };
        let chosen = best_actions.swap_remove(index);

        debug!(
            state = %state_id,
            action = %chosen.id(),
            value = best_value,
            tied,
            "recommended action"
        );

        Ok(chosen)
    }

    /// Prime unseen actions of `state` and recompute every smoothed value.
    ///
    /// Runs automatically before each recommendation and after each learning
    /// update. Calling it twice in a row yields identical values.
    pub fn apply_action_weights<S: State>(&mut self, state: &S) {
        let actions = state.possible_actions();
        self.reweigh(&state.id(), &actions);
    }

    fn reweigh<A: Action>(&mut self, state_id: &StateId, actions: &[A]) {
        let mut raw_sum = 0.0;
        let mut observed = 0.0;
        for action in actions {
            let action_id = action.id();
            match self.q_table.get_stats(state_id, &action_id) {
                Some(stats) => {
                    raw_sum += nan_to_zero(stats.q_raw);
                    observed += 1.0;
                }
                None => {
                    trace!(state = %state_id, action = %action_id, "priming action");
                    self.q_table
                        .update_stats(state_id, &action_id, ActionStats::zero());
                }
            }
        }

        let mean = nan_to_zero(safe_divide(raw_sum, observed));
        let prior = f64::from(self.priming_threshold);
        for stats in self.q_table.ensure_state(state_id).values_mut() {
            stats.q_weighted =
                bayesian_average(prior, stats.calls as f64, mean, nan_to_zero(stats.q_raw));
        }
        trace!(state = %state_id, mean, "re-weighted actions");
    }

    /// Best smoothed value among the actions recorded for a state.
    ///
    /// NaN counts as 0; a state with no recorded actions is worth 0.
    fn best_value(&self, state_id: &StateId) -> f64 {
        self.q_table
            .actions(state_id)
            .and_then(|actions| {
                actions
                    .values()
                    .map(|stats| nan_to_zero(stats.q_weighted))
                    .reduce(f64::max)
            })
            .unwrap_or(0.0)
    }

    /// Apply `action` to `state` if the state accepts it.
    ///
    /// # Errors
    ///
    /// [`TransitionError::IncompatibleAction`] when the state rejects the
    /// action; [`TransitionError::Apply`] carries the state's own failure.
    pub fn transition<S: State>(
        &self,
        state: &S,
        action: &S::Action,
    ) -> std::result::Result<S, TransitionError<S::Error>> {
        if !state.action_is_compatible(action) {
            return Err(TransitionError::IncompatibleAction {
                state: state.id(),
                action: action.id(),
            });
        }
        state.apply(action).map_err(TransitionError::Apply)
    }

    /// Copy of the value table.
    pub fn snapshot(&self) -> QTable {
        self.q_table.clone()
    }

    /// Replace the value table wholesale.
    pub fn restore(&mut self, q_table: QTable) {
        if !self.q_table.is_empty() {
            warn!(
                discarded = self.q_table.size(),
                "restoring snapshot over a non-empty value table"
            );
        }
        debug!(
            states = q_table.state_count(),
            records = q_table.size(),
            "restored value table"
        );
        self.q_table = q_table;
    }

    /// Clear everything learned so far.
    pub fn reset(&mut self) {
        self.q_table = QTable::new();
    }

    /// Pretty-printed JSON of the value table.
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(&self.q_table)?)
    }

    /// Replace the value table with one parsed from JSON.
    pub fn load_json(&mut self, model: &str) -> Result<()> {
        let q_table: QTable = serde_json::from_str(model)?;
        self.restore(q_table);
        Ok(())
    }

    /// Parameters plus a copy of the value table.
    pub fn context(&self) -> AgentContext {
        AgentContext {
            learning_rate: self.learning_rate,
            discount_factor: self.discount_factor,
            priming_threshold: self.priming_threshold,
            seed: self.seed,
            q_values: self.q_table.clone(),
        }
    }

    /// Rebuild an agent from a context.
    pub fn from_context(context: AgentContext) -> Self {
        let agent = Self::new(
            context.learning_rate,
            context.discount_factor,
            context.priming_threshold,
        );
        let mut agent = match context.seed {
            Some(seed) => agent.with_seed(seed),
            None => agent,
        };
        agent.q_table = context.q_values;
        agent
    }
}

impl fmt::Debug for BayesianAgent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BayesianAgent")
            .field("learning_rate", &self.learning_rate)
            .field("discount_factor", &self.discount_factor)
            .field("priming_threshold", &self.priming_threshold)
            .field("seed", &self.seed)
            .field("states", &self.q_table.state_count())
            .field("records", &self.q_table.size())
            .finish_non_exhaustive()
    }
}
