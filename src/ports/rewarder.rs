//! Rewarder port - scores an observed transition

use super::environment::State;

/// Computes the reward for moving from `previous` to `current` via `action`.
///
/// Closures with the matching signature implement this trait.
pub trait Rewarder<S: State> {
    fn reward(&self, previous: &S, action: &S::Action, current: &S) -> f64;
}

impl<S, F> Rewarder<S> for F
where
    S: State,
    F: Fn(&S, &S::Action, &S) -> f64,
{
    fn reward(&self, previous: &S, action: &S::Action, current: &S) -> f64 {
        self(previous, action, current)
    }
}
