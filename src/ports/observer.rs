//! Observer port - hooks into the training loop
//!
//! Observers collect progress or metrics without coupling the training
//! driver to any output format.

use crate::{
    Result,
    identifiers::{ActionId, StateId},
    pipeline::EpisodeSummary,
};

/// Observer of training episodes.
///
/// Call order:
/// 1. `on_training_start(total_episodes)`
/// 2. For each episode:
///    - `on_episode_start(episode)`
///    - `on_step(...)` once per applied action
///    - `on_episode_end(episode, summary)`
/// 3. `on_training_end()`
///
/// Every method defaults to a no-op.
///
/// # Examples
///
/// ```no_run
/// use bayesq::pipeline::EpisodeSummary;
/// use bayesq::ports::Observer;
///
/// struct GoalCounter {
///     reached: usize,
/// }
///
/// impl Observer for GoalCounter {
///     fn on_episode_end(&mut self, _episode: usize, summary: &EpisodeSummary) -> bayesq::Result<()> {
///         if summary.reached_terminal {
///             self.reached += 1;
///         }
///         Ok(())
///     }
/// }
/// ```
pub trait Observer: Send {
    fn on_training_start(&mut self, _total_episodes: usize) -> Result<()> {
        Ok(())
    }

    fn on_episode_start(&mut self, _episode: usize) -> Result<()> {
        Ok(())
    }

    /// Called after an action has been applied and learned from.
    fn on_step(
        &mut self,
        _episode: usize,
        _step: usize,
        _state: &StateId,
        _action: &ActionId,
        _reward: f64,
    ) -> Result<()> {
        Ok(())
    }

    fn on_episode_end(&mut self, _episode: usize, _summary: &EpisodeSummary) -> Result<()> {
        Ok(())
    }

    fn on_training_end(&mut self) -> Result<()> {
        Ok(())
    }
}
