//! Training driver for Bayesian agents
//!
//! Each step of an episode follows the same loop: recommend an action for
//! the current state, apply it through the agent's transition check, score
//! the transition with the rewarder and feed it back into `learn`.

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::{
    Error, Result,
    ports::{Action, Observer, Rewarder, State},
    q_learning::BayesianAgent,
};

/// Training configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TrainingConfig {
    /// Number of episodes to run
    pub episodes: usize,

    /// Step budget per episode
    pub max_steps: usize,
}

impl Default for TrainingConfig {
    fn default() -> Self {
        Self {
            episodes: 200,
            max_steps: 100,
        }
    }
}

/// Outcome of a single episode
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EpisodeSummary {
    /// Actions applied
    pub steps: usize,

    /// Sum of rewards received
    pub total_reward: f64,

    /// Whether the episode ended in a state without actions
    pub reached_terminal: bool,
}

/// Result of a training run
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrainingResult {
    pub episodes: usize,
    pub terminal_episodes: usize,
    pub total_steps: usize,
    pub mean_reward: f64,
    pub mean_steps: f64,
}

impl TrainingResult {
    fn from_summaries(summaries: &[EpisodeSummary]) -> Self {
        let episodes = summaries.len();
        let total_steps: usize = summaries.iter().map(|s| s.steps).sum();
        let total_reward: f64 = summaries.iter().map(|s| s.total_reward).sum();
        let (mean_reward, mean_steps) = if episodes > 0 {
            (
                total_reward / episodes as f64,
                total_steps as f64 / episodes as f64,
            )
        } else {
            (0.0, 0.0)
        };

        Self {
            episodes,
            terminal_episodes: summaries.iter().filter(|s| s.reached_terminal).count(),
            total_steps,
            mean_reward,
            mean_steps,
        }
    }
}

/// Runs training episodes against an environment.
pub struct Trainer<R> {
    config: TrainingConfig,
    rewarder: R,
    observers: Vec<Box<dyn Observer>>,
}

impl<R> Trainer<R> {
    pub fn new(config: TrainingConfig, rewarder: R) -> Self {
        Self {
            config,
            rewarder,
            observers: Vec::new(),
        }
    }

    pub fn with_observer<O: Observer + 'static>(mut self, observer: O) -> Self {
        self.observers.push(Box::new(observer));
        self
    }

    /// Run `config.episodes` episodes, each starting from `initial`.
    pub fn train<S>(&mut self, agent: &mut BayesianAgent, initial: &S) -> Result<TrainingResult>
    where
        S: State + Clone,
        R: Rewarder<S>,
    {
        info!(
            episodes = self.config.episodes,
            max_steps = self.config.max_steps,
            start = %initial.id(),
            "starting training"
        );
        for observer in &mut self.observers {
            observer.on_training_start(self.config.episodes)?;
        }

        let mut summaries = Vec::with_capacity(self.config.episodes);
        for episode in 0..self.config.episodes {
            summaries.push(self.run_episode(agent, episode, initial.clone())?);
        }

        for observer in &mut self.observers {
            observer.on_training_end()?;
        }

        let result = TrainingResult::from_summaries(&summaries);
        info!(
            terminal = result.terminal_episodes,
            mean_steps = result.mean_steps,
            mean_reward = result.mean_reward,
            "training finished"
        );
        Ok(result)
    }

    /// Play one episode from `initial`.
    ///
    /// Ends when the current state offers no actions or the step budget is
    /// spent.
    pub fn run_episode<S>(
        &mut self,
        agent: &mut BayesianAgent,
        episode: usize,
        initial: S,
    ) -> Result<EpisodeSummary>
    where
        S: State,
        R: Rewarder<S>,
    {
        for observer in &mut self.observers {
            observer.on_episode_start(episode)?;
        }

        let mut state = initial;
        let mut steps = 0;
        let mut total_reward = 0.0;
        let mut reached_terminal = false;

        while steps < self.config.max_steps {
            let action = match agent.recommend_action(&state) {
                Ok(action) => action,
                Err(Error::NoActions { .. }) => {
                    reached_terminal = true;
                    break;
                }
                Err(e) => return Err(e),
            };

            let next = agent.transition(&state, &action)?;
            let reward = self.rewarder.reward(&state, &action, &next);
            agent.learn(Some(&state), Some(&action), &next, reward);

            let (state_id, action_id) = (state.id(), action.id());
            for observer in &mut self.observers {
                observer.on_step(episode, steps, &state_id, &action_id, reward)?;
            }

            total_reward += reward;
            steps += 1;
            state = next;
        }

        if !reached_terminal {
            reached_terminal = state.possible_actions().is_empty();
        }

        let summary = EpisodeSummary {
            steps,
            total_reward,
            reached_terminal,
        };
        debug!(episode, ?summary, "episode finished");

        for observer in &mut self.observers {
            observer.on_episode_end(episode, &summary)?;
        }
        Ok(summary)
    }
}
