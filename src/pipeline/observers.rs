//! Observer implementations for training

use indicatif::{ProgressBar, ProgressStyle};
use serde::{Deserialize, Serialize};

use crate::{
    Result,
    identifiers::{ActionId, StateId},
    pipeline::training::EpisodeSummary,
    ports::Observer,
};

/// Progress bar over training episodes
pub struct ProgressObserver {
    progress_bar: Option<ProgressBar>,
    terminal: usize,
}

impl ProgressObserver {
    pub fn new() -> Self {
        Self {
            progress_bar: None,
            terminal: 0,
        }
    }
}

impl Default for ProgressObserver {
    fn default() -> Self {
        Self::new()
    }
}

impl Observer for ProgressObserver {
    fn on_training_start(&mut self, total_episodes: usize) -> Result<()> {
        let pb = ProgressBar::new(total_episodes as u64);
        pb.set_style(
            ProgressStyle::default_bar()
                .template("[{elapsed_precise}] {bar:40.cyan/blue} {pos}/{len} episodes (goal: {msg})")
                .map_err(|e| crate::Error::ProgressBarTemplate {
                    message: e.to_string(),
                })?
                .progress_chars("=>-"),
        );
        self.progress_bar = Some(pb);
        Ok(())
    }

    fn on_episode_end(&mut self, episode: usize, summary: &EpisodeSummary) -> Result<()> {
        if summary.reached_terminal {
            self.terminal += 1;
        }
        if let Some(pb) = &self.progress_bar {
            pb.set_position(episode as u64 + 1);
            pb.set_message(self.terminal.to_string());
        }
        Ok(())
    }

    fn on_training_end(&mut self) -> Result<()> {
        if let Some(pb) = &self.progress_bar {
            pb.finish_with_message(self.terminal.to_string());
        }
        Ok(())
    }
}

/// One recorded step
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StepObservation {
    pub episode: usize,
    pub step: usize,
    pub state: StateId,
    pub action: ActionId,
    pub reward: f64,
}

/// Records every step and episode summary in memory
#[derive(Debug, Default)]
pub struct MetricsObserver {
    steps: Vec<StepObservation>,
    episodes: Vec<EpisodeSummary>,
}

impl MetricsObserver {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn steps(&self) -> &[StepObservation] {
        &self.steps
    }

    pub fn episodes(&self) -> &[EpisodeSummary] {
        &self.episodes
    }

    /// Step counts per episode, in order.
    pub fn episode_lengths(&self) -> Vec<usize> {
        self.episodes.iter().map(|e| e.steps).collect()
    }
}

impl Observer for MetricsObserver {
    fn on_step(
        &mut self,
        episode: usize,
        step: usize,
        state: &StateId,
        action: &ActionId,
        reward: f64,
    ) -> Result<()> {
        self.steps.push(StepObservation {
            episode,
            step,
            state: state.clone(),
            action: action.clone(),
            reward,
        });
        Ok(())
    }

    fn on_episode_end(&mut self, _episode: usize, summary: &EpisodeSummary) -> Result<()> {
        self.episodes.push(summary.clone());
        Ok(())
    }
}

/// Shares a [`MetricsObserver`] with the caller while the trainer owns the handle.
#[derive(Debug, Clone, Default)]
pub struct SharedMetrics(std::sync::Arc<std::sync::Mutex<MetricsObserver>>);

impl SharedMetrics {
    pub fn new() -> Self {
        Self::default()
    }

    /// Run `f` against the collected metrics.
    pub fn with<T>(&self, f: impl FnOnce(&MetricsObserver) -> T) -> T {
        let guard = self
            .0
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner());
        f(&guard)
    }
}

impl Observer for SharedMetrics {
    fn on_step(
        &mut self,
        episode: usize,
        step: usize,
        state: &StateId,
        action: &ActionId,
        reward: f64,
    ) -> Result<()> {
        self.0
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .on_step(episode, step, state, action, reward)
    }

    fn on_episode_end(&mut self, episode: usize, summary: &EpisodeSummary) -> Result<()> {
        self.0
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .on_episode_end(episode, summary)
    }
}
