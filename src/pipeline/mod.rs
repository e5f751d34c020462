//! Training pipeline
//!
//! Drives an agent through episodes of an environment and reports progress
//! to composable observers.

pub mod observers;
pub mod training;

pub use observers::{MetricsObserver, ProgressObserver, SharedMetrics, StepObservation};
pub use training::{EpisodeSummary, Trainer, TrainingConfig, TrainingResult};

pub use crate::ports::Observer;
