//! Repository port for model persistence.
//!
//! This module defines the trait boundary between the agent and the storage
//! format used to checkpoint it.

use std::path::Path;

use crate::{Result, q_learning::SavedAgent};

/// Port for persisting and loading saved agents.
///
/// Loading is always a wholesale replacement; there is no merge.
///
/// # Examples
///
/// ```no_run
/// use bayesq::adapters::JsonRepository;
/// use bayesq::ports::ModelRepository;
/// use bayesq::q_learning::{BayesianAgent, SavedAgent};
/// use std::path::Path;
///
/// let repo = JsonRepository::new();
/// let agent = BayesianAgent::new(0.5, 0.9, 10);
///
/// repo.save(&SavedAgent::from_agent(&agent), Path::new("model.json"))?;
/// let restored = repo.load(Path::new("model.json"))?.into_agent()?;
/// # Ok::<(), bayesq::Error>(())
/// ```
pub trait ModelRepository {
    /// Save a model to persistent storage.
    ///
    /// # Errors
    ///
    /// Returns an error if the path cannot be written or serialization fails.
    fn save(&self, model: &SavedAgent, path: &Path) -> Result<()>;

    /// Load a model from persistent storage.
    ///
    /// # Errors
    ///
    /// Returns an error if the file is missing, unreadable or malformed.
    fn load(&self, path: &Path) -> Result<SavedAgent>;
}
