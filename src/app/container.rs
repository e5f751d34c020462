//! Dependency injection container.
//!
//! The container owns the model repository and provides factory methods for
//! creating, saving and loading agents.

use std::{path::Path, sync::Arc};

use tracing::debug;

use super::config::AgentConfig;
use crate::{
    Result,
    adapters::MsgPackRepository,
    ports::ModelRepository,
    q_learning::{BayesianAgent, SavedAgent},
};

/// Application with dependency injection.
///
/// # Examples
///
/// ## Production usage
///
/// ```
/// use bayesq::app::{AgentConfig, App};
///
/// let app = App::new();
/// let agent = app.create_agent(AgentConfig::default().with_seed(42))?;
/// # Ok::<(), bayesq::Error>(())
/// ```
///
/// ## Testing with dependency injection
///
/// ```
/// use bayesq::app::App;
/// use bayesq::adapters::InMemoryRepository;
///
/// let app = App::for_testing()
///     .with_repository(InMemoryRepository::new())
///     .with_default_seed(42)
///     .build();
/// ```
pub struct App {
    /// Repository for model persistence
    model_repository: Arc<dyn ModelRepository + Send + Sync>,
    /// Default random seed (None = non-deterministic)
    default_seed: Option<u64>,
}

impl App {
    /// Create a new app with production defaults.
    ///
    /// Uses `MsgPackRepository` and no default seed.
    pub fn new() -> Self {
        Self {
            model_repository: Arc::new(MsgPackRepository::new()),
            default_seed: None,
        }
    }

    /// Create a builder for constructing app with custom dependencies.
    pub fn for_testing() -> AppBuilder {
        AppBuilder::new()
    }

    /// Create a new agent with the given configuration.
    ///
    /// The config seed wins over the container default.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::InvalidConfiguration`] for out-of-range parameters.
    pub fn create_agent(&self, config: AgentConfig) -> Result<BayesianAgent> {
        config.validate()?;

        let agent = BayesianAgent::new(
            config.learning_rate,
            config.discount_factor,
            config.priming_threshold,
        );
        let agent = match config.seed.or(self.default_seed) {
            Some(seed) => agent.with_seed(seed),
            None => agent,
        };

        debug!(?agent, "created agent");
        Ok(agent)
    }

    /// Load an agent from persistent storage.
    ///
    /// A container default seed replaces the saved seed.
    pub fn load_agent(&self, path: &Path) -> Result<BayesianAgent> {
        let agent = self.model_repository.load(path)?.into_agent()?;
        Ok(match self.default_seed {
            Some(seed) => agent.with_seed(seed),
            None => agent,
        })
    }

    /// Save an agent to persistent storage.
    pub fn save_agent(&self, agent: &BayesianAgent, path: &Path) -> Result<()> {
        self.model_repository
            .save(&SavedAgent::from_agent(agent), path)
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new()
    }
}

/// Builder for constructing app with custom dependencies.
///
/// # Examples
///
/// ```
/// use bayesq::app::AppBuilder;
/// use bayesq::adapters::JsonRepository;
///
/// let app = AppBuilder::new()
///     .with_repository(JsonRepository::new())
///     .build();
/// ```
pub struct AppBuilder {
    model_repository: Option<Arc<dyn ModelRepository + Send + Sync>>,
    default_seed: Option<u64>,
}

impl AppBuilder {
    pub fn new() -> Self {
        Self {
            model_repository: None,
            default_seed: None,
        }
    }

    /// Set a custom model repository.
    pub fn with_repository<R: ModelRepository + Send + Sync + 'static>(mut self, repo: R) -> Self {
        self.model_repository = Some(Arc::new(repo));
        self
    }

    /// Set a default random seed for all agents created by this container.
    pub fn with_default_seed(mut self, seed: u64) -> Self {
        self.default_seed = Some(seed);
        self
    }

    /// Build the app; falls back to `MsgPackRepository`.
    pub fn build(self) -> App {
        App {
            model_repository: self
                .model_repository
                .unwrap_or_else(|| Arc::new(MsgPackRepository::new())),
            default_seed: self.default_seed,
        }
    }
}

impl Default for AppBuilder {
    fn default() -> Self {
        Self::new()
    }
}
