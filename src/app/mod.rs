//! Application layer with dependency injection container.
//!
//! ```text
//! App (container) ──owns──▶ ModelRepository adapter (MsgPack / JSON / in-memory)
//!        │
//!        └──creates──▶ BayesianAgent (from AgentConfig or a saved model)
//! ```
//!
//! # Usage
//!
//! ```
//! use bayesq::app::{AgentConfig, App};
//!
//! let app = App::new();
//! let agent = app.create_agent(AgentConfig::new(0.5, 0.9, 10).with_seed(42))?;
//! # Ok::<(), bayesq::Error>(())
//! ```

pub mod config;
pub mod container;

pub use config::AgentConfig;
pub use container::{App, AppBuilder};
