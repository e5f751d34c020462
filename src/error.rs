//! Error types for the bayesq crate

use thiserror::Error;

use crate::identifiers::{ActionId, StateId};

/// Main error type for the bayesq crate
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum Error {
    #[error("state '{state}' reports no possible actions")]
    NoActions { state: StateId },

    #[error("transition failed: {0}")]
    Transition(#[source] Box<dyn std::error::Error + Send + Sync>),

    #[error("invalid configuration: {message}")]
    InvalidConfiguration { message: String },

    #[error("unsupported model format version {found} (expected {expected})")]
    UnsupportedVersion { found: u32, expected: u32 },

    #[error("failed to {operation}: {source}")]
    Io {
        operation: String,
        #[source]
        source: std::io::Error,
    },

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("failed to {operation}: {message}")]
    SerializationContext { operation: String, message: String },

    #[error("progress bar template error: {message}")]
    ProgressBarTemplate { message: String },
}

/// Convenience type alias for Results using the crate's Error type
pub type Result<T> = std::result::Result<T, Error>;

impl From<std::io::Error> for Error {
    fn from(source: std::io::Error) -> Self {
        Error::Io {
            operation: "IO operation".to_string(),
            source,
        }
    }
}

impl<E> From<TransitionError<E>> for Error
where
    E: std::error::Error + Send + Sync + 'static,
{
    fn from(err: TransitionError<E>) -> Self {
        Error::Transition(Box::new(err))
    }
}

/// Failure of [`BayesianAgent::transition`](crate::q_learning::BayesianAgent::transition).
///
/// `E` is the state's own apply error, which is passed through untouched.
#[derive(Error, Debug)]
pub enum TransitionError<E> {
    #[error("action '{action}' is not compatible with state '{state}'")]
    IncompatibleAction { state: StateId, action: ActionId },

    #[error(transparent)]
    Apply(E),
}
