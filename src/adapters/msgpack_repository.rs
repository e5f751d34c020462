//! MessagePack implementation of the model repository.
//!
//! Compact binary checkpoints via rmp_serde. Structs are written as named
//! maps so optional fields can be omitted.

use std::{
    fs::File,
    io::{BufReader, BufWriter, Write},
    path::Path,
};

use tracing::info;

use crate::{Result, error::Error, ports::ModelRepository, q_learning::SavedAgent};

/// MessagePack-based model repository.
///
/// # Examples
///
/// ```no_run
/// use bayesq::adapters::MsgPackRepository;
/// use bayesq::ports::ModelRepository;
/// use bayesq::q_learning::{BayesianAgent, SavedAgent};
/// use std::path::Path;
///
/// let repo = MsgPackRepository;
/// let agent = BayesianAgent::new(0.5, 0.9, 10);
///
/// repo.save(&SavedAgent::from_agent(&agent), Path::new("trained.msgpack"))?;
/// let loaded = repo.load(Path::new("trained.msgpack"))?;
/// # Ok::<(), bayesq::Error>(())
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct MsgPackRepository;

impl MsgPackRepository {
    /// Create a new MessagePack repository.
    pub fn new() -> Self {
        Self
    }
}

impl ModelRepository for MsgPackRepository {
    fn save(&self, model: &SavedAgent, path: &Path) -> Result<()> {
        let file = File::create(path).map_err(|source| Error::Io {
            operation: format!("create file {path:?}"),
            source,
        })?;
        let mut writer = BufWriter::new(file);

        rmp_serde::encode::write_named(&mut writer, model).map_err(|e| {
            Error::SerializationContext {
                operation: "serialize model to MessagePack".to_string(),
                message: e.to_string(),
            }
        })?;
        writer.flush().map_err(|source| Error::Io {
            operation: format!("flush file {path:?}"),
            source,
        })?;

        info!(path = %path.display(), records = model.agent.q_values.size(), "saved model");
        Ok(())
    }

    fn load(&self, path: &Path) -> Result<SavedAgent> {
        let file = File::open(path).map_err(|source| Error::Io {
            operation: format!("open file {path:?}"),
            source,
        })?;

        let model: SavedAgent = rmp_serde::decode::from_read(BufReader::new(file)).map_err(
            |e| Error::SerializationContext {
                operation: "deserialize model from MessagePack".to_string(),
                message: e.to_string(),
            },
        )?;

        info!(path = %path.display(), records = model.agent.q_values.size(), "loaded model");
        Ok(model)
    }
}
