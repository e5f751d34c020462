//! JSON implementation of the model repository.
//!
//! Human-readable checkpoints; the `agent.qValues` member follows the
//! persisted value-table layout.

use std::{
    fs::File,
    io::{BufReader, BufWriter, Write},
    path::Path,
};

use tracing::info;

use crate::{Result, error::Error, ports::ModelRepository, q_learning::SavedAgent};

/// Pretty-printed JSON model repository.
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonRepository;

impl JsonRepository {
    pub fn new() -> Self {
        Self
    }
}

impl ModelRepository for JsonRepository {
    fn save(&self, model: &SavedAgent, path: &Path) -> Result<()> {
        let file = File::create(path).map_err(|source| Error::Io {
            operation: format!("create file {path:?}"),
            source,
        })?;
        let mut writer = BufWriter::new(file);
        serde_json::to_writer_pretty(&mut writer, model)?;
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
        let model: SavedAgent = serde_json::from_reader(BufReader::new(file))?;

        info!(path = %path.display(), records = model.agent.q_values.size(), "loaded model");
        Ok(model)
    }
}
