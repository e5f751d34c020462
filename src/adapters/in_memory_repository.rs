//! In-memory model repository for testing.
//!
//! Keeps MessagePack-encoded models in a shared map, so tests exercise the
//! same encoding without touching the file system.

use std::{
    collections::HashMap,
    path::Path,
    sync::{Arc, Mutex, MutexGuard},
};

use crate::{Result, error::Error, ports::ModelRepository, q_learning::SavedAgent};

/// In-memory repository for testing.
///
/// All clones share the same storage.
///
/// # Examples
///
/// ```
/// use bayesq::adapters::InMemoryRepository;
/// use bayesq::ports::ModelRepository;
/// use bayesq::q_learning::{BayesianAgent, SavedAgent};
/// use std::path::Path;
///
/// let repo = InMemoryRepository::new();
/// let agent = BayesianAgent::new(0.5, 0.9, 10);
///
/// repo.save(&SavedAgent::from_agent(&agent), Path::new("model"))?;
/// let loaded = repo.load(Path::new("model"))?;
/// # Ok::<(), bayesq::Error>(())
/// ```
#[derive(Clone, Default)]
pub struct InMemoryRepository {
    storage: Arc<Mutex<HashMap<String, Vec<u8>>>>,
}

impl InMemoryRepository {
    /// Create a new empty in-memory repository.
    pub fn new() -> Self {
        Self::default()
    }

    fn storage(&self) -> MutexGuard<'_, HashMap<String, Vec<u8>>> {
        self.storage
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    /// Number of models currently stored.
    pub fn count(&self) -> usize {
        self.storage().len()
    }

    pub fn clear(&self) {
        self.storage().clear();
    }

    pub fn contains(&self, path: &Path) -> bool {
        self.storage().contains_key(&key(path))
    }
}

fn key(path: &Path) -> String {
    path.to_string_lossy().to_string()
}

impl ModelRepository for InMemoryRepository {
    fn save(&self, model: &SavedAgent, path: &Path) -> Result<()> {
        let bytes = rmp_serde::to_vec_named(model).map_err(|e| Error::SerializationContext {
            operation: "serialize model for in-memory storage".to_string(),
            message: e.to_string(),
        })?;

        self.storage().insert(key(path), bytes);
        Ok(())
    }

    fn load(&self, path: &Path) -> Result<SavedAgent> {
        let storage = self.storage();
        let bytes = storage.get(&key(path)).ok_or_else(|| Error::Io {
            operation: format!("load model from in-memory storage at {path:?}"),
            source: std::io::Error::new(std::io::ErrorKind::NotFound, "key not found in memory"),
        })?;

        rmp_serde::from_slice(bytes).map_err(|e| Error::SerializationContext {
            operation: "deserialize model from in-memory storage".to_string(),
            message: e.to_string(),
        })
    }
}
