//! Shared configuration for CLI commands

use std::path::Path;

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

use crate::{
    adapters::{JsonRepository, MsgPackRepository},
    app::{App, AppBuilder},
};

/// On-disk model format
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "snake_case")]
pub enum ModelFormat {
    Msgpack,
    Json,
}

impl ModelFormat {
    /// Explicit format, else `.json` files are JSON and everything else MessagePack.
    pub fn resolve(explicit: Option<ModelFormat>, path: &Path) -> ModelFormat {
        explicit.unwrap_or_else(|| {
            match path.extension().and_then(|ext| ext.to_str()) {
                Some(ext) if ext.eq_ignore_ascii_case("json") => ModelFormat::Json,
                _ => ModelFormat::Msgpack,
            }
        })
    }

    /// App wired with the matching repository.
    pub fn app(self, seed: Option<u64>) -> App {
        let builder = match self {
            ModelFormat::Msgpack => AppBuilder::new().with_repository(MsgPackRepository::new()),
            ModelFormat::Json => AppBuilder::new().with_repository(JsonRepository::new()),
        };
        match seed {
            Some(seed) => builder.with_default_seed(seed).build(),
            None => builder.build(),
        }
    }
}
