use std::{io, path::PathBuf};

use ileq_core::InputError;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, CliError>;

/// Errors that stop the `ileq` command.
#[derive(Debug, Error)]
pub enum CliError {
    #[error("failed to read config {path}: {source}", path = path.display())]
    ReadConfig {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("invalid config {path}: {source}", path = path.display())]
    ParseConfig {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("invalid solver config: {0}")]
    Solver(&'static str),

    #[error(transparent)]
    Input(#[from] InputError),

    #[error("failed to serialize evaluation: {0}")]
    Json(#[from] serde_json::Error),

    #[error("failed to open window: {0}")]
    Gui(String),
}
