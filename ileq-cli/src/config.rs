//! Optional TOML file supplying default inputs and solver tolerances.
//!
//! ```toml
//! [a]
//! min = 1.0
//! max = 2.0
//! tag = "epistemic"
//!
//! [b]
//! min = 4.0
//! max = 6.0
//! tag = "ontic"
//!
//! [solver]
//! equality_rel_tol = 1e-9
//! ```

use std::{fs, path::Path};

use ileq_core::{Config, Tag};
use serde::Deserialize;

use crate::error::{CliError, Result};

/// Contents of a config file. Every key is optional.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct FileConfig {
    pub a: IntervalConfig,
    pub b: IntervalConfig,
    pub solver: Config,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct IntervalConfig {
    pub min: Option<f64>,
    pub max: Option<f64>,
    pub tag: Option<Tag>,
}

impl FileConfig {
    /// Reads and parses a config file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or is not valid TOML for
    /// this schema.
    pub fn load(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path).map_err(|source| CliError::ReadConfig {
            path: path.to_owned(),
            source,
        })?;
        Self::parse(&contents).map_err(|source| CliError::ParseConfig {
            path: path.to_owned(),
            source,
        })
    }

    pub fn parse(contents: &str) -> std::result::Result<Self, toml::de::Error> {
        toml::from_str(contents)
    }
}
