//! Configuration
//!
//! Defaults for the filter flags, a PCT to read declarations from, and fixed
//! declarations. Loaded from `--config`, else `./.applic.toml`, else the user
//! config file (see [`paths`]).

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::core::models::Definition;
use crate::paths;

/// Errors loading configuration
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The file could not be read
    #[error("cannot read config {path}: {source}")]
    Read {
        /// Config file
        path: PathBuf,
        /// Underlying error
        source: std::io::Error,
    },

    /// The file is not valid TOML for this schema
    #[error("invalid config {path}: {source}")]
    Parse {
        /// Config file
        path: PathBuf,
        /// Underlying error
        source: toml::de::Error,
    },
}

/// Configuration file contents
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Flag defaults
    #[serde(default)]
    pub defaults: Defaults,
    /// Product to load declarations from
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pct: Option<PctConfig>,
    /// Fixed declarations, applied before the PCT and the command line
    #[serde(default, rename = "assign", skip_serializing_if = "Vec::is_empty")]
    pub assignments: Vec<Definition>,
}

/// Defaults for filter flags
///
/// Command-line flags can only turn these on.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
#[allow(clippy::struct_excessive_bools)]
pub struct Defaults {
    /// Drop references that always hold
    pub clean: bool,
    /// Clean and simplify the statement group
    pub simplify: bool,
    /// Skip modules that do not apply as a whole
    pub whole_document: bool,
    /// Replace the top-level applicability with the declarations
    pub set_applic: bool,
    /// Display text for a replaced top-level applicability
    #[serde(skip_serializing_if = "Option::is_none")]
    pub applic_text: Option<String>,
}

/// A product in a PCT
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PctConfig {
    /// PCT file, relative to the config file
    pub path: PathBuf,
    /// Product id
    pub product: String,
}

impl Config {
    /// Parse configuration text
    ///
    /// `origin` is only used in error messages.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Parse`] for invalid TOML or unknown keys.
    pub fn parse(content: &str, origin: &Path) -> Result<Self, ConfigError> {
        toml::from_str(content).map_err(|source| ConfigError::Parse {
            path: origin.to_path_buf(),
            source,
        })
    }

    /// Load a configuration file
    ///
    /// A relative PCT path is resolved against the file's directory.
    ///
    /// # Errors
    ///
    /// Fails if the file cannot be read or parsed.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let mut config = Self::parse(&content, path)?;

        if let (Some(pct), Some(dir)) = (config.pct.as_mut(), path.parent()) {
            if pct.path.is_relative() {
                pct.path = dir.join(&pct.path);
            }
        }

        log::debug!("loaded config from {}", path.display());
        Ok(config)
    }

    /// Load the explicit file, else the first existing candidate for `dir`
    ///
    /// Without any file the default (empty) configuration is used.
    ///
    /// # Errors
    ///
    /// Fails if the chosen file cannot be read or parsed. An explicit path
    /// must exist.
    pub fn discover(explicit: Option<&Path>, dir: &Path) -> Result<Self, ConfigError> {
        if let Some(path) = explicit {
            return Self::load(path);
        }

        match paths::config_candidates(dir).into_iter().find(|p| p.is_file()) {
            Some(path) => Self::load(&path),
            None => {
                log::debug!("no config file found, using defaults");
                Ok(Self::default())
            },
        }
    }
}
